use super::common::{Extra, State, Tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tool_framework::string_arg;

/// DynamoDB capacity billing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMode {
    #[default]
    PayPerRequest,
    Provisioned,
}

impl BillingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingMode::PayPerRequest => "PAY_PER_REQUEST",
            BillingMode::Provisioned => "PROVISIONED",
        }
    }
}

/// Scalar type of a key attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    #[default]
    S,
    N,
    B,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::S => "S",
            AttributeType::N => "N",
            AttributeType::B => "B",
        }
    }
}

string_arg!(BillingMode, AttributeType);

/// A DynamoDB table.
///
/// `read_capacity` and `write_capacity` only apply under
/// [`BillingMode::Provisioned`]; they are dropped otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamoDbTable {
    pub name: String,
    pub state: State,
    pub billing_mode: BillingMode,
    pub hash_key_name: Option<String>,
    pub hash_key_type: AttributeType,
    pub range_key_name: Option<String>,
    pub range_key_type: AttributeType,
    pub read_capacity: Option<u32>,
    pub write_capacity: Option<u32>,
    /// Sent as `global_indexes`.
    pub global_secondary_indexes: Option<Vec<Value>>,
    /// Sent as `local_indexes`.
    pub local_secondary_indexes: Option<Vec<Value>>,
    pub stream_specification: Option<Value>,
    /// Defaults to `true`.
    pub point_in_time_recovery: Option<bool>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub wait: Option<bool>,
    /// Seconds; defaults to 600.
    pub wait_timeout: Option<u32>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl DynamoDbTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the partition key.
    pub fn with_hash_key(mut self, name: impl Into<String>, attr_type: AttributeType) -> Self {
        self.hash_key_name = Some(name.into());
        self.hash_key_type = attr_type;
        self
    }

    /// Sets the sort key.
    pub fn with_range_key(mut self, name: impl Into<String>, attr_type: AttributeType) -> Self {
        self.range_key_name = Some(name.into());
        self.range_key_type = attr_type;
        self
    }
}
