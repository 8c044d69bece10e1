use super::common::{Extra, State, Tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tool_framework::string_arg;

/// How a Lambda function's code is packaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageType {
    #[default]
    Zip,
    Image,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Zip => "Zip",
            PackageType::Image => "Image",
        }
    }
}

string_arg!(PackageType);

/// A Lambda function.
///
/// Code comes from exactly one source, in priority order: `zip_file`, then the
/// `s3_bucket` + `s3_key` pair, then `image_uri`. `runtime` and `handler` are only
/// sent for [`PackageType::Zip`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LambdaFunction {
    pub name: String,
    pub state: State,
    pub runtime: Option<String>,
    pub role: Option<String>,
    pub handler: Option<String>,
    pub zip_file: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
    pub s3_object_version: Option<String>,
    pub image_uri: Option<String>,
    pub package_type: PackageType,
    pub description: Option<String>,
    pub timeout: Option<u32>,
    pub memory_size: Option<u32>,
    /// Sent as `environment_variables`.
    pub environment: Option<Tags>,
    pub dead_letter_config: Option<Value>,
    pub tracing_config: Option<Value>,
    pub kms_key_arn: Option<String>,
    pub layers: Option<Vec<String>>,
    pub vpc_config: Option<Value>,
    /// Zero is meaningful (throttles the function) and is sent.
    pub reserved_concurrency: Option<i64>,
    pub provisioned_concurrency_config: Option<Value>,
    pub image_config: Option<Value>,
    pub architectures: Option<Vec<String>>,
    pub ephemeral_storage: Option<Value>,
    pub file_system_configs: Option<Vec<Value>>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl LambdaFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A permission statement on a Lambda function's resource policy.
///
/// `alias` and `version` both qualify the target; when both are given the alias wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LambdaPolicy {
    pub function_name: String,
    pub state: State,
    pub alias: Option<String>,
    pub version: Option<u32>,
    pub statement_id: Option<String>,
    pub action: Option<String>,
    pub principal: Option<String>,
    pub source_arn: Option<String>,
    pub source_account: Option<String>,
    pub event_source_token: Option<String>,
    pub qualifier: Option<String>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl LambdaPolicy {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            ..Default::default()
        }
    }
}
