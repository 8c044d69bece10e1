use super::common::{Extra, State, Tags};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tool_framework::ArgValue;

/// Certificate subject fields (`Country`, `Organization`, `CommonName`, ...).
pub type Subject = BTreeMap<String, String>;

/// Unit of a [`Validity`] period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidityUnit {
    Days,
    Months,
    Years,
    EndDate,
    Absolute,
}

impl ValidityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityUnit::Days => "DAYS",
            ValidityUnit::Months => "MONTHS",
            ValidityUnit::Years => "YEARS",
            ValidityUnit::EndDate => "END_DATE",
            ValidityUnit::Absolute => "ABSOLUTE",
        }
    }
}

/// A certificate validity period, `{"Type": ..., "Value": ...}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    #[serde(rename = "Type")]
    pub unit: ValidityUnit,
    #[serde(rename = "Value")]
    pub value: u64,
}

impl Validity {
    pub fn days(value: u64) -> Self {
        Self {
            unit: ValidityUnit::Days,
            value,
        }
    }

    pub fn years(value: u64) -> Self {
        Self {
            unit: ValidityUnit::Years,
            value,
        }
    }
}

impl ArgValue for Validity {
    fn to_arg(&self) -> Value {
        json!({ "Type": self.unit.as_str(), "Value": self.value })
    }
}

/// An IAM role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IamRole {
    pub name: String,
    pub state: State,
    pub assume_role_policy_document: Option<Value>,
    pub managed_policies: Option<Vec<String>>,
    pub max_session_duration: Option<u32>,
    /// Defaults to `/`.
    pub path: Option<String>,
    pub description: Option<String>,
    pub permissions_boundary: Option<String>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    /// Defaults to `true`.
    pub purge_policies: Option<bool>,
    /// Defaults to `true`.
    pub create_instance_profile: Option<bool>,
    pub delete_instance_profile: Option<bool>,
    /// Defaults to `true`.
    pub wait: Option<bool>,
    /// Seconds; defaults to 120.
    pub wait_timeout: Option<u32>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl IamRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// An IAM managed policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IamPolicy {
    pub name: String,
    pub state: State,
    pub policy: Option<Value>,
    /// Defaults to `/`.
    pub path: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub only_version: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl IamPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A KMS key, addressed by `alias` and/or `key_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KmsKey {
    pub alias: Option<String>,
    pub key_id: Option<String>,
    pub state: State,
    pub description: Option<String>,
    /// Defaults to `true`.
    pub enabled: Option<bool>,
    pub multi_region: Option<bool>,
    /// Sent whenever set, including `false`.
    pub enable_key_rotation: Option<bool>,
    /// Defaults to `SYMMETRIC_DEFAULT`.
    pub key_spec: Option<String>,
    /// Defaults to `ENCRYPT_DECRYPT`.
    pub key_usage: Option<String>,
    /// Days before deletion; sent whenever set.
    pub pending_window: Option<u32>,
    pub policy: Option<Value>,
    pub grants: Option<Vec<Value>>,
    pub purge_grants: Option<bool>,
    pub tags: Option<Tags>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl KmsKey {
    pub fn with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Default::default()
        }
    }
}

/// An ACM certificate, either imported from PEM content or referenced by ARN.
///
/// When both are supplied the PEM content wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcmCertificate {
    pub name_tag: Option<String>,
    pub domain_name: Option<String>,
    pub certificate_arn: Option<String>,
    pub state: State,
    pub certificate: Option<String>,
    pub private_key: Option<String>,
    pub certificate_chain: Option<String>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// An ACM private certificate authority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcmPrivateCa {
    pub state: State,
    /// Sent as `type`; defaults to `ROOT`.
    pub ca_type: Option<String>,
    /// Defaults to `RSA_2048`.
    pub key_algorithm: Option<String>,
    /// Defaults to `SHA256WITHRSA`.
    pub signing_algorithm: Option<String>,
    pub subject: Option<Subject>,
    /// Sent as `validity`; defaults to 10 years.
    pub validity_period: Option<Validity>,
    /// Defaults to `GENERAL_PURPOSE`.
    pub usage_mode: Option<String>,
    pub tags: Option<Tags>,
    /// Sent as `certificate`.
    pub ca_certificate: Option<String>,
    /// Sent as `certificate_chain`.
    pub ca_certificate_chain: Option<String>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A client certificate issued from a private CA for one AAP installation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateGenerator {
    pub customer_id: String,
    pub installation_id: String,
    pub ca_arn: String,
    /// Defaults to 2048.
    pub key_size: Option<u32>,
    /// Defaults to 730 days.
    pub validity_period: Option<Validity>,
    /// Defaults to `SHA256WITHRSA`.
    pub signing_algorithm: Option<String>,
    pub subject_additional_fields: Option<Subject>,
    pub store_private_key: Option<bool>,
    /// Defaults to `pem`.
    pub output_format: Option<String>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CertificateGenerator {
    pub fn new(
        customer_id: impl Into<String>,
        installation_id: impl Into<String>,
        ca_arn: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            installation_id: installation_id.into(),
            ca_arn: ca_arn.into(),
            ..Default::default()
        }
    }
}
