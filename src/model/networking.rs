use super::common::{Extra, State, Tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A VPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vpc {
    pub name: String,
    pub cidr_block: String,
    pub state: State,
    /// Defaults to `true`.
    pub dns_hostnames: Option<bool>,
    /// Defaults to `true`.
    pub dns_support: Option<bool>,
    /// Sent as `tenancy`; defaults to `default`.
    pub instance_tenancy: Option<String>,
    pub multi_ok: Option<bool>,
    pub purge_cidrs: Option<bool>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub dhcp_opts_id: Option<String>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Vpc {
    pub fn new(name: impl Into<String>, cidr_block: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cidr_block: cidr_block.into(),
            ..Default::default()
        }
    }
}

/// A VPC subnet.
///
/// `az` and `availability_zone` name the same field; `az` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subnet {
    pub vpc_id: String,
    pub cidr: String,
    pub state: State,
    pub availability_zone: Option<String>,
    pub az: Option<String>,
    pub map_public: Option<bool>,
    pub assign_instances_ipv6: Option<bool>,
    pub ipv6_cidr: Option<String>,
    pub outpost_arn: Option<String>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    /// Defaults to `true`.
    pub wait: Option<bool>,
    /// Seconds; defaults to 300.
    pub wait_timeout: Option<u32>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Subnet {
    pub fn new(vpc_id: impl Into<String>, cidr: impl Into<String>) -> Self {
        Self {
            vpc_id: vpc_id.into(),
            cidr: cidr.into(),
            ..Default::default()
        }
    }
}

/// An internet gateway attached to a VPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetGateway {
    pub vpc_id: String,
    pub state: State,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl InternetGateway {
    pub fn new(vpc_id: impl Into<String>) -> Self {
        Self {
            vpc_id: vpc_id.into(),
            ..Default::default()
        }
    }
}

/// An EC2 security group.
///
/// Rules are free-form module rule objects; see
/// [`security_group`](crate::networking::security_group) for builders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroup {
    pub name: String,
    pub description: String,
    pub vpc_id: Option<String>,
    pub state: State,
    pub group_id: Option<String>,
    pub rules: Option<Vec<Value>>,
    pub rules_egress: Option<Vec<Value>>,
    /// Defaults to `true`.
    pub purge_rules: Option<bool>,
    /// Defaults to `true`.
    pub purge_rules_egress: Option<bool>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    pub tags: Option<Tags>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl SecurityGroup {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// An application load balancer.
///
/// The `access_logs_*` fields are folded into one `access_logs` object, sent only
/// when `access_logs_enabled` is true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationLoadBalancer {
    pub name: String,
    pub state: State,
    /// Defaults to `internet-facing`.
    pub scheme: Option<String>,
    pub subnets: Option<Vec<String>>,
    pub security_groups: Option<Vec<String>>,
    /// Defaults to `ipv4`.
    pub ip_address_type: Option<String>,
    /// Defaults to `application`.
    #[serde(rename = "type")]
    pub lb_type: Option<String>,
    pub deletion_protection: Option<bool>,
    /// Seconds; sent whenever set.
    pub idle_timeout: Option<u32>,
    pub access_logs_enabled: bool,
    pub access_logs_s3_bucket: Option<String>,
    pub access_logs_s3_prefix: Option<String>,
    pub listeners: Option<Vec<Value>>,
    pub tags: Option<Tags>,
    /// Defaults to `true`.
    pub wait: Option<bool>,
    /// Seconds; defaults to 320.
    pub wait_timeout: Option<u32>,
    /// Defaults to `true`.
    pub purge_listeners: Option<bool>,
    /// Defaults to `true`.
    pub purge_tags: Option<bool>,
    /// Defaults to `true`.
    pub enable_http2: Option<bool>,
    pub waf_fail_open: Option<bool>,
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ApplicationLoadBalancer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
