//! # Resource Requests
//!
//! [`ResourceRequest`] wraps one config per resource kind behind a `kind`
//! discriminator, so requests can be read from JSON and dispatched without knowing
//! the kind up front:
//!
//! ```json
//! { "kind": "subnet", "vpc_id": "vpc-1", "cidr": "10.0.1.0/24", "az": "us-east-1a" }
//! ```
//!
//! Unknown fields are kept in the config's `extra` map and forwarded as-is.

use super::*;
use serde::{Deserialize, Serialize};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolInfo};

macro_rules! define_resource_request {
    ($($variant:ident($config:ty)),* $(,)?) => {
        /// A request for one resource kind.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind", rename_all = "snake_case")]
        pub enum ResourceRequest {
            $($variant($config),)*
        }

        impl ResourceRequest {
            /// Every accepted `kind` value.
            pub const KINDS: &'static [&'static str] = &[
                $(paste::paste!(stringify!([<$variant:snake>])),)*
            ];

            /// The `kind` discriminator of this request.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(ResourceRequest::$variant(_) => paste::paste!(stringify!([<$variant:snake>])),)*
                }
            }

            pub fn info(&self) -> ToolInfo {
                match self {
                    $(ResourceRequest::$variant(_) => ToolInfo::of::<$config>(),)*
                }
            }

            pub fn module_args(&self, mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
                match self {
                    $(ResourceRequest::$variant(config) => config.module_args(mode),)*
                }
            }

            pub fn normalize(&self) -> Result<ModuleArgs, NormalizeError> {
                self.module_args(ResolutionMode::Lenient)
            }
        }

        $(
            impl From<$config> for ResourceRequest {
                fn from(config: $config) -> Self {
                    ResourceRequest::$variant(config)
                }
            }
        )*
    };
}

resource_kinds!(define_resource_request);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_kind_tag_selects_config() {
        let request: ResourceRequest = serde_json::from_value(json!({
            "kind": "dynamodb_table",
            "name": "orders",
            "hash_key_name": "id"
        }))
        .unwrap();

        assert_eq!(request.kind(), "dynamodb_table");
        assert_eq!(request.info().module, "dynamodb_table");
        assert!(matches!(request, ResourceRequest::DynamodbTable(ref t) if t.name == "orders"));
    }

    #[test]
    fn test_unknown_fields_reach_module_args() {
        let request: ResourceRequest = serde_json::from_value(json!({
            "kind": "log_group",
            "log_group_name": "/app",
            "extra_field": "y"
        }))
        .unwrap();

        let args = request.normalize().unwrap();
        assert_eq!(args.get("extra_field"), Some(&json!("y")));
        assert!(!args.contains_key("kind"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = serde_json::from_value::<ResourceRequest>(json!({"kind": "ec2_instance"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_kinds_cover_every_variant() {
        assert_eq!(ResourceRequest::KINDS.len(), 17);
        assert_eq!(ResourceRequest::from(S3Bucket::new("b")).kind(), "s3_bucket");
        assert_eq!(
            ResourceRequest::from(ApplicationLoadBalancer::new("web")).kind(),
            "application_load_balancer"
        );
        assert!(ResourceRequest::KINDS.contains(&"acm_private_ca"));
    }

    #[test]
    fn test_normalizing_twice_is_identical() {
        let request = ResourceRequest::from(Subnet::new("vpc-1", "10.0.1.0/24"));
        let first = serde_json::to_string(&request.normalize().unwrap()).unwrap();
        let second = serde_json::to_string(&request.normalize().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
