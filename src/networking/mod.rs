//! Networking tools: VPCs, subnets, internet gateways, security groups and
//! application load balancers.

pub mod internet_gateway;
pub mod load_balancer;
pub mod security_group;
pub mod subnet;
pub mod vpc;

pub use load_balancer::{
    https_listener, mtls_config, target_group_action, target_group_action_of, HttpsListener,
};
pub use security_group::{custom_rule, http_rule, https_rule, RuleSource};
