//! # Application Load Balancer
//!
//! Field rules for `elb_application_lb` and builders for listener objects in the
//! module's API-cased form (`Protocol`, `Port`, `DefaultActions`, ...).

use crate::model::common::require;
use crate::model::ApplicationLoadBalancer;
use serde_json::{json, Map, Value};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

pub const DEFAULT_SSL_POLICY: &str = "ELBSecurityPolicy-TLS-1-2-2017-01";

impl ApplicationLoadBalancer {
    /// `{"enabled": true, "s3_bucket"?, "s3_prefix"?}`, or `None` when logging is off.
    fn access_logs(&self) -> Option<Value> {
        if !self.access_logs_enabled {
            return None;
        }
        let mut logs = ModuleArgs::new();
        logs.insert("enabled", true)
            .insert_present("s3_bucket", &self.access_logs_s3_bucket)
            .insert_present("s3_prefix", &self.access_logs_s3_prefix);
        Some(logs.into_value())
    }
}

impl Tool for ApplicationLoadBalancer {
    const NAME: &'static str = "elb_application_lb";
    const MODULE: &'static str = "elb_application_lb";
    const CATEGORY: ToolCategory = ToolCategory::Networking;
    const DESCRIPTION: &'static str = "Manage AWS Application Load Balancer for HTTP/HTTPS traffic";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("scheme", self.scheme.as_deref().unwrap_or("internet-facing"))
            .insert("type", self.lb_type.as_deref().unwrap_or("application"))
            .insert(
                "ip_address_type",
                self.ip_address_type.as_deref().unwrap_or("ipv4"),
            )
            .insert(
                "deletion_protection",
                self.deletion_protection.unwrap_or(false),
            )
            .insert("wait", self.wait.unwrap_or(true))
            .insert("wait_timeout", self.wait_timeout.unwrap_or(320))
            .insert("purge_listeners", self.purge_listeners.unwrap_or(true))
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert("enable_http2", self.enable_http2.unwrap_or(true))
            .insert("waf_fail_open", self.waf_fail_open.unwrap_or(false))
            .insert_present("subnets", &self.subnets)
            .insert_present("security_groups", &self.security_groups)
            .insert_some("idle_timeout", &self.idle_timeout)
            .insert_some("access_logs", &self.access_logs())
            .insert_present("listeners", &self.listeners)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

/// Options for an HTTPS listener beyond its port.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpsListener {
    pub certificate_arn: Option<String>,
    /// Defaults to [`DEFAULT_SSL_POLICY`].
    pub ssl_policy: Option<String>,
    pub default_actions: Vec<Value>,
    pub rules: Vec<Value>,
    pub mutual_authentication: Option<Value>,
}

/// An HTTPS listener, port 443 unless overridden.
pub fn https_listener(port: Option<u16>, options: HttpsListener) -> Value {
    let mut listener = Map::new();
    listener.insert("Protocol".into(), json!("HTTPS"));
    listener.insert("Port".into(), json!(port.unwrap_or(443)));
    listener.insert(
        "SslPolicy".into(),
        json!(options.ssl_policy.as_deref().unwrap_or(DEFAULT_SSL_POLICY)),
    );
    if let Some(arn) = options.certificate_arn.filter(|a| !a.is_empty()) {
        listener.insert("Certificates".into(), json!([{ "CertificateArn": arn }]));
    }
    if !options.default_actions.is_empty() {
        listener.insert("DefaultActions".into(), Value::Array(options.default_actions));
    }
    if !options.rules.is_empty() {
        listener.insert("Rules".into(), Value::Array(options.rules));
    }
    if let Some(mtls) = options.mutual_authentication {
        listener.insert("MutualAuthentication".into(), mtls);
    }
    Value::Object(listener)
}

/// A `forward` action to a target group.
pub fn target_group_action(target_group_arn: &str) -> Value {
    target_group_action_of("forward", target_group_arn)
}

pub fn target_group_action_of(action_type: &str, target_group_arn: &str) -> Value {
    json!({ "Type": action_type, "TargetGroupArn": target_group_arn })
}

/// Mutual TLS settings verifying clients against a trust store.
pub fn mtls_config(trust_store_arn: &str, ignore_client_certificate_expiry: bool) -> Value {
    json!({
        "Mode": "verify",
        "TrustStoreArn": trust_store_arn,
        "IgnoreClientCertificateExpiry": ignore_client_certificate_expiry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_access_logs_only_when_enabled() {
        let mut alb = ApplicationLoadBalancer::new("web");
        alb.access_logs_s3_bucket = Some("logs".into());
        assert!(!alb.normalize().unwrap().contains_key("access_logs"));

        alb.access_logs_enabled = true;
        assert_eq!(
            alb.normalize().unwrap().get("access_logs"),
            Some(&json!({"enabled": true, "s3_bucket": "logs"}))
        );
    }

    #[test]
    fn test_idle_timeout_and_defaults() {
        let mut alb = ApplicationLoadBalancer::new("web");
        alb.idle_timeout = Some(0);
        let args = alb.normalize().unwrap();
        assert_eq!(args.get("idle_timeout"), Some(&json!(0)));
        assert_eq!(args.get("scheme"), Some(&json!("internet-facing")));
        assert_eq!(args.get("type"), Some(&json!("application")));
        assert_eq!(args.get("wait_timeout"), Some(&json!(320)));
        assert_eq!(args.get("enable_http2"), Some(&json!(true)));
    }

    #[test]
    fn test_https_listener_with_mtls() {
        let listener = https_listener(
            None,
            HttpsListener {
                certificate_arn: Some("arn:aws:acm:cert".into()),
                default_actions: vec![target_group_action("arn:aws:tg")],
                mutual_authentication: Some(mtls_config("arn:aws:ts", false)),
                ..Default::default()
            },
        );
        assert_eq!(
            listener,
            json!({
                "Protocol": "HTTPS",
                "Port": 443,
                "SslPolicy": "ELBSecurityPolicy-TLS-1-2-2017-01",
                "Certificates": [{"CertificateArn": "arn:aws:acm:cert"}],
                "DefaultActions": [{"Type": "forward", "TargetGroupArn": "arn:aws:tg"}],
                "MutualAuthentication": {
                    "Mode": "verify",
                    "TrustStoreArn": "arn:aws:ts",
                    "IgnoreClientCertificateExpiry": false
                }
            })
        );
    }

    #[test]
    fn test_bare_listener_omits_optional_parts() {
        let listener = https_listener(Some(8443), HttpsListener::default());
        assert_eq!(
            listener,
            json!({"Protocol": "HTTPS", "Port": 8443, "SslPolicy": DEFAULT_SSL_POLICY})
        );
    }
}
