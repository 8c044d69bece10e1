//! # Security Group
//!
//! Rule builders produce the module's rule objects:
//! `{"proto", "ports", "rule_desc"?, "cidr_ip" | "group_id"}`. The source is the CIDR
//! when given, else the source group, else `0.0.0.0/0`.

use crate::model::common::require;
use crate::model::SecurityGroup;
use serde_json::{json, Map, Value};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for SecurityGroup {
    const NAME: &'static str = "ec2_security_group";
    const MODULE: &'static str = "ec2_security_group";
    const CATEGORY: ToolCategory = ToolCategory::Networking;
    const DESCRIPTION: &'static str = "Manage AWS EC2 security groups";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;
        require(Self::NAME, "description", &self.description)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("description", &self.description)
            .insert("state", self.state)
            .insert("purge_rules", self.purge_rules.unwrap_or(true))
            .insert("purge_rules_egress", self.purge_rules_egress.unwrap_or(true))
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert_present("vpc_id", &self.vpc_id)
            .insert_present("group_id", &self.group_id)
            .insert_present("rules", &self.rules)
            .insert_present("rules_egress", &self.rules_egress)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

/// Where a rule's traffic may come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSource {
    pub cidr_ip: Option<String>,
    pub source_group_id: Option<String>,
    pub description: Option<String>,
}

impl RuleSource {
    pub fn cidr(cidr_ip: impl Into<String>) -> Self {
        Self {
            cidr_ip: Some(cidr_ip.into()),
            ..Default::default()
        }
    }

    pub fn group(group_id: impl Into<String>) -> Self {
        Self {
            source_group_id: Some(group_id.into()),
            ..Default::default()
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single-port rule for any protocol.
pub fn custom_rule(protocol: &str, port: u16, source: &RuleSource) -> Value {
    let mut rule = Map::new();
    rule.insert("proto".into(), json!(protocol));
    rule.insert("ports".into(), json!([port]));
    if let Some(desc) = source.description.as_deref().filter(|d| !d.is_empty()) {
        rule.insert("rule_desc".into(), json!(desc));
    }

    let cidr = source.cidr_ip.as_deref().filter(|c| !c.is_empty());
    let group = source.source_group_id.as_deref().filter(|g| !g.is_empty());
    match (cidr, group) {
        (Some(cidr), _) => rule.insert("cidr_ip".into(), json!(cidr)),
        (None, Some(group)) => rule.insert("group_id".into(), json!(group)),
        (None, None) => rule.insert("cidr_ip".into(), json!("0.0.0.0/0")),
    };
    Value::Object(rule)
}

/// TCP rule for HTTPS, port 443 unless overridden.
pub fn https_rule(port: Option<u16>, source: &RuleSource) -> Value {
    custom_rule("tcp", port.unwrap_or(443), source)
}

/// TCP rule for HTTP, port 80 unless overridden.
pub fn http_rule(port: Option<u16>, source: &RuleSource) -> Value {
    custom_rule("tcp", port.unwrap_or(80), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_defaults_to_open_cidr() {
        assert_eq!(
            https_rule(None, &RuleSource::default()),
            json!({"proto": "tcp", "ports": [443], "cidr_ip": "0.0.0.0/0"})
        );
    }

    #[test]
    fn test_cidr_beats_source_group() {
        let source = RuleSource {
            cidr_ip: Some("10.0.0.0/8".into()),
            source_group_id: Some("sg-1".into()),
            description: Some("internal".into()),
        };
        assert_eq!(
            http_rule(Some(8080), &source),
            json!({"proto": "tcp", "ports": [8080], "rule_desc": "internal", "cidr_ip": "10.0.0.0/8"})
        );
        assert_eq!(
            custom_rule("udp", 53, &RuleSource::group("sg-1")),
            json!({"proto": "udp", "ports": [53], "group_id": "sg-1"})
        );
    }

    #[test]
    fn test_group_with_rules() {
        let mut sg = SecurityGroup::new("web", "Web tier");
        sg.vpc_id = Some("vpc-1".into());
        sg.rules = Some(vec![https_rule(None, &RuleSource::cidr("0.0.0.0/0").describe("public"))]);
        sg.rules_egress = Some(Vec::new());

        let args = sg.normalize().unwrap();
        assert_eq!(args.get("purge_rules"), Some(&json!(true)));
        assert_eq!(args.get("rules").and_then(Value::as_array).map(Vec::len), Some(1));
        assert!(!args.contains_key("rules_egress"));
    }

    #[test]
    fn test_description_required() {
        assert!(matches!(
            SecurityGroup::new("web", "").normalize(),
            Err(NormalizeError::MissingField { field: "description", .. })
        ));
    }
}
