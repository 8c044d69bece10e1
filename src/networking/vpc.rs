use crate::model::common::require;
use crate::model::Vpc;
use tool_framework::{ExecutionTarget, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for Vpc {
    const NAME: &'static str = "ec2_vpc_net";
    const MODULE: &'static str = "ec2_vpc_net";
    const CATEGORY: ToolCategory = ToolCategory::Networking;
    const DESCRIPTION: &'static str = "Manage AWS Virtual Private Cloud (VPC)";
    const TARGET: ExecutionTarget = ExecutionTarget::Local;

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;
        require(Self::NAME, "cidr_block", &self.cidr_block)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("cidr_block", &self.cidr_block)
            .insert("state", self.state)
            .insert("dns_hostnames", self.dns_hostnames.unwrap_or(true))
            .insert("dns_support", self.dns_support.unwrap_or(true))
            .insert(
                "tenancy",
                self.instance_tenancy.as_deref().unwrap_or("default"),
            )
            .insert("multi_ok", self.multi_ok.unwrap_or(false))
            .insert("purge_cidrs", self.purge_cidrs.unwrap_or(false))
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert_present("tags", &self.tags)
            .insert_present("dhcp_opts_id", &self.dhcp_opts_id)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_defaults_and_tenancy_rename() {
        let args = Vpc::new("main", "10.0.0.0/16").normalize().unwrap();
        assert_eq!(
            args.into_value(),
            json!({
                "name": "main",
                "cidr_block": "10.0.0.0/16",
                "state": "present",
                "dns_hostnames": true,
                "dns_support": true,
                "tenancy": "default",
                "multi_ok": false,
                "purge_cidrs": false,
                "purge_tags": true
            })
        );
    }

    #[test]
    fn test_dedicated_tenancy() {
        let mut vpc = Vpc::new("main", "10.0.0.0/16");
        vpc.instance_tenancy = Some("dedicated".into());
        vpc.dhcp_opts_id = Some("dopt-1".into());
        let args = vpc.normalize().unwrap();
        assert_eq!(args.get("tenancy"), Some(&json!("dedicated")));
        assert!(!args.contains_key("instance_tenancy"));
        assert_eq!(args.get("dhcp_opts_id"), Some(&json!("dopt-1")));
    }

    #[test]
    fn test_cidr_block_required() {
        assert!(matches!(
            Vpc::new("main", "").normalize(),
            Err(NormalizeError::MissingField { field: "cidr_block", .. })
        ));
    }
}
