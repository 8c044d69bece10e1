use crate::model::common::require;
use crate::model::Subnet;
use tool_framework::{first_present, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for Subnet {
    const NAME: &'static str = "ec2_vpc_subnet";
    const MODULE: &'static str = "ec2_vpc_subnet";
    const CATEGORY: ToolCategory = ToolCategory::Networking;
    const DESCRIPTION: &'static str = "Manage AWS VPC subnets";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "vpc_id", &self.vpc_id)?;
        require(Self::NAME, "cidr", &self.cidr)?;

        let az = first_present(&[&self.az, &self.availability_zone]).cloned();

        let mut args = ModuleArgs::new();
        args.insert("vpc_id", &self.vpc_id)
            .insert("cidr", &self.cidr)
            .insert("state", self.state)
            .insert("map_public", self.map_public.unwrap_or(false))
            .insert(
                "assign_instances_ipv6",
                self.assign_instances_ipv6.unwrap_or(false),
            )
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert("wait", self.wait.unwrap_or(true))
            .insert("wait_timeout", self.wait_timeout.unwrap_or(300))
            .insert_present("az", &az)
            .insert_present("ipv6_cidr", &self.ipv6_cidr)
            .insert_present("outpost_arn", &self.outpost_arn)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_alias_wins() {
        let mut subnet = Subnet::new("v", "c");
        subnet.az = Some("us-east-1a".into());
        subnet.availability_zone = Some("us-east-1b".into());

        let args = subnet.normalize().unwrap();
        assert_eq!(args.get("az"), Some(&json!("us-east-1a")));
        assert!(!args.contains_key("availability_zone"));
    }

    #[test]
    fn test_long_name_used_when_alias_absent() {
        let mut subnet = Subnet::new("v", "c");
        subnet.az = Some(String::new());
        subnet.availability_zone = Some("us-east-1b".into());
        assert_eq!(subnet.normalize().unwrap().get("az"), Some(&json!("us-east-1b")));
    }

    #[test]
    fn test_defaults() {
        let args = Subnet::new("vpc-1", "10.0.1.0/24").normalize().unwrap();
        assert_eq!(args.get("wait_timeout"), Some(&json!(300)));
        assert_eq!(args.get("map_public"), Some(&json!(false)));
        assert!(!args.contains_key("az"));
    }
}
