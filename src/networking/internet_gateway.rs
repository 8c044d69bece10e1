use crate::model::common::require;
use crate::model::InternetGateway;
use tool_framework::{ExecutionTarget, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for InternetGateway {
    const NAME: &'static str = "ec2_vpc_igw";
    const MODULE: &'static str = "ec2_vpc_igw";
    const CATEGORY: ToolCategory = ToolCategory::Networking;
    const DESCRIPTION: &'static str = "Manage AWS VPC Internet Gateway";
    const TARGET: ExecutionTarget = ExecutionTarget::Local;

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "vpc_id", &self.vpc_id)?;

        let mut args = ModuleArgs::new();
        args.insert("vpc_id", &self.vpc_id)
            .insert("state", self.state)
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}
