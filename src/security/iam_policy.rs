use crate::model::common::require;
use crate::model::IamPolicy;
use tool_framework::{ExecutionTarget, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for IamPolicy {
    const NAME: &'static str = "iam_policy";
    const MODULE: &'static str = "iam_policy";
    const CATEGORY: ToolCategory = ToolCategory::Security;
    const DESCRIPTION: &'static str = "Manage AWS IAM managed policies";
    const TARGET: ExecutionTarget = ExecutionTarget::Local;

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("path", self.path.as_deref().unwrap_or("/"))
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert("only_version", self.only_version.unwrap_or(false))
            .insert_present("policy", &self.policy)
            .insert_present("description", &self.description)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}
