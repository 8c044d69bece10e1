use crate::model::common::require;
use crate::model::IamRole;
use crate::policy;
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for IamRole {
    const NAME: &'static str = "iam_role";
    const MODULE: &'static str = "iam_role";
    const CATEGORY: ToolCategory = ToolCategory::Security;
    const DESCRIPTION: &'static str = "Manage AWS IAM roles";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("path", self.path.as_deref().unwrap_or("/"))
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert("purge_policies", self.purge_policies.unwrap_or(true))
            .insert(
                "create_instance_profile",
                self.create_instance_profile.unwrap_or(true),
            )
            .insert(
                "delete_instance_profile",
                self.delete_instance_profile.unwrap_or(false),
            )
            .insert("wait", self.wait.unwrap_or(true))
            .insert("wait_timeout", self.wait_timeout.unwrap_or(120))
            .insert_present(
                "assume_role_policy_document",
                &self.assume_role_policy_document,
            )
            .insert_present("managed_policies", &self.managed_policies)
            .insert_present("max_session_duration", &self.max_session_duration)
            .insert_present("description", &self.description)
            .insert_present("permissions_boundary", &self.permissions_boundary)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

/// A role Lambda can assume, with the given managed policies attached.
pub fn lambda_execution_role(name: impl Into<String>, managed_policies: Vec<String>) -> IamRole {
    IamRole {
        assume_role_policy_document: Some(policy::lambda_trust_policy().into()),
        managed_policies: Some(managed_policies),
        ..IamRole::new(name)
    }
}
