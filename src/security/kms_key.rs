use crate::model::KmsKey;
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for KmsKey {
    const NAME: &'static str = "kms_key";
    const MODULE: &'static str = "kms_key";
    const CATEGORY: ToolCategory = ToolCategory::Security;
    const DESCRIPTION: &'static str = "Manage AWS KMS keys for encryption and access control";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        let mut args = ModuleArgs::new();
        args.insert("state", self.state)
            .insert("enabled", self.enabled.unwrap_or(true))
            .insert("multi_region", self.multi_region.unwrap_or(false))
            .insert(
                "key_spec",
                self.key_spec.as_deref().unwrap_or("SYMMETRIC_DEFAULT"),
            )
            .insert(
                "key_usage",
                self.key_usage.as_deref().unwrap_or("ENCRYPT_DECRYPT"),
            )
            .insert("purge_grants", self.purge_grants.unwrap_or(false))
            .insert_present("alias", &self.alias)
            .insert_present("key_id", &self.key_id)
            .insert_present("description", &self.description)
            .insert_some("enable_key_rotation", &self.enable_key_rotation)
            .insert_some("pending_window", &self.pending_window)
            .insert_present("policy", &self.policy)
            .insert_present("grants", &self.grants)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}
