//! # Lambda Function
//!
//! Field rules for the `lambda` module, plus builders for the structured
//! sub-objects the module accepts.

use crate::model::common::require;
use crate::model::{LambdaFunction, PackageType, State, Tags};
use serde_json::{json, Value};
use tool_framework::{
    choose, Alternative, ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory,
};

impl LambdaFunction {
    fn code_sources(&self) -> Vec<Alternative> {
        vec![
            Alternative::new("zip_file").require("zip_file", &self.zip_file),
            Alternative::new("s3_object")
                .require("s3_bucket", &self.s3_bucket)
                .require("s3_key", &self.s3_key)
                .optional("s3_object_version", &self.s3_object_version),
            Alternative::new("image_uri").require("image_uri", &self.image_uri),
        ]
    }
}

impl Tool for LambdaFunction {
    const NAME: &'static str = "lambda";
    const MODULE: &'static str = "lambda";
    const CATEGORY: ToolCategory = ToolCategory::Compute;
    const DESCRIPTION: &'static str = "Manage AWS Lambda functions";

    fn module_args(&self, mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;
        let zip_package = self.package_type == PackageType::Zip;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("purge_tags", self.purge_tags.unwrap_or(true))
            .insert("package_type", self.package_type)
            .insert_present_when(zip_package, "runtime", &self.runtime)
            .insert_present_when(zip_package, "handler", &self.handler)
            .insert_present("role", &self.role);

        match choose(Self::NAME, "code", mode, self.code_sources())? {
            Some(source) => {
                args.extend(source.into_args());
            }
            None if mode.is_strict() && self.state == State::Present => {
                return Err(NormalizeError::MissingSource {
                    tool: Self::NAME,
                    group: "code",
                    expected: vec!["zip_file", "s3_bucket+s3_key", "image_uri"],
                });
            }
            None => {}
        }

        args.insert_present("description", &self.description)
            .insert_present("timeout", &self.timeout)
            .insert_present("memory_size", &self.memory_size)
            .insert_present("environment_variables", &self.environment)
            .insert_present("dead_letter_config", &self.dead_letter_config)
            .insert_present("tracing_config", &self.tracing_config)
            .insert_present("kms_key_arn", &self.kms_key_arn)
            .insert_present("layers", &self.layers)
            .insert_present("vpc_config", &self.vpc_config)
            .insert_some("reserved_concurrency", &self.reserved_concurrency)
            .insert_present(
                "provisioned_concurrency_config",
                &self.provisioned_concurrency_config,
            )
            .insert_present("image_config", &self.image_config)
            .insert_present("architectures", &self.architectures)
            .insert_present("ephemeral_storage", &self.ephemeral_storage)
            .insert_present("file_system_configs", &self.file_system_configs)
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

/// VPC attachment for a function.
pub fn vpc_config<S: AsRef<str>>(subnet_ids: &[S], security_group_ids: &[S]) -> Value {
    let ids = |v: &[S]| v.iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>();
    json!({
        "SubnetIds": ids(subnet_ids),
        "SecurityGroupIds": ids(security_group_ids),
    })
}

/// Environment block in API form, `{"Variables": {...}}`.
pub fn environment_config(variables: &Tags) -> Value {
    json!({ "Variables": variables })
}

/// Dead-letter target (SQS queue or SNS topic ARN).
pub fn dead_letter_config(target_arn: &str) -> Value {
    json!({ "TargetArn": target_arn })
}
