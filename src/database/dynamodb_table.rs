//! # DynamoDB Table
//!
//! The hash and range keys are folded into two parallel lists, `attributes` and
//! `key_schema`. A key contributes to both lists only when its name is set; with no
//! key names neither list is sent.

use crate::model::common::require;
use crate::model::{AttributeType, BillingMode, DynamoDbTable};
use serde_json::{json, Value};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRole {
    Hash,
    Range,
}

impl KeyRole {
    fn as_str(self) -> &'static str {
        match self {
            KeyRole::Hash => "HASH",
            KeyRole::Range => "RANGE",
        }
    }
}

/// Builds `(attributes, key_schema)` from the optional keys, in hash-then-range order.
fn key_schema(keys: &[(Option<&str>, AttributeType, KeyRole)]) -> (Vec<Value>, Vec<Value>) {
    keys.iter()
        .filter_map(|(name, attr_type, role)| match name {
            Some(name) if !name.is_empty() => Some((name, attr_type, role)),
            _ => None,
        })
        .map(|(name, attr_type, role)| {
            (
                json!({ "AttributeName": name, "AttributeType": attr_type.as_str() }),
                json!({ "AttributeName": name, "KeyType": role.as_str() }),
            )
        })
        .unzip()
}

impl Tool for DynamoDbTable {
    const NAME: &'static str = "dynamodb_table";
    const MODULE: &'static str = "dynamodb_table";
    const CATEGORY: ToolCategory = ToolCategory::Database;
    const DESCRIPTION: &'static str = "Manage AWS DynamoDB tables for data storage";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "name", &self.name)?;
        let provisioned = self.billing_mode == BillingMode::Provisioned;

        let mut args = ModuleArgs::new();
        args.insert("name", &self.name)
            .insert("state", self.state)
            .insert("billing_mode", self.billing_mode)
            .insert("wait", self.wait.unwrap_or(true))
            .insert("wait_timeout", self.wait_timeout.unwrap_or(600));

        let (attributes, schema) = key_schema(&[
            (self.hash_key_name.as_deref(), self.hash_key_type, KeyRole::Hash),
            (self.range_key_name.as_deref(), self.range_key_type, KeyRole::Range),
        ]);
        args.insert_present("attributes", &Some(attributes))
            .insert_present("key_schema", &Some(schema))
            .insert_present_when(provisioned, "read_capacity", &self.read_capacity)
            .insert_present_when(provisioned, "write_capacity", &self.write_capacity)
            .insert_present("global_indexes", &self.global_secondary_indexes)
            .insert_present("local_indexes", &self.local_secondary_indexes)
            .insert_present("stream_specification", &self.stream_specification)
            .insert(
                "point_in_time_recovery",
                self.point_in_time_recovery.unwrap_or(true),
            )
            .insert_present("tags", &self.tags)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = DynamoDbTable::new("t").normalize().unwrap();
        assert_eq!(
            args.into_value(),
            json!({
                "name": "t",
                "state": "present",
                "billing_mode": "PAY_PER_REQUEST",
                "wait": true,
                "wait_timeout": 600,
                "point_in_time_recovery": true
            })
        );
    }

    #[test]
    fn test_capacity_ignored_on_demand() {
        let mut t = DynamoDbTable::new("t");
        t.read_capacity = Some(5);
        t.write_capacity = Some(5);
        let args = t.normalize().unwrap();
        assert!(!args.contains_key("read_capacity"));
        assert!(!args.contains_key("write_capacity"));

        t.billing_mode = BillingMode::Provisioned;
        let args = t.normalize().unwrap();
        assert_eq!(args.get("billing_mode"), Some(&json!("PROVISIONED")));
        assert_eq!(args.get("read_capacity"), Some(&json!(5)));
        assert_eq!(args.get("write_capacity"), Some(&json!(5)));
    }

    #[test]
    fn test_hash_key_only() {
        let t = DynamoDbTable::new("t").with_hash_key("id", AttributeType::S);
        let args = t.normalize().unwrap();
        assert_eq!(
            args.get("attributes"),
            Some(&json!([{"AttributeName": "id", "AttributeType": "S"}]))
        );
        assert_eq!(
            args.get("key_schema"),
            Some(&json!([{"AttributeName": "id", "KeyType": "HASH"}]))
        );
    }

    #[test]
    fn test_hash_and_range_keys() {
        let t = DynamoDbTable::new("t")
            .with_hash_key("pk", AttributeType::S)
            .with_range_key("ts", AttributeType::N);
        let args = t.normalize().unwrap();
        assert_eq!(
            args.get("key_schema"),
            Some(&json!([
                {"AttributeName": "pk", "KeyType": "HASH"},
                {"AttributeName": "ts", "KeyType": "RANGE"}
            ]))
        );
        assert_eq!(args.get("attributes").and_then(|a| a.as_array()).map(Vec::len), Some(2));
    }

    #[test]
    fn test_no_key_names_omits_both_lists() {
        let mut t = DynamoDbTable::new("t");
        t.hash_key_type = AttributeType::N;
        let args = t.normalize().unwrap();
        assert!(!args.contains_key("attributes"));
        assert!(!args.contains_key("key_schema"));
    }

    #[test]
    fn test_index_fields_are_renamed() {
        let mut t = DynamoDbTable::new("t");
        t.global_secondary_indexes = Some(vec![json!({"name": "by_email", "hash_key_name": "email"})]);
        t.point_in_time_recovery = Some(false);
        let args = t.normalize().unwrap();
        assert!(args.contains_key("global_indexes"));
        assert!(!args.contains_key("global_secondary_indexes"));
        assert_eq!(args.get("point_in_time_recovery"), Some(&json!(false)));
    }
}
