use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque output of one module run.
///
/// The runner's payload is carried through untouched; the accessors only read the
/// conventional `changed` and `failed` flags for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionResult(Value);

impl ExecutionResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn changed(&self) -> bool {
        self.flag("changed")
    }

    pub fn failed(&self) -> bool {
        self.flag("failed")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

impl From<Value> for ExecutionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags_default_to_false() {
        let result = ExecutionResult::new(json!({"arn": "arn:aws:lambda:x"}));
        assert!(!result.changed());
        assert!(!result.failed());

        let result = ExecutionResult::new(json!({"changed": true, "failed": false}));
        assert!(result.changed());
    }
}
