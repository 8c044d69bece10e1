use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tool_framework::{string_arg, NormalizeError};

/// Resource tags, kept sorted by key.
pub type Tags = BTreeMap<String, String>;

/// Caller-supplied fields with no typed counterpart, merged into the argument map last.
pub type Extra = Map<String, Value>;

/// Desired lifecycle state of a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Present,
    Absent,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Present => "present",
            State::Absent => "absent",
        }
    }
}

string_arg!(State);

/// Fails with [`NormalizeError::MissingField`] when an identifying field is empty.
pub(crate) fn require(tool: &'static str, field: &'static str, value: &str) -> Result<(), NormalizeError> {
    if value.is_empty() {
        return Err(NormalizeError::MissingField { tool, field });
    }
    Ok(())
}

/// Builds a tag map from string pairs.
pub fn tags<K, V, I>(pairs: I) -> Tags
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trips_lowercase() {
        assert_eq!(serde_json::to_value(State::Absent).unwrap(), "absent");
        let state: State = serde_json::from_str("\"present\"").unwrap();
        assert_eq!(state, State::Present);
    }

    #[test]
    fn test_require_rejects_empty() {
        assert!(require("lambda", "name", "f").is_ok());
        assert_eq!(
            require("lambda", "name", ""),
            Err(NormalizeError::MissingField {
                tool: "lambda",
                field: "name"
            })
        );
    }
}
