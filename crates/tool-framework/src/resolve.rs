//! # Alternative Source Resolution
//!
//! Some resource kinds accept several mutually exclusive ways to supply one logical
//! payload (inline archive vs. object reference vs. image, certificate body vs. ARN).
//! Each way is described as an [`Alternative`]; [`choose`] picks the winner.
//!
//! In [`ResolutionMode::Lenient`] the first complete alternative wins silently and the
//! rest are dropped, even when they were fully specified. [`ResolutionMode::Strict`]
//! rejects a request in which more than one alternative is complete.

use crate::args::{ArgValue, ModuleArgs};
use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};

/// How conflicting alternative sources are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// First complete alternative in priority order wins.
    #[default]
    Lenient,
    /// More than one complete alternative is an error.
    Strict,
}

impl ResolutionMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ResolutionMode::Strict)
    }
}

/// One way of supplying a payload, with the fields it contributes.
#[derive(Debug, Clone)]
pub struct Alternative {
    label: &'static str,
    complete: bool,
    args: ModuleArgs,
}

impl Alternative {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            complete: true,
            args: ModuleArgs::new(),
        }
    }

    /// Adds a field this alternative cannot do without.
    pub fn require<V: ArgValue>(mut self, key: &str, value: &Option<V>) -> Self {
        match value {
            Some(v) if v.is_present() => {
                self.args.insert(key, v);
            }
            _ => self.complete = false,
        }
        self
    }

    /// Adds a field carried along only when this alternative wins.
    pub fn optional<V: ArgValue>(mut self, key: &str, value: &Option<V>) -> Self {
        self.args.insert_present(key, value);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn into_args(self) -> ModuleArgs {
        self.args
    }
}

/// Picks the winning alternative, in priority order.
///
/// Returns `Ok(None)` when no alternative is complete; callers decide whether that is
/// an error for their resource kind.
pub fn choose(
    tool: &'static str,
    group: &'static str,
    mode: ResolutionMode,
    alternatives: Vec<Alternative>,
) -> Result<Option<Alternative>, NormalizeError> {
    let complete: Vec<Alternative> = alternatives
        .into_iter()
        .filter(Alternative::is_complete)
        .collect();

    if mode.is_strict() && complete.len() > 1 {
        return Err(NormalizeError::ConflictingSources {
            tool,
            group,
            sources: complete.iter().map(Alternative::label).collect(),
        });
    }

    Ok(complete.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sources(zip: Option<&str>, bucket: Option<&str>, key: Option<&str>) -> Vec<Alternative> {
        let zip = zip.map(str::to_string);
        let bucket = bucket.map(str::to_string);
        let key = key.map(str::to_string);
        vec![
            Alternative::new("zip_file").require("zip_file", &zip),
            Alternative::new("s3")
                .require("s3_bucket", &bucket)
                .require("s3_key", &key),
        ]
    }

    #[test]
    fn test_lenient_picks_first_complete() {
        let chosen = choose("t", "code", ResolutionMode::Lenient, sources(Some("a.zip"), Some("b"), Some("k")))
            .unwrap()
            .unwrap();
        assert_eq!(chosen.label(), "zip_file");
        let args = chosen.into_args();
        assert_eq!(args.get("zip_file"), Some(&json!("a.zip")));
        assert!(!args.contains_key("s3_bucket"));
    }

    #[test]
    fn test_partial_alternative_is_skipped() {
        let chosen = choose("t", "code", ResolutionMode::Strict, sources(None, Some("b"), None)).unwrap();
        assert!(chosen.is_none());
    }

    #[test]
    fn test_strict_rejects_two_complete_alternatives() {
        let err = choose("t", "code", ResolutionMode::Strict, sources(Some("a.zip"), Some("b"), Some("k")))
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::ConflictingSources {
                tool: "t",
                group: "code",
                sources: vec!["zip_file", "s3"],
            }
        );
    }
}
