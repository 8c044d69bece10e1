//! # Invocation Settings
//!
//! [`ToolSettings`] holds the knobs applied to every tool run through a facade. They
//! act on the canonical map after normalization and before it reaches the runner,
//! so [`Tool::module_args`](tool_framework::Tool::module_args) stays a pure function
//! of the config.

use super::session::SessionContext;
use crate::model::Tags;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tool_framework::{ModuleArgs, ResolutionMode, ToolInfo};

/// Argument asking the engine for a dry run.
pub const CHECK_MODE_KEY: &str = "_ansible_check_mode";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// How conflicting payload sources are handled.
    pub mode: ResolutionMode,
    /// Sends [`CHECK_MODE_KEY`] so the engine reports changes without making them.
    pub check_mode: bool,
    /// Tags merged beneath the caller's own tags, for kinds that take tags.
    pub default_tags: Option<Tags>,
    /// Fills `region` from the session when the config leaves it unset.
    pub inject_region: bool,
}

impl ToolSettings {
    pub fn strict() -> Self {
        Self {
            mode: ResolutionMode::Strict,
            ..Default::default()
        }
    }

    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    pub fn with_default_tags(mut self, tags: Tags) -> Self {
        self.default_tags = Some(tags);
        self
    }

    pub fn with_region_injection(mut self, inject_region: bool) -> Self {
        self.inject_region = inject_region;
        self
    }

    /// Applies these settings to a normalized argument map.
    pub fn apply(&self, info: &ToolInfo, session: &SessionContext, args: &mut ModuleArgs) {
        if let (Some(defaults), Some(key)) = (&self.default_tags, info.tags_key) {
            if !defaults.is_empty() {
                let mut merged: Map<String, Value> = defaults
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                if let Some(Value::Object(caller)) = args.get(key) {
                    merged.extend(caller.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                args.insert(key, Value::Object(merged));
            }
        }

        if self.inject_region && !args.contains_key("region") {
            args.insert("region", &session.region);
        }

        if self.check_mode {
            args.insert(CHECK_MODE_KEY, true);
        }
    }
}
