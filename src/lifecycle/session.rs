//! # AWS Session Context
//!
//! Region, profile and account are resolved once into a [`SessionContext`] value and
//! passed to whatever needs them. Nothing here is global.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Where and as whom AWS calls are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub region: String,
    pub profile: Option<String>,
    pub account_id: Option<String>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl SessionContext {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
            account_id: None,
        }
    }

    /// Reads `AWS_REGION`, then `AWS_DEFAULT_REGION`, falling back to `us-east-1`.
    /// The profile comes from `AWS_PROFILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SessionContext::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let region = set("AWS_REGION")
            .or_else(|| set("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let context = Self {
            region,
            profile: set("AWS_PROFILE"),
            account_id: None,
        };
        debug!(region = %context.region, profile = ?context.profile, "Resolved session");
        context
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }
}

/// Informational lookups about the current AWS session.
///
/// Lookups that cannot be answered return `None` or an empty list rather than an
/// error.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_region(&self) -> String;

    async fn account_id(&self) -> Option<String>;

    /// Available zones in `region`, or in the current region when `None`.
    async fn availability_zones(&self, region: Option<&str>) -> Vec<String>;
}

/// A [`SessionProvider`] answering from fixed data.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    context: SessionContext,
    zones: BTreeMap<String, Vec<String>>,
}

impl StaticSessionProvider {
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            zones: BTreeMap::new(),
        }
    }

    pub fn with_zones<S: Into<String>>(
        mut self,
        region: impl Into<String>,
        zones: impl IntoIterator<Item = S>,
    ) -> Self {
        self.zones
            .insert(region.into(), zones.into_iter().map(Into::into).collect());
        self
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_region(&self) -> String {
        self.context.region.clone()
    }

    async fn account_id(&self) -> Option<String> {
        self.context.account_id.clone()
    }

    async fn availability_zones(&self, region: Option<&str>) -> Vec<String> {
        let region = region.unwrap_or(self.context.region.as_str());
        self.zones.get(region).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_region_precedence() {
        let both = SessionContext::from_lookup(env(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "eu-central-1"),
        ]));
        assert_eq!(both.region, "eu-west-1");

        let fallback = SessionContext::from_lookup(env(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "eu-central-1"),
            ("AWS_PROFILE", "ops"),
        ]));
        assert_eq!(fallback.region, "eu-central-1");
        assert_eq!(fallback.profile.as_deref(), Some("ops"));

        assert_eq!(SessionContext::from_lookup(env(&[])), SessionContext::default());
    }

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticSessionProvider::new(
            SessionContext::new("us-west-2").with_account_id("123456789012"),
        )
        .with_zones("us-west-2", ["us-west-2a", "us-west-2b"]);

        assert_eq!(provider.current_region().await, "us-west-2");
        assert_eq!(provider.account_id().await.as_deref(), Some("123456789012"));
        assert_eq!(
            provider.availability_zones(None).await,
            vec!["us-west-2a".to_string(), "us-west-2b".to_string()]
        );
        assert!(provider.availability_zones(Some("ap-south-1")).await.is_empty());
    }
}
