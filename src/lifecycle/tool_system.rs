use super::session::SessionContext;
use super::settings::ToolSettings;
use crate::clients::AwsTools;
use tokio::task::{JoinError, JoinHandle};
use tool_framework::{ModuleBackend, ModuleHost};
use tracing::{error, info};

const CHANNEL_CAPACITY: usize = 32;

/// A running [`ModuleHost`] plus the facade wired to it.
///
/// # Example
///
/// ```ignore
/// let system = ToolSystem::start(DryRunBackend, SessionContext::from_env(), ToolSettings::default());
/// system.tools.s3_bucket(S3Bucket::new("data")).await?;
/// system.shutdown().await?;
/// ```
pub struct ToolSystem {
    pub tools: AwsTools,
    handle: JoinHandle<()>,
}

impl ToolSystem {
    /// Spawns the host loop on `backend` and returns the facade that feeds it.
    pub fn start<B: ModuleBackend + 'static>(
        backend: B,
        session: SessionContext,
        settings: ToolSettings,
    ) -> Self {
        let (host, runner) = ModuleHost::new(CHANNEL_CAPACITY);
        let handle = tokio::spawn(host.run(backend));
        Self {
            tools: AwsTools::new(runner, session).with_settings(settings),
            handle,
        }
    }

    /// Drops the facade and waits for the host to drain.
    ///
    /// Clones of `tools` held elsewhere keep the host alive; drop them first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down tool system...");
        drop(self.tools);

        if let Err(e) = self.handle.await {
            error!("Module host task failed: {:?}", e);
            return Err(e);
        }

        info!("Tool system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::DryRunBackend;
    use crate::model::KmsKey;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_start_run_shutdown() {
        let system = ToolSystem::start(
            DryRunBackend,
            SessionContext::new("eu-west-1"),
            ToolSettings::default().with_region_injection(true),
        );

        let result = system
            .tools
            .kms_key(KmsKey::with_alias("alias/app"))
            .await
            .unwrap();
        assert_eq!(result.get("module"), Some(&json!("kms_key")));
        assert_eq!(
            result.get("args").and_then(|a| a.get("region")),
            Some(&json!("eu-west-1"))
        );

        system.shutdown().await.unwrap();
    }
}
