//! # AWS Tools Facade
//!
//! [`AwsTools`] is the one entry point callers need: hand it a config, it
//! normalizes, applies [`ToolSettings`], logs, and runs the module. Runner failures
//! come back unchanged apart from the tool name.

use crate::lifecycle::{SessionContext, ToolSettings};
use crate::model::*;
use std::sync::Arc;
use tool_framework::display::{display_results, display_tool};
use tool_framework::{
    ExecutionResult, ModuleArgs, ModuleRunner, NormalizeError, Tool, ToolError, ToolInfo,
};
use tracing::{debug, instrument};

/// Runs resource configs against a [`ModuleRunner`].
#[derive(Clone)]
pub struct AwsTools {
    runner: Arc<dyn ModuleRunner>,
    session: SessionContext,
    settings: ToolSettings,
}

impl AwsTools {
    pub fn new<R: ModuleRunner + 'static>(runner: R, session: SessionContext) -> Self {
        Self::from_arc(Arc::new(runner), session)
    }

    pub fn from_arc(runner: Arc<dyn ModuleRunner>, session: SessionContext) -> Self {
        Self {
            runner,
            session,
            settings: ToolSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ToolSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// The exact map [`AwsTools::run`] would send, without sending it.
    pub fn normalize<T: Tool>(&self, tool: &T) -> Result<ModuleArgs, NormalizeError> {
        let args = tool.module_args(self.settings.mode)?;
        Ok(self.finish(&ToolInfo::of::<T>(), args))
    }

    pub fn normalize_request(&self, request: &ResourceRequest) -> Result<ModuleArgs, NormalizeError> {
        let args = request.module_args(self.settings.mode)?;
        Ok(self.finish(&request.info(), args))
    }

    fn finish(&self, info: &ToolInfo, mut args: ModuleArgs) -> ModuleArgs {
        self.settings.apply(info, &self.session, &mut args);
        args
    }

    /// Normalizes `tool` and runs its module.
    ///
    /// Nothing is sent when normalization fails.
    #[instrument(skip(self, tool), fields(tool = T::NAME))]
    pub async fn run<T: Tool>(&self, tool: &T) -> Result<ExecutionResult, ToolError> {
        let info = ToolInfo::of::<T>();
        let args = self.normalize(tool)?;
        display_tool(&info, &args);

        debug!("Sending to runner");
        let result = self
            .runner
            .run_module(info.module, args, info.target)
            .await
            .map_err(|e| ToolError::from_runner(info.name, e))?;

        display_results(&info, &result);
        Ok(result)
    }
}

macro_rules! define_kind_methods {
    ($($variant:ident($config:ty)),* $(,)?) => {
        paste::paste! {
            impl AwsTools {
                $(
                    #[doc = concat!("Runs a [`", stringify!($config), "`] config.")]
                    pub async fn [<$variant:snake>](&self, config: $config) -> Result<ExecutionResult, ToolError> {
                        self.run(&config).await
                    }
                )*

                /// Runs whichever kind `request` carries.
                pub async fn run_request(&self, request: &ResourceRequest) -> Result<ExecutionResult, ToolError> {
                    match request {
                        $(ResourceRequest::$variant(config) => self.run(config).await,)*
                    }
                }
            }
        }
    };
}

resource_kinds!(define_kind_methods);
