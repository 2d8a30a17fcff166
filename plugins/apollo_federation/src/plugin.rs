use std::sync::Arc;

use conveyor_engine::executor::SharedExecutor;
use conveyor_engine::plugins::hooks::on_execute::{
    OnExecuteStartHookPayload, OnExecuteStartHookResult,
};
use conveyor_engine::plugins::hooks::on_plugin_init::{OnPluginInitPayload, OnPluginInitResult};
use conveyor_engine::plugins::plugin_trait::{PipelinePlugin, StartHookPayload};
use conveyor_gateway::GatewayHandle;
use tracing::debug;

use crate::adapter::FederationExecutionAdapter;
use crate::error::FederationSetupError;

pub struct ApolloFederationConfig {
    /// The gateway the pipeline delegates to. Must already be loaded:
    /// supergraph composed, subgraphs resolved.
    pub gateway: Arc<dyn GatewayHandle>,
}

/// Swaps the pipeline's execute phase for federated execution through a
/// gateway.
///
/// The federated executor is built exactly once, here, and the same instance
/// is installed for every request. Parsing and validation stay with the
/// pipeline; only the execute phase is redirected.
pub struct ApolloFederationPlugin {
    executor: SharedExecutor,
}

impl ApolloFederationPlugin {
    pub fn new(config: ApolloFederationConfig) -> Result<Self, FederationSetupError> {
        if !config.gateway.is_loaded() {
            return Err(FederationSetupError::GatewayNotLoaded);
        }
        debug!("installing federated executor over the pipeline default");
        Ok(Self {
            executor: Arc::new(FederationExecutionAdapter::new(config.gateway)),
        })
    }
}

#[async_trait::async_trait]
impl PipelinePlugin for ApolloFederationPlugin {
    fn plugin_name() -> &'static str {
        "apollo_federation"
    }

    type Config = ();

    // A live gateway handle cannot come out of a configuration document, so
    // config-driven registration is rejected outright instead of silently
    // running without federation.
    fn on_plugin_init(_payload: OnPluginInitPayload<Self>) -> OnPluginInitResult<Self> {
        OnPluginInitPayload::error(FederationSetupError::GatewayHandleRequired)
    }

    async fn on_execute<'exec>(
        &'exec self,
        mut start_payload: OnExecuteStartHookPayload<'exec>,
    ) -> OnExecuteStartHookResult<'exec> {
        start_payload.set_executor(self.executor.clone());
        start_payload.proceed()
    }
}
