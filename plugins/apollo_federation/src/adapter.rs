use std::sync::Arc;

use conveyor_engine::error::BoxError;
use conveyor_engine::executor::Executor;
use conveyor_engine::request::ExecutionRequest;
use conveyor_engine::response::result::ExecutionResult;
use conveyor_gateway::{GatewayHandle, GatewayInvocation};
use tracing::{error, trace};

use crate::error::FederationExecutionError;

/// Stable discriminant of the federated executor, so hooks and tests can
/// tell it apart from the pipeline's default executor.
pub const FEDERATION_EXECUTOR_TAG: &str = "federation_executor";

/// Translates one pipeline execution into one gateway plan execution.
///
/// Stateless between invocations; all distributed state (composed schema,
/// plan cache, subgraph clients) lives behind the injected gateway handle,
/// which is shared read-only across concurrent executions.
pub struct FederationExecutionAdapter {
    gateway: Arc<dyn GatewayHandle>,
}

impl FederationExecutionAdapter {
    pub fn new(gateway: Arc<dyn GatewayHandle>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl Executor for FederationExecutionAdapter {
    fn tag(&self) -> &'static str {
        FEDERATION_EXECUTOR_TAG
    }

    async fn execute(&self, request: &ExecutionRequest<'_>) -> Result<ExecutionResult, BoxError> {
        // The bypassed default executor on the request is intentionally
        // ignored: this is the override path, and there is no fallback.
        let invocation = GatewayInvocation {
            document: request.document.as_ref(),
            operation_name: request.operation_name,
            variable_values: request.variable_values,
            root_value: request.root_value,
            cancellation: request.cancellation,
        };

        // One awaited call per request. The plan's serial/parallel subgraph
        // coordination happens entirely inside the gateway.
        let output = self.gateway.execute_plan(invocation).await.map_err(|err| {
            error!("federated plan execution failed: {}", err);
            FederationExecutionError::Delegation(err)
        })?;

        trace!(
            error_count = output.error_count,
            "federated plan execution completed"
        );

        let result: ExecutionResult = sonic_rs::from_slice(&output.body)
            .map_err(FederationExecutionError::ShapeMismatch)?;
        if result.data.is_none() && result.errors.is_empty() {
            return Err(FederationExecutionError::MissingResultFields.into());
        }

        Ok(result)
    }
}
