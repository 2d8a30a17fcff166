use std::sync::Arc;

use crate::error::BoxError;
use crate::request::ExecutionRequest;
use crate::response::result::ExecutionResult;

/// The capability the pipeline invokes at its execute phase. The pipeline
/// holds whichever implementation satisfies it, selected once per execution;
/// plugins can swap the selection through the `on_execute` hook.
#[async_trait::async_trait]
pub trait Executor: Send + Sync + 'static {
    /// Stable discriminant for this implementation. Constant across
    /// invocations, so hooks and tests can tell which executor is installed
    /// without relying on pointer identity alone.
    fn tag(&self) -> &'static str;

    async fn execute(&self, request: &ExecutionRequest<'_>) -> Result<ExecutionResult, BoxError>;
}

pub type SharedExecutor = Arc<dyn Executor>;

pub const ROOT_VALUE_EXECUTOR_TAG: &str = "root_value_executor";

/// The engine's built-in executor: resolves nothing and echoes the request's
/// root value. Embedders wire a real resolver here; tests use it as the
/// "default executor" plugins are expected to replace.
pub struct RootValueExecutor;

#[async_trait::async_trait]
impl Executor for RootValueExecutor {
    fn tag(&self) -> &'static str {
        ROOT_VALUE_EXECUTOR_TAG
    }

    async fn execute(&self, request: &ExecutionRequest<'_>) -> Result<ExecutionResult, BoxError> {
        Ok(ExecutionResult {
            data: request.root_value.cloned(),
            errors: vec![],
            extensions: None,
        })
    }
}
