pub mod error;
pub mod executor;
pub mod pipeline;
pub mod plugins;
pub mod request;
pub mod response;

pub use error::{BoxError, PipelineError};
pub use executor::{Executor, RootValueExecutor, SharedExecutor, ROOT_VALUE_EXECUTOR_TAG};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use request::{ExecutionRequest, GraphQLParams};
pub use response::graphql_error::GraphQLError;
pub use response::result::ExecutionResult;

// Re-exported so plugin crates don't need to pin these themselves.
pub use async_trait::async_trait;
pub use sonic_rs;
pub use tracing;
