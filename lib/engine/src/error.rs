use crate::response::graphql_error::GraphQLError;
use crate::response::result::ExecutionResult;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    // Build-time errors
    #[error("A schema must be provided before building the pipeline")]
    MissingSchema,
    #[error("An executor must be provided before building the pipeline")]
    MissingExecutor,
    #[error("Failed to parse schema document: {0}")]
    InvalidSchema(String),
    #[error("Failed to initialize plugin '{name}': {source}")]
    PluginInitFailed {
        name: &'static str,
        #[source]
        source: BoxError,
    },

    // Request-level errors
    #[error("No query was provided in the request parameters")]
    MissingQuery,
    #[error("Failed to parse GraphQL operation")]
    FailedToParseOperation(graphql_tools::parser::query::ParseError),
    #[error("Executor '{tag}' failed: {source}")]
    ExecutorFailure {
        tag: &'static str,
        #[source]
        source: BoxError,
    },
}

impl PipelineError {
    pub fn graphql_error_code(&self) -> &'static str {
        match self {
            Self::MissingQuery => "BAD_REQUEST",
            Self::FailedToParseOperation(_) => "GRAPHQL_PARSE_FAILED",
            Self::ExecutorFailure { .. } => "EXECUTION_FAILED",
            Self::MissingSchema | Self::MissingExecutor | Self::InvalidSchema(_) => "SETUP_FAILED",
            Self::PluginInitFailed { .. } => "PLUGIN_INIT_FAILED",
        }
    }
}

impl From<PipelineError> for ExecutionResult {
    fn from(error: PipelineError) -> Self {
        ExecutionResult::from_error(GraphQLError::from_message_and_code(
            error.to_string(),
            error.graphql_error_code(),
        ))
    }
}
