#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway is not loaded; compose the supergraph before executing")]
    NotLoaded,
    #[error("failed to build a query plan: {0}")]
    PlanBuildFailed(String),
    #[error("subgraph '{subgraph}' is unreachable: {reason}")]
    SubgraphUnreachable { subgraph: String, reason: String },
    #[error("execution was cancelled by the client")]
    Cancelled,
}
