use conveyor_gateway::GatewayError;

/// Setup-time misconfiguration. Surfaced before any execution starts.
#[derive(Debug, thiserror::Error)]
pub enum FederationSetupError {
    #[error("the federation gateway must be loaded before the plugin is registered")]
    GatewayNotLoaded,
    #[error(
        "the apollo_federation plugin takes a live gateway handle and cannot be \
         initialized from a configuration document; construct it with \
         `ApolloFederationPlugin::new`"
    )]
    GatewayHandleRequired,
}

/// A failed delegation to the gateway, reported through the pipeline's
/// standard executor-failure channel. Never retried here.
#[derive(Debug, thiserror::Error)]
pub enum FederationExecutionError {
    #[error("federated execution failed: {0}")]
    Delegation(#[from] GatewayError),
    #[error("gateway returned a body that is not in the expected {{data, errors}} shape: {0}")]
    ShapeMismatch(sonic_rs::Error),
    #[error("gateway returned a result carrying neither data nor errors")]
    MissingResultFields,
}
