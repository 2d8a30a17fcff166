//! The seam between a conveyor execution pipeline and a federation gateway.
//!
//! A gateway owns everything distributed: supergraph composition, query
//! planning (including any plan caching), and the coordination of serial and
//! parallel subgraph fetches a plan calls for. Consumers of this crate treat
//! it as a long-lived, read-only handle that turns one invocation into one
//! serialized `{ data, errors }` response.

pub mod error;

pub use error::GatewayError;

use std::collections::HashMap;

use graphql_tools::static_graphql::query::Document;
use sonic_rs::Value;
use tokio_util::sync::CancellationToken;

/// Everything the gateway's plan executor needs for one execution. Borrowed
/// from the pipeline's request for the duration of the call.
pub struct GatewayInvocation<'exec> {
    pub document: &'exec Document,
    pub operation_name: Option<&'exec str>,
    pub variable_values: &'exec HashMap<String, Value>,
    pub root_value: Option<&'exec Value>,
    /// Forwarded from the caller when present; honoring it is the gateway's
    /// responsibility.
    pub cancellation: Option<&'exec CancellationToken>,
}

/// The gateway's response: the serialized `{ data, errors }` body of the
/// fully resolved plan. Deserialization is owned by the caller.
pub struct GatewayExecutionOutput {
    pub body: Vec<u8>,
    pub error_count: usize,
}

/// An already-composed federation gateway.
///
/// Implementations must be safe for concurrent invocation by simultaneous
/// requests, and each `execute_plan` call must observe a consistent snapshot
/// of the composed schema even if the supergraph is hot-swapped between
/// calls.
#[async_trait::async_trait]
pub trait GatewayHandle: Send + Sync + 'static {
    /// Whether the supergraph has been composed and subgraphs resolved.
    /// Loading happens once, outside any execution path.
    fn is_loaded(&self) -> bool;

    /// Plans and executes one invocation across the subgraphs. Exactly one
    /// output is produced per call; there is no partial or streamed
    /// delivery.
    async fn execute_plan(
        &self,
        invocation: GatewayInvocation<'_>,
    ) -> Result<GatewayExecutionOutput, GatewayError>;
}
