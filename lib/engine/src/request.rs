use std::collections::HashMap;
use std::sync::Arc;

use graphql_tools::static_graphql::query::Document;
use serde::Deserialize;
use sonic_rs::Value;
use tokio_util::sync::CancellationToken;

use crate::executor::SharedExecutor;
use crate::plugins::plugin_context::PluginContext;

/// The raw GraphQL request parameters handed to the pipeline, before parsing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphQLParams {
    pub query: Option<String>,
    pub operation_name: Option<String>,
    pub variables: HashMap<String, Value>,
    pub extensions: Option<HashMap<String, Value>>,
}

impl GraphQLParams {
    pub fn from_query(query: impl Into<String>) -> Self {
        GraphQLParams {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }
}

/// The pipeline's view of one execution, assembled after parsing and
/// validation succeeded. Immutable for the duration of the execution.
///
/// `default_executor` is the executor the pipeline would have run had no
/// plugin replaced the selection; executors installed by plugins may use it
/// for fallback or comparison, or ignore it entirely.
pub struct ExecutionRequest<'exec> {
    pub document: &'exec Arc<Document>,
    pub operation_name: Option<&'exec str>,
    pub variable_values: &'exec HashMap<String, Value>,
    pub context: &'exec PluginContext,
    pub root_value: Option<&'exec Value>,
    pub cancellation: Option<&'exec CancellationToken>,
    pub default_executor: &'exec SharedExecutor,
}
