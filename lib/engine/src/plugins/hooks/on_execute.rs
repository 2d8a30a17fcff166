use std::collections::HashMap;
use std::sync::Arc;

use graphql_tools::static_graphql::query::Document;
use serde::Serialize;
use sonic_rs::{json, Value};

use crate::executor::SharedExecutor;
use crate::plugins::plugin_context::PluginContext;
use crate::plugins::plugin_trait::{
    EndHookPayload, EndHookResult, StartHookPayload, StartHookResult,
};
use crate::response::graphql_error::GraphQLError;
use crate::response::result::ExecutionResult;

pub struct OnExecuteStartHookPayload<'exec> {
    /// Shared per-request state for passing data between hooks.
    pub context: &'exec PluginContext,
    /// The parsed, validated operation document about to be executed.
    pub document: &'exec Arc<Document>,
    pub operation_name: Option<&'exec str>,
    /// Variable values for the execution.
    pub variable_values: &'exec HashMap<String, Value>,
    pub root_value: Option<&'exec Value>,

    /// Initial set of GraphQL errors; merged into the execution result.
    pub errors: Vec<GraphQLError>,
    /// Initial set of GraphQL extensions; merged into the execution result.
    pub extensions: HashMap<String, Value>,

    pub(crate) executor: SharedExecutor,
}

impl<'exec> OnExecuteStartHookPayload<'exec> {
    /// The executor currently selected for this execution. Starts out as the
    /// pipeline's default executor.
    pub fn executor(&self) -> &SharedExecutor {
        &self.executor
    }

    /// Replaces the executor the pipeline will invoke for this execution.
    /// The last plugin to set it wins; exactly one executor runs per request.
    pub fn set_executor(&mut self, executor: SharedExecutor) {
        self.executor = executor;
    }

    /// Add a GraphQL error to the execution result.
    pub fn add_error(&mut self, error: GraphQLError) {
        self.errors.push(error);
    }

    pub fn add_extension<T: Serialize>(&mut self, key: &str, value: T) -> Option<Value> {
        self.extensions.insert(key.into(), json!(value))
    }

    pub fn get_extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }
}

impl<'exec> StartHookPayload<OnExecuteEndHookPayload<'exec>, ExecutionResult>
    for OnExecuteStartHookPayload<'exec>
{
}

pub type OnExecuteStartHookResult<'exec> = StartHookResult<
    'exec,
    OnExecuteStartHookPayload<'exec>,
    OnExecuteEndHookPayload<'exec>,
    ExecutionResult,
>;

pub struct OnExecuteEndHookPayload<'exec> {
    pub context: &'exec PluginContext,
    /// The final `data` value of the execution result. Plugins may modify it
    /// before the pipeline returns.
    pub data: Option<Value>,
    /// The final list of errors of the execution result.
    pub errors: Vec<GraphQLError>,
    /// The final extensions map of the execution result.
    pub extensions: HashMap<String, Value>,
}

impl<'exec> OnExecuteEndHookPayload<'exec> {
    pub fn add_error(&mut self, error: GraphQLError) {
        self.errors.push(error);
    }

    pub fn filter_errors<F>(&mut self, mut f: F)
    where
        F: FnMut(&GraphQLError) -> bool,
    {
        self.errors.retain(|error| f(error))
    }

    pub fn add_extension<T: Serialize>(&mut self, key: &str, value: T) -> Option<Value> {
        self.extensions.insert(key.into(), json!(value))
    }
}

impl<'exec> EndHookPayload<ExecutionResult> for OnExecuteEndHookPayload<'exec> {}

pub type OnExecuteEndHookResult<'exec> =
    EndHookResult<OnExecuteEndHookPayload<'exec>, ExecutionResult>;
