use std::sync::Arc;

use graphql_tools::static_graphql::query::Document;

use crate::plugins::plugin_context::PluginContext;
use crate::plugins::plugin_trait::{
    EndHookPayload, EndHookResult, StartHookPayload, StartHookResult,
};
use crate::request::GraphQLParams;
use crate::response::result::ExecutionResult;

pub struct OnGraphQLParseStartHookPayload<'exec> {
    /// Shared per-request state for passing data between hooks.
    pub context: &'exec PluginContext,
    /// The raw request parameters about to be parsed.
    pub params: &'exec GraphQLParams,
}

impl<'exec> StartHookPayload<OnGraphQLParseEndHookPayload, ExecutionResult>
    for OnGraphQLParseStartHookPayload<'exec>
{
}

pub type OnGraphQLParseStartHookResult<'exec> = StartHookResult<
    'exec,
    OnGraphQLParseStartHookPayload<'exec>,
    OnGraphQLParseEndHookPayload,
    ExecutionResult,
>;

pub struct OnGraphQLParseEndHookPayload {
    /// The parsed operation document. Plugins may swap it before the pipeline
    /// continues to validation.
    pub document: Arc<Document>,
}

impl EndHookPayload<ExecutionResult> for OnGraphQLParseEndHookPayload {}

pub type OnGraphQLParseEndHookResult =
    EndHookResult<OnGraphQLParseEndHookPayload, ExecutionResult>;
