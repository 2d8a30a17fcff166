use std::sync::Arc;

use graphql_tools::static_graphql::query::Document;

use crate::plugins::plugin_context::PluginContext;
use crate::plugins::plugin_trait::{
    EndHookPayload, EndHookResult, StartHookPayload, StartHookResult,
};
use crate::response::graphql_error::GraphQLError;
use crate::response::result::ExecutionResult;

pub struct OnGraphQLValidationStartHookPayload<'exec> {
    pub context: &'exec PluginContext,
    /// The parsed document about to be validated against the schema.
    pub document: &'exec Arc<Document>,
}

impl<'exec> StartHookPayload<OnGraphQLValidationEndHookPayload<'exec>, ExecutionResult>
    for OnGraphQLValidationStartHookPayload<'exec>
{
}

pub type OnGraphQLValidationStartHookResult<'exec> = StartHookResult<
    'exec,
    OnGraphQLValidationStartHookPayload<'exec>,
    OnGraphQLValidationEndHookPayload<'exec>,
    ExecutionResult,
>;

pub struct OnGraphQLValidationEndHookPayload<'exec> {
    pub context: &'exec PluginContext,
    /// Errors the validation stage produced, already in response shape.
    /// Plugins may filter or extend them; a non-empty list ends the request.
    pub errors: Vec<GraphQLError>,
}

impl<'exec> OnGraphQLValidationEndHookPayload<'exec> {
    pub fn filter_errors<F>(&mut self, mut f: F)
    where
        F: FnMut(&GraphQLError) -> bool,
    {
        self.errors.retain(|error| f(error))
    }
}

impl<'exec> EndHookPayload<ExecutionResult> for OnGraphQLValidationEndHookPayload<'exec> {}

pub type OnGraphQLValidationEndHookResult<'exec> =
    EndHookResult<OnGraphQLValidationEndHookPayload<'exec>, ExecutionResult>;
