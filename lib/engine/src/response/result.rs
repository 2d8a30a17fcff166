use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sonic_rs::Value;

use crate::response::graphql_error::GraphQLError;

/// The single execution value produced for one request. Every executor,
/// default or installed by a plugin, resolves to this shape, so downstream
/// consumers cannot tell which one ran.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<HashMap<String, Value>>,
}

impl ExecutionResult {
    pub fn from_data(data: Value) -> Self {
        ExecutionResult {
            data: Some(data),
            errors: vec![],
            extensions: None,
        }
    }

    pub fn from_error(error: GraphQLError) -> Self {
        ExecutionResult {
            data: None,
            errors: vec![error],
            extensions: None,
        }
    }

    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        ExecutionResult {
            data: None,
            errors,
            extensions: None,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
