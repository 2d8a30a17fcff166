pub mod graphql_error;
pub mod result;
