pub mod on_execute;
pub mod on_graphql_parse;
pub mod on_graphql_validation;
pub mod on_plugin_init;
