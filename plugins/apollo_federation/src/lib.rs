pub mod adapter;
pub mod error;
pub mod plugin;

pub use adapter::{FederationExecutionAdapter, FEDERATION_EXECUTOR_TAG};
pub use error::{FederationExecutionError, FederationSetupError};
pub use plugin::{ApolloFederationConfig, ApolloFederationPlugin};

#[cfg(test)]
mod testkit;
