pub mod gateway;
pub mod subgraphs;
