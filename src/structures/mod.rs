mod account;
mod config;
mod edge;
mod error;
mod graph;
mod node;
pub mod plan;
mod routingparameters;

pub use account::*;
pub use config::*;
pub use edge::*;
pub use error::*;
pub use graph::*;
pub use node::*;
pub use routingparameters::*;
