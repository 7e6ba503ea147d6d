//! Errors raised while building sample scenes

use costgraph_core::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("vertex {index} out of range (scene has {count} vertices)")]
    VertexOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
