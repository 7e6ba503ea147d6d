//! Error types for graph construction and lookups

use crate::model::VertexId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph config has no cost function")]
    MissingCostFunction,

    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),
}

pub type Result<T> = std::result::Result<T, GraphError>;
