use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("graph store already initialized")]
    AlreadyInitialized,

    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("edge endpoint not in node set: {0}")]
    UnknownEndpoint(String),
}
