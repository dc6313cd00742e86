use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejections raised while turning submitted text into keys.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("field {position} (`{field}`) is not a valid key: {reason}")]
    MalformedKey {
        position: usize,
        field: String,
        reason: String,
    },
}

/// A broken leftist invariant, located by the pre-order index of the node.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StructureError {
    #[error("node {node} is greater than one of its children")]
    HeapOrder { node: usize },

    #[error("node {node} has a right subtree ranked above its left subtree")]
    Leftist { node: usize },

    #[error("node {node} has a right child but no left child")]
    MissingLeft { node: usize },

    #[error("node {node} has rank {found}, expected {expected}")]
    Rank {
        node: usize,
        expected: u32,
        found: u32,
    },
}

#[derive(Debug, ThisError, PartialEq, Clone)]
pub enum Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("structure error: {0}")]
    Structure(#[from] StructureError),
}
