//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::types::{NexusType, ValueKind};

/// Domain errors represent violations of the NeXus data model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown base class: {0}")]
    UnknownBaseClass(String),

    #[error("object id space exhausted")]
    OidExhausted,

    #[error("invalid node name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("not a group: {0}")]
    NotAGroup(String),

    #[error("no class given for missing group: {0}")]
    MissingClass(String),

    #[error("group {path} is {found}, expected {expected}")]
    ClassMismatch {
        path: String,
        expected: String,
        found: String,
    },

    #[error("field '{field}' of type {expected} cannot hold {found} values")]
    TypeMismatch {
        field: String,
        expected: NexusType,
        found: ValueKind,
    },

    #[error("shape {shape:?} needs {expected} elements, got {found}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        found: usize,
    },

    #[error("invalid {nx_type} value '{value}'")]
    InvalidValue { nx_type: NexusType, value: String },

    #[error("link cycle detected at {0}")]
    LinkCycle(String),

    #[error("link target does not exist: {0}")]
    DanglingLink(String),

    #[error("invalid NXDL: {0}")]
    InvalidNxdl(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
