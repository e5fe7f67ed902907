//! Error types for the planning state model

use std::path::PathBuf;

use thiserror::Error;

use super::resource::Resource;

/// A catalog entry that breaks one of the load-time allocation constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog entry #{index} ('{id}') is invalid: {violation}")]
pub struct CatalogValidationError {
    /// Position of the entry in catalog order
    pub index: usize,
    /// Identifier of the offending entry
    pub id: String,
    /// Which constraint was violated
    pub violation: Violation,
}

/// Constraint broken by a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("entry is not a JSON object")]
    NotAnObject,
    #[error("field '{0}' is missing")]
    MissingField(&'static str),
    #[error("field '{field}' is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("cpu {0} is outside 1..=4")]
    CpuOutOfRange(i64),
    #[error("ram {0} MB is not a positive multiple of 256")]
    RamNotAligned(i64),
    #[error("disk {0} MB is not a positive multiple of 512")]
    DiskNotAligned(i64),
    #[error("{field} {value} MB does not fit in 32 bits")]
    TooLarge { field: &'static str, value: i64 },
}

/// Failure to obtain a usable catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] CatalogValidationError),
}

/// Rejected selection action; the selection is left as it was
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no image matches '{0}'")]
    TemplateNotFound(String),

    #[error("{value} is not a valid {resource} allocation")]
    InvalidAllocationValue { resource: Resource, value: u32 },

    #[error("no image selected")]
    NoTemplateSelected,
}

/// Rejected allocation list mutation; the list is left as it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("index {index} is out of range for {len} planned instances")]
    IndexOutOfRange { index: usize, len: usize },
}
