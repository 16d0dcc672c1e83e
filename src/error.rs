// ⚠️ Error Types
// Typed failures for the repository, the record parser and file persistence

use crate::repository::EntityId;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// REPOSITORY ERRORS
// ============================================================================

/// Hard failures raised by `Repository` membership checks.
///
/// Callers are expected to report these and keep going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error("item with ID {0} already exists")]
    DuplicateKey(EntityId),

    #[error("item with ID {0} not found")]
    NotFound(EntityId),

    #[error("quantity cannot be negative, got {0}")]
    InvalidArgument(i64),

    #[error("quantity overflow for item with ID {id}: {current} + {delta}")]
    QuantityOverflow {
        id: EntityId,
        current: i64,
        delta: i64,
    },
}

pub type RepoResult<T> = Result<T, RepoError>;

// ============================================================================
// PARSER ERRORS
// ============================================================================

/// Failures while reading line-oriented student records.
///
/// Any of these aborts the whole read.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing fields in line {line}: expected {expected}, found {found}: {raw}")]
    MissingField {
        line: u64,
        expected: usize,
        found: usize,
        raw: String,
    },

    #[error("invalid numeric format for {field} in line {line}: {raw}")]
    InvalidFormat {
        line: u64,
        field: &'static str,
        raw: String,
    },

    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// 1-based line of the offending record, when known
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::MissingField { line, .. } | ParseError::InvalidFormat { line, .. } => {
                Some(*line)
            }
            ParseError::Csv(err) => err.position().map(|p| p.line()),
            ParseError::Io { .. } => None,
        }
    }
}

// ============================================================================
// PERSISTENCE ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt data file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize data for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// TESTS
// ============================================================================
