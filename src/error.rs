//! Error types for leafdb
//!
//! Provides a unified error type for all operations. The `Display` text of
//! the statement-level variants is part of the REPL wire protocol and must
//! not change.

use thiserror::Error;

use crate::constants::TABLE_MAX_PAGES;

/// Result type alias using DbError
pub type Result<T> = std::result::Result<T, DbError>;

/// Unified error type for leafdb operations
#[derive(Debug, Error)]
pub enum DbError {
    // -------------------------------------------------------------------------
    // Statement Errors (recoverable: reported, then the REPL continues)
    // -------------------------------------------------------------------------
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),

    #[error("ID must be positive.")]
    NegativeId,

    #[error("String is too long.")]
    StringTooLong,

    // -------------------------------------------------------------------------
    // Execution Errors (recoverable)
    // -------------------------------------------------------------------------
    #[error("Error: Table full.")]
    TableFull,

    #[error("Error: Duplicate key.")]
    DuplicateKey,

    // -------------------------------------------------------------------------
    // Storage Errors (fatal: terminate the process with a non-zero status)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt database file: {0}")]
    Corrupt(String),

    #[error("page number {0} is out of bounds (table maximum is {max} pages)", max = TABLE_MAX_PAGES)]
    PageOutOfBounds(usize),
}

impl DbError {
    /// Whether this error must abort the process.
    ///
    /// Statement-level errors are reported on the output stream and the
    /// interpreter moves on to the next line; storage errors cannot be
    /// recovered in-band.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DbError::Io(_) | DbError::Corrupt(_) | DbError::PageOutOfBounds(_)
        )
    }
}
