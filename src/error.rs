//! Error types for the row store.
//!
//! The `Display` of every variant is the exact message the REPL prints, so the
//! driver can report an error with a plain `writeln!`.

use thiserror::Error;

/// Failure to build a [`Row`](crate::Row) from text that cannot be stored in a fixed-width column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("username is longer than {} bytes", crate::row::USERNAME_SIZE)]
    UsernameTooLong,

    #[error("email is longer than {} bytes", crate::row::EMAIL_SIZE)]
    EmailTooLong,

    /// A NUL byte would read back as the end of the column.
    #[error("text contains a NUL byte")]
    ContainsNul,
}

/// Errors reported by the prepare stage. None of them touch the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    /// Recognized keyword, malformed arguments. Covers a wrong argument
    /// count, an id that is not a `u32`, and text that does not fit its column.
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    /// Leading token matches no known statement.
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),
}

impl From<RowError> for PrepareError {
    fn from(_: RowError) -> Self {
        PrepareError::SyntaxError
    }
}

/// Errors reported by the execute stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error("Error: Table full.")]
    TableFull,
}
