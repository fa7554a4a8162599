//! Prepare stage: raw text to a [`Statement`].

use tracing::debug;

use crate::error::PrepareError;
use crate::row::Row;

pub type PrepareResult<T> = Result<T, PrepareError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

/// Parses one input line, already stripped of its newline.
///
/// `insert <id> <username> <email>` takes exactly three whitespace separated
/// arguments. `select` must be the whole line, with no surrounding whitespace.
pub fn prepare(input: &str) -> PrepareResult<Statement> {
    if input == "select" {
        return Ok(Statement::Select);
    }

    let mut tokens = input.split_whitespace();
    let keyword = tokens.next().unwrap_or("");

    match keyword {
        "insert" => prepare_insert(tokens),
        _ => Err(PrepareError::UnrecognizedStatement(keyword.to_string())),
    }
}

fn prepare_insert<'a>(mut args: impl Iterator<Item = &'a str>) -> PrepareResult<Statement> {
    let (Some(id), Some(username), Some(email), None) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        return Err(PrepareError::SyntaxError);
    };

    let id = token_to_id(id)?;
    let row = Row::new(id, username, email).map_err(|e| {
        debug!(error = %e, "insert arguments rejected");
        PrepareError::from(e)
    })?;
    Ok(Statement::Insert(row))
}

// Negative, non-numeric and out-of-range ids all fail the same way.
fn token_to_id(token: &str) -> PrepareResult<u32> {
    token.parse::<u32>().map_err(|_| PrepareError::SyntaxError)
}
