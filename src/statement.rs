//! Statement executor
//!
//! Parses one input line into a typed statement, validates field
//! constraints, and executes it against the table through a cursor.
//! No state is carried between lines except the open table itself.

use crate::constants::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};
use crate::error::{DbError, Result};
use crate::row::Row;
use crate::table::Table;

/// A parsed statement, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert { row: Row },
    Select,
}

/// What a successful execution produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementResult {
    /// The row was stored.
    Inserted,
    /// Rows from a full scan, in ascending key order.
    Rows(Vec<Row>),
}

impl Statement {
    /// Parse and validate one input line.
    ///
    /// Validation order is fixed, first failing check wins: token shape,
    /// then id sign, then string lengths.
    pub fn prepare(input: &str) -> Result<Statement> {
        let mut tokens = input.split_whitespace();

        match tokens.next() {
            Some("insert") => {
                let (id, username, email) =
                    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
                        (Some(id), Some(username), Some(email), None) => (id, username, email),
                        _ => return Err(DbError::SyntaxError),
                    };

                let id: i64 = id.parse().map_err(|_| DbError::SyntaxError)?;
                if id < 0 {
                    return Err(DbError::NegativeId);
                }
                let id = u32::try_from(id).map_err(|_| DbError::SyntaxError)?;

                if username.len() > COLUMN_USERNAME_SIZE || email.len() > COLUMN_EMAIL_SIZE {
                    return Err(DbError::StringTooLong);
                }

                Ok(Statement::Insert {
                    row: Row::new(id, username, email),
                })
            }
            Some("select") => Ok(Statement::Select),
            _ => Err(DbError::UnrecognizedStatement(input.trim().to_string())),
        }
    }

    /// Execute against the table.
    pub fn execute(self, table: &mut Table) -> Result<StatementResult> {
        match self {
            Statement::Insert { row } => {
                let key = row.id;
                let mut cursor = table.find(key)?;
                cursor.insert(key, &row)?;
                Ok(StatementResult::Inserted)
            }
            Statement::Select => {
                let mut rows = Vec::new();
                let mut cursor = table.start()?;
                while !cursor.end_of_table() {
                    rows.push(cursor.row()?);
                    cursor.advance()?;
                }
                Ok(StatementResult::Rows(rows))
            }
        }
    }
}
