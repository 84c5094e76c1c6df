//! REPL
//!
//! The line-oriented command interpreter over an open [`Table`]. Reads one
//! line per iteration, dispatches meta commands (`.`-prefixed) or
//! statements, and writes protocol output to the given writer.
//!
//! The output text is a wire format: prompts, results, and error lines
//! are matched byte-for-byte by clients and tests, so nothing else may be
//! written to the output stream (logging goes to stderr via `tracing`).

use std::io::{BufRead, Write};

use crate::constants::{
    COMMON_NODE_HEADER_SIZE, LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE, LEAF_NODE_MAX_CELLS,
    LEAF_NODE_SPACE_FOR_CELLS, ROW_SIZE,
};
use crate::error::Result;
use crate::statement::{Statement, StatementResult};
use crate::table::Table;

const PROMPT: &str = "db > ";

/// A meta command, recognized by its leading `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MetaCommand {
    Exit,
    Constants,
    Btree,
    Unrecognized(String),
}

impl MetaCommand {
    fn parse(input: &str) -> Self {
        match input {
            ".exit" => MetaCommand::Exit,
            ".constants" => MetaCommand::Constants,
            ".btree" => MetaCommand::Btree,
            other => MetaCommand::Unrecognized(other.to_string()),
        }
    }
}

/// The command interpreter bound to one open table.
pub struct Repl {
    table: Table,
}

impl Repl {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Drive the interpreter until `.exit` or end of input.
    ///
    /// Statement-level errors are reported on `output` and the loop
    /// continues; fatal storage errors propagate. The table is flushed
    /// and closed on either way out.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input without `.exit`; flush rather than drop data.
                self.table.close()?;
                return Ok(());
            }
            let trimmed = line.trim();

            if trimmed.starts_with('.') {
                match MetaCommand::parse(trimmed) {
                    MetaCommand::Exit => {
                        self.table.close()?;
                        return Ok(());
                    }
                    MetaCommand::Constants => print_constants(output)?,
                    MetaCommand::Btree => self.print_tree(output)?,
                    MetaCommand::Unrecognized(text) => {
                        writeln!(output, "Unrecognized command '{text}'.")?;
                    }
                }
                continue;
            }

            self.handle_statement(trimmed, output)?;
        }
    }

    fn handle_statement<W: Write>(&mut self, line: &str, output: &mut W) -> Result<()> {
        let outcome = Statement::prepare(line).and_then(|s| s.execute(&mut self.table));

        match outcome {
            Ok(StatementResult::Inserted) => writeln!(output, "Executed.")?,
            Ok(StatementResult::Rows(rows)) => {
                for row in rows {
                    writeln!(output, "{row}")?;
                }
                writeln!(output, "Executed.")?;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => writeln!(output, "{err}")?,
        }

        Ok(())
    }

    fn print_tree<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let keys = self.table.leaf_keys()?;
        writeln!(output, "Tree:")?;
        writeln!(output, "leaf (size {})", keys.len())?;
        for (cell_num, key) in keys.iter().enumerate() {
            writeln!(output, " - {cell_num} : {key}")?;
        }
        Ok(())
    }
}

fn print_constants<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Constants:")?;
    writeln!(output, "ROW_SIZE: {ROW_SIZE}")?;
    writeln!(output, "COMMON_NODE_HEADER_SIZE: {COMMON_NODE_HEADER_SIZE}")?;
    writeln!(output, "LEAF_NODE_HEADER_SIZE: {LEAF_NODE_HEADER_SIZE}")?;
    writeln!(output, "LEAF_NODE_CELL_SIZE: {LEAF_NODE_CELL_SIZE}")?;
    writeln!(output, "LEAF_NODE_SPACE_FOR_CELLS: {LEAF_NODE_SPACE_FOR_CELLS}")?;
    writeln!(output, "LEAF_NODE_MAX_CELLS: {LEAF_NODE_MAX_CELLS}")?;
    Ok(())
}
