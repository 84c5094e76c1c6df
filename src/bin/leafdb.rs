//! leafdb binary
//!
//! Opens (or creates) a database file and runs the interactive command
//! interpreter over stdin/stdout. Logs go to stderr so the protocol
//! output on stdout stays byte-exact.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use leafdb::{Repl, Table};
use tracing_subscriber::{fmt, EnvFilter};

/// leafdb interpreter
#[derive(Parser, Debug)]
#[command(name = "leafdb")]
#[command(about = "Single-table, file-backed data store")]
#[command(version)]
struct Args {
    /// Database file (created if it does not exist)
    database: PathBuf,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let table = match Table::open(&args.database) {
        Ok(table) => table,
        Err(err) => {
            tracing::error!("failed to open {}: {}", args.database.display(), err);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = Repl::new(table).run(stdin.lock(), &mut stdout) {
        tracing::error!("fatal: {}", err);
        std::process::exit(1);
    }
}
