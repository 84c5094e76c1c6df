//! # leafdb
//!
//! A single-table, file-backed data store with:
//! - A page-oriented file format (4096-byte pages)
//! - A page cache ("pager") with load-on-demand and flush-on-close
//! - A B-tree leaf structure storing fixed-size rows as sorted key/value cells
//! - A line-oriented command interpreter over `insert` / `select`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         REPL                                 │
//! │            (prompt, meta commands, result text)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Statement Executor                           │
//! │             (parse, validate, execute)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Table                                  │
//! │              (pager + root page number)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   B-Tree    │          │    Pager    │
//!   │ (leaf cells)│──pages──▶│ (page cache)│
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  Database   │
//!                           │    File     │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod constants;

pub mod row;
pub mod pager;
pub mod btree;
pub mod table;
pub mod statement;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DbError, Result};
pub use repl::Repl;
pub use row::Row;
pub use statement::{Statement, StatementResult};
pub use table::Table;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of leafdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
