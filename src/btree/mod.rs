//! B-Tree Module
//!
//! A single root leaf node is the whole tree at this stage: point lookup
//! by key, ordered full scan via a cursor, and sorted cell insertion with
//! duplicate-key rejection and full-node detection. Internal nodes and
//! leaf splitting do not exist yet.
//!
//! ## Leaf Page Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (10)                                  │
//! │ ┌───────┬────────┬──────────┬─────────────┐  │
//! │ │Type(1)│Root (1)│Parent (4)│Num Cells (4)│  │
//! │ └───────┴────────┴──────────┴─────────────┘  │
//! ├──────────────────────────────────────────────┤
//! │ Cell 0                                       │
//! │ ┌─────────┬────────────────────────────────┐ │
//! │ │ Key (4) │ Serialized Row (293)           │ │
//! │ └─────────┴────────────────────────────────┘ │
//! ├──────────────────────────────────────────────┤
//! │ ... up to 13 cells, sorted by key            │
//! └──────────────────────────────────────────────┘
//! ```

mod cursor;
mod leaf;

pub use cursor::Cursor;
pub use leaf::{LeafNode, NodeType};
