//! Table
//!
//! The top-level handle binding a [`Pager`] to a root page number. Opened
//! from a filename, mutated by every insert, closed by flushing the pager.

use std::path::Path;

use crate::btree::{Cursor, LeafNode};
use crate::error::Result;
use crate::pager::Pager;

/// An open single-table database.
pub struct Table {
    pub(crate) pager: Pager,
    pub(crate) root_page_num: usize,
}

impl Table {
    /// Open a database file, creating a fresh empty table if it is new.
    ///
    /// A fresh file gets page 0 allocated and initialized as an empty
    /// root leaf.
    pub fn open(path: &Path) -> Result<Self> {
        let mut pager = Pager::open(path)?;

        if pager.num_pages() == 0 {
            let page = pager.get_page(0)?;
            let mut root = LeafNode::new(page);
            root.initialize();
            root.set_root(true);
            tracing::debug!(target: "leafdb::table", path = %path.display(), "created fresh table");
        } else {
            tracing::debug!(target: "leafdb::table", path = %path.display(), "opened existing table");
        }

        Ok(Self {
            pager,
            root_page_num: 0,
        })
    }

    /// Cursor at the start of the table, for a full ordered scan.
    pub fn start(&mut self) -> Result<Cursor<'_>> {
        Cursor::table_start(self)
    }

    /// Cursor at the position of `key`, or where it would be inserted.
    pub fn find(&mut self, key: u32) -> Result<Cursor<'_>> {
        Cursor::table_find(self, key)
    }

    /// Keys of the root leaf in physical slot order.
    ///
    /// Drives the `.btree` meta command; slot order equals key order
    /// because inserts keep cells sorted.
    pub fn leaf_keys(&mut self) -> Result<Vec<u32>> {
        let page = self.pager.get_page(self.root_page_num)?;
        let node = LeafNode::new(page);
        let num_cells = node.num_cells() as usize;
        Ok((0..num_cells).map(|i| node.key(i)).collect())
    }

    /// Flush all pages and sync the backing file.
    pub fn close(&mut self) -> Result<()> {
        self.pager.close()
    }
}
