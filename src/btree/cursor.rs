//! Cursor
//!
//! A transient position within the table: `(page_num, cell_num)` plus an
//! end-of-table flag. Cursors drive ordered scans and locate insertion
//! points; one is created per statement execution and discarded after.

use crate::btree::LeafNode;
use crate::constants::LEAF_NODE_MAX_CELLS;
use crate::error::{DbError, Result};
use crate::row::Row;
use crate::table::Table;

/// A position within the table, exclusively owned by one statement
/// execution.
pub struct Cursor<'a> {
    table: &'a mut Table,
    page_num: usize,
    cell_num: usize,
    end_of_table: bool,
}

impl<'a> Cursor<'a> {
    /// Position at the first cell of the root leaf.
    pub fn table_start(table: &'a mut Table) -> Result<Self> {
        let page_num = table.root_page_num;
        let page = table.pager.get_page(page_num)?;
        let num_cells = LeafNode::new(page).num_cells();

        Ok(Self {
            table,
            page_num,
            cell_num: 0,
            end_of_table: num_cells == 0,
        })
    }

    /// Binary-search the root leaf for `key`.
    ///
    /// The cursor lands on the first cell whose key is `>= key`: an exact
    /// match, or the insertion point (possibly one past the last cell).
    pub fn table_find(table: &'a mut Table, key: u32) -> Result<Self> {
        let page_num = table.root_page_num;
        let page = table.pager.get_page(page_num)?;
        let node = LeafNode::new(page);
        let num_cells = node.num_cells() as usize;

        let mut min_index = 0usize;
        let mut one_past_max = num_cells;
        while min_index != one_past_max {
            let index = (min_index + one_past_max) / 2;
            let key_at_index = node.key(index);
            if key == key_at_index {
                min_index = index;
                break;
            }
            if key < key_at_index {
                one_past_max = index;
            } else {
                min_index = index + 1;
            }
        }

        Ok(Self {
            table,
            page_num,
            cell_num: min_index,
            end_of_table: min_index == num_cells,
        })
    }

    pub fn end_of_table(&self) -> bool {
        self.end_of_table
    }

    /// Deserialize the row under the cursor.
    pub fn row(&mut self) -> Result<Row> {
        let page = self.table.pager.get_page(self.page_num)?;
        let node = LeafNode::new(page);
        Ok(Row::deserialize(node.value(self.cell_num)))
    }

    /// Step to the next cell; past the last cell the cursor reports
    /// end-of-table (there is no sibling leaf to move to at this stage).
    pub fn advance(&mut self) -> Result<()> {
        let page = self.table.pager.get_page(self.page_num)?;
        let num_cells = LeafNode::new(page).num_cells() as usize;

        self.cell_num += 1;
        if self.cell_num >= num_cells {
            self.end_of_table = true;
        }
        Ok(())
    }

    /// Insert a keyed row at the cursor position, keeping cells sorted.
    ///
    /// Rejected whole on a full leaf or an exactly-matching key; nothing
    /// is partially applied.
    pub fn insert(&mut self, key: u32, row: &Row) -> Result<()> {
        let cell_num = self.cell_num;
        let page = self.table.pager.get_page(self.page_num)?;
        let mut node = LeafNode::new(page);

        let num_cells = node.num_cells() as usize;
        if num_cells >= LEAF_NODE_MAX_CELLS {
            return Err(DbError::TableFull);
        }
        if cell_num < num_cells && node.key(cell_num) == key {
            return Err(DbError::DuplicateKey);
        }

        // Shift cells [cell_num, num_cells) one slot right to open a gap.
        for i in (cell_num..num_cells).rev() {
            node.copy_cell(i, i + 1);
        }

        node.set_key(cell_num, key);
        row.serialize(node.value_mut(cell_num));
        node.set_num_cells(num_cells as u32 + 1);

        Ok(())
    }
}
