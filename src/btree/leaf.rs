//! Leaf node codec
//!
//! Typed accessors over one raw page buffer. Every byte offset into a
//! node is computed here; no other module does page-offset arithmetic.
//!
//! A cell index at or past `LEAF_NODE_MAX_CELLS` is a programming-contract
//! violation (callers check capacity first), so the accessors assert
//! rather than return a recoverable error.

use bytes::{Buf, BufMut};

use crate::constants::{
    IS_ROOT_OFFSET, LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE, LEAF_NODE_KEY_SIZE,
    LEAF_NODE_MAX_CELLS, LEAF_NODE_NUM_CELLS_OFFSET, NODE_TYPE_OFFSET, PAGE_SIZE,
};

/// On-page node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

impl NodeType {
    fn from_tag(tag: u8) -> Self {
        match tag {
            0 => NodeType::Internal,
            1 => NodeType::Leaf,
            other => panic!("unknown node type tag {other}"),
        }
    }
}

/// Accessor layer over a leaf node's page buffer.
pub struct LeafNode<'a> {
    page: &'a mut [u8; PAGE_SIZE],
}

impl<'a> LeafNode<'a> {
    pub fn new(page: &'a mut [u8; PAGE_SIZE]) -> Self {
        Self { page }
    }

    /// Zero the header and stamp an empty leaf: type = leaf, not root,
    /// no parent, zero cells.
    pub fn initialize(&mut self) {
        self.page[..LEAF_NODE_HEADER_SIZE].fill(0);
        self.set_node_type(NodeType::Leaf);
    }

    // -------------------------------------------------------------------------
    // Header accessors
    // -------------------------------------------------------------------------

    pub fn node_type(&self) -> NodeType {
        NodeType::from_tag(self.page[NODE_TYPE_OFFSET])
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.page[NODE_TYPE_OFFSET] = node_type as u8;
    }

    pub fn is_root(&self) -> bool {
        self.page[IS_ROOT_OFFSET] != 0
    }

    pub fn set_root(&mut self, is_root: bool) {
        self.page[IS_ROOT_OFFSET] = is_root as u8;
    }

    pub fn num_cells(&self) -> u32 {
        self.read_u32(LEAF_NODE_NUM_CELLS_OFFSET)
    }

    pub fn set_num_cells(&mut self, n: u32) {
        self.write_u32(LEAF_NODE_NUM_CELLS_OFFSET, n);
    }

    // -------------------------------------------------------------------------
    // Cell accessors
    // -------------------------------------------------------------------------

    pub fn key(&self, cell_num: usize) -> u32 {
        self.read_u32(Self::cell_offset(cell_num))
    }

    pub fn set_key(&mut self, cell_num: usize, key: u32) {
        self.write_u32(Self::cell_offset(cell_num), key);
    }

    /// Serialized row bytes of a cell.
    pub fn value(&self, cell_num: usize) -> &[u8] {
        let start = Self::cell_offset(cell_num) + LEAF_NODE_KEY_SIZE;
        &self.page[start..start + LEAF_NODE_CELL_SIZE - LEAF_NODE_KEY_SIZE]
    }

    pub fn value_mut(&mut self, cell_num: usize) -> &mut [u8] {
        let start = Self::cell_offset(cell_num) + LEAF_NODE_KEY_SIZE;
        &mut self.page[start..start + LEAF_NODE_CELL_SIZE - LEAF_NODE_KEY_SIZE]
    }

    /// Copy one whole cell over another within this page.
    pub fn copy_cell(&mut self, src: usize, dst: usize) {
        let src_start = Self::cell_offset(src);
        let dst_start = Self::cell_offset(dst);
        self.page
            .copy_within(src_start..src_start + LEAF_NODE_CELL_SIZE, dst_start);
    }

    // -------------------------------------------------------------------------
    // Offset arithmetic (private to the codec)
    // -------------------------------------------------------------------------

    fn cell_offset(cell_num: usize) -> usize {
        assert!(
            cell_num < LEAF_NODE_MAX_CELLS,
            "cell index {cell_num} out of range"
        );
        LEAF_NODE_HEADER_SIZE + cell_num * LEAF_NODE_CELL_SIZE
    }

    fn read_u32(&self, offset: usize) -> u32 {
        let mut field = &self.page[offset..offset + 4];
        field.get_u32_le()
    }

    fn write_u32(&mut self, offset: usize, value: u32) {
        let mut field = &mut self.page[offset..offset + 4];
        field.put_u32_le(value);
    }
}
