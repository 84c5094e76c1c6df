//! On-disk layout constants
//!
//! Every size and offset in the page format is derived here by expression
//! so the arithmetic is auditable in one place. Nothing outside this
//! module hard-codes a byte offset.

use std::mem::size_of;

// =============================================================================
// Page / Table Geometry
// =============================================================================

/// Size of one page, in bytes. Pages are read and written as whole blocks.
pub const PAGE_SIZE: usize = 4096;

/// Hard ceiling on the number of pages a table may occupy.
pub const TABLE_MAX_PAGES: usize = 100;

// =============================================================================
// Row Layout
// =============================================================================

/// Maximum username length accepted by an insert, in bytes.
pub const COLUMN_USERNAME_SIZE: usize = 32;

/// Maximum email length accepted by an insert, in bytes.
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// Serialized width of the id field.
pub const ID_SIZE: usize = size_of::<u32>();

/// Serialized width of the username field (content plus one reserved NUL).
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE + 1;

/// Serialized width of the email field (content plus one reserved NUL).
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE + 1;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;

/// Total serialized size of one row: 4 + 33 + 256 = 293 bytes.
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

// =============================================================================
// Common Node Header Layout
// =============================================================================

pub const NODE_TYPE_SIZE: usize = size_of::<u8>();
pub const NODE_TYPE_OFFSET: usize = 0;

pub const IS_ROOT_SIZE: usize = size_of::<u8>();
pub const IS_ROOT_OFFSET: usize = NODE_TYPE_OFFSET + NODE_TYPE_SIZE;

/// Parent pointer is a placeholder until internal nodes exist; always 0.
pub const PARENT_POINTER_SIZE: usize = size_of::<u32>();
pub const PARENT_POINTER_OFFSET: usize = IS_ROOT_OFFSET + IS_ROOT_SIZE;

/// Header fields shared by every node type: 1 + 1 + 4 = 6 bytes.
pub const COMMON_NODE_HEADER_SIZE: usize =
    NODE_TYPE_SIZE + IS_ROOT_SIZE + PARENT_POINTER_SIZE;

// =============================================================================
// Leaf Node Header Layout
// =============================================================================

pub const LEAF_NODE_NUM_CELLS_SIZE: usize = size_of::<u32>();
pub const LEAF_NODE_NUM_CELLS_OFFSET: usize = COMMON_NODE_HEADER_SIZE;

/// Full leaf header: common header plus the cell count, 10 bytes.
pub const LEAF_NODE_HEADER_SIZE: usize =
    COMMON_NODE_HEADER_SIZE + LEAF_NODE_NUM_CELLS_SIZE;

// =============================================================================
// Leaf Node Body Layout
// =============================================================================

pub const LEAF_NODE_KEY_SIZE: usize = size_of::<u32>();
pub const LEAF_NODE_KEY_OFFSET: usize = 0;

pub const LEAF_NODE_VALUE_SIZE: usize = ROW_SIZE;
pub const LEAF_NODE_VALUE_OFFSET: usize = LEAF_NODE_KEY_OFFSET + LEAF_NODE_KEY_SIZE;

/// One cell: 4-byte key followed by a serialized row, 297 bytes.
pub const LEAF_NODE_CELL_SIZE: usize = LEAF_NODE_KEY_SIZE + LEAF_NODE_VALUE_SIZE;

/// Body bytes available for cells: 4096 - 10 = 4086.
pub const LEAF_NODE_SPACE_FOR_CELLS: usize = PAGE_SIZE - LEAF_NODE_HEADER_SIZE;

/// Cells per leaf: floor(4086 / 297) = 13.
pub const LEAF_NODE_MAX_CELLS: usize = LEAF_NODE_SPACE_FOR_CELLS / LEAF_NODE_CELL_SIZE;
