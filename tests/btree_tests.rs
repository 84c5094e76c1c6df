//! Tests for the B-tree layer
//!
//! These tests verify:
//! - Cursor positioning on empty and populated leaves
//! - Sorted insertion regardless of arrival order
//! - Duplicate-key rejection
//! - Full-leaf detection at exactly LEAF_NODE_MAX_CELLS

use std::path::PathBuf;

use leafdb::btree::{LeafNode, NodeType};
use leafdb::constants::{LEAF_NODE_MAX_CELLS, PAGE_SIZE};
use leafdb::{DbError, Row, Table};
use tempfile::TempDir;

fn setup_table() -> (TempDir, Table) {
    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("test.db");
    let table = Table::open(&path).unwrap();
    (temp_dir, table)
}

fn insert_id(table: &mut Table, id: u32) -> leafdb::Result<()> {
    let row = Row::new(id, &format!("user{id}"), &format!("user{id}@example.com"));
    let mut cursor = table.find(id)?;
    cursor.insert(id, &row)
}

fn scan_ids(table: &mut Table) -> Vec<u32> {
    let mut ids = Vec::new();
    let mut cursor = table.start().unwrap();
    while !cursor.end_of_table() {
        ids.push(cursor.row().unwrap().id);
        cursor.advance().unwrap();
    }
    ids
}

// =============================================================================
// Leaf Codec Tests
// =============================================================================

#[test]
fn test_initialize_stamps_an_empty_leaf() {
    let mut page = [0xFFu8; PAGE_SIZE];
    let mut node = LeafNode::new(&mut page);
    node.initialize();

    assert_eq!(node.node_type(), NodeType::Leaf);
    assert!(!node.is_root());
    assert_eq!(node.num_cells(), 0);
}

#[test]
fn test_root_flag_round_trips() {
    let mut page = [0u8; PAGE_SIZE];
    let mut node = LeafNode::new(&mut page);
    node.initialize();

    node.set_root(true);
    assert!(node.is_root());
    node.set_root(false);
    assert!(!node.is_root());
}

#[test]
fn test_key_and_value_accessors_round_trip() {
    let mut page = [0u8; PAGE_SIZE];
    let mut node = LeafNode::new(&mut page);
    node.initialize();

    node.set_key(0, 0xDEAD_BEEF);
    node.value_mut(0)[0] = 0x7F;

    assert_eq!(node.key(0), 0xDEAD_BEEF);
    assert_eq!(node.value(0)[0], 0x7F);
}

// =============================================================================
// Cursor Positioning Tests
// =============================================================================

#[test]
fn test_start_on_empty_table_is_end() {
    let (_temp, mut table) = setup_table();

    let cursor = table.start().unwrap();
    assert!(cursor.end_of_table());
}

#[test]
fn test_find_on_empty_table_is_end() {
    let (_temp, mut table) = setup_table();

    let cursor = table.find(5).unwrap();
    assert!(cursor.end_of_table());
}

#[test]
fn test_start_on_populated_table_is_not_end() {
    let (_temp, mut table) = setup_table();
    insert_id(&mut table, 1).unwrap();

    let cursor = table.start().unwrap();
    assert!(!cursor.end_of_table());
}

// =============================================================================
// Sorted Insertion Tests
// =============================================================================

#[test]
fn test_cells_stay_sorted_after_out_of_order_inserts() {
    let (_temp, mut table) = setup_table();

    for id in [3, 1, 2] {
        insert_id(&mut table, id).unwrap();
    }

    assert_eq!(table.leaf_keys().unwrap(), vec![1, 2, 3]);
    assert_eq!(scan_ids(&mut table), vec![1, 2, 3]);
}

#[test]
fn test_scan_ascending_after_descending_inserts() {
    let (_temp, mut table) = setup_table();

    for id in (1..=10).rev() {
        insert_id(&mut table, id).unwrap();
    }

    assert_eq!(scan_ids(&mut table), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_shift_preserves_existing_rows() {
    let (_temp, mut table) = setup_table();

    insert_id(&mut table, 10).unwrap();
    insert_id(&mut table, 5).unwrap();

    let mut cursor = table.find(10).unwrap();
    let row = cursor.row().unwrap();
    assert_eq!(row.id, 10);
    assert_eq!(row.username, "user10");
    assert_eq!(row.email, "user10@example.com");
}

// =============================================================================
// Duplicate Key Tests
// =============================================================================

#[test]
fn test_duplicate_key_rejected() {
    let (_temp, mut table) = setup_table();

    insert_id(&mut table, 1).unwrap();
    let result = insert_id(&mut table, 1);

    assert!(matches!(result, Err(DbError::DuplicateKey)));
    assert_eq!(scan_ids(&mut table), vec![1]);
}

#[test]
fn test_duplicate_rejection_leaves_table_unchanged() {
    let (_temp, mut table) = setup_table();

    insert_id(&mut table, 2).unwrap();
    let row = Row::new(2, "other", "other@example.com");
    let mut cursor = table.find(2).unwrap();
    assert!(cursor.insert(2, &row).is_err());

    let mut cursor = table.find(2).unwrap();
    assert_eq!(cursor.row().unwrap().username, "user2");
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_leaf_holds_exactly_max_cells() {
    let (_temp, mut table) = setup_table();

    for id in 0..LEAF_NODE_MAX_CELLS as u32 {
        insert_id(&mut table, id).unwrap();
    }

    assert_eq!(scan_ids(&mut table).len(), LEAF_NODE_MAX_CELLS);
}

#[test]
fn test_insert_into_full_leaf_fails() {
    let (_temp, mut table) = setup_table();

    for id in 0..LEAF_NODE_MAX_CELLS as u32 {
        insert_id(&mut table, id).unwrap();
    }

    let result = insert_id(&mut table, LEAF_NODE_MAX_CELLS as u32);
    assert!(matches!(result, Err(DbError::TableFull)));

    // Nothing was partially applied.
    assert_eq!(scan_ids(&mut table).len(), LEAF_NODE_MAX_CELLS);
}
