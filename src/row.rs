//! Row codec
//!
//! Serializes the table's fixed three-column record (id, username, email)
//! to and from its 293-byte on-page form.
//!
//! ## Serialized Layout
//! ```text
//! ┌──────────┬───────────────────────┬───────────────────────┐
//! │ id (4)   │ username (33)         │ email (256)           │
//! │ u32 LE   │ NUL-padded bytes      │ NUL-padded bytes      │
//! └──────────┴───────────────────────┴───────────────────────┘
//! ```
//!
//! String fields shorter than their maximum are padded with zero bytes;
//! decoding stops at the first NUL or at the field's maximum width,
//! whichever comes first, so every valid row round-trips byte-exactly.

use std::fmt;

use bytes::{Buf, BufMut};

use crate::constants::{EMAIL_SIZE, ROW_SIZE, USERNAME_SIZE};

/// One logical record of the table's fixed schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    /// Build a row from already-validated fields.
    ///
    /// Length limits (32/255 bytes) are enforced by the statement layer
    /// before a `Row` is constructed.
    pub fn new(id: u32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Serialize into exactly [`ROW_SIZE`] bytes.
    ///
    /// `dst.len() == ROW_SIZE` is a caller contract.
    pub fn serialize(&self, mut dst: &mut [u8]) {
        assert_eq!(dst.len(), ROW_SIZE, "row destination must be ROW_SIZE bytes");
        debug_assert!(self.username.len() < USERNAME_SIZE);
        debug_assert!(self.email.len() < EMAIL_SIZE);

        dst.put_u32_le(self.id);
        dst.put_slice(self.username.as_bytes());
        dst.put_bytes(0, USERNAME_SIZE - self.username.len());
        dst.put_slice(self.email.as_bytes());
        dst.put_bytes(0, EMAIL_SIZE - self.email.len());
    }

    /// Deserialize from exactly [`ROW_SIZE`] bytes.
    pub fn deserialize(mut src: &[u8]) -> Self {
        assert_eq!(src.len(), ROW_SIZE, "row source must be ROW_SIZE bytes");

        let id = src.get_u32_le();
        let username = decode_padded(&src[..USERNAME_SIZE]);
        src.advance(USERNAME_SIZE);
        let email = decode_padded(&src[..EMAIL_SIZE]);

        Self { id, username, email }
    }
}

/// Decode a NUL-padded field back to its logical content.
fn decode_padded(field: &[u8]) -> String {
    let len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..len]).into_owned()
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}
