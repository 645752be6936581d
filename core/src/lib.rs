//! # SMBIOS Core
//!
//! Decoding of the SMBIOS structure table area into inventory rows.
//!
//! The structure table is a flat concatenation of self-describing records.
//! Each record starts with a 4-byte [`StructureHeader`], followed by the
//! rest of its formatted region and a trailing string area terminated by a
//! double null byte. There is no record count and no index; the only way to
//! find structure `n + 1` is to fully measure structure `n`.
//!
//! ## Components
//!
//! - **Header**: explicit little-endian decode of the structure header
//! - **Types**: the DMTF type code registry used for row descriptions
//! - **Decoder**: the bounds-checked walk over the table
//! - **MD5**: content fingerprint of each structure
//! - **Record**: decoded records, result rows and the column schema
//!
//! ## Failure Policy
//!
//! Decoding never fails. Malformed or truncated input ends the scan at the
//! first structure that cannot be measured safely; everything decoded up to
//! that point is returned unchanged.
//!
//! ```text
//! offset 0                                                     len
//! ┌──────┬───────────┬──────────────┬──────┬───────────┬──────┐
//! │ hdr  │ formatted │ "str\0str\0" │ \0\0 │ hdr  ...  │      │
//! └──────┴───────────┴──────────────┴──────┴───────────┴──────┘
//! │<── header.length ──>│<── trailing strings ──>│
//! │<────────────── size ─────────────────────────>│
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod decoder;
pub mod header;
pub mod md5;
pub mod record;
pub mod types;

// Re-exports for convenience
pub use decoder::{decode, decode_into, decode_with_length, RawStructure, StructureIter};
pub use header::StructureHeader;
pub use md5::{Md5, Md5Hash};
pub use record::{
    ColumnDefinition, ColumnType, ColumnValue, DecodedRecord, QueryData, Row, RowSink,
    SMBIOS_TABLES_COLUMNS,
};
pub use types::{describe, KNOWN_TYPES};

/// Name of the table the rows are published under
pub const TABLE_NAME: &str = "smbios_tables";
