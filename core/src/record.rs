//! # Decoded Records and Result Rows
//!
//! A [`DecodedRecord`] is the typed result of measuring one structure. The
//! query layer consumes key/value [`Row`]s; [`DecodedRecord::to_row`] is the
//! only place the two meet, and [`SMBIOS_TABLES_COLUMNS`] describes the
//! columns a row may carry.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::md5::Md5Hash;

// =============================================================================
// COLUMN SCHEMA
// =============================================================================

/// Column value type as seen by the query layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// UTF-8 text
    Text,
}

/// Column name and type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name
    pub name: &'static str,
    /// Column type
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }
}

/// Columns of the `smbios_tables` table, in emission order
pub const SMBIOS_TABLES_COLUMNS: [ColumnDefinition; 7] = [
    ColumnDefinition::new("number", ColumnType::Integer),
    ColumnDefinition::new("type", ColumnType::Integer),
    ColumnDefinition::new("description", ColumnType::Text),
    ColumnDefinition::new("handle", ColumnType::BigInt),
    ColumnDefinition::new("header_size", ColumnType::Integer),
    ColumnDefinition::new("size", ColumnType::Integer),
    ColumnDefinition::new("md5", ColumnType::Text),
];

// =============================================================================
// ROWS
// =============================================================================

/// Single column value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    /// Value of an `Integer` column
    Integer(i64),
    /// Value of a `BigInt` column
    BigInt(i64),
    /// Value of a `Text` column
    Text(String),
}

impl ColumnValue {
    /// Type of this value
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        match self {
            Self::Integer(_) => ColumnType::Integer,
            Self::BigInt(_) => ColumnType::BigInt,
            Self::Text(_) => ColumnType::Text,
        }
    }

    /// Integer payload, for either integer width
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) | Self::BigInt(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Text payload
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) | Self::BigInt(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One result row: columns in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(&'static str, ColumnValue)>,
}

impl Row {
    /// Create an empty row
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Set a column, replacing any previous value under the same name
    pub fn insert(&mut self, name: &'static str, value: ColumnValue) {
        match self.columns.iter().position(|(n, _)| *n == name) {
            Some(index) => self.columns[index].1 = value,
            None => self.columns.push((name, value)),
        }
    }

    /// Get a column value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnValue> {
        self.columns
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Whether a column is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of columns present
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names, in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(n, _)| *n)
    }

    /// Columns, in order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ColumnValue)> {
        self.columns.iter().map(|(n, v)| (*n, v))
    }
}

/// Rows produced by one table scan
pub type QueryData = Vec<Row>;

/// Append-only destination for result rows
pub trait RowSink {
    /// Append a row
    fn push(&mut self, row: Row);
}

impl RowSink for Vec<Row> {
    fn push(&mut self, row: Row) {
        Vec::push(self, row);
    }
}

// =============================================================================
// DECODED RECORD
// =============================================================================

/// One decoded SMBIOS structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    /// Zero-based encounter index
    pub number: usize,
    /// Byte offset of the structure in the table
    pub offset: usize,
    /// Raw structure type
    pub structure_type: u8,
    /// Category name, when the type is registered
    pub description: Option<&'static str>,
    /// Firmware handle, widened
    pub handle: u64,
    /// Declared formatted length
    pub header_size: u8,
    /// Total span: formatted region, strings and terminator
    pub size: usize,
    /// Digest of the `size` bytes at `offset`
    pub md5: Md5Hash,
}

impl DecodedRecord {
    /// Offset of the byte following this structure
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }

    /// Convert into a result row
    #[must_use]
    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("number", ColumnValue::Integer(self.number as i64));
        row.insert("type", ColumnValue::Integer(i64::from(self.structure_type)));
        if let Some(description) = self.description {
            row.insert("description", ColumnValue::Text(String::from(description)));
        }
        row.insert("handle", ColumnValue::BigInt(self.handle as i64));
        row.insert("header_size", ColumnValue::Integer(i64::from(self.header_size)));
        row.insert("size", ColumnValue::Integer(self.size as i64));
        row.insert("md5", ColumnValue::Text(self.md5.to_hex()));
        row
    }
}

impl From<&DecodedRecord> for Row {
    fn from(record: &DecodedRecord) -> Self {
        record.to_row()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md5::Md5;
    use alloc::vec;

    fn record(structure_type: u8, description: Option<&'static str>) -> DecodedRecord {
        DecodedRecord {
            number: 3,
            offset: 24,
            structure_type,
            description,
            handle: 0x0102,
            header_size: 0x1a,
            size: 40,
            md5: Md5::digest(b"abc"),
        }
    }

    #[test]
    fn test_row_column_order() {
        let row = record(1, Some("System Information")).to_row();
        let names: Vec<_> = row.names().collect();
        let schema: Vec<_> = SMBIOS_TABLES_COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(names, schema);
    }

    #[test]
    fn test_row_values() {
        let row = record(1, Some("System Information")).to_row();
        assert_eq!(row.get("number"), Some(&ColumnValue::Integer(3)));
        assert_eq!(row.get("type"), Some(&ColumnValue::Integer(1)));
        assert_eq!(
            row.get("description").and_then(ColumnValue::as_str),
            Some("System Information")
        );
        assert_eq!(row.get("handle"), Some(&ColumnValue::BigInt(0x0102)));
        assert_eq!(row.get("header_size"), Some(&ColumnValue::Integer(0x1a)));
        assert_eq!(row.get("size"), Some(&ColumnValue::Integer(40)));
        assert_eq!(
            row.get("md5").and_then(ColumnValue::as_str),
            Some("900150983cd24fb0d6963f7d28e17f72")
        );
    }

    #[test]
    fn test_row_types_match_schema() {
        let row = record(0, Some("BIOS Information")).to_row();
        for column in &SMBIOS_TABLES_COLUMNS {
            let value = row.get(column.name);
            assert_eq!(value.map(ColumnValue::column_type), Some(column.column_type));
        }
    }

    #[test]
    fn test_row_without_description() {
        let row = record(200, None).to_row();
        assert!(!row.contains("description"));
        assert_eq!(row.len(), SMBIOS_TABLES_COLUMNS.len() - 1);
    }

    #[test]
    fn test_row_insert_replaces() {
        let mut row = Row::new();
        row.insert("size", ColumnValue::Integer(1));
        row.insert("size", ColumnValue::Integer(2));
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("size").and_then(ColumnValue::as_i64), Some(2));
    }

    #[test]
    fn test_column_value_display() {
        assert_eq!(ColumnValue::BigInt(65535).to_string(), "65535");
        assert_eq!(ColumnValue::Text(String::from("Inactive")).to_string(), "Inactive");
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: QueryData = vec![];
        RowSink::push(&mut sink, record(4, None).to_row());
        assert_eq!(sink.len(), 1);
        assert_eq!(record(4, None).end(), 64);
    }
}
