//! # Table Generator
//!
//! Glue between a [`BlobSource`] and the decoder. One call acquires the
//! table once, decodes it and emits one row per structure. Failing to
//! acquire the table is not an error for the caller: the host simply has
//! no SMBIOS data and the result is empty.

use smbios_core::{decode_into, ColumnDefinition, QueryData, RowSink, SMBIOS_TABLES_COLUMNS};

use crate::source::BlobSource;
use crate::sysfs::SysfsSource;

/// `smbios_tables` generator over a blob source
#[derive(Debug, Clone, Default)]
pub struct SmbiosTables<S> {
    source: S,
}

impl<S: BlobSource> SmbiosTables<S> {
    /// Create over `source`
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Underlying source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Column schema of the generated rows
    #[must_use]
    pub const fn columns() -> &'static [ColumnDefinition] {
        &SMBIOS_TABLES_COLUMNS
    }

    /// Produce all rows
    #[must_use]
    pub fn generate(&self) -> QueryData {
        let mut rows = QueryData::new();
        self.generate_into(&mut rows);
        rows
    }

    /// Append all rows to `sink`, returning how many were appended
    pub fn generate_into<R: RowSink + ?Sized>(&self, sink: &mut R) -> usize {
        let blob = match self.source.acquire() {
            Ok(blob) => blob,
            Err(err) => {
                log::debug!("{}: no SMBIOS data: {}", self.source.name(), err);
                return 0;
            }
        };

        let table = blob.table();
        let count = decode_into(table, sink);
        log::debug!(
            "{}: decoded {} structures from {} bytes",
            self.source.name(),
            count,
            table.len()
        );
        count
    }
}

/// Rows for the running host, read through sysfs
#[must_use]
pub fn smbios_tables() -> QueryData {
    SmbiosTables::new(SysfsSource::default()).generate()
}

// =============================================================================
// TESTS
// =============================================================================
