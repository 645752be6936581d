//! # SMBIOS Platform
//!
//! Host-side half of the `smbios_tables` table: obtains the raw structure
//! table from the running system (or a dump) and feeds it through the
//! decoder in [`smbios_core`].
//!
//! ## Sources
//!
//! - [`SysfsSource`]: `/sys/firmware/dmi/tables` on Linux
//! - [`DumpFileSource`]: a raw table saved to disk
//! - [`MemorySource`]: bytes already in memory
//!
//! Any [`BlobSource`] implementation can be plugged into [`SmbiosTables`].
//!
//! ## Absence
//!
//! A host without SMBIOS data is not an error for the table. The reasons
//! are kept in [`AcquireError`] and logged at debug level, and the
//! generator produces zero rows.

#![warn(missing_docs)]

pub mod entry_point;
pub mod error;
pub mod source;
pub mod sysfs;
pub mod table;

#[cfg(test)]
mod test_util;

pub use smbios_core;

// Re-exports for convenience
pub use entry_point::{EntryPoint, Smbios2EntryPoint, Smbios3EntryPoint};
pub use error::{AcquireError, AcquireResult};
pub use source::{BlobSource, DumpFileSource, MemorySource, SmbiosBlob};
pub use sysfs::{SysfsConfig, SysfsSource, DEFAULT_SYSFS_TABLES_DIR};
pub use table::{smbios_tables, SmbiosTables};
