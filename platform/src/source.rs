//! # Blob Sources
//!
//! A [`BlobSource`] fetches the raw structure table from somewhere: the
//! running host, a dump on disk, or memory. The decoder never calls back
//! into a source; the table generator asks once per scan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry_point::EntryPoint;
use crate::error::{AcquireError, AcquireResult};

// =============================================================================
// BLOB
// =============================================================================

/// Raw structure table, optionally with the entry point that describes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmbiosBlob {
    data: Vec<u8>,
    entry_point: Option<EntryPoint>,
}

impl SmbiosBlob {
    /// Create from table bytes
    #[must_use]
    pub const fn new(data: Vec<u8>, entry_point: Option<EntryPoint>) -> Self {
        Self { data, entry_point }
    }

    /// Entry point, if the source provided one
    #[must_use]
    pub const fn entry_point(&self) -> Option<&EntryPoint> {
        self.entry_point.as_ref()
    }

    /// All bytes returned by the source
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Structure table bytes
    ///
    /// Clamped to the length declared by the entry point, when known.
    #[must_use]
    pub fn table(&self) -> &[u8] {
        match &self.entry_point {
            Some(ep) => &self.data[..ep.table_length().min(self.data.len())],
            None => &self.data,
        }
    }

    /// Consume into the owned bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Provider of SMBIOS structure tables
pub trait BlobSource {
    /// Human-readable source name, used in log messages
    fn name(&self) -> &str;

    /// Fetch the table
    ///
    /// Every handle opened here is released before returning, on success
    /// and on every error path.
    fn acquire(&self) -> AcquireResult<SmbiosBlob>;
}

impl<T: BlobSource + ?Sized> BlobSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn acquire(&self) -> AcquireResult<SmbiosBlob> {
        (**self).acquire()
    }
}

impl<T: BlobSource + ?Sized> BlobSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn acquire(&self) -> AcquireResult<SmbiosBlob> {
        (**self).acquire()
    }
}

/// Read a table file, mapping failures onto absence reasons
///
/// A missing file means the service is not there at all; any other I/O
/// failure means it is present but unreadable.
pub(crate) fn read_table_file(path: &Path) -> AcquireResult<Vec<u8>> {
    let data = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AcquireError::ServiceNotFound,
        kind => AcquireError::PropertyUnreadable(kind),
    })?;

    if data.is_empty() {
        return Err(AcquireError::PropertyEmpty);
    }

    Ok(data)
}

// =============================================================================
// MEMORY SOURCE
// =============================================================================

/// Table already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Vec<u8>,
    entry_point: Option<EntryPoint>,
}

impl MemorySource {
    /// Create from table bytes
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            entry_point: None,
        }
    }

    /// Attach an entry point
    #[must_use]
    pub fn with_entry_point(mut self, entry_point: EntryPoint) -> Self {
        self.entry_point = Some(entry_point);
        self
    }
}

impl BlobSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn acquire(&self) -> AcquireResult<SmbiosBlob> {
        if self.data.is_empty() {
            return Err(AcquireError::PropertyEmpty);
        }
        Ok(SmbiosBlob::new(self.data.clone(), self.entry_point))
    }
}

// =============================================================================
// DUMP FILE SOURCE
// =============================================================================

/// Raw structure table saved to a file
#[derive(Debug, Clone)]
pub struct DumpFileSource {
    path: PathBuf,
}

impl DumpFileSource {
    /// Create for the dump at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Dump location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobSource for DumpFileSource {
    fn name(&self) -> &str {
        "dump"
    }

    fn acquire(&self) -> AcquireResult<SmbiosBlob> {
        let data = read_table_file(&self.path)?;
        log::debug!("dump: read {} bytes from {}", data.len(), self.path.display());
        Ok(SmbiosBlob::new(data, None))
    }
}

// =============================================================================
// TESTS
// =============================================================================
