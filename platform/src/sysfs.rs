//! # Linux sysfs Source
//!
//! The kernel publishes the firmware tables under
//! `/sys/firmware/dmi/tables`:
//!
//! - `DMI`: the structure table itself
//! - `smbios_entry_point`: the 2.x or 3.x entry point describing it
//!
//! Both files are usually readable by root only.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry_point::EntryPoint;
use crate::error::{AcquireError, AcquireResult};
use crate::source::{read_table_file, BlobSource, SmbiosBlob};

/// Default sysfs tables directory
pub const DEFAULT_SYSFS_TABLES_DIR: &str = "/sys/firmware/dmi/tables";

/// Structure table file name
pub const DMI_TABLE_FILE: &str = "DMI";

/// Entry point file name
pub const ENTRY_POINT_FILE: &str = "smbios_entry_point";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// sysfs source configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsConfig {
    /// Directory holding the `DMI` and `smbios_entry_point` files
    pub tables_dir: PathBuf,
    /// Reject entry points with bad checksums
    pub validate_entry_point: bool,
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            tables_dir: PathBuf::from(DEFAULT_SYSFS_TABLES_DIR),
            validate_entry_point: true,
        }
    }
}

impl SysfsConfig {
    /// Configuration rooted at another directory
    #[must_use]
    pub fn with_tables_dir(tables_dir: impl Into<PathBuf>) -> Self {
        Self {
            tables_dir: tables_dir.into(),
            ..Self::default()
        }
    }

    /// Path of the structure table file
    #[must_use]
    pub fn table_path(&self) -> PathBuf {
        self.tables_dir.join(DMI_TABLE_FILE)
    }

    /// Path of the entry point file
    #[must_use]
    pub fn entry_point_path(&self) -> PathBuf {
        self.tables_dir.join(ENTRY_POINT_FILE)
    }
}

// =============================================================================
// SOURCE
// =============================================================================

/// Structure table read from Linux sysfs
#[derive(Debug, Clone, Default)]
pub struct SysfsSource {
    config: SysfsConfig,
}

impl SysfsSource {
    /// Create with a configuration
    #[must_use]
    pub const fn new(config: SysfsConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &SysfsConfig {
        &self.config
    }

    fn read_entry_point(&self, path: &Path) -> AcquireResult<EntryPoint> {
        let bytes = fs::read(path)?;
        if self.config.validate_entry_point {
            EntryPoint::parse_validated(&bytes)
        } else {
            EntryPoint::parse(&bytes)
        }
    }
}

impl BlobSource for SysfsSource {
    fn name(&self) -> &str {
        "sysfs"
    }

    fn acquire(&self) -> AcquireResult<SmbiosBlob> {
        if !self.config.tables_dir.is_dir() {
            log::debug!(
                "sysfs: {} not present",
                self.config.tables_dir.display()
            );
            return Err(AcquireError::ServiceNotFound);
        }

        // The directory exists, so a missing table means it is unreadable
        let data = match read_table_file(&self.config.table_path()) {
            Err(AcquireError::ServiceNotFound) => {
                return Err(AcquireError::PropertyUnreadable(std::io::ErrorKind::NotFound));
            }
            other => other?,
        };

        let entry_point_path = self.config.entry_point_path();
        let entry_point = match self.read_entry_point(&entry_point_path) {
            Ok(entry_point) => {
                let (major, minor) = entry_point.version();
                log::debug!(
                    "sysfs: SMBIOS {}.{} entry point, table length {}",
                    major,
                    minor,
                    entry_point.table_length()
                );
                Some(entry_point)
            }
            Err(err @ AcquireError::PropertyUnreadable(_)) => {
                log::debug!("sysfs: {}: {}", entry_point_path.display(), err);
                None
            }
            Err(err) => {
                log::warn!("sysfs: ignoring entry point: {}", err);
                None
            }
        };

        Ok(SmbiosBlob::new(data, entry_point))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry_point::tests::{smbios2_bytes, smbios3_bytes};
    use crate::test_util::TempDir;

    const TABLE: [u8; 8] = [0x00, 0x04, 0x00, 0x00, b'A', b'B', 0x00, 0x00];

    fn source(dir: &TempDir) -> SysfsSource {
        SysfsSource::new(SysfsConfig::with_tables_dir(dir.path()))
    }

    #[test]
    fn test_default_config() {
        let config = SysfsConfig::default();
        assert_eq!(config.table_path(), Path::new("/sys/firmware/dmi/tables/DMI"));
        assert_eq!(
            config.entry_point_path(),
            Path::new("/sys/firmware/dmi/tables/smbios_entry_point")
        );
        assert!(config.validate_entry_point);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new("sysfs_missing_directory");
        let source = SysfsSource::new(SysfsConfig::with_tables_dir(dir.path().join("absent")));
        assert_eq!(source.acquire(), Err(AcquireError::ServiceNotFound));
    }

    #[test]
    fn test_missing_table() {
        let dir = TempDir::new("sysfs_missing_table");
        assert_eq!(
            source(&dir).acquire(),
            Err(AcquireError::PropertyUnreadable(std::io::ErrorKind::NotFound))
        );
    }

    #[test]
    fn test_empty_table() {
        let dir = TempDir::new("sysfs_empty_table");
        dir.write(DMI_TABLE_FILE, &[]);
        assert_eq!(source(&dir).acquire(), Err(AcquireError::PropertyEmpty));
    }

    #[test]
    fn test_table_without_entry_point() {
        let dir = TempDir::new("sysfs_without_entry_point");
        dir.write(DMI_TABLE_FILE, &TABLE);

        let blob = source(&dir).acquire();
        let Ok(blob) = blob else {
            panic!("acquire failed: {blob:?}");
        };
        assert_eq!(blob.entry_point(), None);
        assert_eq!(blob.table(), &TABLE);
    }

    #[test]
    fn test_table_with_entry_point() {
        let dir = TempDir::new("sysfs_with_entry_point");
        let mut data = TABLE.to_vec();
        data.extend_from_slice(&[0xde, 0xad]);
        dir.write(DMI_TABLE_FILE, &data);
        dir.write(ENTRY_POINT_FILE, &smbios3_bytes(TABLE.len() as u32));

        let blob = source(&dir).acquire();
        let Ok(blob) = blob else {
            panic!("acquire failed: {blob:?}");
        };
        assert!(matches!(blob.entry_point(), Some(EntryPoint::V3(_))));
        assert_eq!(blob.table(), &TABLE);
    }

    #[test]
    fn test_bad_entry_point_ignored() {
        let dir = TempDir::new("sysfs_bad_entry_point");
        dir.write(DMI_TABLE_FILE, &TABLE);
        let mut entry_point = smbios2_bytes(4);
        entry_point[4] ^= 0xff;
        dir.write(ENTRY_POINT_FILE, &entry_point);

        let blob = source(&dir).acquire();
        assert_eq!(blob.as_ref().map(SmbiosBlob::entry_point), Ok(None));
        assert_eq!(blob.as_ref().map(SmbiosBlob::table), Ok(&TABLE[..]));

        // Without validation the same entry point is accepted and clamps
        let mut config = SysfsConfig::with_tables_dir(dir.path());
        config.validate_entry_point = false;
        let blob = SysfsSource::new(config).acquire();
        assert_eq!(blob.as_ref().map(SmbiosBlob::table), Ok(&TABLE[..4]));
    }
}
