//! Acquisition Errors

use core::fmt;
use std::io;

/// Result type for blob acquisition
pub type AcquireResult<T> = Result<T, AcquireError>;

/// Reasons an SMBIOS blob could not be obtained
///
/// The first three variants mean "no SMBIOS data on this host"; callers
/// producing table rows treat all of them as an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireError {
    /// No platform service exposes SMBIOS data
    ServiceNotFound,
    /// The service exists but its table could not be read
    PropertyUnreadable(io::ErrorKind),
    /// The service returned an empty table
    PropertyEmpty,
    /// Entry point anchor or length is invalid
    InvalidEntryPoint,
    /// Entry point checksum does not sum to zero
    ChecksumMismatch,
}

impl AcquireError {
    /// Whether the error means the data is simply not available
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(
            self,
            Self::ServiceNotFound | Self::PropertyUnreadable(_) | Self::PropertyEmpty
        )
    }
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceNotFound => write!(f, "SMBIOS service not found"),
            Self::PropertyUnreadable(kind) => write!(f, "SMBIOS table unreadable: {kind}"),
            Self::PropertyEmpty => write!(f, "SMBIOS table is empty"),
            Self::InvalidEntryPoint => write!(f, "invalid SMBIOS entry point"),
            Self::ChecksumMismatch => write!(f, "SMBIOS entry point checksum error"),
        }
    }
}

impl std::error::Error for AcquireError {}

impl From<io::Error> for AcquireError {
    fn from(err: io::Error) -> Self {
        Self::PropertyUnreadable(err.kind())
    }
}
