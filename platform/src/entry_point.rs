//! SMBIOS Entry Points
//!
//! The entry point locates the structure table and bounds its length.
//! Hosts that expose the table directly (Linux sysfs) still publish the
//! entry point next to it, which lets the acquirer trim trailing bytes
//! beyond the declared table.

use static_assertions::const_assert_eq;

use crate::error::{AcquireError, AcquireResult};

// =============================================================================
// ANCHORS
// =============================================================================

/// SMBIOS 2.x anchor string
pub const SMBIOS2_ANCHOR: [u8; 4] = *b"_SM_";

/// SMBIOS 3.x anchor string
pub const SMBIOS3_ANCHOR: [u8; 5] = *b"_SM3_";

/// DMI anchor string
pub const DMI_ANCHOR: [u8; 5] = *b"_DMI_";

/// Byte sum of `bytes` is zero
fn checksum_ok(bytes: &[u8]) -> bool {
    bytes.iter().fold(0u8, |a, &b| a.wrapping_add(b)) == 0
}

// =============================================================================
// SMBIOS 2.x ENTRY POINT
// =============================================================================

/// SMBIOS 2.x entry point (32-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smbios2EntryPoint {
    /// Checksum
    pub checksum: u8,
    /// Entry point length
    pub length: u8,
    /// Major version
    pub major_version: u8,
    /// Minor version
    pub minor_version: u8,
    /// Maximum structure size
    pub max_structure_size: u16,
    /// Entry point revision
    pub entry_point_revision: u8,
    /// Intermediate checksum
    pub intermediate_checksum: u8,
    /// Structure table length
    pub structure_table_length: u16,
    /// Structure table address
    pub structure_table_address: u32,
    /// Number of structures
    pub number_of_structures: u16,
    /// BCD revision
    pub bcd_revision: u8,
}

impl Smbios2EntryPoint {
    /// Size
    pub const SIZE: usize = 31;

    /// Offset of the intermediate (`_DMI_`) area
    const INTERMEDIATE_OFFSET: usize = 16;

    /// Parse from bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }

        if bytes[0..4] != SMBIOS2_ANCHOR || bytes[16..21] != DMI_ANCHOR {
            return None;
        }

        Some(Self {
            checksum: bytes[4],
            length: bytes[5],
            major_version: bytes[6],
            minor_version: bytes[7],
            max_structure_size: u16::from_le_bytes([bytes[8], bytes[9]]),
            entry_point_revision: bytes[10],
            intermediate_checksum: bytes[21],
            structure_table_length: u16::from_le_bytes([bytes[22], bytes[23]]),
            structure_table_address: u32::from_le_bytes(bytes[24..28].try_into().ok()?),
            number_of_structures: u16::from_le_bytes([bytes[28], bytes[29]]),
            bcd_revision: bytes[30],
        })
    }

    /// Validate both checksums
    ///
    /// The entry point checksum covers `length` bytes, the intermediate one
    /// covers the `_DMI_` area up to the end of the fixed structure.
    #[must_use]
    pub fn validate_checksum(&self, bytes: &[u8]) -> bool {
        let len = self.length as usize;
        if bytes.len() < len || bytes.len() < Self::SIZE {
            return false;
        }

        checksum_ok(&bytes[..len]) && checksum_ok(&bytes[Self::INTERMEDIATE_OFFSET..Self::SIZE])
    }

    /// Get version
    #[must_use]
    pub const fn version(&self) -> (u8, u8) {
        (self.major_version, self.minor_version)
    }
}

// =============================================================================
// SMBIOS 3.x ENTRY POINT
// =============================================================================

/// SMBIOS 3.x entry point (64-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smbios3EntryPoint {
    /// Checksum
    pub checksum: u8,
    /// Entry point length
    pub length: u8,
    /// Major version
    pub major_version: u8,
    /// Minor version
    pub minor_version: u8,
    /// Docrev
    pub docrev: u8,
    /// Entry point revision
    pub entry_point_revision: u8,
    /// Maximum structure table size
    pub structure_table_max_size: u32,
    /// Structure table address
    pub structure_table_address: u64,
}

impl Smbios3EntryPoint {
    /// Size
    pub const SIZE: usize = 24;

    /// Parse from bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }

        if bytes[0..5] != SMBIOS3_ANCHOR {
            return None;
        }

        Some(Self {
            checksum: bytes[5],
            length: bytes[6],
            major_version: bytes[7],
            minor_version: bytes[8],
            docrev: bytes[9],
            entry_point_revision: bytes[10],
            structure_table_max_size: u32::from_le_bytes(bytes[12..16].try_into().ok()?),
            structure_table_address: u64::from_le_bytes(bytes[16..24].try_into().ok()?),
        })
    }

    /// Validate checksum
    #[must_use]
    pub fn validate_checksum(&self, bytes: &[u8]) -> bool {
        let len = self.length as usize;
        if bytes.len() < len {
            return false;
        }

        checksum_ok(&bytes[..len])
    }

    /// Get version
    #[must_use]
    pub const fn version(&self) -> (u8, u8, u8) {
        (self.major_version, self.minor_version, self.docrev)
    }
}

const_assert_eq!(Smbios2EntryPoint::SIZE, 0x1f);
const_assert_eq!(Smbios3EntryPoint::SIZE, 0x18);

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Either entry point flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// `_SM_` entry point
    V2(Smbios2EntryPoint),
    /// `_SM3_` entry point
    V3(Smbios3EntryPoint),
}

impl EntryPoint {
    /// Parse from bytes, detecting the flavour by anchor
    pub fn parse(bytes: &[u8]) -> AcquireResult<Self> {
        if bytes.starts_with(&SMBIOS3_ANCHOR) {
            return Smbios3EntryPoint::from_bytes(bytes)
                .map(Self::V3)
                .ok_or(AcquireError::InvalidEntryPoint);
        }

        if bytes.starts_with(&SMBIOS2_ANCHOR) {
            return Smbios2EntryPoint::from_bytes(bytes)
                .map(Self::V2)
                .ok_or(AcquireError::InvalidEntryPoint);
        }

        Err(AcquireError::InvalidEntryPoint)
    }

    /// Parse from bytes and validate checksums
    pub fn parse_validated(bytes: &[u8]) -> AcquireResult<Self> {
        let entry_point = Self::parse(bytes)?;
        if !entry_point.validate_checksum(bytes) {
            return Err(AcquireError::ChecksumMismatch);
        }
        Ok(entry_point)
    }

    /// Validate checksums against the bytes the entry point was parsed from
    #[must_use]
    pub fn validate_checksum(&self, bytes: &[u8]) -> bool {
        match self {
            Self::V2(ep) => ep.validate_checksum(bytes),
            Self::V3(ep) => ep.validate_checksum(bytes),
        }
    }

    /// Major and minor SMBIOS version
    #[must_use]
    pub const fn version(&self) -> (u8, u8) {
        match self {
            Self::V2(ep) => ep.version(),
            Self::V3(ep) => (ep.major_version, ep.minor_version),
        }
    }

    /// Declared structure table length (an upper bound for 3.x)
    #[must_use]
    pub const fn table_length(&self) -> usize {
        match self {
            Self::V2(ep) => ep.structure_table_length as usize,
            Self::V3(ep) => ep.structure_table_max_size as usize,
        }
    }

    /// Physical address of the structure table
    #[must_use]
    pub const fn table_address(&self) -> u64 {
        match self {
            Self::V2(ep) => ep.structure_table_address as u64,
            Self::V3(ep) => ep.structure_table_address,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
