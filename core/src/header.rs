//! SMBIOS Structure Header
//!
//! The fixed 4-byte prefix shared by every structure in the table.

use static_assertions::const_assert_eq;

// =============================================================================
// STRUCTURE HEADER
// =============================================================================

/// SMBIOS structure header
///
/// Decoded field by field from the table bytes. The on-disk layout is
/// packed and little-endian:
///
/// | Offset | Size | Field    |
/// |--------|------|----------|
/// | 0      | 1    | type     |
/// | 1      | 1    | length   |
/// | 2      | 2    | handle   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHeader {
    /// Structure type
    pub structure_type: u8,
    /// Length of the formatted region, header included
    pub length: u8,
    /// Firmware-assigned handle
    pub handle: u16,
}

const_assert_eq!(StructureHeader::SIZE, 4);

impl StructureHeader {
    /// Size
    pub const SIZE: usize = 4;

    /// Parse from bytes
    ///
    /// Only the first [`Self::SIZE`] bytes are read. Returns `None` when
    /// fewer bytes are available.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }

        Some(Self {
            structure_type: bytes[0],
            length: bytes[1],
            handle: u16::from_le_bytes([bytes[2], bytes[3]]),
        })
    }

    /// Length of the formatted region as a buffer offset
    #[must_use]
    pub const fn formatted_len(&self) -> usize {
        self.length as usize
    }
}

// =============================================================================
// TESTS
// =============================================================================
