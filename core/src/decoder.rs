//! # Structure Decoder
//!
//! Bounds-checked walk over an SMBIOS structure table.
//!
//! Every structure is measured in two phases. The header supplies the
//! length of the formatted region, which must fit in the table. The
//! trailing string area has no length field; it ends after the first
//! double null byte at or beyond the formatted region, or at the end of the
//! table when no terminator exists.
//!
//! ## Failure Policy
//!
//! The decoder does not return errors. A header that does not fit, or a
//! formatted region that runs past the table, ends the scan; the structure
//! in question is not reported and earlier structures are unaffected. An
//! unterminated string area consumes the rest of the table.
//!
//! Inactive (126) and End-of-Table (127) structures are reported like any
//! other; the scan is bounded by the table length alone.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::header::StructureHeader;
use crate::md5::Md5;
use crate::record::{DecodedRecord, RowSink};
use crate::types::describe;

// =============================================================================
// RAW STRUCTURES
// =============================================================================

/// One measured structure, borrowed from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStructure<'a> {
    /// Byte offset of the structure in the table
    pub offset: usize,
    /// Structure header
    pub header: StructureHeader,
    /// Every byte of the structure, string area and terminator included
    pub bytes: &'a [u8],
}

impl<'a> RawStructure<'a> {
    /// Total size in bytes
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Formatted region, header included
    #[must_use]
    pub fn formatted(&self) -> &'a [u8] {
        &self.bytes[..self.header.formatted_len().min(self.bytes.len())]
    }

    /// Build the decoded record for encounter index `number`
    #[must_use]
    pub fn to_record(&self, number: usize) -> DecodedRecord {
        DecodedRecord {
            number,
            offset: self.offset,
            structure_type: self.header.structure_type,
            description: describe(self.header.structure_type),
            handle: u64::from(self.header.handle),
            header_size: self.header.length,
            size: self.size(),
            md5: Md5::digest(self.bytes),
        }
    }
}

/// Structure iterator
///
/// Yields structures in table order. Once a structure fails its bounds
/// check the iterator is exhausted for good.
#[derive(Debug, Clone)]
pub struct StructureIter<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> StructureIter<'a> {
    /// Iterate the structures in `data`
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Offset of the next structure to be read
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn stop(&mut self) -> Option<RawStructure<'a>> {
        self.offset = self.data.len();
        None
    }
}

/// End of the string area that starts at `from`
///
/// Both bytes of a candidate terminator must lie inside `data`. Without a
/// terminator the area runs to the end of `data`.
fn string_area_end(data: &[u8], from: usize) -> usize {
    data[from..]
        .windows(2)
        .position(|pair| pair == [0, 0])
        .map_or(data.len(), |p| from + p + 2)
}

impl<'a> Iterator for StructureIter<'a> {
    type Item = RawStructure<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = &self.data[self.offset..];
        let Some(header) = StructureHeader::from_bytes(remaining) else {
            return self.stop();
        };

        // Formatted region must lie within the table
        let formatted_end = self.offset + header.formatted_len();
        if formatted_end > self.data.len() {
            return self.stop();
        }

        let structure_end = string_area_end(self.data, formatted_end);

        let structure = RawStructure {
            offset: self.offset,
            header,
            bytes: &self.data[self.offset..structure_end],
        };

        self.offset = structure_end;
        Some(structure)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Smallest possible structure is two bytes (an empty header length
        // directly followed by the terminator)
        (0, Some((self.data.len() - self.offset) / 2))
    }
}

impl FusedIterator for StructureIter<'_> {}

// =============================================================================
// DECODING
// =============================================================================

/// Decode every structure in an SMBIOS structure table
///
/// Pure and re-entrant. Never fails: a truncated or malformed table yields a
/// shorter (possibly empty) sequence.
#[must_use]
pub fn decode(blob: &[u8]) -> Vec<DecodedRecord> {
    StructureIter::new(blob)
        .enumerate()
        .map(|(number, structure)| structure.to_record(number))
        .collect()
}

/// Decode the first `length` bytes of `buffer`
///
/// `length` is clamped to the buffer size.
#[must_use]
pub fn decode_with_length(buffer: &[u8], length: usize) -> Vec<DecodedRecord> {
    decode(&buffer[..length.min(buffer.len())])
}

/// Decode a table and append one row per structure to `sink`
///
/// Returns the number of rows appended.
pub fn decode_into<S: RowSink + ?Sized>(blob: &[u8], sink: &mut S) -> usize {
    let mut count = 0;
    for (number, structure) in StructureIter::new(blob).enumerate() {
        sink.push(structure.to_record(number).to_row());
        count += 1;
    }
    count
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ColumnValue, QueryData};
    use crate::types::structure_type;
    use alloc::vec;

    /// Build a structure with a formatted body and a string area
    fn structure(structure_type: u8, handle: u16, body: &[u8], strings: &[&str]) -> Vec<u8> {
        let mut out = vec![structure_type, (4 + body.len()) as u8];
        out.extend_from_slice(&handle.to_le_bytes());
        out.extend_from_slice(body);
        if strings.is_empty() {
            out.extend_from_slice(&[0, 0]);
        } else {
            for s in strings {
                out.extend_from_slice(s.as_bytes());
                out.push(0);
            }
            out.push(0);
        }
        out
    }

    fn sample_table() -> Vec<u8> {
        let mut table = Vec::new();
        table.extend(structure(
            0,
            0x0000,
            &[1, 2, 0x00, 0xf0, 3, 0x0f],
            &["Vendor", "1.0", "01/01/2024"],
        ));
        table.extend(structure(1, 0x0001, &[1, 2, 0, 0], &["Maker", "Model"]));
        table.extend(structure(4, 0x0400, &[0; 0x24], &[]));
        table.extend(structure(127, 0xfeff, &[], &[]));
        table
    }

    #[test]
    fn test_empty_input() {
        assert!(decode(&[]).is_empty());
        assert!(decode_with_length(&[0, 4, 0, 0, 0, 0], 0).is_empty());
    }

    #[test]
    fn test_too_short_buffer() {
        assert!(decode(&[0]).is_empty());
        assert!(decode(&[0, 4]).is_empty());
        assert!(decode(&[0, 4, 0]).is_empty());
    }

    #[test]
    fn test_header_only_structure() {
        let records = decode(&[0x00, 0x04, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.number, 0);
        assert_eq!(record.offset, 0);
        assert_eq!(record.structure_type, structure_type::BIOS_INFORMATION);
        assert_eq!(record.description, Some("BIOS Information"));
        assert_eq!(record.header_size, 4);
        assert_eq!(record.size, 6);
        assert_eq!(record.md5.to_hex(), "d0fbf5199df8bc6e8d7e3b1e824f0f8b");
    }

    #[test]
    fn test_structure_with_strings() {
        let records = decode(&[0x00, 0x04, 0x00, 0x00, b'A', b'B', 0x00, 0x00]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header_size, 4);
        assert_eq!(records[0].size, 8);
        assert_eq!(records[0].md5.to_hex(), "e29fca06a0ada31a2f965a3c92abda24");
    }

    #[test]
    fn test_truncated_header_at_end() {
        let records = decode(&[0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x01, 0x04, 0x00]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 6);
    }

    #[test]
    fn test_declared_length_exceeds_buffer() {
        let mut table = structure(0, 0, &[], &[]);
        table.extend_from_slice(&[0x01, 0x20, 0x01, 0x00, 0xaa, 0xbb, 0x00, 0x00]);
        let records = decode(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].structure_type, 0);

        // First structure already invalid
        assert!(decode(&[0x00, 0x08, 0x00, 0x00, 0x00, 0x00]).is_empty());
    }

    #[test]
    fn test_unterminated_string_area_consumes_rest() {
        let records = decode(&[0x01, 0x04, 0x10, 0x00, b'A', b'B']);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 6);

        // Formatted region ends exactly at the table end
        let records = decode(&[0x01, 0x04, 0x10, 0x00]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 4);
        assert_eq!(records[0].handle, 0x10);
        assert_eq!(records[0].md5.to_hex(), "999d57c181735fc9f27fb856b30e0ae3");
    }

    #[test]
    fn test_terminator_split_at_table_end() {
        // A lone trailing null cannot form a terminator
        let records = decode(&[0x01, 0x04, 0x00, 0x00, b'A', 0x00]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 6);
    }

    #[test]
    fn test_zero_length_header_still_advances() {
        let records = decode(&[0x05, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header_size, 0);
        assert_eq!(records[0].size, 3);

        let zeros = [0u8; 10];
        let records = decode(&zeros);
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.size == 2));
    }

    #[test]
    fn test_sequential_offsets() {
        let table = sample_table();
        let records = decode(&table);
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].offset, 0);
        for pair in records.windows(2) {
            assert_eq!(pair[1].offset, pair[0].offset + pair[0].size);
            assert_eq!(pair[1].number, pair[0].number + 1);
        }
        assert_eq!(records[3].end(), table.len());
    }

    #[test]
    fn test_sizes_include_strings() {
        let records = decode(&sample_table());
        assert_eq!(records[0].header_size, 10);
        assert_eq!(records[0].size, 10 + "Vendor\01.0\001/01/2024\0\0".len());
        assert_eq!(records[1].size, 8 + "Maker\0Model\0\0".len());
        assert_eq!(records[2].header_size, 0x28);
        assert_eq!(records[2].size, 0x28 + 2);
    }

    #[test]
    fn test_end_of_table_does_not_stop_scan() {
        let mut table = structure(127, 0xfeff, &[], &[]);
        table.extend(structure(126, 0x0010, &[], &[]));
        table.extend(structure(17, 0x0011, &[0; 4], &["DIMM 0"]));

        let records = decode(&table);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].description, Some("End-of-Table"));
        assert_eq!(records[1].description, Some("Inactive"));
        assert_eq!(records[2].description, Some("Memory Device"));
    }

    #[test]
    fn test_unknown_type_code() {
        let records = decode(&structure(200, 0xbeef, &[1, 2], &["x"]));
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.structure_type, 200);
        assert_eq!(record.description, None);
        assert_eq!(record.handle, 0xbeef);
        assert_eq!(record.header_size, 6);
        assert_eq!(record.size, 9);

        let row = record.to_row();
        assert!(!row.contains("description"));
        assert_eq!(row.get("type"), Some(&ColumnValue::Integer(200)));
    }

    #[test]
    fn test_digest_deterministic() {
        let table = sample_table();
        let first = decode(&table);
        let second = decode(&table);
        assert_eq!(first, second);

        for record in &first {
            let span = &table[record.offset..record.end()];
            assert_eq!(record.md5, Md5::digest(span));
        }
    }

    #[test]
    fn test_decode_with_length_clamps() {
        let table = sample_table();
        assert_eq!(decode_with_length(&table, usize::MAX), decode(&table));

        // Cut inside the second structure's formatted region
        let records = decode_with_length(&table, decode(&table)[1].offset + 6);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_decode_into_sink() {
        let table = sample_table();
        let mut rows: QueryData = Vec::new();
        let count = decode_into(&table, &mut rows);
        assert_eq!(count, 4);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].get("number"), Some(&ColumnValue::Integer(2)));
        assert_eq!(rows[3].get("handle"), Some(&ColumnValue::BigInt(0xfeff)));
    }

    #[test]
    fn test_iterator_fused_after_invalid() {
        let mut table = structure(0, 0, &[], &[]);
        table.extend_from_slice(&[0x01, 0xff, 0x00, 0x00]);
        let mut iter = StructureIter::new(&table);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.offset(), table.len());
    }

    #[test]
    fn test_arbitrary_bytes_stay_in_bounds() {
        // Deterministic pseudo-random tables, biased towards small lengths
        let mut seed: u32 = 0x1234_5678;
        for _ in 0..500 {
            let mut table = Vec::new();
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let len = (seed >> 16) as usize % 96;
            for _ in 0..len {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
                let byte = (seed >> 16) as u8;
                table.push(if byte & 0x80 == 0 { byte & 0x0f } else { 0 });
            }

            let records = decode(&table);
            let mut expected_offset = 0;
            for (i, record) in records.iter().enumerate() {
                assert_eq!(record.number, i);
                assert_eq!(record.offset, expected_offset);
                assert!(record.size > 0);
                expected_offset = record.end();
            }
            assert!(expected_offset <= table.len());
        }
    }
}
