//! MD5 Message Digest
//!
//! RFC 1321 implementation used to fingerprint each structure's bytes.
//! The digest identifies content; it carries no security guarantee.

use alloc::string::{String, ToString};
use core::fmt;

// =============================================================================
// MD5
// =============================================================================

/// MD5 hash output size
pub const MD5_OUTPUT_SIZE: usize = 16;

/// MD5 block size
pub const MD5_BLOCK_SIZE: usize = 64;

/// MD5 context
#[derive(Debug, Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: [u8; MD5_BLOCK_SIZE],
    buffer_len: usize,
    total_len: u64,
}

impl Md5 {
    /// Initial chaining values
    const H: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

    /// Per-round additive constants (floor(abs(sin(i + 1)) * 2^32))
    const K: [u32; 64] = [
        0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613,
        0xfd46_9501, 0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193,
        0xa679_438e, 0x49b4_0821, 0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d,
        0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8, 0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
        0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a, 0xfffa_3942, 0x8771_f681, 0x6d9d_6122,
        0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70, 0x289b_7ec6, 0xeaa1_27fa,
        0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665, 0xf429_2244,
        0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
        0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb,
        0xeb86_d391,
    ];

    /// Left-rotate amounts, four per round
    const S: [u32; 16] = [7, 12, 17, 22, 5, 9, 14, 20, 4, 11, 16, 23, 6, 10, 15, 21];

    /// Create new MD5 context
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Self::H,
            buffer: [0u8; MD5_BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Update hash with data
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Fill buffer if not empty
        if self.buffer_len > 0 {
            let space = MD5_BLOCK_SIZE - self.buffer_len;
            let to_copy = core::cmp::min(space, data.len());
            self.buffer[self.buffer_len..self.buffer_len + to_copy]
                .copy_from_slice(&data[..to_copy]);
            self.buffer_len += to_copy;
            offset = to_copy;

            if self.buffer_len == MD5_BLOCK_SIZE {
                self.process_block();
                self.buffer_len = 0;
            }
        }

        // Process full blocks
        while offset + MD5_BLOCK_SIZE <= data.len() {
            self.buffer
                .copy_from_slice(&data[offset..offset + MD5_BLOCK_SIZE]);
            self.process_block();
            offset += MD5_BLOCK_SIZE;
        }

        // Store remainder
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Finalize and return hash
    #[must_use]
    pub fn finalize(mut self) -> Md5Hash {
        let bit_len = self.total_len.wrapping_mul(8);

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Not enough room for the length, spill into a new block
        if self.buffer_len > 56 {
            self.buffer[self.buffer_len..].fill(0);
            self.process_block();
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..56].fill(0);

        // Length in bits (little-endian)
        self.buffer[56..64].copy_from_slice(&bit_len.to_le_bytes());
        self.process_block();

        let mut output = [0u8; MD5_OUTPUT_SIZE];
        for (chunk, s) in output.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&s.to_le_bytes());
        }

        Md5Hash(output)
    }

    /// Process a single block
    fn process_block(&mut self) {
        let mut m = [0u32; 16];
        for (i, word) in m.iter_mut().enumerate() {
            *word = u32::from_le_bytes([
                self.buffer[i * 4],
                self.buffer[i * 4 + 1],
                self.buffer[i * 4 + 2],
                self.buffer[i * 4 + 3],
            ]);
        }

        let mut a = self.state[0];
        let mut b = self.state[1];
        let mut c = self.state[2];
        let mut d = self.state[3];

        for (i, &k_val) in Self::K.iter().enumerate() {
            let (f, g) = match i / 16 {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let shift = Self::S[(i / 16) * 4 + i % 4];
            let f = f.wrapping_add(a).wrapping_add(k_val).wrapping_add(m[g]);

            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(f.rotate_left(shift));
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
    }

    /// Compute MD5 hash of data in one shot
    #[must_use]
    pub fn digest(data: &[u8]) -> Md5Hash {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HASH VALUE
// =============================================================================

/// MD5 digest value
///
/// Displays as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5Hash(pub [u8; MD5_OUTPUT_SIZE]);

impl Md5Hash {
    /// Raw digest bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MD5_OUTPUT_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Md5Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_empty() {
        assert_eq!(Md5::digest(b"").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_abc() {
        let hash = Md5::digest(b"abc");
        let expected = [
            0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1,
            0x7f, 0x72,
        ];
        assert_eq!(hash.as_bytes(), &expected);
    }

    #[test]
    fn test_md5_message_digest() {
        assert_eq!(
            Md5::digest(b"message digest").to_hex(),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn test_md5_block_boundaries() {
        // 64 bytes forces the length into a second padding block
        assert_eq!(
            Md5::digest(&[b'a'; 64]).to_hex(),
            "014842d480b571495a4a0363793f7367"
        );
        assert_eq!(
            Md5::digest(&[b'a'; 1000]).to_hex(),
            "cabe45dcc9ae5b66ba86600cca6b8ba8"
        );
    }

    #[test]
    fn test_md5_streaming_matches_one_shot() {
        let data = [b'a'; 1000];
        let mut hasher = Md5::new();
        for chunk in data.chunks(7) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), Md5::digest(&data));
    }
}
