// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The CRC-32 checksum stored alongside each ZIP entry.
//!
//! This is the reflected IEEE 802.3 variant (polynomial `0xEDB88320`) with an initial value and final XOR of
//! `0xFFFFFFFF`, as required by APPNOTE section 4.4.7.

const POLYNOMIAL: u32 = 0xEDB88320;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut index = 0;

    while index < 256 {
        let mut value = index as u32;
        let mut bit = 0;

        while bit < 8 {
            value = if value & 1 == 1 { (value >> 1) ^ POLYNOMIAL } else { value >> 1 };
            bit += 1;
        }

        table[index] = value;
        index += 1;
    }

    table
}

/// An incremental CRC-32 hasher.
///
/// ```
/// # use stored_zip::spec::crc32::{crc32, Crc32Hasher};
/// let mut hasher = Crc32Hasher::new();
/// hasher.update(b"hel");
/// hasher.update(b"lo");
/// assert_eq!(hasher.finalize(), crc32(b"hello"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc32Hasher {
    state: u32,
}

impl Default for Crc32Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32Hasher {
    /// Constructs a new hasher with no data consumed.
    pub fn new() -> Self {
        Self { state: 0xFFFFFFFF }
    }

    /// Feeds more data into the running checksum.
    pub fn update(&mut self, data: &[u8]) {
        let mut state = self.state;

        for byte in data {
            state = TABLE[((state ^ u32::from(*byte)) & 0xFF) as usize] ^ (state >> 8);
        }

        self.state = state;
    }

    /// Consumes this hasher and returns the final checksum.
    pub fn finalize(self) -> u32 {
        self.state ^ 0xFFFFFFFF
    }
}

/// Computes the CRC-32 of a complete byte slice.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
