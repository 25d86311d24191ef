pub mod bch;
pub mod crc8;
pub mod randomiser;

use itertools::Itertools;

pub use bch::{BchEncoder, new_bch_encoder};
pub use crc8::{Crc8, new_crc8};
pub use randomiser::{Randomiser, new_randomiser};

/// Expand bytes into one-bit-per-byte cells, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);

    for byte in bytes {
        for j in (0..8).rev() {
            bits.push((byte >> j) & 1);
        }
    }

    bits
}

pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    assert!(bits.len().is_multiple_of(8));

    let chunks = bits.iter().chunks(8);
    chunks
        .into_iter()
        .map(|chunk| chunk.fold(0u8, |acc, bit| (acc << 1) | (bit & 1)))
        .collect()
}

/// Write the low `width` bits of `value` into `out`, MSB first.
pub fn put_bits_msb(out: &mut [u8], value: u64, width: usize) {
    assert!(out.len() >= width);
    for (n, cell) in out[..width].iter_mut().enumerate() {
        *cell = ((value >> (width - 1 - n)) & 1) as u8;
    }
}

/// Read `bits.len()` cells as an MSB-first unsigned value.
pub fn get_bits_msb(bits: &[u8]) -> u64 {
    bits.iter().fold(0u64, |acc, bit| (acc << 1) | (bit & 1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_msb_first() {
        assert_eq!(bytes_to_bits(&[0x47]), vec![0, 1, 0, 0, 0, 1, 1, 1]);
        assert_eq!(bits_to_bytes(&[1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1]), vec![0xb1, 0x01]);
    }

    #[test]
    fn put_and_get_fields() {
        let mut cells = [0u8; 27];
        put_bits_msb(&mut cells, 0x5a5_a5a5, 27);
        assert_eq!(get_bits_msb(&cells), 0x5a5_a5a5);
        assert_eq!(cells[0], 1);
    }
}
