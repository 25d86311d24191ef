//! Outer BCH encoder.
//!
//! The generator polynomial is the product of the component polynomials
//! g1(x)..g12(x) of the DVB-T2 BCH codes. Parity is computed a byte at a time
//! with a 256 entry remainder table, the same way a table driven CRC is.

use bitvec::prelude::*;
use std::fmt;

use tracing::debug;

use crate::params::{BchCode, CodeParameters};

/// Widest parity field of any variant.
pub const MAX_PARITY_BITS: usize = 192;
const LIMBS: usize = MAX_PARITY_BITS / 64;

// Normal FECFRAME component polynomials, coefficient of x^0 first
const POLY_N: [[u8; 17]; 12] = [
    [1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1],
    [1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1],
    [1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1],
];

// Short FECFRAME component polynomials
const POLY_S: [[u8; 15]; 12] = [
    [1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1],
    [1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1],
    [1, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1],
    [1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1],
];

/// Multiply two GF(2) polynomials, coefficient of x^0 first.
pub fn poly_mult(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, ca) in a.iter().enumerate() {
        if *ca == 0 {
            continue;
        }
        for (j, cb) in b.iter().enumerate() {
            out[i + j] ^= cb & 1;
        }
    }
    while out.len() > 1 && out[out.len() - 1] == 0 {
        out.pop();
    }
    out
}

/// Generator polynomial of a BCH variant, coefficient of x^0 first.
pub fn generator_polynomial(code: BchCode) -> Vec<u8> {
    let components: Vec<&[u8]> = match code {
        BchCode::N8 => POLY_N[..8].iter().map(|p| &p[..]).collect(),
        BchCode::N10 => POLY_N[..10].iter().map(|p| &p[..]).collect(),
        BchCode::N12 => POLY_N.iter().map(|p| &p[..]).collect(),
        BchCode::S12 => POLY_S.iter().map(|p| &p[..]).collect(),
    };

    components
        .iter()
        .skip(1)
        .fold(components[0].to_vec(), |acc, p| poly_mult(p, &acc))
}

/// Parity shift register, highest power first. Only the first `width` bits
/// of a register are used; the rest stay clear.
type ParityRegister = BitArray<[u64; LIMBS], Msb0>;

pub struct BchEncoder {
    code: BchCode,
    kbch: usize,
    generator: Vec<u8>,
    table: Box<[ParityRegister; 256]>,
}

impl fmt::Debug for BchEncoder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BchEncoder<{:?} kbch={}>", self.code, self.kbch)
    }
}

pub fn new_bch_encoder(params: &CodeParameters) -> BchEncoder {
    let code = params.bch_code;
    let width = code.parity_bits();
    let generator = generator_polynomial(code);
    assert_eq!(generator.len(), width + 1);

    // generator without its x^width term
    let mut poly = ParityRegister::ZERO;
    for (i, c) in generator[..width].iter().enumerate() {
        poly.set(width - 1 - i, *c != 0);
    }

    let mut table = Box::new([ParityRegister::ZERO; 256]);
    for (dividend, entry) in table.iter_mut().enumerate() {
        let mut reg = ParityRegister::ZERO;
        reg[..8].store_be(dividend as u8);
        for _ in 0..8 {
            let msb = reg[0];
            reg[..width].shift_start(1);
            if msb {
                reg ^= poly.as_bitslice();
            }
        }
        *entry = reg;
    }

    debug!(code = ?code, width, kbch = params.kbch, "BCH tables built");

    BchEncoder {
        code,
        kbch: params.kbch,
        generator,
        table,
    }
}

impl BchEncoder {
    /// Append parity to `frame`: cells `0..kbch` are read, cells
    /// `kbch..nbch` receive the parity MSB first.
    pub fn encode(&self, frame: &mut [u8]) {
        let width = self.parity_bits();
        assert!(frame.len() >= self.kbch + width);

        let mut reg = ParityRegister::ZERO;
        for chunk in frame[..self.kbch].chunks_exact(8) {
            let b = chunk.iter().fold(0u8, |acc, bit| (acc << 1) | (bit & 1));
            let pos = reg[..8].load_be::<u8>() ^ b;
            reg[..width].shift_start(8);
            reg ^= self.table[pos as usize].as_bitslice();
        }

        for (cell, bit) in frame[self.kbch..self.kbch + width].iter_mut().zip(reg.iter()) {
            *cell = *bit as u8;
        }
    }

    pub fn parity_bits(&self) -> usize {
        self.code.parity_bits()
    }

    pub fn code(&self) -> BchCode {
        self.code
    }

    /// Generator polynomial, coefficient of x^0 first.
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CodeRate, FrameSize};

    // remainder of the codeword (first cell = highest power) modulo g(x)
    fn syndrome(codeword: &[u8], generator: &[u8]) -> Vec<u8> {
        let deg = generator.len() - 1;
        let g_msb: Vec<u8> = generator.iter().rev().copied().collect();
        let mut c = codeword.to_vec();
        for i in 0..c.len() - deg {
            if c[i] != 0 {
                for (j, g) in g_msb.iter().enumerate() {
                    c[i + j] ^= g;
                }
            }
        }
        c.split_off(c.len() - deg)
    }

    fn pattern(len: usize, seed: u32) -> Vec<u8> {
        let mut x = seed;
        (0..len)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                (x & 1) as u8
            })
            .collect()
    }

    fn encoded(params: &CodeParameters, seed: u32) -> Vec<u8> {
        let encoder = new_bch_encoder(params);
        let mut frame = pattern(params.kbch, seed);
        frame.resize(params.nbch, 0);
        encoder.encode(&mut frame);
        frame
    }

    #[test]
    fn generator_degrees() {
        for code in [BchCode::N8, BchCode::N10, BchCode::N12, BchCode::S12] {
            let g = generator_polynomial(code);
            assert_eq!(g.len() - 1, code.parity_bits());
            assert_eq!(g[0], 1);
        }
    }

    #[test]
    fn poly_mult_xors_terms() {
        // (1 + x)(1 + x) = 1 + x^2 over GF(2)
        assert_eq!(poly_mult(&[1, 1], &[1, 1]), vec![1, 0, 1]);
    }

    #[test]
    fn short_codeword_divisible_by_generator() {
        let params = CodeParameters::lookup(FrameSize::Short, CodeRate::R1_2).unwrap();
        let frame = encoded(&params, 0x1234_5678);
        let g = generator_polynomial(params.bch_code);
        assert!(syndrome(&frame, &g).iter().all(|b| *b == 0));
    }

    #[test]
    fn normal_codewords_divisible_by_generator() {
        for rate in [CodeRate::R1_2, CodeRate::R2_3] {
            let params = CodeParameters::lookup(FrameSize::Normal, rate).unwrap();
            let frame = encoded(&params, 0xdead_beef);
            let g = generator_polynomial(params.bch_code);
            assert!(syndrome(&frame, &g).iter().all(|b| *b == 0), "rate {}", rate);
        }
    }

    #[test]
    fn n8_variant_encodes() {
        let params = CodeParameters {
            kbch: 2048,
            nbch: 2048 + 128,
            bch_code: BchCode::N8,
            ..CodeParameters::lookup(FrameSize::Normal, CodeRate::R1_2).unwrap()
        };
        let frame = encoded(&params, 42);
        let g = generator_polynomial(BchCode::N8);
        assert!(syndrome(&frame, &g).iter().all(|b| *b == 0));
    }

    #[test]
    fn table_rows_are_byte_remainders() {
        let params = CodeParameters::lookup(FrameSize::Normal, CodeRate::R3_4).unwrap();
        let encoder = new_bch_encoder(&params);
        let width = encoder.parity_bits();
        for dividend in [0x01u8, 0x80, 0xa5, 0xff] {
            let mut shifted: Vec<u8> = (0..8).map(|i| (dividend >> (7 - i)) & 1).collect();
            shifted.resize(8 + width, 0);
            let expected = syndrome(&shifted, encoder.generator());
            let row: Vec<u8> = encoder.table[dividend as usize][..width].iter().map(|b| *b as u8).collect();
            assert_eq!(row, expected, "dividend {:#04x}", dividend);
            assert!(encoder.table[dividend as usize][width..].not_any());
        }
    }

    #[test]
    fn zero_payload_has_zero_parity() {
        let params = CodeParameters::lookup(FrameSize::Short, CodeRate::R5_6).unwrap();
        let encoder = new_bch_encoder(&params);
        let mut frame = vec![0u8; params.nbch];
        encoder.encode(&mut frame);
        assert!(frame.iter().all(|b| *b == 0));
    }
}
