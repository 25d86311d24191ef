//! LDPC inner code encoder.
//!
//! The DVB-T2 parity check matrices are described by compact base tables:
//! one row per 360 bit group of systematic bits, listing the parity
//! addresses touched by the first bit of the group. The other 359 bits of
//! the group use the same addresses shifted by multiples of `q`. Expanding
//! the tables gives, for every parity bit, the systematic bits it
//! accumulates; the parity itself is the XOR over that list followed by a
//! running XOR across the parity bits (the staircase part of H).

pub mod tables;

use std::fmt;

use tracing::debug;

use crate::error::LdpcError;
use crate::params::{CodeParameters, CodeRate, FrameSize, LDPC_GROUP};
use tables::*;

fn rows<const N: usize>(table: &'static [[u16; N]]) -> Vec<&'static [u16]> {
    table.iter().map(|row| &row[..]).collect()
}

/// Base table for a frame size and code rate, `None` if the pair is undefined.
pub fn base_table(frame_size: FrameSize, code_rate: CodeRate) -> Option<Vec<&'static [u16]>> {
    let table = match (frame_size, code_rate) {
        (FrameSize::Normal, CodeRate::R1_2) => rows(&LDPC_1_2N),
        (FrameSize::Normal, CodeRate::R3_5) => rows(&LDPC_3_5N),
        (FrameSize::Normal, CodeRate::R2_3) => rows(&LDPC_2_3N),
        (FrameSize::Normal, CodeRate::R3_4) => rows(&LDPC_3_4N),
        (FrameSize::Normal, CodeRate::R4_5) => rows(&LDPC_4_5N),
        (FrameSize::Normal, CodeRate::R5_6) => rows(&LDPC_5_6N),
        (FrameSize::Short, CodeRate::R1_3) => rows(&LDPC_1_3S),
        (FrameSize::Short, CodeRate::R2_5) => rows(&LDPC_2_5S),
        (FrameSize::Short, CodeRate::R1_2) => rows(&LDPC_1_2S),
        (FrameSize::Short, CodeRate::R3_5) => rows(&LDPC_3_5S),
        (FrameSize::Short, CodeRate::R2_3) => rows(&LDPC_2_3S),
        (FrameSize::Short, CodeRate::R3_4) => rows(&LDPC_3_4S),
        (FrameSize::Short, CodeRate::R4_5) => rows(&LDPC_4_5S),
        (FrameSize::Short, CodeRate::R5_6) => rows(&LDPC_5_6S),
        _ => return None,
    };
    Some(table)
}

pub struct LdpcEncoder {
    params: CodeParameters,
    adjacency: Vec<Vec<u32>>,
}

impl fmt::Debug for LdpcEncoder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LdpcEncoder<{:?} {} - {} parity bits>",
            self.params.frame_size,
            self.params.code_rate,
            self.adjacency.len()
        )
    }
}

/// Expand the base table of `params` into per parity bit adjacency lists.
pub fn build_adjacency(params: &CodeParameters) -> Result<Vec<Vec<u32>>, LdpcError> {
    let table = base_table(params.frame_size, params.code_rate).ok_or(LdpcError::MissingTable {
        frame_size: params.frame_size,
        code_rate: params.code_rate,
    })?;
    let pbits = params.ldpc_parity_bits();
    let q = params.q;

    let mut total = 0usize;
    for (row, entries) in table.iter().enumerate() {
        let count = entries[0] as usize;
        if count + 1 > entries.len() {
            return Err(LdpcError::CorruptRow {
                row,
                count,
                width: entries.len() - 1,
            });
        }
        total += count;
    }

    // a size hint only: some short codes have irregular check node degrees
    let per_bit = total * LDPC_GROUP / pbits + 2;

    let mut adjacency: Vec<Vec<u32>> = Vec::new();
    adjacency.try_reserve_exact(pbits)?;
    for _ in 0..pbits {
        let mut list = Vec::new();
        list.try_reserve_exact(per_bit)?;
        adjacency.push(list);
    }

    let mut im = 0u32;
    for entries in &table {
        let count = entries[0] as usize;
        for n in 0..LDPC_GROUP {
            for seed in &entries[1..=count] {
                let pbit = (*seed as usize + n * q) % pbits;
                adjacency[pbit].push(im);
            }
            im += 1;
        }
    }

    debug!(
        frame_size = ?params.frame_size,
        rate = %params.code_rate,
        pbits,
        edges = total * LDPC_GROUP,
        "LDPC lookup built"
    );

    Ok(adjacency)
}

pub fn new_ldpc_encoder(params: &CodeParameters) -> Result<LdpcEncoder, LdpcError> {
    Ok(LdpcEncoder {
        params: *params,
        adjacency: build_adjacency(params)?,
    })
}

impl LdpcEncoder {
    /// Fill cells `nbch..frameSize` of `frame` with LDPC parity computed from
    /// cells `0..nbch`.
    pub fn encode(&self, frame: &mut [u8]) {
        let nbch = self.params.nbch;
        assert_eq!(frame.len(), self.params.frame_bits());

        let (info, parity) = frame.split_at_mut(nbch);
        for (p, list) in parity.iter_mut().zip(&self.adjacency) {
            *p = list.iter().fold(0u8, |acc, i| acc ^ info[*i as usize]);
        }
        for j in 1..parity.len() {
            parity[j] ^= parity[j - 1];
        }
    }

    /// Extend an `nbch` bit BCH frame to a full FEC frame.
    pub fn encode_frame(&self, bch_frame: &[u8]) -> Vec<u8> {
        assert_eq!(bch_frame.len(), self.params.nbch);
        let mut frame = bch_frame.to_vec();
        frame.resize(self.params.frame_bits(), 0);
        self.encode(&mut frame);
        frame
    }

    pub fn adjacency(&self) -> &[Vec<u32>] {
        &self.adjacency
    }

    pub fn params(&self) -> &CodeParameters {
        &self.params
    }
}
