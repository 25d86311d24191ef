//! Bit interleaver and cell demultiplexer.
//!
//! A FEC frame is parity interleaved, written column-wise into a block of
//! `2 * mod` columns (or `mod` for short 256QAM frames) where each column
//! starts at its twist offset, read out row-wise, and every row is then
//! scattered into cell words through the mux table. QPSK skips the block
//! and only pairs up consecutive bits.
//!
//! The whole operation is a fixed permutation per configuration, so it is
//! computed once at construction.

pub mod tables;

use enum_dispatch::enum_dispatch;
use std::fmt;
use tracing::debug;

use crate::error::ConfigError;
use crate::params::{CodeParameters, CodeRate, Constellation, FrameSize, LDPC_GROUP};
use tables::*;

const TWIST_TABLES: [(FrameSize, Constellation, &[usize]); 6] = [
    (FrameSize::Normal, Constellation::Qam16, &TWIST16N),
    (FrameSize::Normal, Constellation::Qam64, &TWIST64N),
    (FrameSize::Normal, Constellation::Qam256, &TWIST256N),
    (FrameSize::Short, Constellation::Qam16, &TWIST16S),
    (FrameSize::Short, Constellation::Qam64, &TWIST64S),
    (FrameSize::Short, Constellation::Qam256, &TWIST256S),
];

// Rate specific entries come before the default (`None`) of each group.
const MUX_TABLES: [(FrameSize, Constellation, Option<CodeRate>, &[usize]); 18] = [
    (FrameSize::Normal, Constellation::Qam16, Some(CodeRate::R3_5), &MUX16_35),
    (FrameSize::Normal, Constellation::Qam16, None, &MUX16),
    (FrameSize::Short, Constellation::Qam16, Some(CodeRate::R1_3), &MUX16_13),
    (FrameSize::Short, Constellation::Qam16, Some(CodeRate::R2_5), &MUX16_25),
    (FrameSize::Short, Constellation::Qam16, None, &MUX16),
    (FrameSize::Normal, Constellation::Qam64, Some(CodeRate::R3_5), &MUX64_35),
    (FrameSize::Normal, Constellation::Qam64, None, &MUX64),
    (FrameSize::Short, Constellation::Qam64, Some(CodeRate::R1_3), &MUX64_13),
    (FrameSize::Short, Constellation::Qam64, Some(CodeRate::R2_5), &MUX64_25),
    (FrameSize::Short, Constellation::Qam64, None, &MUX64),
    (FrameSize::Normal, Constellation::Qam256, Some(CodeRate::R3_5), &MUX256_35),
    (FrameSize::Normal, Constellation::Qam256, Some(CodeRate::R2_3), &MUX256_23),
    (FrameSize::Normal, Constellation::Qam256, None, &MUX256),
    (FrameSize::Short, Constellation::Qam256, Some(CodeRate::R1_3), &MUX256S_13),
    (FrameSize::Short, Constellation::Qam256, Some(CodeRate::R2_5), &MUX256S_25),
    (FrameSize::Short, Constellation::Qam256, None, &MUX256S),
    // QPSK has no demultiplexer, the entries only mark the supported pairs
    (FrameSize::Normal, Constellation::Qpsk, None, &[]),
    (FrameSize::Short, Constellation::Qpsk, None, &[]),
];

/// How a configuration turns frames into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Qpsk {
        parity_interleave: bool,
    },
    ColumnTwist {
        columns: usize,
        twist: &'static [usize],
        mux: &'static [usize],
    },
}

/// Select the interleaver tables for a code and constellation.
pub fn lookup(params: &CodeParameters, constellation: Constellation) -> Result<Scheme, ConfigError> {
    let unsupported = ConfigError::UnsupportedCombination {
        frame_size: params.frame_size,
        code_rate: params.code_rate,
        constellation,
    };

    let mux = MUX_TABLES
        .iter()
        .find(|(fs, c, rate, _)| {
            *fs == params.frame_size && *c == constellation && rate.is_none_or(|r| r == params.code_rate)
        })
        .map(|(.., mux)| *mux)
        .ok_or(unsupported.clone())?;

    if constellation == Constellation::Qpsk {
        let parity_interleave = matches!(params.code_rate, CodeRate::R1_3 | CodeRate::R2_5);
        return Ok(Scheme::Qpsk { parity_interleave });
    }

    let twist = TWIST_TABLES
        .iter()
        .find(|(fs, c, _)| *fs == params.frame_size && *c == constellation)
        .map(|(.., twist)| *twist)
        .ok_or(unsupported.clone())?;

    if twist.len() != mux.len() {
        return Err(unsupported);
    }

    Ok(Scheme::ColumnTwist {
        columns: twist.len(),
        twist,
        mux,
    })
}

/// Frame position feeding position `k` after parity interleaving.
pub fn parity_source(params: &CodeParameters, k: usize) -> usize {
    if k < params.nbch {
        return k;
    }
    let j = k - params.nbch;
    let (t, s) = (j / LDPC_GROUP, j % LDPC_GROUP);
    params.nbch + params.q * s + t
}

#[enum_dispatch]
pub trait BitInterleave {
    /// Convert one `frameSize` bit frame into cell words of `mod` bits.
    fn interleave(&self, frame: &[u8], cells: &mut [u8]);

    /// Source frame position of every bit of the cell stream, MSB first.
    fn bit_order(&self) -> Vec<usize>;
}

#[derive(Debug)]
#[enum_dispatch(BitInterleave)]
pub enum Interleaver {
    Pairs(PairInterleaver),
    Twist(TwistInterleaver),
}

pub struct PairInterleaver {
    frame_bits: usize,
    order: Option<Vec<u32>>,
}

impl fmt::Debug for PairInterleaver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PairInterleaver<{} bits, parity interleave: {}>", self.frame_bits, self.order.is_some())
    }
}

impl BitInterleave for PairInterleaver {
    fn interleave(&self, frame: &[u8], cells: &mut [u8]) {
        assert_eq!(frame.len(), self.frame_bits);
        assert_eq!(cells.len(), self.frame_bits / 2);

        match &self.order {
            Some(order) => {
                for (cell, pair) in cells.iter_mut().zip(order.chunks(2)) {
                    *cell = (frame[pair[0] as usize] << 1) | frame[pair[1] as usize];
                }
            }
            None => {
                for (cell, pair) in cells.iter_mut().zip(frame.chunks(2)) {
                    *cell = (pair[0] << 1) | pair[1];
                }
            }
        }
    }

    fn bit_order(&self) -> Vec<usize> {
        match &self.order {
            Some(order) => order.iter().map(|i| *i as usize).collect(),
            None => (0..self.frame_bits).collect(),
        }
    }
}

pub struct TwistInterleaver {
    bits_per_cell: usize,
    order: Vec<u32>,
}

impl fmt::Debug for TwistInterleaver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TwistInterleaver<{} bits, {} bit cells>", self.order.len(), self.bits_per_cell)
    }
}

impl BitInterleave for TwistInterleaver {
    fn interleave(&self, frame: &[u8], cells: &mut [u8]) {
        assert_eq!(frame.len(), self.order.len());
        assert_eq!(cells.len(), self.order.len() / self.bits_per_cell);

        for (cell, sources) in cells.iter_mut().zip(self.order.chunks(self.bits_per_cell)) {
            *cell = sources.iter().fold(0u8, |acc, i| (acc << 1) | frame[*i as usize]);
        }
    }

    fn bit_order(&self) -> Vec<usize> {
        self.order.iter().map(|i| *i as usize).collect()
    }
}

// Column c of the block is the c-th run of `rows` parity interleaved bits,
// rotated down by twist[c]. Row d is demultiplexed so that its bit e lands
// at position mux[e] of the row word.
fn twist_order(params: &CodeParameters, twist: &[usize], mux: &[usize]) -> Vec<u32> {
    let frame_bits = params.frame_bits();
    let columns = twist.len();
    let rows = frame_bits / columns;
    let mut order = vec![0u32; frame_bits];

    for d in 0..rows {
        for (e, (tw, m)) in twist.iter().zip(mux).enumerate() {
            let row = (d + rows - tw % rows) % rows;
            let u = e * rows + row;
            order[d * columns + m] = parity_source(params, u) as u32;
        }
    }

    order
}

pub fn new_interleaver(params: &CodeParameters, constellation: Constellation) -> Result<Interleaver, ConfigError> {
    let interleaver = match lookup(params, constellation)? {
        Scheme::Qpsk { parity_interleave } => {
            let order = parity_interleave.then(|| {
                (0..params.frame_bits())
                    .map(|k| parity_source(params, k) as u32)
                    .collect()
            });
            Interleaver::Pairs(PairInterleaver {
                frame_bits: params.frame_bits(),
                order,
            })
        }
        Scheme::ColumnTwist { twist, mux, .. } => Interleaver::Twist(TwistInterleaver {
            bits_per_cell: constellation.bits_per_cell(),
            order: twist_order(params, twist, mux),
        }),
    };

    debug!(?interleaver, "bit interleaver ready");
    Ok(interleaver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::supported;

    const CONSTELLATIONS: [Constellation; 4] = [
        Constellation::Qpsk,
        Constellation::Qam16,
        Constellation::Qam64,
        Constellation::Qam256,
    ];

    fn assert_permutation(order: &[usize], len: usize) {
        assert_eq!(order.len(), len);
        let mut seen = vec![false; len];
        for i in order {
            assert!(!seen[*i], "bit {} used twice", i);
            seen[*i] = true;
        }
    }

    #[test]
    fn every_configuration_is_a_bijection() {
        for p in supported() {
            for c in CONSTELLATIONS {
                let interleaver = new_interleaver(&p, c).unwrap();
                assert_permutation(&interleaver.bit_order(), p.frame_bits());
            }
        }
    }

    #[test]
    fn mux_tables_are_permutations() {
        for (.., mux) in MUX_TABLES {
            assert_permutation(mux, mux.len());
        }
    }

    #[test]
    fn rate_overrides_are_selected() {
        let p = CodeParameters::lookup(FrameSize::Normal, CodeRate::R3_5).unwrap();
        match lookup(&p, Constellation::Qam16).unwrap() {
            Scheme::ColumnTwist { columns, mux, .. } => {
                assert_eq!(columns, 8);
                assert_eq!(mux, &MUX16_35);
            }
            other => panic!("unexpected {:?}", other),
        }

        let p = CodeParameters::lookup(FrameSize::Short, CodeRate::R3_4).unwrap();
        match lookup(&p, Constellation::Qam256).unwrap() {
            Scheme::ColumnTwist { columns, twist, mux } => {
                assert_eq!(columns, 8);
                assert_eq!(twist, &TWIST256S);
                assert_eq!(mux, &MUX256S);
            }
            other => panic!("unexpected {:?}", other),
        }

        let p = CodeParameters::lookup(FrameSize::Short, CodeRate::R2_5).unwrap();
        assert_eq!(lookup(&p, Constellation::Qpsk).unwrap(), Scheme::Qpsk { parity_interleave: true });
    }

    #[test]
    fn parity_interleave_regroups_columns() {
        let p = CodeParameters::lookup(FrameSize::Short, CodeRate::R1_3).unwrap();
        assert_eq!(parity_source(&p, 10), 10);
        assert_eq!(parity_source(&p, p.nbch), p.nbch);
        assert_eq!(parity_source(&p, p.nbch + 1), p.nbch + p.q);
        assert_eq!(parity_source(&p, p.nbch + LDPC_GROUP), p.nbch + 1);
    }

    #[test]
    fn qpsk_pairs_consecutive_bits() {
        let p = CodeParameters::lookup(FrameSize::Short, CodeRate::R1_2).unwrap();
        let interleaver = new_interleaver(&p, Constellation::Qpsk).unwrap();
        let frame: Vec<u8> = (0..p.frame_bits()).map(|i| ((i / 2 + i) % 2) as u8).collect();
        let mut cells = vec![0u8; p.frame_bits() / 2];
        interleaver.interleave(&frame, &mut cells);
        assert_eq!(&cells[..4], &[1, 2, 1, 2]);
    }

    #[test]
    fn first_row_follows_mux() {
        // with twist[0] == 0 the first bit of the first column is frame bit 0
        let p = CodeParameters::lookup(FrameSize::Normal, CodeRate::R1_2).unwrap();
        let interleaver = new_interleaver(&p, Constellation::Qam16).unwrap();
        let order = interleaver.bit_order();
        assert_eq!(order[MUX16[0]], 0);
        // column 1 holds frame bits rows..2*rows
        let rows = p.frame_bits() / 8;
        assert_eq!(order[MUX16[1]], rows);

        let mut frame = vec![0u8; p.frame_bits()];
        frame[0] = 1;
        let mut cells = vec![0u8; p.frame_bits() / 4];
        interleaver.interleave(&frame, &mut cells);
        // MUX16[0] == 7 is the last bit of the second cell of the row
        assert_eq!(cells[0], 0);
        assert_eq!(cells[1], 1);
    }

    #[test]
    fn twisted_columns_start_late() {
        let p = CodeParameters::lookup(FrameSize::Normal, CodeRate::R1_2).unwrap();
        let order = new_interleaver(&p, Constellation::Qam16).unwrap().bit_order();
        let rows = p.frame_bits() / 8;
        assert_eq!(TWIST16N[2], 2);

        // column 2 is written from row 2, so rows 0 and 1 hold its last bits
        assert_eq!(order[MUX16[2]], 3 * rows - 2);
        assert_eq!(order[8 + MUX16[2]], 3 * rows - 1);
        assert_eq!(order[2 * 8 + MUX16[2]], 2 * rows);

        // column 5 lies in the parity part and goes through parity interleaving
        assert_eq!(TWIST16N[5], 5);
        assert!(5 * rows >= p.nbch);
        assert_eq!(order[5 * 8 + MUX16[5]], parity_source(&p, 5 * rows));
        assert_eq!(order[MUX16[5]], parity_source(&p, 6 * rows - 5));
    }

    #[test]
    fn short_256qam_override_is_twisted() {
        let p = CodeParameters::lookup(FrameSize::Short, CodeRate::R1_3).unwrap();
        let order = new_interleaver(&p, Constellation::Qam256).unwrap().bit_order();
        let rows = p.frame_bits() / 8;
        assert_eq!(TWIST256S[4], 7);
        assert_eq!(MUX256S_13[4], 5);

        // row 0 takes the seventh from last bit of column 4, mux moves it to bit 5
        assert_eq!(order[5], parity_source(&p, 5 * rows - 7));
        assert_eq!(order[7 * 8 + 5], parity_source(&p, 4 * rows));

        // column 7: twist 21, mux keeps it in place
        assert_eq!(order[7], parity_source(&p, 8 * rows - 21));
    }
}
