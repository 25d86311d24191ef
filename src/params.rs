use std::fmt;

use crate::error::ConfigError;

pub const FRAME_SIZE_NORMAL: usize = 64800;
pub const FRAME_SIZE_SHORT: usize = 16200;

/// Bits per quasi-cyclic LDPC group.
pub const LDPC_GROUP: usize = 360;

/// LDPC FEC frame length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FrameSize {
    Normal,
    Short,
}

impl FrameSize {
    pub fn bits(&self) -> usize {
        match self {
            FrameSize::Normal => FRAME_SIZE_NORMAL,
            FrameSize::Short => FRAME_SIZE_SHORT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CodeRate {
    #[value(name = "1/3")]
    R1_3,
    #[value(name = "2/5")]
    R2_5,
    #[value(name = "1/2")]
    R1_2,
    #[value(name = "3/5")]
    R3_5,
    #[value(name = "2/3")]
    R2_3,
    #[value(name = "3/4")]
    R3_4,
    #[value(name = "4/5")]
    R4_5,
    #[value(name = "5/6")]
    R5_6,
}

impl CodeRate {
    pub fn all() -> &'static [CodeRate] {
        &[
            CodeRate::R1_3,
            CodeRate::R2_5,
            CodeRate::R1_2,
            CodeRate::R3_5,
            CodeRate::R2_3,
            CodeRate::R3_4,
            CodeRate::R4_5,
            CodeRate::R5_6,
        ]
    }
}

impl fmt::Display for CodeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CodeRate::R1_3 => "1/3",
            CodeRate::R2_5 => "2/5",
            CodeRate::R1_2 => "1/2",
            CodeRate::R3_5 => "3/5",
            CodeRate::R2_3 => "2/3",
            CodeRate::R3_4 => "3/4",
            CodeRate::R4_5 => "4/5",
            CodeRate::R5_6 => "5/6",
        };
        write!(f, "{}", s)
    }
}

/// Outer BCH code variant, named after frame size and correction capability t.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BchCode {
    N12,
    N10,
    N8,
    S12,
}

impl BchCode {
    pub fn parity_bits(&self) -> usize {
        match self {
            BchCode::N12 => 192,
            BchCode::N10 => 160,
            BchCode::N8 => 128,
            BchCode::S12 => 168,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Constellation {
    Qpsk,
    #[value(name = "16qam")]
    Qam16,
    #[value(name = "64qam")]
    Qam64,
    #[value(name = "256qam")]
    Qam256,
}

impl Constellation {
    /// Bits carried by one cell.
    pub fn bits_per_cell(&self) -> usize {
        match self {
            Constellation::Qpsk => 2,
            Constellation::Qam16 => 4,
            Constellation::Qam64 => 6,
            Constellation::Qam256 => 8,
        }
    }

    pub fn cells_per_frame(&self, frame_size: FrameSize) -> usize {
        frame_size.bits() / self.bits_per_cell()
    }
}

/// Transport stream input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum InputMode {
    /// Sync bytes are replaced by the CRC-8 of the preceding packet.
    #[default]
    Normal,
    /// High efficiency mode: sync bytes are dropped.
    Hem,
}

/// Code parameters fully determined by frame size and code rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParameters {
    pub frame_size: FrameSize,
    pub code_rate: CodeRate,
    pub kbch: usize,
    pub nbch: usize,
    pub q: usize,
    pub bch_code: BchCode,
}

// (frame size, rate) -> (kbch, nbch, q, bch)
const PARAMETER_TABLE: [(FrameSize, CodeRate, usize, usize, usize, BchCode); 14] = [
    (FrameSize::Normal, CodeRate::R1_2, 32208, 32400, 90, BchCode::N12),
    (FrameSize::Normal, CodeRate::R3_5, 38688, 38880, 72, BchCode::N12),
    (FrameSize::Normal, CodeRate::R2_3, 43040, 43200, 60, BchCode::N10),
    (FrameSize::Normal, CodeRate::R3_4, 48408, 48600, 45, BchCode::N12),
    (FrameSize::Normal, CodeRate::R4_5, 51648, 51840, 36, BchCode::N12),
    (FrameSize::Normal, CodeRate::R5_6, 53840, 54000, 30, BchCode::N10),
    (FrameSize::Short, CodeRate::R1_3, 5232, 5400, 30, BchCode::S12),
    (FrameSize::Short, CodeRate::R2_5, 6312, 6480, 27, BchCode::S12),
    (FrameSize::Short, CodeRate::R1_2, 7032, 7200, 25, BchCode::S12),
    (FrameSize::Short, CodeRate::R3_5, 9552, 9720, 18, BchCode::S12),
    (FrameSize::Short, CodeRate::R2_3, 10632, 10800, 15, BchCode::S12),
    (FrameSize::Short, CodeRate::R3_4, 11712, 11880, 12, BchCode::S12),
    (FrameSize::Short, CodeRate::R4_5, 12432, 12600, 10, BchCode::S12),
    (FrameSize::Short, CodeRate::R5_6, 13152, 13320, 8, BchCode::S12),
];

impl CodeParameters {
    pub fn lookup(frame_size: FrameSize, code_rate: CodeRate) -> Result<Self, ConfigError> {
        PARAMETER_TABLE
            .iter()
            .find(|(fs, cr, ..)| *fs == frame_size && *cr == code_rate)
            .map(|&(frame_size, code_rate, kbch, nbch, q, bch_code)| CodeParameters {
                frame_size,
                code_rate,
                kbch,
                nbch,
                q,
                bch_code,
            })
            .ok_or(ConfigError::UnsupportedCodeRate {
                frame_size,
                code_rate,
            })
    }

    pub fn parity_bits(&self) -> usize {
        self.bch_code.parity_bits()
    }

    pub fn frame_bits(&self) -> usize {
        self.frame_size.bits()
    }

    pub fn ldpc_parity_bits(&self) -> usize {
        self.frame_bits() - self.nbch
    }
}

/// Every defined (frame size, code rate) pair.
pub fn supported() -> impl Iterator<Item = CodeParameters> {
    PARAMETER_TABLE
        .iter()
        .filter_map(|&(fs, cr, ..)| CodeParameters::lookup(fs, cr).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bch_parity_matches_table() {
        for p in supported() {
            assert_eq!(p.nbch - p.kbch, p.parity_bits(), "{:?} {}", p.frame_size, p.code_rate);
            assert!(p.frame_bits() > p.nbch);
        }
    }

    #[test]
    fn q_spreads_parity_over_groups() {
        for p in supported() {
            assert_eq!(p.q * LDPC_GROUP, p.ldpc_parity_bits());
            assert_eq!(p.nbch % LDPC_GROUP, 0);
        }
    }

    #[test]
    fn normal_frames_reject_lowest_rates() {
        for rate in [CodeRate::R1_3, CodeRate::R2_5] {
            let err = CodeParameters::lookup(FrameSize::Normal, rate).unwrap_err();
            assert!(matches!(err, ConfigError::UnsupportedCodeRate { .. }));
        }
        assert_eq!(supported().count(), 14);
    }

    #[test]
    fn cells_per_frame() {
        assert_eq!(Constellation::Qpsk.cells_per_frame(FrameSize::Normal), 32400);
        assert_eq!(Constellation::Qam256.cells_per_frame(FrameSize::Normal), 8100);
        assert_eq!(Constellation::Qam64.cells_per_frame(FrameSize::Short), 2700);
        assert_eq!(Constellation::Qam256.cells_per_frame(FrameSize::Short), 2025);
    }
}
