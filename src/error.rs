//! Error types for the transmitter stages.
//!
//! Configuration errors are raised once, before any frame is built. Transport
//! stream sync loss is not an error: it is logged and counted by the framer.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

use crate::params::{CodeRate, Constellation, FrameSize};

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("code rate {code_rate} is not defined for {frame_size:?} frames")]
    UnsupportedCodeRate {
        frame_size: FrameSize,
        code_rate: CodeRate,
    },

    #[error("no interleaver tables for {constellation:?} at rate {code_rate} ({frame_size:?} frames)")]
    UnsupportedCombination {
        frame_size: FrameSize,
        code_rate: CodeRate,
        constellation: Constellation,
    },

    #[error("in-band signalling needs at least one FEC block per cycle, got {0}")]
    InvalidFecBlocks(usize),

    #[error("transport stream rate {0} does not fit in 27 bits")]
    TsRateOutOfRange(u32),
}

/// Failure while expanding an LDPC base table. All are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LdpcError {
    #[error("no LDPC base table for rate {code_rate} ({frame_size:?} frames)")]
    MissingTable {
        frame_size: FrameSize,
        code_rate: CodeRate,
    },

    #[error("base table row {row} declares {count} entries but holds at most {width}")]
    CorruptRow { row: usize, count: usize, width: usize },

    #[error("cannot allocate LDPC adjacency table: {0}")]
    Allocation(#[from] TryReserveError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ldpc(#[from] LdpcError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
