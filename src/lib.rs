use std::path::PathBuf;

use clap::Parser;

pub mod bbframe;
pub mod config;
pub mod encode;
pub mod error;
pub mod interleave;
pub mod ldpc;
pub mod modulate;
pub mod output;
pub mod params;
pub mod source;

pub mod transmitter;

pub use config::Dvbt2Config;
pub use error::{ConfigError, Error, LdpcError, Result};
pub use transmitter::{Dvbt2Transmitter, new_transmitter};

use params::{CodeRate, Constellation, FrameSize, InputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Cli {
    /// Transport stream to send, stdin if absent
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Complex f32 symbol file to write, stdout if absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FrameSize::Normal)]
    pub frame_size: FrameSize,
    #[arg(long, value_enum, default_value_t = CodeRate::R1_2)]
    pub code_rate: CodeRate,
    #[arg(long, value_enum, default_value_t = Constellation::Qpsk)]
    pub constellation: Constellation,
    /// Rotated constellation with Q cyclic delay
    #[arg(long)]
    pub rotation: bool,
    #[arg(long, value_enum, default_value_t = InputMode::Normal)]
    pub input_mode: InputMode,
    /// Insert in-band type B signalling
    #[arg(long)]
    pub inband: bool,
    /// FEC blocks per in-band signalling cycle
    #[arg(long, default_value_t = 1)]
    pub fec_blocks: usize,
    /// Transport stream rate signalled in-band, bits per second
    #[arg(long, default_value_t = 0)]
    pub ts_rate: u32,
    /// Stop after this many FEC frames
    #[arg(long)]
    pub frames: Option<usize>,
    /// Default log filter when RUST_LOG is unset
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn config(&self) -> Dvbt2Config {
        Dvbt2Config {
            frame_size: self.frame_size,
            code_rate: self.code_rate,
            mode: self.input_mode,
            inband: self.inband,
            fec_blocks: self.fec_blocks,
            ts_rate: self.ts_rate,
            constellation: self.constellation,
            rotation: self.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_transmitter_options() {
        let cli = Cli::try_parse_from([
            "dvbt2ll",
            "--frame-size",
            "short",
            "--code-rate",
            "2/5",
            "--constellation",
            "256qam",
            "--rotation",
            "--input-mode",
            "hem",
            "--inband",
            "--fec-blocks",
            "4",
            "--ts-rate",
            "7000000",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.frame_size, FrameSize::Short);
        assert_eq!(config.code_rate, CodeRate::R2_5);
        assert_eq!(config.constellation, Constellation::Qam256);
        assert_eq!(config.mode, InputMode::Hem);
        assert!(config.rotation && config.inband);
        assert_eq!(config.fec_blocks, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["dvbt2ll"]).unwrap();
        assert_eq!(cli.config(), Dvbt2Config::default());
        assert_eq!(cli.log_level, LogLevel::Info);
        assert!(cli.input.is_none() && cli.frames.is_none());
    }
}
