use tracing::debug;

use crate::bbframe::header::TS_RATE_MAX;
use crate::error::ConfigError;
use crate::interleave;
use crate::params::{CodeParameters, CodeRate, Constellation, FrameSize, InputMode};

/// In-band type B signalling, inserted once every `fec_blocks` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InbandSignalling {
    pub fec_blocks: usize,
    pub ts_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramerConfig {
    pub params: CodeParameters,
    pub mode: InputMode,
    pub inband: Option<InbandSignalling>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModulatorConfig {
    pub params: CodeParameters,
    pub constellation: Constellation,
    pub rotation: bool,
}

/// Everything the transmitter needs to know before streaming starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dvbt2Config {
    pub frame_size: FrameSize,
    pub code_rate: CodeRate,
    pub mode: InputMode,
    pub inband: bool,
    pub fec_blocks: usize,
    pub ts_rate: u32,
    pub constellation: Constellation,
    pub rotation: bool,
}

impl Default for Dvbt2Config {
    fn default() -> Self {
        Self {
            frame_size: FrameSize::Normal,
            code_rate: CodeRate::R1_2,
            mode: InputMode::Normal,
            inband: false,
            fec_blocks: 1,
            ts_rate: 0,
            constellation: Constellation::Qpsk,
            rotation: false,
        }
    }
}

impl Dvbt2Config {
    /// Reject undefined combinations and split into per stage configs.
    pub fn validate(&self) -> Result<(FramerConfig, ModulatorConfig), ConfigError> {
        let params = CodeParameters::lookup(self.frame_size, self.code_rate)?;

        let inband = if self.inband {
            if self.fec_blocks == 0 {
                return Err(ConfigError::InvalidFecBlocks(self.fec_blocks));
            }
            if self.ts_rate > TS_RATE_MAX {
                return Err(ConfigError::TsRateOutOfRange(self.ts_rate));
            }
            Some(InbandSignalling {
                fec_blocks: self.fec_blocks,
                ts_rate: self.ts_rate,
            })
        } else {
            None
        };

        // fails on a missing twist/mux table
        interleave::lookup(&params, self.constellation)?;

        debug!(config = ?self, kbch = params.kbch, nbch = params.nbch, "configuration accepted");

        Ok((
            FramerConfig {
                params,
                mode: self.mode,
                inband,
            },
            ModulatorConfig {
                params,
                constellation: self.constellation,
                rotation: self.rotation,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let (framer, modulator) = Dvbt2Config::default().validate().unwrap();
        assert_eq!(framer.params.kbch, 32208);
        assert!(framer.inband.is_none());
        assert_eq!(modulator.constellation, Constellation::Qpsk);
    }

    #[test]
    fn rejects_undefined_rate() {
        let config = Dvbt2Config {
            code_rate: CodeRate::R1_3,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::UnsupportedCodeRate {
                frame_size: FrameSize::Normal,
                code_rate: CodeRate::R1_3
            }
        );
    }

    #[test]
    fn rejects_bad_inband_settings() {
        let config = Dvbt2Config {
            inband: true,
            fec_blocks: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err(), ConfigError::InvalidFecBlocks(0));

        let config = Dvbt2Config {
            inband: true,
            ts_rate: 1 << 27,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err(), ConfigError::TsRateOutOfRange(1 << 27));
    }

    #[test]
    fn inband_ignored_when_off() {
        let config = Dvbt2Config {
            fec_blocks: 0,
            ts_rate: u32::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
