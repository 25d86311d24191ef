use num_complex::Complex64;
use tracing::{debug, error, info};

use crate::bbframe::{BasebandFramer, new_framer};
use crate::config::Dvbt2Config;
use crate::error::Result;
use crate::ldpc::{LdpcEncoder, new_ldpc_encoder};
use crate::modulate::{Modulator, new_modulator};
use crate::output::SymbolOutput;
use crate::source::Source;

/// Totals reported when a run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransmitterStats {
    pub frames: u64,
    pub bytes: u64,
    pub symbols: u64,
    pub sync_errors: u64,
}

/// Transport stream to symbols: framer, LDPC, interleaver and mapper.
#[derive(Debug)]
pub struct Dvbt2Transmitter {
    framer: BasebandFramer,
    ldpc: LdpcEncoder,
    modulator: Modulator,
    stats: TransmitterStats,
}

pub fn new_transmitter(config: &Dvbt2Config) -> Result<Dvbt2Transmitter> {
    let (framer_config, modulator_config) = config.validate()?;

    let transmitter = Dvbt2Transmitter {
        framer: new_framer(&framer_config),
        ldpc: new_ldpc_encoder(&framer_config.params)?,
        modulator: new_modulator(&modulator_config)?,
        stats: TransmitterStats::default(),
    };
    debug!(?transmitter, "transmitter ready");

    Ok(transmitter)
}

impl Dvbt2Transmitter {
    pub fn stats(&self) -> TransmitterStats {
        TransmitterStats {
            sync_errors: self.framer.state().sync_errors,
            ..self.stats
        }
    }

    /// Transport stream bytes needed for the next `frames` frames.
    pub fn input_required(&self, frames: usize) -> usize {
        self.framer.input_required(frames)
    }

    pub fn cells_per_frame(&self) -> usize {
        self.modulator.cell_size()
    }

    /// Encode one frame from the front of `input`, returning the bytes
    /// consumed and its symbols, or `None` if `input` is too short.
    pub fn process_frame(&mut self, input: &[u8]) -> Option<(usize, Vec<Complex64>)> {
        let frame = self.framer.try_frame(input)?;
        let coded = self.ldpc.encode_frame(&frame.bits);
        let symbols = self.modulator.modulate_frame(&coded);

        self.stats.frames += 1;
        self.stats.bytes += frame.consumed as u64;
        self.stats.symbols += symbols.len() as u64;

        Some((frame.consumed, symbols))
    }

    /// Encode as many frames as `input` allows, up to `max_frames`.
    pub fn process(&mut self, input: &[u8], max_frames: Option<usize>) -> (usize, Vec<Complex64>) {
        let mut consumed = 0;
        let mut symbols = Vec::new();
        let mut frames = 0;

        while max_frames.is_none_or(|max| frames < max) {
            let Some((used, out)) = self.process_frame(&input[consumed..]) else {
                break;
            };
            consumed += used;
            symbols.extend(out);
            frames += 1;
        }

        (consumed, symbols)
    }

    /// Pull buffers from `source` until it ends or `max_frames` frames have
    /// been sent, writing symbols to `output`. Trailing bytes that do not
    /// fill a frame are dropped. A read failure in the source is returned
    /// once the frames before it have been written.
    ///
    /// When `max_frames` is reached the source thread is not waited for, as
    /// it may be blocked on a read that never completes.
    pub fn run(
        &mut self,
        source: &mut dyn Source,
        output: &mut dyn SymbolOutput,
        max_frames: Option<usize>,
    ) -> Result<TransmitterStats> {
        let (source_rx, source_t) = source.run();
        let mut pending: Vec<u8> = Vec::new();
        let mut sent = 0;
        let limit_reached = |sent: usize| max_frames.is_some_and(|max| sent >= max);

        while !limit_reached(sent) {
            let Ok(buffer) = source_rx.recv() else {
                break;
            };
            pending.extend_from_slice(&buffer.bytes);

            while !limit_reached(sent) && pending.len() >= self.input_required(1) {
                let Some((used, symbols)) = self.process_frame(&pending) else {
                    break;
                };
                output.output(&symbols)?;
                pending.drain(..used);
                sent += 1;
            }

            if buffer.last {
                break;
            }
        }

        // the source stops when its receiver is gone
        drop(source_rx);
        let source_result = if limit_reached(sent) {
            debug!("frame limit reached, source left to finish on its own");
            Ok(())
        } else {
            source_t.join().unwrap_or_else(|_| {
                error!("source thread panicked");
                Ok(())
            })
        };
        output.flush()?;
        source_result?;

        let stats = self.stats();
        info!(
            frames = stats.frames,
            bytes = stats.bytes,
            symbols = stats.symbols,
            sync_errors = stats.sync_errors,
            unused = pending.len(),
            "transmission finished"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::cf32::new_cf32_writer;
    use crate::params::{CodeRate, Constellation, FrameSize};
    use crate::error::Error;
    use crate::source::PACKETS_PER_BUFFER;
    use crate::source::reader::new_reader_source;
    use std::io::{self, Cursor, Read};
    use std::sync::mpsc::{self, Receiver};

    fn short_config() -> Dvbt2Config {
        Dvbt2Config {
            frame_size: FrameSize::Short,
            code_rate: CodeRate::R3_5,
            constellation: Constellation::Qam64,
            rotation: true,
            ..Default::default()
        }
    }

    fn stream(packets: usize) -> Vec<u8> {
        (0..packets * 188)
            .map(|i| if i % 188 == 0 { 0x47 } else { (i % 199) as u8 })
            .collect()
    }

    #[test]
    fn process_stops_on_short_input() {
        let mut tx = new_transmitter(&short_config()).unwrap();
        let input = stream(20);
        let needed = tx.input_required(2);
        let (consumed, symbols) = tx.process(&input[..needed + 10], None);
        assert_eq!(consumed, needed);
        assert_eq!(symbols.len(), 2 * tx.cells_per_frame());
        assert_eq!(tx.stats().frames, 2);
    }

    #[test]
    fn run_writes_all_frames() {
        let mut tx = new_transmitter(&short_config()).unwrap();
        let input = stream(60);
        let mut expected = new_transmitter(&short_config()).unwrap();
        let (_, symbols) = expected.process(&input, None);

        let mut source = new_reader_source(Box::new(Cursor::new(input)));
        let mut output = new_cf32_writer(Vec::new());
        let stats = tx.run(&mut source, &mut output, None).unwrap();

        assert_eq!(stats.symbols, symbols.len() as u64);
        assert_eq!(stats.sync_errors, 0);
        assert_eq!(output.into_inner().len(), symbols.len() * 8);
    }

    #[test]
    fn run_honours_frame_limit() {
        let mut tx = new_transmitter(&short_config()).unwrap();
        let mut source = new_reader_source(Box::new(Cursor::new(stream(60))));
        let mut output = new_cf32_writer(Vec::new());
        let stats = tx.run(&mut source, &mut output, Some(3)).unwrap();
        assert_eq!(stats.frames, 3);
        assert_eq!(output.symbols(), 3 * tx.cells_per_frame() as u64);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Dvbt2Config {
            code_rate: CodeRate::R2_5,
            ..Default::default()
        };
        assert!(matches!(new_transmitter(&config), Err(Error::Config(_))));
    }

    // serves `data`, then fails or stalls
    struct TroubledReader {
        data: Cursor<Vec<u8>>,
        stall: Option<Receiver<()>>,
    }

    impl Read for TroubledReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            match &self.stall {
                Some(gate) => {
                    let _ = gate.recv();
                    Ok(0)
                }
                None => Err(io::Error::new(io::ErrorKind::ConnectionReset, "feed lost")),
            }
        }
    }

    #[test]
    fn read_failure_fails_the_run() {
        let reader = TroubledReader {
            data: Cursor::new(stream(PACKETS_PER_BUFFER)),
            stall: None,
        };
        let mut tx = new_transmitter(&short_config()).unwrap();
        let mut source = new_reader_source(Box::new(reader));
        let mut output = new_cf32_writer(Vec::new());

        let result = tx.run(&mut source, &mut output, None);
        assert!(matches!(result, Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::ConnectionReset));
        // frames ahead of the failure were still written
        assert!(tx.stats().frames > 0);
        assert_eq!(output.symbols(), tx.stats().symbols);
    }

    #[test]
    fn frame_limit_does_not_wait_for_a_stalled_source() {
        let (_gate_tx, gate_rx) = mpsc::channel();
        let reader = TroubledReader {
            data: Cursor::new(stream(2 * PACKETS_PER_BUFFER)),
            stall: Some(gate_rx),
        };
        let mut tx = new_transmitter(&short_config()).unwrap();
        let mut source = new_reader_source(Box::new(reader));
        let mut output = new_cf32_writer(Vec::new());

        let stats = tx.run(&mut source, &mut output, Some(2)).unwrap();
        assert_eq!(stats.frames, 2);
    }
}
