use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use num_complex::Complex64;
use tracing::debug;

use super::SymbolOutput;

/// Interleaved little endian `f32` I/Q pairs, the usual SDR complex file format.
pub struct Cf32Writer<W: Write> {
    writer: W,
    symbols: u64,
}

pub fn new_cf32_writer<W: Write>(writer: W) -> Cf32Writer<W> {
    Cf32Writer { writer, symbols: 0 }
}

pub fn new_file_output(path: &Path) -> io::Result<Cf32Writer<BufWriter<File>>> {
    let file = File::create(path)?;
    debug!(?path, "symbol output file created");
    Ok(new_cf32_writer(BufWriter::new(file)))
}

pub fn new_stdout_output() -> Cf32Writer<BufWriter<io::Stdout>> {
    new_cf32_writer(BufWriter::new(io::stdout()))
}

impl<W: Write> Cf32Writer<W> {
    pub fn symbols(&self) -> u64 {
        self.symbols
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SymbolOutput for Cf32Writer<W> {
    fn output(&mut self, symbols: &[Complex64]) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(symbols.len() * 8);
        for s in symbols {
            bytes.extend_from_slice(&(s.re as f32).to_le_bytes());
            bytes.extend_from_slice(&(s.im as f32).to_le_bytes());
        }
        self.writer.write_all(&bytes)?;
        self.symbols += symbols.len() as u64;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::c64;

    #[test]
    fn writes_iq_pairs() {
        let mut out = new_cf32_writer(Vec::new());
        out.output(&[c64(0.5, -1.0), c64(0.0, 2.0)]).unwrap();
        out.flush().unwrap();
        assert_eq!(out.symbols(), 2);

        let bytes = out.into_inner();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[0..4], 0.5f32.to_le_bytes());
        assert_eq!(bytes[4..8], (-1.0f32).to_le_bytes());
        assert_eq!(bytes[12..16], 2.0f32.to_le_bytes());
    }
}
