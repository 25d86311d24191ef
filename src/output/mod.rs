use std::io;

use num_complex::Complex64;

pub mod cf32;

pub trait SymbolOutput {
    fn output(&mut self, symbols: &[Complex64]) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}
