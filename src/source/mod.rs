use std::io;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

pub mod reader;

/// Transport stream packets read per buffer.
pub const PACKETS_PER_BUFFER: usize = 64;

/// A run of transport stream bytes. `last` marks the end of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsBuffer {
    pub bytes: Vec<u8>,
    pub last: bool,
}

pub trait Source {
    /// Start producing buffers on a background thread. A read failure ends
    /// the stream without a `last` buffer and is returned by the thread.
    fn run(&mut self) -> (Receiver<TsBuffer>, JoinHandle<io::Result<()>>);
}
