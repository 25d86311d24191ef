use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use tracing::{debug, error};

use super::{PACKETS_PER_BUFFER, Source, TsBuffer};
use crate::bbframe::header::TS_PACKET_LEN;

/// Reads a transport stream from any byte source: a file, stdin or memory.
pub struct ReaderSource {
    reader: Option<Box<dyn Read + Send>>,
}

pub fn new_reader_source(reader: Box<dyn Read + Send>) -> ReaderSource {
    ReaderSource { reader: Some(reader) }
}

pub fn new_file_source(path: &Path) -> io::Result<ReaderSource> {
    let file = File::open(path)?;
    debug!(?path, "transport stream file opened");
    Ok(new_reader_source(Box::new(BufReader::new(file))))
}

pub fn new_stdin_source() -> ReaderSource {
    new_reader_source(Box::new(io::stdin()))
}

// Fill `buf` as far as possible, returning the bytes read. Short only at EOF.
fn read_full(reader: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl Source for ReaderSource {
    fn run(&mut self) -> (Receiver<TsBuffer>, JoinHandle<io::Result<()>>) {
        let (tx, rx) = mpsc::channel();
        let reader = self.reader.take();

        let t = thread::spawn(move || {
            let Some(mut reader) = reader else {
                return Err(io::Error::other("source already started"));
            };

            loop {
                let mut bytes = vec![0u8; TS_PACKET_LEN * PACKETS_PER_BUFFER];
                let n = read_full(reader.as_mut(), &mut bytes).inspect_err(|e| {
                    error!("transport stream read failed: {}", e);
                })?;
                let last = n < bytes.len();
                bytes.truncate(n);

                if tx.send(TsBuffer { bytes, last }).is_err() {
                    debug!("transport stream receiver gone");
                    return Ok(());
                }
                if last {
                    return Ok(());
                }
            }
        });

        (rx, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn delivers_all_bytes_then_last() {
        let data: Vec<u8> = (0..TS_PACKET_LEN * (PACKETS_PER_BUFFER + 3)).map(|i| i as u8).collect();
        let mut source = new_reader_source(Box::new(Cursor::new(data.clone())));
        let (rx, t) = source.run();

        let mut received = Vec::new();
        let mut buffers = 0;
        while let Ok(buffer) = rx.recv() {
            received.extend_from_slice(&buffer.bytes);
            buffers += 1;
            if buffer.last {
                break;
            }
        }
        t.join().unwrap().unwrap();

        assert_eq!(received, data);
        assert_eq!(buffers, 2);
    }

    #[test]
    fn second_run_ends_immediately() {
        let mut source = new_reader_source(Box::new(Cursor::new(vec![0x47u8; 10])));
        let (rx, t) = source.run();
        while let Ok(b) = rx.recv() {
            if b.last {
                break;
            }
        }
        t.join().unwrap().unwrap();

        let (rx, t) = source.run();
        assert!(rx.recv().is_err());
        assert!(t.join().unwrap().is_err());
    }

    // yields `good` bytes, then fails
    struct FailingReader {
        good: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.good.read(buf)? {
                0 => Err(io::Error::new(ErrorKind::BrokenPipe, "link dropped")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_failure_reaches_the_consumer() {
        let good = vec![0x47u8; TS_PACKET_LEN * PACKETS_PER_BUFFER];
        let reader = FailingReader { good: Cursor::new(good) };
        let mut source = new_reader_source(Box::new(reader));
        let (rx, t) = source.run();

        let first = rx.recv().unwrap();
        assert_eq!(first.bytes.len(), TS_PACKET_LEN * PACKETS_PER_BUFFER);
        assert!(!first.last);
        assert!(rx.recv().is_err());

        let err = t.join().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }
}
