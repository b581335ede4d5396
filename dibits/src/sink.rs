/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::Write;

use crate::error::Result;

/// Anything a declaration can be written into.
pub trait Sink {
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Collects everything in memory so it can be handed over in one piece.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buf: Vec<u8>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MemorySink {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl Sink for MemorySink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

/// Passes every write straight through to the final destination.
pub struct DirectSink<W: Write> {
    inner: W,
}

impl<W: Write> DirectSink<W> {
    pub fn new(inner: W) -> Self {
        DirectSink { inner }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for DirectSink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

/// Whether a declaration is assembled in memory before it reaches the
/// destination. Output is identical either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Buffering {
    #[default]
    Buffered,
    Unbuffered,
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::DibitsError;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn memory_sink_appends() {
        let mut sink = MemorySink::new();
        sink.write(b"0x").unwrap();
        sink.write(b"FF").unwrap();
        assert_eq!(sink.as_bytes(), b"0xFF");
    }

    #[test]
    fn direct_sink_forwards() {
        let mut sink = DirectSink::new(Vec::new());
        sink.write(b"};").unwrap();
        sink.write(b"\n").unwrap();
        assert_eq!(sink.into_inner(), b"};\n");
    }

    #[test]
    fn direct_sink_reports_io_errors() {
        let mut sink = DirectSink::new(FullDisk);
        assert!(matches!(sink.write(b"x"), Err(DibitsError::Write(_))));
    }
}
