use std::io::{ErrorKind, Write};

use crate::*;

/// Sequential output for a chunk stream
///
/// Every write is appended at the current end. The number of bytes written
/// so far is tracked as the position.
#[derive(Debug)]
pub struct ChunkWriter<W: Write> {
    inner: W,
    position: u64,
}

impl<W: Write> ChunkWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes appended so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Appends all of `buf`
    ///
    /// A writer that stops accepting bytes yields [`Error::ShortWrite`] with
    /// the position at which this append started.
    pub fn append(&mut self, buf: &[u8]) -> Result<(), Error> {
        self.inner.write_all(buf).map_err(|err| match err.kind() {
            ErrorKind::WriteZero => Error::ShortWrite {
                position: self.position,
            },
            _ => Error::Io(err),
        })?;

        let written = u64::try_from(buf.len()).map_err(|_| Error::PositionTooLarge)?;
        self.position = self
            .position
            .checked_add(written)
            .ok_or(Error::PositionTooLarge)?;

        Ok(())
    }

    /// Appends a complete chunk with freshly computed CRC
    pub fn append_chunk(&mut self, chunk: &NewChunk) -> Result<(), Error> {
        self.append(&chunk.length().to_be_bytes())?;
        self.append(&chunk.chunk_type().bytes())?;
        self.append(chunk.data())?;
        self.append(&chunk.crc().to_be_bytes())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }
}
