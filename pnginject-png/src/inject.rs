use std::io::Write;

use crate::*;

/// Type of the chunk injected by [`Injection::default()`]
pub const INJECTED_CHUNK_TYPE: ChunkType = ChunkType::coCK;
/// Data of the chunk injected by [`Injection::default()`]
pub const INJECTED_PAYLOAD: &[u8] = b"YEP";

/// Copies a chunk stream and adds a chunk after every `IDAT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    chunk: NewChunk,
}

impl Default for Injection {
    fn default() -> Self {
        let chunk = NewChunk::new(INJECTED_CHUNK_TYPE, INJECTED_PAYLOAD)
            .expect("Unreachable: The payload is only three bytes");
        Self { chunk }
    }
}

/// Counts reported after a successful [`Injection::transcode()`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InjectionSummary {
    /// Chunks copied from the input, including `IEND`
    pub chunks_copied: usize,
    /// Chunks added after `IDAT` chunks
    pub chunks_injected: usize,
    /// Total size of the output including magic bytes
    pub bytes_written: u64,
}

impl Injection {
    pub fn new(chunk: NewChunk) -> Self {
        Self { chunk }
    }

    /// Chunk that gets written after every `IDAT`
    pub fn chunk(&self) -> &NewChunk {
        &self.chunk
    }

    /// Writes `png` to `writer` with the injected chunks
    ///
    /// All chunks are copied byte for byte. CRCs are neither recomputed nor
    /// checked, so chunks with a wrong CRC are copied as they are. Nothing after the first `IEND` chunk is written.
    pub fn transcode<W: Write>(
        &self,
        png: &Png,
        writer: &mut ChunkWriter<W>,
    ) -> Result<InjectionSummary, Error> {
        let mut summary = InjectionSummary::default();

        writer.append(MAGIC_BYTES)?;

        for chunk in png.chunks() {
            let chunk_type = chunk.chunk_type();

            tracing::debug!(
                "Copying {chunk_type:?} chunk with {} bytes of data to position {}",
                chunk.length(),
                writer.position()
            );

            writer.append(chunk.complete_data())?;
            summary.chunks_copied = summary.chunks_copied.saturating_add(1);

            match chunk_type {
                ChunkType::IDAT => {
                    tracing::debug!(
                        "Injecting {:?} chunk at position {}",
                        self.chunk.chunk_type(),
                        writer.position()
                    );
                    writer.append_chunk(&self.chunk)?;
                    summary.chunks_injected = summary.chunks_injected.saturating_add(1);
                }
                ChunkType::IEND => break,
                _ => {}
            }
        }

        let trailing = png.trailing_data().len();
        if trailing > 0 {
            tracing::info!("Dropping {trailing} bytes after IEND chunk");
        }

        summary.bytes_written = writer.position();

        Ok(summary)
    }

    /// Returns the transcoded file as new buffer
    pub fn transcode_to_vec(&self, png: &Png) -> Result<Vec<u8>, Error> {
        let mut writer = ChunkWriter::new(Vec::new());
        self.transcode(png, &mut writer)?;
        Ok(writer.into_inner())
    }
}
