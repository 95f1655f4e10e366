use std::io::{Cursor, Read};
use std::slice::SliceIndex;

use pnginject_common::error::ErrorWithData;
use pnginject_common::utils::U32Ext;

use crate::*;

pub const MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

/// Representation of a PNG image's chunk structure
#[derive(Debug, Clone)]
pub struct Png {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// Chunks in the order in which they appear in the data, ending with the
    /// first `IEND`
    pub(crate) chunks: Vec<RawChunk>,
}

impl Png {
    /// Returns PNG image representation
    ///
    /// * `data`: PNG image data starting with magic bytes
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match Self::find_chunks(&data) {
            Ok(chunks) => Ok(Self { chunks, data }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Checks if passed data have PNG magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Get part of the raw data
    pub fn get(&self, index: impl SliceIndex<[u8], Output = [u8]>) -> Option<&[u8]> {
        self.data.get(index)
    }

    /// Returns all chunks
    pub fn chunks(&self) -> Vec<Chunk> {
        self.chunks.iter().map(|x| x.chunk(self)).collect()
    }

    pub fn raw_chunks(&self) -> &[RawChunk] {
        &self.chunks
    }

    /// Returns all chunks of the given type
    pub fn chunks_of_type(&self, chunk_type: ChunkType) -> impl Iterator<Item = Chunk<'_>> {
        self.chunks
            .iter()
            .filter(move |x| x.chunk_type == chunk_type)
            .map(|x| x.chunk(self))
    }

    /// Bytes following the `IEND` chunk
    ///
    /// These are not part of the chunk stream and are never copied.
    pub fn trailing_data(&self) -> &[u8] {
        let end = self
            .chunks
            .last()
            .map_or(MAGIC_BYTES.len(), |x| x.chunk_complete.end);

        self.data.get(end..).unwrap_or_default()
    }

    /// List all chunks in the data
    ///
    /// Stops after the first `IEND` chunk. CRCs are recorded but not checked.
    fn find_chunks(data: &[u8]) -> Result<Vec<RawChunk>, Error> {
        if !Self::is_filetype(data) {
            let found = data.iter().take(MAGIC_BYTES.len()).copied().collect();
            return Err(Error::InvalidMagicBytes(found));
        }

        let mut cur = Cursor::new(data);
        cur.set_position(MAGIC_BYTES.len() as u64);

        let mut chunks = Vec::new();
        loop {
            let chunk_start = Self::position(&cur)?;

            // First 4 bytes are length
            let length_data = &mut [0; 4];
            cur.read_exact(length_data)
                .map_err(|_| Error::UnexpectedEof)?;
            let length = u32::from_be_bytes(*length_data);

            // Next 4 bytes are chunk type
            let chunk_type_data = &mut [0; 4];
            cur.read_exact(chunk_type_data)
                .map_err(|_| Error::UnexpectedEof)?;
            let chunk_type = ChunkType::from(*chunk_type_data);

            // Next are the data
            let data_start = Self::position(&cur)?;
            let data_end = data_start
                .checked_add(length.usize().map_err(|_| Error::PositionTooLarge)?)
                .ok_or(Error::PositionTooLarge)?;
            let chunk_data = data_start..data_end;

            // Last 4 bytes after the data are a CRC
            cur.set_position(
                data_end
                    .try_into()
                    .map_err(|_| Error::PositionTooLarge)?,
            );
            let crc = &mut [0; 4];
            cur.read_exact(crc).map_err(|_| Error::UnexpectedEof)?;

            let chunk_end = Self::position(&cur)?;

            tracing::debug!("Found {chunk_type:?} chunk with {length} bytes of data at {chunk_start}");

            chunks.push(RawChunk {
                chunk_type,
                length,
                chunk_data,
                chunk_complete: chunk_start..chunk_end,
                crc: *crc,
            });

            if chunk_type == ChunkType::IEND {
                break;
            }
        }

        Ok(chunks)
    }

    fn position(cur: &Cursor<&[u8]>) -> Result<usize, Error> {
        cur.position()
            .try_into()
            .map_err(|_| Error::PositionTooLarge)
    }
}
