use std::ops::Range;

use pnginject_common::utils::UsizeExt;

use crate::crc::Crc32;
use crate::*;

/// Chunk as it appears in a parsed [`Png`]
#[derive(Debug)]
pub struct Chunk<'a> {
    pub(crate) chunk_type: ChunkType,
    pub(crate) length: u32,
    pub(crate) chunk_data_location: Range<usize>,
    pub(crate) chunk_complete: Range<usize>,
    pub(crate) crc: [u8; 4],
    pub(crate) png: &'a Png,
}

impl<'a> Chunk<'a> {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    /// Value of the length field, the number of data bytes
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn chunk_data(&self) -> &'a [u8] {
        self.png
            .data
            .get(self.chunk_data_location.clone())
            .expect("Unreachable: The chunk must be part of the data")
    }

    /// Length, type, data, and CRC exactly as stored in the file
    pub fn complete_data(&self) -> &'a [u8] {
        self.png
            .data
            .get(self.chunk_complete.clone())
            .expect("Unreachable: The chunk must be part of the data")
    }

    /// CRC bytes as stored in the file
    pub fn crc(&self) -> &[u8; 4] {
        &self.crc
    }

    pub fn crc_value(&self) -> u32 {
        u32::from_be_bytes(self.crc)
    }

    /// CRC over type and data, computed from the actual content
    pub fn computed_crc(&self) -> u32 {
        let mut crc = Crc32::new();
        crc.update(&self.chunk_type.bytes());
        crc.update(self.chunk_data());
        crc.finalize()
    }

    pub fn has_valid_crc(&self) -> bool {
        self.computed_crc() == self.crc_value()
    }
}

/// Location of a chunk inside the data of a [`Png`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    pub(crate) chunk_type: ChunkType,
    pub(crate) length: u32,
    pub(crate) chunk_data: Range<usize>,
    pub(crate) chunk_complete: Range<usize>,
    pub(crate) crc: [u8; 4],
}

impl RawChunk {
    pub(crate) fn chunk<'a>(&self, png: &'a Png) -> Chunk<'a> {
        Chunk {
            chunk_type: self.chunk_type,
            length: self.length,
            chunk_data_location: self.chunk_data.clone(),
            chunk_complete: self.chunk_complete.clone(),
            crc: self.crc,
            png,
        }
    }

    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn data_location(&self) -> Range<usize> {
        self.chunk_data.clone()
    }

    pub fn complete_data(&self) -> Range<usize> {
        self.chunk_complete.clone()
    }

    pub fn total_len(&self) -> usize {
        self.chunk_complete.len()
    }
}

/// Chunk that is not part of a parsed file and still has to be written
///
/// The CRC is computed whenever the chunk is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChunk {
    chunk_type: ChunkType,
    length: u32,
    data: Vec<u8>,
}

impl NewChunk {
    pub fn new(chunk_type: ChunkType, data: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let data = data.into();
        let length = data
            .len()
            .u32()
            .map_err(|_| Error::ChunkTooLarge(data.len()))?;

        Ok(Self {
            chunk_type,
            length,
            data,
        })
    }

    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// CRC over chunk type and data
    pub fn crc(&self) -> u32 {
        let mut crc = Crc32::new();
        crc.update(&self.chunk_type.bytes());
        crc.update(&self.data);
        crc.finalize()
    }

    /// Serialized chunk with big endian length and CRC
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.data.len().saturating_add(12));
        buf.extend_from_slice(&self.length.to_be_bytes());
        buf.extend_from_slice(&self.chunk_type.bytes());
        buf.extend_from_slice(&self.data);
        buf.extend_from_slice(&self.crc().to_be_bytes());
        buf
    }
}
