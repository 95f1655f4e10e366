#![allow(dead_code)]

pub use pnginject_png::*;

/// Complete chunk with length, type, data, and valid CRC
pub fn chunk(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    chunk_with_crc(chunk_type, data, hasher.finalize())
}

pub fn chunk_with_crc(chunk_type: &[u8; 4], data: &[u8], crc: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&u32::try_from(data.len()).unwrap().to_be_bytes());
    buf.extend_from_slice(chunk_type);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&crc.to_be_bytes());
    buf
}

/// Magic bytes followed by the passed chunks
pub fn png_data(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut data = MAGIC_BYTES.to_vec();
    for chunk in chunks {
        data.extend_from_slice(chunk);
    }
    data
}

pub fn ihdr() -> Vec<u8> {
    let mut data = Vec::new();
    // Width and height
    data.extend_from_slice(&1_u32.to_be_bytes());
    data.extend_from_slice(&1_u32.to_be_bytes());
    // Bit depth, color type, compression, filter, interlace
    data.extend_from_slice(&[8, 0, 0, 0, 0]);
    chunk(b"IHDR", &data)
}

pub fn iend() -> Vec<u8> {
    chunk(b"IEND", &[])
}

/// The chunk the default injection writes
pub fn cock() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&[0, 0, 0, 3]);
    buf.extend_from_slice(b"coCK");
    buf.extend_from_slice(b"YEP");
    buf.extend_from_slice(&[0x08, 0xDE, 0x36, 0xA7]);
    buf
}

pub fn parse(data: Vec<u8>) -> Png {
    Png::new(data).unwrap()
}

pub fn chunk_types(png: &Png) -> Vec<ChunkType> {
    png.chunks().iter().map(|x| x.chunk_type()).collect()
}
