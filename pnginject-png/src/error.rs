#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes(Vec<u8>),
    #[error("Position too large")]
    PositionTooLarge,
    #[error("Chunk data of {0} bytes does not fit into a chunk")]
    ChunkTooLarge(usize),
    #[error("Short write: no bytes accepted at output position {position}")]
    ShortWrite { position: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
