use std::fmt::Debug;

pnginject_common::utils::tag_enum!(
    #[derive(Copy, Clone, PartialEq, Eq, Hash)]
    #[allow(non_camel_case_types)]
    /// Type of a chunk
    ///
    /// Holds the four ASCII bytes that follow the chunk length.
    pub enum ChunkType {
        /// Header
        IHDR = b"IHDR",
        /// Palette
        PLTE = b"PLTE",
        /// Image Data
        IDAT = b"IDAT",
        /// End of file
        IEND = b"IEND",
        /// Textual information
        tEXt = b"tEXt",
        /// Chunk written after every `IDAT` by the default [`Injection`](crate::Injection)
        coCK = b"coCK",
    }
);

impl Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes();
        let name = std::str::from_utf8(&bytes)
            .ok()
            .filter(|_| bytes.is_ascii())
            .map(String::from)
            .unwrap_or_else(|| format!("{bytes:x?}"));

        match self {
            Self::Unknown(_) => write!(f, "Unknown({name:?})"),
            _ => f.write_str(&name),
        }
    }
}

impl ChunkType {
    /// Returns the byte string of the chunk type
    pub fn bytes(self) -> [u8; 4] {
        self.into()
    }
}
