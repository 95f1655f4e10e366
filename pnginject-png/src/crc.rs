//! CRC32 as used by PNG (IEEE polynomial, reflected `0xEDB88320`)

const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Lookup table, one entry per byte value
pub const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0; 256];
    let mut n: u32 = 0;
    while n < 256 {
        let mut c = n;
        let mut k: u32 = 0;
        while k < 8 {
            if c & 1 == 1 {
                c = POLYNOMIAL ^ c.wrapping_shr(1);
            } else {
                c = c.wrapping_shr(1);
            }
            k = k.wrapping_add(1);
        }
        table[n as usize] = c;
        n = n.wrapping_add(1);
    }
    table
}

/// Feeds `buf` into a running CRC register
///
/// The register is neither pre- nor post-inverted. Use [`crc32`] or [`Crc32`]
/// for the finished checksum.
pub fn update(crc: u32, buf: &[u8]) -> u32 {
    buf.iter().fold(crc, |c, byte| {
        CRC_TABLE[((c ^ u32::from(*byte)) & 0xFF) as usize] ^ c.wrapping_shr(8)
    })
}

/// CRC32 of the complete buffer
pub fn crc32(buf: &[u8]) -> u32 {
    update(u32::MAX, buf) ^ u32::MAX
}

/// Incremental CRC32
///
/// Allows checksumming a chunk's type and data without first copying them
/// into one buffer.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    register: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self { register: u32::MAX }
    }

    pub fn update(&mut self, buf: &[u8]) {
        self.register = update(self.register, buf);
    }

    pub fn finalize(self) -> u32 {
        self.register ^ u32::MAX
    }
}
