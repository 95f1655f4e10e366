#![doc = include_str!("../README.md")]

mod chunk;
mod chunk_type;
pub mod crc;
mod error;
mod inject;
mod png;
mod writer;

pub use chunk::*;
pub use chunk_type::*;
pub use error::*;
pub use inject::*;
pub use png::*;
pub use writer::*;
