//! LZSS compression and decompression.
//!
//! The codec is configurable through [`LzssSettings`]; archive formats pick
//! field widths and a dictionary-update policy to match their on-disk
//! token streams.

pub mod lzss;

pub use lzss::{LzssCompressor, LzssSettings};

use crate::memory_file::MemoryFile;

use rayon::prelude::*;

/// Trait for compressing data.
///
/// A compressor is a pure computation over an in-memory buffer; it never
/// fails, it only produces output.
pub trait Compressor {
    /// Compress a source buffer into a packed token stream.
    fn compress(&self, source: &[u8]) -> Vec<u8>;
}

/// Trait for decompressing data.
///
/// Malformed or truncated input degrades gracefully: the decompressor
/// returns whatever output it reconstructed before the stream ran out.
pub trait Decompressor {
    /// Decompress a packed token stream back into plain bytes.
    fn decompress(&self, source: &[u8]) -> Vec<u8>;
}

/// Compress a batch of in-memory files, one independent codec pass per
/// entry, preserving names and order.
pub fn compress_files<C>(codec: &C, files: &[MemoryFile]) -> Vec<MemoryFile>
where
    C: Compressor + Sync,
{
    files
        .par_iter()
        .map(|file| MemoryFile::new(file.name.clone(), codec.compress(&file.data)))
        .collect()
}

/// Decompress a batch of in-memory files, preserving names and order.
pub fn decompress_files<D>(codec: &D, files: &[MemoryFile]) -> Vec<MemoryFile>
where
    D: Decompressor + Sync,
{
    files
        .par_iter()
        .map(|file| MemoryFile::new(file.name.clone(), codec.decompress(&file.data)))
        .collect()
}
