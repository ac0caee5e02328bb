//! # lzss-rs
//!
//! A pure Rust library for configurable LZSS (Lempel-Ziv-Storer-Szymanski)
//! compression and decompression.
//!
//! LZSS is the workhorse codec of many archive formats, each of which
//! tunes it slightly differently. This library exposes every knob those
//! formats disagree on — field widths, the minimum match length, the
//! initial dictionary cursor, and the dictionary-update policy — as a
//! single immutable settings struct, so one engine can speak all of their
//! token streams.
//!
//! ## Quick Start
//!
//! ```rust
//! use lzss_rs::{LzssCompressor, LzssSettings};
//!
//! let codec = LzssCompressor::new(LzssSettings::default());
//! let compressed = codec.encode(b"abcabcabcabc");
//! let restored = codec.decode(&compressed);
//! assert_eq!(restored, b"abcabcabcabc");
//! ```
//!
//! ## Architecture
//!
//! - `bit_stream` — MSB-first bit packing over byte buffers, the wire
//!   representation of the token stream
//! - `compression` — the `Compressor`/`Decompressor` seam, the LZSS
//!   engine behind it, and parallel per-entry batch helpers
//! - `memory_file` — the named-buffer unit archive layers pass around
//!
//! ## Behavior notes
//!
//! Encoding is a greedy longest-first, first-fit search; the resulting
//! token streams are deterministic and bit-exact across releases because
//! downstream formats depend on them. Decoding treats bit-stream
//! exhaustion as a normal end condition and returns whatever it has
//! reconstructed, so truncated input degrades to truncated output rather
//! than an error.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod bit_stream;
pub mod compression;
pub mod error;
pub mod memory_file;

// Re-export commonly used types
pub use bit_stream::{BitReader, BitWriter};
pub use compression::{
    compress_files, decompress_files, Compressor, Decompressor, LzssCompressor, LzssSettings,
};
pub use error::{LzssError, Result};
pub use memory_file::MemoryFile;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_codec_roundtrip() {
        let codec = LzssCompressor::new(LzssSettings::default());
        let input = b"a minimal smoke test, repeated: a minimal smoke test";
        assert_eq!(codec.decode(&codec.encode(input)), input);
    }
}
