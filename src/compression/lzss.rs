//! Configurable LZSS (Lempel-Ziv-Storer-Szymanski) codec.
//!
//! The token stream is a bit stream: each token is a flag bit followed by
//! either a raw byte (flag 1) or a dictionary offset plus a biased match
//! length (flag 0). Field widths, the minimum match length, the starting
//! dictionary cursor, and the dictionary-update policy are all settings,
//! because every archive format that embeds this codec picks its own.
//!
//! Encode and decode mutate a fresh sliding-window dictionary token by
//! token; the decoder reconstructs exactly the window state the encoder
//! had at each step, which is what makes the stream decodable at all.

use crate::bit_stream::{BitReader, BitWriter};
use crate::error::{LzssError, Result};

use super::{Compressor, Decompressor};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Immutable codec configuration.
///
/// Consistency between the fields is the caller's responsibility: the
/// codec itself never validates (see [`LzssSettings::validate`] for an
/// opt-in check) and feeding it inconsistent settings produces undefined
/// token streams rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzssSettings {
    /// Width in bits of a dictionary-offset field. The dictionary holds
    /// `1 << position_bits` bytes.
    pub position_bits: u32,
    /// Width in bits of a match-length field.
    pub length_bits: u32,
    /// Shortest match worth encoding as a back-reference. The length
    /// field stores `match_length - min_match_length`.
    pub min_match_length: usize,
    /// Starting write cursor into the dictionary buffer.
    pub initial_dictionary_pos: usize,
    /// Alternate dictionary-update policy: keep a second, forward-moving
    /// append cursor so matches may reference output produced earlier in
    /// the same pass.
    pub reuse_compressed: bool,
}

impl Default for LzssSettings {
    fn default() -> Self {
        Self {
            position_bits: 8,
            length_bits: 4,
            min_match_length: 2,
            initial_dictionary_pos: 0,
            reuse_compressed: false,
        }
    }
}

impl LzssSettings {
    /// Size in bytes of the sliding-window dictionary.
    pub fn dictionary_size(&self) -> usize {
        1 << self.position_bits
    }

    /// Longest match the encoder will search for.
    ///
    /// Deliberately `1 << (length_bits - 1)`, not the full field capacity;
    /// downstream formats depend on the token streams this conservative
    /// cap produces, so it is kept bit-exact.
    pub fn max_search_length(&self) -> usize {
        1 << (self.length_bits - 1)
    }

    /// Longest match the length field can physically encode. The decoder
    /// accepts up to this length regardless of the encoder's search cap.
    pub fn max_match_length(&self) -> usize {
        self.min_match_length + (1 << self.length_bits) - 1
    }

    /// Check the settings for internal consistency.
    ///
    /// Never called by [`LzssCompressor::encode`] or
    /// [`LzssCompressor::decode`]; callers who want the undefined region
    /// diagnosed up front can run it once at construction time.
    pub fn validate(&self) -> Result<()> {
        if self.position_bits == 0 || self.position_bits > 30 {
            return Err(LzssError::InvalidSettings(format!(
                "position_bits must be in 1..=30, got {}",
                self.position_bits
            )));
        }
        if self.length_bits == 0 || self.length_bits > 30 {
            return Err(LzssError::InvalidSettings(format!(
                "length_bits must be in 1..=30, got {}",
                self.length_bits
            )));
        }
        if self.min_match_length == 0 {
            return Err(LzssError::InvalidSettings(
                "min_match_length must be at least 1".to_string(),
            ));
        }
        if self.initial_dictionary_pos >= self.dictionary_size() {
            return Err(LzssError::InvalidSettings(format!(
                "initial_dictionary_pos {} outside dictionary of {} bytes",
                self.initial_dictionary_pos,
                self.dictionary_size()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Configurable LZSS compressor / decompressor.
///
/// Each `encode`/`decode` call allocates its own dictionary and bit
/// stream; no state survives between calls, so a single instance can be
/// shared across threads (one call per archive entry).
#[derive(Debug, Clone, Copy, Default)]
pub struct LzssCompressor {
    settings: LzssSettings,
}

impl LzssCompressor {
    /// Create a codec with the given settings.
    pub fn new(settings: LzssSettings) -> Self {
        Self { settings }
    }

    /// Get the codec settings.
    pub fn settings(&self) -> &LzssSettings {
        &self.settings
    }

    /// Compress `input` into a packed token stream.
    ///
    /// Single linear scan, greedy longest-first / first-fit search. The
    /// final byte of the returned buffer is zero-padded.
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        let s = &self.settings;
        let dictionary_size = s.dictionary_size();
        let wrap = dictionary_size - 1;
        let mut dictionary = vec![0u8; dictionary_size];
        let mut dictionary_pos = s.initial_dictionary_pos;

        let mut stream = BitWriter::new();
        let mut input_pos = 0;

        while input_pos < input.len() {
            let longest = s.max_search_length().min(input.len() - input_pos);
            let mut best_match: Option<(usize, usize)> = None;

            // Longest candidate first; the first (lowest-offset) occurrence
            // of a candidate wins. Greedy, not optimal, and frozen that way.
            for match_length in (s.min_match_length..=longest).rev() {
                let needle = &input[input_pos..input_pos + match_length];
                let pos = match find_in_dictionary(&dictionary, needle) {
                    Some(pos) => pos,
                    None => continue,
                };

                // Under reuse_compressed a match may not run into dictionary
                // bytes the append cursor has not committed yet.
                if s.reuse_compressed {
                    let end_pos = (pos + match_length) & wrap;
                    if end_pos >= dictionary_pos {
                        continue;
                    }
                }

                best_match = Some((pos, match_length));
                break;
            }

            match best_match {
                None => {
                    let byte = input[input_pos];
                    stream.write(1, 1);
                    stream.write(byte as u32, 8);
                    dictionary[dictionary_pos] = byte;
                    dictionary_pos = (dictionary_pos + 1) & wrap;
                    input_pos += 1;
                }
                Some((mut pos, match_length)) => {
                    stream.write(0, 1);
                    stream.write(pos as u32, s.position_bits);
                    stream.write((match_length - s.min_match_length) as u32, s.length_bits);

                    for _ in 0..match_length {
                        let byte = input[input_pos];
                        // Re-store the matched bytes at the matched offset so
                        // the window tracks what a byte-by-byte decoder sees.
                        dictionary[pos] = byte;
                        pos = (pos + 1) & wrap;

                        if s.reuse_compressed {
                            dictionary[dictionary_pos] = byte;
                            dictionary_pos = (dictionary_pos + 1) & wrap;
                        }

                        input_pos += 1;
                    }
                }
            }
        }

        stream.into_bytes()
    }

    /// Decompress a packed token stream.
    ///
    /// Bit-stream exhaustion anywhere inside a token is the normal end
    /// condition: the output reconstructed so far is returned as-is.
    /// Malformed input therefore degrades to truncated output, never to a
    /// panic or an error.
    ///
    /// The stream carries no length header, so the zero padding of the
    /// final byte is indistinguishable from token bits. With widths where
    /// `1 + position_bits + length_bits <= 7` a whole match token can fit
    /// inside the padding and decode as one extra trailing token; wider
    /// settings (including the defaults) always run out of bits mid-token
    /// instead.
    pub fn decode(&self, input: &[u8]) -> Vec<u8> {
        let s = &self.settings;
        let dictionary_size = s.dictionary_size();
        let wrap = dictionary_size - 1;
        let mut dictionary = vec![0u8; dictionary_size];
        let mut dictionary_pos = s.initial_dictionary_pos;

        let mut stream = BitReader::new(input);
        let mut output = Vec::new();

        while !stream.at_eof() {
            let flag = match stream.read(1) {
                Some(flag) => flag,
                None => break,
            };

            if flag & 1 == 1 {
                let byte = match stream.read(8) {
                    Some(byte) => byte as u8,
                    None => break,
                };
                output.push(byte);
                dictionary[dictionary_pos] = byte;
                dictionary_pos = (dictionary_pos + 1) & wrap;
            } else {
                let mut pos = match stream.read(s.position_bits) {
                    Some(pos) => pos as usize,
                    None => break,
                };
                let length = match stream.read(s.length_bits) {
                    Some(raw_length) => raw_length as usize + s.min_match_length,
                    None => break,
                };

                for _ in 0..length {
                    let byte = dictionary[pos];
                    pos = (pos + 1) & wrap;

                    if s.reuse_compressed {
                        dictionary[dictionary_pos] = byte;
                        dictionary_pos = (dictionary_pos + 1) & wrap;
                    }

                    output.push(byte);
                }
            }
        }

        output
    }
}

impl Compressor for LzssCompressor {
    fn compress(&self, source: &[u8]) -> Vec<u8> {
        self.encode(source)
    }
}

impl Decompressor for LzssCompressor {
    fn decompress(&self, source: &[u8]) -> Vec<u8> {
        self.decode(source)
    }
}

/// Find the first (lowest-offset) occurrence of `needle` in the flat,
/// non-wrapping dictionary buffer.
fn find_in_dictionary(dictionary: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > dictionary.len() {
        return None;
    }
    dictionary
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = LzssSettings::default();
        assert_eq!(settings.dictionary_size(), 256);
        assert_eq!(settings.max_search_length(), 8);
        assert_eq!(settings.max_match_length(), 17);
        settings.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_widths() {
        let mut settings = LzssSettings::default();
        settings.position_bits = 0;
        assert!(settings.validate().is_err());

        let mut settings = LzssSettings::default();
        settings.length_bits = 0;
        assert!(settings.validate().is_err());

        let mut settings = LzssSettings::default();
        settings.min_match_length = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_cursor_outside_dictionary() {
        let mut settings = LzssSettings::default();
        settings.initial_dictionary_pos = 256;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_input_roundtrip() {
        let codec = LzssCompressor::new(LzssSettings::default());
        let encoded = codec.encode(&[]);
        assert!(encoded.is_empty());
        assert!(codec.decode(&encoded).is_empty());
    }

    #[test]
    fn test_single_byte() {
        let codec = LzssCompressor::new(LzssSettings::default());
        let encoded = codec.encode(b"A");
        // flag 1 + 8 data bits = 9 bits = 2 bytes
        assert_eq!(encoded.len(), 2);
        assert_eq!(codec.decode(&encoded), b"A");
    }

    #[test]
    fn test_repetition_roundtrip() {
        let codec = LzssCompressor::new(LzssSettings::default());
        let input = b"abcdabcdabcdabcd";
        let encoded = codec.encode(input);
        assert!(encoded.len() < input.len());
        assert_eq!(codec.decode(&encoded), input);
    }

    #[test]
    fn test_zero_run_matches_initial_dictionary() {
        // The dictionary starts zeroed, so a run of zero bytes is matched
        // immediately: flag 0 + 8 offset bits + 4 length bits per token.
        let codec = LzssCompressor::new(LzssSettings::default());
        let input = [0u8; 8];
        let encoded = codec.encode(&input);
        assert_eq!(encoded.len(), 2); // 13 bits
        assert_eq!(codec.decode(&encoded), input);
    }

    #[test]
    fn test_match_token_layout() {
        // "ab" then "ab" again: literal, literal, then one match token
        // referencing offset 0 with biased length 0.
        let codec = LzssCompressor::new(LzssSettings::default());
        let encoded = codec.encode(b"abab");

        let mut reader = crate::bit_stream::BitReader::new(&encoded);
        assert_eq!(reader.read(1), Some(1));
        assert_eq!(reader.read(8), Some(b'a' as u32));
        assert_eq!(reader.read(1), Some(1));
        assert_eq!(reader.read(8), Some(b'b' as u32));
        assert_eq!(reader.read(1), Some(0));
        assert_eq!(reader.read(8), Some(0)); // offset 0
        assert_eq!(reader.read(4), Some(0)); // length 2 - min_match_length

        assert_eq!(codec.decode(&encoded), b"abab");
    }

    #[test]
    fn test_decoder_accepts_full_length_field() {
        // Hand-pack a maximal match token the greedy search would never
        // emit: a 17-byte (min 2 + 15) run of zeros out of the pristine
        // dictionary.
        let settings = LzssSettings::default();
        let mut writer = crate::bit_stream::BitWriter::new();
        writer.write(0, 1);
        writer.write(0, settings.position_bits);
        writer.write(15, settings.length_bits);

        let codec = LzssCompressor::new(settings);
        assert_eq!(codec.decode(&writer.into_bytes()), vec![0u8; 17]);
    }

    #[test]
    fn test_truncated_stream_degrades_gracefully() {
        let codec = LzssCompressor::new(LzssSettings::default());
        let encoded = codec.encode(b"hello hello hello");
        for cut in 0..encoded.len() {
            let partial = codec.decode(&encoded[..cut]);
            assert!(partial.len() <= 17);
            assert_eq!(&partial[..], &b"hello hello hello"[..partial.len()]);
        }
    }

    #[test]
    fn test_reuse_compressed_roundtrip() {
        let settings = LzssSettings {
            reuse_compressed: true,
            initial_dictionary_pos: 239,
            ..LzssSettings::default()
        };
        let codec = LzssCompressor::new(settings);
        let input = b"the quick brown fox jumps over the lazy dog the quick brown fox";
        assert_eq!(codec.decode(&codec.encode(input)), input);
    }

    #[test]
    fn test_deterministic() {
        let codec = LzssCompressor::new(LzssSettings::default());
        let input: Vec<u8> = (0..200u16).map(|i| (i * 7 % 251) as u8).collect();
        assert_eq!(codec.encode(&input), codec.encode(&input));
    }
}
