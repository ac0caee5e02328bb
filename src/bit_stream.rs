//! Bit-level stream reader and writer.
//!
//! Both sides pack bits most-significant-bit-first within each byte, which
//! is the order the LZSS token stream is defined in. The writer grows a
//! byte buffer; the reader walks a borrowed one.

/// Bit-level writer backed by a growable byte buffer.
///
/// The final byte is zero-padded on the low end when the bit cursor does
/// not land on a byte boundary.
#[derive(Debug, Default)]
pub struct BitWriter {
    buffer: Vec<u8>,
    bit_shift: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            bit_shift: 0,
        }
    }

    /// Total number of bits written so far.
    pub fn position_in_bits(&self) -> usize {
        if self.bit_shift == 0 {
            self.buffer.len() * 8
        } else {
            (self.buffer.len() - 1) * 8 + self.bit_shift as usize
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if self.bit_shift == 0 {
            self.buffer.push(0);
        }
        if bit {
            let last = self.buffer.len() - 1;
            self.buffer[last] |= 0x80 >> self.bit_shift;
        }
        self.bit_shift = (self.bit_shift + 1) & 7;
    }

    /// Append the low `bits` bits of `value`, most significant bit first.
    ///
    /// `value` is truncated to `bits` bits; supplying a value that does not
    /// fit is the caller's mistake, not a signaled error. `bits` must be at
    /// most 32.
    pub fn write(&mut self, value: u32, bits: u32) {
        for i in (0..bits).rev() {
            self.write_bit((value >> i) & 1 != 0);
        }
    }

    /// Get the packed bytes written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the packed byte buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Bit-level reader over a borrowed byte buffer.
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Number of unread bits left in the buffer.
    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.bit_pos
    }

    /// True once every bit of the backing buffer has been consumed.
    pub fn at_eof(&self) -> bool {
        self.bit_pos >= self.data.len() * 8
    }

    /// Consume the next `bits` bits, most significant bit first.
    ///
    /// Returns `None` when fewer than `bits` bits remain. That is the
    /// stream's normal termination signal, not a failure; no partial field
    /// is consumed.
    pub fn read(&mut self, bits: u32) -> Option<u32> {
        if self.remaining_bits() < bits as usize {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..bits {
            let byte = self.data[self.bit_pos >> 3];
            let bit = (byte >> (7 - (self.bit_pos & 7))) & 1;
            value = (value << 1) | bit as u32;
            self.bit_pos += 1;
        }
        Some(value)
    }
}
