// MSB-first bit packing.
//
// Bits fill each byte from bit 7 down to bit 0. The last byte is left
// zero-padded on the right when the bit count is not a multiple of 8.

use super::code_table::Code;

#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `bits` bits.
    pub fn with_bit_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit && let Some(last) = self.bytes.last_mut() {
            *last |= 0x80 >> offset;
        }
        self.bit_len += 1;
    }

    pub fn push_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.push_bit(bit);
        }
    }

    /// Number of meaningful bits written.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Zero bits appended to complete the final byte (0-7).
    pub fn padding_bits(&self) -> usize {
        self.bytes.len() * 8 - self.bit_len
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
