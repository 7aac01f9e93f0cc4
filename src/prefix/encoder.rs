// Huffman prefix encoder.
//
// frequencies -> merge tree -> code table -> packed bits. No code table or
// length header is emitted, so the output is not decodable on its own; the
// outcome only measures how small the packed bit stream is.

use log::debug;

use crate::outcome::{CompressionOutcome, Compressor};

use super::bits::BitWriter;
use super::code_table::CodeTable;
use super::frequency::FrequencyTable;
use super::tree::MergeTree;

/// Frequency-driven prefix (Huffman) encoder. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    /// Code table for `input`, or `None` for empty input.
    pub fn code_table(&self, input: &[u8]) -> Option<CodeTable> {
        let freq = FrequencyTable::from_bytes(input);
        MergeTree::build(&freq).map(|tree| CodeTable::from_tree(&tree))
    }

    /// Concatenate the code of every input byte and pack the bits.
    pub fn pack(table: &CodeTable, input: &[u8]) -> BitWriter {
        let mut writer = BitWriter::with_bit_capacity(input.len());
        for &b in input {
            if let Some(code) = table.get(b) {
                writer.push_code(code);
            }
        }
        writer
    }
}

impl Compressor for HuffmanEncoder {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn compress(&self, input: &[u8]) -> CompressionOutcome {
        if input.is_empty() {
            return CompressionOutcome::empty();
        }

        let freq = FrequencyTable::from_bytes(input);
        // The tree only lives long enough to derive the codes.
        let table = match MergeTree::build(&freq) {
            Some(tree) => CodeTable::from_tree(&tree),
            None => return CompressionOutcome::empty(),
        };

        let writer = Self::pack(&table, input);
        debug!(
            "huffman: {} bytes, {} symbols, {} code bits, {} padding bits",
            input.len(),
            table.len(),
            writer.bit_len(),
            writer.padding_bits()
        );

        CompressionOutcome::measured(input.len(), writer.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let out = HuffmanEncoder.compress(b"");
        assert_eq!(out, CompressionOutcome::empty());
        assert!(HuffmanEncoder.code_table(b"").is_none());
    }

    #[test]
    fn abracadabra() {
        let out = HuffmanEncoder.compress(b"abracadabra");
        assert_eq!(out.original_size, 11);
        assert_eq!(out.compressed_size, 3);
        assert_eq!(out.data, vec![0x6E, 0x8A, 0xDC]);
        assert!((out.ratio - 800.0 / 11.0).abs() < 1e-9);
        assert!(!out.simulated);
    }

    #[test]
    fn single_repeated_byte() {
        let out = HuffmanEncoder.compress(b"aaaa");
        assert_eq!(out.data, vec![0x00]);
        assert_eq!(out.compressed_size, 1);
        assert_eq!(out.ratio, 75.0);
    }

    #[test]
    fn single_byte_input() {
        let out = HuffmanEncoder.compress(b"z");
        assert_eq!(out.compressed_size, 1);
        assert_eq!(out.ratio, 0.0);
    }

    #[test]
    fn hello_world() {
        let out = HuffmanEncoder.compress(b"hello world");
        assert_eq!(out.data, vec![0x22, 0xB7, 0x3C, 0xAF]);
    }

    #[test]
    fn stages_compose_into_compress() {
        let input = b"abracadabra";
        let freq = FrequencyTable::from_bytes(input);
        let tree = MergeTree::build(&freq).unwrap();
        let table = HuffmanEncoder.code_table(input).unwrap();
        assert_eq!(table, CodeTable::from_tree(&tree));

        let writer = HuffmanEncoder::pack(&table, input);
        assert_eq!(writer.bit_len() as u64, table.encoded_bits(&freq));
        assert_eq!(writer.into_bytes(), HuffmanEncoder.compress(input).data);
    }

    #[test]
    fn packed_length_matches_code_bits() {
        let input = b"23.41,23.52,23.38,23.47,23.60,";
        let table = HuffmanEncoder.code_table(input).unwrap();
        let bits = table.encoded_bits(&FrequencyTable::from_bytes(input));
        let out = HuffmanEncoder.compress(input);
        assert_eq!(out.compressed_size as u64, bits.div_ceil(8));
    }

    #[test]
    fn incompressible_input_does_not_grow_past_original() {
        // 256 equiprobable symbols get 8-bit codes: no gain, no loss.
        let input: Vec<u8> = (0..=255).collect();
        let out = HuffmanEncoder.compress(&input);
        assert_eq!(out.compressed_size, 256);
        assert_eq!(out.ratio, 0.0);
    }
}
