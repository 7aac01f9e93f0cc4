// Prefix code table derived from a merge tree.
//
// Depth-first walk: descending left appends 0, descending right appends 1.
// Only leaves receive entries. A tree has at most 256 leaves, so the
// recursion depth is bounded by 256.

use std::fmt;

use super::frequency::FrequencyTable;
use super::tree::{MergeNode, MergeTree};

// ---------------------------------------------------------------------------
// Code
// ---------------------------------------------------------------------------

/// A variable-length bit string, first bit first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn extended(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CodeTable
// ---------------------------------------------------------------------------

/// Byte value -> prefix code.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    pub fn from_tree(tree: &MergeTree) -> Self {
        let mut codes = vec![None; 256];
        assign(tree.root(), Code::default(), &mut codes);
        Self { codes }
    }

    #[inline]
    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes[byte as usize].as_ref()
    }

    /// Entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(b, c)| c.as_ref().map(|c| (b as u8, c)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// No code is a prefix of another code.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Total bits needed to encode an input with these frequencies.
    pub fn encoded_bits(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .map(|(b, count)| count * self.get(b).map_or(0, |c| c.len() as u64))
            .sum()
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(b, c)| (b, c.to_string())))
            .finish()
    }
}

fn assign(node: &MergeNode, prefix: Code, codes: &mut [Option<Code>]) {
    match node {
        MergeNode::Leaf { byte, .. } => {
            log::trace!("code {byte:#04x} -> {prefix}");
            codes[*byte as usize] = Some(prefix);
        }
        MergeNode::Internal { left, right, .. } => {
            assign(left, prefix.extended(false), codes);
            if let Some(right) = right {
                assign(right, prefix.extended(true), codes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(data: &[u8]) -> CodeTable {
        let freq = FrequencyTable::from_bytes(data);
        CodeTable::from_tree(&MergeTree::build(&freq).unwrap())
    }

    #[test]
    fn abracadabra_codes() {
        let t = table(b"abracadabra");
        assert_eq!(t.len(), 5);
        assert_eq!(t.get(b'a').unwrap().to_string(), "0");
        assert_eq!(t.get(b'c').unwrap().to_string(), "100");
        assert_eq!(t.get(b'd').unwrap().to_string(), "101");
        assert_eq!(t.get(b'b').unwrap().to_string(), "110");
        assert_eq!(t.get(b'r').unwrap().to_string(), "111");
        assert!(t.get(b'x').is_none());
        assert!(t.is_prefix_free());
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let t = table(b"aaaa");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(b'a').unwrap().to_string(), "0");
    }

    #[test]
    fn encoded_bits_weighted_by_frequency() {
        let data = b"abracadabra";
        let t = table(data);
        assert_eq!(t.encoded_bits(&FrequencyTable::from_bytes(data)), 23);
    }

    #[test]
    fn full_alphabet_is_prefix_free() {
        let data: Vec<u8> = (0..=255u8).flat_map(|b| vec![b; (b as usize * 31) % 13 + 1]).collect();
        let t = table(&data);
        assert_eq!(t.len(), 256);
        assert!(t.is_prefix_free());
        assert!(t.iter().all(|(_, c)| !c.is_empty()));
    }

    #[test]
    fn prefix_detection() {
        let t = table(b"ab");
        let a = t.get(b'a').unwrap();
        let b = t.get(b'b').unwrap();
        assert!(a.is_prefix_of(a));
        assert!(!a.is_prefix_of(b));
    }
}
