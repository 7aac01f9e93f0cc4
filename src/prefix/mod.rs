// Frequency-driven prefix (Huffman) coding.
//
// - `frequency` : per-byte occurrence counts
// - `tree`      : minimum-weight binary merge tree
// - `code_table`: prefix codes from a depth-first walk of the tree
// - `bits`      : MSB-first bit packing with zero padding
// - `encoder`   : HuffmanEncoder: the `Compressor` tying the stages together

pub mod bits;
pub mod code_table;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use bits::BitWriter;
pub use code_table::{Code, CodeTable};
pub use encoder::HuffmanEncoder;
pub use frequency::FrequencyTable;
pub use tree::{MergeNode, MergeTree};
