//! Sensorpack: Huffman and first-difference encoders for short sensor payloads.
//!
//! The crate provides:
//! - A frequency-driven prefix encoder (`prefix`)
//! - A first-difference encoder for comma-delimited numeric series (`delta`)
//! - A framework-agnostic request adapter for the compression service (`api`)
//! - Batch helpers, optionally parallel (`batch`, `parallel` feature)
//! - An optional CLI (`cli` feature)
//!
//! Both encoders are total, stateless and side-effect free: every input,
//! including an empty one, yields a [`CompressionOutcome`].
//!
//! # Quick Start
//!
//! ```
//! use sensorpack::{Compressor, DifferenceEncoder, HuffmanEncoder};
//!
//! let huff = HuffmanEncoder.compress(b"abracadabra");
//! assert_eq!(huff.compressed_size, 3);
//!
//! let delta = DifferenceEncoder::new();
//! assert_eq!(delta.parse("1.0,1.1,1.2,1.5"), vec![10, 11, 12, 15]);
//! assert_eq!(sensorpack::delta::encode(&[10, 11, 12, 15]), vec![10, 1, 1, 3]);
//! ```

pub mod api;
pub mod batch;
pub mod delta;
pub mod outcome;
pub mod prefix;

#[cfg(feature = "cli")]
pub mod cli;

pub use delta::{DeltaOptions, DifferenceEncoder};
pub use outcome::{CompressionOutcome, Compressor};
pub use prefix::HuffmanEncoder;
