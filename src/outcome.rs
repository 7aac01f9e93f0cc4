// Compression outcome shared by both encoders, plus the `Compressor` trait
// the request adapter and the CLI dispatch over.

// ---------------------------------------------------------------------------
// CompressionOutcome
// ---------------------------------------------------------------------------

/// Result of a single `compress` call.
///
/// Built fresh per call and returned by value; nothing in it is shared with
/// other calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompressionOutcome {
    /// Size of the input in bytes, as accounted by the encoder.
    pub original_size: usize,
    /// Reported compressed size in bytes (0 for empty input).
    pub compressed_size: usize,
    /// Percentage size reduction. Negative when the output grew.
    pub ratio: f64,
    /// Compressed payload (empty for empty input).
    pub data: Vec<u8>,
    /// Set when `compressed_size` was adjusted by the difference encoder's
    /// smooth-series simulation rather than measured from `data`.
    pub simulated: bool,
}

impl CompressionOutcome {
    /// The outcome of compressing nothing: size 0, ratio 0.0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Outcome whose compressed size is exactly `data.len()`.
    pub fn measured(original_size: usize, data: Vec<u8>) -> Self {
        let compressed_size = data.len();
        Self {
            original_size,
            compressed_size,
            ratio: ratio(original_size, compressed_size),
            data,
            simulated: false,
        }
    }
}

/// Percentage size reduction, `(original - compressed) / original * 100`.
///
/// Returns 0.0 for an empty original. Signed arithmetic is done in `f64`, so
/// growth yields a negative ratio instead of underflowing.
pub fn ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}

// ---------------------------------------------------------------------------
// Compressor trait
// ---------------------------------------------------------------------------

/// An encoder that maps a byte payload to a [`CompressionOutcome`].
///
/// Implementations must be total: every input, including the empty slice,
/// produces an outcome. They hold no per-call state, so a single instance can
/// be shared across threads.
///
/// ```
/// use sensorpack::outcome::{CompressionOutcome, Compressor};
///
/// struct Passthrough;
///
/// impl Compressor for Passthrough {
///     fn name(&self) -> &'static str { "passthrough" }
///     fn compress(&self, input: &[u8]) -> CompressionOutcome {
///         CompressionOutcome::measured(input.len(), input.to_vec())
///     }
/// }
///
/// assert_eq!(Passthrough.compress(b"abc").ratio, 0.0);
/// ```
pub trait Compressor: Send + Sync {
    /// Short stable identifier ("huffman", "delta").
    fn name(&self) -> &'static str;

    /// Compress `input`.
    fn compress(&self, input: &[u8]) -> CompressionOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_empty_original_is_zero() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(0, 5), 0.0);
    }

    #[test]
    fn ratio_can_be_negative() {
        assert_eq!(ratio(4, 8), -100.0);
        assert_eq!(ratio(10, 3), 70.0);
    }

    #[test]
    fn measured_uses_data_length() {
        let out = CompressionOutcome::measured(11, vec![1, 2, 3]);
        assert_eq!(out.compressed_size, 3);
        assert_eq!(out.ratio, ratio(11, 3));
        assert!(!out.simulated);
    }

    #[test]
    fn empty_outcome() {
        let out = CompressionOutcome::empty();
        assert_eq!(out.original_size, 0);
        assert_eq!(out.compressed_size, 0);
        assert_eq!(out.ratio, 0.0);
        assert!(out.data.is_empty());
    }
}
