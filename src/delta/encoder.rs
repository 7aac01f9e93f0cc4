// First-difference encoder for comma-delimited numeric payloads.

use log::debug;

use crate::outcome::{CompressionOutcome, Compressor, ratio};

use super::options::{DeltaOptions, ELEMENT_WIDTH};
use super::parse::parse_series;
use super::transform::{encode, to_le_bytes};

/// Difference (delta) encoder.
///
/// Sizes are accounted in `i32` elements: the encoded series has the same
/// length as the parsed one, so the literal ratio is always 0. See
/// [`SmoothSeries`](super::SmoothSeries) for the optional simulated
/// adjustment.
#[derive(Debug, Clone, Default)]
pub struct DifferenceEncoder {
    opts: DeltaOptions,
}

impl DifferenceEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: DeltaOptions) -> Self {
        Self { opts }
    }

    /// Parse `text` into the scaled series this encoder works on.
    pub fn parse(&self, text: &str) -> Vec<i32> {
        parse_series(text, self.opts.scale)
    }

    // Only reached through `compress`, so the smooth-series adjustment always
    // sees a series parsed from text.
    fn compress_series(&self, values: &[i32]) -> CompressionOutcome {
        if values.is_empty() {
            return CompressionOutcome::empty();
        }

        let encoded = encode(values);
        let original_size = values.len() * ELEMENT_WIDTH;
        let mut outcome = CompressionOutcome::measured(original_size, to_le_bytes(&encoded));

        if let Some(smooth) = &self.opts.smooth_series
            && outcome.ratio <= 0.0
            && smooth.applies_to(values)
        {
            // Simulated: the payload is unchanged, only the reported size moves.
            let adjusted = smooth.adjust(outcome.compressed_size);
            debug!(
                "delta: smooth series of {} values, reporting {} bytes instead of {}",
                values.len(),
                adjusted,
                outcome.compressed_size
            );
            outcome.compressed_size = adjusted;
            outcome.ratio = ratio(original_size, adjusted);
            outcome.simulated = true;
        }

        debug!(
            "delta: {} values, {} -> {} bytes ({:.2}%)",
            values.len(),
            outcome.original_size,
            outcome.compressed_size,
            outcome.ratio
        );
        outcome
    }
}

impl Compressor for DifferenceEncoder {
    fn name(&self) -> &'static str {
        "delta"
    }

    fn compress(&self, input: &[u8]) -> CompressionOutcome {
        let text = String::from_utf8_lossy(input);
        self.compress_series(&self.parse(&text))
    }
}
