// Batch compression of independent payloads.
//
// Each payload gets its own `compress` call. With the `parallel` feature the
// calls are spread over the rayon pool; encoders keep no shared state, so the
// results are identical to the sequential path.

use crate::outcome::{CompressionOutcome, Compressor};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compress every payload, preserving input order.
pub fn compress_batch<P>(compressor: &dyn Compressor, payloads: &[P]) -> Vec<CompressionOutcome>
where
    P: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = payloads.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = payloads.iter();

    iter.map(|p| compressor.compress(p.as_ref())).collect()
}

/// Sum of original and reported compressed sizes over a batch.
pub fn totals(outcomes: &[CompressionOutcome]) -> (usize, usize) {
    outcomes.iter().fold((0, 0), |(orig, comp), o| {
        (orig + o.original_size, comp + o.compressed_size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::DifferenceEncoder;
    use crate::prefix::HuffmanEncoder;

    #[test]
    fn batch_matches_individual_calls() {
        let payloads: Vec<Vec<u8>> = (0..64)
            .map(|i| format!("{i},{},{}", i + 1, i * 3).into_bytes())
            .collect();
        let enc = HuffmanEncoder;
        let batch = compress_batch(&enc, &payloads);
        assert_eq!(batch.len(), payloads.len());
        for (p, out) in payloads.iter().zip(&batch) {
            assert_eq!(*out, enc.compress(p));
        }
    }

    #[test]
    fn batch_handles_empty_members() {
        let payloads: [&[u8]; 3] = [b"", b"1,2,3", b""];
        let batch = compress_batch(&DifferenceEncoder::new(), &payloads);
        assert_eq!(batch[0], CompressionOutcome::empty());
        assert_eq!(batch[1].original_size, 12);
        assert_eq!(totals(&batch), (12, 12));
    }
}
