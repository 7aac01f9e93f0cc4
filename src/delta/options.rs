// Difference encoder configuration.

/// Default scale applied to parsed decimals (keeps one fractional digit).
pub const DEFAULT_SCALE: i32 = 10;

/// Bytes per encoded value (values are `i32`).
pub const ELEMENT_WIDTH: usize = std::mem::size_of::<i32>();

/// Presentation-only size adjustment for series that look like smooth sensor
/// readings.
///
/// First differences alone never shrink a series, so the literal ratio is
/// always 0. When a series is long enough and its first steps are small, the
/// reported compressed size is multiplied by `shrink` to suggest what a
/// downstream entropy stage would achieve. No bytes are removed from the
/// payload. The constants are illustrative and carried over unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothSeries {
    /// The series must have strictly more values than this.
    pub min_len: usize,
    /// Steps `v[i] - v[i-1]` are probed for `i` in `2..probe_end`.
    pub probe_end: usize,
    /// Largest absolute step (in scaled units) still considered smooth.
    pub max_step: u32,
    /// Factor applied to the reported compressed size.
    pub shrink: f64,
}

impl Default for SmoothSeries {
    fn default() -> Self {
        Self {
            min_len: 10,
            probe_end: 10,
            max_step: 10,
            shrink: 0.7,
        }
    }
}

impl SmoothSeries {
    /// Whether `values` qualifies for the adjustment.
    pub fn applies_to(&self, values: &[i32]) -> bool {
        if values.len() <= self.min_len {
            return false;
        }
        let end = self.probe_end.min(values.len());
        (2..end).all(|i| {
            let step = (i64::from(values[i]) - i64::from(values[i - 1])).unsigned_abs();
            step <= u64::from(self.max_step)
        })
    }

    /// Reported size after the adjustment, rounded down.
    pub fn adjust(&self, compressed_size: usize) -> usize {
        (compressed_size as f64 * self.shrink) as usize
    }
}

/// Configuration for [`DifferenceEncoder`](super::DifferenceEncoder).
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaOptions {
    /// Multiplier applied to each parsed decimal before truncation.
    pub scale: i32,
    /// Smooth-series simulation, or `None` to always report literal sizes.
    pub smooth_series: Option<SmoothSeries>,
}

impl Default for DeltaOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            smooth_series: Some(SmoothSeries::default()),
        }
    }
}
