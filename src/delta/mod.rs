// First-difference (delta) encoding of numeric sensor series.
//
// - `parse`    : comma-delimited text -> scaled `i32` series
// - `transform`: first differences and their running-sum inverse
// - `options`  : scale factor and the smooth-series size simulation
// - `encoder`  : DifferenceEncoder: the `Compressor` for text payloads

pub mod encoder;
pub mod options;
pub mod parse;
pub mod transform;

pub use encoder::DifferenceEncoder;
pub use options::{DEFAULT_SCALE, DeltaOptions, ELEMENT_WIDTH, SmoothSeries};
pub use transform::{encode, reconstruct};
