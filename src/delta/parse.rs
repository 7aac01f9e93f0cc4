// Comma-delimited numeric series parsing.
//
// Tokens that do not parse as a finite decimal are dropped rather than
// failing the whole payload. Accepted values are scaled, truncated toward
// zero and saturated into `i32`.

use log::trace;

/// Parse one token. `None` means the token is skipped.
pub fn parse_token(token: &str, scale: i32) -> Option<i32> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Some((v * f64::from(scale)) as i32),
        _ => {
            trace!("delta: skipping malformed token {token:?}");
            None
        }
    }
}

/// Parse a comma-delimited series, keeping only well-formed tokens.
pub fn parse_series(text: &str, scale: i32) -> Vec<i32> {
    text.split(',')
        .filter_map(|token| parse_token(token, scale))
        .collect()
}
