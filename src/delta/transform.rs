// First-difference transform and its running-sum inverse.
//
// Arithmetic wraps, so the pair stays exact inverses for every `i32`
// sequence and never panics on overflow.

/// `out[0] = v[0]`, `out[i] = v[i] - v[i-1]`.
pub fn encode(values: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0i32;
    for &v in values {
        out.push(v.wrapping_sub(prev));
        prev = v;
    }
    out
}

/// Running prefix sum: recovers the series `encode` was applied to.
pub fn reconstruct(deltas: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(deltas.len());
    let mut acc = 0i32;
    for &d in deltas {
        acc = acc.wrapping_add(d);
        out.push(acc);
    }
    out
}

/// Little-endian serialization of the encoded values.
pub fn to_le_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(encode(&[]).is_empty());
        assert!(reconstruct(&[]).is_empty());
    }

    #[test]
    fn first_value_verbatim_then_differences() {
        assert_eq!(encode(&[10, 11, 12, 15]), vec![10, 1, 1, 3]);
        assert_eq!(encode(&[100, 110, 115, 112, 122]), vec![100, 10, 5, -3, 10]);
    }

    #[test]
    fn reconstruct_inverts_encode() {
        let original = vec![205, 206, 204, 207, -3, 0, i32::MAX, i32::MIN];
        assert_eq!(reconstruct(&encode(&original)), original);
    }

    #[test]
    fn wraps_instead_of_overflowing() {
        let encoded = encode(&[i32::MIN, i32::MAX]);
        assert_eq!(encoded, vec![i32::MIN, -1]);
    }

    #[test]
    fn le_bytes_layout() {
        assert_eq!(to_le_bytes(&[1, -1]), vec![1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    }
}
