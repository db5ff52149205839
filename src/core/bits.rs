//! Bit helpers for generalized indices.

/// Deepest depth whose generalized index still fits in a `u64`.
pub const MAX_POSITION_DEPTH: u32 = 63;

/// Index of the most significant set bit (0-based).
///
/// Equivalent to `floor(log2(x))` for `x >= 1`. Returns 0 for `x == 0`,
/// which is also the answer for `x == 1`: callers that can see a zero
/// must handle it before relying on the result.
#[inline]
pub const fn msb_index(x: u64) -> u32 {
    if x == 0 {
        return 0;
    }
    u64::BITS - 1 - x.leading_zeros()
}

/// Mask with the low `bits` bits set.
#[inline]
pub(crate) const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_index_small_values() {
        assert_eq!(msb_index(1), 0);
        assert_eq!(msb_index(2), 1);
        assert_eq!(msb_index(3), 1);
        assert_eq!(msb_index(7), 2);
        assert_eq!(msb_index(8), 3);
    }

    #[test]
    fn test_msb_index_zero_is_zero() {
        assert_eq!(msb_index(0), 0);
    }

    #[test]
    fn test_msb_index_extremes() {
        assert_eq!(msb_index(u64::MAX), 63);
        assert_eq!(msb_index(1 << 63), 63);
        assert_eq!(msb_index((1 << 40) | 12345), 40);
    }

    #[test]
    fn test_msb_index_matches_shift_count() {
        // Counting right shifts must agree with the intrinsic
        for x in 1u64..4096 {
            let mut v = x;
            let mut count = 0;
            while v != 0 {
                v >>= 1;
                count += 1;
            }
            assert_eq!(msb_index(x), count - 1, "x = {}", x);
        }
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(3), 0b111);
        assert_eq!(low_mask(63), u64::MAX >> 1);
        assert_eq!(low_mask(64), u64::MAX);
    }
}
