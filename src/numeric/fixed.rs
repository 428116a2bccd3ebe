// ============================================================================
// Checked-Width Fixed-Point Types
// Storage width guarded against the scale exponent at compile time
// ============================================================================

use super::macros::fixed_point_type;

fixed_point_type!(
    /// Fixed-point number in 32-bit storage with `K` fractional bits.
    ///
    /// Internally stores `real × 2^K` as an `i32`, truncated toward zero.
    /// Instantiation fails to compile unless `K < 32`.
    ///
    /// # Example
    /// ```
    /// use field_engine::numeric::Fixed32;
    ///
    /// let x = Fixed32::<16>::from_real(1.5);
    /// assert_eq!(x.raw_value(), 98_304); // 1.5 * 2^16
    /// assert_eq!(x.to_real(), 1.5);
    /// ```
    Fixed32,
    i32,
    i64,
    checked
);

fixed_point_type!(
    /// Fixed-point number in 64-bit storage with `K` fractional bits.
    ///
    /// Internally stores `real × 2^K` as an `i64`, truncated toward zero.
    /// Instantiation fails to compile unless `K < 64`.
    Fixed64,
    i64,
    i128,
    checked
);

/// Default cell value: 32-bit storage, 16 fractional bits.
pub type Cell = Fixed32<16>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{FixedValue, NumericError};
    use proptest::prelude::*;

    type F16 = Fixed32<16>;

    #[test]
    fn test_from_real_truncates_toward_zero() {
        // 2.7 * 65536 = 176947.2 -> 176947
        assert_eq!(F16::from_real(2.7).raw_value(), 176_947);
        // toward zero, not floor: -2.7 * 65536 = -176947.2 -> -176947
        assert_eq!(F16::from_real(-2.7).raw_value(), -176_947);
        // below one raw unit collapses to zero from both sides
        assert_eq!(F16::from_real(0.00001).raw_value(), 0);
        assert_eq!(F16::from_real(-0.00001).raw_value(), 0);
    }

    #[test]
    fn test_real_round_trip_exact_at_granularity() {
        // 1.5 is representable exactly at K=16
        let x = F16::from_real(1.5);
        assert_eq!(x.raw_value(), 98_304);
        assert_eq!(x.to_real(), 1.5);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let x = F16::from_raw(12_345);
        assert_eq!(x.raw_value(), 12_345);
        assert_eq!(x.to_real() * F16::SCALE, 12_345.0);
    }

    #[test]
    fn test_add_sub_wrap() {
        let a = F16::from_real(1.25);
        let b = F16::from_real(0.75);
        assert_eq!((a + b).to_real(), 2.0);
        assert_eq!((a - b).to_real(), 0.5);

        // raw add wraps per two's complement, no overflow check
        let max = F16::from_raw(i32::MAX);
        let one_raw = F16::from_raw(1);
        assert_eq!((max + one_raw).raw_value(), i32::MIN);
        let min = F16::from_raw(i32::MIN);
        assert_eq!((min - one_raw).raw_value(), i32::MAX);
    }

    #[test]
    fn test_mul_widens_before_rescale() {
        let a = F16::from_real(1.5);
        let b = F16::from_real(2.0);
        assert_eq!((a * b).to_real(), 3.0);

        // 181.0^2 = 32761.0: the raw product overflows i32 and must survive
        // through the i64 intermediate
        let c = F16::from_real(181.0);
        assert_eq!((c * c).to_real(), 32_761.0);
    }

    #[test]
    fn test_div_truncates() {
        let a = F16::from_real(3.0);
        let b = F16::from_real(2.0);
        assert_eq!(a.div(b).unwrap().to_real(), 1.5);

        // 1/3 truncates: (65536 << 16) / 196608 = 21845
        let one = F16::from_real(1.0);
        let three = F16::from_real(3.0);
        assert_eq!(one.div(three).unwrap().raw_value(), 21_845);
    }

    #[test]
    fn test_div_by_zero_fails() {
        let zero = F16::from_real(0.0);
        assert_eq!(F16::from_real(5.0).div(zero), Err(NumericError::DivisionByZero));
        assert_eq!(zero.div(zero), Err(NumericError::DivisionByZero));
        assert_eq!(F16::from_real(-5.0).div(zero), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_ordering_on_raw() {
        let a = F16::from_real(-1.5);
        let b = F16::from_real(0.25);
        let c = F16::from_real(0.25);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(b, c);
        assert!(b <= c && b >= c);
    }

    #[test]
    fn test_display_renders_real() {
        assert_eq!(F16::from_real(1.5).to_string(), "1.5");
        assert_eq!(F16::from_real(2.0).to_string(), "2");
        assert_eq!(F16::from_real(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn test_from_str() {
        let x: F16 = "2.5".parse().unwrap();
        assert_eq!(x, F16::from_real(2.5));

        let bad: Result<F16, _> = "not-a-number".parse();
        assert_eq!(bad, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_raw_byte_round_trip() {
        let x = F16::from_real(-3.25);
        let mut buf = [0u8; 4];
        x.store_raw(&mut buf);
        assert_eq!(F16::load_raw(&buf), x);
        assert_eq!(F16::RAW_BYTES, 4);
    }

    #[test]
    fn test_fixed64_storage() {
        type F48 = Fixed64<48>;
        assert_eq!(F48::RAW_BYTES, 8);

        let x = F48::from_real(1.0);
        assert_eq!(x.raw_value(), 1i64 << 48);

        // product of two full-scale raws needs the i128 intermediate
        let a = F48::from_real(100.0);
        let b = F48::from_real(100.0);
        assert_eq!((a * b).to_real(), 10_000.0);

        let mut buf = [0u8; 8];
        x.store_raw(&mut buf);
        assert_eq!(F48::load_raw(&buf), x);
    }

    #[test]
    fn test_cell_alias() {
        let v = Cell::from_real(0.5);
        assert_eq!(v.raw_value(), 32_768);
        assert_eq!(Cell::FRACTIONAL_BITS, 16);
    }

    proptest! {
        #[test]
        fn prop_real_round_trip_within_granularity(x in -30_000.0f64..30_000.0) {
            let granularity = 1.0 / F16::SCALE;
            let back = F16::from_real(x).to_real();
            prop_assert!((back - x).abs() < granularity);
        }

        #[test]
        fn prop_raw_round_trip_exact(raw in i32::MIN..=i32::MAX) {
            let x = F16::from_raw(raw);
            prop_assert_eq!(x.raw_value(), raw);
            prop_assert_eq!(x.to_real() * F16::SCALE, raw as f64);
        }

        #[test]
        fn prop_ordering_matches_reals(a in -30_000.0f64..30_000.0, b in -30_000.0f64..30_000.0) {
            let (fa, fb) = (F16::from_real(a), F16::from_real(b));
            if a <= b {
                prop_assert!(fa <= fb);
            } else {
                prop_assert!(fa >= fb);
            }
        }
    }
}
