// ============================================================================
// Fixed-Point Value Contract
// The operation surface the grid solver requires from its element type
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Operation contract shared by every fixed-point storage/policy variant.
///
/// The solver is generic over this trait. The variants stay independent
/// value types; this trait only names the operations they all provide:
///
/// - truncating real↔fixed conversion at the boundary (`from_real`/`to_real`),
/// - wrapping raw add/sub and widened mul via the `std::ops` operators,
/// - fallible division (`DivisionByZero` on a zero divisor),
/// - native-endian raw-byte access for binary state persistence.
///
/// Ordering and equality compare raw values, which is equivalent to comparing
/// the represented reals since the scale factor is positive and constant.
pub trait FixedValue:
    Copy
    + Default
    + Send
    + Sync
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + fmt::Display
    + fmt::Debug
    + FromStr<Err = NumericError>
{
    /// Number of fractional bits (the scale exponent K).
    const FRACTIONAL_BITS: u32;

    /// Size in bytes of the backing storage integer.
    const RAW_BYTES: usize;

    /// Convert a real number, truncating toward zero at scale `2^K`.
    fn from_real(x: f64) -> Self;

    /// Convert back to a real number; exact up to the fixed-point granularity.
    fn to_real(self) -> f64;

    /// Truncating fixed-point division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` has a zero raw value.
    fn div(self, rhs: Self) -> NumericResult<Self>;

    /// Write the raw storage bytes (native endianness) into `dst`.
    ///
    /// `dst` must be at least `RAW_BYTES` long.
    fn store_raw(self, dst: &mut [u8]);

    /// Rebuild a value from raw storage bytes (native endianness).
    ///
    /// `src` must be at least `RAW_BYTES` long.
    fn load_raw(src: &[u8]) -> Self;
}
