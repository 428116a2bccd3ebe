// ============================================================================
// Fast Fixed-Point Types
// Same arithmetic as the checked types, no storage-width guard
// ============================================================================

use super::macros::fixed_point_type;

fixed_point_type!(
    /// Fixed-point number in 32-bit storage with `K` fractional bits and no
    /// compile-time width guard.
    ///
    /// Behaves identically to [`Fixed32`](super::Fixed32); the caller is
    /// trusted to keep `K` below the storage width.
    FastFixed32,
    i32,
    i64,
    fast
);

fixed_point_type!(
    /// Fixed-point number in 64-bit storage with `K` fractional bits and no
    /// compile-time width guard.
    ///
    /// Behaves identically to [`Fixed64`](super::Fixed64); the caller is
    /// trusted to keep `K` below the storage width.
    FastFixed64,
    i64,
    i128,
    fast
);

/// Fast counterpart of [`Cell`](super::Cell): 32-bit storage, 16 fractional bits.
pub type FastCell = FastFixed32<16>;
