// ============================================================================
// Fixed-Point Type Generator
// One implementation shared by the checked and fast storage-width policies
// ============================================================================
//
// Every generated type stores `trunc_toward_zero(real * 2^K)` in a signed
// integer and keeps all arithmetic in that raw space:
// - add/sub wrap per two's complement of the storage width
// - mul widens into the next-larger integer before the `>> K` rescale
// - div widens the `<< K` dividend shift and uses truncating division
//
// The `checked` arm guards `K < storage width` at monomorphization time; the
// `fast` arm imposes no guard but is otherwise identical.

macro_rules! fixed_point_type {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $wide:ty, checked) => {
        $crate::numeric::macros::fixed_point_type!(@define $(#[$meta])* $name, $repr, $wide, {
            assert!(
                K < <$repr>::BITS,
                "scale exponent K must be smaller than the storage width"
            );
            (1u128 << K) as f64
        });
    };
    ($(#[$meta:meta])* $name:ident, $repr:ty, $wide:ty, fast) => {
        $crate::numeric::macros::fixed_point_type!(@define $(#[$meta])* $name, $repr, $wide, {
            (1u128 << K) as f64
        });
    };
    (@define $(#[$meta:meta])* $name:ident, $repr:ty, $wide:ty, $scale:block) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name<const K: u32>($repr);

        impl<const K: u32> $name<K> {
            /// The scale factor `2^K` as a real number.
            pub const SCALE: f64 = $scale;

            /// Zero value.
            pub const ZERO: Self = Self(0);

            /// Convert a real number, truncating toward zero at scale `2^K`.
            ///
            /// Truncation, not round-to-nearest; saved state and step results
            /// are bit-exact only under truncation.
            #[inline]
            pub fn from_real(x: f64) -> Self {
                Self((x * Self::SCALE) as $repr)
            }

            /// Construct directly from a pre-scaled raw value.
            #[inline]
            pub const fn from_raw(raw: $repr) -> Self {
                Self(raw)
            }

            /// The raw internal value (`real * 2^K`, truncated).
            #[inline]
            pub const fn raw_value(self) -> $repr {
                self.0
            }

            /// Convert back to a real number.
            #[inline]
            pub fn to_real(self) -> f64 {
                self.0 as f64 / Self::SCALE
            }

            /// Check if the value is zero.
            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }

            /// Truncating fixed-point division.
            ///
            /// # Errors
            /// Returns `DivisionByZero` when `rhs` has a zero raw value.
            #[inline]
            pub fn div(self, rhs: Self) -> $crate::numeric::NumericResult<Self> {
                if rhs.0 == 0 {
                    return Err($crate::numeric::NumericError::DivisionByZero);
                }
                Ok(Self(
                    (((self.0 as $wide) << K) / (rhs.0 as $wide)) as $repr,
                ))
            }
        }

        impl<const K: u32> Default for $name<K> {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<const K: u32> ::std::ops::Add for $name<K> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl<const K: u32> ::std::ops::Sub for $name<K> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl<const K: u32> ::std::ops::Mul for $name<K> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self((((self.0 as $wide) * (rhs.0 as $wide)) >> K) as $repr)
            }
        }

        impl<const K: u32> ::std::fmt::Display for $name<K> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.to_real())
            }
        }

        impl<const K: u32> ::std::fmt::Debug for $name<K> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "<{}>({}, raw={})"),
                    K, self, self.0
                )
            }
        }

        impl<const K: u32> ::std::str::FromStr for $name<K> {
            type Err = $crate::numeric::NumericError;

            /// Parse a real number and apply the truncating constructor.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let real: f64 = s
                    .trim()
                    .parse()
                    .map_err(|_| $crate::numeric::NumericError::InvalidInput)?;
                Ok(Self::from_real(real))
            }
        }

        impl<const K: u32> $crate::numeric::FixedValue for $name<K> {
            const FRACTIONAL_BITS: u32 = K;
            const RAW_BYTES: usize = ::std::mem::size_of::<$repr>();

            #[inline]
            fn from_real(x: f64) -> Self {
                $name::from_real(x)
            }

            #[inline]
            fn to_real(self) -> f64 {
                $name::to_real(self)
            }

            #[inline]
            fn div(self, rhs: Self) -> $crate::numeric::NumericResult<Self> {
                $name::div(self, rhs)
            }

            #[inline]
            fn store_raw(self, dst: &mut [u8]) {
                dst[..Self::RAW_BYTES].copy_from_slice(&self.0.to_ne_bytes());
            }

            #[inline]
            fn load_raw(src: &[u8]) -> Self {
                let mut bytes = [0u8; ::std::mem::size_of::<$repr>()];
                bytes.copy_from_slice(&src[..Self::RAW_BYTES]);
                Self(<$repr>::from_ne_bytes(bytes))
            }
        }
    };
}

pub(crate) use fixed_point_type;
