use bytemuck::Pod;
use core::fmt::{Debug, Display};
use num_traits::Num;

mod sealed {
    pub trait Sealed {}
}

/// Element type of a [`Vector`](crate::Vector).
///
/// Implemented for the primitive integer and floating point types only, so
/// `bool` and non-arithmetic types cannot be used as vector components.
pub trait Scalar:
    sealed::Sealed + Num + Pod + Default + Debug + Display + PartialOrd + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Square root. Integer types compute it in `f64` and truncate.
    fn sqrt(self) -> Self;

    // integer overflow wraps in every build profile
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar_float!(f32, f64);

#[test]
fn test_scalar_sqrt() {
    assert_eq!(3.0, Scalar::sqrt(9.0_f64));
    assert_eq!(1.5, Scalar::sqrt(2.25_f32));
    // truncated toward zero
    assert_eq!(2, Scalar::sqrt(8_i32));
    assert_eq!(5, Scalar::sqrt(25_u64));
}

#[test]
fn test_scalar_wrapping() {
    assert_eq!(4294967292_u32, Scalar::wrapping_sub(1_u32, 5));
    assert_eq!(i8::MIN, Scalar::wrapping_add(i8::MAX, 1));
    assert_eq!(0_u8, Scalar::wrapping_mul(16_u8, 16));
    assert_eq!(0.5, Scalar::wrapping_sub(1.0_f64, 0.5));
}
