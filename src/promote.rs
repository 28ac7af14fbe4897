use crate::scalar::Scalar;

/// Arithmetic promotion of two scalar types.
///
/// `Output` is the element type produced when a `Self` component is combined
/// with an `Rhs` component, following the usual arithmetic conversions:
/// integers narrower than 32 bits become `i32` first; mixing an integer with
/// a float yields the float and `f32` with `f64` yields `f64`; of two integers
/// the wider wins, and at equal width the unsigned one wins. The table is
/// symmetric.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;

    fn promote(self) -> <Self as Promote<Rhs>>::Output;
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! impl_promote {
    ($($lhs:ty => [$($rhs:ty: $out:ty),*];)*) => {
        $($(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*)*
    };
}

impl_promote! {
    i8 => [i8: i32, i16: i32, i32: i32, i64: i64, u8: i32, u16: i32, u32: u32, u64: u64, f32: f32, f64: f64];
    i16 => [i8: i32, i16: i32, i32: i32, i64: i64, u8: i32, u16: i32, u32: u32, u64: u64, f32: f32, f64: f64];
    i32 => [i8: i32, i16: i32, i32: i32, i64: i64, u8: i32, u16: i32, u32: u32, u64: u64, f32: f32, f64: f64];
    i64 => [i8: i64, i16: i64, i32: i64, i64: i64, u8: i64, u16: i64, u32: i64, u64: u64, f32: f32, f64: f64];
    u8 => [i8: i32, i16: i32, i32: i32, i64: i64, u8: i32, u16: i32, u32: u32, u64: u64, f32: f32, f64: f64];
    u16 => [i8: i32, i16: i32, i32: i32, i64: i64, u8: i32, u16: i32, u32: u32, u64: u64, f32: f32, f64: f64];
    u32 => [i8: u32, i16: u32, i32: u32, i64: i64, u8: u32, u16: u32, u32: u32, u64: u64, f32: f32, f64: f64];
    u64 => [i8: u64, i16: u64, i32: u64, i64: u64, u8: u64, u16: u64, u32: u64, u64: u64, f32: f32, f64: f64];
    f32 => [i8: f32, i16: f32, i32: f32, i64: f32, u8: f32, u16: f32, u32: f32, u64: f32, f32: f32, f64: f64];
    f64 => [i8: f64, i16: f64, i32: f64, i64: f64, u8: f64, u16: f64, u32: f64, u64: f64, f32: f64, f64: f64];
}
