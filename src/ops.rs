use crate::promote::Promote;
use crate::scalar::Scalar;
use crate::vector::Vector;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::AsPrimitive;

type Promoted<T, U, const N: usize> = Vector<<T as Promote<U>>::Output, N>;

impl<T, U, const N: usize> Add<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Promoted<T, U, N>;
    #[inline]
    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        let mut tmp = Vector::zero();
        for n in 0..N {
            tmp[n] = self[n].promote().wrapping_add(T::promote_rhs(rhs[n]));
        }
        tmp
    }
}

impl<T, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Promoted<T, U, N>;
    #[inline]
    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        let mut tmp = Vector::zero();
        for n in 0..N {
            tmp[n] = self[n].promote().wrapping_sub(T::promote_rhs(rhs[n]));
        }
        tmp
    }
}

impl<T, U, const N: usize> Mul<U> for Vector<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Promoted<T, U, N>;
    #[inline]
    fn mul(self, rhs: U) -> Self::Output {
        let rhs = T::promote_rhs(rhs);
        let mut tmp = Vector::zero();
        for n in 0..N {
            tmp[n] = self[n].promote().wrapping_mul(rhs);
        }
        tmp
    }
}

// scalar on the left, forwarded to `Vector * scalar` so both orders share a type
macro_rules! impl_scalar_mul_vector {
    ($($s:ty),*) => {
        $(
            impl<T, const N: usize> Mul<Vector<T, N>> for $s
            where
                T: Promote<$s>,
            {
                type Output = Promoted<T, $s, N>;
                #[inline]
                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_vector!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// compound forms convert the promoted result back, so `u8 += u8` wraps in `u8`
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: Promote<T>,
    <T as Promote<T>>::Output: AsPrimitive<T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        *self = (*self + rhs).cast();
    }
}

impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: Promote<T>,
    <T as Promote<T>>::Output: AsPrimitive<T>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        *self = (*self - rhs).cast();
    }
}

impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: Promote<T>,
    <T as Promote<T>>::Output: AsPrimitive<T>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = (*self * rhs).cast();
    }
}

/// Returns a new vector with every component negated. The operand is left
/// untouched. Only signed element types can be negated.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Vector<T, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|c| T::ZERO.wrapping_sub(c))
    }
}

impl<T, const N: usize> Neg for &Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Vector<T, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}

/// Componentwise (Hadamard) product, as opposed to scaling by a scalar.
#[inline]
pub fn comp_mult<T, U, const N: usize>(a: &Vector<T, N>, b: &Vector<U, N>) -> Promoted<T, U, N>
where
    T: Promote<U>,
    U: Scalar,
{
    let mut tmp = Vector::zero();
    for n in 0..N {
        tmp[n] = a[n].promote().wrapping_mul(T::promote_rhs(b[n]));
    }
    tmp
}

#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.dot(b)
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// See [`comp_mult`].
    #[inline]
    pub fn comp_mult<U: Scalar>(&self, rhs: &Vector<U, N>) -> Promoted<T, U, N>
    where
        T: Promote<U>,
    {
        comp_mult(self, rhs)
    }
}
