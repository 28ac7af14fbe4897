use crate::scalar::Scalar;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use num_traits::AsPrimitive;

/// A fixed-dimension vector of `N` scalar components stored contiguously.
///
/// Components compare lexicographically, component 0 first. Integer vectors
/// are also `Eq + Ord + Hash` and can be used as map keys.
///
/// ```
/// use nuts_math::{vec2, vec3, Vector, Vector3d};
///
/// let v = Vector3d::convert_from(&vec2(3_i32, 4));
/// assert_eq!(vec3(3.0, 4.0, 0.0), v);
/// assert_eq!(0.0, v.z());
/// assert!(vec2(1, 2) < vec2(1, 3));
/// ```
///
/// Misuse is rejected when the program is built. A dimension below 2:
///
/// ```compile_fail
/// let v = nuts_math::Vector::<f64, 1>::new([1.0]);
/// ```
///
/// The wrong number of components:
///
/// ```compile_fail
/// let v = nuts_math::Vector::<f64, 3>::new([1.0, 2.0]);
/// ```
///
/// A non-arithmetic element type:
///
/// ```compile_fail
/// let v = nuts_math::Vector::<bool, 2>::new([true, false]);
/// ```
///
/// Operands of different dimension:
///
/// ```compile_fail
/// use nuts_math::{vec2, vec3};
/// let v = vec2(1.0, 2.0) + vec3(1.0, 2.0, 3.0);
/// ```
///
/// `z` on a 2D vector and `w` on a 3D vector:
///
/// ```compile_fail
/// let z = nuts_math::vec2(1.0, 2.0).z();
/// ```
///
/// ```compile_fail
/// let w = nuts_math::vec3(1.0, 2.0, 3.0).w();
/// ```
///
/// Converting from a vector of higher dimension:
///
/// ```compile_fail
/// use nuts_math::{vec3, Vector2d};
/// let mut v = Vector2d::zero();
/// v.assign_from(&vec3(1.0, 2.0, 3.0));
/// ```
///
/// ```compile_fail
/// use nuts_math::{vec3, Vector2d};
/// let v = Vector2d::convert_from(&vec3(1_i32, 2, 3));
/// ```
///
/// Zeroing through `bytemuck` still checks the dimension:
///
/// ```compile_fail
/// let v: nuts_math::Vector<f64, 1> = bytemuck::Zeroable::zeroed();
/// ```
///
/// Casting from raw bytes with `bytemuck` (`Pod`) does not run any
/// constructor, so it can produce a vector the checks above would reject.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Vector<T: Scalar, const N: usize>(pub(crate) [T; N]);

/// Returns a 2D vector with components `x` and `y`.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vector<T, 2> {
    Vector::new([x, y])
}

/// Returns a 3D vector with components `x`, `y` and `z`.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::new([x, y, z])
}

/// Returns a 4D vector with components `x`, `y`, `z` and `w`.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::new([x, y, z, w])
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    const ASSERT_DIM: () = assert!(N >= 2, "dimension of a vector must be 2 or higher");
    const ASSERT_HAS_Z: () = assert!(N >= 3, "z() requires a vector of dimension 3 or higher");
    const ASSERT_HAS_W: () = assert!(N >= 4, "w() requires a vector of dimension 4 or higher");

    pub const DIM: usize = N;

    pub const ZERO: Self = {
        let () = Self::ASSERT_DIM;
        Self([T::ZERO; N])
    };

    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        let () = Self::ASSERT_DIM;
        Self(components)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns a vector with all components equal to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Builds a vector from `N` values of any scalar type, converting each
    /// with an `as` cast (truncating or wrapping where the target is narrower).
    pub fn from_components<U>(components: [U; N]) -> Self
    where
        U: Scalar + AsPrimitive<T>,
    {
        let mut tmp = Self::zero();
        for n in 0..N {
            tmp.0[n] = components[n].as_();
        }
        tmp
    }

    /// Converts a vector of another element type and a dimension no larger
    /// than `N`. Components past `M` are zero.
    #[inline]
    pub fn convert_from<U, const M: usize>(other: &Vector<U, M>) -> Self
    where
        U: Scalar + AsPrimitive<T>,
    {
        let mut tmp = Self::zero();
        tmp.assign_from(other);
        tmp
    }

    /// Overwrites `self` with the converted components of `other` and zeroes
    /// the remaining `N - M` components.
    pub fn assign_from<U, const M: usize>(&mut self, other: &Vector<U, M>)
    where
        U: Scalar + AsPrimitive<T>,
    {
        let () = Assert::<M, N>::SOURCE_FITS;
        for (dst, &src) in self.0.iter_mut().zip(other.0.iter()) {
            *dst = src.as_();
        }
        for dst in &mut self.0[M..] {
            *dst = T::ZERO;
        }
    }

    /// Same-dimension element type conversion.
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, mut f: F) -> Vector<U, N> {
        let mut tmp = Vector::zero();
        for n in 0..N {
            tmp.0[n] = f(self.0[n]);
        }
        tmp
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Same as [`len`](Self::len). Never zero.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        let () = Self::ASSERT_HAS_Z;
        self.0[2]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        let () = Self::ASSERT_HAS_Z;
        &mut self.0[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        let () = Self::ASSERT_HAS_W;
        self.0[3]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        let () = Self::ASSERT_HAS_W;
        &mut self.0[3]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Pointer to the first of `N` contiguous components.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    /// The components as native-endian bytes, e.g. for a vertex buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::ZERO, |dot, (&lhs, &rhs)| dot.wrapping_add(lhs.wrapping_mul(rhs)))
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length. Integer vectors truncate the result.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }
}

struct Assert<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> Assert<M, N> {
    const SOURCE_FITS: () = assert!(
        M <= N,
        "cannot convert from a vector of higher dimension"
    );
}

pub(crate) fn assert_fits<const M: usize, const N: usize>() {
    let () = Assert::<M, N>::SOURCE_FITS;
}

#[cold]
#[track_caller]
fn index_out_of_range(index: usize, len: usize) -> ! {
    log::error!("vector index {} out of range for dimension {}", index, len);
    panic!("vector index {} out of range for dimension {}", index, len);
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Deref for Vector<T, N> {
    type Target = [T; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Scalar, const N: usize> DerefMut for Vector<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= N {
            index_out_of_range(index, N);
        }
        &self.0[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= N {
            index_out_of_range(index, N);
        }
        &mut self.0[index]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(a: [T; N]) -> Self {
        Self::new(a)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Scalar, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (n, c) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        write!(f, ")")
    }
}

// SAFETY: `Vector` is a transparent wrapper around `[T; N]` and every
// `Scalar` is `Pod`, so there is no padding and any bit pattern is valid.
unsafe impl<T: Scalar, const N: usize> Zeroable for Vector<T, N> {
    #[inline]
    fn zeroed() -> Self {
        Self::ZERO
    }
}
unsafe impl<T: Scalar, const N: usize> Pod for Vector<T, N> {}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod test {
    use super::{vec2, vec3, vec4, Vector};
    use crate::{Vector2i, Vector3d};
    use std::collections::BTreeMap;

    #[test]
    fn test_default_is_zero() {
        let v = Vector::<f64, 3>::default();
        assert_eq!(vec3(0.0, 0.0, 0.0), v);
        assert_eq!(Vector::<i32, 4>::ZERO, Vector::splat(0));
    }

    #[test]
    fn test_from_components_narrows() {
        let v = Vector::<i32, 3>::from_components([1.9_f64, -2.7, 3.0]);
        assert_eq!(vec3(1, -2, 3), v);
        let v = Vector::<u8, 2>::from_components([300_i32, 7]);
        assert_eq!(vec2(44_u8, 7), v);
    }

    #[test]
    fn test_convert_from_zero_fills() {
        let v = Vector3d::convert_from(&vec2(3_i32, 4));
        assert_eq!(vec3(3.0, 4.0, 0.0), v);

        let v = Vector::<f32, 4>::convert_from(&vec3(1_u8, 2, 3));
        assert_eq!(vec4(1.0, 2.0, 3.0, 0.0), v);

        let v = Vector::<i32, 2>::convert_from(&vec2(-1.5_f32, 2.5));
        assert_eq!(vec2(-1, 2), v);
    }

    #[test]
    fn test_cast_and_map() {
        let v = vec3(1.75_f64, -0.5, 300.0);
        assert_eq!(vec3(1, 0, 300), v.cast::<i32>());
        assert_eq!(vec3(1_u8, 0, 44), v.cast::<i32>().cast::<u8>());
        assert_eq!(vec3(3.5, -1.0, 600.0), v.map(|c| c * 2.0));
    }

    #[test]
    fn test_assign_from() {
        let mut v = vec4(9.0_f64, 9.0, 9.0, 9.0);
        v.assign_from(&vec2(1_i64, 2));
        assert_eq!(vec4(1.0, 2.0, 0.0, 0.0), v);

        let copy = v;
        v.assign_from(&copy);
        assert_eq!(copy, v);
    }

    #[test]
    fn test_named_accessors() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!((1, 2, 3, 4), (v.x(), v.y(), v.z(), v.w()));
        *v.x_mut() = 10;
        *v.w_mut() = 40;
        assert_eq!(vec4(10, 2, 3, 40), v);
        assert_eq!(v[0], v.x());
        assert_eq!(v[3], v.w());
    }

    #[test]
    fn test_index_in_range() {
        let mut v = vec3(1.0_f32, 2.0, 3.0);
        v[1] = 5.0;
        assert_eq!(5.0, v[1]);
        assert_eq!(Some(&3.0), v.get(2));
        assert_eq!(None, v.get(3));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let v = vec2(1, 2);
        let i = v.len();
        let _c = v[i];
    }

    #[test]
    fn test_iteration() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(vec![1, 2, 3], v.iter().copied().collect::<Vec<_>>());
        assert_eq!(vec![3, 2, 1], v.iter().rev().copied().collect::<Vec<_>>());
        for c in &mut v {
            *c *= 2;
        }
        assert_eq!(vec3(2, 4, 6), v);
        assert_eq!(12, v.into_iter().sum::<i32>());
    }

    #[test]
    fn test_array_round_trip() {
        let v = vec4(0.5_f32, -1.0, 2.0, 8.0);
        let a: [f32; 4] = v.into();
        assert_eq!(v, Vector::from(a));
        assert_eq!(v, Vector::new(v.to_array()));
    }

    #[test]
    fn test_zeroed_is_zero() {
        let v: Vector<u16, 4> = bytemuck::Zeroable::zeroed();
        assert_eq!(Vector::ZERO, v);
        let v: Vector3d = bytemuck::Zeroable::zeroed();
        assert_eq!(vec3(0.0, 0.0, 0.0), v);
    }

    #[test]
    fn test_raw_storage() {
        let v = vec3(1.0_f64, 2.0, 3.0);
        let raw = unsafe { core::slice::from_raw_parts(v.as_ptr(), v.len()) };
        assert_eq!(&[1.0, 2.0, 3.0], raw);
        assert_eq!(3 * core::mem::size_of::<f64>(), v.as_bytes().len());
        assert_eq!(core::mem::size_of::<[f64; 3]>(), core::mem::size_of_val(&v));
    }

    #[test]
    fn test_lexicographic_ordering() {
        assert!(vec2(1, 2) < vec2(1, 3));
        assert!(vec2(2, 0) > vec2(1, 9));
        assert!(vec2(1, 2) <= vec2(1, 2));
        assert!(vec2(1.0, 2.0) >= vec2(1.0, 2.0));
        assert!(vec3(0.0, 5.0, 1.0) != vec3(0.0, 5.0, 2.0));
        assert_eq!(vec3(1, 2, 3), vec3(1, 2, 3));
    }

    #[test]
    fn test_ordered_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(Vector2i::new([2, 0]), "c");
        map.insert(vec2(1, 9), "b");
        map.insert(vec2(1, 2), "a");
        let order: Vec<_> = map.values().copied().collect();
        assert_eq!(vec!["a", "b", "c"], order);
    }

    #[test]
    fn test_dot_and_length() {
        let a = vec3(1.0, 2.0, 2.0);
        assert_eq!(9.0, a.dot(&a));
        assert_eq!(3.0, a.length());
        assert_eq!(5, vec2(3, 4).length());
        // truncated
        assert_eq!(1, vec2(1, 1).length());
    }

    #[test]
    fn test_display() {
        assert_eq!("(1, 2, 3)", vec3(1, 2, 3).to_string());
        assert_eq!("(0.5, -1)", vec2(0.5, -1.0).to_string());
    }

    #[test]
    fn test_approx() {
        let a = vec3(0.1_f64 + 0.2, 1.0, 2.0);
        let b = vec3(0.3, 1.0, 2.0);
        assert_ne!(a, b);
        approx::assert_relative_eq!(a, b);
        approx::assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        approx::assert_ulps_ne!(a, vec3(0.3, 1.0, 2.1));
    }
}
