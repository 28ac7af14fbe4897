//! Fluent fill helper for writing a vector's components one after another.
//!
//! ```
//! use nuts_math::{Vector3d, vec2};
//!
//! let mut v = Vector3d::zero();
//! v.fill().put_all(&vec2(1_i32, 2)).put(3.5).finish();
//! assert_eq!([1.0, 2.0, 3.5], v.to_array());
//! ```

use crate::scalar::Scalar;
use crate::vector::{assert_fits, Vector};
use num_traits::AsPrimitive;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("vector filled with {supplied} of {expected} values")]
    Underfilled { expected: usize, supplied: usize },
    #[error("more than {expected} values supplied to vector")]
    Overfilled { expected: usize },
}

/// Writes values into a borrowed vector starting at index 0.
///
/// Exactly `N` values must be supplied. Supplying one too many panics at the
/// offending `put`; supplying too few panics in [`finish`](Self::finish) or
/// when the filler is dropped.
#[must_use = "a filler checks the value count when finished or dropped"]
pub struct Filler<'a, T: Scalar, const N: usize> {
    target: &'a mut Vector<T, N>,
    index: usize,
    checked: bool,
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub fn fill(&mut self) -> Filler<'_, T, N> {
        Filler {
            target: self,
            index: 0,
            checked: false,
        }
    }
}

impl<'a, T: Scalar, const N: usize> Filler<'a, T, N> {
    /// Number of values supplied so far.
    #[inline]
    pub fn supplied(&self) -> usize {
        self.index
    }

    #[track_caller]
    pub fn put<U>(self, value: U) -> Self
    where
        U: Scalar + AsPrimitive<T>,
    {
        match self.try_put(value) {
            Ok(filler) => filler,
            Err(err) => contract_violation(err),
        }
    }

    pub fn try_put<U>(mut self, value: U) -> Result<Self, FillError>
    where
        U: Scalar + AsPrimitive<T>,
    {
        if self.index >= N {
            self.checked = true;
            return Err(FillError::Overfilled { expected: N });
        }
        self.target[self.index] = value.as_();
        self.index += 1;
        Ok(self)
    }

    /// Supplies every component of `other` in order.
    #[track_caller]
    pub fn put_all<U, const M: usize>(self, other: &Vector<U, M>) -> Self
    where
        U: Scalar + AsPrimitive<T>,
    {
        assert_fits::<M, N>();
        other.iter().fold(self, |filler, &c| filler.put(c))
    }

    #[track_caller]
    pub fn finish(self) {
        if let Err(err) = self.try_finish() {
            contract_violation(err);
        }
    }

    pub fn try_finish(mut self) -> Result<(), FillError> {
        self.checked = true;
        self.check()
    }

    fn check(&self) -> Result<(), FillError> {
        if self.index == N {
            Ok(())
        } else {
            Err(FillError::Underfilled {
                expected: N,
                supplied: self.index,
            })
        }
    }
}

impl<'a, T: Scalar, const N: usize> Drop for Filler<'a, T, N> {
    fn drop(&mut self) {
        if self.checked || std::thread::panicking() {
            return;
        }
        if let Err(err) = self.check() {
            contract_violation(err);
        }
    }
}

#[cold]
#[track_caller]
fn contract_violation(err: FillError) -> ! {
    log::error!("{}", err);
    panic!("{}", err);
}
