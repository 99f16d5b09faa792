use std::ops::Range;

use crate::errors::{Error, Result};

/// Validates the half-open range `from..to` against a vector of `size`
/// elements.
///
/// Succeeds for `0 <= from <= to <= size`, returning the range as
/// positions.
///
/// # Errors
///
///   - `LowerBoundOutOfRange` if `from < 0` or `from > size`.
///   - `UpperBoundOutOfRange` if `to < from` or `to > size`.
pub fn check_range(size: u64, from: i64, to: i64) -> Result<Range<u64>> {
    if from < 0 || from as u64 > size {
        return Err(Error::LowerBoundOutOfRange { from, size });
    }
    if to < from || to as u64 > size {
        return Err(Error::UpperBoundOutOfRange { from, to, size });
    }
    Ok(from as u64..to as u64)
}

/// Read-only access to a sequence of nullable elements.
///
/// Positions run from `0` to `size() - 1`. `is_present` and `get` always
/// agree: `get(pos)` is `None` exactly when `is_present(pos)` is false.
pub trait Vector {
    /// The type of the logical values.
    type Element;

    /// The number of positions.
    fn size(&self) -> u64;

    /// Is the vector empty?
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether a value exists at `pos`.
    fn is_present(&self, pos: u64) -> Result<bool>;

    /// The value at `pos`, or `None` if it is absent.
    fn get(&self, pos: u64) -> Result<Option<Self::Element>>;

    /// Validates `from..to` against this vector; see [`check_range`].
    #[inline]
    fn check_range(&self, from: i64, to: i64) -> Result<Range<u64>> {
        check_range(self.size(), from, to)
    }
}

/// A vector of nullable 32-bit integers.
///
/// `get_primitive` is the non-nullable fast path. For every present
/// position it returns the same value as `get`.
pub trait IntVector: Vector<Element = i32> {
    /// The value at `pos`.
    ///
    /// # Errors
    ///
    /// `NullValue` if the position is absent, for backings that check.
    fn get_primitive(&self, pos: u64) -> Result<i32>;

    /// Sums the present values in `from..to`, skipping absent ones.
    fn sum_range(&self, from: i64, to: i64) -> Result<i64> {
        let mut sum = 0i64;
        for pos in self.check_range(from, to)? {
            if self.is_present(pos)? {
                sum += i64::from(self.get_primitive(pos)?);
            }
        }
        Ok(sum)
    }

    /// Reads `from..to` into a vector of options.
    fn collect_range(&self, from: i64, to: i64) -> Result<Vec<Option<i32>>> {
        self.check_range(from, to)?
            .map(|pos| self.get(pos))
            .collect()
    }

    /// The number of absent positions.
    fn null_count(&self) -> Result<u64> {
        let mut count = 0;
        for pos in 0..self.size() {
            if !self.is_present(pos)? {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl<'a, V: Vector + ?Sized> Vector for &'a V {
    type Element = V::Element;

    #[inline]
    fn size(&self) -> u64 {
        (**self).size()
    }

    #[inline]
    fn is_present(&self, pos: u64) -> Result<bool> {
        (**self).is_present(pos)
    }

    #[inline]
    fn get(&self, pos: u64) -> Result<Option<V::Element>> {
        (**self).get(pos)
    }
}

impl<'a, V: IntVector + ?Sized> IntVector for &'a V {
    #[inline]
    fn get_primitive(&self, pos: u64) -> Result<i32> {
        (**self).get_primitive(pos)
    }
}

impl<V: Vector + ?Sized> Vector for Box<V> {
    type Element = V::Element;

    #[inline]
    fn size(&self) -> u64 {
        (**self).size()
    }

    #[inline]
    fn is_present(&self, pos: u64) -> Result<bool> {
        (**self).is_present(pos)
    }

    #[inline]
    fn get(&self, pos: u64) -> Result<Option<V::Element>> {
        (**self).get(pos)
    }
}

impl<V: IntVector + ?Sized> IntVector for Box<V> {
    #[inline]
    fn get_primitive(&self, pos: u64) -> Result<i32> {
        (**self).get_primitive(pos)
    }
}
