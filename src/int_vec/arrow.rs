use std::convert::TryFrom;

use log::debug;

use super::traits::*;
use crate::errors::{self, Result};

/// Read access to an external columnar integer array.
///
/// This is everything [`ArrowIntVector`] needs from the library that owns
/// the column: a presence flag, a raw getter, a nullable getter and the
/// element count. Out-of-range behaviour is whatever the library does.
pub trait ColumnAccessor {
    /// Non-zero if `index` holds a value.
    fn is_set(&self, index: usize) -> i32;

    /// The raw value at `index`, whether or not it is set.
    fn get(&self, index: usize) -> i32;

    /// The value at `index`, or `None` if it isn’t set.
    fn get_object(&self, index: usize) -> Option<i32>;

    /// The number of elements.
    fn value_count(&self) -> usize;
}

#[cfg(feature = "arrow")]
impl ColumnAccessor for arrow_array::Int32Array {
    #[inline]
    fn is_set(&self, index: usize) -> i32 {
        use arrow_array::Array;
        self.is_valid(index) as i32
    }

    #[inline]
    fn get(&self, index: usize) -> i32 {
        self.value(index)
    }

    #[inline]
    fn get_object(&self, index: usize) -> Option<i32> {
        use arrow_array::Array;
        if self.is_valid(index) {
            Some(self.value(index))
        } else {
            None
        }
    }

    #[inline]
    fn value_count(&self) -> usize {
        arrow_array::Array::len(self)
    }
}

/// A pass-through [`IntVector`] over a borrowed [`ColumnAccessor`].
///
/// Positions are checked against the element count; past that, every
/// call goes straight to the accessor. In particular `get_primitive` does
/// not check presence: on an absent position it returns whatever raw
/// value the column stores there.
#[derive(Debug)]
pub struct ArrowIntVector<'a, A: ColumnAccessor + ?Sized> {
    accessor: &'a A,
}

impl<'a, A: ColumnAccessor + ?Sized> ArrowIntVector<'a, A> {
    /// Adapts `accessor`.
    pub fn new(accessor: &'a A) -> Self {
        debug!("ArrowIntVector::new: {} values", accessor.value_count());
        ArrowIntVector { accessor }
    }

    /// The adapted accessor.
    #[inline]
    pub fn accessor(&self) -> &'a A {
        self.accessor
    }

    #[inline]
    fn index(&self, pos: u64) -> Result<usize> {
        let count = self.accessor.value_count();
        match usize::try_from(pos) {
            Ok(index) if index < count => Ok(index),
            _ => errors::out_of_bounds(pos, count as u64),
        }
    }
}

impl<'a, A: ColumnAccessor + ?Sized> Clone for ArrowIntVector<'a, A> {
    fn clone(&self) -> Self {
        ArrowIntVector { accessor: self.accessor }
    }
}

impl<'a, A: ColumnAccessor + ?Sized> Copy for ArrowIntVector<'a, A> {}

impl<'a, A: ColumnAccessor + ?Sized> Vector for ArrowIntVector<'a, A> {
    type Element = i32;

    #[inline]
    fn size(&self) -> u64 {
        self.accessor.value_count() as u64
    }

    #[inline]
    fn is_present(&self, pos: u64) -> Result<bool> {
        Ok(self.accessor.is_set(self.index(pos)?) != 0)
    }

    #[inline]
    fn get(&self, pos: u64) -> Result<Option<i32>> {
        Ok(self.accessor.get_object(self.index(pos)?))
    }
}

impl<'a, A: ColumnAccessor + ?Sized> IntVector for ArrowIntVector<'a, A> {
    #[inline]
    fn get_primitive(&self, pos: u64) -> Result<i32> {
        Ok(self.accessor.get(self.index(pos)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::{Error, ErrorKind};

    /// A column of optional values that reports unset slots as `-1`.
    struct Column(Vec<Option<i32>>);

    impl ColumnAccessor for Column {
        fn is_set(&self, index: usize) -> i32 {
            self.0[index].is_some() as i32 * 4
        }

        fn get(&self, index: usize) -> i32 {
            self.0[index].unwrap_or(-1)
        }

        fn get_object(&self, index: usize) -> Option<i32> {
            self.0[index]
        }

        fn value_count(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn delegates() {
        let column = Column(vec![Some(7), None, Some(42)]);
        let v = ArrowIntVector::new(&column);

        assert_eq!(3, v.size());
        assert_eq!(Ok(true), v.is_present(0));
        assert_eq!(Ok(false), v.is_present(1));
        assert_eq!(Ok(Some(42)), v.get(2));
        assert_eq!(Ok(None), v.get(1));
        assert_eq!(Ok(7), v.get_primitive(0));
    }

    #[test]
    fn raw_getter_is_trusted() {
        let column = Column(vec![None]);
        let v = ArrowIntVector::new(&column);
        assert_eq!(Ok(-1), v.get_primitive(0));
    }

    #[test]
    fn rejects_positions_past_end() {
        let column = Column(vec![Some(1), None, Some(3)]);
        let v = ArrowIntVector::new(&column);

        assert_eq!(
            Err(Error::PositionOutOfBounds { position: 3, size: 3 }),
            v.is_present(3)
        );
        assert_eq!(ErrorKind::Range, v.get(10).unwrap_err().kind());
        assert_eq!(ErrorKind::Range, v.get_primitive(u64::MAX).unwrap_err().kind());
    }

    #[test]
    fn as_trait_object() {
        let column = Column(vec![Some(1), Some(2), None, Some(4)]);
        let v: Box<dyn IntVector + '_> = Box::new(ArrowIntVector::new(&column));
        assert_eq!(Ok(7), v.sum_range(0, 4));
        assert_eq!(Ok(1), v.null_count());
    }

    #[cfg(feature = "arrow")]
    mod int32 {
        use super::super::*;
        use crate::errors::{Error, ErrorKind};
        use arrow_array::Int32Array;

        #[test]
        fn int32_array() {
            let array = Int32Array::from(vec![Some(7), None, Some(42), Some(0)]);
            let v = ArrowIntVector::new(&array);

            assert_eq!(4, v.size());
            assert_eq!(Ok(true), v.is_present(0));
            assert_eq!(Ok(false), v.is_present(1));
            assert_eq!(Ok(None), v.get(1));
            assert_eq!(Ok(Some(42)), v.get(2));
            assert_eq!(Ok(0), v.get_primitive(3));
            assert_eq!(Ok(49), v.sum_range(0, 4));
        }

        #[test]
        fn int32_array_out_of_range() {
            // No null buffer: Arrow reports every index as valid.
            let array = Int32Array::from(vec![1, 2, 3]);
            let v = ArrowIntVector::new(&array);

            assert_eq!(
                Err(Error::PositionOutOfBounds { position: 10, size: 3 }),
                v.is_present(10)
            );
            assert_eq!(ErrorKind::Range, v.get(3).unwrap_err().kind());
            assert_eq!(ErrorKind::Range, v.get_primitive(3).unwrap_err().kind());
        }
    }
}
