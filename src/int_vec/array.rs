use std::iter::FromIterator;

use log::debug;

use super::traits::*;
use crate::bit_vec::BitSet;
use crate::errors::{self, Result};
use crate::validity::ValidityTracker;

/// Nullable integers in an owned array, with presence in an owned bitset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayIntVector {
    data: Vec<i32>,
    validity: ValidityTracker<BitSet>,
}

impl ArrayIntVector {
    /// Creates a vector in which every element of `data` is present.
    pub fn new(data: Vec<i32>) -> Self {
        let len = data.len() as u64;
        debug!("ArrayIntVector::new: {} values, all present", len);
        ArrayIntVector {
            validity: ValidityTracker::covering(BitSet::full(len), len),
            data,
        }
    }

    /// Creates a vector whose presence is given by `validity`.
    ///
    /// Positions not set in `validity` are absent; the corresponding
    /// entries of `data` are kept but never read.
    ///
    /// # Errors
    ///
    /// `ValidityTooLong` if `validity` has a position set at or past
    /// `data.len()`.
    pub fn with_validity(data: Vec<i32>, validity: BitSet) -> Result<Self> {
        let validity = ValidityTracker::new(validity, data.len() as u64)?;
        debug!(
            "ArrayIntVector::with_validity: {} values, {} covered",
            data.len(),
            validity.covered()
        );
        Ok(ArrayIntVector { data, validity })
    }

    /// The raw values, including those at absent positions.
    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.data
    }

    /// The presence bitset.
    #[inline]
    pub fn validity(&self) -> &BitSet {
        self.validity.validity()
    }

    #[inline]
    fn check_position(&self, pos: u64) -> Result<usize> {
        if pos >= self.size() {
            return errors::out_of_bounds(pos, self.size());
        }
        Ok(pos as usize)
    }
}

impl Vector for ArrayIntVector {
    type Element = i32;

    #[inline]
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// # Errors
    ///
    /// `PositionOutOfBounds` if `pos >= self.size()`.
    #[inline]
    fn is_present(&self, pos: u64) -> Result<bool> {
        self.check_position(pos)?;
        Ok(self.validity.is_present(pos))
    }

    #[inline]
    fn get(&self, pos: u64) -> Result<Option<i32>> {
        let index = self.check_position(pos)?;
        if !self.validity.is_present(pos) {
            return Ok(None);
        }
        Ok(Some(self.data[index]))
    }
}

impl IntVector for ArrayIntVector {
    #[inline]
    fn get_primitive(&self, pos: u64) -> Result<i32> {
        let index = self.check_position(pos)?;
        if !self.validity.is_present(pos) {
            return errors::null_value(pos);
        }
        Ok(self.data[index])
    }

    fn null_count(&self) -> Result<u64> {
        Ok(self.validity.null_count(self.size()))
    }
}

impl From<Vec<i32>> for ArrayIntVector {
    fn from(data: Vec<i32>) -> Self {
        ArrayIntVector::new(data)
    }
}

impl FromIterator<Option<i32>> for ArrayIntVector {
    fn from_iter<I: IntoIterator<Item = Option<i32>>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut validity = BitSet::new();
        for (i, value) in iter.into_iter().enumerate() {
            match value {
                Some(value) => {
                    validity.set(i as u64, true);
                    data.push(value);
                }
                None => data.push(0),
            }
        }
        let len = data.len() as u64;
        ArrayIntVector {
            validity: ValidityTracker::covering(validity, len),
            data,
        }
    }
}
