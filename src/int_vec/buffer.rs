use byteorder::{ByteOrder, NativeEndian};
use log::debug;

use super::traits::*;
use crate::bit_vec::PackedBits;
use crate::errors::{self, Result};
use crate::validity::ValidityTracker;

/// The width in bytes of one element.
pub const INT_BYTES: usize = 4;

/// Encodes `values` as a native-endian byte region readable by
/// [`IntView`].
pub fn encode_values(values: &[i32]) -> Vec<u8> {
    let mut bytes = vec![0; values.len() * INT_BYTES];
    NativeEndian::write_i32_into(values, &mut bytes);
    bytes
}

/// A borrowed view of a byte region as native-endian `i32`s.
///
/// Trailing bytes that don’t make up a whole element are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntView<'a> {
    bytes: &'a [u8],
}

impl<'a> IntView<'a> {
    /// Views `bytes` as integers.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        IntView { bytes }
    }

    /// The number of whole integers in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / INT_BYTES
    }

    /// Is the view empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the `index`th integer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        let start = index * INT_BYTES;
        NativeEndian::read_i32(&self.bytes[start..start + INT_BYTES])
    }
}

/// Nullable integers read in place from borrowed byte regions.
///
/// The data region holds 4-byte integers in platform byte order; the
/// validity region holds one presence bit per position, least significant
/// bit first. Neither region is copied, and both must outlive the vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferIntVector<'a> {
    validity: ValidityTracker<PackedBits<'a>>,
    data: IntView<'a>,
}

impl<'a> BufferIntVector<'a> {
    /// Creates a vector over `validity` and `data`.
    ///
    /// A final validity byte may be partially used; its bits past the
    /// data are ignored. Positions past the validity region are absent.
    ///
    /// # Errors
    ///
    /// `ValidityTooLong` if `validity` has more bytes than the data needs,
    /// that is, more than `ceil(data_ints / 8)`.
    pub fn new(validity: &'a [u8], data: &'a [u8]) -> Result<Self> {
        let data = IntView::new(data);
        let validity = ValidityTracker::new(PackedBits::new(validity), data.len() as u64)?;
        debug!(
            "BufferIntVector::new: {} values, {} covered by validity",
            data.len(),
            validity.covered()
        );
        Ok(BufferIntVector { validity, data })
    }

    /// The integer view of the data region.
    #[inline]
    pub fn data(&self) -> IntView<'a> {
        self.data
    }

    /// The packed view of the validity region.
    #[inline]
    pub fn validity(&self) -> PackedBits<'a> {
        *self.validity.validity()
    }
}

impl<'a> Vector for BufferIntVector<'a> {
    type Element = i32;

    /// The number of whole 4-byte integers in the data region.
    #[inline]
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// # Errors
    ///
    /// `PositionOutOfBounds` if `pos >= self.size()`.
    #[inline]
    fn is_present(&self, pos: u64) -> Result<bool> {
        if pos >= self.size() {
            return errors::out_of_bounds(pos, self.size());
        }
        Ok(self.validity.is_present(pos))
    }

    #[inline]
    fn get(&self, pos: u64) -> Result<Option<i32>> {
        if !self.is_present(pos)? {
            return Ok(None);
        }
        Ok(Some(self.data.get(pos as usize)))
    }
}

impl<'a> IntVector for BufferIntVector<'a> {
    #[inline]
    fn get_primitive(&self, pos: u64) -> Result<i32> {
        if !self.is_present(pos)? {
            return errors::null_value(pos);
        }
        Ok(self.data.get(pos as usize))
    }

    fn null_count(&self) -> Result<u64> {
        Ok(self.validity.null_count(self.size()))
    }
}
