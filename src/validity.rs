//! Presence tracking shared by the vector backings.
//!
//! A [`Validity`] is any encoding that can say whether a position holds a
//! value. [`ValidityTracker`] wraps one, checks it against the data it
//! describes, and answers presence queries for positions the data holds.

use log::debug;

use crate::bit_vec::{bit, BitSet, BitVec, PackedBits};
use crate::errors::{Error, Result};
use crate::storage::BlockType;

/// Encodings of per-position presence.
pub trait Validity {
    /// The number of positions the encoding represents.
    fn valid_len(&self) -> u64;

    /// Whether `pos` is marked present.
    ///
    /// # Precondition
    ///
    /// `pos < self.valid_len()`
    fn is_valid(&self, pos: u64) -> bool;

    /// Whether the encoding fits data of `data_len` positions.
    #[inline]
    fn fits(&self, data_len: u64) -> bool {
        self.valid_len() <= data_len
    }
}

impl Validity for BitSet {
    /// One past the highest present position.
    #[inline]
    fn valid_len(&self) -> u64 {
        self.length()
    }

    #[inline]
    fn is_valid(&self, pos: u64) -> bool {
        self.contains(pos)
    }
}

impl<'a> Validity for PackedBits<'a> {
    #[inline]
    fn valid_len(&self) -> u64 {
        self.bit_len()
    }

    #[inline]
    fn is_valid(&self, pos: u64) -> bool {
        bit(self.as_bytes(), pos)
    }

    /// Padding bits in the final byte don’t count against the data.
    #[inline]
    fn fits(&self, data_len: u64) -> bool {
        self.block_len() as u64 <= u8::ceil_div_nbits(data_len)
    }
}

/// A validity encoding checked against the length of its data.
///
/// Positions below the covered length consult the encoding; positions at
/// or past it are absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidityTracker<V> {
    validity: V,
    covered: u64,
}

impl<V: Validity> ValidityTracker<V> {
    /// Wraps `validity` for data of `data_len` positions.
    ///
    /// # Errors
    ///
    /// `ValidityTooLong` if the encoding represents more positions than
    /// the data holds.
    pub fn new(validity: V, data_len: u64) -> Result<Self> {
        let valid_len = validity.valid_len();
        if !validity.fits(data_len) {
            debug!(
                "rejecting validity of {} positions for {} data positions",
                valid_len, data_len
            );
            return Err(Error::ValidityTooLong {
                validity: valid_len,
                data: data_len,
            });
        }

        Ok(Self::covering(validity, data_len))
    }

    /// Wraps `validity` that is already known to fit `data_len` positions.
    pub(crate) fn covering(validity: V, data_len: u64) -> Self {
        debug_assert!(validity.fits(data_len));
        let covered = validity.valid_len().min(data_len);
        ValidityTracker { validity, covered }
    }

    /// Whether `pos` holds a value.
    #[inline]
    pub fn is_present(&self, pos: u64) -> bool {
        pos < self.covered && self.validity.is_valid(pos)
    }

    /// The number of positions the encoding decides.
    #[inline]
    pub fn covered(&self) -> u64 {
        self.covered
    }

    /// The wrapped encoding.
    #[inline]
    pub fn validity(&self) -> &V {
        &self.validity
    }

    /// Counts the absent positions among the first `len`.
    pub fn null_count(&self, len: u64) -> u64 {
        (0..len).filter(|&pos| !self.is_present(pos)).count() as u64
    }
}
