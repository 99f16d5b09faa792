//! Word types that hold packed bits, and the address arithmetic over them.

use std::fmt;
use std::mem;

use num_traits::{PrimInt, ToPrimitive};

/// Primitive unsigned words usable as bit blocks: `u8` for packed
/// validity regions and `u64` for owned bitsets.
///
/// Bits are numbered from the least significant end of each block, and
/// blocks are laid out in order, so bit `i` of a block sequence lives in
/// block `i / nbits()` at offset `i % nbits()`. All the division and
/// remainder here is done by shifting and masking.
pub trait BlockType: PrimInt + fmt::Debug {
    /// The number of bits in a block.
    #[inline]
    fn nbits() -> usize {
        8 * mem::size_of::<Self>()
    }

    /// Log-base-2 of the number of bits in a block.
    #[inline]
    fn lg_nbits() -> usize {
        Self::nbits().trailing_zeros() as usize
    }

    /// Returns `index / Self::nbits()`.
    ///
    /// There is no check that the result fits in a `usize`.
    #[inline]
    fn div_nbits(index: u64) -> usize {
        (index >> Self::lg_nbits()) as usize
    }

    /// Returns `index / Self::nbits()`, or `None` if that doesn’t fit in a
    /// `usize`.
    #[inline]
    fn checked_div_nbits(index: u64) -> Option<usize> {
        (index >> Self::lg_nbits()).to_usize()
    }

    /// Returns `len / Self::nbits()` rounded up: the number of blocks
    /// needed to hold `len` bits.
    #[inline]
    fn ceil_div_nbits(len: u64) -> u64 {
        let rounded = len >> Self::lg_nbits();
        if Self::mod_nbits(len) == 0 {
            rounded
        } else {
            rounded + 1
        }
    }

    /// Returns `index % Self::nbits()`.
    #[inline]
    fn mod_nbits(index: u64) -> usize {
        (index & (Self::nbits() as u64 - 1)) as usize
    }

    /// Returns `index * Self::nbits()`, converting a block address into the
    /// address of its first bit.
    #[inline]
    fn mul_nbits(index: usize) -> u64 {
        (index as u64) << Self::lg_nbits()
    }

    /// The block with only the `bit_index`th bit set.
    ///
    /// # Precondition
    ///
    /// `bit_index < Self::nbits()`
    #[inline]
    fn nth_mask(bit_index: usize) -> Self {
        Self::one() << bit_index
    }

    /// Extracts the value of the `bit_index`th bit.
    ///
    /// # Panics
    ///
    /// Panics if `bit_index` is out of bounds.
    #[inline]
    fn get_bit(self, bit_index: usize) -> bool {
        assert!(bit_index < Self::nbits(), "Block::get_bit: out of bounds");
        self & Self::nth_mask(bit_index) != Self::zero()
    }

    /// Functionally updates the value of the `bit_index`th bit.
    ///
    /// # Panics
    ///
    /// Panics if `bit_index` is out of bounds.
    #[inline]
    fn with_bit(self, bit_index: usize, bit_value: bool) -> Self {
        assert!(bit_index < Self::nbits(), "Block::with_bit: out of bounds");
        if bit_value {
            self | Self::nth_mask(bit_index)
        } else {
            self & !Self::nth_mask(bit_index)
        }
    }

    /// The index of the most significant set bit, if any.
    #[inline]
    fn highest_bit(self) -> Option<usize> {
        if self == Self::zero() {
            None
        } else {
            Some(Self::nbits() - 1 - self.leading_zeros() as usize)
        }
    }
}

impl BlockType for u8 {}
impl BlockType for u64 {}

/// The address of a bit, split into a block index and a bit offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address {
    /// The index of the block containing the bit.
    pub block_index: usize,
    /// The position of the bit within its block.
    pub bit_offset: usize,
}

impl Address {
    /// Creates an `Address` for `bit_index` in storage made of `Block`s.
    ///
    /// # Panics
    ///
    /// Panics if the block index doesn’t fit in a `usize`.
    #[inline]
    pub fn new<Block: BlockType>(bit_index: u64) -> Self {
        Self::checked_new::<Block>(bit_index).expect("Address::new: index overflow")
    }

    /// Creates an `Address` for `bit_index`, or `None` if the block index
    /// doesn’t fit in a `usize`.
    #[inline]
    pub fn checked_new<Block: BlockType>(bit_index: u64) -> Option<Self> {
        Block::checked_div_nbits(bit_index).map(|block_index| Address {
            block_index,
            bit_offset: Block::mod_nbits(bit_index),
        })
    }
}
