use std::iter::FromIterator;
use std::ops::Range;

use super::traits::*;
use crate::storage::{Address, BlockType};

/// An owned, growable set of bit positions.
///
/// Setting a position past the current storage grows the set; reading a
/// position past it yields `false`. Vectors take ownership of a `BitSet`
/// when they are built and never modify it afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    blocks: Vec<u64>,
}

impl BitSet {
    /// Creates a new, empty bitset.
    pub fn new() -> Self {
        BitSet { blocks: Vec::new() }
    }

    /// Creates a new, empty bitset with room for `nbits` positions.
    pub fn with_capacity(nbits: u64) -> Self {
        BitSet {
            blocks: Vec::with_capacity(u64::ceil_div_nbits(nbits) as usize),
        }
    }

    /// Creates a bitset with every position in `0..len` set.
    pub fn full(len: u64) -> Self {
        let mut result = Self::with_capacity(len);
        result.set_range(0..len, true);
        result
    }

    fn ensure_blocks(&mut self, block_len: usize) {
        if self.blocks.len() < block_len {
            self.blocks.resize(block_len, 0);
        }
    }

    /// Sets `position` to `value`, growing the storage if needed.
    ///
    /// # Panics
    ///
    /// Panics if `position` is set to `true` and its block index doesn’t
    /// fit in a `usize`.
    pub fn set(&mut self, position: u64, value: bool) {
        let address = match Address::checked_new::<u64>(position) {
            Some(address) => address,
            None if !value => return,
            None => panic!("BitSet::set: index overflow"),
        };
        if address.block_index >= self.blocks.len() {
            if !value {
                return;
            }
            self.ensure_blocks(address.block_index + 1);
        }
        let block = &mut self.blocks[address.block_index];
        *block = block.with_bit(address.bit_offset, value);
    }

    /// Sets every position in `range` to `value`.
    pub fn set_range(&mut self, range: Range<u64>, value: bool) {
        if range.start >= range.end {
            return;
        }
        if value {
            self.ensure_blocks(u64::ceil_div_nbits(range.end) as usize);
        }

        let mut position = range.start;
        while position < range.end {
            let address = match Address::checked_new::<u64>(position) {
                Some(address) if address.block_index < self.blocks.len() => address,
                _ => break,
            };

            let span = (u64::nbits() - address.bit_offset) as u64;
            if address.bit_offset == 0 && range.end - position >= span {
                self.blocks[address.block_index] = if value { !0 } else { 0 };
                position += span;
            } else {
                let block = &mut self.blocks[address.block_index];
                *block = block.with_bit(address.bit_offset, value);
                position += 1;
            }
        }
    }

    /// Whether `position` is in the set.
    #[inline]
    pub fn contains(&self, position: u64) -> bool {
        Address::checked_new::<u64>(position)
            .and_then(|address| {
                self.blocks
                    .get(address.block_index)
                    .map(|block| block.get_bit(address.bit_offset))
            })
            .unwrap_or(false)
    }

    /// One past the highest set position, or 0 when nothing is set.
    pub fn length(&self) -> u64 {
        self.blocks
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, block)| {
                block
                    .highest_bit()
                    .map(|bit| u64::mul_nbits(i) + bit as u64 + 1)
            })
            .unwrap_or(0)
    }

    /// The number of set positions.
    pub fn count_ones(&self) -> u64 {
        self.blocks.iter().map(|block| block.count_ones() as u64).sum()
    }

    /// Whether no position is set.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&block| block == 0)
    }
}

impl BitVec for BitSet {
    type Block = u64;

    #[inline]
    fn bit_len(&self) -> u64 {
        u64::mul_nbits(self.blocks.len())
    }

    #[inline]
    fn block_len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    fn get_block(&self, position: usize) -> u64 {
        self.blocks[position]
    }
}

impl FromIterator<bool> for BitSet {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut result = BitSet::new();
        for (i, value) in iter.into_iter().enumerate() {
            if value {
                result.set(i as u64, true);
            }
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn empty() {
        let set = BitSet::new();
        assert!(set.is_empty());
        assert_eq!(0, set.length());
        assert_eq!(0, set.bit_len());
        assert!(!set.contains(0));
        assert!(!set.contains(1_000));
    }

    #[test]
    fn set_and_contains() {
        let mut set = BitSet::new();
        set.set(3, true);
        set.set(70, true);
        set.set(200, false);

        assert!(set.contains(3));
        assert!(set.contains(70));
        assert!(!set.contains(4));
        assert!(!set.contains(200));
        assert_eq!(128, set.bit_len());
        assert_eq!(71, set.length());
        assert_eq!(2, set.count_ones());

        set.set(70, false);
        assert_eq!(4, set.length());
    }

    #[test]
    fn full() {
        let set = BitSet::full(130);
        assert_eq!(130, set.length());
        assert_eq!(130, set.count_ones());
        assert!(set.contains(129));
        assert!(!set.contains(130));
    }

    #[test]
    fn clear_range() {
        let mut set = BitSet::full(200);
        set.set_range(10..150, false);
        assert_eq!(60, set.count_ones());
        assert!(set.contains(9));
        assert!(!set.contains(10));
        assert!(!set.contains(149));
        assert!(set.contains(150));

        set.set_range(150..1_000, false);
        assert_eq!(10, set.length());
    }

    #[test]
    fn bit_vec_access() {
        let mut set = BitSet::full(64);
        set.set(5, false);
        assert!(!set.get_bit(5));
        assert!(set.get_bit(6));
        assert_eq!(!0u64 ^ (1 << 5), set.get_block(0));
    }

    #[test]
    fn huge_positions() {
        let mut set = BitSet::full(10);
        assert!(!set.contains(u64::MAX));
        set.set(u64::MAX, false);
        set.set_range(u64::MAX - 3..u64::MAX, false);
        assert_eq!(10, set.length());
    }

    #[quickcheck]
    fn collects_bools(bits: Vec<bool>) -> bool {
        let set: BitSet = bits.iter().cloned().collect();
        let last = bits.iter().rposition(|&b| b).map_or(0, |i| i as u64 + 1);
        set.length() == last
            && set.count_ones() == bits.iter().filter(|&&b| b).count() as u64
            && bits
                .iter()
                .enumerate()
                .all(|(i, &b)| set.contains(i as u64) == b)
    }

    #[quickcheck]
    fn range_matches_singles(start: u16, len: u16) -> bool {
        let range = start as u64..start as u64 + len as u64;
        let mut by_range = BitSet::new();
        by_range.set_range(range.clone(), true);
        let mut by_single = BitSet::new();
        for position in range {
            by_single.set(position, true);
        }
        by_range.length() == by_single.length()
            && by_range.count_ones() == by_single.count_ones()
    }
}
