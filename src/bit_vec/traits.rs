use crate::storage::{Address, BlockType};

/// Read-only bit vector operations.
///
/// Minimal complete definition is `bit_len` and `get_block`. The default
/// `get_bit` loads the containing block and masks out one bit; override it
/// when a cheaper path exists.
pub trait BitVec {
    /// The underlying block type used to store the bits of the vector.
    type Block: BlockType;

    /// The length of the vector in bits.
    fn bit_len(&self) -> u64;

    /// The length of the vector in blocks.
    fn block_len(&self) -> usize {
        Self::Block::ceil_div_nbits(self.bit_len()) as usize
    }

    /// Gets the bit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    fn get_bit(&self, position: u64) -> bool {
        assert!(position < self.bit_len(), "BitVec::get_bit: out of bounds");

        let address = Address::new::<Self::Block>(position);
        self.get_block(address.block_index).get_bit(address.bit_offset)
    }

    /// Gets the block at `position`.
    ///
    /// The zeroth bit of the vector is the least significant bit of the
    /// zeroth block.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    fn get_block(&self, position: usize) -> Self::Block;
}
