use super::traits::*;
use crate::errors::{self, Result};
use crate::int_vec::Vector;

/// Decodes bit `pos` of a packed byte region.
///
/// Bit `pos & 7` of byte `pos >> 3` holds the value, least significant
/// bit first. Nothing is checked beyond the slice indexing itself.
///
/// # Panics
///
/// Panics if `pos >= bytes.len() * 8`.
#[inline(always)]
pub fn bit(bytes: &[u8], pos: u64) -> bool {
    (bytes[(pos >> 3) as usize] >> (pos & 7)) & 1 != 0
}

/// Packs booleans one per bit, least significant bit first.
///
/// The last byte is padded with unset bits.
pub fn pack_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let mut result = Vec::new();
    for (i, value) in bits.into_iter().enumerate() {
        if i & 7 == 0 {
            result.push(0);
        }
        if value {
            if let Some(last) = result.last_mut() {
                *last |= 1 << (i & 7);
            }
        }
    }
    result
}

/// A borrowed, read-only view of a byte region as packed booleans.
///
/// The view covers `bytes.len() * 8` positions and never copies or owns
/// the bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedBits<'a> {
    bytes: &'a [u8],
}

impl<'a> PackedBits<'a> {
    /// Views `bytes` as packed bits.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        PackedBits { bytes }
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> BitVec for PackedBits<'a> {
    type Block = u8;

    #[inline]
    fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }

    #[inline]
    fn block_len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn get_bit(&self, position: u64) -> bool {
        bit(self.bytes, position)
    }

    #[inline]
    fn get_block(&self, position: usize) -> u8 {
        self.bytes[position]
    }
}

impl<'a> Vector for PackedBits<'a> {
    type Element = bool;

    #[inline]
    fn size(&self) -> u64 {
        self.bit_len()
    }

    /// Every position inside the region holds a boolean.
    fn is_present(&self, pos: u64) -> Result<bool> {
        if pos >= self.size() {
            return errors::out_of_bounds(pos, self.size());
        }
        Ok(true)
    }

    fn get(&self, pos: u64) -> Result<Option<bool>> {
        self.is_present(pos)?;
        Ok(Some(bit(self.bytes, pos)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::ErrorKind;
    use quickcheck_macros::quickcheck;

    #[test]
    fn decode_known_pattern() {
        let region = [0b0000_0101u8];
        assert!(bit(&region, 0));
        assert!(!bit(&region, 1));
        assert!(bit(&region, 2));
        for pos in 3..8 {
            assert!(!bit(&region, pos), "bit {} should be clear", pos);
        }
    }

    #[test]
    fn decode_second_byte() {
        let region = [0u8, 0b1000_0000];
        assert!(!bit(&region, 7));
        assert!(!bit(&region, 8));
        assert!(bit(&region, 15));
    }

    #[test]
    #[should_panic]
    fn decode_past_region() {
        bit(&[0xFFu8], 8);
    }

    #[test]
    fn pack() {
        assert_eq!(Vec::<u8>::new(), pack_bits(Vec::new()));
        assert_eq!(vec![0b0000_0101], pack_bits(vec![true, false, true]));
        assert_eq!(
            vec![0xFF, 0b0000_0001],
            pack_bits(vec![true; 9])
        );
    }

    #[quickcheck]
    fn pack_then_view(bits: Vec<bool>) -> bool {
        let bytes = pack_bits(bits.iter().cloned());
        let view = PackedBits::new(&bytes);
        view.block_len() == (bits.len() + 7) / 8
            && bits
                .iter()
                .enumerate()
                .all(|(i, &b)| view.get_bit(i as u64) == b)
    }

    #[test]
    fn view_as_vector() {
        let bytes = [0b0000_0110u8];
        let view = PackedBits::new(&bytes);

        assert_eq!(8, view.size());
        assert_eq!(Ok(true), view.is_present(0));
        assert_eq!(Ok(Some(false)), view.get(0));
        assert_eq!(Ok(Some(true)), view.get(1));
        assert_eq!(Ok(Some(true)), view.get(2));
        assert_eq!(
            ErrorKind::Range,
            view.get(8).unwrap_err().kind()
        );
    }

    #[test]
    fn blocks() {
        let bytes = [0xA5u8, 0x0F];
        let view = PackedBits::new(&bytes);
        assert_eq!(16, view.bit_len());
        assert_eq!(0xA5, view.get_block(0));
        assert_eq!(0x0F, view.get_block(1));
    }
}
