//! Bit vector interfaces, the packed validity view, and an owned bitset.

mod traits;
pub use self::traits::*;

mod packed;
pub use self::packed::*;

mod bit_set;
pub use self::bit_set::*;
