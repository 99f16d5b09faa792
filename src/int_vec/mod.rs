//! Nullable 32-bit integer vectors and their storage backings.
//!
//! Three backings share the [`IntVector`] contract:
//!
//!   - [`ArrayIntVector`] owns a `Vec<i32>` and a [`BitSet`](../bit_vec/struct.BitSet.html);
//!   - [`BufferIntVector`] borrows a raw data region and a packed validity
//!     region;
//!   - [`ArrowIntVector`] borrows an external columnar array through
//!     [`ColumnAccessor`].

mod traits;
pub use self::traits::*;

mod array;
pub use self::array::*;

mod buffer;
pub use self::buffer::*;

mod arrow;
pub use self::arrow::*;
