//! Nullable 32-bit integer vectors with interchangeable storage.
//!
//! A nullable vector holds, at each position, either a value or nothing.
//! This crate gives one read-only contract for such vectors,
//! [`IntVector`](int_vec/trait.IntVector.html), and three backings for it:
//!
//!   - [`ArrayIntVector`](int_vec/struct.ArrayIntVector.html): an owned
//!     `Vec<i32>` plus an owned [bitset](bit_vec/struct.BitSet.html);
//!   - [`BufferIntVector`](int_vec/struct.BufferIntVector.html): borrowed
//!     raw bytes, with presence in a [packed bit
//!     view](bit_vec/struct.PackedBits.html);
//!   - [`ArrowIntVector`](int_vec/struct.ArrowIntVector.html): a
//!     pass-through adapter over an external columnar array, such as an
//!     Arrow `Int32Array`.
//!
//! Code written against the contract runs unchanged on any backing, so
//! the backings can be compared directly (see `benches/`).
//!
//! # Example
//!
//! ```rust
//! use nullvec::{ArrayIntVector, BufferIntVector, IntVector, Vector};
//! use nullvec::bit_vec::pack_bits;
//! use nullvec::int_vec::encode_values;
//!
//! let array: ArrayIntVector = vec![Some(7), None, Some(42)].into_iter().collect();
//!
//! let data = encode_values(&[7, 0, 42]);
//! let validity = pack_bits(vec![true, false, true]);
//! let buffer = BufferIntVector::new(&validity, &data).unwrap();
//!
//! for v in &[&array as &dyn IntVector, &buffer] {
//!     assert_eq!(Ok(None), v.get(1));
//!     assert_eq!(Ok(49), v.sum_range(0, 3));
//! }
//! ```

#![warn(missing_docs)]

mod errors;
pub use crate::errors::{Error, ErrorKind, Result};

pub mod storage;

pub mod bit_vec;
pub use crate::bit_vec::{BitSet, PackedBits};

pub mod validity;
pub use crate::validity::{Validity, ValidityTracker};

pub mod int_vec;
pub use crate::int_vec::{
    ArrayIntVector, ArrowIntVector, BufferIntVector, ColumnAccessor, IntVector, Vector,
};
