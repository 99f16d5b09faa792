//! Errors reported by vector construction and access.

use thiserror::Error;

/// The broad class of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A position or range fell outside the vector.
    Range,
    /// A non-nullable accessor was used on an absent position.
    NullValue,
    /// Construction inputs were inconsistent with each other.
    InvalidArgument,
}

/// Error variants for nullable vector operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A single position was not below the vector size.
    #[error("position {position} is out of bound ({size})")]
    PositionOutOfBounds {
        /// The rejected position.
        position: u64,
        /// The size of the vector.
        size: u64,
    },

    /// The lower end of a range was negative or past the size.
    #[error(
        "lower bound must be equal or greater than 0 and lower or equal to \
         the size ({size}) but {from} was found"
    )]
    LowerBoundOutOfRange {
        /// The rejected lower bound.
        from: i64,
        /// The size of the vector.
        size: u64,
    },

    /// The upper end of a range was below the lower end or past the size.
    #[error(
        "upper bound must be equal or greater than lower bound ({from}) and \
         lower or equal to the size ({size}) but {to} was found"
    )]
    UpperBoundOutOfRange {
        /// The accepted lower bound.
        from: i64,
        /// The rejected upper bound.
        to: i64,
        /// The size of the vector.
        size: u64,
    },

    /// The non-nullable accessor found no value at the position.
    #[error("position {0} is null")]
    NullValue(u64),

    /// The validity covers more positions than there is data for.
    #[error("validity is longer than data ({validity} vs {data})")]
    ValidityTooLong {
        /// Positions claimed by the validity.
        validity: u64,
        /// Positions held by the data.
        data: u64,
    },
}

impl Error {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::PositionOutOfBounds { .. }
            | Error::LowerBoundOutOfRange { .. }
            | Error::UpperBoundOutOfRange { .. } => ErrorKind::Range,
            Error::NullValue(_) => ErrorKind::NullValue,
            Error::ValidityTooLong { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// A specialized `Result` for vector operations.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn out_of_bounds<A>(position: u64, size: u64) -> Result<A> {
    Err(Error::PositionOutOfBounds { position, size })
}

pub(crate) fn null_value<A>(position: u64) -> Result<A> {
    Err(Error::NullValue(position))
}
