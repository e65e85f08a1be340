//! Error types for book operations

use thiserror::Error;

use crate::book::Side;

/// Order book errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    #[error("invalid price {0}: must be positive")]
    InvalidPrice(i64),

    #[error("invalid quantity {0}: must be positive")]
    InvalidQuantity(i64),

    #[error("no resting level at price {price} on {side:?} side")]
    LevelNotFound { side: Side, price: i64 },

    #[error("delete of {requested} exceeds resting quantity {resting} at price {price}")]
    InsufficientQuantity {
        price: i64,
        requested: i64,
        resting: i64,
    },

    #[error("{0:?} side is empty")]
    EmptyBook(Side),
}

pub type Result<T> = std::result::Result<T, BookError>;
