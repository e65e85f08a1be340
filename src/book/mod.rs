//! Order book module
//!
//! Maintains aggregated price-level state for one instrument, matching
//! crossing orders against the opposite side.

mod book;
mod metrics;

pub use book::OrderBook;
pub use metrics::BookMetrics;

use serde::{Deserialize, Serialize};

/// Side of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

/// A single level in the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub price: i64,
    pub quantity: i64,
}

impl Level {
    /// Sentinel entry used to pad depth snapshots past the last real level
    pub const EMPTY: Level = Level {
        price: 0,
        quantity: 0,
    };
}

/// Point-in-time book state for publishing or display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookState {
    pub symbol: String,
    pub bids: Vec<Level>,
    pub asks: Vec<Level>,
    pub metrics: BookMetrics,
}
