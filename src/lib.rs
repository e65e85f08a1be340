//! Matchbook - Aggregated Limit Order Book
//!
//! This crate provides an in-memory aggregated limit order book: sorted
//! bid and ask price levels, crossing-order matching, best-price access,
//! and padded depth snapshots.

pub mod book;
pub mod config;
pub mod error;

pub use book::{BookMetrics, BookState, Level, OrderBook, Side};
pub use config::Config;
pub use error::{BookError, Result};
