//! Core order book implementation
//!
//! Uses BTreeMap for efficient sorted price level management. Incoming
//! quantity that crosses the opposite side is matched against the best
//! opposite levels before any remainder is rested.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::{BookMetrics, BookState, Level, Side};
use crate::error::{BookError, Result};

/// Resting state at one price, keyed by price in the side's map
#[derive(Debug, Clone, Copy, Default)]
struct Resting {
    quantity: i64,
    /// Cached price * quantity, recomputed on every quantity change
    notional: i64,
}

/// Aggregated order book for a single instrument
///
/// Quantity is aggregated per price level; there is no per-order identity
/// or time priority within a level.
#[derive(Debug)]
pub struct OrderBook {
    symbol: String,
    /// Bids sorted by price descending (highest first)
    bids: BTreeMap<Reverse<i64>, Resting>,
    /// Asks sorted by price ascending (lowest first)
    asks: BTreeMap<i64, Resting>,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
        }
    }

    /// Add incoming quantity at a price.
    ///
    /// Crossing quantity executes against the best opposite levels first;
    /// any remainder is added to the level at `price` on `side`, creating
    /// it if absent. After return the book never crosses: either a side is
    /// empty or `best_bid < best_ask`.
    ///
    /// A zero quantity is accepted and does nothing.
    pub fn add(&mut self, price: i64, quantity: i64, side: Side) -> Result<()> {
        if price <= 0 {
            return Err(BookError::InvalidPrice(price));
        }
        if quantity < 0 {
            return Err(BookError::InvalidQuantity(quantity));
        }

        let mut remaining = quantity;

        match side {
            Side::Bid => {
                while remaining > 0 {
                    let Some(mut entry) = self.asks.first_entry() else {
                        break;
                    };
                    let best = *entry.key();
                    if best > price {
                        break;
                    }
                    let level = entry.get_mut();
                    if level.quantity <= remaining {
                        remaining -= level.quantity;
                        entry.remove();
                    } else {
                        level.quantity -= remaining;
                        level.notional = best * level.quantity;
                        remaining = 0;
                    }
                }
                if remaining > 0 {
                    let level = self.bids.entry(Reverse(price)).or_default();
                    level.quantity += remaining;
                    level.notional = price * level.quantity;
                }
            }
            Side::Ask => {
                while remaining > 0 {
                    let Some(mut entry) = self.bids.first_entry() else {
                        break;
                    };
                    let Reverse(best) = *entry.key();
                    if best < price {
                        break;
                    }
                    let level = entry.get_mut();
                    if level.quantity <= remaining {
                        remaining -= level.quantity;
                        entry.remove();
                    } else {
                        level.quantity -= remaining;
                        level.notional = best * level.quantity;
                        remaining = 0;
                    }
                }
                if remaining > 0 {
                    let level = self.asks.entry(price).or_default();
                    level.quantity += remaining;
                    level.notional = price * level.quantity;
                }
            }
        }

        Ok(())
    }

    /// Remove previously rested quantity from a level.
    ///
    /// Deleting the full resting quantity removes the level. Validation
    /// happens before any mutation: a failed delete leaves the level
    /// untouched.
    pub fn delete(&mut self, price: i64, quantity: i64, side: Side) -> Result<()> {
        if price <= 0 {
            return Err(BookError::InvalidPrice(price));
        }
        if quantity <= 0 {
            return Err(BookError::InvalidQuantity(quantity));
        }

        match side {
            Side::Bid => Self::delete_level(&mut self.bids, Reverse(price), price, quantity, side),
            Side::Ask => Self::delete_level(&mut self.asks, price, price, quantity, side),
        }
    }

    fn delete_level<K: Ord + Copy>(
        map: &mut BTreeMap<K, Resting>,
        key: K,
        price: i64,
        quantity: i64,
        side: Side,
    ) -> Result<()> {
        let resting = match map.get(&key) {
            Some(level) => level.quantity,
            None => return Err(BookError::LevelNotFound { side, price }),
        };

        if quantity > resting {
            return Err(BookError::InsufficientQuantity {
                price,
                requested: quantity,
                resting,
            });
        }

        if quantity == resting {
            map.remove(&key);
        } else if let Some(level) = map.get_mut(&key) {
            level.quantity -= quantity;
            level.notional = price * level.quantity;
        }

        Ok(())
    }

    /// Get best bid price
    pub fn best_bid(&self) -> Result<i64> {
        self.bids
            .first_key_value()
            .map(|(&Reverse(p), _)| p)
            .ok_or(BookError::EmptyBook(Side::Bid))
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Result<i64> {
        self.asks
            .first_key_value()
            .map(|(&p, _)| p)
            .ok_or(BookError::EmptyBook(Side::Ask))
    }

    /// Snapshot the top `n` levels of one side, best first.
    ///
    /// Always returns exactly `n` entries; entries past the last real
    /// level are `(0, 0)`. The snapshot is a copy and does not observe
    /// later mutations.
    pub fn depth(&self, side: Side, n: usize) -> Vec<Level> {
        let mut levels: Vec<Level> = match side {
            Side::Bid => self
                .bids
                .iter()
                .take(n)
                .map(|(&Reverse(price), r)| Level {
                    price,
                    quantity: r.quantity,
                })
                .collect(),
            Side::Ask => self
                .asks
                .iter()
                .take(n)
                .map(|(&price, r)| Level {
                    price,
                    quantity: r.quantity,
                })
                .collect(),
        };
        levels.resize(n, Level::EMPTY);
        levels
    }

    /// Check whether a side has no levels
    pub fn is_empty(&self, side: Side) -> bool {
        match side {
            Side::Bid => self.bids.is_empty(),
            Side::Ask => self.asks.is_empty(),
        }
    }

    /// Number of levels on a side
    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::Bid => self.bids.len(),
            Side::Ask => self.asks.len(),
        }
    }

    /// Get mid price
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Ok(bid), Ok(ask)) => Some((bid + ask) as f64 / 2.0),
            _ => None,
        }
    }

    /// Get spread in price ticks
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Ok(bid), Ok(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Calculate order book imbalance at top N levels
    pub fn imbalance(&self, levels: usize) -> Option<f64> {
        let bid_volume: i64 = self.bids.iter().take(levels).map(|(_, r)| r.quantity).sum();
        let ask_volume: i64 = self.asks.iter().take(levels).map(|(_, r)| r.quantity).sum();

        let total = bid_volume + ask_volume;
        if total > 0 {
            Some((bid_volume - ask_volume) as f64 / total as f64)
        } else {
            None
        }
    }

    /// Get current state for publishing
    pub fn state(&self) -> BookState {
        BookState {
            symbol: self.symbol.clone(),
            bids: self
                .bids
                .iter()
                .map(|(&Reverse(price), r)| Level {
                    price,
                    quantity: r.quantity,
                })
                .collect(),
            asks: self
                .asks
                .iter()
                .map(|(&price, r)| Level {
                    price,
                    quantity: r.quantity,
                })
                .collect(),
            metrics: self.metrics(),
        }
    }

    /// Calculate order book metrics
    pub fn metrics(&self) -> BookMetrics {
        BookMetrics {
            mid_price: self.mid_price(),
            spread: self.spread(),
            imbalance: self.imbalance(5),
            bid_depth: self.bids.values().map(|r| r.quantity).sum(),
            ask_depth: self.asks.values().map(|r| r.quantity).sum(),
            bid_notional: self.bids.values().map(|r| r.notional).sum(),
            ask_notional: self.asks.values().map(|r| r.notional).sum(),
            bid_levels: self.bids.len(),
            ask_levels: self.asks.len(),
        }
    }
}
