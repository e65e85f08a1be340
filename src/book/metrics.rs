//! Order book metrics calculation

use serde::{Deserialize, Serialize};

/// Computed metrics for an order book
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookMetrics {
    /// Mid price (average of best bid and ask)
    pub mid_price: Option<f64>,

    /// Spread in price ticks (best ask - best bid)
    pub spread: Option<i64>,

    /// Simple imbalance: (bid_vol - ask_vol) / (bid_vol + ask_vol)
    pub imbalance: Option<f64>,

    /// Total bid depth (resting quantity)
    pub bid_depth: i64,

    /// Total ask depth (resting quantity)
    pub ask_depth: i64,

    /// Total bid notional (sum of price * quantity)
    pub bid_notional: i64,

    /// Total ask notional (sum of price * quantity)
    pub ask_notional: i64,

    /// Number of bid levels
    pub bid_levels: usize,

    /// Number of ask levels
    pub ask_levels: usize,
}

impl BookMetrics {
    /// Check if the order book is healthy (has valid data)
    pub fn is_healthy(&self) -> bool {
        self.mid_price.is_some()
            && self.spread.is_some()
            && self.bid_levels > 0
            && self.ask_levels > 0
    }

    /// Get volume ratio (bid_depth / ask_depth)
    pub fn volume_ratio(&self) -> Option<f64> {
        if self.ask_depth > 0 {
            Some(self.bid_depth as f64 / self.ask_depth as f64)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics_unhealthy() {
        let metrics = BookMetrics::default();
        assert!(!metrics.is_healthy());
        assert_eq!(metrics.volume_ratio(), None);
    }

    #[test]
    fn test_volume_ratio() {
        let metrics = BookMetrics {
            bid_depth: 30,
            ask_depth: 20,
            ..Default::default()
        };
        assert_eq!(metrics.volume_ratio(), Some(1.5));
    }
}
