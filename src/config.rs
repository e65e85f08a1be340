//! Configuration module for the book demo

use serde::Deserialize;
use std::env;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Instrument label attached to the book (e.g. "BTCUSDT")
    pub symbol: String,

    /// Depth levels reported in snapshots
    pub depth_levels: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            symbol: env::var("SYMBOL")
                .unwrap_or_else(|_| "BTCUSDT".to_string())
                .trim()
                .to_uppercase(),
            depth_levels: env::var("DEPTH_LEVELS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "BTCUSDT".to_string(),
            depth_levels: 3,
        }
    }
}
