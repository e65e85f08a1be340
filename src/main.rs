//! Matchbook - order book demonstration driver
//!
//! Seeds a book, reports best prices and depth, deletes resting quantity,
//! and sends a crossing order through the matching loop.

use tracing::{info, Level as LogLevel};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use matchbook::{Config, OrderBook, Side};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(LogLevel::INFO.into()))
        .init();

    let config = Config::load()?;
    info!(symbol = %config.symbol, depth_levels = config.depth_levels, "Configuration loaded");

    let mut book = OrderBook::new(&config.symbol);

    book.add(105, 5, Side::Bid)?;
    book.add(100, 10, Side::Bid)?;
    book.add(90, 15, Side::Bid)?;

    book.add(112, 6, Side::Ask)?;
    book.add(110, 8, Side::Ask)?;
    book.add(115, 7, Side::Ask)?;

    report(&book, config.depth_levels, "seeded");

    book.delete(100, 5, Side::Bid)?;
    book.delete(110, 4, Side::Ask)?;
    report(&book, config.depth_levels, "after deletes");

    // Crosses the resting asks at 110 and 112
    book.add(113, 9, Side::Bid)?;
    report(&book, config.depth_levels, "after crossing bid");

    println!("{}", serde_json::to_string_pretty(&book.state())?);

    Ok(())
}

/// Log best prices and top-of-book depth for both sides
fn report(book: &OrderBook, depth_levels: usize, stage: &str) {
    info!(
        stage,
        best_bid = ?book.best_bid().ok(),
        best_ask = ?book.best_ask().ok(),
        "Top of book"
    );

    for level in book.depth(Side::Bid, depth_levels) {
        info!(stage, price = level.price, quantity = level.quantity, "Bid level");
    }
    for level in book.depth(Side::Ask, depth_levels) {
        info!(stage, price = level.price, quantity = level.quantity, "Ask level");
    }
}
