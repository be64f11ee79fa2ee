use std::collections::HashMap;

/// Maps a market symbol (e.g., "BTCUSDT") to the quantity held.
/// Symbols absent from the map count as a zero holding.
pub type Holdings = HashMap<String, f64>;

/// Built-in sample holdings, applied whenever the caller supplies none.
/// Keeps the tracker producing meaningful output with zero configuration.
#[must_use]
pub fn sample_holdings() -> Holdings {
    HashMap::from([
        ("BTCUSDT".to_string(), 0.5),
        ("ETHUSDT".to_string(), 1.2),
        ("ADAUSDT".to_string(), 100.0),
        ("MATICUSDT".to_string(), 500.0),
        ("SOLUSDT".to_string(), 10.0),
    ])
}
