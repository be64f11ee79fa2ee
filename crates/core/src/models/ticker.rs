use serde::{Deserialize, Serialize};

/// A raw price quote for one market, as supplied by a ticker provider.
///
/// `last_price` is kept in its wire form: exchanges commonly quote
/// prices as decimal strings. Coercion to a number happens during the
/// merge, where an unparseable quote marks the row as missing and
/// drops it, rather than failing the whole feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Market symbol, uppercased (e.g., "BTCUSDT").
    pub symbol: String,

    /// Last traded price as quoted by the exchange.
    pub last_price: String,
}

impl PriceRecord {
    pub fn new(symbol: impl Into<String>, last_price: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            last_price: last_price.into(),
        }
    }

    /// Parse the quoted price.
    ///
    /// Returns `None` for anything that is not a finite, non-negative
    /// number. Such records count as having no price at all.
    #[must_use]
    pub fn parsed_price(&self) -> Option<f64> {
        let price: f64 = self.last_price.trim().parse().ok()?;
        if price.is_finite() && price >= 0.0 {
            Some(price)
        } else {
            None
        }
    }
}
