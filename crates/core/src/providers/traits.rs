use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::ticker::PriceRecord;

/// Trait abstraction for live ticker sources.
///
/// An implementor fetches the full ticker table for every tradable
/// market in a single call. If the exchange changes its API or goes
/// away, only that implementation is replaced; the pipeline is
/// untouched. Tests swap in an in-memory mock the same way.
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// Human-readable name of this provider (for errors).
    fn name(&self) -> &str;

    /// Fetch the current ticker table.
    ///
    /// A transport failure or malformed response surfaces as a single
    /// error. Never returns partial data.
    async fn fetch_tickers(&self) -> Result<Vec<PriceRecord>, CoreError>;
}
