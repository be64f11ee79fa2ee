pub mod errors;
pub mod models;
pub mod providers;
pub mod reference;
pub mod services;

use std::time::{Duration, Instant};

use chrono::Utc;

use errors::CoreError;
use models::holdings::Holdings;
use models::snapshot::Snapshot;
use providers::coindcx::CoinDcxProvider;
use providers::traits::TickerProvider;
use reference::EsgTable;
use services::insight_service::InsightService;
use services::merge_service::MergeService;
use services::portfolio_service::PortfolioService;

/// Default time-to-live for a computed snapshot (30 seconds).
const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(30);

/// Main entry point for the ESG tracker core library.
///
/// Holds the ticker source, the ESG reference table, the caller's
/// holdings (if any), and the services that turn all of that into one
/// consistent portfolio snapshot per refresh cycle.
///
/// Repeated refreshes inside the TTL window are served from the last
/// successful snapshot instead of hitting the exchange again.
#[must_use]
pub struct EsgTracker {
    provider: Box<dyn TickerProvider>,
    esg_table: EsgTable,
    /// Caller-supplied holdings. `None` means the built-in sample map.
    holdings: Option<Holdings>,
    merge_service: MergeService,
    portfolio_service: PortfolioService,
    insight_service: InsightService,
    cached: Option<CachedSnapshot>,
    snapshot_ttl: Duration,
}

/// The last successful pipeline result, timestamped for TTL checks.
struct CachedSnapshot {
    snapshot: Snapshot,
    computed_at: Instant,
}

impl std::fmt::Debug for EsgTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsgTracker")
            .field("provider", &self.provider.name())
            .field("esg_entries", &self.esg_table.len())
            .field("custom_holdings", &self.holdings.is_some())
            .field("cached", &self.cached.is_some())
            .field("snapshot_ttl", &self.snapshot_ttl)
            .finish()
    }
}

impl EsgTracker {
    /// Create a tracker with an explicit provider and reference table.
    pub fn new(provider: Box<dyn TickerProvider>, esg_table: EsgTable) -> Self {
        Self {
            provider,
            esg_table,
            holdings: None,
            merge_service: MergeService::new(),
            portfolio_service: PortfolioService::new(),
            insight_service: InsightService::new(),
            cached: None,
            snapshot_ttl: DEFAULT_SNAPSHOT_TTL,
        }
    }

    /// Create a tracker with the default CoinDCX ticker source and the
    /// built-in sample ESG table. Works with zero configuration.
    pub fn with_defaults() -> Self {
        Self::new(Box::new(CoinDcxProvider::new()), EsgTable::sample())
    }

    // ── Refresh Pipeline ────────────────────────────────────────────

    /// Get a portfolio snapshot.
    ///
    /// Serves the cached snapshot while it is younger than the TTL;
    /// otherwise fetches live tickers and recomputes everything from
    /// scratch. A failed cycle propagates its error and produces no
    /// output. It does not overwrite the last successful snapshot,
    /// which still expires on its own TTL.
    pub async fn refresh(&mut self) -> Result<Snapshot, CoreError> {
        if let Some(cached) = &self.cached {
            if cached.computed_at.elapsed() < self.snapshot_ttl {
                return Ok(cached.snapshot.clone());
            }
        }

        let snapshot = self.compute_snapshot().await?;
        self.cached = Some(CachedSnapshot {
            snapshot: snapshot.clone(),
            computed_at: Instant::now(),
        });
        Ok(snapshot)
    }

    /// Recompute immediately, ignoring any cached snapshot.
    pub async fn refresh_now(&mut self) -> Result<Snapshot, CoreError> {
        self.invalidate();
        self.refresh().await
    }

    /// Run one full pipeline pass: fetch, merge, value, derive insights.
    async fn compute_snapshot(&self) -> Result<Snapshot, CoreError> {
        let prices = self.provider.fetch_tickers().await?;

        let merged = self.merge_service.merge(&prices, self.esg_table.records());
        if merged.is_empty() {
            return Err(CoreError::NoSymbolOverlap);
        }

        let (assets, metrics) = self
            .portfolio_service
            .apply_holdings(&merged, self.holdings.as_ref());
        let insights = self.insight_service.generate_insights(&assets)?;

        Ok(Snapshot {
            as_of: Utc::now(),
            assets,
            metrics,
            insights,
        })
    }

    // ── Cache Management ────────────────────────────────────────────

    /// Drop the cached snapshot. The next `refresh()` recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The last successful snapshot, if any, regardless of freshness.
    #[must_use]
    pub fn cached_snapshot(&self) -> Option<&Snapshot> {
        self.cached.as_ref().map(|c| &c.snapshot)
    }

    /// Set how long a computed snapshot is served before recomputing.
    pub fn set_snapshot_ttl(&mut self, ttl: Duration) {
        self.snapshot_ttl = ttl;
    }

    // ── Holdings Configuration ──────────────────────────────────────

    /// Set the caller's holdings, replacing the built-in sample map.
    ///
    /// Every quantity must be a finite, non-negative number. Symbols
    /// are normalized to uppercase. Invalidates the cached snapshot so
    /// the next refresh reflects the new holdings.
    pub fn set_holdings(&mut self, holdings: Holdings) -> Result<(), CoreError> {
        let mut normalized = Holdings::with_capacity(holdings.len());
        for (symbol, quantity) in holdings {
            if !quantity.is_finite() || quantity < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Holding for {symbol} must be a non-negative number, got {quantity}"
                )));
            }
            normalized.insert(symbol.to_uppercase(), quantity);
        }
        self.holdings = Some(normalized);
        self.invalidate();
        Ok(())
    }

    /// Revert to the built-in sample holdings.
    /// Invalidates the cached snapshot.
    pub fn clear_holdings(&mut self) {
        self.holdings = None;
        self.invalidate();
    }

    /// The caller-supplied holdings, or `None` when the sample map applies.
    #[must_use]
    pub fn holdings(&self) -> Option<&Holdings> {
        self.holdings.as_ref()
    }

    // ── Reference Data ──────────────────────────────────────────────

    /// The loaded ESG reference table.
    #[must_use]
    pub fn esg_table(&self) -> &EsgTable {
        &self.esg_table
    }

    /// Replace the ESG reference table. Invalidates the cached snapshot.
    pub fn set_esg_table(&mut self, esg_table: EsgTable) {
        self.esg_table = esg_table;
        self.invalidate();
    }
}
