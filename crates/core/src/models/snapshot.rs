use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::asset::ValuedAsset;
use super::metrics::PortfolioMetrics;

/// One consistent result of a full pipeline pass: the valued asset
/// table, the aggregate metrics, and the derived insight strings.
///
/// A snapshot is produced whole or not at all. Everything a rendering
/// layer needs is in here; the core exposes no other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this snapshot was computed.
    pub as_of: DateTime<Utc>,

    /// All merged assets with holdings applied, in price-feed order.
    pub assets: Vec<ValuedAsset>,

    /// Value-weighted aggregates over `assets`.
    pub metrics: PortfolioMetrics,

    /// Human-readable observations, in fixed order: best composite
    /// score, worst composite score, high-score count, environmental
    /// leader.
    pub insights: Vec<String>,
}

impl Snapshot {
    /// Assets with a positive holding: the subview a dashboard renders
    /// as "your portfolio".
    #[must_use]
    pub fn held_assets(&self) -> Vec<&ValuedAsset> {
        self.assets.iter().filter(|a| a.holding > 0.0).collect()
    }

    /// The held asset carrying the most USD value, or `None` when
    /// nothing is held. Ties keep the first asset in table order.
    #[must_use]
    pub fn largest_position(&self) -> Option<&ValuedAsset> {
        let mut largest: Option<&ValuedAsset> = None;
        for asset in self.assets.iter().filter(|a| a.holding > 0.0) {
            match largest {
                Some(current) if asset.value_usd <= current.value_usd => {}
                _ => largest = Some(asset),
            }
        }
        largest
    }

    /// The top `n` assets by composite ESG score across the whole
    /// tracked table (holdings and zero-value rows alike), best first.
    #[must_use]
    pub fn top_by_esg(&self, n: usize) -> Vec<&ValuedAsset> {
        let mut ranked: Vec<&ValuedAsset> = self.assets.iter().collect();
        // Stable sort, so tied scores keep table order.
        ranked.sort_by(|a, b| {
            b.asset
                .esg_score
                .partial_cmp(&a.asset.esg_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Export the snapshot as pretty-printed JSON (for display or debugging).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }
}
