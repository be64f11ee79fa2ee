use serde::{Deserialize, Serialize};

/// Value-weighted aggregate metrics over a valued asset table.
///
/// Each weighted score is sum(score_i * value_usd_i) / total_value.
/// When `total_value` is zero every weighted score is defined as 0;
/// an empty portfolio has no ESG profile, not an undefined one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Total portfolio value in USD (sum over all assets).
    pub total_value: f64,

    /// Value-weighted composite ESG score.
    pub weighted_esg: f64,

    /// Value-weighted environmental sub-score.
    pub weighted_environmental: f64,

    /// Value-weighted social sub-score.
    pub weighted_social: f64,

    /// Value-weighted governance sub-score.
    pub weighted_governance: f64,

    /// Number of assets with a positive holding.
    pub num_holdings: usize,
}
