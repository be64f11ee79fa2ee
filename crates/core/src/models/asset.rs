use serde::{Deserialize, Serialize};

use super::esg::EsgRating;

/// An asset present in BOTH the live price feed and the ESG reference
/// table, with its derived composite score and rating.
///
/// Produced by the merge: exactly one price and one ESG triple per
/// asset, `esg_score` always the unweighted mean of the triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedAsset {
    /// Market symbol (e.g., "BTCUSDT").
    pub symbol: String,

    /// Human-readable asset name (e.g., "Bitcoin").
    pub name: String,

    /// Last traded price in USD.
    pub last_price: f64,

    /// Environmental sub-score, 0-100.
    pub esg_e: f64,

    /// Social sub-score, 0-100.
    pub esg_s: f64,

    /// Governance sub-score, 0-100.
    pub esg_g: f64,

    /// Composite score: (esg_e + esg_s + esg_g) / 3.
    pub esg_score: f64,

    /// Rating band derived from `esg_score`.
    pub esg_rating: EsgRating,
}

/// A merged asset with the caller's holding applied.
///
/// Zero-holding assets stay in the table with `value_usd = 0`; they
/// contribute nothing to the aggregates but remain visible to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedAsset {
    /// The underlying merged asset.
    pub asset: MergedAsset,

    /// Quantity held. Zero when the symbol is absent from the holdings map.
    pub holding: f64,

    /// Monetary value: holding * last_price.
    pub value_usd: f64,
}
