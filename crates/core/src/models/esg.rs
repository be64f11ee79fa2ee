use serde::{Deserialize, Serialize};

/// ESG reference entry for a single market symbol.
///
/// Component scores live on a 0-100 scale. The composite score is
/// always the unweighted mean of the three components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgRecord {
    /// Market symbol, uppercased (e.g., "BTCUSDT").
    /// Reference CSVs may label this column `market`.
    #[serde(alias = "market")]
    pub symbol: String,

    /// Human-readable asset name (e.g., "Bitcoin").
    pub name: String,

    /// Environmental sub-score, 0-100.
    pub esg_e: f64,

    /// Social sub-score, 0-100.
    pub esg_s: f64,

    /// Governance sub-score, 0-100.
    pub esg_g: f64,
}

impl EsgRecord {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        esg_e: f64,
        esg_s: f64,
        esg_g: f64,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            esg_e,
            esg_s,
            esg_g,
        }
    }

    /// Unweighted mean of the three component scores.
    #[must_use]
    pub fn composite_score(&self) -> f64 {
        (self.esg_e + self.esg_s + self.esg_g) / 3.0
    }
}

/// Categorical rating derived from a composite ESG score.
///
/// Thresholds are closed lower bounds evaluated from best to worst;
/// the first band a score reaches wins. A score of exactly 80 rates
/// `Excellent`, exactly 40 rates `BelowAverage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EsgRating {
    /// Composite score >= 80
    Excellent,
    /// Composite score >= 70
    VeryGood,
    /// Composite score >= 60
    Good,
    /// Composite score >= 50
    Fair,
    /// Composite score >= 40
    BelowAverage,
    /// Everything below 40
    Poor,
}

impl EsgRating {
    /// Map a composite score onto its rating band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            EsgRating::Excellent
        } else if score >= 70.0 {
            EsgRating::VeryGood
        } else if score >= 60.0 {
            EsgRating::Good
        } else if score >= 50.0 {
            EsgRating::Fair
        } else if score >= 40.0 {
            EsgRating::BelowAverage
        } else {
            EsgRating::Poor
        }
    }

    /// Display label, e.g. "A+ (Excellent)".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EsgRating::Excellent => "A+ (Excellent)",
            EsgRating::VeryGood => "A (Very Good)",
            EsgRating::Good => "B+ (Good)",
            EsgRating::Fair => "B (Fair)",
            EsgRating::BelowAverage => "C+ (Below Average)",
            EsgRating::Poor => "C (Poor)",
        }
    }
}

impl std::fmt::Display for EsgRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
