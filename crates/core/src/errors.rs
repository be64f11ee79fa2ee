use thiserror::Error;

/// Unified error type for the entire esg-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Price feed ──────────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Reference data ──────────────────────────────────────────────
    #[error("ESG reference data error: {0}")]
    ReferenceData(String),

    // ── Pipeline ────────────────────────────────────────────────────
    /// The feed arrived fine but covers no symbol the ESG table knows.
    /// Distinct from a fetch failure so callers can tell "no data"
    /// apart from "source down".
    #[error("No symbols in common between the price feed and the ESG reference table")]
    NoSymbolOverlap,

    #[error("Cannot derive insights from an empty asset list")]
    EmptyAssetList,

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Holdings validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::ReferenceData(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::ReferenceData(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(e.to_string())
    }
}
