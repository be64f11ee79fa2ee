// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use esg_tracker_core::errors::CoreError;
use esg_tracker_core::models::esg::EsgRecord;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "CoinDCX".into(),
            message: "timeout".into(),
        };
        assert_eq!(err.to_string(), "API error (CoinDCX): timeout");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn reference_data() {
        let err = CoreError::ReferenceData("missing column esg_g".into());
        assert_eq!(
            err.to_string(),
            "ESG reference data error: missing column esg_g"
        );
    }

    #[test]
    fn no_symbol_overlap() {
        let err = CoreError::NoSymbolOverlap;
        assert_eq!(
            err.to_string(),
            "No symbols in common between the price feed and the ESG reference table"
        );
    }

    #[test]
    fn empty_asset_list() {
        let err = CoreError::EmptyAssetList;
        assert_eq!(
            err.to_string(),
            "Cannot derive insights from an empty asset list"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Serialization error: unexpected EOF");
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("negative quantity".into());
        assert_eq!(
            err.to_string(),
            "Holdings validation failed: negative quantity"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn io_error_becomes_reference_data() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::ReferenceData(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn csv_error_becomes_reference_data() {
        // A non-numeric score field fails typed deserialization.
        let data = "market,name,esg_e,esg_s,esg_g\nBTCUSDT,Bitcoin,abc,40,40\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let csv_err = reader
            .deserialize::<EsgRecord>()
            .next()
            .unwrap()
            .unwrap_err();
        let err: CoreError = csv_err.into();
        assert!(matches!(err, CoreError::ReferenceData(_)));
    }

    #[test]
    fn serde_json_error_becomes_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}

// ── Taxonomy distinctions ───────────────────────────────────────────

mod taxonomy {
    use super::*;

    #[test]
    fn no_overlap_is_not_a_fetch_failure() {
        // Callers distinguish "no data" from "source down" by variant.
        let no_data = CoreError::NoSymbolOverlap;
        let source_down = CoreError::Network("dns".into());
        assert!(matches!(no_data, CoreError::NoSymbolOverlap));
        assert!(!matches!(source_down, CoreError::NoSymbolOverlap));
    }

    #[test]
    fn empty_input_is_not_no_overlap() {
        let err = CoreError::EmptyAssetList;
        assert!(!matches!(err, CoreError::NoSymbolOverlap));
    }
}
