use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::errors::CoreError;
use crate::models::esg::EsgRecord;

/// Static ESG reference table keyed by market symbol.
///
/// Loaded as a whole table, once per construction. Every symbol is
/// unique and every component score is a finite number in [0, 100];
/// anything else is rejected up front so the pipeline never has to
/// re-validate reference rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EsgTable {
    records: Vec<EsgRecord>,
}

impl EsgTable {
    /// Load a table from CSV with a `market,name,esg_e,esg_s,esg_g`
    /// header (`symbol` is accepted for the first column too).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records: Vec<EsgRecord> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for row in csv_reader.deserialize() {
            let row: EsgRecord = row?;
            // Re-run the constructor so CSV symbols get the same
            // uppercase normalization as programmatic ones.
            let record = EsgRecord::new(row.symbol, row.name, row.esg_e, row.esg_s, row.esg_g);
            Self::validate_scores(&record)?;
            if !seen.insert(record.symbol.clone()) {
                return Err(CoreError::ReferenceData(format!(
                    "Duplicate symbol in ESG table: {}",
                    record.symbol
                )));
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(CoreError::ReferenceData(
                "ESG table contains no rows".into(),
            ));
        }

        Ok(Self { records })
    }

    /// Load a table from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            CoreError::ReferenceData(format!(
                "Cannot open ESG table {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_csv_reader(file)
    }

    /// Build a table from pre-constructed records (programmatic setup
    /// and tests). Applies the same validation as the CSV path.
    pub fn from_records(records: Vec<EsgRecord>) -> Result<Self, CoreError> {
        let mut seen: HashSet<String> = HashSet::new();
        for record in &records {
            Self::validate_scores(record)?;
            if !seen.insert(record.symbol.clone()) {
                return Err(CoreError::ReferenceData(format!(
                    "Duplicate symbol in ESG table: {}",
                    record.symbol
                )));
            }
        }
        if records.is_empty() {
            return Err(CoreError::ReferenceData(
                "ESG table contains no rows".into(),
            ));
        }
        Ok(Self { records })
    }

    /// Built-in sample table covering the major markets.
    /// The zero-configuration default when no reference CSV is supplied.
    #[must_use]
    pub fn sample() -> Self {
        let rows = [
            ("BTCUSDT", "Bitcoin", 25.0, 52.0, 48.0),
            ("ETHUSDT", "Ethereum", 68.0, 72.0, 74.0),
            ("ADAUSDT", "Cardano", 82.0, 74.0, 78.0),
            ("SOLUSDT", "Solana", 76.0, 70.0, 66.0),
            ("MATICUSDT", "Polygon", 80.0, 68.0, 70.0),
            ("XRPUSDT", "XRP", 62.0, 58.0, 50.0),
            ("DOTUSDT", "Polkadot", 74.0, 66.0, 72.0),
            ("DOGEUSDT", "Dogecoin", 30.0, 46.0, 28.0),
            ("LTCUSDT", "Litecoin", 38.0, 50.0, 52.0),
            ("AVAXUSDT", "Avalanche", 78.0, 64.0, 62.0),
        ];
        let records = rows
            .into_iter()
            .map(|(symbol, name, e, s, g)| EsgRecord::new(symbol, name, e, s, g))
            .collect();
        // The literal rows above are unique and in range.
        Self { records }
    }

    /// All records, in table order.
    #[must_use]
    pub fn records(&self) -> &[EsgRecord] {
        &self.records
    }

    /// Look up a record by symbol (case-insensitive).
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&EsgRecord> {
        let upper = symbol.to_uppercase();
        self.records.iter().find(|r| r.symbol == upper)
    }

    /// Number of reference entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn validate_scores(record: &EsgRecord) -> Result<(), CoreError> {
        for (component, score) in [
            ("esg_e", record.esg_e),
            ("esg_s", record.esg_s),
            ("esg_g", record.esg_g),
        ] {
            if !score.is_finite() || !(0.0..=100.0).contains(&score) {
                return Err(CoreError::ReferenceData(format!(
                    "{} score {score} for {} is outside the 0-100 range",
                    component, record.symbol
                )));
            }
        }
        Ok(())
    }
}
