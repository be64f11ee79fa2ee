use std::collections::HashMap;

use crate::models::asset::MergedAsset;
use crate::models::esg::{EsgRating, EsgRecord};
use crate::models::ticker::PriceRecord;

/// Joins a live price feed with the ESG reference table.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct MergeService;

impl MergeService {
    pub fn new() -> Self {
        Self
    }

    /// Inner-join prices and ESG records on symbol.
    ///
    /// A symbol appears in the output iff it has BOTH a parseable
    /// price and an ESG entry. Rows failing either condition are
    /// dropped silently: the tracker only follows assets it has ESG
    /// coverage for, and one bad quote must not fail the whole feed.
    ///
    /// Output preserves price-feed order. Empty input on either side
    /// yields empty output.
    #[must_use]
    pub fn merge(&self, prices: &[PriceRecord], esg: &[EsgRecord]) -> Vec<MergedAsset> {
        let by_symbol: HashMap<&str, &EsgRecord> =
            esg.iter().map(|r| (r.symbol.as_str(), r)).collect();

        let mut merged = Vec::new();
        for price in prices {
            let last_price = match price.parsed_price() {
                Some(p) => p,
                None => continue, // malformed quote, drop the row
            };
            let entry = match by_symbol.get(price.symbol.as_str()) {
                Some(e) => *e,
                None => continue, // no ESG coverage for this market
            };

            let esg_score = entry.composite_score();
            merged.push(MergedAsset {
                symbol: price.symbol.clone(),
                name: entry.name.clone(),
                last_price,
                esg_e: entry.esg_e,
                esg_s: entry.esg_s,
                esg_g: entry.esg_g,
                esg_score,
                esg_rating: EsgRating::from_score(esg_score),
            });
        }
        merged
    }
}

impl Default for MergeService {
    fn default() -> Self {
        Self::new()
    }
}
