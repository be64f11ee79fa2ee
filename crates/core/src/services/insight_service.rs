use crate::errors::CoreError;
use crate::models::asset::ValuedAsset;

/// Composite score an asset must reach to count as a high-ESG holding.
const HIGH_ESG_THRESHOLD: f64 = 70.0;

/// Derives human-readable observations from a valued asset table.
///
/// Pure business logic — no I/O. The caller must supply at least one
/// asset; an empty table is a precondition failure, not a no-op.
pub struct InsightService;

impl InsightService {
    pub fn new() -> Self {
        Self
    }

    /// Produce the four standard observations, in fixed order:
    /// best composite score, worst composite score, how many assets
    /// clear the high-ESG bar, and the environmental leader.
    ///
    /// The environmental leader is ranked by `esg_e` alone, independent
    /// of the composite ranking. Ties keep the first asset in input
    /// order.
    pub fn generate_insights(&self, assets: &[ValuedAsset]) -> Result<Vec<String>, CoreError> {
        let first = match assets.first() {
            Some(a) => a,
            None => return Err(CoreError::EmptyAssetList),
        };

        let mut best = first;
        let mut worst = first;
        let mut env_leader = first;
        // Strict comparisons so the first occurrence wins on ties.
        for candidate in &assets[1..] {
            if candidate.asset.esg_score > best.asset.esg_score {
                best = candidate;
            }
            if candidate.asset.esg_score < worst.asset.esg_score {
                worst = candidate;
            }
            if candidate.asset.esg_e > env_leader.asset.esg_e {
                env_leader = candidate;
            }
        }

        let high_count = assets
            .iter()
            .filter(|a| a.asset.esg_score >= HIGH_ESG_THRESHOLD)
            .count();

        Ok(vec![
            format!(
                "Highest ESG score: {} ({:.1})",
                best.asset.name, best.asset.esg_score
            ),
            format!(
                "Lowest ESG score: {} ({:.1})",
                worst.asset.name, worst.asset.esg_score
            ),
            format!(
                "{}/{} assets have an ESG score of 70 or above",
                high_count,
                assets.len()
            ),
            format!(
                "Environmental leader: {} ({}/100)",
                env_leader.asset.name, env_leader.asset.esg_e
            ),
        ])
    }
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new()
    }
}
