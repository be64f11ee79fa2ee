use crate::models::asset::{MergedAsset, ValuedAsset};
use crate::models::holdings::{sample_holdings, Holdings};
use crate::models::metrics::PortfolioMetrics;

/// Applies a holdings map to merged assets and computes value-weighted
/// aggregate metrics.
///
/// Pure business logic — no I/O, no API calls. Deterministic for
/// identical inputs.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Value every merged asset and aggregate the portfolio metrics.
    ///
    /// With no holdings supplied, the built-in sample map applies.
    /// Symbols missing from the map get a zero holding: they stay in
    /// the output table with `value_usd = 0` and contribute nothing
    /// to the aggregates.
    ///
    /// When the total value is zero, every weighted score is forced to
    /// 0 instead of dividing 0 by 0.
    #[must_use]
    pub fn apply_holdings(
        &self,
        merged: &[MergedAsset],
        holdings: Option<&Holdings>,
    ) -> (Vec<ValuedAsset>, PortfolioMetrics) {
        let sample;
        let holdings = match holdings {
            Some(map) => map,
            None => {
                sample = sample_holdings();
                &sample
            }
        };

        let mut valued = Vec::with_capacity(merged.len());
        let mut total_value = 0.0;
        let mut num_holdings = 0;

        for asset in merged {
            let holding = holdings.get(&asset.symbol).copied().unwrap_or(0.0);
            let value_usd = holding * asset.last_price;
            total_value += value_usd;
            if holding > 0.0 {
                num_holdings += 1;
            }
            valued.push(ValuedAsset {
                asset: asset.clone(),
                holding,
                value_usd,
            });
        }

        let metrics = if total_value > 0.0 {
            let mut esg_sum = 0.0;
            let mut env_sum = 0.0;
            let mut social_sum = 0.0;
            let mut governance_sum = 0.0;
            for v in &valued {
                esg_sum += v.asset.esg_score * v.value_usd;
                env_sum += v.asset.esg_e * v.value_usd;
                social_sum += v.asset.esg_s * v.value_usd;
                governance_sum += v.asset.esg_g * v.value_usd;
            }
            PortfolioMetrics {
                total_value,
                weighted_esg: esg_sum / total_value,
                weighted_environmental: env_sum / total_value,
                weighted_social: social_sum / total_value,
                weighted_governance: governance_sum / total_value,
                num_holdings,
            }
        } else {
            PortfolioMetrics {
                total_value,
                weighted_esg: 0.0,
                weighted_environmental: 0.0,
                weighted_social: 0.0,
                weighted_governance: 0.0,
                num_holdings,
            }
        };

        (valued, metrics)
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
