use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::traits::TickerProvider;
use crate::errors::CoreError;
use crate::models::ticker::PriceRecord;

const BASE_URL: &str = "https://api.coindcx.com";

/// CoinDCX public ticker provider.
///
/// - **Free**: no API key required.
/// - **Data**: one `/exchange/ticker` call returns every tradable market.
/// - Prices arrive as decimal strings; quotes that fail to parse are
///   filtered out later during the merge, not here.
pub struct CoinDcxProvider {
    client: Client,
}

impl CoinDcxProvider {
    pub fn new() -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinDcxProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinDCX API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct TickerEntry {
    market: String,
    #[serde(default)]
    last_price: Option<RawPrice>,
}

/// CoinDCX quotes prices as strings; tolerate plain numbers too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
}

/// Decode a raw `/exchange/ticker` JSON payload into price records.
///
/// Entries without a `last_price` get an empty quote, which the merge
/// treats as a missing price. Unknown response fields are ignored.
pub fn parse_ticker_payload(body: &str) -> Result<Vec<PriceRecord>, CoreError> {
    let entries: Vec<TickerEntry> =
        serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: "CoinDCX".into(),
            message: format!("Failed to parse ticker response: {e}"),
        })?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            let last_price = match entry.last_price {
                Some(RawPrice::Text(s)) => s,
                Some(RawPrice::Number(n)) => n.to_string(),
                None => String::new(),
            };
            PriceRecord::new(entry.market, last_price)
        })
        .collect())
}

#[async_trait]
impl TickerProvider for CoinDcxProvider {
    fn name(&self) -> &str {
        "CoinDCX"
    }

    async fn fetch_tickers(&self) -> Result<Vec<PriceRecord>, CoreError> {
        let url = format!("{BASE_URL}/exchange/ticker");

        let body = self.client.get(&url).send().await?.text().await?;

        parse_ticker_payload(&body)
    }
}
