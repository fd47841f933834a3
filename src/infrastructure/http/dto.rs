use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::listing::{Asset, AssetId, LogoMap, LogoUrl, Quote};

/// `GET /v1/cryptocurrency/listings/latest`
#[derive(Debug, Deserialize)]
pub struct ListingsResponse {
    pub data: Vec<ListingDto>,
}

#[derive(Debug, Deserialize)]
pub struct ListingDto {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub quote: QuoteEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "USD")]
    pub usd: UsdQuoteDto,
}

#[derive(Debug, Deserialize)]
pub struct UsdQuoteDto {
    pub price: f64,
    pub percent_change_24h: f64,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl From<ListingDto> for Asset {
    fn from(dto: ListingDto) -> Self {
        let usd = dto.quote.usd;
        let quote = Quote::new(
            usd.price,
            usd.percent_change_24h,
            usd.percent_change_7d.unwrap_or(0.0),
            usd.market_cap.unwrap_or(0.0),
        );
        Asset::new(AssetId::from(dto.id), dto.name, dto.symbol, quote)
    }
}

impl ListingsResponse {
    pub fn into_assets(self) -> Vec<Asset> {
        self.data.into_iter().map(Asset::from).collect()
    }
}

/// `GET /v1/cryptocurrency/info?id=...`; keys are ids rendered as strings.
#[derive(Debug, Deserialize)]
pub struct InfoResponse {
    pub data: HashMap<u64, InfoDto>,
}

#[derive(Debug, Deserialize)]
pub struct InfoDto {
    #[serde(default)]
    pub logo: Option<String>,
}

impl InfoResponse {
    /// Entries without a logo are left out.
    pub fn into_logo_map(self) -> LogoMap {
        self.data
            .into_iter()
            .filter_map(|(id, info)| {
                info.logo
                    .filter(|logo| !logo.is_empty())
                    .map(|logo| (AssetId::from(id), LogoUrl::from(logo)))
            })
            .collect()
    }
}
