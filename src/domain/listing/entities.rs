pub use super::value_objects::{AssetId, LogoUrl, MarketCap, PercentChange, Price};
use serde::{Deserialize, Serialize};

/// USD quote attached to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: Price,
    pub percent_change_24h: PercentChange,
    pub percent_change_7d: PercentChange,
    pub market_cap: MarketCap,
}

impl Quote {
    pub fn new(
        price: f64,
        percent_change_24h: f64,
        percent_change_7d: f64,
        market_cap: f64,
    ) -> Self {
        Self {
            price: Price::new(price),
            percent_change_24h: PercentChange::new(percent_change_24h),
            percent_change_7d: PercentChange::new(percent_change_7d),
            market_cap: MarketCap::new(market_cap),
        }
    }
}

/// Domain entity - one listed cryptocurrency.
///
/// Immutable once fetched; a refresh replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub logo: LogoUrl,
    pub quote: Quote,
}

impl Asset {
    pub fn new(id: AssetId, name: impl Into<String>, symbol: impl Into<String>, quote: Quote) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            logo: LogoUrl::default(),
            quote,
        }
    }

    pub fn with_logo(mut self, logo: LogoUrl) -> Self {
        self.logo = logo;
        self
    }

    pub fn has_logo(&self) -> bool {
        !self.logo.is_empty()
    }

    /// `Bitcoin (BTC)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}
