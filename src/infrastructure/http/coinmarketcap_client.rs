use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::domain::{
    errors::{FetchError, NetworkResult},
    listing::{Asset, AssetId, ListingRepository, LogoMap},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::http::{API_KEY_HEADER, ApiConfig, InfoResponse, ListingsResponse};

/// REST client for the CoinMarketCap listings and info endpoints.
#[derive(Debug, Clone, Default)]
pub struct CoinMarketCapClient {
    config: ApiConfig,
}

impl CoinMarketCapClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn listings_url(&self) -> String {
        format!(
            "{}?limit={}",
            self.config.endpoint("v1/cryptocurrency/listings/latest"),
            self.config.listing_limit
        )
    }

    pub fn info_url(&self, ids: &[AssetId]) -> String {
        format!("{}?id={}", self.config.endpoint("v1/cryptocurrency/info"), join_ids(ids))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> NetworkResult<T> {
        get_logger().debug(LogComponent::Infrastructure("CoinMarketCap"), &format!("GET {url}"));

        let response = Request::get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(FetchError::status(response.status(), response.status_text()));
        }

        let body = response.text().await.map_err(|e| FetchError::Transport(format!("{e:?}")))?;
        serde_json::from_str::<T>(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl ListingRepository for CoinMarketCapClient {
    async fn fetch_listings(&self) -> NetworkResult<Vec<Asset>> {
        let response: ListingsResponse = self.get_json(&self.listings_url()).await?;
        let assets = response.into_assets();

        get_logger().info(
            LogComponent::Infrastructure("CoinMarketCap"),
            &format!("Loaded {} listings", assets.len()),
        );
        Ok(assets)
    }

    async fn fetch_logos(&self, ids: &[AssetId]) -> NetworkResult<LogoMap> {
        let response: InfoResponse = self.get_json(&self.info_url(ids)).await?;
        let logos = response.into_logo_map();

        get_logger().info(
            LogComponent::Infrastructure("CoinMarketCap"),
            &format!("Loaded {} logos for {} ids", logos.len(), ids.len()),
        );
        Ok(logos)
    }
}

/// `1,1027,825`
pub fn join_ids(ids: &[AssetId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}
