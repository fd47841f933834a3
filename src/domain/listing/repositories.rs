use crate::domain::errors::NetworkResult;
use crate::domain::listing::{Asset, AssetId, LogoMap};

/// Source of listings and logo metadata.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait ListingRepository {
    /// Latest listings, logos still empty.
    async fn fetch_listings(&self) -> NetworkResult<Vec<Asset>>;

    /// Logo URLs for the given ids.
    async fn fetch_logos(&self, ids: &[AssetId]) -> NetworkResult<LogoMap>;
}
