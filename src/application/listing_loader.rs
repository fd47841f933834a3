use derive_more::Display;
use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::domain::{
    errors::FetchError,
    listing::{Asset, AssetId, ListingEnrichmentService, ListingRepository, LogoMap},
    logging::{LogComponent, get_logger},
};

/// Which request of the pipeline failed. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FetchStage {
    #[display(fmt = "listings")]
    Listings,
    #[display(fmt = "logos")]
    Logos,
}

/// Step 1 result: listings without logos.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingsFetched {
    pub assets: Vec<Asset>,
}

impl ListingsFetched {
    pub fn logo_lookup_ids(&self) -> Vec<AssetId> {
        ListingEnrichmentService::logo_lookup_ids(&self.assets)
    }
}

/// Step 2 result: listings plus the logo lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LogosFetched {
    pub listings: ListingsFetched,
    pub logos: LogoMap,
}

impl LogosFetched {
    pub fn merge(self) -> Vec<Asset> {
        ListingEnrichmentService::merge_logos(self.listings.assets, &self.logos)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<Asset>),
    Failed { stage: FetchStage, error: FetchError },
    Cancelled,
}

impl LoadOutcome {
    /// Assets to show; empty on failure or cancellation.
    pub fn into_assets(self) -> Vec<Asset> {
        match self {
            LoadOutcome::Loaded(assets) => assets,
            LoadOutcome::Failed { .. } | LoadOutcome::Cancelled => Vec::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadOutcome::Cancelled)
    }
}

/// Cancels an in-flight load. Dropping it does not cancel.
#[derive(Debug, Clone)]
pub struct LoadCancellation(AbortHandle);

impl LoadCancellation {
    pub fn new_pair() -> (Self, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        (Self(handle), registration)
    }

    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Use case: listings, then logos for the first ids, then merge.
///
/// Failures are logged here and turned into an empty result; nothing is
/// retried.
pub struct ListingLoader<R> {
    repository: R,
}

impl<R: ListingRepository> ListingLoader<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn fetch_listings(&self) -> Result<ListingsFetched, FetchError> {
        let assets = self.repository.fetch_listings().await?;
        Ok(ListingsFetched { assets })
    }

    pub async fn fetch_logos(&self, listings: ListingsFetched) -> Result<LogosFetched, FetchError> {
        let ids = listings.logo_lookup_ids();
        let logos = self.repository.fetch_logos(&ids).await?;
        Ok(LogosFetched { listings, logos })
    }

    pub async fn load(&self) -> LoadOutcome {
        let listings = match self.fetch_listings().await {
            Ok(listings) => listings,
            Err(error) => return Self::failed(FetchStage::Listings, error),
        };

        let enriched = match self.fetch_logos(listings).await {
            Ok(enriched) => enriched,
            Err(error) => return Self::failed(FetchStage::Logos, error),
        };

        let assets = enriched.merge();
        get_logger().info(
            LogComponent::Application("ListingLoader"),
            &format!("Listing ready: {} assets", assets.len()),
        );
        LoadOutcome::Loaded(assets)
    }

    /// [`Self::load`], stopped early once the paired handle is aborted.
    pub async fn load_until_cancelled(&self, registration: AbortRegistration) -> LoadOutcome {
        match Abortable::new(self.load(), registration).await {
            Ok(outcome) => outcome,
            Err(_aborted) => {
                get_logger().debug(
                    LogComponent::Application("ListingLoader"),
                    "Listing load cancelled before completion",
                );
                LoadOutcome::Cancelled
            }
        }
    }

    fn failed(stage: FetchStage, error: FetchError) -> LoadOutcome {
        get_logger().error(
            LogComponent::Application("ListingLoader"),
            &format!("Failed to fetch crypto data or logos ({stage}): {error}"),
        );
        LoadOutcome::Failed { stage, error }
    }
}
