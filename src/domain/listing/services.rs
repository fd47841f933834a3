use std::collections::HashMap;

use crate::domain::listing::{Asset, AssetId, LogoUrl};

/// Logos keyed by asset id, as returned by the info endpoint.
pub type LogoMap = HashMap<AssetId, LogoUrl>;

/// The info endpoint is only asked about this many ids.
pub const LOGO_LOOKUP_LIMIT: usize = 100;

/// Domain service joining listings with their logo metadata.
pub struct ListingEnrichmentService;

impl ListingEnrichmentService {
    /// Ids to look up, in listing order, capped at [`LOGO_LOOKUP_LIMIT`].
    pub fn logo_lookup_ids(assets: &[Asset]) -> Vec<AssetId> {
        assets.iter().take(LOGO_LOOKUP_LIMIT).map(|asset| asset.id).collect()
    }

    /// Attach logos; assets missing from `logos` get an empty logo.
    pub fn merge_logos(assets: Vec<Asset>, logos: &LogoMap) -> Vec<Asset> {
        assets
            .into_iter()
            .map(|asset| {
                let logo = logos.get(&asset.id).cloned().unwrap_or_default();
                asset.with_logo(logo)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::Quote;

    fn asset(id: u64) -> Asset {
        Asset::new(AssetId::from(id), format!("Coin {id}"), format!("C{id}"), Quote::new(1.0, 0.0, 0.0, 0.0))
    }

    #[test]
    fn lookup_ids_are_capped() {
        let assets: Vec<Asset> = (1..=150).map(asset).collect();
        let ids = ListingEnrichmentService::logo_lookup_ids(&assets);
        assert_eq!(ids.len(), LOGO_LOOKUP_LIMIT);
        assert_eq!(ids.first(), Some(&AssetId::from(1)));
        assert_eq!(ids.last(), Some(&AssetId::from(100)));
    }

    #[test]
    fn missing_logo_defaults_to_empty() {
        let mut logos = LogoMap::new();
        logos.insert(AssetId::from(1), LogoUrl::from("https://logo/1.png"));
        let merged = ListingEnrichmentService::merge_logos(vec![asset(1), asset(2)], &logos);
        assert_eq!(merged[0].logo.as_str(), "https://logo/1.png");
        assert!(merged[1].logo.is_empty());
        assert!(!merged[1].has_logo());
    }
}
