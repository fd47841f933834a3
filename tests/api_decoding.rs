use crypto_listing_wasm::domain::listing::{AssetId, ListingEnrichmentService};
use crypto_listing_wasm::infrastructure::http::{InfoResponse, ListingsResponse};

const LISTINGS: &str = r#"{
    "status": { "error_code": 0 },
    "data": [
        {
            "id": 1,
            "name": "Bitcoin",
            "symbol": "BTC",
            "slug": "bitcoin",
            "quote": { "USD": {
                "price": 64123.456,
                "percent_change_24h": 1.2345,
                "percent_change_7d": -3.5,
                "market_cap": 1263000000000.5
            } }
        },
        {
            "id": 1027,
            "name": "Ethereum",
            "symbol": "ETH",
            "quote": { "USD": {
                "price": 3100.0,
                "percent_change_24h": -0.5,
                "percent_change_7d": null,
                "market_cap": null
            } }
        }
    ]
}"#;

const INFO: &str = r#"{
    "data": {
        "1": { "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/1.png", "name": "Bitcoin" },
        "1027": { "logo": null }
    }
}"#;

#[test]
fn decodes_listings_and_defaults_missing_numbers() {
    let response: ListingsResponse = serde_json::from_str(LISTINGS).unwrap();
    let assets = response.into_assets();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, AssetId::from(1));
    assert_eq!(assets[0].quote.price.value(), 64123.456);
    assert_eq!(assets[0].quote.percent_change_7d.value(), -3.5);
    assert_eq!(assets[1].quote.percent_change_7d.value(), 0.0);
    assert_eq!(assets[1].quote.market_cap.value(), 0.0);
    assert!(assets.iter().all(|a| a.logo.is_empty()));
}

#[test]
fn merges_logos_by_id() {
    let assets = serde_json::from_str::<ListingsResponse>(LISTINGS).unwrap().into_assets();
    let logos = serde_json::from_str::<InfoResponse>(INFO).unwrap().into_logo_map();

    let merged = ListingEnrichmentService::merge_logos(assets, &logos);
    assert_eq!(merged[0].logo.as_str(), "https://s2.coinmarketcap.com/static/img/coins/64x64/1.png");
    assert_eq!(merged[1].logo.as_str(), "");
}

#[test]
fn malformed_listing_is_a_decode_error() {
    let broken = r#"{ "data": [ { "id": 1, "name": "Bitcoin", "symbol": "BTC", "quote": {} } ] }"#;
    assert!(serde_json::from_str::<ListingsResponse>(broken).is_err());
}
