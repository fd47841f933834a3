use crypto_listing_wasm::app::AssetRowCells;
use crypto_listing_wasm::domain::listing::{Asset, AssetId, LogoUrl, Quote};

#[test]
fn row_cells_formatting() {
    let asset = Asset::new(
        AssetId::from(1),
        "Bitcoin",
        "BTC",
        Quote::new(64123.456, -1.2345, 3.5, 1_263_000_000_000.5),
    )
    .with_logo(LogoUrl::from("https://example.com/1.png"));

    let cells = AssetRowCells::from(&asset);
    let rendered = format!(
        "{} | {} | {} | {} ({}) | {}",
        cells.name, cells.symbol, cells.price, cells.change_24h, cells.change_class, cells.market_cap
    );
    insta::assert_snapshot!(rendered, @"Bitcoin | BTC | $64123.46 | -1.23% (change-down) | $1,263,000,000,000.5");
}

#[test]
fn zero_change_counts_as_gain() {
    let asset = Asset::new(AssetId::from(2), "Tether", "USDT", Quote::new(1.0, 0.0, 0.0, 0.0));
    let cells = AssetRowCells::from(&asset);
    assert_eq!(cells.change_class, "change-up");
    assert_eq!(cells.change_24h, "0.00%");
    assert_eq!(cells.market_cap, "$0");
}
