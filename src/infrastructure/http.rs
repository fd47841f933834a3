//! HTTP access to the CoinMarketCap API through a CORS relay.

pub mod api_config;
pub mod coinmarketcap_client;
pub mod dto;

pub use api_config::*;
pub use coinmarketcap_client::*;
pub use dto::*;
