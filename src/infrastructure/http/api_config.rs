/// CORS relay prepended to every upstream URL.
pub const CORS_PROXY: &str = "https://thingproxy.freeboard.io/fetch/";
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com";
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";
/// Public sandbox key.
pub const SANDBOX_API_KEY: &str = "b54bcf4d-1bca-4e8e-9a24-22ff2c3d462c";
/// Listings requested per load (the upstream default page).
pub const DEFAULT_LISTING_LIMIT: u32 = 100;

/// Compile-time endpoint settings, overridable for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub proxy: String,
    pub base_url: String,
    pub api_key: String,
    pub listing_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            proxy: CORS_PROXY.to_string(),
            base_url: SANDBOX_BASE_URL.to_string(),
            api_key: SANDBOX_API_KEY.to_string(),
            listing_limit: DEFAULT_LISTING_LIMIT,
        }
    }
}

impl ApiConfig {
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = proxy.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_listing_limit(mut self, limit: u32) -> Self {
        self.listing_limit = limit;
        self
    }

    /// Proxy + base URL + path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.proxy,
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
