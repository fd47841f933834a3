use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Upstream asset id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(u64);

impl AssetId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// USD price, shown with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "${:.2}", _0)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Direction of a percentage change; zero counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "change-up",
            Trend::Down => "change-down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "{:.2}%", _0)]
#[serde(transparent)]
pub struct PercentChange(f64);

impl PercentChange {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn trend(&self) -> Trend {
        if self.0 >= 0.0 { Trend::Up } else { Trend::Down }
    }
}

/// Market capitalisation in USD, shown with en-US digit grouping.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketCap(f64);

impl MarketCap {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for MarketCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", group_thousands(self.0))
    }
}

/// Up to three fraction digits, trailing zeros dropped, `,` between thousands.
pub fn group_thousands(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 5);
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Logo image URL; empty when the info endpoint had nothing for the asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, From, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoUrl(String);

impl LogoUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LogoUrl {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_cap_groups_thousands() {
        assert_eq!(MarketCap::new(1_234_567.891).to_string(), "$1,234,567.891");
        assert_eq!(MarketCap::new(1000.0).to_string(), "$1,000");
        assert_eq!(MarketCap::new(999.9996).to_string(), "$1,000");
        assert_eq!(MarketCap::new(0.0).to_string(), "$0");
        assert_eq!(MarketCap::new(12.5).to_string(), "$12.5");
        assert_eq!(MarketCap::new(-4321.0).to_string(), "$-4,321");
    }

    #[test]
    fn price_and_change_use_two_decimals() {
        assert_eq!(Price::new(42.0).to_string(), "$42.00");
        assert_eq!(PercentChange::new(-1.234).to_string(), "-1.23%");
        assert_eq!(PercentChange::new(0.0).trend(), Trend::Up);
        assert_eq!(PercentChange::new(-0.01).trend(), Trend::Down);
    }
}
