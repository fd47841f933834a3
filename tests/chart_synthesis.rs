use crypto_listing_wasm::domain::chart::{ChartFilter, ChartSynthesizer, NoiseSource};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

/// Replays the given samples in a loop.
struct ReplayNoise {
    samples: Vec<f64>,
    cursor: usize,
}

impl ReplayNoise {
    fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl NoiseSource for ReplayNoise {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.5;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

fn unit(raw: u32) -> f64 {
    raw as f64 / (u32::MAX as f64 + 1.0)
}

#[test]
fn day_series_has_hourly_labels() {
    let mut noise = ReplayNoise::new(vec![0.5]);
    let series = ChartSynthesizer::generate(ChartFilter::Day, "BTC", 100.0, &mut noise);

    assert_eq!(series.len(), 24);
    let labels: Vec<&str> = series.labels().collect();
    assert_eq!(labels.first(), Some(&"1h"));
    assert_eq!(labels.last(), Some(&"24h"));
    assert_eq!(series.title, "BTC 24h Price Trend");
    assert!(series.is_synthetic());
}

#[test]
fn week_series_has_daily_labels() {
    let mut noise = ReplayNoise::new(vec![0.5]);
    let series = ChartSynthesizer::generate(ChartFilter::Week, "BTC", 100.0, &mut noise);

    assert_eq!(series.len(), 7);
    let labels: Vec<&str> = series.labels().collect();
    assert_eq!(labels, ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7"]);
}

#[test]
fn extremes_hit_the_fluctuation_bound() {
    let mut noise = ReplayNoise::new(vec![0.0, 1.0]);
    let series = ChartSynthesizer::generate(ChartFilter::Week, "ETH", 100.0, &mut noise);
    let values: Vec<f64> = series.values().collect();

    assert!((values[0] - 97.5).abs() < 1e-9);
    assert!((values[1] - 102.5).abs() < 1e-9);
}

#[test]
fn each_call_draws_new_noise() {
    let mut noise = ReplayNoise::new(vec![0.1, 0.3, 0.6, 0.8, 0.9]);
    let first = ChartSynthesizer::generate(ChartFilter::Week, "ETH", 100.0, &mut noise);
    let second = ChartSynthesizer::generate(ChartFilter::Week, "ETH", 100.0, &mut noise);
    assert_ne!(first.points, second.points);
}

#[quickcheck]
fn values_stay_within_half_the_fluctuation(samples: Vec<u32>, price: u32) -> bool {
    let base = price as f64 / 100.0;
    let samples = samples.into_iter().map(unit).collect::<Vec<_>>();

    ChartFilter::iter().all(|filter| {
        let mut noise = ReplayNoise::new(samples.clone());
        let series = ChartSynthesizer::generate(filter, "X", base, &mut noise);
        let bound = ChartSynthesizer::max_deviation(filter, base) + base * 1e-12 + 1e-9;
        series.len() == filter.point_count() && series.values().all(|v| (v - base).abs() <= bound)
    })
}

#[test]
fn filter_constants() {
    assert_eq!(ChartFilter::default(), ChartFilter::Day);
    assert_eq!(ChartFilter::Day.to_string(), "24h");
    assert_eq!(ChartFilter::Week.to_string(), "7d");
    assert_eq!(ChartFilter::Day.fluctuation(), 0.02);
    assert_eq!(ChartFilter::Week.fluctuation(), 0.05);
    assert_eq!(ChartFilter::Week.button_label(), "7 Days");
}
