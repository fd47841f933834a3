use crate::domain::chart::{ChartFilter, ChartPoint, ChartSeries};

/// Uniform samples in `[0, 1)`.
pub trait NoiseSource {
    fn next_unit(&mut self) -> f64;
}

/// Builds placeholder chart series around a price.
pub struct ChartSynthesizer;

impl ChartSynthesizer {
    /// `base + (r - 0.5) * base * fluctuation` for each point.
    ///
    /// Every call draws fresh noise, so two calls never describe the same
    /// "history".
    pub fn generate(
        filter: ChartFilter,
        symbol: &str,
        base_price: f64,
        noise: &mut dyn NoiseSource,
    ) -> ChartSeries {
        let fluctuation = filter.fluctuation();
        let points = (0..filter.point_count())
            .map(|i| ChartPoint {
                label: filter.point_label(i),
                value: base_price + (noise.next_unit() - 0.5) * base_price * fluctuation,
            })
            .collect();

        ChartSeries { title: format!("{} {} Price Trend", symbol, filter), filter, points }
    }

    /// Largest distance a generated point can sit from the base price.
    pub fn max_deviation(filter: ChartFilter, base_price: f64) -> f64 {
        base_price.abs() * filter.fluctuation() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Midpoint;
    impl NoiseSource for Midpoint {
        fn next_unit(&mut self) -> f64 {
            0.5
        }
    }

    #[test]
    fn midpoint_noise_is_flat() {
        let series = ChartSynthesizer::generate(ChartFilter::Week, "ETH", 2000.0, &mut Midpoint);
        assert!(series.values().all(|v| v == 2000.0));
        assert_eq!(series.title, "ETH 7d Price Trend");
    }
}
