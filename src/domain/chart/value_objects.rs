use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

/// Time range shown by the detail chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, AsRefStr)]
pub enum ChartFilter {
    /// Hour-by-hour over one day.
    #[default]
    #[strum(serialize = "24h")]
    Day,

    /// Day-by-day over one week.
    #[strum(serialize = "7d")]
    Week,
}

impl ChartFilter {
    pub fn point_count(&self) -> usize {
        match self {
            Self::Day => 24,
            Self::Week => 7,
        }
    }

    /// Noise amplitude relative to the base price.
    pub fn fluctuation(&self) -> f64 {
        match self {
            Self::Day => 0.02,
            Self::Week => 0.05,
        }
    }

    /// Label of the point at `index` (0-based): `1h`, `2h`, ... or `Day 1`, ...
    pub fn point_label(&self, index: usize) -> String {
        match self {
            Self::Day => format!("{}h", index + 1),
            Self::Week => format!("Day {}", index + 1),
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Day => "24 Hours",
            Self::Week => "7 Days",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Labelled line series for the detail chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub filter: ChartFilter,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min = self.values().fold(f64::INFINITY, f64::min);
        let max = self.values().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Always true: the series is generated noise, never fetched history.
    pub fn is_synthetic(&self) -> bool {
        true
    }
}
