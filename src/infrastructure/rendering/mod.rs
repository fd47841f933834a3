pub mod line_chart;

pub use line_chart::{LineChartLayout, LineChartRenderer};
