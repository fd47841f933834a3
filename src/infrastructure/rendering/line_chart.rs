use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::ChartSeries,
    logging::{LogComponent, get_logger},
};

const LINE_COLOR: &str = "#3b82f6";
const BACKGROUND: &str = "#111827";
const GRID_COLOR: &str = "#374151";
const TEXT_COLOR: &str = "#aaaaaa";

/// Scale parameters for one series on a canvas of a given size.
///
/// Pure geometry, kept apart from drawing so it can be checked off-browser.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub text_space: f64,
    pub min_value: f64,
    pub max_value: f64,
}

impl LineChartLayout {
    pub fn new(width: u32, height: u32, series: &ChartSeries) -> Self {
        let (min, max) = series.value_range().unwrap_or((0.0, 1.0));
        // A flat series would divide by zero; open the range a little.
        let (min_value, max_value) = if (max - min).abs() < f64::EPSILON {
            let pad = (min.abs() * 0.01).max(1.0);
            (min - pad, max + pad)
        } else {
            (min, max)
        };

        Self {
            width: width as f64,
            height: height as f64,
            padding: 40.0,
            text_space: 80.0,
            min_value,
            max_value,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.padding * 2.0 - self.text_space).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.padding * 2.0).max(1.0)
    }

    /// Points are spread evenly; a single point sits in the middle.
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.plot_width() / 2.0;
        }
        self.padding + index as f64 * self.plot_width() / (count - 1) as f64
    }

    /// Canvas y grows downwards, so the max value maps to the top edge.
    pub fn y_for(&self, value: f64) -> f64 {
        let range = self.max_value - self.min_value;
        self.padding + ((self.max_value - value) / range) * self.plot_height()
    }

    pub fn project(&self, series: &ChartSeries) -> Vec<(f64, f64)> {
        let count = series.len();
        series.values().enumerate().map(|(i, v)| (self.x_for(i, count), self.y_for(v))).collect()
    }
}

/// Canvas 2D line chart for the detail modal.
pub struct LineChartRenderer {
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    pub fn render(&self, canvas: &HtmlCanvasElement, series: &ChartSeries) -> Result<(), JsValue> {
        let context = self.context(canvas)?;
        let (w, h) = (self.width as f64, self.height as f64);

        context.clear_rect(0.0, 0.0, w, h);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, w, h);

        if series.is_empty() {
            return self.render_no_data_message(&context);
        }

        let layout = LineChartLayout::new(self.width, self.height, series);
        self.render_grid(&context, &layout);
        self.render_line(&context, &layout, series)?;
        self.render_value_scale(&context, &layout)?;
        self.render_labels(&context, &layout, series)?;
        self.render_title(&context, series)?;

        get_logger().debug(
            LogComponent::Infrastructure("LineChartRenderer"),
            &format!("Rendered {} points for {}", series.len(), series.title),
        );
        Ok(())
    }

    fn render_grid(&self, context: &CanvasRenderingContext2d, layout: &LineChartLayout) {
        context.set_stroke_style_str(GRID_COLOR);
        context.set_line_width(1.0);
        for step in 0..=4 {
            let y = layout.padding + layout.plot_height() * step as f64 / 4.0;
            context.begin_path();
            context.move_to(layout.padding, y);
            context.line_to(layout.padding + layout.plot_width(), y);
            context.stroke();
        }
    }

    fn render_line(
        &self,
        context: &CanvasRenderingContext2d,
        layout: &LineChartLayout,
        series: &ChartSeries,
    ) -> Result<(), JsValue> {
        let points = layout.project(series);

        context.set_stroke_style_str(LINE_COLOR);
        context.set_line_width(2.0);
        context.begin_path();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                context.move_to(*x, *y);
            } else {
                context.line_to(*x, *y);
            }
        }
        context.stroke();

        context.set_fill_style_str(LINE_COLOR);
        for (x, y) in &points {
            context.begin_path();
            context.arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU)?;
            context.fill();
        }
        Ok(())
    }

    fn render_value_scale(
        &self,
        context: &CanvasRenderingContext2d,
        layout: &LineChartLayout,
    ) -> Result<(), JsValue> {
        let x = layout.padding + layout.plot_width() + 10.0;
        context.set_fill_style_str(TEXT_COLOR);
        context.set_font("12px Arial");
        context.set_text_align("left");
        context.fill_text(&format!("${:.2}", layout.max_value), x, layout.padding + 4.0)?;
        context.fill_text(
            &format!("${:.2}", layout.min_value),
            x,
            layout.padding + layout.plot_height() + 4.0,
        )?;
        Ok(())
    }

    fn render_labels(
        &self,
        context: &CanvasRenderingContext2d,
        layout: &LineChartLayout,
        series: &ChartSeries,
    ) -> Result<(), JsValue> {
        let count = series.len();
        // Hourly labels get crowded; print every other one.
        let stride = if count > 12 { 2 } else { 1 };
        let y = layout.padding + layout.plot_height() + 20.0;

        context.set_fill_style_str(TEXT_COLOR);
        context.set_font("11px Arial");
        context.set_text_align("center");
        for (i, label) in series.labels().enumerate().filter(|(i, _)| i % stride == 0) {
            context.fill_text(label, layout.x_for(i, count), y)?;
        }
        Ok(())
    }

    fn render_title(&self, context: &CanvasRenderingContext2d, series: &ChartSeries) -> Result<(), JsValue> {
        context.set_fill_style_str(LINE_COLOR);
        context.fill_rect(40.0, 14.0, 12.0, 12.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("14px Arial");
        context.set_text_align("left");
        context.fill_text(&series.title, 58.0, 25.0)?;
        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style_str("#ffffff");
        context.set_font("16px Arial");
        context.fill_text("No chart data", 40.0, self.height as f64 / 2.0)?;

        get_logger().warn(LogComponent::Infrastructure("LineChartRenderer"), "Empty series, nothing to plot");
        Ok(())
    }
}
