//! Chart rendering for search results.
//!
//! Charts are drawn into an in-memory image buffer and returned as base64 PNG
//! text, ready to embed in a `data:` URL. Nothing touches the filesystem, and the
//! output depends only on the records and the chart type.
//!
//! The image carries no text; titles, axis labels and legends travel alongside it
//! in [`Chart`] for the page to print.

mod canvas;

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::error::ChartError;
use crate::types::{Difficulty, RecipeFields};
use canvas::{nice_max, Canvas};
use image::Rgb;

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 500;

/// Slice colours as printed in legends; `PALETTE` holds the same colours for drawing.
const PALETTE_HEX: [&str; 5] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"];
const PALETTE: [Rgb<u8>; 5] = [
    Rgb([0x1f, 0x77, 0xb4]),
    Rgb([0xff, 0x7f, 0x0e]),
    Rgb([0x2c, 0xa0, 0x2c]),
    Rgb([0xd6, 0x27, 0x28]),
    Rgb([0x94, 0x67, 0xbd]),
];
const GRID_TICKS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    /// Cooking time per recipe
    Bar,
    /// Share of recipes per difficulty
    Pie,
    /// Cooking time against ingredient count
    Line,
}

impl ChartType {
    pub const ALL: &'static [ChartType] = &[ChartType::Bar, ChartType::Pie, ChartType::Line];

    /// Value used by the search form's chart selector.
    pub fn form_value(&self) -> &'static str {
        match self {
            ChartType::Bar => "#1",
            ChartType::Pie => "#2",
            ChartType::Line => "#3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar chart",
            ChartType::Pie => "Pie chart",
            ChartType::Line => "Line chart",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "#1" | "bar" => Some(ChartType::Bar),
            "#2" | "pie" => Some(ChartType::Pie),
            "#3" | "line" => Some(ChartType::Line),
            _ => None,
        }
    }
}

/// Resolve a chart selector value. `all` selects every chart type.
pub fn parse_chart_selection(value: &str) -> Result<Vec<ChartType>, ChartError> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(ChartType::ALL.to_vec());
    }
    ChartType::from_str(value)
        .map(|chart_type| vec![chart_type])
        .ok_or_else(|| ChartError::UnknownType(value.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub value: String,
    /// `#rrggbb`
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub chart_type: ChartType,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Value at the right end of the x axis
    pub x_max: Option<i64>,
    /// Value at the top of the y axis
    pub y_max: Option<i64>,
    pub legend: Vec<LegendEntry>,
    pub png_base64: String,
}

impl Chart {
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.png_base64)
    }
}

pub fn render_chart<R: RecipeFields>(
    chart_type: ChartType,
    records: &[R],
) -> Result<Chart, ChartError> {
    let chart = match chart_type {
        ChartType::Bar => bar_chart(records),
        ChartType::Pie => pie_chart(records),
        ChartType::Line => line_chart(records),
    }?;
    tracing::debug!(
        chart = chart_type.label(),
        records = records.len(),
        bytes = chart.png_base64.len(),
        "rendered chart"
    );
    Ok(chart)
}

fn bar_chart<R: RecipeFields>(records: &[R]) -> Result<Chart, ChartError> {
    let mut canvas = Canvas::new(CHART_WIDTH, CHART_HEIGHT);
    let y_max = nice_max(records.iter().map(|r| r.cooking_time() as i64).max().unwrap_or(0));
    canvas.draw_axes(GRID_TICKS);

    let (left, top, right, bottom) = canvas.plot_area();
    let color = PALETTE[0];
    if !records.is_empty() {
        let slot = (right - left) / records.len() as f64;
        for (i, record) in records.iter().enumerate() {
            let x0 = left + slot * i as f64 + slot * 0.1;
            let x1 = x0 + slot * 0.8;
            let height = (record.cooking_time().max(0) as f64 / y_max as f64) * (bottom - top);
            canvas.fill_rect(x0, bottom - height, x1, bottom - 1.0, color);
        }
    }

    let legend = records
        .iter()
        .map(|r| LegendEntry {
            label: r.name().to_string(),
            value: format!("{} min", r.cooking_time()),
            color: PALETTE_HEX[0].to_string(),
        })
        .collect();

    Ok(Chart {
        chart_type: ChartType::Bar,
        title: "Recipe Cooking Times".to_string(),
        x_label: Some("Recipe Name".to_string()),
        y_label: Some("Cooking Time (minutes)".to_string()),
        x_max: None,
        y_max: Some(y_max),
        legend,
        png_base64: canvas.into_png_base64()?,
    })
}

/// Recipe count per difficulty, most common first; ties keep `Difficulty::ALL` order.
pub fn difficulty_counts<R: RecipeFields>(records: &[R]) -> Vec<(Difficulty, usize)> {
    let mut counts: Vec<(Difficulty, usize)> = Difficulty::ALL
        .iter()
        .map(|d| (*d, records.iter().filter(|r| r.difficulty() == *d).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn pie_chart<R: RecipeFields>(records: &[R]) -> Result<Chart, ChartError> {
    let mut canvas = Canvas::new(CHART_WIDTH, CHART_HEIGHT);
    let counts = difficulty_counts(records);
    let total = records.len().max(1) as f64;

    // Cumulative end angle of each slice, clockwise from twelve o'clock
    let mut slices = Vec::with_capacity(counts.len());
    let mut cumulative = 0.0;
    for (i, (_, count)) in counts.iter().enumerate() {
        cumulative += *count as f64 / total * TAU;
        slices.push((cumulative, PALETTE[i % PALETTE.len()]));
    }

    let center = (CHART_WIDTH as f64 / 2.0, CHART_HEIGHT as f64 / 2.0);
    let radius = CHART_HEIGHT as f64 * 0.4;
    canvas.shade(|x, y| {
        let dx = x as f64 - center.0;
        let dy = y as f64 - center.1;
        if dx * dx + dy * dy > radius * radius {
            return None;
        }
        let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
        slices
            .iter()
            .find(|(end, _)| angle < *end)
            .or(slices.last())
            .map(|(_, color)| *color)
    });

    let legend = counts
        .iter()
        .enumerate()
        .map(|(i, (difficulty, count))| LegendEntry {
            label: difficulty.as_str().to_string(),
            value: format!("{:.1}%", *count as f64 / total * 100.0),
            color: PALETTE_HEX[i % PALETTE_HEX.len()].to_string(),
        })
        .collect();

    Ok(Chart {
        chart_type: ChartType::Pie,
        title: "Recipe Difficulty Distribution".to_string(),
        x_label: None,
        y_label: None,
        x_max: None,
        y_max: None,
        legend,
        png_base64: canvas.into_png_base64()?,
    })
}

fn line_chart<R: RecipeFields>(records: &[R]) -> Result<Chart, ChartError> {
    let mut canvas = Canvas::new(CHART_WIDTH, CHART_HEIGHT);

    let mut points: Vec<(usize, i32, &str)> = records
        .iter()
        .map(|r| (r.ingredient_list().len(), r.cooking_time(), r.name()))
        .collect();
    points.sort_by_key(|(count, _, _)| *count);

    let x_max = nice_max(points.iter().map(|p| p.0 as i64).max().unwrap_or(0));
    let y_max = nice_max(points.iter().map(|p| p.1 as i64).max().unwrap_or(0));
    canvas.draw_axes(GRID_TICKS);

    let (left, top, right, bottom) = canvas.plot_area();
    let to_pixel = |count: usize, time: i32| {
        (
            left + count as f64 / x_max as f64 * (right - left),
            bottom - time.max(0) as f64 / y_max as f64 * (bottom - top),
        )
    };

    let color = PALETTE[0];
    for pair in points.windows(2) {
        canvas.draw_line(
            to_pixel(pair[0].0, pair[0].1),
            to_pixel(pair[1].0, pair[1].1),
            2,
            color,
        );
    }
    for (count, time, _) in &points {
        canvas.fill_circle(to_pixel(*count, *time), 4.0, color);
    }

    let legend = points
        .iter()
        .map(|(count, time, name)| LegendEntry {
            label: name.to_string(),
            value: format!("{} ingredients, {} min", count, time),
            color: PALETTE_HEX[0].to_string(),
        })
        .collect();

    Ok(Chart {
        chart_type: ChartType::Line,
        title: "Cooking Time vs Number of Ingredients".to_string(),
        x_label: Some("Number of Ingredients".to_string()),
        y_label: Some("Cooking Time (minutes)".to_string()),
        x_max: Some(x_max),
        y_max: Some(y_max),
        legend,
        png_base64: canvas.into_png_base64()?,
    })
}
