//! Search result reports: a table of matching recipes plus the selected charts.

use serde::Serialize;

use crate::chart::{parse_chart_selection, render_chart, Chart};
use crate::types::{Difficulty, RecipeFields};

pub const TABLE_COLUMNS: &[&str] = &["Name", "Cooking time", "Difficulty", "Ingredients"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: i32,
    pub name: String,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
}

impl TableRow {
    pub fn from_record<R: RecipeFields>(record: &R) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            cooking_time: record.cooking_time(),
            difficulty: record.difficulty(),
            ingredients: record.ingredient_list(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeTable {
    pub columns: &'static [&'static str],
    pub rows: Vec<TableRow>,
}

impl RecipeTable {
    pub fn from_records<R: RecipeFields>(records: &[R]) -> Self {
        Self {
            columns: TABLE_COLUMNS,
            rows: records.iter().map(TableRow::from_record).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub table: RecipeTable,
    pub charts: Vec<Chart>,
    /// Non-fatal problems, e.g. an unknown chart selection
    pub notices: Vec<String>,
}

/// Build the table and charts for `records`.
///
/// `chart_selection` is a chart selector value (`#1`, `pie`, `all`, ...); `None`
/// skips charts. An unknown selection or a chart that fails to render adds a
/// notice instead of failing the report. No charts are drawn for an empty result.
pub fn build_report<R: RecipeFields>(records: &[R], chart_selection: Option<&str>) -> Report {
    let table = RecipeTable::from_records(records);
    let mut charts = Vec::new();
    let mut notices = Vec::new();

    if let Some(selection) = chart_selection {
        match parse_chart_selection(selection) {
            Ok(_) if records.is_empty() => {}
            Ok(chart_types) => {
                for chart_type in chart_types {
                    match render_chart(chart_type, records) {
                        Ok(chart) => charts.push(chart),
                        Err(e) => {
                            tracing::warn!("Failed to render {}: {}", chart_type.label(), e);
                            notices.push(format!("Could not render {}.", chart_type.label()));
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!("{}", e);
                notices.push(e.to_string());
            }
        }
    }

    Report {
        table,
        charts,
        notices,
    }
}
