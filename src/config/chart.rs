// src/config/chart.rs
use serde::{Deserialize, Serialize};

/// Chart type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Axis,
    Metric,
    Donut,
    Table,
}

/// Axis-family chart (bar, line, area): one x dimension, optional series
/// split, any number of y measures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub x_axis: Option<String>,
    pub split_by: Option<String>,
    pub y_axis: Vec<String>,
}

/// Single KPI with an optional comparison target (literal or column) and an
/// optional date dimension for a trend line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    pub metric_column: Option<String>,
    pub target_value: Option<f64>,
    pub target_column: Option<String>,
    pub date_column: Option<String>,
}

/// Donut chart: one label dimension, one value measure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutConfig {
    pub label_column: Option<String>,
    pub value_column: Option<String>,
}

/// Pivot-capable grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

/// A chart configuration: exactly one variant per chart kind.
///
/// Serialized with the kind as a `type` tag, which is also the persisted
/// wire shape (see [`StoredChart`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartConfig {
    Axis(AxisConfig),
    Metric(MetricConfig),
    Donut(DonutConfig),
    Table(TableConfig),
}

impl ChartConfig {
    /// The kind tag of the active variant.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartConfig::Axis(_) => ChartKind::Axis,
            ChartConfig::Metric(_) => ChartKind::Metric,
            ChartConfig::Donut(_) => ChartKind::Donut,
            ChartConfig::Table(_) => ChartKind::Table,
        }
    }

    /// The empty configuration for a kind.
    pub fn default_for(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Axis => ChartConfig::Axis(AxisConfig::default()),
            ChartKind::Metric => ChartConfig::Metric(MetricConfig::default()),
            ChartKind::Donut => ChartConfig::Donut(DonutConfig::default()),
            ChartKind::Table => ChartConfig::Table(TableConfig::default()),
        }
    }
}

/// The persisted chart document: name plus the tagged configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredChart {
    pub name: String,
    pub config: ChartConfig,
}
