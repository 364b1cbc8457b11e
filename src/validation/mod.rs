//! Structural validation of chart configurations.
//!
//! Validators check presence and conflict constraints only; column
//! resolution (and its hard failures) lives in [`crate::resolver`]. All
//! errors here are fail-fast and raised before any chart-specific
//! operation is appended to a plan.

use crate::config::{AxisConfig, DonutConfig, MetricConfig, TableConfig};

/// A user-facing configuration error. No retry, no partial plan: the
/// compile aborts and nothing is submitted to the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Conflicting fields: {left} and {right}")]
    ConflictingFields {
        left: &'static str,
        right: &'static str,
    },

    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },
}

/// Treat empty strings the same as absent fields.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Axis: x_axis required, and it cannot double as the series split.
pub fn validate_axis(config: &AxisConfig) -> Result<(), ConfigError> {
    let x_axis = present(&config.x_axis).ok_or(ConfigError::MissingField { field: "x_axis" })?;

    if present(&config.split_by) == Some(x_axis) {
        return Err(ConfigError::ConflictingFields {
            left: "x_axis",
            right: "split_by",
        });
    }

    Ok(())
}

/// Metric: the two target forms are mutually exclusive, the target column
/// cannot be the metric itself, and a column target cannot be combined
/// with a date dimension.
pub fn validate_metric(config: &MetricConfig) -> Result<(), ConfigError> {
    let target_column = present(&config.target_column);

    if config.target_value.is_some() && target_column.is_some() {
        return Err(ConfigError::ConflictingFields {
            left: "target_value",
            right: "target_column",
        });
    }

    if target_column.is_some() && present(&config.metric_column) == target_column {
        return Err(ConfigError::ConflictingFields {
            left: "metric_column",
            right: "target_column",
        });
    }

    if target_column.is_some() && present(&config.date_column).is_some() {
        return Err(ConfigError::ConflictingFields {
            left: "target_column",
            right: "date_column",
        });
    }

    Ok(())
}

/// Donut: both columns required, reported individually.
pub fn validate_donut(config: &DonutConfig) -> Result<(), ConfigError> {
    if present(&config.label_column).is_none() {
        return Err(ConfigError::MissingField {
            field: "label_column",
        });
    }
    if present(&config.value_column).is_none() {
        return Err(ConfigError::MissingField {
            field: "value_column",
        });
    }
    Ok(())
}

/// Table: the rows list is the only required selection.
pub fn validate_table(config: &TableConfig) -> Result<(), ConfigError> {
    if config.rows.is_empty() {
        return Err(ConfigError::MissingField { field: "rows" });
    }
    Ok(())
}
