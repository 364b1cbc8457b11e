// src/model/column.rs
use serde::{Deserialize, Serialize};

/// A categorical column reference used for grouping and pivot axes.
///
/// Owned by the data-model catalog; plans carry cloned values resolved at
/// compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Column name, unique within the data model.
    pub column: String,
    /// Display label.
    pub label: String,
}

impl Dimension {
    pub fn new(column: &str, label: &str) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
        }
    }
}

/// How a measure aggregates its underlying column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    Sum,
    Avg,
    Min,
    Max,
    Count,
    CountDistinct,
}

/// An aggregatable column reference, or a synthetic aggregate such as row
/// count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    /// Column name, or a synthetic identifier for derived aggregates.
    pub column: String,
    pub aggregate: AggregateKind,
}

impl Measure {
    pub fn new(column: &str, aggregate: AggregateKind) -> Self {
        Self {
            column: column.into(),
            aggregate,
        }
    }

    /// The synthetic row-count measure, substituted when a chart selects no
    /// measures of its own.
    pub fn count() -> Self {
        Self {
            column: "count".into(),
            aggregate: AggregateKind::Count,
        }
    }
}
