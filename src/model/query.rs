// src/model/query.rs
use serde::{Deserialize, Serialize};

use crate::plan::{Filter, Operation};

/// Read-only snapshot of the upstream model query.
///
/// Copied into every plan at compile time as the base reset; never mutated
/// by the compiler.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelQuery {
    /// Data source identifier (table name, view, dataset id).
    pub data_source: String,
    /// Upstream operations already applied by the model.
    pub operations: Vec<Operation>,
}

impl ModelQuery {
    pub fn new(data_source: &str) -> Self {
        Self {
            data_source: data_source.into(),
            operations: Vec::new(),
        }
    }

    pub fn with_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations = operations;
        self
    }
}

/// Upstream state observed by a chart runtime: the data model snapshot plus
/// the active filter set.
#[derive(Debug, Clone, Default)]
pub struct ModelSnapshot {
    pub model: std::sync::Arc<super::DataModel>,
    pub filters: Vec<Filter>,
}
