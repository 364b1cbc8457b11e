//! Column resolution against the data-model catalog.
//!
//! Resolution is pure and never raises on absence; the `require_*` forms
//! turn absence into [`ConfigError::UnknownColumn`] for the leading
//! required field of a chart type. List resolution is best-effort:
//! individually unresolvable entries are dropped, which is a deliberate
//! degrade-gracefully policy distinct from the hard failures.

use crate::model::{DataModel, Dimension, Measure};
use crate::validation::ConfigError;

/// Resolves column names to typed roles against a data model snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    model: &'a DataModel,
}

impl<'a> Resolver<'a> {
    pub fn new(model: &'a DataModel) -> Self {
        Self { model }
    }

    /// Resolve a dimension, cloning out of the catalog. Absent names (and
    /// empty strings) resolve to `None`.
    pub fn dimension(&self, name: &str) -> Option<Dimension> {
        self.model.get_dimension(name).cloned()
    }

    /// Resolve a measure.
    pub fn measure(&self, name: &str) -> Option<Measure> {
        self.model.get_measure(name).cloned()
    }

    /// Resolve a required dimension; absence fails the whole compile.
    pub fn require_dimension(&self, name: &str) -> Result<Dimension, ConfigError> {
        self.dimension(name).ok_or_else(|| ConfigError::UnknownColumn {
            column: name.to_string(),
        })
    }

    /// Resolve a required measure; absence fails the whole compile.
    pub fn require_measure(&self, name: &str) -> Result<Measure, ConfigError> {
        self.measure(name).ok_or_else(|| ConfigError::UnknownColumn {
            column: name.to_string(),
        })
    }

    /// Best-effort list resolution: unresolvable entries are dropped.
    pub fn dimensions(&self, names: &[String]) -> Vec<Dimension> {
        names.iter().filter_map(|n| self.dimension(n)).collect()
    }

    /// Best-effort list resolution: unresolvable entries are dropped.
    pub fn measures(&self, names: &[String]) -> Vec<Measure> {
        names.iter().filter_map(|n| self.measure(n)).collect()
    }

    /// Best-effort measures with a row-count fallback when nothing
    /// resolves.
    pub fn measures_or_count(&self, names: &[String]) -> Vec<Measure> {
        let measures = self.measures(names);
        if measures.is_empty() {
            vec![Measure::count()]
        } else {
            measures
        }
    }
}
