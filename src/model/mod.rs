//! Data-model catalog: typed column lookup plus the upstream query snapshot.

pub mod column;
pub mod query;

pub use column::{AggregateKind, Dimension, Measure};
pub use query::{ModelQuery, ModelSnapshot};

use std::collections::HashMap;

/// The column catalog a chart compiles against.
///
/// Owns the typed column references and the upstream query the chart's plan
/// is rebuilt from on every compile.
#[derive(Debug, Clone, Default)]
pub struct DataModel {
    dimensions: HashMap<String, Dimension>,
    measures: HashMap<String, Measure>,
    query: ModelQuery,
}

impl DataModel {
    pub fn new(query: ModelQuery) -> Self {
        Self {
            dimensions: HashMap::new(),
            measures: HashMap::new(),
            query,
        }
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimensions.insert(dimension.column.clone(), dimension);
        self
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measures.insert(measure.column.clone(), measure);
        self
    }

    /// Look up a dimension by column name. Absence is not an error; callers
    /// decide whether it is fatal for their chart type.
    pub fn get_dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.get(name)
    }

    /// Look up a measure by column name.
    pub fn get_measure(&self, name: &str) -> Option<&Measure> {
        self.measures.get(name)
    }

    /// The upstream query snapshot (data source + operations).
    pub fn query(&self) -> &ModelQuery {
        &self.query
    }
}
