//! Query plan vocabulary - the ordered operation list handed to the
//! execution engine.
//!
//! A plan is built fresh on every compile: a base reset derived from the
//! upstream model query (data source + operations + active filters), then
//! the chart-type-specific operations appended by the planner. Plans are
//! never mutated across compiles; each compile replaces the previous plan
//! wholesale.

use serde::{Deserialize, Serialize};

use crate::model::{Dimension, Measure, ModelQuery};

// =============================================================================
// Literals and filters
// =============================================================================

/// A literal value carried by filters and mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Contains,
}

/// A single filter predicate. Filters are externally supplied, read-only
/// inputs copied into the plan at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: Literal,
}

impl Filter {
    pub fn new(column: &str, op: FilterOp, value: Literal) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }
}

// =============================================================================
// Operation vocabulary
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// Data type of a derived field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Int,
    Decimal,
    Float,
    Bool,
    Date,
    Timestamp,
}

/// Expression of a derived field. Charts only derive literal constants
/// today (the metric target line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    Literal(Literal),
}

/// One relational operation in a plan, mirroring the execution engine's
/// wire surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Point the plan at a data source.
    SetDataSource { source: String },
    /// Replace the operation list with the upstream model's operations.
    SetOperations { operations: Vec<Operation> },
    /// Apply externally supplied filter predicates.
    AddFilter { filters: Vec<Filter> },
    /// One row per distinct dimension tuple with aggregated measures.
    Summarize {
        measures: Vec<Measure>,
        dimensions: Vec<Dimension>,
    },
    /// Spread the `columns` dimensions' distinct values into new columns,
    /// cross-tabulated against `rows` and aggregated `values`.
    PivotWider {
        rows: Vec<Dimension>,
        columns: Vec<Dimension>,
        values: Vec<Measure>,
    },
    /// Sort by a column.
    OrderBy { column: String, direction: SortDir },
    /// Derive a new computed field.
    Mutate {
        name: String,
        data_type: DataType,
        mutation: Mutation,
    },
}

// =============================================================================
// Query plan
// =============================================================================

/// An ordered operation sequence for one compile.
///
/// `auto_execute` stays false while operations are appended so the engine
/// never runs a partially assembled plan; the runtime triggers execution
/// explicitly once the plan is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use = "plans have no effect until executed"]
pub struct QueryPlan {
    pub auto_execute: bool,
    pub operations: Vec<Operation>,
}

impl QueryPlan {
    /// Start a plan from the upstream model query: data source, upstream
    /// operations, then the active filters when non-empty.
    pub fn reset(query: &ModelQuery, filters: &[Filter]) -> Self {
        let mut plan = Self {
            auto_execute: false,
            operations: vec![
                Operation::SetDataSource {
                    source: query.data_source.clone(),
                },
                Operation::SetOperations {
                    operations: query.operations.clone(),
                },
            ],
        };
        if !filters.is_empty() {
            plan.operations.push(Operation::AddFilter {
                filters: filters.to_vec(),
            });
        }
        plan
    }

    pub fn add_summarize(mut self, measures: Vec<Measure>, dimensions: Vec<Dimension>) -> Self {
        self.operations.push(Operation::Summarize {
            measures,
            dimensions,
        });
        self
    }

    pub fn add_pivot_wider(
        mut self,
        rows: Vec<Dimension>,
        columns: Vec<Dimension>,
        values: Vec<Measure>,
    ) -> Self {
        self.operations.push(Operation::PivotWider {
            rows,
            columns,
            values,
        });
        self
    }

    pub fn add_order_by(mut self, column: &str, direction: SortDir) -> Self {
        self.operations.push(Operation::OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn add_mutate(mut self, name: &str, data_type: DataType, mutation: Mutation) -> Self {
        self.operations.push(Operation::Mutate {
            name: name.into(),
            data_type,
            mutation,
        });
        self
    }

    /// The final (chart-type-specific) operation, if any.
    pub fn last_operation(&self) -> Option<&Operation> {
        self.operations.last()
    }
}
