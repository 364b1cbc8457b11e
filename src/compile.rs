//! End-to-end compilation from chart configuration to query plan.
//!
//! This module provides the high-level API for turning a chart
//! configuration into the operation list a visualization needs:
//!
//! ```text
//! ChartConfig → Validate → Resolve → Build Plan → (engine executes)
//! ```
//!
//! # Example
//!
//! ```
//! use chartplan::compile::compile;
//! use chartplan::config::{AxisConfig, ChartConfig};
//! use chartplan::model::{AggregateKind, DataModel, Dimension, Measure, ModelQuery};
//!
//! let model = DataModel::new(ModelQuery::new("sales"))
//!     .with_dimension(Dimension::new("region", "Region"))
//!     .with_measure(Measure::new("revenue", AggregateKind::Sum));
//!
//! let config = ChartConfig::Axis(AxisConfig {
//!     x_axis: Some("region".into()),
//!     split_by: None,
//!     y_axis: vec!["revenue".into()],
//! });
//!
//! let plan = compile(&config, &model, &[]).unwrap();
//! assert!(!plan.auto_execute);
//! ```

use crate::config::ChartConfig;
use crate::model::DataModel;
use crate::plan::{Filter, QueryPlan};
use crate::planner::{self, PlanContext};
use crate::resolver::Resolver;
use crate::validation::ConfigError;

/// Compile a chart configuration into a query plan.
///
/// Dispatches on the configuration's kind tag; exactly one builder runs
/// per compile. The returned plan has `auto_execute` disabled - the caller
/// triggers execution once the full plan is assembled.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the configuration fails structural
/// validation or a required column does not resolve. No partial plan is
/// produced on error.
pub fn compile(
    config: &ChartConfig,
    model: &DataModel,
    filters: &[Filter],
) -> Result<QueryPlan, ConfigError> {
    let resolver = Resolver::new(model);
    let ctx = PlanContext {
        query: model.query(),
        filters,
    };

    match config {
        ChartConfig::Axis(config) => planner::build_axis(config, &resolver, &ctx),
        ChartConfig::Metric(config) => planner::build_metric(config, &resolver, &ctx),
        ChartConfig::Donut(config) => planner::build_donut(config, &resolver, &ctx),
        ChartConfig::Table(config) => planner::build_table(config, &resolver, &ctx),
    }
}
