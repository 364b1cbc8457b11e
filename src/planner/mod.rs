//! Per-chart-type query plan builders.
//!
//! Each builder follows the same shape: structural validation, column
//! resolution, then operation append on top of the shared base plan
//! (data source + upstream operations + active filters).

use crate::config::{AxisConfig, DonutConfig, MetricConfig, TableConfig};
use crate::plan::{DataType, Filter, Literal, Mutation, QueryPlan, SortDir};
use crate::resolver::Resolver;
use crate::validation::{self, ConfigError};

/// Read-only compile inputs shared by every builder.
#[derive(Debug, Clone, Copy)]
pub struct PlanContext<'a> {
    pub query: &'a crate::model::ModelQuery,
    pub filters: &'a [Filter],
}

impl PlanContext<'_> {
    fn base_plan(&self) -> QueryPlan {
        QueryPlan::reset(self.query, self.filters)
    }
}

/// Build the plan for an axis-family chart (bar, line, area).
///
/// A resolvable `split_by` selects a pivot-wider cross-tabulation; anything
/// else (absent or unresolvable) degrades to a plain summarize.
pub fn build_axis(
    config: &AxisConfig,
    resolver: &Resolver<'_>,
    ctx: &PlanContext<'_>,
) -> Result<QueryPlan, ConfigError> {
    validation::validate_axis(config)?;

    let x_axis = resolver.require_dimension(config.x_axis.as_deref().unwrap_or_default())?;
    let split_by = config
        .split_by
        .as_deref()
        .and_then(|name| resolver.dimension(name));
    let measures = resolver.measures_or_count(&config.y_axis);

    let plan = ctx.base_plan();
    let plan = match split_by {
        Some(split) => plan.add_pivot_wider(vec![x_axis], vec![split], measures),
        None => plan.add_summarize(measures, vec![x_axis]),
    };

    Ok(plan)
}

/// Build the plan for a metric (single KPI) chart.
///
/// Branches are evaluated in order and are mutually exclusive:
/// 1. strictly positive literal target: summarize + derived "target" field
/// 2. resolvable column target: summarize over both measures
/// 3. resolvable date dimension: summarize grouped by date
/// 4. plain summarize
///
/// A literal target of zero or below is not an error; it falls through to
/// the later branches (strict-positivity boundary, kept intentionally).
pub fn build_metric(
    config: &MetricConfig,
    resolver: &Resolver<'_>,
    ctx: &PlanContext<'_>,
) -> Result<QueryPlan, ConfigError> {
    validation::validate_metric(config)?;

    let metric = resolver.require_measure(config.metric_column.as_deref().unwrap_or_default())?;
    let date = config
        .date_column
        .as_deref()
        .and_then(|name| resolver.dimension(name));

    let plan = ctx.base_plan();

    if let Some(target) = config.target_value.filter(|v| *v > 0.0) {
        return Ok(plan.add_summarize(vec![metric], vec![]).add_mutate(
            "target",
            DataType::Decimal,
            Mutation::Literal(Literal::Float(target)),
        ));
    }

    if let Some(target) = config
        .target_column
        .as_deref()
        .and_then(|name| resolver.measure(name))
    {
        return Ok(plan.add_summarize(vec![metric, target], vec![]));
    }

    if let Some(date) = date {
        return Ok(plan.add_summarize(vec![metric], vec![date]));
    }

    Ok(plan.add_summarize(vec![metric], vec![]))
}

/// Build the plan for a donut chart: summarize by label, then rank the
/// segments largest-first.
pub fn build_donut(
    config: &DonutConfig,
    resolver: &Resolver<'_>,
    ctx: &PlanContext<'_>,
) -> Result<QueryPlan, ConfigError> {
    validation::validate_donut(config)?;

    let label = resolver.require_dimension(config.label_column.as_deref().unwrap_or_default())?;
    let value = resolver.require_measure(config.value_column.as_deref().unwrap_or_default())?;
    let value_column = value.column.clone();

    Ok(ctx
        .base_plan()
        .add_summarize(vec![value], vec![label])
        .add_order_by(&value_column, SortDir::Desc))
}

/// Build the plan for a pivot-capable table.
///
/// The resolved `columns` list's emptiness is the single branch point:
/// empty selects summarize, non-empty selects pivot-wider.
pub fn build_table(
    config: &TableConfig,
    resolver: &Resolver<'_>,
    ctx: &PlanContext<'_>,
) -> Result<QueryPlan, ConfigError> {
    validation::validate_table(config)?;

    let rows = resolver.dimensions(&config.rows);
    let columns = resolver.dimensions(&config.columns);
    let values = resolver.measures(&config.values);

    let plan = ctx.base_plan();
    let plan = if columns.is_empty() {
        plan.add_summarize(values, rows)
    } else {
        plan.add_pivot_wider(rows, columns, values)
    };

    Ok(plan)
}
