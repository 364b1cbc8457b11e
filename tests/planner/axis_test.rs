use chartplan::compile::compile;
use chartplan::config::{AxisConfig, ChartConfig};
use chartplan::model::{AggregateKind, DataModel, Dimension, Measure, ModelQuery};
use chartplan::plan::{Filter, FilterOp, Literal, Operation};
use chartplan::validation::ConfigError;

fn model() -> DataModel {
    DataModel::new(ModelQuery::new("sales"))
        .with_dimension(Dimension::new("region", "Region"))
        .with_dimension(Dimension::new("quarter", "Quarter"))
        .with_measure(Measure::new("revenue", AggregateKind::Sum))
        .with_measure(Measure::new("cost", AggregateKind::Sum))
}

fn axis(x_axis: &str, split_by: Option<&str>, y_axis: &[&str]) -> ChartConfig {
    ChartConfig::Axis(AxisConfig {
        x_axis: Some(x_axis.into()),
        split_by: split_by.map(Into::into),
        y_axis: y_axis.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn test_unresolvable_x_axis_fails() {
    let result = compile(&axis("nonexistent", None, &["revenue"]), &model(), &[]);
    assert_eq!(
        result,
        Err(ConfigError::UnknownColumn {
            column: "nonexistent".into()
        })
    );
}

#[test]
fn test_x_axis_resolving_to_measure_fails() {
    // "revenue" exists but only as a measure.
    let result = compile(&axis("revenue", None, &["revenue"]), &model(), &[]);
    assert_eq!(
        result,
        Err(ConfigError::UnknownColumn {
            column: "revenue".into()
        })
    );
}

#[test]
fn test_resolvable_split_selects_pivot_wider() {
    let plan = compile(&axis("region", Some("quarter"), &["revenue"]), &model(), &[]).unwrap();

    let pivots = plan
        .operations
        .iter()
        .filter(|op| matches!(op, Operation::PivotWider { .. }))
        .count();
    let summarizes = plan
        .operations
        .iter()
        .filter(|op| matches!(op, Operation::Summarize { .. }))
        .count();
    assert_eq!(pivots, 1);
    assert_eq!(summarizes, 0);

    match plan.last_operation().unwrap() {
        Operation::PivotWider {
            rows,
            columns,
            values,
        } => {
            assert_eq!(rows, &[Dimension::new("region", "Region")]);
            assert_eq!(columns, &[Dimension::new("quarter", "Quarter")]);
            assert_eq!(values, &[Measure::new("revenue", AggregateKind::Sum)]);
        }
        other => panic!("expected pivot-wider, got {:?}", other),
    }
}

#[test]
fn test_absent_split_selects_summarize() {
    let plan = compile(&axis("region", None, &["revenue"]), &model(), &[]).unwrap();

    assert!(!plan
        .operations
        .iter()
        .any(|op| matches!(op, Operation::PivotWider { .. })));
    match plan.last_operation().unwrap() {
        Operation::Summarize {
            measures,
            dimensions,
        } => {
            assert_eq!(dimensions, &[Dimension::new("region", "Region")]);
            assert_eq!(measures, &[Measure::new("revenue", AggregateKind::Sum)]);
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_unresolvable_split_degrades_to_summarize() {
    // Not fatal: treated as if no split was configured.
    let plan = compile(&axis("region", Some("nonexistent"), &["revenue"]), &model(), &[]).unwrap();
    assert!(matches!(
        plan.last_operation(),
        Some(Operation::Summarize { .. })
    ));
}

#[test]
fn test_empty_y_axis_falls_back_to_row_count() {
    let plan = compile(&axis("region", None, &[]), &model(), &[]).unwrap();
    match plan.last_operation().unwrap() {
        Operation::Summarize { measures, .. } => {
            assert_eq!(measures, &[Measure::count()]);
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_fully_unresolvable_y_axis_falls_back_to_row_count() {
    let plan = compile(&axis("region", None, &["bogus", "alsobogus"]), &model(), &[]).unwrap();
    match plan.last_operation().unwrap() {
        Operation::Summarize { measures, .. } => {
            assert_eq!(measures, &[Measure::count()]);
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_partially_unresolvable_y_axis_keeps_resolved_entries() {
    let plan = compile(
        &axis("region", None, &["revenue", "bogus", "cost"]),
        &model(),
        &[],
    )
    .unwrap();
    match plan.last_operation().unwrap() {
        Operation::Summarize { measures, .. } => {
            assert_eq!(
                measures,
                &[
                    Measure::new("revenue", AggregateKind::Sum),
                    Measure::new("cost", AggregateKind::Sum),
                ]
            );
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_filters_appear_right_after_base_reset() {
    let filters = vec![Filter::new(
        "region",
        FilterOp::Eq,
        Literal::Str("emea".into()),
    )];
    let plan = compile(&axis("region", None, &["revenue"]), &model(), &filters).unwrap();

    assert!(matches!(&plan.operations[0], Operation::SetDataSource { .. }));
    assert!(matches!(&plan.operations[1], Operation::SetOperations { .. }));
    assert!(matches!(&plan.operations[2], Operation::AddFilter { .. }));
}
