use chartplan::compile::compile;
use chartplan::config::{ChartConfig, MetricConfig};
use chartplan::model::{AggregateKind, DataModel, Dimension, Measure, ModelQuery};
use chartplan::plan::{DataType, Literal, Mutation, Operation};
use chartplan::validation::ConfigError;

fn model() -> DataModel {
    DataModel::new(ModelQuery::new("signups"))
        .with_dimension(Dimension::new("day", "Day"))
        .with_measure(Measure::new("signups", AggregateKind::Count))
        .with_measure(Measure::new("goal", AggregateKind::Sum))
}

fn metric(
    metric_column: &str,
    target_value: Option<f64>,
    target_column: Option<&str>,
    date_column: Option<&str>,
) -> ChartConfig {
    ChartConfig::Metric(MetricConfig {
        metric_column: Some(metric_column.into()),
        target_value,
        target_column: target_column.map(Into::into),
        date_column: date_column.map(Into::into),
    })
}

#[test]
fn test_unresolvable_metric_fails() {
    let result = compile(&metric("nonexistent", None, None, None), &model(), &[]);
    assert_eq!(
        result,
        Err(ConfigError::UnknownColumn {
            column: "nonexistent".into()
        })
    );
}

#[test]
fn test_positive_literal_target_derives_target_field() {
    let plan = compile(&metric("signups", Some(100.0), None, None), &model(), &[]).unwrap();

    let tail: Vec<_> = plan.operations.iter().skip(2).collect();
    assert_eq!(tail.len(), 2);
    match tail[0] {
        Operation::Summarize {
            measures,
            dimensions,
        } => {
            assert_eq!(measures, &[Measure::new("signups", AggregateKind::Count)]);
            assert!(dimensions.is_empty());
        }
        other => panic!("expected summarize, got {:?}", other),
    }
    assert_eq!(
        tail[1],
        &Operation::Mutate {
            name: "target".into(),
            data_type: DataType::Decimal,
            mutation: Mutation::Literal(Literal::Float(100.0)),
        }
    );
}

#[test]
fn test_zero_target_falls_through() {
    // Strict positivity: zero is "no literal target", not an error.
    let plan = compile(&metric("signups", Some(0.0), None, None), &model(), &[]).unwrap();

    assert!(!plan
        .operations
        .iter()
        .any(|op| matches!(op, Operation::Mutate { .. })));
    match plan.last_operation().unwrap() {
        Operation::Summarize {
            measures,
            dimensions,
        } => {
            assert_eq!(measures, &[Measure::new("signups", AggregateKind::Count)]);
            assert!(dimensions.is_empty());
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_negative_target_falls_through_to_date_branch() {
    let plan = compile(&metric("signups", Some(-5.0), None, Some("day")), &model(), &[]).unwrap();

    assert!(!plan
        .operations
        .iter()
        .any(|op| matches!(op, Operation::Mutate { .. })));
    match plan.last_operation().unwrap() {
        Operation::Summarize { dimensions, .. } => {
            assert_eq!(dimensions, &[Dimension::new("day", "Day")]);
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_measure_target_summarizes_both_measures() {
    let plan = compile(&metric("signups", None, Some("goal"), None), &model(), &[]).unwrap();

    match plan.last_operation().unwrap() {
        Operation::Summarize {
            measures,
            dimensions,
        } => {
            assert_eq!(
                measures,
                &[
                    Measure::new("signups", AggregateKind::Count),
                    Measure::new("goal", AggregateKind::Sum),
                ]
            );
            assert!(dimensions.is_empty());
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_unresolvable_target_column_falls_through() {
    let plan = compile(&metric("signups", None, Some("bogus"), None), &model(), &[]).unwrap();

    match plan.last_operation().unwrap() {
        Operation::Summarize {
            measures,
            dimensions,
        } => {
            assert_eq!(measures, &[Measure::new("signups", AggregateKind::Count)]);
            assert!(dimensions.is_empty());
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_date_branch_groups_by_date() {
    let plan = compile(&metric("signups", None, None, Some("day")), &model(), &[]).unwrap();

    match plan.last_operation().unwrap() {
        Operation::Summarize {
            measures,
            dimensions,
        } => {
            assert_eq!(measures, &[Measure::new("signups", AggregateKind::Count)]);
            assert_eq!(dimensions, &[Dimension::new("day", "Day")]);
        }
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_unresolvable_date_silently_drops_to_plain_summarize() {
    let plan = compile(&metric("signups", None, None, Some("bogus")), &model(), &[]).unwrap();

    match plan.last_operation().unwrap() {
        Operation::Summarize { dimensions, .. } => assert!(dimensions.is_empty()),
        other => panic!("expected summarize, got {:?}", other),
    }
}

#[test]
fn test_plain_metric_summarizes_without_dimensions() {
    let plan = compile(&metric("signups", None, None, None), &model(), &[]).unwrap();

    let tail: Vec<_> = plan.operations.iter().skip(2).collect();
    assert_eq!(tail.len(), 1);
    assert!(matches!(tail[0], Operation::Summarize { .. }));
}

#[test]
fn test_conflicting_targets_fail_regardless_of_other_fields() {
    let result = compile(
        &metric("signups", Some(100.0), Some("goal"), None),
        &model(),
        &[],
    );
    assert_eq!(
        result,
        Err(ConfigError::ConflictingFields {
            left: "target_value",
            right: "target_column",
        })
    );
}
