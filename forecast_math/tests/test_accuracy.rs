use assert_approx_eq::assert_approx_eq;
use forecast_math::{
    evaluate, forecast, AccuracyEvaluator, EvaluationPolicy, ForecastError, MapeAggregation,
    Series, WindowSize, ZeroActualPolicy,
};
use rstest::rstest;

fn reference_series() -> Series {
    Series::load(vec![
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 9.0, 8.0, 7.0,
    ])
    .unwrap()
}

#[test]
fn test_reference_scenario_errors() {
    let series = reference_series();
    let forecasts = forecast(&series, WindowSize::new(4).unwrap());
    let evaluation = evaluate(&series, &forecasts).unwrap();

    assert_eq!(evaluation.errors.len(), 9);

    let first = evaluation.errors.first().unwrap();
    assert_eq!(first.target_index, 4);
    assert_eq!(first.predicted, 2.5);
    assert_approx_eq!(first.percentage_error.unwrap(), 50.0);

    let last = evaluation.errors.last().unwrap();
    assert_eq!(last.target_index, 12);
    assert_eq!(last.actual, 7.0);
    assert_eq!(last.predicted, 9.0);
    assert_approx_eq!(last.percentage_error.unwrap(), 28.571, 0.001);

    // The extrapolated forecast at index 13 exists but is never scored
    assert_eq!(forecasts.last().unwrap().predicted, 8.5);
    assert!(evaluation.errors.iter().all(|e| e.target_index < 13));
}

#[rstest]
#[case(MapeAggregation::EvaluatedPeriods, 258.035_714_285_714_3 / 9.0)]
#[case(MapeAggregation::ReferenceSlots, 258.035_714_285_714_3 / 10.0)]
fn test_reference_scenario_mape(#[case] aggregation: MapeAggregation, #[case] expected: f64) {
    let series = reference_series();
    let forecasts = forecast(&series, WindowSize::new(4).unwrap());
    let evaluator = AccuracyEvaluator::new(EvaluationPolicy {
        aggregation,
        ..EvaluationPolicy::default()
    });

    let evaluation = evaluator.evaluate(&series, &forecasts).unwrap();

    assert_approx_eq!(evaluation.summary.mape.unwrap(), expected, 1e-9);
}

#[test]
fn test_reference_slots_understates_mape() {
    let series = reference_series();
    let forecasts = forecast(&series, WindowSize::new(4).unwrap());

    let evaluated = evaluate(&series, &forecasts).unwrap().summary.mape.unwrap();
    let legacy = AccuracyEvaluator::new(EvaluationPolicy {
        aggregation: MapeAggregation::ReferenceSlots,
        ..EvaluationPolicy::default()
    })
    .evaluate(&series, &forecasts)
    .unwrap()
    .summary
    .mape
    .unwrap();

    assert!(legacy < evaluated);
    assert_approx_eq!(legacy, evaluated * 9.0 / 10.0, 1e-9);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(6)]
fn test_error_count_matches_evaluable_periods(#[case] window: usize) {
    let series = reference_series();
    let forecasts = forecast(&series, WindowSize::new(window).unwrap());
    let evaluation = evaluate(&series, &forecasts).unwrap();

    assert_eq!(evaluation.errors.len(), series.len() - window);
    assert_eq!(evaluation.summary.evaluated, series.len() - window);
}

#[test]
fn test_constant_series_has_zero_error() {
    let series = Series::load(vec![7.5; 10]).unwrap();
    let forecasts = forecast(&series, WindowSize::new(3).unwrap());
    let evaluation = evaluate(&series, &forecasts).unwrap();

    assert!(forecasts.iter().all(|f| f.predicted == 7.5));
    assert!(evaluation
        .errors
        .iter()
        .all(|e| e.percentage_error == Some(0.0)));
    assert_eq!(evaluation.summary.mape, Some(0.0));
}

#[test]
fn test_leading_zero_is_never_evaluated() {
    // Index 0 only ever feeds a window, it is never a target
    let series = Series::load(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let forecasts = forecast(&series, WindowSize::new(1).unwrap());
    let evaluation = evaluate(&series, &forecasts).unwrap();

    assert_eq!(evaluation.errors.len(), 5);
    assert_eq!(evaluation.errors[0].percentage_error, Some(100.0));
}

#[test]
fn test_zero_actual_at_evaluated_index() {
    let series = Series::load(vec![1.0, 0.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let forecasts = forecast(&series, WindowSize::new(1).unwrap());

    let rejected = evaluate(&series, &forecasts);
    assert_eq!(
        rejected,
        Err(ForecastError::DivisionByZeroActual { index: 1 })
    );

    let evaluation = AccuracyEvaluator::new(EvaluationPolicy {
        zero_actual: ZeroActualPolicy::Undefined,
        ..EvaluationPolicy::default()
    })
    .evaluate(&series, &forecasts)
    .unwrap();

    assert_eq!(evaluation.errors.len(), 5);
    assert_eq!(evaluation.errors[0].percentage_error, None);
    assert_eq!(evaluation.summary.undefined, 1);
    assert!(evaluation.errors[1..]
        .iter()
        .all(|e| e.percentage_error.is_some()));
}

#[test]
fn test_series_equal_to_window_has_no_mape() {
    let series = Series::load(vec![1.0, 2.0, 3.0]).unwrap();
    let forecasts = forecast(&series, WindowSize::new(3).unwrap());

    let evaluation = evaluate(&series, &forecasts).unwrap();
    assert!(evaluation.errors.is_empty());
    assert_eq!(evaluation.summary.mape, None);

    // The legacy report still divides by its single slot
    let legacy = AccuracyEvaluator::new(EvaluationPolicy {
        aggregation: MapeAggregation::ReferenceSlots,
        ..EvaluationPolicy::default()
    })
    .evaluate(&series, &forecasts)
    .unwrap();
    assert_eq!(legacy.summary.mape, Some(0.0));
}

#[test]
fn test_series_shorter_than_window_has_no_mape() {
    let series = Series::load(vec![1.0, 2.0]).unwrap();
    let forecasts = forecast(&series, WindowSize::new(5).unwrap());
    let evaluation = evaluate(&series, &forecasts).unwrap();

    assert!(forecasts.is_empty());
    assert!(evaluation.errors.is_empty());
    assert_eq!(evaluation.summary.mape, None);
}
