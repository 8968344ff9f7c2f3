use assert_approx_eq::assert_approx_eq;
use forecast_math::{ForecastError, MapeAggregation, ZeroActualPolicy};
use forecast_report::{run, DataLoader, ForecastConfig, ReportError};
use rstest::rstest;

#[test]
fn test_demo_run_matches_legacy_table() {
    let series = DataLoader::demo().unwrap();
    let report = run(&series, &ForecastConfig::default()).unwrap();

    assert_eq!(report.window(), 4);
    assert_eq!(report.rows().len(), 14);

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "period\tdata\tforecast\terror");
    assert_eq!(lines[1], "0\t1");
    assert_eq!(lines[5], "4\t5\t2.5\t50");
    assert_eq!(lines[14], "13\t\t8.5");
    assert_eq!(lines[15], "");
    assert!(lines[16].starts_with("mape = 28.67"));
}

#[rstest]
#[case(MapeAggregation::EvaluatedPeriods, 28.670_634_920_634_92)]
#[case(MapeAggregation::ReferenceSlots, 25.803_571_428_571_43)]
fn test_run_aggregation_policy(#[case] aggregation: MapeAggregation, #[case] expected: f64) {
    let series = DataLoader::demo().unwrap();
    let config = ForecastConfig {
        aggregation,
        ..ForecastConfig::default()
    };

    let report = run(&series, &config).unwrap();
    assert_approx_eq!(report.summary().mape.unwrap(), expected, 1e-9);
}

#[test]
fn test_run_zero_actual_policies() {
    let series = DataLoader::from_list("2, 0, 4, 6").unwrap();
    let mut config = ForecastConfig {
        window: 1,
        ..ForecastConfig::default()
    };

    let result = run(&series, &config);
    assert!(matches!(
        result,
        Err(ReportError::Forecast(ForecastError::DivisionByZeroActual { index: 1 }))
    ));

    config.zero_actual = ZeroActualPolicy::Undefined;
    let report = run(&series, &config).unwrap();

    assert!(report.to_string().contains("1\t0\t2\tundefined"));
    assert_eq!(report.summary().undefined, 1);
    assert_eq!(report.summary().evaluated, 3);
}

#[test]
fn test_run_rejects_zero_window() {
    let series = DataLoader::demo().unwrap();
    let config = ForecastConfig {
        window: 0,
        ..ForecastConfig::default()
    };

    assert!(matches!(
        run(&series, &config),
        Err(ReportError::ConfigError(_))
    ));
}

#[test]
fn test_json_report() {
    let series = DataLoader::from_list("2, 4, 8").unwrap();
    let config = ForecastConfig {
        window: 2,
        ..ForecastConfig::default()
    };

    let json = run(&series, &config).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["window"], 2);
    assert_eq!(value["rows"].as_array().unwrap().len(), 4);
    assert_eq!(value["rows"][2]["error"], 62.5);
    assert!(value["rows"][3]["actual"].is_null());
    assert_eq!(value["summary"]["mape"], 62.5);
    assert_eq!(value["summary"]["evaluated"], 1);
}
