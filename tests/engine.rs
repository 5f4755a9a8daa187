//! End-to-end checks of the validation pipeline through the public API.

use prng_validation::hypothesis::VerdictDetails;
use prng_validation::{
    parse_sequence, run, CriticalValueProvider, CriticalValues, FileConfig,
    KsMethod, Outcome, SampleGenerator, SignificanceLevel, TestKind, Thresholds,
    ValidationEngine, ValidationError,
};

fn at(alpha: f64) -> Thresholds {
    Thresholds::Significance(SignificanceLevel::new(alpha).unwrap())
}

#[test]
fn known_example_deviations() {
    let report = run(vec![0.12, 0.54, 0.98, 0.33, 0.77], &at(0.05)).unwrap();

    match report.conformity().details {
        VerdictDetails::Conformity { d_plus, d_minus } => {
            assert!((d_plus - 0.08).abs() < 1e-12);
            assert!((d_minus - 0.18).abs() < 1e-12);
        }
        ref other => panic!("unexpected details {other:?}"),
    }
    assert!((report.conformity().statistic.unwrap() - 0.18).abs() < 1e-12);
    assert!(report.all_passed());
}

#[test]
fn alternating_sequence_has_maximal_runs() {
    let report = run(vec![0.1, 0.9, 0.2, 0.8, 0.3], &at(0.05)).unwrap();
    assert_eq!(report.independence().runs(), Some(4));
}

#[test]
fn constant_half_sequence() {
    let report = run(vec![0.5; 10], &at(0.05)).unwrap();

    assert_eq!(report.mean().statistic, Some(0.0));
    assert_eq!(report.mean().outcome, Outcome::Pass);
    assert_eq!(report.variance().statistic, Some(0.0));
    assert_eq!(report.independence().runs(), Some(1));
    assert_eq!(report.independence().outcome, Outcome::Fail);
}

#[test]
fn monotonic_sequence_fails_independence() {
    let increasing: Vec<f64> = (1..=30).map(|i| i as f64 / 31.0).collect();
    let mut decreasing = increasing.clone();
    decreasing.reverse();

    for values in [increasing, decreasing] {
        let report = run(values, &at(0.05)).unwrap();
        assert_eq!(report.independence().runs(), Some(1));
        assert!(report.independence().statistic.unwrap() < -3.0);
        assert_eq!(report.independence().passed(), Some(false));
        assert!(!report.all_passed());
    }
}

#[test]
fn two_values_keep_mean_and_conformity() {
    let report = run(vec![0.25, 0.75], &at(0.05)).unwrap();

    assert!(report.mean().outcome.is_applicable());
    assert!(report.conformity().outcome.is_applicable());
    assert!(matches!(
        report.independence().outcome,
        Outcome::NotApplicable { .. }
    ));
    assert_eq!(report.independence().statistic, None);
}

#[test]
fn blocking_errors() {
    assert_eq!(
        run(vec![0.4, -0.1], &at(0.05)).unwrap_err(),
        ValidationError::OutOfRangeInput {
            index: 1,
            value: -0.1
        }
    );
    assert!(matches!(
        run(Vec::new(), &at(0.05)),
        Err(ValidationError::InsufficientSample { got: 0, required: 2 })
    ));
    assert!(SignificanceLevel::new(0.0).is_err());
    assert!(CriticalValues::supplied(1.96, 0.1, 25.0, 20.0).is_err());
}

#[test]
fn supplied_values_match_computed_decisions() {
    let values = vec![0.12, 0.54, 0.98, 0.33, 0.77];
    let computed = CriticalValueProvider::default().compute(0.05, values.len()).unwrap();
    let supplied = CriticalValues::supplied(
        computed.z(),
        computed.d(),
        computed.chi_low(),
        computed.chi_high(),
    )
    .unwrap();

    let a = run(values.clone(), &Thresholds::Supplied(computed)).unwrap();
    let b = run(values, &Thresholds::Supplied(supplied)).unwrap();
    for kind in TestKind::ALL {
        assert_eq!(a.verdict(kind).outcome, b.verdict(kind).outcome);
        assert_eq!(a.verdict(kind).statistic, b.verdict(kind).statistic);
    }
}

#[test]
fn smaller_alpha_is_more_permissive() {
    let provider = CriticalValueProvider::new(KsMethod::Table);
    let loose = provider.compute(0.01, 50).unwrap();
    let strict = provider.compute(0.10, 50).unwrap();

    assert!(loose.z() > strict.z());
    assert!(loose.d() > strict.d());
    assert!(loose.chi_low() < strict.chi_low());
    assert!(loose.chi_high() > strict.chi_high());
}

#[test]
fn parsed_text_flows_into_report() {
    let values = parse_sequence("0.12, 0.54\n0.98 0.33,0.77\n").unwrap();
    let report = run(values, &at(0.05)).unwrap();
    assert_eq!(report.sample_size(), 5);

    let table = format!("{report:.3}");
    assert!(table.contains("| **Mean** | PASS |"));
    assert!(table.contains("D = 0.180"));
}

#[test]
fn config_file_drives_engine() {
    let config = FileConfig::from_toml(
        r#"
        [significance]
        alpha = 0.10
        ks_method = "table"
        "#,
    )
    .unwrap();
    let engine = ValidationEngine::new(config.engine());
    assert_eq!(engine.provider().ks_method(), KsMethod::Table);

    let report = engine
        .run(vec![0.12, 0.54, 0.98, 0.33, 0.77], &config.thresholds().unwrap())
        .unwrap();
    assert!((report.critical_values().d() - 1.22 / 5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn report_serializes_to_toml() {
    let report = run(vec![0.3, 0.7], &at(0.05)).unwrap();
    let text = toml::to_string_pretty(&report).unwrap();

    assert!(text.contains("sample_size = 2"));
    assert!(text.contains("result = \"not_applicable\""));
    assert!(text.contains("mode = \"computed\""));
}

#[test]
fn generated_sample_is_accepted_on_mean_and_conformity() {
    let values = SampleGenerator::from_seed(11).sample(2_000);
    let report = run(values, &at(0.001)).unwrap();
    assert_eq!(report.mean().passed(), Some(true));
    assert_eq!(report.conformity().passed(), Some(true));
}
