use approx::assert_abs_diff_eq;
use pi_approx::render::{Backend, DotColors, Figure};
use pi_approx::{PiError, PiMonteCarlo};
use serde_json::json;

const SEED: i64 = 42;

#[test]
fn estimate_with_seed_42() {
    let cases = [
        (10, 2.4, 0.01),
        (100, 3.04, 0.001),
        (1_000, 3.084, 0.001),
        (10_000, 3.16, 0.001),
        (100_000, 3.15008, 1e-6),
    ];
    for (points, expected, tolerance) in cases {
        let mut mc = PiMonteCarlo::new(points, Some(SEED)).unwrap();
        assert_abs_diff_eq!(mc.estimate().unwrap(), expected, epsilon = tolerance);
    }
}

#[test]
fn error_with_seed_42() {
    let cases = [
        (10, -0.236, 1e-4),
        (100, -0.03233, 1e-4),
        (1_000, -0.01833, 1e-4),
        (10_000, 0.005859, 1e-5),
        (100_000, 0.0027016, 1e-6),
    ];
    for (points, expected, tolerance) in cases {
        let mut mc = PiMonteCarlo::new(points, Some(SEED)).unwrap();
        assert_abs_diff_eq!(mc.error_vs_pi().unwrap(), expected, epsilon = tolerance);
    }
}

#[test]
fn independent_estimators_agree() {
    let mut a = PiMonteCarlo::new(5_000, Some(7)).unwrap();
    let mut b = PiMonteCarlo::new(5_000, Some(7)).unwrap();
    assert_eq!(a.coordinates().unwrap(), b.coordinates().unwrap());
    assert_eq!(a.estimate().unwrap().to_bits(), b.estimate().unwrap().to_bits());
    assert_eq!(
        a.error_vs_pi().unwrap().to_bits(),
        b.error_vs_pi().unwrap().to_bits()
    );
}

#[test]
fn repeated_reads_are_identical() {
    let mut mc = PiMonteCarlo::new(1_000, None).unwrap();
    let coords = mc.coordinates().unwrap().to_vec();
    let estimate = mc.estimate().unwrap();
    for _ in 0..3 {
        assert_eq!(mc.coordinates().unwrap(), &coords[..]);
        assert_eq!(mc.estimate().unwrap().to_bits(), estimate.to_bits());
    }
}

#[test]
fn parameter_change_regenerates_samples() {
    let mut mc = PiMonteCarlo::new(10, Some(SEED)).unwrap();
    assert_eq!(mc.coordinates().unwrap().len(), 10);
    assert_eq!(mc.estimate().unwrap(), 2.4);

    mc.set_points(100).unwrap();
    assert_eq!(mc.coordinates().unwrap().len(), 100);
    assert_abs_diff_eq!(mc.estimate().unwrap(), 3.04, epsilon = 1e-9);

    let before = mc.coordinates().unwrap().to_vec();
    mc.set_seed(Some(SEED + 1));
    assert_eq!(mc.coordinates().unwrap().len(), 100);
    assert_ne!(mc.coordinates().unwrap(), &before[..]);
}

#[test]
fn boundary_parameters() {
    assert!(PiMonteCarlo::new(0, Some(SEED)).unwrap_err().is_value_error());
    assert!(PiMonteCarlo::new(-1, Some(SEED)).unwrap_err().is_value_error());

    let err = PiMonteCarlo::from_values(&json!(1.0), &json!(SEED)).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.to_string(), "points must be an integer");

    let err = PiMonteCarlo::from_values(&json!(10), &json!(1.0)).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.to_string(), "seed must be None or integer");

    for seed in [json!(42), json!(0), json!(-1), json!(null)] {
        let mc = PiMonteCarlo::from_values(&json!(10), &seed).unwrap();
        assert_eq!(mc.seed(), seed.as_i64());
    }
}

#[test]
fn negative_seed_fails_only_when_sampling() {
    let mut mc = PiMonteCarlo::new(10, Some(-1)).unwrap();
    assert_eq!(mc.seed(), Some(-1));
    let err = mc.estimate().unwrap_err();
    assert!(err.is_value_error());
    assert!(!mc.is_cached());

    mc.set_seed(Some(SEED));
    assert_eq!(mc.estimate().unwrap(), 2.4);
}

#[test]
fn render_both_backends() {
    let mut mc = PiMonteCarlo::new(500, Some(SEED)).unwrap();
    let colors = DotColors::default();

    let svg = mc.render(&colors, Backend::Plotters, true).unwrap();
    assert!(matches!(svg, Figure::Svg(ref doc) if doc.matches("<circle").count() == 500));

    let plotly = mc.render_named(&colors, "plotly", false).unwrap();
    let Figure::Plotly(value) = plotly else {
        panic!("expected plotly figure");
    };
    let inside = mc.count_inside().unwrap();
    let colors_out = value["data"][0]["marker"]["color"].as_array().unwrap();
    assert_eq!(colors_out.len(), 500);
    assert_eq!(
        colors_out.iter().filter(|c| *c == "#ff0000").count(),
        inside
    );
}

#[test]
fn unknown_backend_is_value_error() {
    let mut mc = PiMonteCarlo::new(10, Some(SEED)).unwrap();
    let err = mc
        .render_named(&DotColors::default(), "gnuplot", false)
        .unwrap_err();
    assert!(matches!(err, PiError::UnknownBackend(_)));
    assert_eq!(mc.points(), 10);
    assert_eq!(mc.estimate().unwrap(), 2.4);
}

#[test]
fn matplotlib_name_selects_svg() {
    let mut mc = PiMonteCarlo::new(10, Some(SEED)).unwrap();
    let figure = mc
        .render_named(&DotColors::default(), "matplotlib", true)
        .unwrap();
    assert!(matches!(figure, Figure::Svg(_)));
}
