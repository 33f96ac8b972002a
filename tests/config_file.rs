use std::path::Path;

use pi_approx::render::{Backend, DotColors};
use pi_approx::{DashboardConfig, PiMonteCarlo, Points};

#[test]
fn bundled_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join("dashboard.toml");
    let config = DashboardConfig::load(&path).unwrap();
    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn config_drives_an_estimator() {
    let config = DashboardConfig::from_toml(
        r#"
        [monte_carlo]
        initial_points = 100
        seed = 42
        backend = "plotters"
        inside_color = "green"
        "#,
    )
    .unwrap();
    let settings = &config.monte_carlo;

    let points = Points::try_from(settings.effective_points(settings.initial_points)).unwrap();
    let mut mc = PiMonteCarlo::with_points(points, settings.seed);
    assert!((mc.estimate().unwrap() - 3.04).abs() < 1e-9);

    let colors = settings.dot_colors().unwrap();
    assert_ne!(colors, DotColors::default());
    let figure = mc
        .render(&colors, settings.backend().unwrap(), settings.show_arc)
        .unwrap();
    assert_eq!(figure.file_extension(), "svg");
    assert_eq!(settings.backend().unwrap(), Backend::Plotters);
}
