//! `pi-approx` command line: series approximations and Monte Carlo runs

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pi_approx::config::DashboardConfig;
use pi_approx::output::{write_figure, write_samples_csv, write_series_csv, write_summary};
use pi_approx::render::{Backend, Color, ConvergenceChart, DotColors};
use pi_approx::series::{convergence_table, Series, SeriesRow};
use pi_approx::{PiMonteCarlo, Points};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Approximations of pi by infinite series and Monte Carlo sampling")]
struct Cli {
    /// Dashboard configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Leibniz and Euler partial sums
    Series {
        /// Number of terms
        #[arg(long)]
        terms: Option<u64>,

        /// Write the convergence table for 1..=terms to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Draw the convergence chart for 1..=terms to this SVG file
        #[arg(long)]
        plot: Option<PathBuf>,
    },
    /// Quarter-circle sampling estimate
    MonteCarlo {
        /// Number of sample points
        #[arg(long, conflicts_with = "random_points")]
        points: Option<usize>,

        /// Draw the point count uniformly from the configured range
        #[arg(long, default_value_t = false)]
        random_points: bool,

        /// Random seed; negative seeds are rejected when sampling
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i64>,

        /// Figure backend: plotters (SVG) or plotly (JSON)
        #[arg(long)]
        backend: Option<String>,

        /// Do not draw the quarter-circle arc
        #[arg(long, default_value_t = false)]
        no_arc: bool,

        #[arg(long)]
        inside_color: Option<String>,

        #[arg(long)]
        outside_color: Option<String>,

        /// Directory for the figure, samples.csv and summary.json
        #[arg(long)]
        outdir: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Series { terms, csv, plot } => {
            let terms = config.series.clamp(terms.unwrap_or(config.series.default_terms));
            info!(terms, "series approximation");

            let row = SeriesRow::at(terms);
            for series in Series::ALL {
                let (value, error) = match series {
                    Series::Leibniz => (row.leibniz, row.leibniz_error),
                    Series::Euler => (row.euler, row.euler_error),
                };
                println!("Estimation of pi - {series}: {value}");
                println!("Error - {series}: {:.2} %", error * 100.0);
            }

            if csv.is_some() || plot.is_some() {
                let table = convergence_table(terms);
                if let Some(path) = csv {
                    write_series_csv(&path, &table)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Convergence table: {}", path.display());
                }
                if let Some(path) = plot {
                    let figure = ConvergenceChart::default().render(&table)?;
                    write_figure(&path, &figure)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Convergence chart: {}", path.display());
                }
            }
        }
        Command::MonteCarlo {
            points,
            random_points,
            seed,
            backend,
            no_arc,
            inside_color,
            outside_color,
            outdir,
        } => {
            let settings = &config.monte_carlo;
            let requested = if random_points {
                settings.random_points(&mut rand::thread_rng())
            } else {
                points.unwrap_or(settings.initial_points)
            };
            let points = settings.effective_points(requested);
            let seed = seed.or(settings.seed);

            let backend: Backend = match backend {
                Some(name) => name.parse()?,
                None => settings.backend()?,
            };
            let defaults = settings.dot_colors()?;
            let colors = DotColors::new(
                parse_color(inside_color, defaults.inside)?,
                parse_color(outside_color, defaults.outside)?,
            );
            info!(points, seed = ?seed, %backend, "monte carlo estimation");

            let mut estimator = PiMonteCarlo::with_points(Points::try_from(points)?, seed);
            let summary = estimator.summary()?;
            println!("Number of points: {}", summary.points);
            println!("Estimation of pi: {}", summary.estimate);
            println!("Percent error: {:.2} %", summary.error * 100.0);

            if let Some(dir) = outdir {
                let figure = estimator.render(&colors, backend, !no_arc)?;
                let figure_path = dir.join(format!("figure.{}", figure.file_extension()));
                write_figure(&figure_path, &figure)
                    .with_context(|| format!("failed to write {}", figure_path.display()))?;
                let coords = estimator.coordinates()?.to_vec();
                write_samples_csv(&dir.join("samples.csv"), &coords, estimator.mask()?)
                    .context("failed to write samples.csv")?;
                write_summary(&dir.join("summary.json"), &summary)
                    .context("failed to write summary.json")?;
                println!("Output directory: {}", dir.display());
            }
        }
    }

    Ok(())
}

fn parse_color(raw: Option<String>, fallback: Color) -> anyhow::Result<Color> {
    match raw {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(fallback),
    }
}
