//! Files written by the command line: CSV tables, the run summary and figures
//!
//! Every writer creates missing parent directories first.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::coords::Coordinate;
use crate::monte_carlo::RunSummary;
use crate::render::Figure;
use crate::series::SeriesRow;
use crate::PiError;

#[derive(Debug, Clone, Copy, Serialize)]
struct SampleRow {
    index: usize,
    x: f64,
    y: f64,
    inside: bool,
}

fn ensure_parent(path: &Path) -> Result<(), PiError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Convergence table as CSV, one row per term count.
pub fn write_series_csv(path: &Path, rows: &[SeriesRow]) -> Result<(), PiError> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote series table");
    Ok(())
}

/// Samples as CSV with their index and classification; `mask` must match `coords`.
pub fn write_samples_csv(path: &Path, coords: &[Coordinate], mask: &[bool]) -> Result<(), PiError> {
    if coords.len() != mask.len() {
        return Err(PiError::InvalidValue {
            field: "mask",
            reason: "must have one entry per coordinate",
        });
    }

    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for (index, (c, &inside)) in coords.iter().zip(mask).enumerate() {
        writer.serialize(SampleRow {
            index,
            x: c.x,
            y: c.y,
            inside,
        })?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = coords.len(), "wrote samples");
    Ok(())
}

/// Run summary as pretty-printed JSON.
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<(), PiError> {
    ensure_parent(path)?;
    let data = serde_json::to_string_pretty(summary)?;
    fs::write(path, data)?;
    Ok(())
}

/// Figure document, SVG or Plotly JSON.
pub fn write_figure(path: &Path, figure: &Figure) -> Result<(), PiError> {
    ensure_parent(path)?;
    fs::write(path, figure.to_document()?)?;
    debug!(path = %path.display(), "wrote figure");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monte_carlo::PiMonteCarlo;
    use crate::render::ConvergenceChart;
    use crate::series::convergence_table;

    #[test]
    fn test_write_series_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("series.csv");
        write_series_csv(&path, &convergence_table(3)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "terms,leibniz,euler,leibniz_error,euler_error"
        );
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn test_write_samples_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mut mc = PiMonteCarlo::new(10, Some(42)).unwrap();
        let coords = mc.coordinates().unwrap().to_vec();
        let mask = mc.mask().unwrap().to_vec();

        let samples = dir.path().join("samples.csv");
        write_samples_csv(&samples, &coords, &mask).unwrap();
        let text = fs::read_to_string(&samples).unwrap();
        assert_eq!(text.lines().count(), 11);
        assert_eq!(text.matches(",true").count(), 6);

        let summary_path = dir.path().join("summary.json");
        write_summary(&summary_path, &mc.summary().unwrap()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
        assert_eq!(value["points"], 10);
        assert_eq!(value["inside"], 6);
        assert_eq!(value["seed"], 42);
    }

    #[test]
    fn test_mismatched_mask_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let coords = [Coordinate::new(0.1, 0.1)];
        let err = write_samples_csv(&dir.path().join("s.csv"), &coords, &[]).unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn test_write_convergence_figure() {
        let dir = tempfile::tempdir().unwrap();
        let figure = ConvergenceChart::default()
            .render(&convergence_table(20))
            .unwrap();
        let path = dir.path().join("plots").join("series.svg");
        write_figure(&path, &figure).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("<polyline"));
    }
}
