//! Line chart of the series approximations against their term count

use std::f64::consts::PI;

use plotters::prelude::*;
use tracing::debug;

use super::svg::render_err;
use super::Figure;
use crate::series::SeriesRow;
use crate::PiError;

const LEIBNIZ: RGBColor = RGBColor(0x63, 0x6e, 0xfa);
const EULER: RGBColor = RGBColor(0xef, 0x55, 0x3b);

/// SVG chart of Leibniz and Euler approximations with a dotted pi reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceChart {
    pub width: u32,
    pub height: u32,
}

impl Default for ConvergenceChart {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl ConvergenceChart {
    /// Draw one line per series over `rows`, which should be ordered by term count.
    pub fn render(&self, rows: &[SeriesRow]) -> Result<Figure, PiError> {
        let max_terms = rows.iter().map(|r| r.terms).max().unwrap_or(1).max(1) as f64;
        let (low, high) = rows
            .iter()
            .flat_map(|r| [r.leibniz, r.euler])
            .fold((PI, PI), |(low, high), v| (low.min(v), high.max(v)));
        let pad = ((high - low) * 0.05).max(0.01);

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption("Infinite series approximations of \u{3c0}", ("sans-serif", 34).into_font())
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(0.0..max_terms, (low - pad)..(high + pad))
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .x_desc("Terms")
                .y_desc("Approximation")
                .draw()
                .map_err(render_err)?;

            chart
                .draw_series(LineSeries::new(
                    rows.iter().map(|r| (r.terms as f64, r.leibniz)),
                    LEIBNIZ.stroke_width(2),
                ))
                .map_err(render_err)?
                .label("Leibniz")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 25, y)], LEIBNIZ.stroke_width(3)));

            chart
                .draw_series(LineSeries::new(
                    rows.iter().map(|r| (r.terms as f64, r.euler)),
                    EULER.stroke_width(2),
                ))
                .map_err(render_err)?
                .label("Euler")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 25, y)], EULER.stroke_width(3)));

            // dash length equal to the stroke width draws dots
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(0.0, PI), (max_terms, PI)],
                    2,
                    4,
                    BLACK.stroke_width(2),
                ))
                .map_err(render_err)?
                .label("Pi value")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 25, y)], BLACK.stroke_width(1)));

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .border_style(BLACK)
                .background_style(WHITE.mix(0.7))
                .draw()
                .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }

        debug!(rows = rows.len(), bytes = svg.len(), "rendered convergence chart");
        Ok(Figure::Svg(svg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::convergence_table;

    /// Point lists of the polylines stroked with `color`.
    fn polylines<'a>(svg: &'a str, color: &str) -> Vec<&'a str> {
        let stroke = format!("stroke=\"{color}\"");
        svg.lines()
            .filter(|line| line.contains("<polyline") && line.contains(&stroke))
            .filter_map(|line| line.split("points=\"").nth(1)?.split('"').next())
            .collect()
    }

    #[test]
    fn test_both_series_are_drawn() {
        let rows = convergence_table(100);
        let Figure::Svg(svg) = ConvergenceChart::default().render(&rows).unwrap() else {
            panic!("expected svg figure");
        };
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Leibniz"));
        assert!(svg.contains("Euler"));

        for color in ["#636EFA", "#EF553B"] {
            let lines = polylines(&svg, color);
            assert!(
                lines
                    .iter()
                    .any(|points| points.split_whitespace().count() == rows.len()),
                "no {color} line with one vertex per row"
            );
        }
    }

    #[test]
    fn test_pi_reference_is_dotted() {
        let rows = convergence_table(40);
        let svg = ConvergenceChart::default().render(&rows).unwrap().to_document().unwrap();
        // legend sample plus many short dashes
        assert!(polylines(&svg, "#000000").len() > 10);
    }

    #[test]
    fn test_empty_table_still_renders() {
        let figure = ConvergenceChart::default().render(&[]).unwrap();
        assert_eq!(figure.file_extension(), "svg");
    }
}
