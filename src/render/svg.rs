//! SVG scatter plot drawn with plotters

use std::f64::consts::FRAC_PI_2;

use plotters::prelude::*;
use plotters::style::Color as _;
use tracing::debug;

use super::{Color, Figure, PlotStyle, Renderer, ScatterData};
use crate::PiError;

const ARC_SEGMENTS: usize = 180;

/// Square SVG scatter plot; the view spans `[-0.02, 1.02]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRenderer {
    /// Side length in pixels
    pub size: u32,
    pub margin: u32,
    pub dot_radius: i32,
    pub arc_width: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            size: 800,
            margin: 20,
            dot_radius: 3,
            arc_width: 3,
        }
    }
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

pub(super) fn render_err<E: std::fmt::Display>(err: E) -> PiError {
    PiError::Render(err.to_string())
}

/// Quarter-circle of radius 1 around the origin, from (1, 0) to (0, 1).
fn arc_points() -> impl Iterator<Item = (f64, f64)> {
    (0..=ARC_SEGMENTS).map(|i| {
        let theta = FRAC_PI_2 * i as f64 / ARC_SEGMENTS as f64;
        (theta.cos(), theta.sin())
    })
}

impl Renderer for SvgRenderer {
    fn render(&self, data: &ScatterData<'_>, style: &PlotStyle) -> Result<Figure, PiError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.size, self.size)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(data.title(), ("sans-serif", 22).into_font())
                .margin(self.margin)
                .build_cartesian_2d(-0.02f64..1.02f64, -0.02f64..1.02f64)
                .map_err(render_err)?;

            let inside = rgb(style.colors.inside);
            let outside = rgb(style.colors.outside);
            chart
                .draw_series(data.classified().map(|(c, is_inside)| {
                    let color = if is_inside { inside } else { outside };
                    Circle::new((c.x, c.y), self.dot_radius, color.filled())
                }))
                .map_err(render_err)?;

            if style.show_arc {
                chart
                    .draw_series(LineSeries::new(
                        arc_points(),
                        inside.stroke_width(self.arc_width),
                    ))
                    .map_err(render_err)?;
            }

            root.present().map_err(render_err)?;
        }

        debug!(points = data.points, bytes = svg.len(), "rendered svg scatter");
        Ok(Figure::Svg(svg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coordinate;
    use crate::render::DotColors;

    fn sample() -> (Vec<Coordinate>, Vec<bool>) {
        let coords = vec![
            Coordinate::new(0.1, 0.2),
            Coordinate::new(0.9, 0.9),
            Coordinate::new(0.5, 0.5),
        ];
        (coords, vec![true, false, true])
    }

    #[test]
    fn test_svg_document() {
        let (coords, mask) = sample();
        let data = ScatterData {
            points: 3,
            coords: &coords,
            mask: &mask,
            estimate: 8.0 / 3.0,
            error: -0.15,
        };
        let style = PlotStyle {
            colors: DotColors::default(),
            show_arc: false,
        };

        let Figure::Svg(svg) = SvgRenderer::default().render(&data, &style).unwrap() else {
            panic!("expected svg figure");
        };
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Points = 3"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_svg_arc() {
        let (coords, mask) = sample();
        let data = ScatterData {
            points: 3,
            coords: &coords,
            mask: &mask,
            estimate: 8.0 / 3.0,
            error: -0.15,
        };
        let style = PlotStyle {
            colors: DotColors::default(),
            show_arc: true,
        };

        let figure = SvgRenderer::default().render(&data, &style).unwrap();
        let svg = figure.to_document().unwrap();
        assert!(svg.contains("<polyline"));
        assert_eq!(figure.file_extension(), "svg");
    }

    #[test]
    fn test_arc_endpoints() {
        let points: Vec<(f64, f64)> = arc_points().collect();
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert_eq!(points[0], (1.0, 0.0));
        let (x, y) = points[ARC_SEGMENTS];
        assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
        for (x, y) in points {
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-12);
        }
    }
}
