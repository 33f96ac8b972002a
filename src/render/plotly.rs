//! Plotly figure description
//!
//! Produces the JSON a Plotly front end feeds to `Plotly.newPlot`: one
//! marker trace with a color per sample, square axes over the unit square
//! and, optionally, a circle shape whose visible quarter is the arc.

use serde_json::{json, Value};
use tracing::debug;

use super::{Figure, PlotStyle, Renderer, ScatterData};
use crate::PiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotlyRenderer;

impl Renderer for PlotlyRenderer {
    fn render(&self, data: &ScatterData<'_>, style: &PlotStyle) -> Result<Figure, PiError> {
        let (x, y): (Vec<f64>, Vec<f64>) = data.coords.iter().map(|c| (c.x, c.y)).unzip();
        let colors: Vec<String> = data
            .mask
            .iter()
            .map(|&inside| style.colors.pick(inside).to_string())
            .collect();

        let shapes: Vec<Value> = if style.show_arc {
            vec![json!({
                "type": "circle",
                "x0": -1, "x1": 1,
                "y0": -1, "y1": 1,
                "line": { "color": style.colors.inside.to_string() },
            })]
        } else {
            Vec::new()
        };

        let figure = json!({
            "data": [{
                "type": "scatter",
                "mode": "markers",
                "x": x,
                "y": y,
                "marker": { "color": colors },
            }],
            "layout": {
                "title": { "text": data.title() },
                "xaxis": {
                    "range": [0, 1],
                    "constrain": "domain",
                    "scaleanchor": "y",
                    "scaleratio": 1,
                },
                "yaxis": { "range": [0, 1], "constrain": "domain" },
                "shapes": shapes,
                "autosize": true,
                "margin": { "l": 20, "r": 20, "t": 40, "b": 20 },
                "modebar": { "orientation": "v" },
            },
        });

        debug!(points = data.points, arc = style.show_arc, "rendered plotly figure");
        Ok(Figure::Plotly(figure))
    }
}
