//! Figures: scatter plots of Monte Carlo samples and series convergence
//!
//! The estimator hands a [`ScatterData`] snapshot to a [`Renderer`]. Two
//! renderers exist: an SVG document drawn with `plotters` and a Plotly
//! figure description in JSON. [`ConvergenceChart`] draws the series
//! approximations against their term count.

pub mod convergence;
pub mod plotly;
pub mod svg;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coords::Coordinate;
use crate::PiError;

pub use convergence::ConvergenceChart;
pub use plotly::PlotlyRenderer;
pub use svg::SvgRenderer;

/// Data contract between the estimator and a renderer
#[derive(Debug, Clone, Copy)]
pub struct ScatterData<'a> {
    pub points: usize,
    pub coords: &'a [Coordinate],
    pub mask: &'a [bool],
    pub estimate: f64,
    pub error: f64,
}

impl ScatterData<'_> {
    /// `Points = 1,000   π ≈ 3.0840   Error = -1.83%`
    pub fn title(&self) -> String {
        format!(
            "Points = {}   \u{3c0} \u{2248} {:.4}   Error = {:.2}%",
            group_thousands(self.points),
            self.estimate,
            self.error * 100.0
        )
    }

    /// Samples paired with their classification.
    pub fn classified(&self) -> impl Iterator<Item = (Coordinate, bool)> + '_ {
        self.coords.iter().copied().zip(self.mask.iter().copied())
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "red" => Color::RED,
            "blue" => Color::BLUE,
            "green" => Color::rgb(0, 128, 0),
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" => Color::rgb(0, 255, 255),
            "magenta" => Color::rgb(255, 0, 255),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = PiError;

    /// Accepts a handful of CSS color names or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || PiError::InvalidColor(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        Color::named(&s.to_ascii_lowercase()).ok_or_else(invalid)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Dot colors for samples inside and outside the quarter-circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotColors {
    pub inside: Color,
    pub outside: Color,
}

impl DotColors {
    pub fn new(inside: Color, outside: Color) -> Self {
        Self { inside, outside }
    }

    pub fn pick(&self, inside: bool) -> Color {
        if inside {
            self.inside
        } else {
            self.outside
        }
    }
}

impl Default for DotColors {
    fn default() -> Self {
        Self::new(Color::RED, Color::BLUE)
    }
}

/// Presentation options
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotStyle {
    pub colors: DotColors,
    /// Draw the unit quarter-circle arc
    pub show_arc: bool,
}

/// A rendered figure
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// Standalone SVG document
    Svg(String),
    /// Plotly figure (`data` + `layout`)
    Plotly(Value),
}

impl Figure {
    /// `svg` or `json`, matching the document [`to_document`](Self::to_document) returns.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Figure::Svg(_) => "svg",
            Figure::Plotly(_) => "json",
        }
    }

    pub fn to_document(&self) -> Result<String, PiError> {
        match self {
            Figure::Svg(svg) => Ok(svg.clone()),
            Figure::Plotly(figure) => Ok(serde_json::to_string_pretty(figure)?),
        }
    }
}

/// Something that turns samples into a figure
pub trait Renderer {
    fn render(&self, data: &ScatterData<'_>, style: &PlotStyle) -> Result<Figure, PiError>;
}

/// Renderer selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Plotters,
    #[default]
    Plotly,
}

impl Backend {
    /// Renderer drawing figures for this backend.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Backend::Plotters => Box::new(SvgRenderer::default()),
            Backend::Plotly => Box::new(PlotlyRenderer),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Plotters => "plotters",
            Backend::Plotly => "plotly",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plotters" | "svg" | "matplotlib" => Ok(Backend::Plotters),
            "plotly" => Ok(Backend::Plotly),
            _ => Err(PiError::UnknownBackend(s.to_string())),
        }
    }
}
