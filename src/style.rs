//! Colors and stroke settings for the icon
//!
//! Every field has a default taken from the stock icon, so a TOML `[style]`
//! table only needs the keys it changes.

use serde::Deserialize;

/// Presentation settings shared by all shapes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconStyle {
    /// Fill color of the code wedges
    pub pulse_fill: String,
    /// Stroke color of dividers and rings
    pub stroke: String,
    /// Stroke width of dividers and rings
    pub stroke_width: f64,
    /// Fill color of the optional backing rectangle
    pub background: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            pulse_fill: "#34deeb".to_string(),
            stroke: "black".to_string(),
            stroke_width: 5.0,
            background: "white".to_string(),
        }
    }
}

impl IconStyle {
    /// Fill-only style for wedges
    pub fn pulse(&self) -> ShapeStyle {
        ShapeStyle::new().with_fill(&self.pulse_fill)
    }

    /// Round-capped stroke for divider lines
    pub fn radial(&self) -> ShapeStyle {
        ShapeStyle::new()
            .with_stroke(&self.stroke, self.stroke_width)
            .with_linecap("round")
    }

    /// Unfilled stroke for rings
    pub fn ring(&self) -> ShapeStyle {
        ShapeStyle::new()
            .with_stroke(&self.stroke, self.stroke_width)
            .with_fill("none")
    }

    pub fn backdrop(&self) -> ShapeStyle {
        ShapeStyle::new().with_fill(&self.background)
    }
}

/// Presentation attributes applied to a single SVG element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_linecap: Option<String>,
}

impl ShapeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_linecap(mut self, cap: impl Into<String>) -> Self {
        self.stroke_linecap = Some(cap.into());
        self
    }
}
