//! Radial Morse icon generation
//!
//! Each code gets its own spoke around the canvas center. Its symbols are
//! drawn as annular wedges stacked outward from the center, last symbol
//! innermost, with a divider line along the spoke and five rings on top.

use tracing::debug;

use crate::code::Code;
use crate::config::IconConfig;
use crate::geometry::Canvas;
use crate::renderer::svg::{self, Element};
use crate::renderer::{ResolvedPath, SvgBuilder, SvgConfig, SvgDocument};
use crate::style::{IconStyle, ShapeStyle};

/// Radius, in dits, where the innermost wedge starts
const FIRST_PULSE_DITS: f64 = 3.0;

/// Divider span, in dits
const DIVIDER_INNER_DITS: f64 = 2.0;
const DIVIDER_OUTER_DITS: f64 = 16.0;

/// Rings are drawn every `RING_STEP_DITS`, `RING_COUNT` times
const RING_STEP_DITS: f64 = 3.0;
const RING_COUNT: usize = 5;

/// Converts codes into an SVG document on a fixed canvas
#[derive(Debug, Clone)]
pub struct IconGenerator {
    canvas: Canvas,
    style: IconStyle,
    svg: SvgConfig,
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new(Canvas::default(), IconStyle::default())
    }
}

impl IconGenerator {
    pub fn new(canvas: Canvas, style: IconStyle) -> Self {
        Self {
            canvas,
            style,
            svg: SvgConfig::default(),
        }
    }

    /// Create a generator from the canvas and style of a configuration
    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(config.canvas, config.style.clone())
    }

    /// Set the SVG serialization options
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Outline of an annular wedge centered on `rotation`
    ///
    /// Corners are visited inner-start, outer-start, outer-stop, inner-stop.
    /// The outer arc sweeps clockwise and the inner arc sweeps back
    /// counter-clockwise, so the outline encloses a single wedge.
    pub fn pulse_outline(
        &self,
        rotation: f64,
        inner_radius: f64,
        angle: f64,
        width: f64,
    ) -> ResolvedPath {
        let start = rotation - angle / 2.0;
        let stop = rotation + angle / 2.0;
        let outer_radius = inner_radius + width;
        let large_arc = angle > 180.0;

        let inner_start = self.canvas.polar(inner_radius, start);
        let outer_start = self.canvas.polar(outer_radius, start);
        let outer_stop = self.canvas.polar(outer_radius, stop);
        let inner_stop = self.canvas.polar(inner_radius, stop);

        ResolvedPath::new()
            .move_to(inner_start)
            .line_to(outer_start)
            .arc_to(outer_stop, outer_radius, large_arc, true)
            .line_to(inner_stop)
            .arc_to(inner_start, inner_radius, large_arc, false)
    }

    /// Annular wedge `path` element for one symbol
    pub fn build_pulse(
        &self,
        rotation: f64,
        inner_radius: f64,
        angle: f64,
        width: f64,
        style: &ShapeStyle,
    ) -> Element {
        svg::path(&self.pulse_outline(rotation, inner_radius, angle, width)).styled(style)
    }

    /// Straight `line` along `rotation` between two radii
    pub fn build_radial(
        &self,
        rotation: f64,
        outer_radius: f64,
        inner_radius: f64,
        style: &ShapeStyle,
    ) -> Element {
        svg::line(
            self.canvas.polar(inner_radius, rotation),
            self.canvas.polar(outer_radius, rotation),
        )
        .styled(style)
    }

    /// Draw one wedge per symbol, last symbol innermost
    pub fn draw_code(&self, builder: &mut SvgBuilder, code: &Code, rotation: f64, angle: f64) {
        let dit = self.canvas.dit();
        let style = self.style.pulse();
        let mut cursor = FIRST_PULSE_DITS;

        for symbol in code.symbols().iter().rev() {
            let size = symbol.weight() as f64;
            builder.push(self.build_pulse(rotation, dit * cursor, angle, dit * size, &style));
            cursor += size + 1.0;
        }
    }

    /// Draw every code with its divider, then the rings
    pub fn draw_all(&self, builder: &mut SvgBuilder, codes: &[Code]) {
        let dit = self.canvas.dit();
        let angle = 180.0 / codes.len() as f64;
        let radial = self.style.radial();

        for (i, code) in codes.iter().enumerate() {
            // Spokes are 2 * angle apart, so codes cover 360 degrees once.
            let rotation = angle * i as f64 * 2.0;
            debug!(
                code = %code,
                rotation,
                slice = angle,
                weighted_length = code.weighted_length(),
                "drawing code"
            );
            self.draw_code(builder, code, rotation, angle);
            builder.push(self.build_radial(
                rotation,
                DIVIDER_OUTER_DITS * dit,
                DIVIDER_INNER_DITS * dit,
                &radial,
            ));
        }

        let ring = self.style.ring();
        let center = self.canvas.center();
        for i in 1..=RING_COUNT {
            let r = dit * RING_STEP_DITS * i as f64;
            builder.push(svg::circle(center, r).styled(&ring));
        }
    }

    /// Assemble the full document
    pub fn render(&self, codes: &[Code], with_background: bool) -> SvgDocument {
        let mut builder = SvgBuilder::new(self.svg.clone(), self.canvas);

        if with_background {
            let size = self.canvas.size;
            builder.push(svg::rect(0.0, 0.0, size, size).styled(&self.style.backdrop()));
        }

        self.draw_all(&mut builder, codes);
        debug!(elements = builder.len(), "icon assembled");
        builder.build()
    }
}
