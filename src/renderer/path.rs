//! Path outline utilities
//!
//! Converts resolved path segments into SVG path `d` attribute strings.

use crate::geometry::Point;

use super::svg::format_number;

/// A segment in a resolved path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn arc_to(mut self, end: Point, radius: f64, large_arc: bool, sweep: bool) -> Self {
        self.segments.push(PathSegment::ArcTo {
            end,
            radius,
            large_arc,
            sweep,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Every explicit point the path visits, in order
    pub fn points(&self) -> Vec<Point> {
        self.segments
            .iter()
            .filter_map(|seg| match seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
                PathSegment::ArcTo { end, .. } => Some(*end),
                PathSegment::Close => None,
            })
            .collect()
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|seg| match seg {
                PathSegment::MoveTo(p) => {
                    format!("M{} {}", format_number(p.x), format_number(p.y))
                }
                PathSegment::LineTo(p) => {
                    format!("L{} {}", format_number(p.x), format_number(p.y))
                }
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let large = if *large_arc { 1 } else { 0 };
                    let sw = if *sweep { 1 } else { 0 };
                    // SVG arc: A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    let r = format_number(*radius);
                    format!(
                        "A{} {} 0 {} {} {} {}",
                        r,
                        r,
                        large,
                        sw,
                        format_number(end.x),
                        format_number(end.y)
                    )
                }
                PathSegment::Close => "Z".to_string(),
            })
            .collect();

        parts.join(" ")
    }
}
