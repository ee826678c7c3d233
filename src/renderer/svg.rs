//! SVG document model and serialization
//!
//! Shapes are immutable [`Element`] values. An [`SvgBuilder`] owns the
//! ordered child list of the root `svg` element and produces an
//! [`SvgDocument`] once all shapes are appended.

use crate::geometry::{Canvas, Point};
use crate::style::ShapeStyle;

use super::path::ResolvedPath;
use super::SvgConfig;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// A single XML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Add a string attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a numeric attribute, formatted with [`format_number`]
    pub fn num(self, key: impl Into<String>, value: f64) -> Self {
        self.attr(key, format_number(value))
    }

    /// Append the presentation attributes that are set on `style`
    pub fn styled(mut self, style: &ShapeStyle) -> Self {
        if let Some(fill) = &style.fill {
            self = self.attr("fill", fill.as_str());
        }
        if let Some(stroke) = &style.stroke {
            self = self.attr("stroke", stroke.as_str());
        }
        if let Some(width) = style.stroke_width {
            self = self.num("stroke-width", width);
        }
        if let Some(cap) = &style.stroke_linecap {
            self = self.attr("stroke-linecap", cap.as_str());
        }
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub(crate) fn write_to(&self, out: &mut String, config: &SvgConfig, depth: usize) {
        if config.pretty_print {
            out.push_str(&config.indent.repeat(depth));
        }
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push_str(&format!(r#" {}="{}""#, key, escape_xml(value)));
        }

        if self.children.is_empty() {
            out.push_str("/>");
            newline(out, config);
            return;
        }

        out.push('>');
        newline(out, config);
        for child in &self.children {
            child.write_to(out, config, depth + 1);
        }
        if config.pretty_print {
            out.push_str(&config.indent.repeat(depth));
        }
        out.push_str(&format!("</{}>", self.name));
        newline(out, config);
    }
}

fn newline(out: &mut String, config: &SvgConfig) {
    if config.pretty_print {
        out.push('\n');
    }
}

/// A `rect` element
pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::new("rect")
        .num("x", x)
        .num("y", y)
        .num("width", width)
        .num("height", height)
}

/// A `circle` element
pub fn circle(center: Point, r: f64) -> Element {
    Element::new("circle")
        .num("cx", center.x)
        .num("cy", center.y)
        .num("r", r)
}

/// A `line` element
pub fn line(from: Point, to: Point) -> Element {
    Element::new("line")
        .num("x1", from.x)
        .num("y1", from.y)
        .num("x2", to.x)
        .num("y2", to.y)
}

/// A `path` element with the given outline
pub fn path(outline: &ResolvedPath) -> Element {
    Element::new("path").attr("d", outline.to_svg_d())
}

/// Build an SVG document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    canvas: Canvas,
    elements: Vec<Element>,
}

impl SvgBuilder {
    /// Create a new SVG builder for a square canvas
    pub fn new(config: SvgConfig, canvas: Canvas) -> Self {
        Self {
            config,
            canvas,
            elements: vec![],
        }
    }

    /// Append a shape to the root element
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Number of shapes appended so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finish the root element and return the document
    pub fn build(self) -> SvgDocument {
        let size = self.canvas.size;
        let root = self.elements.into_iter().fold(
            Element::new("svg")
                .attr("xmlns", SVG_NS)
                .attr("xmlns:xlink", XLINK_NS)
                .num("width", size)
                .num("height", size)
                .attr(
                    "viewBox",
                    format!("0 0 {} {}", format_number(size), format_number(size)),
                ),
            Element::child,
        );

        SvgDocument {
            config: self.config,
            root,
        }
    }
}

/// A finished SVG document
#[derive(Debug, Clone)]
pub struct SvgDocument {
    config: SvgConfig,
    root: Element,
}

impl SvgDocument {
    /// The root `svg` element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Count the direct children of the root with the given tag name
    pub fn count(&self, name: &str) -> usize {
        self.root
            .children()
            .iter()
            .filter(|e| e.name() == name)
            .count()
    }

    /// Serialize to XML text
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        if self.config.standalone {
            out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            newline(&mut out, &self.config);
        }
        self.root.write_to(&mut out, &self.config, 0);
        out
    }
}

/// Serialize a document to XML text
pub fn serialize(document: &SvgDocument) -> String {
    document.to_xml()
}

/// Format a coordinate with at most three decimals and no trailing zeros
pub fn format_number(value: f64) -> String {
    if value.abs() < 0.0005 {
        return "0".to_string();
    }
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
