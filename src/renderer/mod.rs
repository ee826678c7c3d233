//! SVG renderer
//!
//! Holds the element model, the path outline helpers, and the serializer
//! that turns a finished document into XML text.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{PathSegment, ResolvedPath};
pub use svg::{serialize, Element, SvgBuilder, SvgDocument};
