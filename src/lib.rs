//! cw-icon - radial Morse-code icon generator
//!
//! Draws a set of letter codes as wedges around the center of a square
//! canvas, separated by divider lines and overlaid with concentric rings,
//! and serializes the result as SVG.
//!
//! # Example
//!
//! ```rust
//! use cw_icon::{render, IconConfig};
//!
//! let svg = render(&IconConfig::default(), false);
//! assert!(svg.contains(r#"viewBox="0 0 512 512""#));
//! ```

pub mod code;
pub mod config;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod output;
pub mod renderer;
pub mod style;

pub use code::{Code, Symbol};
pub use config::IconConfig;
pub use error::IconError;
pub use geometry::{Canvas, Point};
pub use icon::IconGenerator;
pub use renderer::{serialize, SvgConfig, SvgDocument};
pub use style::IconStyle;

use std::path::Path;

use tracing::info;

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "assets/cw_icon.svg";

/// Render the configured icon to SVG text
pub fn render(config: &IconConfig, with_background: bool) -> String {
    render_document(config, with_background).to_xml()
}

/// Render the configured icon to a document tree
pub fn render_document(config: &IconConfig, with_background: bool) -> SvgDocument {
    IconGenerator::from_config(config).render(&config.codes, with_background)
}

/// Render the configured icon and write it atomically to `path`
pub fn generate_to_file(
    config: &IconConfig,
    with_background: bool,
    path: &Path,
) -> Result<(), IconError> {
    config.canvas.validate()?;
    let svg = render(config, with_background);
    output::write_atomic(path, &svg)?;
    info!(path = %path.display(), bytes = svg.len(), "icon written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let svg = render(&IconConfig::default(), false);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_render_with_background() {
        let svg = render(&IconConfig::default(), true);
        assert!(svg.contains(r#"<rect x="0" y="0" width="512" height="512" fill="white"/>"#));
    }

    #[test]
    fn test_render_custom_style() {
        let style = IconStyle {
            pulse_fill: "#ff0000".to_string(),
            ..IconStyle::default()
        };
        let svg = render(&IconConfig::default().with_style(style), false);
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(!svg.contains("#34deeb"));
    }

    #[test]
    fn test_generate_rejects_invalid_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        let config = IconConfig::default().with_canvas(Canvas::new().with_size(-1.0));

        let err = generate_to_file(&config, false, &path).unwrap_err();
        assert!(matches!(err, IconError::InvalidCanvas(_)));
        assert!(!path.exists());
    }
}
