//! Icon configuration
//!
//! Bundles the canvas, the codes to draw, and the presentation style. The
//! defaults reproduce the stock icon; a TOML file can override any part:
//!
//! ```toml
//! codes = ["-.-", "--..."]
//!
//! [canvas]
//! size = 256
//!
//! [style]
//! pulse_fill = "#ff9800"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::code::{default_codes, Code};
use crate::error::IconError;
use crate::geometry::Canvas;
use crate::style::IconStyle;

/// Everything needed to draw one icon
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub canvas: Canvas,
    pub codes: Vec<Code>,
    pub style: IconStyle,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            codes: default_codes(),
            style: IconStyle::default(),
        }
    }
}

impl IconConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, IconError> {
        let content = std::fs::read_to_string(path).map_err(|source| IconError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, IconError> {
        let config: IconConfig = toml::from_str(content)?;
        config.canvas.validate()?;
        Ok(config)
    }

    /// Set the canvas
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Set the codes to draw
    pub fn with_codes(mut self, codes: Vec<Code>) -> Self {
        self.codes = codes;
        self
    }

    /// Set the presentation style
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.canvas, Canvas::default());
        assert_eq!(config.codes.len(), 5);
        assert_eq!(config.style, IconStyle::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = IconConfig::from_toml("").unwrap();
        assert_eq!(config, IconConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = IconConfig::from_toml(
            r##"
            codes = ["..", "--"]

            [canvas]
            size = 256
            dit_divisor = 8.0

            [style]
            pulse_fill = "#ff9800"
            stroke = "#333333"
            stroke_width = 2.5
            background = "#eeeeee"
            "##,
        )
        .unwrap();

        assert_eq!(config.codes.len(), 2);
        assert_eq!(config.codes[0].to_string(), "..");
        assert_eq!(config.canvas.size, 256.0);
        assert_eq!(config.canvas.dit(), 16.0);
        assert_eq!(config.style.pulse_fill, "#ff9800");
        assert_eq!(config.style.stroke_width, 2.5);
    }

    #[test]
    fn test_invalid_code_in_toml() {
        let err = IconConfig::from_toml(r#"codes = ["-.", "abc"]"#).unwrap_err();
        assert!(matches!(err, IconError::ConfigParse(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = IconConfig::from_toml("[canvas]\nsize = 0").unwrap_err();
        assert!(matches!(err, IconError::InvalidCanvas(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"codes = ["...", "---", "..."]"#).unwrap();

        let config = IconConfig::from_file(file.path()).unwrap();
        assert_eq!(config.codes.len(), 3);
    }

    #[test]
    fn test_missing_config_file() {
        let err = IconConfig::from_file(Path::new("/nonexistent/icon.toml")).unwrap_err();
        assert!(matches!(err, IconError::ConfigRead { .. }));
    }
}
