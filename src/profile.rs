//! Serializable logo profile for cross-process communication.
//!
//! A [`LogoProfile`] captures the full state record in a format that can be
//! serialized to JSON and shared between a frontend and this library.
//!
//! Every field defaults, so an empty object deserializes to the default
//! logo:
//!
//! ```
//! use logomark::LogoProfile;
//!
//! let profile = LogoProfile::from_json("{}").unwrap();
//! assert_eq!(profile.text, "LOGO");
//! assert_eq!(profile.font_size, 32);
//! ```

use serde::{Deserialize, Serialize};

use crate::state::{
    DEFAULT_COLOR1, DEFAULT_COLOR2, DEFAULT_FONT_SIZE, DEFAULT_TEXT, LogoShape,
};

/// A serializable snapshot of the logo state.
///
/// Values are not constrained here; applying a profile to a composer runs
/// them through the same truncation and clamping as direct input.
///
/// # JSON Format
///
/// ```json
/// {
///   "text": "ACME",
///   "shape": "hexagon",
///   "color1": "#6366f1",
///   "color2": "#ec4899",
///   "fontSize": 32,
///   "showIcon": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LogoProfile {
    /// The logo text.
    #[serde(default = "default_text")]
    pub text: String,

    /// The icon background shape.
    #[serde(default)]
    pub shape: LogoShape,

    /// The gradient start color.
    #[serde(default = "default_color1")]
    pub color1: String,

    /// The gradient end color.
    #[serde(default = "default_color2")]
    pub color2: String,

    /// The label font size.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Whether the icon background is drawn.
    #[serde(default = "default_true")]
    pub show_icon: bool,
}

impl Default for LogoProfile {
    fn default() -> Self {
        Self {
            text: default_text(),
            shape: LogoShape::default(),
            color1: default_color1(),
            color2: default_color2(),
            font_size: default_font_size(),
            show_icon: true,
        }
    }
}

impl LogoProfile {
    /// Creates a profile with the default logo settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

fn default_color1() -> String {
    DEFAULT_COLOR1.to_string()
}

fn default_color2() -> String {
    DEFAULT_COLOR2.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = LogoProfile {
            text: "ACME".to_string(),
            shape: LogoShape::Hexagon,
            color1: "#112233".to_string(),
            color2: "#445566".to_string(),
            font_size: 44,
            show_icon: false,
        };

        let json = profile.to_json().unwrap();
        let restored = LogoProfile::from_json(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn profile_json_format() {
        let json = LogoProfile::default().to_json_pretty().unwrap();

        // Verify camelCase serialization
        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"showIcon\""));
        assert!(json.contains("\"color1\""));
    }

    #[test]
    fn shape_serializes_to_lowercase_name() {
        let profile = LogoProfile {
            shape: LogoShape::Hexagon,
            ..LogoProfile::default()
        };
        let json = profile.to_json().unwrap();
        assert!(json.contains("\"hexagon\""));

        let restored = LogoProfile::from_json(&json).unwrap();
        assert_eq!(restored.shape, LogoShape::Hexagon);
    }

    #[test]
    fn empty_profile_deserializes_to_defaults() {
        let profile = LogoProfile::from_json("{}").unwrap();
        assert_eq!(profile, LogoProfile::default());
    }

    #[test]
    fn partial_profile_fills_in_defaults() {
        let profile = LogoProfile::from_json(r#"{"text":"HI","showIcon":false}"#).unwrap();
        assert_eq!(profile.text, "HI");
        assert!(!profile.show_icon);
        assert_eq!(profile.shape, LogoShape::Circle);
        assert_eq!(profile.font_size, 32);
    }

    #[test]
    fn unknown_shape_name_is_rejected() {
        let result = LogoProfile::from_json(r#"{"shape":"triangle"}"#);
        assert!(result.is_err());
    }
}
