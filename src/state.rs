//! Logo state record and shape selector.
//!
//! This module provides the single in-memory state record that drives
//! composition. The record is ephemeral: created with default values,
//! mutated field-by-field, and never persisted.

use serde::{Deserialize, Serialize};

/// Maximum length of the logo text, in characters.
pub const MAX_TEXT_LEN: usize = 10;

/// Smallest allowed font size, in SVG units.
pub const FONT_SIZE_MIN: u32 = 20;

/// Largest allowed font size, in SVG units.
pub const FONT_SIZE_MAX: u32 = 48;

/// Default logo text.
pub const DEFAULT_TEXT: &str = "LOGO";

/// Default gradient start color (indigo).
pub const DEFAULT_COLOR1: &str = "#6366f1";

/// Default gradient end color (pink).
pub const DEFAULT_COLOR2: &str = "#ec4899";

/// Default font size.
pub const DEFAULT_FONT_SIZE: u32 = 32;

/// The icon background shape.
///
/// This is a closed set: every variant maps to a fixed outline in the
/// 300x300 logical space (see [`LogoShape::outline`](crate::shape)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogoShape {
    #[default]
    Circle,
    Square,
    Hexagon,
}

impl LogoShape {
    /// Parses a shape from its lowercase name.
    ///
    /// Returns `None` for unknown names. Callers at string-typed boundaries
    /// (wasm setters, profiles) decide how to absorb the miss.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "hexagon" => Some(Self::Hexagon),
            _ => None,
        }
    }

    /// Returns the lowercase name of this shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Hexagon => "hexagon",
        }
    }
}

/// The complete user-adjustable logo state.
///
/// The rendered drawing is a pure function of this record: identical state
/// always yields an identical drawing description. Setters enforce the field
/// constraints (text length, font size range); there are no transition
/// constraints between valid values.
///
/// Color strings are carried uninterpreted. The rendering surface's handling
/// of invalid color values is out of scope here.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoState {
    text: String,
    shape: LogoShape,
    color1: String,
    color2: String,
    font_size: u32,
    show_icon: bool,
}

impl Default for LogoState {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            shape: LogoShape::default(),
            color1: DEFAULT_COLOR1.to_string(),
            color2: DEFAULT_COLOR2.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            show_icon: true,
        }
    }
}

impl LogoState {
    /// Creates the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The logo text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the logo text, truncating to [`MAX_TEXT_LEN`] characters.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.text = if text.chars().count() > MAX_TEXT_LEN {
            text.chars().take(MAX_TEXT_LEN).collect()
        } else {
            text
        };
    }

    /// The icon background shape.
    pub fn shape(&self) -> LogoShape {
        self.shape
    }

    /// Sets the icon background shape.
    pub fn set_shape(&mut self, shape: LogoShape) {
        self.shape = shape;
    }

    /// The gradient start color.
    pub fn color1(&self) -> &str {
        &self.color1
    }

    /// Sets the gradient start color. The value is not validated.
    pub fn set_color1(&mut self, color: impl Into<String>) {
        self.color1 = color.into();
    }

    /// The gradient end color.
    pub fn color2(&self) -> &str {
        &self.color2
    }

    /// Sets the gradient end color. The value is not validated.
    pub fn set_color2(&mut self, color: impl Into<String>) {
        self.color2 = color.into();
    }

    /// The label font size.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Sets the label font size, clamped to [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`].
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    /// Whether the icon background is drawn.
    pub fn show_icon(&self) -> bool {
        self.show_icon
    }

    /// Sets whether the icon background is drawn.
    pub fn set_show_icon(&mut self, show: bool) {
        self.show_icon = show;
    }
}
