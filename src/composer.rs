//! Logo composition engine.

use crate::document::LogoDocument;
use crate::export::SvgExport;
use crate::profile::LogoProfile;
use crate::state::{LogoShape, LogoState};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`LogoProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &LogoProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> LogoProfile;
}

// ============================================================================
// LogoComposer
// ============================================================================

/// Main logo composition engine.
///
/// `LogoComposer` owns the user-adjustable [`LogoState`] and derives the
/// drawing description from it. Every setter is a direct, synchronous,
/// idempotent state mutation; [`compose`](Self::compose) is a pure function
/// of the current state.
///
/// [`render`](Self::render) additionally stores the composed document as the
/// current preview, which [`export`](Self::export) captures. Exporting with
/// no rendered preview is a silent no-op, mirroring a download request made
/// against an absent preview surface.
///
/// # Example
///
/// ```
/// use logomark::{LogoComposer, LogoShape};
///
/// let mut composer = LogoComposer::new();
/// composer.set_text("ACME");
/// composer.set_shape(LogoShape::Hexagon);
///
/// composer.render();
/// let export = composer.export().expect("preview was rendered");
/// assert_eq!(export.file_name(), "logo.svg");
/// ```
#[derive(Debug, Default)]
pub struct LogoComposer {
    state: LogoState,
    preview: Option<LogoDocument>,
}

impl LogoComposer {
    /// Creates a composer with the default logo state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &LogoState {
        &self.state
    }

    /// Sets the logo text, truncated to ten characters.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
    }

    /// Sets the icon background shape.
    pub fn set_shape(&mut self, shape: LogoShape) {
        self.state.set_shape(shape);
    }

    /// Sets the gradient start color.
    pub fn set_color1(&mut self, color: impl Into<String>) {
        self.state.set_color1(color);
    }

    /// Sets the gradient end color.
    pub fn set_color2(&mut self, color: impl Into<String>) {
        self.state.set_color2(color);
    }

    /// Sets the label font size, clamped to the 20..=48 range.
    pub fn set_font_size(&mut self, size: u32) {
        self.state.set_font_size(size);
    }

    /// Sets whether the icon background is drawn.
    pub fn set_show_icon(&mut self, show: bool) {
        self.state.set_show_icon(show);
    }

    /// Composes the drawing description for the current state.
    ///
    /// Pure: does not touch the stored preview.
    pub fn compose(&self) -> LogoDocument {
        LogoDocument::from_state(&self.state)
    }

    /// Composes the drawing and stores it as the current preview.
    pub fn render(&mut self) -> &LogoDocument {
        self.preview.insert(self.compose())
    }

    /// The currently rendered preview, if any.
    pub fn preview(&self) -> Option<&LogoDocument> {
        self.preview.as_ref()
    }

    /// Discards the current preview.
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Captures an export artifact from the current preview.
    ///
    /// Returns `None` when nothing has been rendered; an absent preview
    /// surface is absorbed silently rather than surfaced as an error.
    pub fn export(&self) -> Option<SvgExport> {
        let preview = self.preview.as_ref()?;
        Some(SvgExport::from_document(preview))
    }
}

impl Configurable for LogoComposer {
    /// Applies a profile's settings through the constrained setters, so
    /// out-of-range profile values are clamped the same way direct input is.
    fn apply_profile(&mut self, profile: &LogoProfile) {
        self.state.set_text(profile.text.clone());
        self.state.set_shape(profile.shape);
        self.state.set_color1(profile.color1.clone());
        self.state.set_color2(profile.color2.clone());
        self.state.set_font_size(profile.font_size);
        self.state.set_show_icon(profile.show_icon);
    }

    /// Exports the current settings as a profile.
    ///
    /// # Example
    ///
    /// ```
    /// use logomark::{Configurable, LogoComposer};
    ///
    /// let mut composer = LogoComposer::new();
    /// composer.set_text("DUCK");
    ///
    /// let json = composer.export_profile().to_json().unwrap();
    /// assert!(json.contains("\"DUCK\""));
    /// ```
    fn export_profile(&self) -> LogoProfile {
        LogoProfile {
            text: self.state.text().to_string(),
            shape: self.state.shape(),
            color1: self.state.color1().to_string(),
            color2: self.state.color2().to_string(),
            font_size: self.state.font_size(),
            show_icon: self.state.show_icon(),
        }
    }
}
