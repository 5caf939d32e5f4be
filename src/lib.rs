//! logomark: Customizable logo composition and SVG export library
//!
//! This crate owns a small logo state record (text, shape, gradient colors,
//! font size, icon visibility), derives a deterministic SVG drawing
//! description from it, rasterizes that description for preview, and exports
//! it as a standalone `logo.svg` file.
//!
//! # Example
//!
//! ```
//! use logomark::{LogoComposer, LogoShape};
//!
//! let mut composer = LogoComposer::new();
//! composer.set_text("ACME");
//! composer.set_shape(LogoShape::Hexagon);
//! composer.set_color1("#6366f1");
//! composer.set_color2("#ec4899");
//!
//! // Render a preview, then capture it as an export artifact
//! composer.render();
//! let export = composer.export().unwrap();
//! assert_eq!(export.file_name(), "logo.svg");
//! assert!(export.contents().contains("<svg"));
//! ```
//!
//! # Serializable Profiles
//!
//! For frontend-backend communication, use [`LogoProfile`] with the
//! [`Configurable`] trait:
//!
//! ```
//! use logomark::{Configurable, LogoComposer, LogoProfile};
//!
//! let mut composer = LogoComposer::new();
//!
//! // Apply a profile
//! let profile = LogoProfile::from_json(r#"{"text":"DUCK","shape":"square"}"#).unwrap();
//! composer.apply_profile(&profile);
//!
//! // Export current settings
//! let json = composer.export_profile().to_json().unwrap();
//! assert!(json.contains("\"square\""));
//! ```

mod composer;
mod document;
mod export;
mod profile;
mod raster;
mod shape;
mod state;

#[cfg(feature = "canvas")]
mod canvas;

pub use composer::{Configurable, LogoComposer};

#[cfg(feature = "canvas")]
pub use canvas::CanvasComposer;
pub use document::{
    CANVAS_SIZE, Fill, GRADIENT_ID, GradientDef, IconElement, LabelElement, LogoDocument,
    TEXT_ANCHOR_X, TEXT_BASELINE_Y,
};
pub use export::{ExportError, FILE_NAME, MIME_TYPE, SvgExport};
pub use profile::LogoProfile;
pub use raster::{rasterize, rasterize_markup};
pub use shape::{Outline, PathCommand};
pub use state::{
    DEFAULT_COLOR1, DEFAULT_COLOR2, DEFAULT_FONT_SIZE, DEFAULT_TEXT, FONT_SIZE_MAX, FONT_SIZE_MIN,
    LogoShape, LogoState, MAX_TEXT_LEN,
};
