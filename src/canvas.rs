//! Browser bindings for live preview and download, via wasm-bindgen.
//!
//! This module provides [`CanvasComposer`], a wrapper around
//! [`LogoComposer`] exposed to JavaScript. A frontend can either inject
//! [`svg_markup`](CanvasComposer::svg_markup) into the DOM for a live vector
//! preview, or rasterize onto a canvas element.
//!
//! # Feature Flag
//!
//! This module is only available with the `canvas` feature enabled:
//!
//! ```toml
//! [dependencies]
//! logomark = { version = "0.1", features = ["canvas"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { CanvasComposer } from 'logomark';
//!
//! await init();
//!
//! const composer = new CanvasComposer();
//! composer.setText('ACME');
//! composer.setShape('hexagon');
//!
//! // Live preview: inject the markup, or rasterize to a canvas
//! preview.innerHTML = composer.svgMarkup();
//!
//! // Save-as-download of logo.svg
//! composer.downloadSvg();
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement,
    ImageData, Url,
};

use crate::composer::{Configurable, LogoComposer};
use crate::export::SvgExport;
use crate::profile::LogoProfile;
use crate::raster::rasterize;
use crate::state::LogoShape;

// ============================================================================
// CanvasComposer
// ============================================================================

/// A wrapper around [`LogoComposer`] for browser frontends.
///
/// Setters mirror the form controls of a logo editor page; each one is a
/// direct, synchronous state update.
#[wasm_bindgen]
#[derive(Default)]
pub struct CanvasComposer {
    composer: LogoComposer,
}

#[wasm_bindgen]
impl CanvasComposer {
    /// Creates a composer with the default logo state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CanvasComposer {
        Self::default()
    }

    // ---- State setters ----

    /// Sets the logo text, truncated to ten characters.
    #[wasm_bindgen(js_name = "setText")]
    pub fn set_text(&mut self, text: &str) {
        self.composer.set_text(text);
    }

    /// Sets the icon shape by name: "circle", "square" or "hexagon".
    ///
    /// Unknown names are ignored and the current shape is kept.
    #[wasm_bindgen(js_name = "setShape")]
    pub fn set_shape(&mut self, name: &str) {
        if let Some(shape) = LogoShape::from_name(name) {
            self.composer.set_shape(shape);
        }
    }

    /// Sets the gradient start color. The value is not validated.
    #[wasm_bindgen(js_name = "setColor1")]
    pub fn set_color1(&mut self, color: &str) {
        self.composer.set_color1(color);
    }

    /// Sets the gradient end color. The value is not validated.
    #[wasm_bindgen(js_name = "setColor2")]
    pub fn set_color2(&mut self, color: &str) {
        self.composer.set_color2(color);
    }

    /// Sets the label font size, clamped to 20-48.
    #[wasm_bindgen(js_name = "setFontSize")]
    pub fn set_font_size(&mut self, size: u32) {
        self.composer.set_font_size(size);
    }

    /// Sets whether the icon background is drawn.
    #[wasm_bindgen(js_name = "setShowIcon")]
    pub fn set_show_icon(&mut self, show: bool) {
        self.composer.set_show_icon(show);
    }

    // ---- Rendering ----

    /// Renders the current state and returns the SVG markup.
    ///
    /// The returned markup is standalone and can be injected into the DOM
    /// for a live vector preview.
    #[wasm_bindgen(js_name = "svgMarkup")]
    pub fn svg_markup(&mut self) -> String {
        self.composer.render().to_svg()
    }

    /// Renders the current state to an HTML canvas element at `size x size`.
    ///
    /// Note that the rasterized label depends on fonts available to the
    /// rasterizer; browser frontends that need exact text rendering should
    /// prefer [`svg_markup`](Self::svg_markup).
    #[wasm_bindgen(js_name = "renderToCanvas")]
    pub fn render_to_canvas(
        &mut self,
        canvas: &HtmlCanvasElement,
        size: u32,
    ) -> Result<(), JsError> {
        let rendered = rasterize(self.composer.render(), size)
            .ok_or_else(|| JsError::new("Failed to rasterize preview"))?;

        let width = rendered.width();
        let height = rendered.height();
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| JsError::new("Failed to get 2d context"))?
            .ok_or_else(|| JsError::new("Canvas 2d context is null"))?
            .dyn_into()
            .map_err(|_| JsError::new("Failed to cast to CanvasRenderingContext2d"))?;

        let raw_pixels: Vec<u8> = rendered.into_raw();
        let image_data =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(&raw_pixels), width, height)
                .map_err(|_| JsError::new("Failed to create ImageData"))?;

        ctx.put_image_data(&image_data, 0.0, 0.0)
            .map_err(|_| JsError::new("Failed to put image data"))?;

        Ok(())
    }

    // ---- Export ----

    /// Triggers a save-as-download of `logo.svg` for the rendered preview.
    ///
    /// Does nothing if no preview has been rendered yet. The temporary
    /// object URL backing the download is revoked afterward regardless of
    /// outcome.
    #[wasm_bindgen(js_name = "downloadSvg")]
    pub fn download_svg(&self) -> Result<(), JsError> {
        let Some(export) = self.composer.export() else {
            return Ok(());
        };

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(export.contents()));

        let options = BlobPropertyBag::new();
        options.set_type(export.mime_type());
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|_| JsError::new("Failed to create blob"))?;

        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| JsError::new("Failed to create object URL"))?;
        let result = trigger_download(&url, export.file_name());
        let _ = Url::revoke_object_url(&url);
        result
    }

    /// Returns the rendered preview as an export artifact, or `null` if
    /// nothing has been rendered.
    #[wasm_bindgen(js_name = "exportContents")]
    pub fn export_contents(&self) -> Option<String> {
        self.composer.export().map(SvgExport::into_contents)
    }

    // ---- Profile Import/Export ----

    /// Exports the current settings as a JSON string.
    #[wasm_bindgen(js_name = "exportProfileJson")]
    pub fn export_profile_json(&self) -> Result<String, JsError> {
        let profile = self.composer.export_profile();
        profile
            .to_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize profile: {e}")))
    }

    /// Imports settings from a JSON string.
    #[wasm_bindgen(js_name = "importProfileJson")]
    pub fn import_profile_json(&mut self, json: &str) -> Result<(), JsError> {
        let profile = LogoProfile::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse profile: {e}")))?;
        self.composer.apply_profile(&profile);
        Ok(())
    }

    /// Resets all settings to the default logo and discards the preview.
    pub fn reset(&mut self) {
        self.composer = LogoComposer::new();
    }
}

/// Clicks a synthetic anchor pointing at the object URL.
fn trigger_download(url: &str, file_name: &str) -> Result<(), JsError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("No document available"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| JsError::new("Failed to create anchor element"))?
        .dyn_into()
        .map_err(|_| JsError::new("Failed to cast to HtmlAnchorElement"))?;

    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
