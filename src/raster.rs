//! Preview rasterization using resvg/usvg.
//!
//! The composed drawing is a 300x300 SVG document; this module renders it to
//! an RGBA image for preview surfaces (native previews, the wasm canvas
//! binding) and for round-trip verification of exported markup.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::document::LogoDocument;

/// Rasterizes a composed drawing at `size x size` pixels.
///
/// Returns `None` if the markup cannot be parsed or the pixel buffer cannot
/// be allocated.
pub fn rasterize(document: &LogoDocument, size: u32) -> Option<RgbaImage> {
    rasterize_markup(&document.to_svg(), size)
}

/// Rasterizes standalone SVG markup at `size x size` pixels.
///
/// The drawing is scaled uniformly so its larger dimension fits `size`.
pub fn rasterize_markup(svg_data: &str, size: u32) -> Option<RgbaImage> {
    let mut opts = Options::default();
    // Without fonts the label is silently dropped from the render
    opts.fontdb_mut().load_system_fonts();

    let tree = match Tree::from_str(svg_data, &opts) {
        Ok(tree) => tree,
        Err(err) => {
            log::debug!("failed to parse SVG markup: {err}");
            return None;
        }
    };

    let svg_size = tree.size();
    let scale = (size as f32) / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).ceil() as u32;
    let height = (svg_size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)?;
    let transform = Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            if let Some(pixel) = pixmap.pixel(x, y) {
                // tiny_skia uses premultiplied alpha, we need to unpremultiply
                let (r, g, b, a) =
                    unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
                img.put_pixel(x, y, Rgba([r, g, b, a]));
            }
        }
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LogoShape, LogoState};

    fn doc(configure: impl FnOnce(&mut LogoState)) -> LogoDocument {
        let mut state = LogoState::new();
        configure(&mut state);
        LogoDocument::from_state(&state)
    }

    #[test]
    fn rasterize_default_document() {
        let img = rasterize(&doc(|_| {}), 300).unwrap();
        assert_eq!(img.width(), 300);
        assert_eq!(img.height(), 300);
    }

    #[test]
    fn rasterize_scales_to_requested_size() {
        let img = rasterize(&doc(|_| {}), 64).unwrap();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
    }

    #[test]
    fn icon_covers_center_but_not_corners() {
        // Avoid text so the check is independent of installed fonts
        let img = rasterize(&doc(|s| s.set_text("")), 300).unwrap();

        // Circle of radius 100 around (150, 150) covers the center
        assert!(img.get_pixel(150, 150)[3] > 0, "center should be filled");
        // and leaves the canvas corners untouched
        assert_eq!(img.get_pixel(5, 5)[3], 0, "corner should be transparent");
    }

    #[test]
    fn hidden_icon_leaves_center_bare() {
        let img = rasterize(
            &doc(|s| {
                s.set_text("");
                s.set_show_icon(false);
            }),
            300,
        )
        .unwrap();
        assert_eq!(img.get_pixel(150, 150)[3], 0);
    }

    #[test]
    fn square_fills_its_corner_unlike_circle() {
        let square = rasterize(
            &doc(|s| {
                s.set_text("");
                s.set_shape(LogoShape::Square);
            }),
            300,
        )
        .unwrap();
        let circle = rasterize(&doc(|s| s.set_text("")), 300).unwrap();

        // (60, 60) is inside the 200x200 square but outside the circle
        assert!(square.get_pixel(60, 60)[3] > 0);
        assert_eq!(circle.get_pixel(60, 60)[3], 0);
    }

    #[test]
    fn exported_markup_round_trips_to_identical_pixels() {
        let document = doc(|s| {
            s.set_text("");
            s.set_shape(LogoShape::Hexagon);
        });
        let live = rasterize(&document, 300).unwrap();
        let reparsed = rasterize_markup(&document.to_svg(), 300).unwrap();
        assert_eq!(live, reparsed);
    }

    #[test]
    fn unparsable_markup_is_none() {
        assert!(rasterize_markup("not an svg", 64).is_none());
    }
}
