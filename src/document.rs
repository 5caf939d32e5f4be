//! The drawing description assembled from logo state.
//!
//! A [`LogoDocument`] is a declarative, serializable description of the
//! gradient, the optional icon outline, and the centered text label. It is a
//! pure function of [`LogoState`]: identical state yields a byte-identical
//! serialization.

use crate::shape::Outline;
use crate::state::LogoState;

/// Side length of the logical drawing canvas.
pub const CANVAS_SIZE: u32 = 300;

/// Horizontal center of the canvas; the label is anchored here.
pub const TEXT_ANCHOR_X: u32 = 150;

/// Baseline y of the label, tuned so mid-size text sits visually centered.
pub const TEXT_BASELINE_Y: u32 = 165;

/// Element id of the linear gradient definition.
pub const GRADIENT_ID: &str = "gradient";

/// A fill rule for a drawn element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// A literal color value, passed through uninterpreted.
    Solid(String),
    /// A reference to the document's gradient definition.
    Gradient,
}

impl Fill {
    /// The SVG attribute value for this fill.
    pub fn attr_value(&self) -> String {
        match self {
            Self::Solid(color) => color.clone(),
            Self::Gradient => format!("url(#{GRADIENT_ID})"),
        }
    }
}

/// The two-stop diagonal linear gradient definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientDef {
    /// Color at the 0% stop (top-left).
    pub start: String,
    /// Color at the 100% stop (bottom-right).
    pub end: String,
}

/// The filled icon outline, present only when the icon is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct IconElement {
    /// The shape's outline, gradient-filled.
    pub outline: Outline,
}

/// The centered text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    /// The label text, at most ten characters.
    pub content: String,
    /// Font size in SVG units.
    pub font_size: u32,
    /// White over an icon, gradient over a bare background.
    pub fill: Fill,
}

/// The complete drawing description for one logo.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoDocument {
    /// The gradient shared by the icon fill and the bare-background label.
    pub gradient: GradientDef,
    /// The icon background, if shown.
    pub icon: Option<IconElement>,
    /// The text label.
    pub label: LabelElement,
}

impl LogoDocument {
    /// Composes the drawing description for the given state.
    ///
    /// This is the entire mapping from user-adjustable state to drawing:
    /// gradient stops from the two colors, outline from the shape selector
    /// (omitted when the icon is hidden), and the label fill switching
    /// between solid white and the gradient reference.
    pub fn from_state(state: &LogoState) -> Self {
        let icon = state.show_icon().then(|| IconElement {
            outline: state.shape().outline(),
        });
        let fill = if state.show_icon() {
            Fill::Solid("white".to_string())
        } else {
            Fill::Gradient
        };
        Self {
            gradient: GradientDef {
                start: state.color1().to_string(),
                end: state.color2().to_string(),
            },
            icon,
            label: LabelElement {
                content: state.text().to_string(),
                font_size: state.font_size(),
                fill,
            },
        }
    }

    /// Serializes the drawing to standalone SVG markup.
    ///
    /// The output declares the SVG namespace so the markup is valid on its
    /// own, outside any host page. Text content and attribute values are
    /// XML-escaped; color strings are otherwise emitted verbatim.
    pub fn to_svg(&self) -> String {
        let size = CANVAS_SIZE;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">"
        );

        svg.push_str("<defs>");
        svg.push_str(&format!(
            "<linearGradient id=\"{GRADIENT_ID}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">"
        ));
        svg.push_str(&format!(
            "<stop offset=\"0%\" stop-color=\"{}\"/>",
            escape_xml(&self.gradient.start)
        ));
        svg.push_str(&format!(
            "<stop offset=\"100%\" stop-color=\"{}\"/>",
            escape_xml(&self.gradient.end)
        ));
        svg.push_str("</linearGradient></defs>");

        if let Some(icon) = &self.icon {
            svg.push_str(&format!(
                "<path d=\"{}\" fill=\"{}\"/>",
                icon.outline.to_path_data(),
                Fill::Gradient.attr_value()
            ));
        }

        svg.push_str(&format!(
            "<text x=\"{TEXT_ANCHOR_X}\" y=\"{TEXT_BASELINE_Y}\" text-anchor=\"middle\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            self.label.font_size,
            escape_xml(&self.label.fill.attr_value()),
            escape_xml(&self.label.content)
        ));

        svg.push_str("</svg>");
        svg
    }
}

/// Escapes the characters XML reserves in text content and attribute values.
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LogoShape;

    #[test]
    fn composition_is_deterministic() {
        let mut state = LogoState::new();
        state.set_text("ACME");
        state.set_shape(LogoShape::Hexagon);

        let first = LogoDocument::from_state(&state);
        let second = LogoDocument::from_state(&state);
        assert_eq!(first, second);
        assert_eq!(first.to_svg(), second.to_svg());
    }

    #[test]
    fn default_document_structure() {
        let doc = LogoDocument::from_state(&LogoState::new());
        assert_eq!(doc.gradient.start, "#6366f1");
        assert_eq!(doc.gradient.end, "#ec4899");
        assert!(doc.icon.is_some());
        assert_eq!(doc.label.content, "LOGO");
        assert_eq!(doc.label.fill, Fill::Solid("white".to_string()));
    }

    #[test]
    fn show_icon_toggle_switches_label_fill_only() {
        let mut state = LogoState::new();
        let shown = LogoDocument::from_state(&state);

        state.set_show_icon(false);
        let hidden = LogoDocument::from_state(&state);

        assert!(shown.icon.is_some());
        assert!(hidden.icon.is_none());
        assert_eq!(shown.label.fill, Fill::Solid("white".to_string()));
        assert_eq!(hidden.label.fill, Fill::Gradient);

        // Everything else is untouched
        assert_eq!(shown.gradient, hidden.gradient);
        assert_eq!(shown.label.content, hidden.label.content);
        assert_eq!(shown.label.font_size, hidden.label.font_size);
    }

    #[test]
    fn hidden_icon_markup_has_no_path() {
        let mut state = LogoState::new();
        state.set_show_icon(false);
        let svg = LogoDocument::from_state(&state).to_svg();
        assert!(!svg.contains("<path"));
        assert!(svg.contains("fill=\"url(#gradient)\""));
    }

    #[test]
    fn shown_icon_markup_has_gradient_path_and_white_label() {
        let svg = LogoDocument::from_state(&LogoState::new()).to_svg();
        assert!(svg.contains("<path d=\"M 150 50 A 100 100 0 0 1 150 250"));
        assert!(svg.contains("fill=\"url(#gradient)\""));
        assert!(svg.contains("fill=\"white\">LOGO</text>"));
    }

    #[test]
    fn font_size_boundaries_render_verbatim() {
        let mut state = LogoState::new();
        for size in [20, 48] {
            state.set_font_size(size);
            let svg = LogoDocument::from_state(&state).to_svg();
            assert!(svg.contains(&format!("font-size=\"{size}\"")));
        }
    }

    #[test]
    fn markup_is_standalone() {
        let svg = LogoDocument::from_state(&LogoState::new()).to_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 300 300\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut state = LogoState::new();
        state.set_text("<A&B>");
        let svg = LogoDocument::from_state(&state).to_svg();
        assert!(svg.contains(">&lt;A&amp;B&gt;</text>"));
    }

    #[test]
    fn malformed_color_passes_through_escaped() {
        let mut state = LogoState::new();
        state.set_color1("\"bad\"");
        let svg = LogoDocument::from_state(&state).to_svg();
        assert!(svg.contains("stop-color=\"&quot;bad&quot;\""));
    }

    #[test]
    fn gradient_is_diagonal_with_two_stops() {
        let svg = LogoDocument::from_state(&LogoState::new()).to_svg();
        assert!(svg.contains("x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\""));
        assert!(svg.contains("offset=\"0%\" stop-color=\"#6366f1\""));
        assert!(svg.contains("offset=\"100%\" stop-color=\"#ec4899\""));
    }
}
