//! Shape resolution: mapping a [`LogoShape`] to a closed vector outline.
//!
//! Outlines live in a 300x300 logical coordinate space centered at
//! (150, 150). Each shape maps to a fixed, hardcoded command sequence; the
//! mapping is total over the closed enum.

use crate::state::LogoShape;

/// One SVG path-drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(i32, i32),
    /// `L x y`
    LineTo(i32, i32),
    /// `A rx ry x-rot large-arc sweep x y`
    Arc {
        rx: i32,
        ry: i32,
        x_rotation: i32,
        large_arc: bool,
        sweep: bool,
        x: i32,
        y: i32,
    },
    /// `Z`
    Close,
}

impl PathCommand {
    /// The endpoint this command leaves the pen at, if it has one.
    fn endpoint(&self) -> Option<(i32, i32)> {
        match *self {
            Self::MoveTo(x, y) | Self::LineTo(x, y) => Some((x, y)),
            Self::Arc { x, y, .. } => Some((x, y)),
            Self::Close => None,
        }
    }
}

/// An ordered sequence of path commands describing a closed contour.
///
/// The default outline is empty and serializes to an empty path data string,
/// which renders nothing. This keeps the defensive "unknown shape draws
/// nothing" behavior of the original tool expressible even though the shape
/// enum is closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    /// Creates an outline from a command sequence.
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Creates the empty outline.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The commands, in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns true if the outline has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns true if the contour is closed: it ends with an explicit `Z`
    /// or its last endpoint coincides with the initial `M`.
    ///
    /// The empty outline is not closed.
    pub fn is_closed(&self) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        if matches!(self.commands.last(), Some(PathCommand::Close)) {
            return true;
        }
        let start = match self.commands.first() {
            Some(PathCommand::MoveTo(x, y)) => (*x, *y),
            _ => return false,
        };
        self.commands
            .iter()
            .rev()
            .find_map(PathCommand::endpoint)
            .is_some_and(|end| end == start)
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of the command endpoints.
    ///
    /// Arc bulge is not accounted for; this is a control-point box. Returns
    /// `None` for the empty outline.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let mut points = self.commands.iter().filter_map(PathCommand::endpoint);
        let (x0, y0) = points.next()?;
        let mut bounds = (x0, y0, x0, y0);
        for (x, y) in points {
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
        }
        Some(bounds)
    }

    /// Serializes the outline to SVG path data.
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            match *command {
                PathCommand::MoveTo(x, y) => {
                    data.push_str(&format!("M {x} {y}"));
                }
                PathCommand::LineTo(x, y) => {
                    data.push_str(&format!("L {x} {y}"));
                }
                PathCommand::Arc {
                    rx,
                    ry,
                    x_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => {
                    let large = large_arc as u8;
                    let sweep = sweep as u8;
                    data.push_str(&format!("A {rx} {ry} {x_rotation} {large} {sweep} {x} {y}"));
                }
                PathCommand::Close => data.push('Z'),
            }
        }
        data
    }
}

impl LogoShape {
    /// Resolves this shape to its fixed outline.
    ///
    /// - `Circle`: a full circle of radius 100 approximated by two 180° arcs.
    /// - `Square`: a 200x200 axis-aligned rectangle.
    /// - `Hexagon`: a regular hexagon with fixed vertices.
    pub fn outline(&self) -> Outline {
        match self {
            Self::Circle => Outline::new(vec![
                PathCommand::MoveTo(150, 50),
                PathCommand::Arc {
                    rx: 100,
                    ry: 100,
                    x_rotation: 0,
                    large_arc: false,
                    sweep: true,
                    x: 150,
                    y: 250,
                },
                PathCommand::Arc {
                    rx: 100,
                    ry: 100,
                    x_rotation: 0,
                    large_arc: false,
                    sweep: true,
                    x: 150,
                    y: 50,
                },
            ]),
            Self::Square => Outline::new(vec![
                PathCommand::MoveTo(50, 50),
                PathCommand::LineTo(250, 50),
                PathCommand::LineTo(250, 250),
                PathCommand::LineTo(50, 250),
                PathCommand::Close,
            ]),
            Self::Hexagon => Outline::new(vec![
                PathCommand::MoveTo(150, 50),
                PathCommand::LineTo(225, 100),
                PathCommand::LineTo(225, 200),
                PathCommand::LineTo(150, 250),
                PathCommand::LineTo(75, 200),
                PathCommand::LineTo(75, 100),
                PathCommand::Close,
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CANVAS_SIZE;

    const ALL_SHAPES: [LogoShape; 3] = [LogoShape::Circle, LogoShape::Square, LogoShape::Hexagon];

    #[test]
    fn circle_path_data() {
        assert_eq!(
            LogoShape::Circle.outline().to_path_data(),
            "M 150 50 A 100 100 0 0 1 150 250 A 100 100 0 0 1 150 50"
        );
    }

    #[test]
    fn square_path_data() {
        assert_eq!(
            LogoShape::Square.outline().to_path_data(),
            "M 50 50 L 250 50 L 250 250 L 50 250 Z"
        );
    }

    #[test]
    fn hexagon_path_data() {
        assert_eq!(
            LogoShape::Hexagon.outline().to_path_data(),
            "M 150 50 L 225 100 L 225 200 L 150 250 L 75 200 L 75 100 Z"
        );
    }

    #[test]
    fn all_outlines_non_empty_and_closed() {
        for shape in ALL_SHAPES {
            let outline = shape.outline();
            assert!(!outline.is_empty(), "{} outline is empty", shape.name());
            assert!(outline.is_closed(), "{} outline is open", shape.name());
        }
    }

    #[test]
    fn all_outlines_confined_to_canvas() {
        let canvas = CANVAS_SIZE as i32;
        for shape in ALL_SHAPES {
            let (min_x, min_y, max_x, max_y) = shape.outline().bounds().unwrap();
            assert!(min_x >= 0 && min_y >= 0, "{} leaves canvas", shape.name());
            assert!(
                max_x <= canvas && max_y <= canvas,
                "{} leaves canvas",
                shape.name()
            );
        }
    }

    #[test]
    fn circle_extremes_stay_inside_canvas() {
        // The arc endpoints sit on the vertical diameter; the horizontal
        // extremes are endpoint x +/- radius.
        let outline = LogoShape::Circle.outline();
        let (_, min_y, _, max_y) = outline.bounds().unwrap();
        assert_eq!((min_y, max_y), (50, 250));
        let radius = 100;
        assert!(150 - radius >= 0);
        assert!(150 + radius <= CANVAS_SIZE as i32);
    }

    #[test]
    fn empty_outline() {
        let outline = Outline::empty();
        assert!(outline.is_empty());
        assert!(!outline.is_closed());
        assert_eq!(outline.bounds(), None);
        assert_eq!(outline.to_path_data(), "");
    }

    #[test]
    fn closure_by_returning_to_start() {
        // The circle has no Z command; it closes by ending at its M point.
        let outline = LogoShape::Circle.outline();
        assert!(!matches!(
            outline.commands().last(),
            Some(PathCommand::Close)
        ));
        assert!(outline.is_closed());
    }
}
