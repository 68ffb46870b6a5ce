//! Typed representation of SVG path data.
//!
//! Paths are held as a sequence of [`PathCommand`] values and only touch the
//! text form at the boundary: [`PathData::parse`] tokenizes a d-attribute
//! string, [`PathData`]'s `Display` impl writes one back out. Everything else
//! in the engine works on the typed commands.

use std::fmt;

/// Error produced when a path string cannot be tokenized.
///
/// ## Rust Lesson #24: Deriving Errors with thiserror
///
/// Last time we wrote `impl Display` and `impl Error` by hand. The
/// `thiserror` crate generates all that from attributes:
/// - `#[error("...")]` = the Display message (like a template literal)
/// - `#[from]` = auto-conversion, so `?` works across error types
///
/// Same traits as before, a fraction of the code!
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The d-attribute string is not valid path data.
    #[error("invalid path data: {0}")]
    Parse(#[from] svgtypes::Error),
}

/// One drawing command with its operands.
///
/// Mirrors the SVG path grammar: the `abs` flag distinguishes uppercase
/// (absolute) from lowercase (relative) command letters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { abs: bool, x: f64, y: f64 },
    LineTo { abs: bool, x: f64, y: f64 },
    HorizontalLineTo { abs: bool, x: f64 },
    VerticalLineTo { abs: bool, y: f64 },
    CurveTo { abs: bool, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    SmoothCurveTo { abs: bool, x2: f64, y2: f64, x: f64, y: f64 },
    QuadTo { abs: bool, x1: f64, y1: f64, x: f64, y: f64 },
    SmoothQuadTo { abs: bool, x: f64, y: f64 },
    ArcTo {
        abs: bool,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// Absolute move-to.
    #[inline]
    pub fn move_to(x: f64, y: f64) -> Self {
        PathCommand::MoveTo { abs: true, x, y }
    }

    /// Absolute line-to.
    #[inline]
    pub fn line_to(x: f64, y: f64) -> Self {
        PathCommand::LineTo { abs: true, x, y }
    }

    /// Absolute quadratic curve-to.
    #[inline]
    pub fn quad_to(x1: f64, y1: f64, x: f64, y: f64) -> Self {
        PathCommand::QuadTo { abs: true, x1, y1, x, y }
    }

    /// Absolute cubic curve-to.
    #[inline]
    pub fn curve_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        PathCommand::CurveTo { abs: true, x1, y1, x2, y2, x, y }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    /// Create an empty path.
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Parse a d-attribute string into typed commands.
    ///
    /// Implicit operand repeats (e.g. several coordinate pairs after one `L`)
    /// are expanded by the tokenizer, so every element of the result is a
    /// complete single command.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let mut commands = Vec::new();
        for segment in svgtypes::PathParser::from(text) {
            let segment = segment?;
            commands.push(match segment {
                svgtypes::PathSegment::MoveTo { abs, x, y } => PathCommand::MoveTo { abs, x, y },
                svgtypes::PathSegment::LineTo { abs, x, y } => PathCommand::LineTo { abs, x, y },
                svgtypes::PathSegment::HorizontalLineTo { abs, x } => {
                    PathCommand::HorizontalLineTo { abs, x }
                }
                svgtypes::PathSegment::VerticalLineTo { abs, y } => {
                    PathCommand::VerticalLineTo { abs, y }
                }
                svgtypes::PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                    PathCommand::CurveTo { abs, x1, y1, x2, y2, x, y }
                }
                svgtypes::PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                    PathCommand::SmoothCurveTo { abs, x2, y2, x, y }
                }
                svgtypes::PathSegment::Quadratic { abs, x1, y1, x, y } => {
                    PathCommand::QuadTo { abs, x1, y1, x, y }
                }
                svgtypes::PathSegment::SmoothQuadratic { abs, x, y } => {
                    PathCommand::SmoothQuadTo { abs, x, y }
                }
                svgtypes::PathSegment::EllipticalArc {
                    abs,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => PathCommand::ArcTo { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y },
                svgtypes::PathSegment::ClosePath { .. } => PathCommand::Close,
            });
        }
        Ok(Self { commands })
    }

    /// Append a command.
    #[inline]
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Extract every coordinate pair as an absolute position.
    ///
    /// Control points contribute their own pairs; `H`/`V` contribute the
    /// resolved endpoint; arcs contribute only the endpoint (radii and
    /// rotation are not coordinates). Relative commands are resolved against
    /// the running position, and a close resets it to the subpath start.
    pub fn points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        let mut cur = (0.0, 0.0);
        let mut subpath_start = (0.0, 0.0);

        let resolve = |cur: (f64, f64), abs: bool, x: f64, y: f64| {
            if abs { (x, y) } else { (cur.0 + x, cur.1 + y) }
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { abs, x, y } => {
                    cur = resolve(cur, abs, x, y);
                    subpath_start = cur;
                    points.push(cur);
                }
                PathCommand::LineTo { abs, x, y } | PathCommand::SmoothQuadTo { abs, x, y } => {
                    cur = resolve(cur, abs, x, y);
                    points.push(cur);
                }
                PathCommand::HorizontalLineTo { abs, x } => {
                    cur.0 = if abs { x } else { cur.0 + x };
                    points.push(cur);
                }
                PathCommand::VerticalLineTo { abs, y } => {
                    cur.1 = if abs { y } else { cur.1 + y };
                    points.push(cur);
                }
                PathCommand::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                    points.push(resolve(cur, abs, x1, y1));
                    points.push(resolve(cur, abs, x2, y2));
                    cur = resolve(cur, abs, x, y);
                    points.push(cur);
                }
                PathCommand::SmoothCurveTo { abs, x2, y2, x, y } => {
                    points.push(resolve(cur, abs, x2, y2));
                    cur = resolve(cur, abs, x, y);
                    points.push(cur);
                }
                PathCommand::QuadTo { abs, x1, y1, x, y } => {
                    points.push(resolve(cur, abs, x1, y1));
                    cur = resolve(cur, abs, x, y);
                    points.push(cur);
                }
                PathCommand::ArcTo { abs, x, y, .. } => {
                    cur = resolve(cur, abs, x, y);
                    points.push(cur);
                }
                PathCommand::Close => {
                    cur = subpath_start;
                }
            }
        }

        points
    }
}

/// Format a coordinate at full precision.
///
/// The shortest round-tripping decimal form, so serializing never loses
/// information and the mirror/flip involutions hold for any input path, not
/// just engine-generated ones. `-0` normalizes to `0` so reflected
/// coordinates compare equal.
pub(crate) fn fmt_num(value: f64) -> String {
    let s = format!("{}", value);
    if s == "-0" { "0".to_string() } else { s }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = |upper: char, lower: char, abs: bool| if abs { upper } else { lower };
        match *self {
            PathCommand::MoveTo { abs, x, y } => {
                write!(f, "{} {},{}", letter('M', 'm', abs), fmt_num(x), fmt_num(y))
            }
            PathCommand::LineTo { abs, x, y } => {
                write!(f, "{} {},{}", letter('L', 'l', abs), fmt_num(x), fmt_num(y))
            }
            PathCommand::HorizontalLineTo { abs, x } => {
                write!(f, "{} {}", letter('H', 'h', abs), fmt_num(x))
            }
            PathCommand::VerticalLineTo { abs, y } => {
                write!(f, "{} {}", letter('V', 'v', abs), fmt_num(y))
            }
            PathCommand::CurveTo { abs, x1, y1, x2, y2, x, y } => write!(
                f,
                "{} {},{} {},{} {},{}",
                letter('C', 'c', abs),
                fmt_num(x1),
                fmt_num(y1),
                fmt_num(x2),
                fmt_num(y2),
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::SmoothCurveTo { abs, x2, y2, x, y } => write!(
                f,
                "{} {},{} {},{}",
                letter('S', 's', abs),
                fmt_num(x2),
                fmt_num(y2),
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::QuadTo { abs, x1, y1, x, y } => write!(
                f,
                "{} {},{} {},{}",
                letter('Q', 'q', abs),
                fmt_num(x1),
                fmt_num(y1),
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::SmoothQuadTo { abs, x, y } => {
                write!(f, "{} {},{}", letter('T', 't', abs), fmt_num(x), fmt_num(y))
            }
            PathCommand::ArcTo { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y } => write!(
                f,
                "{} {},{} {} {} {} {},{}",
                letter('A', 'a', abs),
                fmt_num(rx),
                fmt_num(ry),
                fmt_num(x_axis_rotation),
                large_arc as u8,
                sweep as u8,
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
