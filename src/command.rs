//! Entries of the command log.
//!
//! A log entry is either a style assignment ([`StyleCommand`]) or a drawing
//! method invocation ([`Operation`]). Both serialize to the plain record shape
//! used by canvas command logs:
//!
//! ```text
//! {"attr":"fillStyle","value":"red"}
//! {"fn":"moveTo","params":[0.0,0.0]}
//! {"fn":"stroke"}
//! ```

use canvas_attr::{Attribute, Value, number};
use serde::{Deserialize, Serialize};

/// A recorded style assignment, applied as a property write on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleCommand {
    /// The surface property being assigned.
    pub attr: Attribute,
    /// The assigned value, forwarded verbatim.
    pub value: Value,
}

impl StyleCommand {
    /// Creates a new style command.
    #[must_use]
    pub fn new(attr: Attribute, value: impl Into<Value>) -> Self {
        Self {
            attr,
            value: value.into(),
        }
    }
}

/// A recorded drawing method invocation with its positional arguments.
///
/// Arguments are stored exactly as issued. No validation is performed, so
/// NaN and infinities reach the surface unchanged. When serialized they are
/// written as the [`number`] keywords and read back as the same values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fn", content = "params", rename_all = "camelCase")]
pub enum Operation {
    /// Starts a new path.
    BeginPath,
    /// Closes the current sub-path.
    ClosePath,
    /// Moves the pen to `(x, y)`.
    MoveTo(#[serde(with = "number")] f64, #[serde(with = "number")] f64),
    /// Adds a straight segment to `(x, y)`.
    LineTo(#[serde(with = "number")] f64, #[serde(with = "number")] f64),
    /// Adds a rectangle: `x, y, width, height`.
    Rect(
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
    ),
    /// Adds a circular arc: `x, y, radius, start_angle, end_angle, anticlockwise`.
    Arc(
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
        #[serde(with = "number")] f64,
        bool,
    ),
    /// Fills the current path.
    Fill,
    /// Strokes the current path. Recorded once per finalized shape.
    Stroke,
}

impl Operation {
    /// Returns the surface method name this operation invokes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BeginPath => "beginPath",
            Self::ClosePath => "closePath",
            Self::MoveTo(..) => "moveTo",
            Self::LineTo(..) => "lineTo",
            Self::Rect(..) => "rect",
            Self::Arc(..) => "arc",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }

    /// Returns the positional argument list, in call order.
    #[must_use]
    pub fn args(&self) -> Vec<Value> {
        match *self {
            Self::BeginPath | Self::ClosePath | Self::Fill | Self::Stroke => Vec::new(),
            Self::MoveTo(x, y) | Self::LineTo(x, y) => vec![x.into(), y.into()],
            Self::Rect(x, y, width, height) => {
                vec![x.into(), y.into(), width.into(), height.into()]
            }
            Self::Arc(x, y, radius, start_angle, end_angle, anticlockwise) => vec![
                x.into(),
                y.into(),
                radius.into(),
                start_angle.into(),
                end_angle.into(),
                anticlockwise.into(),
            ],
        }
    }
}

/// One entry of the command log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    /// A style assignment.
    Style(StyleCommand),
    /// A drawing method invocation.
    Operation(Operation),
}

impl Command {
    /// Returns the style assignment, if this is one.
    #[must_use]
    pub const fn as_style(&self) -> Option<&StyleCommand> {
        match self {
            Self::Style(style) => Some(style),
            Self::Operation(_) => None,
        }
    }

    /// Returns the operation, if this is one.
    #[must_use]
    pub const fn as_operation(&self) -> Option<&Operation> {
        match self {
            Self::Operation(op) => Some(op),
            Self::Style(_) => None,
        }
    }

    /// Returns the property or method name this entry targets on a surface.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Style(style) => style.attr.as_str(),
            Self::Operation(op) => op.name(),
        }
    }
}

impl From<StyleCommand> for Command {
    fn from(style: StyleCommand) -> Self {
        Self::Style(style)
    }
}

impl From<Operation> for Command {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}
