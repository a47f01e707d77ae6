//! The drawing surface contract that recorded commands are replayed onto.

use canvas_attr::{Attribute, Value};
use thiserror::Error;

use crate::command::{Command, Operation};

/// Error raised by a surface while a command log is replayed onto it.
///
/// Replay stops at the first error and returns it unchanged.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface does not implement the requested method.
    #[error("surface does not support `{operation}`")]
    Unsupported {
        /// Method name, e.g. `arc`.
        operation: &'static str,
    },
    /// The surface rejected a style value.
    #[error("surface rejected `{value}` for `{attribute}`")]
    InvalidValue {
        /// The attribute being assigned.
        attribute: Attribute,
        /// The rejected value.
        value: Value,
    },
    /// The surface rejected an argument of a drawing method.
    #[error("invalid argument to `{operation}`: {reason}")]
    InvalidArgument {
        /// Method name, e.g. `moveTo`.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
    /// A failure inside the rendering backend.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl SurfaceError {
    /// Creates an [`SurfaceError::InvalidArgument`] error.
    #[must_use]
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

/// A target that recorded canvas commands can be replayed onto.
///
/// Style commands become [`Surface::set_attribute`] calls and operations
/// become calls of the matching method with the recorded arguments.
///
/// # Path Model
///
/// - `begin_path` starts a new path
/// - `move_to`, `line_to`, `rect` and `arc` add to the current path
/// - `close_path` closes the current sub-path
/// - `fill` and `stroke` render the current path
pub trait Surface {
    /// Assigns a style property.
    ///
    /// # Errors
    /// Returns an error if the surface rejects the value.
    fn set_attribute(&mut self, attr: Attribute, value: &Value) -> Result<(), SurfaceError>;

    /// Starts a new path.
    ///
    /// # Errors
    /// Returns an error if the surface cannot start a path.
    fn begin_path(&mut self) -> Result<(), SurfaceError>;

    /// Closes the current sub-path.
    ///
    /// # Errors
    /// Returns an error if the surface cannot close the sub-path.
    fn close_path(&mut self) -> Result<(), SurfaceError>;

    /// Moves the pen without drawing.
    ///
    /// # Errors
    /// Returns an error if the surface rejects the coordinates.
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Adds a straight line segment.
    ///
    /// # Errors
    /// Returns an error if the surface rejects the coordinates.
    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Adds a rectangle sub-path.
    ///
    /// # Errors
    /// Returns an error if the surface rejects the geometry.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Adds a circular arc.
    ///
    /// # Errors
    /// Returns an error if the surface rejects the geometry.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Result<(), SurfaceError>;

    /// Fills the current path.
    ///
    /// # Errors
    /// Returns an error if the surface fails to fill.
    fn fill(&mut self) -> Result<(), SurfaceError>;

    /// Strokes the current path.
    ///
    /// # Errors
    /// Returns an error if the surface fails to stroke.
    fn stroke(&mut self) -> Result<(), SurfaceError>;

    /// Adapts the surface to the device pixel ratio.
    ///
    /// Called on every resolution when auto-scaling is enabled. Surfaces
    /// without a backing store keep the default no-op.
    fn autoscale(&mut self, pixel_ratio: f64) {
        let _ = pixel_ratio;
    }

    /// Applies a single recorded command.
    ///
    /// # Errors
    /// Propagates the error of the surface method that was invoked.
    fn apply(&mut self, command: &Command) -> Result<(), SurfaceError> {
        match command {
            Command::Style(style) => self.set_attribute(style.attr, &style.value),
            Command::Operation(op) => match *op {
                Operation::BeginPath => self.begin_path(),
                Operation::ClosePath => self.close_path(),
                Operation::MoveTo(x, y) => self.move_to(x, y),
                Operation::LineTo(x, y) => self.line_to(x, y),
                Operation::Rect(x, y, width, height) => self.rect(x, y, width, height),
                Operation::Arc(x, y, radius, start_angle, end_angle, anticlockwise) => {
                    self.arc(x, y, radius, start_angle, end_angle, anticlockwise)
                }
                Operation::Fill => self.fill(),
                Operation::Stroke => self.stroke(),
            },
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_attribute(&mut self, attr: Attribute, value: &Value) -> Result<(), SurfaceError> {
        (**self).set_attribute(attr, value)
    }

    fn begin_path(&mut self) -> Result<(), SurfaceError> {
        (**self).begin_path()
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        (**self).close_path()
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        (**self).line_to(x, y)
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SurfaceError> {
        (**self).rect(x, y, width, height)
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Result<(), SurfaceError> {
        (**self).arc(x, y, radius, start_angle, end_angle, anticlockwise)
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        (**self).fill()
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        (**self).stroke()
    }

    fn autoscale(&mut self, pixel_ratio: f64) {
        (**self).autoscale(pixel_ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::StyleCommand;

    /// Records the name of every method called on it.
    #[derive(Debug, Default)]
    struct NameLog(Vec<String>);

    impl Surface for NameLog {
        fn set_attribute(&mut self, attr: Attribute, value: &Value) -> Result<(), SurfaceError> {
            self.0.push(format!("{attr}={value}"));
            Ok(())
        }
        fn begin_path(&mut self) -> Result<(), SurfaceError> {
            self.0.push("beginPath".into());
            Ok(())
        }
        fn close_path(&mut self) -> Result<(), SurfaceError> {
            self.0.push("closePath".into());
            Ok(())
        }
        fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
            self.0.push(format!("moveTo({x},{y})"));
            Ok(())
        }
        fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
            self.0.push(format!("lineTo({x},{y})"));
            Ok(())
        }
        fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError> {
            self.0.push(format!("rect({x},{y},{w},{h})"));
            Ok(())
        }
        fn arc(
            &mut self,
            x: f64,
            y: f64,
            r: f64,
            start: f64,
            end: f64,
            anticlockwise: bool,
        ) -> Result<(), SurfaceError> {
            self.0
                .push(format!("arc({x},{y},{r},{start},{end},{anticlockwise})"));
            Ok(())
        }
        fn fill(&mut self) -> Result<(), SurfaceError> {
            self.0.push("fill".into());
            Ok(())
        }
        fn stroke(&mut self) -> Result<(), SurfaceError> {
            Err(SurfaceError::Unsupported { operation: "stroke" })
        }
    }

    #[test]
    fn apply_dispatches_by_variant() {
        let mut surface = NameLog::default();
        let commands = [
            Command::Style(StyleCommand::new(Attribute::LineCap, "round")),
            Command::Operation(Operation::BeginPath),
            Command::Operation(Operation::Rect(1.0, 2.0, 3.0, 4.0)),
            Command::Operation(Operation::Arc(0.0, 0.0, 5.0, 0.0, 1.5, true)),
            Command::Operation(Operation::ClosePath),
            Command::Operation(Operation::Fill),
        ];
        for command in &commands {
            surface.apply(command).unwrap();
        }
        assert_eq!(
            surface.0,
            [
                "lineCap=round",
                "beginPath",
                "rect(1,2,3,4)",
                "arc(0,0,5,0,1.5,true)",
                "closePath",
                "fill"
            ]
        );
    }

    #[test]
    fn apply_returns_surface_error() {
        let mut surface = NameLog::default();
        let err = surface
            .apply(&Command::Operation(Operation::Stroke))
            .unwrap_err();
        assert!(matches!(err, SurfaceError::Unsupported { operation: "stroke" }));
        assert_eq!(err.to_string(), "surface does not support `stroke`");
    }

    fn draw_line<S: Surface>(mut surface: S) {
        surface.autoscale(2.0);
        surface.move_to(1.0, 2.0).unwrap();
        surface.line_to(3.0, 4.0).unwrap();
    }

    #[test]
    fn forwards_through_mutable_references() {
        let mut surface = NameLog::default();
        draw_line(&mut surface);
        assert_eq!(surface.0, ["moveTo(1,2)", "lineTo(3,4)"]);
    }

    #[test]
    fn error_messages() {
        let err = SurfaceError::InvalidValue {
            attribute: Attribute::LineWidth,
            value: Value::from("wide"),
        };
        assert_eq!(err.to_string(), "surface rejected `wide` for `lineWidth`");

        let err = SurfaceError::invalid_argument("moveTo", "x is NaN");
        assert_eq!(err.to_string(), "invalid argument to `moveTo`: x is NaN");

        let err = SurfaceError::from(anyhow::anyhow!("device lost"));
        assert_eq!(err.to_string(), "device lost");
    }
}
