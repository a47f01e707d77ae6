//! End-to-end recording and painting.

use std::cell::RefCell;
use std::rc::Rc;

use canvas_primitives::{
    Attribute, Context, ContextOptions, NoSurfaces, Primitives, Surface, SurfaceError,
    SurfaceRegistry, Target, Value,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A surface that logs every interaction into a shared buffer.
#[derive(Clone, Default)]
struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
    /// Reject `lineTo` calls with a NaN coordinate.
    strict: bool,
}

impl CallLog {
    fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn log(&self, call: String) -> Result<(), SurfaceError> {
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Surface for CallLog {
    fn set_attribute(&mut self, attr: Attribute, value: &Value) -> Result<(), SurfaceError> {
        self.log(format!("{attr} = {value}"))
    }
    fn begin_path(&mut self) -> Result<(), SurfaceError> {
        self.log("beginPath()".into())
    }
    fn close_path(&mut self) -> Result<(), SurfaceError> {
        self.log("closePath()".into())
    }
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.log(format!("moveTo({x}, {y})"))
    }
    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        if self.strict && (x.is_nan() || y.is_nan()) {
            return Err(SurfaceError::invalid_argument("lineTo", "coordinate is NaN"));
        }
        self.log(format!("lineTo({x}, {y})"))
    }
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError> {
        self.log(format!("rect({x}, {y}, {w}, {h})"))
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
        self.log(format!("arc({x}, {y}, {r}, {start}, {end}, {anticlockwise})"))
    }
    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.log("fill()".into())
    }
    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.log("stroke()".into())
    }
    fn autoscale(&mut self, pixel_ratio: f64) {
        self.calls
            .borrow_mut()
            .push(format!("autoscale({pixel_ratio})"));
    }
}

fn triangle() -> Primitives {
    let mut prims = Primitives::new();
    prims.set_style("fillStyle", "red");
    prims.move_to(0.0, 0.0);
    prims.line_to(10.0, 10.0);
    prims.stroke();
    prims
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn enumerates_committed_records() {
    let prims = triangle();
    let records = prims.enumerate(|command, _| serde_json::to_value(command).ok());
    assert_eq!(
        serde_json::Value::Array(records),
        serde_json::json!([
            {"attr": "fillStyle", "value": "red"},
            {"fn": "moveTo", "params": [0.0, 0.0]},
            {"fn": "lineTo", "params": [10.0, 10.0]},
            {"fn": "stroke"},
        ])
    );
}

#[test]
fn shape_cycles_append_independent_segments() {
    let mut prims = Primitives::new();
    prims.set_stroke_style("blue");
    prims.begin_path();
    prims.move_to(1.0, 1.0);
    prims.stroke();

    prims.begin_path();
    prims.line_to(2.0, 2.0);
    prims.close_path();
    prims.stroke();

    let names = prims.enumerate(|command, _| Some(command.name()));
    assert_eq!(
        names,
        [
            "strokeStyle",
            "beginPath",
            "moveTo",
            "stroke",
            "beginPath",
            "lineTo",
            "closePath",
            "stroke"
        ]
    );
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn painting_an_empty_log_touches_nothing() {
    let prims = Primitives::new();
    let mut surface = CallLog::default();
    let mut context = Context::detached();
    prims.paint(&mut context, &mut surface).unwrap();
    assert!(surface.calls().is_empty());
}

#[test]
fn paints_registered_surface_in_log_order() {
    let surface = CallLog::default();
    let mut registry = SurfaceRegistry::new();
    registry.register("canvas", surface.clone());
    let mut context = Context::new(registry);

    let mut prims = triangle();
    prims.set_line_width(2.0);
    prims.arc(5.0, 5.0, 1.0, 0.0, 3.0, true);
    prims.fill();
    prims.stroke();

    prims.paint(&mut context, "canvas").unwrap();
    assert_eq!(
        surface.calls(),
        [
            "fillStyle = red",
            "moveTo(0, 0)",
            "lineTo(10, 10)",
            "stroke()",
            "lineWidth = 2",
            "arc(5, 5, 1, 0, 3, true)",
            "fill()",
            "stroke()",
        ]
    );
}

#[test]
fn painting_twice_replays_twice() {
    let prims = triangle();
    let mut surface = CallLog::default();
    let mut context = Context::detached();
    prims.paint(&mut context, &mut surface).unwrap();
    prims.paint(&mut context, &mut surface).unwrap();
    assert_eq!(surface.calls().len(), 8);
    assert_eq!(prims.len(), 4);
}

#[test]
fn unresolved_target_is_a_no_op() {
    let prims = triangle();
    let mut context = Context::new(SurfaceRegistry::new());
    assert!(prims.paint(&mut context, "nowhere").is_ok());

    let mut context = Context::new(NoSurfaces);
    assert!(prims.paint(&mut context, Target::Id("canvas")).is_ok());
}

#[test]
fn surface_errors_stop_the_replay() {
    let mut prims = Primitives::new();
    prims.set_fill_style("red");
    prims.move_to(0.0, 0.0);
    prims.line_to(f64::NAN, 1.0);
    prims.line_to(2.0, 2.0);
    prims.stroke();

    let mut surface = CallLog::strict();
    let mut context = Context::detached();
    let err = prims.paint(&mut context, &mut surface).unwrap_err();

    assert!(matches!(
        err,
        SurfaceError::InvalidArgument {
            operation: "lineTo",
            ..
        }
    ));
    assert_eq!(surface.calls(), ["fillStyle = red", "moveTo(0, 0)"]);
}

#[test]
fn autoscale_applies_on_every_resolution_when_enabled() {
    let prims = triangle();

    let surface = CallLog::default();
    let mut registry = SurfaceRegistry::new();
    registry.register("hidpi", surface.clone());
    let mut context = Context::with_options(registry, ContextOptions::autoscaled(2.0));

    prims.paint(&mut context, "hidpi").unwrap();
    prims.paint(&mut context, "hidpi").unwrap();

    let calls = surface.calls();
    assert_eq!(calls.iter().filter(|c| *c == "autoscale(2)").count(), 2);
    assert_eq!(calls[0], "autoscale(2)");
    assert_eq!(calls[5], "autoscale(2)");
}

#[test]
fn autoscale_disabled_leaves_surface_alone() {
    let prims = triangle();
    let mut surface = CallLog::default();
    let mut context = Context::detached();
    context.set_options(ContextOptions::new().pixel_ratio(3.0));

    prims.paint(&mut context, &mut surface).unwrap();
    assert!(surface.calls().iter().all(|c| !c.starts_with("autoscale")));
}

#[test]
fn recorder_targets_receive_the_same_log() {
    let prims = triangle();
    let mut copy = Primitives::new();
    let mut context = Context::with_options(NoSurfaces, ContextOptions::autoscaled(2.0));

    prims.paint(&mut context, &mut copy).unwrap();
    assert_eq!(copy.commands(), prims.commands());
}

#[test]
fn log_survives_a_json_round_trip() {
    let prims = triangle();
    let json = serde_json::to_string(&prims).unwrap();
    let restored: Primitives = serde_json::from_str(&json).unwrap();

    let mut original = CallLog::default();
    let mut replayed = CallLog::default();
    prims.replay(&mut original).unwrap();
    restored.replay(&mut replayed).unwrap();
    assert_eq!(original.calls(), replayed.calls());
}
