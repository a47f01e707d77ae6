//! The primitive recorder: buffers canvas calls and replays them later.

use canvas_attr::{Attribute, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::command::{Command, Operation, StyleCommand};
use crate::context::{Context, SurfaceProvider, Target};
use crate::style::{LineCap, LineJoin, TextAlign, TextBaseline};
use crate::surface::{Surface, SurfaceError};

/// A storage object for canvas drawing primitives.
///
/// `Primitives` mimics a 2D canvas context. Path calls are buffered until
/// [`Primitives::stroke`] is called, which commits the shape into the
/// command log:
///
/// 1. every pending style whose name is a recognized [`Attribute`], in the
///    order the names were first set,
/// 2. every buffered path operation, in call order,
/// 3. a single `stroke` operation.
///
/// Styles therefore always precede the geometry of their shape in the log,
/// regardless of when they were set while the shape was being built.
///
/// The log can be enumerated or painted any number of times without being
/// consumed.
///
/// # Example
///
/// ```
/// use canvas_primitives::Primitives;
///
/// let mut prims = Primitives::new();
/// prims.set_style("fillStyle", "red");
/// prims.move_to(0.0, 0.0);
/// prims.line_to(10.0, 10.0);
/// prims.stroke();
///
/// let ops: Vec<&str> = prims.enumerate(|command, _| Some(command.name()));
/// assert_eq!(ops, ["fillStyle", "moveTo", "lineTo", "stroke"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Primitives {
    commands: Vec<Command>,
    pending_ops: Vec<Operation>,
    pending_styles: IndexMap<String, Value>,
}

/// Creates an empty [`Primitives`] recorder.
#[must_use]
pub fn primitives() -> Primitives {
    Primitives::new()
}

impl Primitives {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose committed log is `commands`.
    #[must_use]
    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self {
            commands,
            ..Self::default()
        }
    }

    // ========================================================================
    // Styles
    // ========================================================================

    /// Records a pending style value.
    ///
    /// The last value set for a name before the next [`stroke`](Self::stroke)
    /// wins. Names are not validated here; unrecognized names are dropped when
    /// the shape is committed.
    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.pending_styles.insert(name.into(), value.into());
    }

    /// Returns the pending value for a style name, if one was set since the
    /// last commit.
    #[must_use]
    pub fn pending_style(&self, name: &str) -> Option<&Value> {
        self.pending_styles.get(name)
    }

    fn set_attr(&mut self, attr: Attribute, value: impl Into<Value>) {
        self.set_style(attr.as_str(), value);
    }

    /// Sets the fill paint, e.g. a CSS color string.
    pub fn set_fill_style(&mut self, style: impl Into<Value>) {
        self.set_attr(Attribute::FillStyle, style);
    }

    /// Sets the stroke paint, e.g. a CSS color string.
    pub fn set_stroke_style(&mut self, style: impl Into<Value>) {
        self.set_attr(Attribute::StrokeStyle, style);
    }

    /// Sets the shadow color.
    pub fn set_shadow_color(&mut self, color: impl Into<Value>) {
        self.set_attr(Attribute::ShadowColor, color);
    }

    /// Sets the shadow blur level.
    pub fn set_shadow_blur(&mut self, blur: f64) {
        self.set_attr(Attribute::ShadowBlur, blur);
    }

    /// Sets the horizontal shadow offset.
    pub fn set_shadow_offset_x(&mut self, offset: f64) {
        self.set_attr(Attribute::ShadowOffsetX, offset);
    }

    /// Sets the vertical shadow offset.
    pub fn set_shadow_offset_y(&mut self, offset: f64) {
        self.set_attr(Attribute::ShadowOffsetY, offset);
    }

    /// Sets the line cap style.
    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.set_attr(Attribute::LineCap, cap);
    }

    /// Sets the line join style.
    pub fn set_line_join(&mut self, join: LineJoin) {
        self.set_attr(Attribute::LineJoin, join);
    }

    /// Sets the line width.
    pub fn set_line_width(&mut self, width: f64) {
        self.set_attr(Attribute::LineWidth, width);
    }

    /// Sets the miter limit.
    pub fn set_miter_limit(&mut self, limit: f64) {
        self.set_attr(Attribute::MiterLimit, limit);
    }

    /// Sets the font description, e.g. `"bold 12px sans-serif"`.
    pub fn set_font(&mut self, font: impl Into<String>) {
        self.set_attr(Attribute::Font, font.into());
    }

    /// Sets the text alignment.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.set_attr(Attribute::TextAlign, align);
    }

    /// Sets the text baseline.
    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.set_attr(Attribute::TextBaseline, baseline);
    }

    // ========================================================================
    // Path construction
    // ========================================================================

    fn push(&mut self, op: Operation) {
        self.pending_ops.push(op);
    }

    /// Buffers a `beginPath` call.
    pub fn begin_path(&mut self) {
        self.push(Operation::BeginPath);
    }

    /// Buffers a `closePath` call.
    pub fn close_path(&mut self) {
        self.push(Operation::ClosePath);
    }

    /// Buffers a `moveTo(x, y)` call.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.push(Operation::MoveTo(x, y));
    }

    /// Buffers a `lineTo(x, y)` call.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.push(Operation::LineTo(x, y));
    }

    /// Buffers a `rect(x, y, width, height)` call.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(Operation::Rect(x, y, width, height));
    }

    /// Buffers an `arc(x, y, radius, startAngle, endAngle, anticlockwise)` call.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.push(Operation::Arc(
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        ));
    }

    /// Buffers a `fill` call.
    pub fn fill(&mut self) {
        self.push(Operation::Fill);
    }

    /// Commits the current shape into the command log.
    ///
    /// Pending styles go first, then the buffered path operations, then a
    /// `stroke` operation. Pending state is reset afterwards, so nothing
    /// leaks into the next shape. Calling this with nothing pending still
    /// records a lone `stroke`.
    pub fn stroke(&mut self) {
        self.commit();
    }

    fn commit(&mut self) {
        let start = self.commands.len();

        for (name, value) in self.pending_styles.drain(..) {
            match Attribute::from_keyword(&name) {
                Some(attr) => self
                    .commands
                    .push(Command::Style(StyleCommand { attr, value })),
                None => {
                    debug!(name = %name, "dropping unrecognized style");
                }
            }
        }
        let styles = self.commands.len() - start;

        let ops = self.pending_ops.len();
        self.commands
            .extend(self.pending_ops.drain(..).map(Command::Operation));
        self.commands.push(Command::Operation(Operation::Stroke));

        trace!(styles, ops, total = self.commands.len(), "committed shape");
    }

    // ========================================================================
    // Reading
    // ========================================================================

    /// Visits every committed command in order and collects the visitor's
    /// results.
    ///
    /// The visitor receives the command and its index in the log. Commands
    /// for which it returns `None` contribute nothing to the result.
    pub fn enumerate<R, F>(&self, mut visitor: F) -> Vec<R>
    where
        F: FnMut(&Command, usize) -> Option<R>,
    {
        self.commands
            .iter()
            .enumerate()
            .filter_map(|(index, command)| visitor(command, index))
            .collect()
    }

    /// Like [`enumerate`](Self::enumerate), but with an optional visitor.
    ///
    /// Without a visitor every command is skipped and the result is empty.
    pub fn enumerate_with<R, F>(&self, visitor: Option<F>) -> Vec<R>
    where
        F: FnMut(&Command, usize) -> Option<R>,
    {
        visitor.map_or_else(Vec::new, |visitor| self.enumerate(visitor))
    }

    /// Returns the committed command log.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Iterates over the committed command log.
    pub fn iter(&self) -> core::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Returns the number of committed commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of buffered path operations not yet committed.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending_ops.len()
    }

    /// Discards the committed log and any pending shape state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.pending_ops.clear();
        self.pending_styles.clear();
    }

    // ========================================================================
    // Painting
    // ========================================================================

    /// Replays the committed log onto an already resolved surface.
    ///
    /// Style commands become attribute assignments and operations become
    /// method calls, in log order.
    ///
    /// # Errors
    /// Returns the first error raised by the surface. Commands applied before
    /// the failing one stay applied.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        for (index, command) in self.commands.iter().enumerate() {
            if let Err(err) = surface.apply(command) {
                warn!(index, command = command.name(), error = %err, "replay aborted");
                return Err(err);
            }
        }
        debug!(commands = self.commands.len(), "replayed command log");
        Ok(())
    }

    /// Paints the committed log onto `target`.
    ///
    /// The target is resolved through `context`. If it cannot be resolved
    /// nothing is painted and `Ok(())` is returned.
    ///
    /// # Errors
    /// Returns the first error raised by the resolved surface.
    pub fn paint<'a, P: SurfaceProvider>(
        &self,
        context: &'a mut Context<P>,
        target: impl Into<Target<'a>>,
    ) -> Result<(), SurfaceError> {
        match context.get_context(target.into()) {
            Some(surface) => self.replay(surface),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a Primitives {
    type Item = &'a Command;
    type IntoIter = core::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// A recorder can itself be painted onto: style assignments become pending
/// styles and method calls are recorded, with `stroke` committing the shape.
impl Surface for Primitives {
    fn set_attribute(&mut self, attr: Attribute, value: &Value) -> Result<(), SurfaceError> {
        self.set_attr(attr, value.clone());
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), SurfaceError> {
        self.push(Operation::BeginPath);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        self.push(Operation::ClosePath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.push(Operation::MoveTo(x, y));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.push(Operation::LineTo(x, y));
        Ok(())
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.push(Operation::Rect(x, y, width, height));
        Ok(())
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
        self.push(Operation::Arc(
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        ));
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.push(Operation::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.commit();
        Ok(())
    }
}

impl Serialize for Primitives {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.commands.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Primitives {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Command>::deserialize(deserializer).map(Self::from_commands)
    }
}
