//! Typed keyword values for canvas line and text styling.
//!
//! Surfaces receive these as plain [`Value::Text`] keywords, so anything set
//! through the typed setters replays exactly like the raw string would.

use canvas_attr::Value;

// ============================================================================
// Line Styling
// ============================================================================

/// Line cap style (end of strokes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat edge at end of line (default).
    #[default]
    Butt,
    /// Rounded end.
    Round,
    /// Square end extending beyond the endpoint.
    Square,
}

impl LineCap {
    /// Returns the canvas keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Line join style (corners).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Miter join (sharp corner, default).
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Beveled corner (flattened).
    Bevel,
}

impl LineJoin {
    /// Returns the canvas keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

// ============================================================================
// Text Styling
// ============================================================================

/// Horizontal text alignment relative to the drawing position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Align to the start edge of the writing direction (default).
    #[default]
    Start,
    /// Align to the end edge of the writing direction.
    End,
    /// Left aligned.
    Left,
    /// Right aligned.
    Right,
    /// Centered.
    Center,
}

impl TextAlign {
    /// Returns the canvas keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Text baseline used when drawing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// Top of the em square.
    Top,
    /// Hanging baseline.
    Hanging,
    /// Middle of the em square.
    Middle,
    /// Alphabetic baseline (default).
    #[default]
    Alphabetic,
    /// Ideographic baseline.
    Ideographic,
    /// Bottom of the bounding box.
    Bottom,
}

impl TextBaseline {
    /// Returns the canvas keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }
}

macro_rules! impl_keyword_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(keyword: $ty) -> Self {
                    Self::Text(keyword.as_str().to_string())
                }
            }
        )*
    };
}

impl_keyword_value!(LineCap, LineJoin, TextAlign, TextBaseline);
