//! # Canvas attributes
//!
//! Resolution of the style keywords understood by a 2D canvas surface.
//!
//! A drawing recorder accepts arbitrary style names while a shape is being
//! built. Only the names listed in [`Attribute`] are meaningful to a surface,
//! so [`resolve`] is used as a predicate to decide which pending styles are
//! promoted into the command log.
//!
//! ```
//! use canvas_attr::{Attribute, resolve};
//!
//! assert_eq!(resolve("fillStyle"), Some("fillStyle"));
//! assert_eq!(resolve("bogus"), None);
//! assert_eq!(Attribute::from_keyword("lineWidth"), Some(Attribute::LineWidth));
//! ```

pub mod number;
mod value;
pub use value::Value;

use core::fmt::{self, Display};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A style attribute recognized by canvas surfaces.
///
/// Each variant maps to the surface property of the same (camelCase) name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    // Colors, styles and shadows
    /// Paint used when filling shapes.
    FillStyle,
    /// Paint used when stroking outlines.
    StrokeStyle,
    /// Color of the shadow.
    ShadowColor,
    /// Blur level of the shadow.
    ShadowBlur,
    /// Horizontal shadow offset.
    ShadowOffsetX,
    /// Vertical shadow offset.
    ShadowOffsetY,

    // Line styles
    /// Shape of line ends.
    LineCap,
    /// Shape of corners where lines meet.
    LineJoin,
    /// Width of stroked lines.
    LineWidth,
    /// Maximum miter length ratio.
    MiterLimit,

    // Text
    /// Font description.
    Font,
    /// Horizontal text alignment.
    TextAlign,
    /// Vertical text baseline.
    TextBaseline,
}

impl Attribute {
    /// Every recognized attribute, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::FillStyle,
        Self::StrokeStyle,
        Self::ShadowColor,
        Self::ShadowBlur,
        Self::ShadowOffsetX,
        Self::ShadowOffsetY,
        Self::LineCap,
        Self::LineJoin,
        Self::LineWidth,
        Self::MiterLimit,
        Self::Font,
        Self::TextAlign,
        Self::TextBaseline,
    ];

    /// Returns the surface property name configured by this attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FillStyle => "fillStyle",
            Self::StrokeStyle => "strokeStyle",
            Self::ShadowColor => "shadowColor",
            Self::ShadowBlur => "shadowBlur",
            Self::ShadowOffsetX => "shadowOffsetX",
            Self::ShadowOffsetY => "shadowOffsetY",
            Self::LineCap => "lineCap",
            Self::LineJoin => "lineJoin",
            Self::LineWidth => "lineWidth",
            Self::MiterLimit => "miterLimit",
            Self::Font => "font",
            Self::TextAlign => "textAlign",
            Self::TextBaseline => "textBaseline",
        }
    }

    /// Looks up the attribute for a style keyword.
    ///
    /// Matching is exact and case-sensitive. Returns `None` for anything that
    /// is not a recognized keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let attr = match keyword {
            "fillStyle" => Self::FillStyle,
            "strokeStyle" => Self::StrokeStyle,
            "shadowColor" => Self::ShadowColor,
            "shadowBlur" => Self::ShadowBlur,
            "shadowOffsetX" => Self::ShadowOffsetX,
            "shadowOffsetY" => Self::ShadowOffsetY,
            "lineCap" => Self::LineCap,
            "lineJoin" => Self::LineJoin,
            "lineWidth" => Self::LineWidth,
            "miterLimit" => Self::MiterLimit,
            "font" => Self::Font,
            "textAlign" => Self::TextAlign,
            "textBaseline" => Self::TextBaseline,
            _ => return None,
        };
        Some(attr)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a keyword that is not a recognized attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown canvas attribute `{0}`")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

/// Gets the surface property name for a style keyword.
///
/// Absence is an expected result and is used as a predicate elsewhere.
#[must_use]
pub fn resolve(keyword: &str) -> Option<&'static str> {
    Attribute::from_keyword(keyword).map(Attribute::as_str)
}
