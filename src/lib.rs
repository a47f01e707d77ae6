#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod command;
pub mod context;
pub mod logging;
pub mod primitives;
pub mod style;
pub mod surface;

#[doc(inline)]
pub use canvas_attr::{Attribute, UnknownAttribute, Value, resolve};
pub use command::{Command, Operation, StyleCommand};
pub use context::{Context, ContextOptions, NoSurfaces, SurfaceProvider, SurfaceRegistry, Target};
pub use primitives::{Primitives, primitives};
pub use style::{LineCap, LineJoin, TextAlign, TextBaseline};
pub use surface::{Surface, SurfaceError};

pub mod prelude {
    //! Commonly used types for recording and painting.
    //!
    //! ```rust
    //! use canvas_primitives::prelude::*;
    //!
    //! let mut prims = primitives();
    //! prims.set_line_cap(LineCap::Round);
    //! prims.stroke();
    //! assert_eq!(prims.len(), 2);
    //! ```
    pub use super::{
        Attribute, Command, Context, ContextOptions, LineCap, LineJoin, Operation, Primitives,
        Surface, SurfaceError, SurfaceRegistry, Target, TextAlign, TextBaseline, Value,
        primitives,
    };
}
