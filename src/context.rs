//! Resolution of paint targets into concrete surfaces.
//!
//! A paint target is either an identifier, looked up through a
//! [`SurfaceProvider`], or a surface that has already been resolved. The
//! [`Context`] performs that lookup and optionally auto-scales the surface to
//! the device pixel ratio before it is painted.

use std::collections::HashMap;

use core::fmt::{self, Debug};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::surface::Surface;

/// Where a command log should be painted.
pub enum Target<'a> {
    /// A surface registered under this identifier.
    Id(&'a str),
    /// A surface that is already resolved.
    Surface(&'a mut dyn Surface),
}

impl Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.debug_tuple("Id").field(id).finish(),
            Self::Surface(_) => f.debug_tuple("Surface").finish_non_exhaustive(),
        }
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(id: &'a str) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(id: &'a String) -> Self {
        Self::Id(id)
    }
}

impl<'a, S: Surface + 'a> From<&'a mut S> for Target<'a> {
    fn from(surface: &'a mut S) -> Self {
        Self::Surface(surface)
    }
}

/// Looks up surfaces by identifier.
pub trait SurfaceProvider {
    /// Returns the surface registered under `id`, if any.
    fn surface(&mut self, id: &str) -> Option<&mut dyn Surface>;
}

/// A provider that never resolves an identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSurfaces;

impl SurfaceProvider for NoSurfaces {
    fn surface(&mut self, _id: &str) -> Option<&mut dyn Surface> {
        None
    }
}

/// An in-memory map from identifiers to surfaces.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Box<dyn Surface>>,
}

impl Debug for SurfaceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("SurfaceRegistry").field("ids", &ids).finish()
    }
}

impl SurfaceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface under `id`, returning the surface it replaces.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        surface: impl Surface + 'static,
    ) -> Option<Box<dyn Surface>> {
        self.surfaces.insert(id.into(), Box::new(surface))
    }

    /// Removes and returns the surface registered under `id`.
    pub fn remove(&mut self, id: &str) -> Option<Box<dyn Surface>> {
        self.surfaces.remove(id)
    }

    /// Returns the surface registered under `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut dyn Surface> {
        let surface: &mut dyn Surface = &mut **self.surfaces.get_mut(id)?;
        Some(surface)
    }

    /// Returns `true` if a surface is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Returns the number of registered surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns `true` if no surface is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceProvider for SurfaceRegistry {
    fn surface(&mut self, id: &str) -> Option<&mut dyn Surface> {
        self.get_mut(id)
    }
}

/// Options applied whenever a [`Context`] resolves a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextOptions {
    /// Whether resolved surfaces are scaled to `pixel_ratio`.
    pub autoscale: bool,
    /// The device pixel ratio used when auto-scaling.
    pub pixel_ratio: f64,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            autoscale: false,
            pixel_ratio: 1.0,
        }
    }
}

impl ContextOptions {
    /// Creates options with auto-scaling disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            autoscale: false,
            pixel_ratio: 1.0,
        }
    }

    /// Creates options that auto-scale to `pixel_ratio`.
    #[must_use]
    pub const fn autoscaled(pixel_ratio: f64) -> Self {
        Self {
            autoscale: true,
            pixel_ratio,
        }
    }

    /// Enables or disables auto-scaling.
    #[must_use]
    pub const fn autoscale(mut self, autoscale: bool) -> Self {
        self.autoscale = autoscale;
        self
    }

    /// Sets the device pixel ratio.
    #[must_use]
    pub const fn pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }
}

/// Resolves paint targets into surfaces.
#[derive(Debug, Default)]
pub struct Context<P = SurfaceRegistry> {
    provider: P,
    options: ContextOptions,
}

impl Context<NoSurfaces> {
    /// Creates a context that only paints onto already resolved surfaces.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            provider: NoSurfaces,
            options: ContextOptions::new(),
        }
    }
}

impl<P: SurfaceProvider> Context<P> {
    /// Creates a context with default options.
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            options: ContextOptions::new(),
        }
    }

    /// Creates a context with the given options.
    pub const fn with_options(provider: P, options: ContextOptions) -> Self {
        Self { provider, options }
    }

    /// Returns the resolution options.
    #[must_use]
    pub const fn options(&self) -> ContextOptions {
        self.options
    }

    /// Replaces the resolution options.
    pub const fn set_options(&mut self, options: ContextOptions) {
        self.options = options;
    }

    /// Returns the surface provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the surface provider mutably, e.g. to register surfaces.
    pub const fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Consumes the context, returning its provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Resolves `target` to a surface.
    ///
    /// Returns `None` if an identifier is not known to the provider. When
    /// auto-scaling is enabled the surface is scaled before it is returned.
    pub fn get_context<'a>(&'a mut self, target: Target<'a>) -> Option<&'a mut dyn Surface> {
        let options = self.options;
        let surface = match target {
            Target::Surface(surface) => surface,
            Target::Id(id) => {
                let Some(surface) = self.provider.surface(id) else {
                    debug!(id, "paint target not found");
                    return None;
                };
                surface
            }
        };

        if options.autoscale {
            surface.autoscale(options.pixel_ratio);
        }
        Some(surface)
    }
}
