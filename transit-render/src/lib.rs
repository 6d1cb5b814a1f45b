//! Schematic SVG maps of a transit catalogue.
//!
//! [`MapRenderer`] projects served stops onto a canvas with
//! [`SphereProjector`] and draws routes, route labels, stop markers and
//! stop labels in that order, styled by [`RenderSettings`]. The [`svg`]
//! module holds the drawing primitives and their serialisation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod projector;
mod renderer;
mod settings;
pub mod svg;

pub use error::RenderError;
pub use projector::SphereProjector;
pub use renderer::MapRenderer;
pub use settings::RenderSettings;
