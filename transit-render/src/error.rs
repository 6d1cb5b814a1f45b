//! Errors raised while turning a catalogue into a map.

use thiserror::Error;

/// Errors returned by [`MapRenderer`](crate::MapRenderer).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// At least one route needs a colour but the palette has none.
    #[error("colour palette is empty but the catalogue has routes to draw")]
    EmptyPalette,
}
