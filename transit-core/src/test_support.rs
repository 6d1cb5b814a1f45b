//! Test-only helpers for assembling small catalogues in unit and behaviour
//! tests.

use crate::{CatalogueError, TransportCatalogue};

/// Stop fixture: name, latitude, longitude.
pub type StopSpec<'a> = (&'a str, f64, f64);

/// Route fixture: name, stop names, round-trip flag.
pub type RouteSpec<'a> = (&'a str, &'a [&'a str], bool);

/// Build a catalogue from stop and route fixtures, stops first.
///
/// # Errors
/// Propagates the first [`CatalogueError`] raised while loading.
pub fn catalogue_with(
    stops: &[StopSpec<'_>],
    routes: &[RouteSpec<'_>],
) -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();
    for &(name, latitude, longitude) in stops {
        catalogue.add_stop(name, latitude, longitude)?;
    }
    for &(name, path, is_roundtrip) in routes {
        catalogue.add_route(name, path, is_roundtrip)?;
    }
    Ok(catalogue)
}

/// Three served stops on a half-degree grid plus one stop no bus serves.
///
/// Routes:
/// - `14`: round trip `A -> C -> B -> A`
/// - `7`: there-and-back `C -> B`
///
/// # Errors
/// Never fails for the built-in fixture; the `Result` mirrors
/// [`catalogue_with`].
pub fn grid_catalogue() -> Result<TransportCatalogue, CatalogueError> {
    catalogue_with(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 0.5, 0.5),
            ("Depot", 5.0, 5.0),
        ],
        &[("14", &["A", "C", "B", "A"], true), ("7", &["C", "B"], false)],
    )
}
