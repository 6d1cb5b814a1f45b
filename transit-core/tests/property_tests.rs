//! Property-based tests for distances and route metrics.
//!
//! # Invariants tested
//!
//! - **Distance symmetry:** `distance(a, b) == distance(b, a)` and
//!   `distance(a, a) == 0`.
//! - **Stop counts:** `k` for a round trip, `2k - 1` for there-and-back.
//! - **Unique stops:** never more than the stop count, equal to the number
//!   of distinct names.
//! - **Curvature:** at least one when only great-circle distances are used.

use std::collections::HashSet;

use geo::Coord;
use proptest::prelude::*;
use transit_core::{TransportCatalogue, compute_distance};

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-89.0_f64..89.0, -179.0_f64..179.0).prop_map(|(lat, lng)| Coord { x: lng, y: lat })
}

/// Catalogue of `stop_count` stops near Moscow plus a path over them.
fn network_strategy() -> impl Strategy<Value = (Vec<Coord<f64>>, Vec<usize>)> {
    (2_usize..8).prop_flat_map(|stop_count| {
        let stops = proptest::collection::vec(
            (55.5_f64..55.9, 37.3_f64..37.9).prop_map(|(lat, lng)| Coord { x: lng, y: lat }),
            stop_count,
        );
        let path = proptest::collection::vec(0..stop_count, 1..12);
        (stops, path)
    })
}

fn build(stops: &[Coord<f64>], path: &[usize], is_roundtrip: bool) -> TransportCatalogue {
    let mut catalogue = TransportCatalogue::new();
    for (index, location) in stops.iter().enumerate() {
        catalogue
            .add_stop(format!("S{index}"), location.y, location.x)
            .expect("generated stop names are unique");
    }
    let names: Vec<String> = path.iter().map(|index| format!("S{index}")).collect();
    catalogue
        .add_route("R", &names, is_roundtrip)
        .expect("generated path only names known stops");
    catalogue
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        prop_assert_eq!(compute_distance(a, b), compute_distance(b, a));
        prop_assert!(compute_distance(a, b) >= 0.0);
    }

    #[test]
    fn distance_to_self_is_zero(a in coord_strategy()) {
        prop_assert_eq!(compute_distance(a, a), 0.0);
    }

    #[test]
    fn stop_counts_follow_route_shape(
        (stops, path) in network_strategy(),
        is_roundtrip in any::<bool>(),
    ) {
        let catalogue = build(&stops, &path, is_roundtrip);
        let stats = catalogue.find_route("R").expect("route").stats;

        let expected = if is_roundtrip { path.len() } else { 2 * path.len() - 1 };
        prop_assert_eq!(stats.stop_count, expected);

        let distinct = path.iter().collect::<HashSet<_>>().len();
        prop_assert_eq!(stats.unique_stop_count, distinct);
        prop_assert!(stats.unique_stop_count <= stats.stop_count);
    }

    #[test]
    fn curvature_is_at_least_one_without_overrides(
        (stops, path) in network_strategy(),
        is_roundtrip in any::<bool>(),
    ) {
        let catalogue = build(&stops, &path, is_roundtrip);
        let stats = catalogue.find_route("R").expect("route").stats;

        prop_assert!(!stats.curvature.is_nan());
        if stats.straight_length > 0.0 {
            prop_assert!(stats.curvature >= 1.0, "curvature {}", stats.curvature);
            prop_assert_eq!(stats.curvature, stats.route_length / stats.straight_length);
        } else {
            prop_assert!(stats.curvature.is_infinite());
        }
    }
}
