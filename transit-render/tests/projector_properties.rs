//! Property-based tests for canvas projection.
//!
//! # Invariants tested
//!
//! - **Bounds:** every input coordinate lands inside the padded canvas.
//! - **Orientation:** larger longitudes project further right and larger
//!   latitudes further up.

use geo::Coord;
use proptest::prelude::*;
use transit_render::SphereProjector;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 400.0;
const PADDING: f64 = 50.0;
const SLACK: f64 = 1e-6;

fn coords_strategy() -> impl Strategy<Value = Vec<Coord<f64>>> {
    proptest::collection::vec(
        (-80.0_f64..80.0, -170.0_f64..170.0).prop_map(|(lat, lng)| Coord { x: lng, y: lat }),
        1..20,
    )
}

proptest! {
    #[test]
    fn projected_points_stay_inside_padding(coords in coords_strategy()) {
        let projector = SphereProjector::new(coords.iter().copied(), WIDTH, HEIGHT, PADDING);
        for coord in &coords {
            let point = projector.project(*coord);
            prop_assert!(point.x >= PADDING - SLACK && point.x <= WIDTH - PADDING + SLACK);
            prop_assert!(point.y >= PADDING - SLACK && point.y <= HEIGHT - PADDING + SLACK);
        }
    }

    #[test]
    fn north_is_up_and_east_is_right(coords in coords_strategy()) {
        let projector = SphereProjector::new(coords.iter().copied(), WIDTH, HEIGHT, PADDING);
        for a in &coords {
            for b in &coords {
                let (pa, pb) = (projector.project(*a), projector.project(*b));
                if a.x < b.x {
                    prop_assert!(pa.x <= pb.x);
                }
                if a.y < b.y {
                    prop_assert!(pa.y >= pb.y);
                }
            }
        }
    }
}
