//! Ghost ball: where the cue ball's center must be at the moment of contact.

use glam::DVec2;

use crate::error::ShotError;
use crate::geometry::direction;

/// `G = O + normalize(O - P) * 2r`.
///
/// Fails with `DegenerateGeometry` when the object ball sits on the pocket
/// center, instead of returning NaN coordinates.
pub fn ghost_ball(object: DVec2, pocket: DVec2, radius: f64) -> Result<DVec2, ShotError> {
    let away = direction(pocket, object)
        .ok_or(ShotError::DegenerateGeometry("object ball coincides with the pocket"))?;
    Ok(object + away * 2.0 * radius)
}

/// Point on the object ball's surface the cue ball strikes: halfway between
/// the ghost ball and object ball centers.
pub fn contact_point(object: DVec2, pocket: DVec2, radius: f64) -> Result<DVec2, ShotError> {
    let away = direction(pocket, object)
        .ok_or(ShotError::DegenerateGeometry("object ball coincides with the pocket"))?;
    Ok(object + away * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{approx_eq, point_on_circle};

    const R: f64 = 1.125;

    #[test]
    fn ghost_is_two_radii_behind_object_ball() {
        let pockets = [
            DVec2::new(1.5, 1.5),
            DVec2::new(98.5, 1.5),
            DVec2::new(50.0, 1.5),
            DVec2::new(50.0, 48.5),
            DVec2::new(1.5, 48.5),
            DVec2::new(98.5, 48.5),
        ];
        for x in (5..=95).step_by(15) {
            for y in (5..=45).step_by(10) {
                let object = DVec2::new(x as f64, y as f64);
                for pocket in pockets {
                    let ghost = ghost_ball(object, pocket, R).unwrap();
                    assert!(point_on_circle(ghost, object, 2.0 * R));
                    // Ghost, object and pocket are collinear, ghost on the far side
                    let to_pocket = (pocket - object).normalize();
                    let to_ghost = (ghost - object).normalize();
                    assert!(approx_eq(to_pocket, -to_ghost));
                }
            }
        }
    }

    #[test]
    fn straight_down_to_side_pocket() {
        let ghost = ghost_ball(DVec2::new(50.0, 35.0), DVec2::new(50.0, 48.5), R).unwrap();
        assert!(approx_eq(ghost, DVec2::new(50.0, 32.75)));
        let contact = contact_point(DVec2::new(50.0, 35.0), DVec2::new(50.0, 48.5), R).unwrap();
        assert!(approx_eq(contact, DVec2::new(50.0, 33.875)));
    }

    #[test]
    fn object_on_pocket_is_degenerate() {
        let p = DVec2::new(98.5, 1.5);
        assert!(matches!(ghost_ball(p, p, R), Err(ShotError::DegenerateGeometry(_))));
        assert!(matches!(contact_point(p, p, R), Err(ShotError::DegenerateGeometry(_))));
    }
}
