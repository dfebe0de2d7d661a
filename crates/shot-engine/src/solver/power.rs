//! How hard to hit. The cue ball needs pace to reach the ghost ball, and a
//! cut hands the object ball only `cos(cut)` of that pace, so thin cuts and
//! long object-ball runs both call for more power.

use crate::api::config::PowerConfig;
use crate::api::types::Power;
use crate::solver::cut_angle::{CutAngle, UNMAKEABLE_CUT_DEG};

/// Recommended stroke for a shot whose cue ball travels `cue_distance`
/// (straight or via a rail) and whose object ball travels `object_distance`.
///
/// Non-decreasing in both distances and in the cut. Unmakeable cuts are
/// priced at the makeable limit.
pub fn recommended_power(
    config: &PowerConfig,
    table_length: f64,
    cut: CutAngle,
    cue_distance: f64,
    object_distance: f64,
) -> Power {
    let degrees = cut.makeable().unwrap_or(UNMAKEABLE_CUT_DEG).min(UNMAKEABLE_CUT_DEG);
    let transfer = degrees.to_radians().cos();
    let travel = cue_distance.max(0.0) + object_distance.max(0.0) / transfer;
    let full = config.full_power_fraction * table_length;
    Power::new(config.min_percent + (100.0 - config.min_percent) * travel / full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(cut: f64, cue: f64, object: f64) -> f64 {
        recommended_power(&PowerConfig::default(), 100.0, CutAngle::from_raw(cut), cue, object).percent()
    }

    #[test]
    fn short_straight_shot_is_soft() {
        assert_eq!(power(0.0, 0.0, 0.0), 10.0);
        // 12.75 + 13.5 units of travel on a 150-unit full-power scale
        assert!((power(0.0, 12.75, 13.5) - 25.75).abs() < 1e-9);
    }

    #[test]
    fn grows_with_each_input() {
        let base = power(20.0, 20.0, 20.0);
        assert!(power(20.0, 40.0, 20.0) > base);
        assert!(power(20.0, 20.0, 40.0) > base);
        assert!(power(50.0, 20.0, 20.0) > base);

        let mut last = 0.0;
        for deg in (0..=85).step_by(5) {
            let p = power(deg as f64, 15.0, 15.0);
            assert!(p > last, "not increasing at {deg}");
            last = p;
        }
    }

    #[test]
    fn capped_at_full_power() {
        assert_eq!(power(80.0, 90.0, 90.0), 100.0);
        assert_eq!(power(170.0, 90.0, 90.0), 100.0);
    }

    #[test]
    fn unmakeable_cut_priced_at_the_limit() {
        assert_eq!(power(88.0, 5.0, 1.0), power(85.0, 5.0, 1.0));
    }
}
