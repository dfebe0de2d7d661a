use std::fmt;

use serde::Serialize;

use crate::api::config::ClassifierPolicy;
use crate::solver::cut_angle::CutAngle;

/// Difficulty of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Straightforward,
    Cuttable,
    Difficult,
    NearImpossible,
    RequiresKick,
}

impl Verdict {
    /// Numeric code used in the overlay frame.
    pub fn code(self) -> u8 {
        match self {
            Verdict::Straightforward => 0,
            Verdict::Cuttable => 1,
            Verdict::Difficult => 2,
            Verdict::NearImpossible => 3,
            Verdict::RequiresKick => 4,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Straightforward => "Straightforward",
            Verdict::Cuttable => "Cuttable",
            Verdict::Difficult => "Difficult",
            Verdict::NearImpossible => "Near impossible",
            Verdict::RequiresKick => "Requires kick",
        })
    }
}

/// How the cue ball reaches the ghost ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Approach {
    /// Straight line, unobstructed.
    Direct,
    /// Straight line obstructed and no kick found.
    Blocked,
    /// Off a rail; `cut` is measured along the kick's final leg.
    Kick { cut: CutAngle, path_length: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotFeatures {
    pub cut: CutAngle,
    pub approach: Approach,
    pub cue_distance: f64,
    pub object_distance: f64,
    pub object_path_clear: bool,
    /// Whether the cue ball fits on the cloth at the ghost ball position.
    pub ghost_reachable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub make_probability: f64,
}

impl Classification {
    fn hopeless() -> Self {
        Self {
            verdict: Verdict::NearImpossible,
            make_probability: 0.0,
        }
    }
}

/// Turns shot features into a verdict and a make probability.
#[derive(Debug, Clone)]
pub struct Classifier {
    policy: ClassifierPolicy,
    table_length: f64,
}

impl Classifier {
    pub fn new(policy: ClassifierPolicy, table_length: f64) -> Self {
        Self { policy, table_length }
    }

    pub fn classify(&self, features: &ShotFeatures) -> Classification {
        if !features.object_path_clear || !features.ghost_reachable {
            return Classification::hopeless();
        }

        match features.approach {
            Approach::Blocked => Classification::hopeless(),
            Approach::Kick { cut, path_length } => match cut {
                CutAngle::Unmakeable(_) => Classification::hopeless(),
                CutAngle::Makeable(degrees) => Classification {
                    verdict: Verdict::RequiresKick,
                    make_probability: (self.policy.kick_factor
                        * self.make_probability(degrees, path_length, features.object_distance))
                    .clamp(0.0, 1.0),
                },
            },
            Approach::Direct => match features.cut {
                CutAngle::Unmakeable(_) => Classification::hopeless(),
                CutAngle::Makeable(degrees) => Classification {
                    verdict: self.tier(degrees),
                    make_probability: self.make_probability(
                        degrees,
                        features.cue_distance,
                        features.object_distance,
                    ),
                },
            },
        }
    }

    fn tier(&self, degrees: f64) -> Verdict {
        let p = &self.policy;
        if degrees < p.straightforward_max_deg {
            Verdict::Straightforward
        } else if degrees < p.cuttable_max_deg {
            Verdict::Cuttable
        } else if degrees <= p.difficult_max_deg {
            Verdict::Difficult
        } else {
            Verdict::NearImpossible
        }
    }

    /// `base * angle_factor * df(cue) * df(object)`, in `[0, 1]`.
    pub fn make_probability(&self, degrees: f64, cue_distance: f64, object_distance: f64) -> f64 {
        let p = self.policy.base_probability
            * self.angle_factor(degrees)
            * self.distance_factor(cue_distance)
            * self.distance_factor(object_distance);
        p.clamp(0.0, 1.0)
    }

    /// Flat up to the plateau, then falls with the cosine of the cut.
    pub fn angle_factor(&self, degrees: f64) -> f64 {
        let plateau = self.policy.angle_plateau_deg;
        if degrees <= plateau {
            1.0
        } else {
            (degrees.to_radians().cos() / plateau.to_radians().cos()).max(0.0)
        }
    }

    pub fn distance_factor(&self, distance: f64) -> f64 {
        let threshold = self.policy.distance_threshold_fraction * self.table_length;
        if distance <= threshold {
            1.0
        } else {
            threshold / distance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(ClassifierPolicy::default(), 100.0)
    }

    fn direct(degrees: f64) -> ShotFeatures {
        ShotFeatures {
            cut: CutAngle::from_raw(degrees),
            approach: Approach::Direct,
            cue_distance: 10.0,
            object_distance: 10.0,
            object_path_clear: true,
            ghost_reachable: true,
        }
    }

    #[test]
    fn angle_tiers() {
        let c = classifier();
        assert_eq!(c.classify(&direct(0.0)).verdict, Verdict::Straightforward);
        assert_eq!(c.classify(&direct(14.9)).verdict, Verdict::Straightforward);
        assert_eq!(c.classify(&direct(15.0)).verdict, Verdict::Cuttable);
        assert_eq!(c.classify(&direct(44.9)).verdict, Verdict::Cuttable);
        assert_eq!(c.classify(&direct(45.0)).verdict, Verdict::Difficult);
        assert_eq!(c.classify(&direct(70.0)).verdict, Verdict::Difficult);
        assert_eq!(c.classify(&direct(70.1)).verdict, Verdict::NearImpossible);
    }

    #[test]
    fn unmakeable_is_hopeless() {
        let result = classifier().classify(&direct(86.0));
        assert_eq!(result.verdict, Verdict::NearImpossible);
        assert_eq!(result.make_probability, 0.0);
    }

    #[test]
    fn short_straight_shot_gets_base_probability() {
        let result = classifier().classify(&direct(5.0));
        assert!((result.make_probability - 0.95).abs() < 1e-12);
    }

    #[test]
    fn probability_decreases_with_cut_angle() {
        let c = classifier();
        let mut last = c.make_probability(30.0, 10.0, 10.0);
        for deg in 31..=85 {
            let p = c.make_probability(deg as f64, 10.0, 10.0);
            assert!(p < last, "not decreasing at {deg}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn probability_decreases_with_distance() {
        let c = classifier();
        assert_eq!(c.distance_factor(30.0), 1.0);
        let mut last = 1.0;
        for d in [31.0, 40.0, 60.0, 90.0, 110.0] {
            let f = c.distance_factor(d);
            assert!(f < last);
            last = f;
        }
        assert!(c.make_probability(10.0, 80.0, 10.0) < c.make_probability(10.0, 20.0, 10.0));
        assert!(c.make_probability(10.0, 20.0, 80.0) < c.make_probability(10.0, 20.0, 20.0));
    }

    #[test]
    fn blocked_paths_are_hopeless() {
        let c = classifier();
        let blocked = ShotFeatures {
            approach: Approach::Blocked,
            ..direct(5.0)
        };
        assert_eq!(c.classify(&blocked), Classification::hopeless());

        let target_blocked = ShotFeatures {
            object_path_clear: false,
            ..direct(5.0)
        };
        assert_eq!(c.classify(&target_blocked), Classification::hopeless());

        let off_cloth = ShotFeatures {
            ghost_reachable: false,
            ..direct(5.0)
        };
        assert_eq!(c.classify(&off_cloth).make_probability, 0.0);
    }

    #[test]
    fn kick_overrides_tiers_and_halves_probability() {
        let c = classifier();
        let kick = ShotFeatures {
            approach: Approach::Kick {
                cut: CutAngle::Makeable(5.0),
                path_length: 20.0,
            },
            ..direct(38.0)
        };
        let result = c.classify(&kick);
        assert_eq!(result.verdict, Verdict::RequiresKick);
        assert!((result.make_probability - 0.475).abs() < 1e-12);

        let bad_kick = ShotFeatures {
            approach: Approach::Kick {
                cut: CutAngle::Unmakeable(88.0),
                path_length: 20.0,
            },
            ..direct(38.0)
        };
        assert_eq!(c.classify(&bad_kick).verdict, Verdict::NearImpossible);
    }

    #[test]
    fn verdict_codes_are_stable() {
        assert_eq!(Verdict::Straightforward.code(), 0);
        assert_eq!(Verdict::RequiresKick.code(), 4);
        assert_eq!(Verdict::NearImpossible.to_string(), "Near impossible");
    }
}
