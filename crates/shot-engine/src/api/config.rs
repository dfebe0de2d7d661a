use serde::{Deserialize, Serialize};

use crate::error::ShotError;
use crate::solver::cut_angle::UNMAKEABLE_CUT_DEG;

/// Table dimensions in normalized units (long rail = 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Outer length of the table along x (default: 100).
    pub length: f64,
    /// Outer width of the table along y (default: 50).
    pub width: f64,
    /// Distance from each edge to the cushion nose (default: 2).
    pub cushion_inset: f64,
    /// Radius shared by every ball (default: 1.125).
    pub ball_radius: f64,
    /// Distance from each edge to the pocket centers (default: 1.5).
    pub pocket_inset: f64,
    /// Capture radius of every pocket (default: 2.4).
    pub pocket_radius: f64,
    /// Distance from a table edge to where the cushion starts beside a
    /// corner pocket (default: 5).
    pub corner_jaw: f64,
    /// Half the side-pocket mouth, measured along the long rail (default: 2.75).
    pub side_jaw_half_width: f64,
    /// Diamond intervals along a long rail (default: 8).
    pub long_rail_diamonds: u32,
    /// Diamond intervals along a short rail (default: 4).
    pub short_rail_diamonds: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 50.0,
            cushion_inset: 2.0,
            ball_radius: 1.125,
            pocket_inset: 1.5,
            pocket_radius: 2.4,
            corner_jaw: 5.0,
            side_jaw_half_width: 2.75,
            long_rail_diamonds: 8,
            short_rail_diamonds: 4,
        }
    }
}

/// Difficulty thresholds and make-probability shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPolicy {
    /// Cut angles below this are `Straightforward` (default: 15).
    pub straightforward_max_deg: f64,
    /// Cut angles below this are `Cuttable` (default: 45).
    pub cuttable_max_deg: f64,
    /// Cut angles up to this are `Difficult` (default: 70).
    pub difficult_max_deg: f64,
    /// Probability is flat up to this cut angle (default: 30).
    pub angle_plateau_deg: f64,
    /// Distances beyond this fraction of the table length start costing
    /// probability (default: 0.3).
    pub distance_threshold_fraction: f64,
    /// Make probability of an ideal shot (default: 0.95).
    pub base_probability: f64,
    /// Multiplier applied to kick shots (default: 0.5).
    pub kick_factor: f64,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            straightforward_max_deg: 15.0,
            cuttable_max_deg: 45.0,
            difficult_max_deg: 70.0,
            angle_plateau_deg: 30.0,
            distance_threshold_fraction: 0.3,
            base_probability: 0.95,
            kick_factor: 0.5,
        }
    }
}

/// Kick solver tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickConfig {
    /// Lateral shift of the rail aim point at full side english (default: 1.5).
    pub max_english_shift: f64,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self { max_english_shift: 1.5 }
    }
}

/// Power recommendation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    /// Recommendation for a shot with no travel at all (default: 10).
    pub min_percent: f64,
    /// Travel, as a fraction of the table length, that calls for full
    /// power. Object-ball travel counts divided by the cosine of the cut
    /// (default: 1.5).
    pub full_power_fraction: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            min_percent: 10.0,
            full_power_fraction: 1.5,
        }
    }
}

/// Full engine configuration. Every section falls back to its defaults,
/// so a JSON document only needs the fields it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub table: TableConfig,
    pub classifier: ClassifierPolicy,
    pub kick: KickConfig,
    pub power: PowerConfig,
}

impl EngineConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ShotError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the solvers cannot work with.
    pub fn validate(&self) -> Result<(), ShotError> {
        let t = &self.table;
        if !(t.ball_radius > 0.0) {
            return Err(invalid("ball_radius must be positive"));
        }
        if !(t.cushion_inset >= 0.0) || !(t.pocket_radius > 0.0) {
            return Err(invalid("cushion_inset and pocket_radius must be non-negative / positive"));
        }
        let min_span = 2.0 * (t.cushion_inset + t.ball_radius);
        if !(t.length > min_span) || !(t.width > min_span) {
            return Err(invalid("table is too small for a single ball"));
        }
        if t.width > t.length {
            return Err(invalid("width must not exceed length"));
        }
        if !(t.corner_jaw >= t.cushion_inset) || !(t.side_jaw_half_width >= 0.0) {
            return Err(invalid("pocket jaws must sit outside the cushion nose"));
        }
        if t.corner_jaw * 2.0 + t.side_jaw_half_width * 2.0 >= t.length
            || t.corner_jaw * 2.0 >= t.width
        {
            return Err(invalid("pocket jaws leave no cushion"));
        }
        if t.long_rail_diamonds == 0 || t.short_rail_diamonds == 0 {
            return Err(invalid("diamond counts must be non-zero"));
        }

        let c = &self.classifier;
        let ascending = 0.0 < c.straightforward_max_deg
            && c.straightforward_max_deg < c.cuttable_max_deg
            && c.cuttable_max_deg < c.difficult_max_deg
            && c.difficult_max_deg < UNMAKEABLE_CUT_DEG;
        if !ascending {
            return Err(invalid("angle tiers must ascend and stay below the unmakeable limit"));
        }
        if !(0.0..UNMAKEABLE_CUT_DEG).contains(&c.angle_plateau_deg) {
            return Err(invalid("angle_plateau_deg out of range"));
        }
        if !(c.distance_threshold_fraction > 0.0) {
            return Err(invalid("distance_threshold_fraction must be positive"));
        }
        if !(0.0..=1.0).contains(&c.base_probability) || !(0.0..=1.0).contains(&c.kick_factor) {
            return Err(invalid("probabilities must lie in [0, 1]"));
        }

        if !(self.kick.max_english_shift >= 0.0) {
            return Err(invalid("max_english_shift must be non-negative"));
        }

        let p = &self.power;
        if !(0.0..=100.0).contains(&p.min_percent) || !(p.full_power_fraction > 0.0) {
            return Err(invalid("min_percent must lie in [0, 100] and full_power_fraction be positive"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ShotError {
    ShotError::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "table": { "ball_radius": 1.0 },
            "classifier": { "kick_factor": 0.25 }
        }"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.table.ball_radius, 1.0);
        assert_eq!(config.table.length, 100.0);
        assert_eq!(config.classifier.kick_factor, 0.25);
        assert_eq!(config.classifier.cuttable_max_deg, 45.0);
        assert_eq!(config.kick, KickConfig::default());
        assert_eq!(config.power, PowerConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn rejects_unordered_tiers() {
        let json = r#"{ "classifier": { "straightforward_max_deg": 50.0 } }"#;
        let err = EngineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ShotError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let json = r#"{ "table": { "ball_radius": 0.0 } }"#;
        assert!(matches!(EngineConfig::from_json(json), Err(ShotError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_bad_power_tuning() {
        let json = r#"{ "power": { "full_power_fraction": 0.0 } }"#;
        assert!(matches!(EngineConfig::from_json(json), Err(ShotError::InvalidConfig(_))));
        let json = r#"{ "power": { "min_percent": 120.0 } }"#;
        assert!(matches!(EngineConfig::from_json(json), Err(ShotError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(EngineConfig::from_json("{ table"), Err(ShotError::Json(_))));
    }
}
