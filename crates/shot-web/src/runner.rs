use shot_engine::{
    BallId, EngineConfig, OverlayFrame, PocketId, RackKind, Rail, ShotEngine, ShotError,
    OVERLAY_FLOATS,
};

/// Owns the engine on the JS side of the boundary.
///
/// The browser talks in strings and plain numbers; the runner parses them,
/// forwards to the engine and refreshes the overlay frame after every edit so
/// the renderer can read it straight out of linear memory.
pub struct ShotRunner {
    engine: ShotEngine,
    overlay: OverlayFrame,
    status: String,
}

impl ShotRunner {
    pub fn new(engine: ShotEngine) -> Self {
        let mut runner = Self {
            engine,
            overlay: OverlayFrame::empty(),
            status: String::new(),
        };
        runner.refresh();
        runner
    }

    /// Build from an optional JSON configuration; `None` uses defaults.
    pub fn from_config_json(json: Option<&str>) -> Result<Self, ShotError> {
        let engine = match json {
            Some(json) => ShotEngine::with_config(EngineConfig::from_json(json)?)?,
            None => ShotEngine::new(),
        };
        Ok(Self::new(engine))
    }

    pub fn engine(&self) -> &ShotEngine {
        &self.engine
    }

    #[cfg(feature = "debug-hooks")]
    pub fn engine_mut(&mut self) -> &mut ShotEngine {
        &mut self.engine
    }

    /// Recompute the overlay and status line from the current table.
    pub fn refresh(&mut self) {
        match self.engine.shot_result() {
            Ok(shot) => {
                self.overlay = OverlayFrame::from_shot(&shot);
                self.status = shot.status();
            }
            Err(err) => {
                self.overlay = OverlayFrame::empty();
                self.status = err.to_string();
            }
        }
    }

    fn edit<T>(&mut self, f: impl FnOnce(&mut ShotEngine) -> Result<T, ShotError>) -> Result<T, ShotError> {
        let out = f(&mut self.engine);
        self.refresh();
        out
    }

    // ---- Table editing ----

    pub fn place_ball(&mut self, id: &str, x: f64, y: f64) -> Result<(), ShotError> {
        let id: BallId = id.parse()?;
        self.edit(|e| e.place_ball(id, x, y))
    }

    pub fn remove_ball(&mut self, id: &str) -> Result<(), ShotError> {
        let id: BallId = id.parse()?;
        self.edit(|e| e.remove_ball(id).map(|_| ()))
    }

    pub fn pocket_ball(&mut self, id: &str) -> Result<(), ShotError> {
        let id: BallId = id.parse()?;
        self.edit(|e| e.pocket_ball(id).map(|_| ()))
    }

    pub fn rack(&mut self, kind: &str) -> Result<(), ShotError> {
        let kind: RackKind = kind.parse()?;
        self.edit(|e| {
            e.rack(kind);
            Ok(())
        })
    }

    pub fn clear_table(&mut self) {
        self.engine.clear_table();
        self.refresh();
    }

    // ---- Selection and stroke ----

    pub fn select_object_ball(&mut self, id: &str) -> Result<(), ShotError> {
        let id: BallId = id.parse()?;
        self.edit(|e| e.select_object_ball(id))
    }

    pub fn select_pocket(&mut self, id: &str) -> Result<(), ShotError> {
        let id: PocketId = id.parse()?;
        self.edit(|e| {
            e.select_pocket(id);
            Ok(())
        })
    }

    pub fn set_english(&mut self, x: f64, y: f64) {
        self.engine.set_english(x, y);
        self.refresh();
    }

    pub fn set_power(&mut self, percent: f64) {
        self.engine.set_power(percent);
        self.refresh();
    }

    // ---- Queries ----

    /// The current shot as JSON, with instructions and status attached.
    pub fn shot_json(&self) -> Result<String, ShotError> {
        let shot = self.engine.shot_result()?;
        let mut value = serde_json::to_value(&shot)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("instructions".into(), shot.instructions().into());
            obj.insert("status".into(), shot.status().into());
            obj.insert("kick_label".into(), shot.kick.as_ref().map(|k| k.label()).into());
        }
        Ok(value.to_string())
    }

    /// Kick off `rail` (or the best rail when empty) as JSON.
    pub fn kick_json(&self, rail: Option<&str>) -> Result<String, ShotError> {
        let rail = rail
            .filter(|r| !r.trim().is_empty())
            .map(str::parse::<Rail>)
            .transpose()?;
        let kick = self.engine.kick_shot(rail)?;
        Ok(serde_json::to_string(&kick)?)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    // ---- Overlay accessors ----

    pub fn overlay(&self) -> &[f32; OVERLAY_FLOATS] {
        self.overlay.as_floats()
    }

    pub fn overlay_ptr(&self) -> *const f32 {
        self.overlay.as_floats().as_ptr()
    }

    pub fn overlay_len(&self) -> u32 {
        OVERLAY_FLOATS as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_engine::bridge::protocol::{FLAG_KICK, FLAG_VALID};

    fn kick_runner() -> ShotRunner {
        let mut runner = ShotRunner::from_config_json(None).unwrap();
        runner.place_ball("cue", 20.0, 30.0).unwrap();
        runner.place_ball("1", 60.0, 30.0).unwrap();
        runner.place_ball("ball-3", 40.0, 30.0).unwrap();
        runner.select_object_ball("1").unwrap();
        runner.select_pocket("TR").unwrap();
        runner
    }

    #[test]
    fn status_tracks_missing_inputs() {
        let mut runner = ShotRunner::from_config_json(None).unwrap();
        assert!(runner.status().contains("cue ball"));
        assert_eq!(runner.overlay()[1], 0.0);
        runner.place_ball("cue", 50.0, 20.0).unwrap();
        runner.place_ball("5", 50.0, 35.0).unwrap();
        runner.select_object_ball("5").unwrap();
        runner.select_pocket("side-bottom").unwrap();
        assert_eq!(runner.status(), "Straightforward (95%)");
        assert_eq!(runner.overlay()[1] as u32 & FLAG_VALID, FLAG_VALID);
    }

    #[test]
    fn overlay_follows_edits() {
        let mut runner = kick_runner();
        assert_ne!(runner.overlay()[1] as u32 & FLAG_KICK, 0);
        runner.remove_ball("3").unwrap();
        assert_eq!(runner.overlay()[1] as u32 & FLAG_KICK, 0);
        runner.remove_ball("1").unwrap();
        assert_eq!(runner.overlay()[1], 0.0);
    }

    #[test]
    fn shot_json_carries_instructions() {
        let runner = kick_runner();
        let value: serde_json::Value = serde_json::from_str(&runner.shot_json().unwrap()).unwrap();
        assert_eq!(value["verdict"], "requires_kick");
        assert_eq!(value["pocket"], "TR");
        assert_eq!(value["kick"]["rail"], "bottom");
        assert_eq!(value["kick_label"], "Bottom rail, diamond 3.2");
        assert!(value["recommended_power"].as_f64().unwrap() > 10.0);
        assert!(value["instructions"].as_str().unwrap().contains("bottom rail"));
    }

    #[test]
    fn kick_json_accepts_optional_rail() {
        let runner = kick_runner();
        let best: serde_json::Value = serde_json::from_str(&runner.kick_json(None).unwrap()).unwrap();
        assert_eq!(best["rail"], "bottom");
        assert!(runner.kick_json(Some("")).is_ok());
        assert!(matches!(runner.kick_json(Some("middle")), Err(ShotError::NoSuchRail(_))));
        assert!(matches!(runner.kick_json(Some("right")), Err(ShotError::NoValidKick)));
    }

    #[test]
    fn bad_identifiers_are_rejected() {
        let mut runner = ShotRunner::from_config_json(None).unwrap();
        assert!(runner.place_ball("16", 50.0, 25.0).is_err());
        assert!(matches!(runner.select_pocket("XX"), Err(ShotError::NoSuchPocket(_))));
        assert!(matches!(runner.rack("snooker"), Err(ShotError::NoSuchRack(_))));
        runner.rack("9-ball").unwrap();
        assert_eq!(runner.engine().balls().len(), 10);
    }

    #[test]
    fn config_json_is_validated() {
        assert!(ShotRunner::from_config_json(Some(r#"{ "kick": { "max_english_shift": 2.0 } }"#)).is_ok());
        assert!(ShotRunner::from_config_json(Some(r#"{ "table": { "ball_radius": 0 } }"#)).is_err());
        assert!(ShotRunner::from_config_json(Some("not json")).is_err());
    }
}
