//! Scenario control for automated tests and debug tooling.
//! Compiled with the `test-control` feature (and for unit tests).

use crate::api::engine::ShotEngine;
use crate::api::layout::TableLayout;
use crate::core::ball::BallId;
use crate::error::ShotError;

/// Narrow handle over an engine for injecting whole table states.
pub struct TestControl<'a> {
    engine: &'a mut ShotEngine,
}

impl<'a> TestControl<'a> {
    pub fn new(engine: &'a mut ShotEngine) -> Self {
        Self { engine }
    }

    pub fn place_ball(&mut self, id: BallId, x: f64, y: f64) -> Result<(), ShotError> {
        self.engine.place_ball(id, x, y)
    }

    pub fn clear_table(&mut self) {
        self.engine.clear_table();
    }

    /// Replace the table with `layout`. Leaves the engine untouched on error.
    pub fn load_layout(&mut self, layout: &TableLayout) -> Result<(), ShotError> {
        self.engine.load_layout(layout)
    }

    pub fn load_layout_json(&mut self, json: &str) -> Result<(), ShotError> {
        let layout = TableLayout::from_json(json)?;
        self.load_layout(&layout)
    }

    pub fn snapshot(&self) -> TableLayout {
        self.engine.layout()
    }

    pub fn snapshot_json(&self) -> Result<String, ShotError> {
        Self::snapshot_json_of(self.engine)
    }

    /// Snapshot without taking the engine mutably.
    pub fn snapshot_json_of(engine: &ShotEngine) -> Result<String, ShotError> {
        engine.layout().to_json()
    }
}
