use glam::DVec2;

use crate::api::config::EngineConfig;
use crate::api::layout::TableLayout;
use crate::api::types::{English, Power, Shot, ShotKind};
use crate::core::ball::{Ball, BallId};
use crate::core::ball_set::BallSet;
use crate::core::pocket::PocketId;
use crate::core::rack::{rack_positions, RackKind};
use crate::core::rail::Rail;
use crate::core::table::Table;
use crate::error::ShotError;
use crate::solver::classifier::{Approach, Classifier, ShotFeatures};
use crate::solver::cut_angle::{cut_angle, cut_side};
use crate::solver::ghost::{contact_point, ghost_ball};
use crate::solver::kick::{best_kick_by, solve_kick, KickRequest, KickSolution};
use crate::solver::obstruction::check_path;
use crate::solver::power::recommended_power;

/// Table state plus the current shot selection.
///
/// The engine stores inputs only. Every query derives its answer from the
/// current state, so nothing can go stale after a ball moves.
#[derive(Debug, Clone)]
pub struct ShotEngine {
    config: EngineConfig,
    table: Table,
    classifier: Classifier,
    balls: BallSet,
    object_ball: Option<BallId>,
    pocket: Option<PocketId>,
    english: English,
    power: Power,
}

/// Inputs every shot query needs.
struct Selection {
    cue: DVec2,
    object_id: BallId,
    object: DVec2,
    pocket_id: PocketId,
    pocket: DVec2,
    ghost: DVec2,
}

impl ShotEngine {
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self::build(config)
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ShotError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected configuration: {err}");
            return Err(err);
        }
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let table = Table::new(config.table.clone());
        let classifier = Classifier::new(config.classifier.clone(), config.table.length);
        Self {
            config,
            table,
            classifier,
            balls: BallSet::new(),
            object_ball: None,
            pocket: None,
            english: English::CENTER,
            power: Power::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balls(&self) -> &BallSet {
        &self.balls
    }

    pub fn object_ball(&self) -> Option<BallId> {
        self.object_ball
    }

    pub fn pocket(&self) -> Option<PocketId> {
        self.pocket
    }

    pub fn english(&self) -> English {
        self.english
    }

    pub fn power(&self) -> Power {
        self.power
    }

    // -- Table editing --

    /// Put a ball on the cloth, moving it if it is already on the table.
    pub fn place_ball(&mut self, id: BallId, x: f64, y: f64) -> Result<(), ShotError> {
        let pos = DVec2::new(x, y);
        self.table.check_placement(pos)?;
        if let Some(other) = self.balls.overlapping(pos, self.table.ball_radius(), id) {
            return Err(ShotError::Overlap {
                placed: id,
                with: other.id,
            });
        }
        self.balls.insert(Ball::new(id, pos));
        log::debug!("placed ball {id} at ({x:.3}, {y:.3})");
        Ok(())
    }

    /// Take a ball off the table. Clears the object ball selection when it
    /// was the selected ball.
    pub fn remove_ball(&mut self, id: BallId) -> Result<Ball, ShotError> {
        let ball = self
            .balls
            .remove(id)
            .ok_or_else(|| ShotError::NoSuchBall(id.to_string()))?;
        if self.object_ball == Some(id) {
            self.object_ball = None;
        }
        log::debug!("removed ball {id}");
        Ok(ball)
    }

    /// Drop a ball into a pocket. Same effect as removing it.
    pub fn pocket_ball(&mut self, id: BallId) -> Result<Ball, ShotError> {
        let ball = self.remove_ball(id)?;
        log::info!("ball {id} pocketed");
        Ok(ball)
    }

    /// Take every ball off and forget the selection.
    pub fn clear_table(&mut self) {
        self.balls.clear();
        self.object_ball = None;
        self.pocket = None;
        log::info!("table cleared");
    }

    /// Lay out a fresh rack with the cue ball in the kitchen and the break
    /// stroke preset (follow, 70% power).
    pub fn rack(&mut self, kind: RackKind) {
        self.balls = rack_positions(kind, &self.table).into_iter().collect();
        self.object_ball = None;
        self.pocket = None;
        self.english = English::BREAK;
        self.power = Power::BREAK;
        log::info!("racked {kind}: {} balls", self.balls.len());
    }

    // -- Selection and stroke --

    pub fn select_object_ball(&mut self, id: BallId) -> Result<(), ShotError> {
        if id.is_cue() {
            return Err(ShotError::CueBallSelected);
        }
        if !self.balls.contains(id) {
            return Err(ShotError::NoSuchBall(id.to_string()));
        }
        self.object_ball = Some(id);
        Ok(())
    }

    pub fn select_pocket(&mut self, id: PocketId) {
        self.pocket = Some(id);
    }

    /// Both axes are clamped to `[-1, 1]`.
    pub fn set_english(&mut self, x: f64, y: f64) {
        self.english = English::new(x, y);
    }

    /// Clamped to `[0, 100]`.
    pub fn set_power(&mut self, percent: f64) {
        self.power = Power::new(percent);
    }

    // -- Queries --

    fn selection(&self) -> Result<Selection, ShotError> {
        let cue = self
            .balls
            .cue()
            .ok_or(ShotError::IncompleteShot("no cue ball on the table"))?
            .pos;
        let object_id = self
            .object_ball
            .ok_or(ShotError::IncompleteShot("no object ball selected"))?;
        let object = self
            .balls
            .position(object_id)
            .ok_or(ShotError::IncompleteShot("the object ball is not on the table"))?;
        let pocket_id = self.pocket.ok_or(ShotError::IncompleteShot("no pocket selected"))?;
        let pocket = self.table.pocket(pocket_id).pos;
        let ghost = ghost_ball(object, pocket, self.table.ball_radius())?;
        Ok(Selection {
            cue,
            object_id,
            object,
            pocket_id,
            pocket,
            ghost,
        })
    }

    /// A kick only helps when its final leg still cuts the object ball in.
    fn kick_is_makeable(sel: &Selection, kick: &KickSolution) -> bool {
        cut_angle(kick.contact, sel.ghost, sel.object, sel.pocket).is_ok_and(|cut| cut.is_makeable())
    }

    /// The cue ball itself never obstructs; the object ball only blocks the
    /// leg to the rail.
    fn kick_request<'a>(&'a self, sel: &Selection) -> KickRequest<'a> {
        KickRequest {
            cue: sel.cue,
            target: sel.ghost,
            balls: &self.balls,
            ignore: &[BallId::Cue],
            object_ball: Some(sel.object_id),
            side_english: self.english.x,
        }
    }

    /// Derive the full shot for the current table and selection.
    pub fn shot_result(&self) -> Result<Shot, ShotError> {
        let sel = self.selection()?;
        let radius = self.table.ball_radius();

        let contact = contact_point(sel.object, sel.pocket, radius)?;
        let cut = cut_angle(sel.cue, sel.ghost, sel.object, sel.pocket)?;
        let side = cut_side(sel.cue, sel.ghost, sel.object, sel.pocket);

        let ignore = [BallId::Cue, sel.object_id];
        let cue_path = check_path(sel.cue, sel.ghost, &self.balls, &ignore, radius);
        let target_path = check_path(sel.object, sel.pocket, &self.balls, &ignore, radius);
        let ghost_on_table = self.table.contains_ball(sel.ghost)
            && self.balls.overlapping(sel.ghost, radius, BallId::Cue).is_none();

        let kick = if !cue_path.is_clear() && target_path.is_clear() && ghost_on_table {
            let req = self.kick_request(&sel);
            best_kick_by(&self.table, &self.config.kick, &req, |k| Self::kick_is_makeable(&sel, k)).ok()
        } else {
            None
        };

        let approach = match &kick {
            _ if cue_path.is_clear() => Approach::Direct,
            Some(k) => Approach::Kick {
                cut: cut_angle(k.contact, sel.ghost, sel.object, sel.pocket)?,
                path_length: k.path_length,
            },
            None => Approach::Blocked,
        };

        let features = ShotFeatures {
            cut,
            approach,
            cue_distance: sel.cue.distance(sel.ghost),
            object_distance: sel.object.distance(sel.pocket),
            object_path_clear: target_path.is_clear(),
            ghost_reachable: ghost_on_table,
        };
        let classification = self.classifier.classify(&features);
        let (stroke_cut, stroke_distance) = match approach {
            Approach::Kick { cut, path_length } => (cut, path_length),
            _ => (cut, features.cue_distance),
        };
        let recommended = recommended_power(
            &self.config.power,
            self.table.length(),
            stroke_cut,
            stroke_distance,
            features.object_distance,
        );
        log::debug!(
            "shot {} -> {}: cut {:.1}, {} ({:.2})",
            sel.object_id,
            sel.pocket_id.code(),
            cut.degrees(),
            classification.verdict,
            classification.make_probability
        );

        Ok(Shot {
            kind: if kick.is_some() { ShotKind::Kick } else { ShotKind::Direct },
            object_ball: sel.object_id,
            pocket: sel.pocket_id,
            cue: sel.cue,
            object: sel.object,
            pocket_pos: sel.pocket,
            ghost: sel.ghost,
            contact,
            cut,
            cut_side: side,
            cue_path,
            target_path,
            ghost_on_table,
            kick,
            verdict: classification.verdict,
            make_probability: classification.make_probability,
            english: self.english,
            spin: self.english.spin(),
            power: self.power,
            recommended_power: recommended,
        })
    }

    /// Kick to the ghost ball off one rail, or the shortest over all rails.
    /// Either way the final leg must still cut the object ball in.
    pub fn kick_shot(&self, rail: Option<Rail>) -> Result<KickSolution, ShotError> {
        let sel = self.selection()?;
        let req = self.kick_request(&sel);
        match rail {
            Some(rail) => solve_kick(&self.table, &self.config.kick, &req, rail)
                .and_then(|k| if Self::kick_is_makeable(&sel, &k) { Ok(k) } else { Err(ShotError::NoValidKick) }),
            None => best_kick_by(&self.table, &self.config.kick, &req, |k| Self::kick_is_makeable(&sel, k)),
        }
    }

    /// Current state in its serialisable form.
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            balls: self.balls.iter().copied().collect(),
            object_ball: self.object_ball,
            pocket: self.pocket,
            english: self.english,
            power: self.power,
        }
    }

    /// Replace the whole table state. All-or-nothing: on error the engine is
    /// left untouched.
    #[cfg(any(test, feature = "test-control"))]
    pub(crate) fn load_layout(&mut self, layout: &TableLayout) -> Result<(), ShotError> {
        let mut staged = self.clone();
        staged.balls.clear();
        staged.object_ball = None;
        staged.pocket = layout.pocket;
        for ball in &layout.balls {
            staged.place_ball(ball.id, ball.pos.x, ball.pos.y)?;
        }
        if let Some(id) = layout.object_ball {
            staged.select_object_ball(id)?;
        }
        staged.english = English::new(layout.english.x, layout.english.y);
        staged.power = layout.power;
        *self = staged;
        log::info!("loaded layout with {} balls", self.balls.len());
        Ok(())
    }
}

impl Default for ShotEngine {
    fn default() -> Self {
        Self::new()
    }
}
