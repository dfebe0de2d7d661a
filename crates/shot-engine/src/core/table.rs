use glam::DVec2;

use crate::api::config::TableConfig;
use crate::core::pocket::{Pocket, PocketId};
use crate::core::rail::{Rail, RailGeometry};
use crate::error::ShotError;
use crate::geometry::{AxisLine, EPSILON};

/// The playing surface: fixed pockets and rails derived once from a
/// [`TableConfig`]. Coordinates run x to the right and y down toward the
/// bottom rail.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    pockets: [Pocket; 6],
    rails: [RailGeometry; 4],
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let pockets = PocketId::ALL.map(|id| Pocket {
            id,
            pos: pocket_center(&config, id),
            capture_radius: config.pocket_radius,
        });
        let rails = Rail::ALL.map(|rail| rail_geometry(&config, rail));
        Self { config, pockets, rails }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn ball_radius(&self) -> f64 {
        self.config.ball_radius
    }

    pub fn length(&self) -> f64 {
        self.config.length
    }

    pub fn pocket(&self, id: PocketId) -> &Pocket {
        &self.pockets[id.index()]
    }

    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    pub fn rail(&self, rail: Rail) -> &RailGeometry {
        &self.rails[rail.index()]
    }

    /// Inclusive corners of the region a ball center may occupy: the
    /// playing surface shrunk by one ball radius.
    pub fn ball_bounds(&self) -> (DVec2, DVec2) {
        let r = self.config.ball_radius;
        (DVec2::splat(r), DVec2::new(self.config.length - r, self.config.width - r))
    }

    /// Whether a ball centered at `pos` fits on the cloth.
    pub fn contains_ball(&self, pos: DVec2) -> bool {
        let (min, max) = self.ball_bounds();
        pos.is_finite()
            && pos.x >= min.x - EPSILON
            && pos.y >= min.y - EPSILON
            && pos.x <= max.x + EPSILON
            && pos.y <= max.y + EPSILON
    }

    /// The pocket a ball centered at `pos` would drop into.
    pub fn pocket_capturing(&self, pos: DVec2) -> Option<&Pocket> {
        self.pockets.iter().find(|p| p.captures(pos))
    }

    /// A ball may rest anywhere inside the bounds except over a pocket.
    pub fn check_placement(&self, pos: DVec2) -> Result<(), ShotError> {
        if self.contains_ball(pos) && self.pocket_capturing(pos).is_none() {
            Ok(())
        } else {
            Err(ShotError::OutOfBounds { x: pos.x, y: pos.y })
        }
    }

    /// Head spot: where the cue ball sits for the break, on the head string.
    pub fn head_spot(&self) -> DVec2 {
        DVec2::new(self.config.length * 0.25, self.config.width / 2.0)
    }

    /// Foot spot: apex of the rack.
    pub fn foot_spot(&self) -> DVec2 {
        DVec2::new(self.config.length * 0.75, self.config.width / 2.0)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

fn pocket_center(config: &TableConfig, id: PocketId) -> DVec2 {
    let inset = config.pocket_inset;
    let right = config.length - inset;
    let bottom = config.width - inset;
    let mid = config.length / 2.0;
    match id {
        PocketId::TopLeft => DVec2::new(inset, inset),
        PocketId::TopRight => DVec2::new(right, inset),
        PocketId::MiddleLeft => DVec2::new(mid, inset),
        PocketId::MiddleRight => DVec2::new(mid, bottom),
        PocketId::BottomLeft => DVec2::new(inset, bottom),
        PocketId::BottomRight => DVec2::new(right, bottom),
    }
}

fn rail_geometry(config: &TableConfig, rail: Rail) -> RailGeometry {
    let near = config.cushion_inset + config.ball_radius;
    let jaw = config.corner_jaw;
    let (length, width) = (config.length, config.width);
    let mid = length / 2.0;
    let long_segments = vec![
        (jaw, mid - config.side_jaw_half_width),
        (mid + config.side_jaw_half_width, length - jaw),
    ];
    let short_segments = vec![(jaw, width - jaw)];
    let long_spacing = (length - 2.0 * config.cushion_inset) / config.long_rail_diamonds as f64;
    let short_spacing = (width - 2.0 * config.cushion_inset) / config.short_rail_diamonds as f64;
    let origin = config.cushion_inset;

    match rail {
        Rail::Top => RailGeometry::new(rail, AxisLine::horizontal(near), 1.0, long_segments, origin, long_spacing),
        Rail::Bottom => {
            RailGeometry::new(rail, AxisLine::horizontal(width - near), -1.0, long_segments, origin, long_spacing)
        }
        Rail::Left => RailGeometry::new(rail, AxisLine::vertical(near), 1.0, short_segments, origin, short_spacing),
        Rail::Right => {
            RailGeometry::new(rail, AxisLine::vertical(length - near), -1.0, short_segments, origin, short_spacing)
        }
    }
}
