//! Overlay frame handed to the renderer.
//! Must stay in sync with TypeScript `overlay.ts`.
//!
//! Layout (all values f32 / 4 bytes, 32 floats):
//! ```text
//! [ 0..2 ]  version, flags
//! [ 2..16]  ghost, contact, cue, object, pocket, kick contact, kick aim (x, y each)
//! [16..23]  cut angle, make probability, verdict, cue blocker, target blocker,
//!           kick rail, kick diamond
//! [23..27]  english x, english y, power, recommended power
//! [27..32]  reserved
//! ```
//!
//! Blocker slots hold the ball number, `0` for the cue ball and `-1` when
//! the path is clear. The kick rail slot holds the index into `Rail::ALL`,
//! `-1` without a kick.

use bytemuck::{Pod, Zeroable};

use crate::api::types::{Shot, ShotKind};
use crate::solver::obstruction::PathCheck;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per frame.
pub const OVERLAY_FLOATS: usize = 32;

/// Flag bits.
pub const FLAG_VALID: u32 = 1;
pub const FLAG_UNMAKEABLE: u32 = 1 << 1;
pub const FLAG_CUE_BLOCKED: u32 = 1 << 2;
pub const FLAG_TARGET_BLOCKED: u32 = 1 << 3;
pub const FLAG_KICK: u32 = 1 << 4;
pub const FLAG_GHOST_OFF_TABLE: u32 = 1 << 5;

const NONE: f32 = -1.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct OverlayFrame {
    pub version: f32,
    pub flags: f32,
    pub ghost: [f32; 2],
    pub contact: [f32; 2],
    pub cue: [f32; 2],
    pub object: [f32; 2],
    pub pocket: [f32; 2],
    pub kick_contact: [f32; 2],
    pub kick_aim: [f32; 2],
    pub cut_angle: f32,
    pub make_probability: f32,
    pub verdict: f32,
    pub cue_blocker: f32,
    pub target_blocker: f32,
    pub kick_rail: f32,
    pub kick_diamond: f32,
    pub english: [f32; 2],
    pub power: f32,
    pub recommended_power: f32,
    pub _pad: [f32; 5],
}

impl OverlayFrame {
    /// Frame with no shot: version set, blocker and kick slots empty.
    pub fn empty() -> Self {
        Self {
            version: PROTOCOL_VERSION,
            cue_blocker: NONE,
            target_blocker: NONE,
            kick_rail: NONE,
            verdict: NONE,
            ..<Self as Zeroable>::zeroed()
        }
    }

    pub fn from_shot(shot: &Shot) -> Self {
        let mut flags = FLAG_VALID;
        if !shot.cut.is_makeable() {
            flags |= FLAG_UNMAKEABLE;
        }
        if !shot.cue_path.is_clear() {
            flags |= FLAG_CUE_BLOCKED;
        }
        if !shot.target_path.is_clear() {
            flags |= FLAG_TARGET_BLOCKED;
        }
        if !shot.ghost_on_table {
            flags |= FLAG_GHOST_OFF_TABLE;
        }

        let mut frame = Self {
            flags: 0.0,
            ghost: shot.ghost.as_vec2().to_array(),
            contact: shot.contact.as_vec2().to_array(),
            cue: shot.cue.as_vec2().to_array(),
            object: shot.object.as_vec2().to_array(),
            pocket: shot.pocket_pos.as_vec2().to_array(),
            cut_angle: shot.cut.degrees() as f32,
            make_probability: shot.make_probability as f32,
            verdict: shot.verdict.code() as f32,
            cue_blocker: blocker_slot(&shot.cue_path),
            target_blocker: blocker_slot(&shot.target_path),
            english: [shot.english.x as f32, shot.english.y as f32],
            power: shot.power.percent() as f32,
            recommended_power: shot.recommended_power.percent() as f32,
            ..Self::empty()
        };

        if let (ShotKind::Kick, Some(kick)) = (shot.kind, &shot.kick) {
            flags |= FLAG_KICK;
            frame.kick_contact = kick.contact.as_vec2().to_array();
            frame.kick_aim = kick.aim_point.as_vec2().to_array();
            frame.kick_rail = kick.rail.index() as f32;
            frame.kick_diamond = kick.diamond as f32;
        }
        frame.flags = flags as f32;
        frame
    }

    pub fn flags(&self) -> u32 {
        self.flags as u32
    }

    pub fn as_floats(&self) -> &[f32; OVERLAY_FLOATS] {
        bytemuck::cast_ref(self)
    }
}

impl Default for OverlayFrame {
    fn default() -> Self {
        Self::empty()
    }
}

fn blocker_slot(check: &PathCheck) -> f32 {
    check.blocker().map_or(NONE, |id| id.number() as f32)
}
