//! Fire-and-forget visual effects: hit "pow" sparks and explosions.

use crate::constants::{EXPLOSION_FRAMES, EXPLOSION_FRAME_TICKS, EXPLOSION_TICKS, POW_TICKS};
use crate::entities::{Cue, GameObject, ObjectKind, SimState, Team};
use crate::geometry::Rect;
use crate::pool::Spawner;

impl GameObject {
    pub fn pow(x: i32, y: i32) -> Self {
        GameObject {
            rect: Rect::new(x, y, 0, 0),
            team: Team::Particle,
            alive: true,
            kind: ObjectKind::Pow { ticks_left: POW_TICKS },
        }
    }

    pub fn explosion(x: i32, y: i32) -> Self {
        GameObject {
            rect: Rect::new(x, y, 0, 0),
            team: Team::Particle,
            alive: true,
            kind: ObjectKind::Explosion { ticks_left: EXPLOSION_TICKS },
        }
    }
}

/// Spawn an explosion and ask for its sound. The cue is raised even when the
/// pool has no room left.
pub fn spawn_explosion(spawner: &mut impl Spawner, cues: &mut Vec<Cue>, x: i32, y: i32) {
    spawner.spawn(GameObject::explosion(x, y));
    cues.push(Cue::Explosion);
}

pub fn update(object: &mut GameObject, sim: &SimState) {
    let (ObjectKind::Pow { ticks_left } | ObjectKind::Explosion { ticks_left }) = &mut object.kind
    else {
        return;
    };

    *ticks_left = ticks_left.saturating_sub(1);
    object.rect.y = drift(object.rect.y, sim.background.speed);
    if *ticks_left == 0 {
        object.alive = false;
    }
}

/// Particles sink at a quarter of the scroll speed, truncated to whole pixels.
pub fn drift(y: i32, scroll_speed: f32) -> i32 {
    (y as f32 + scroll_speed / 4.0) as i32
}

/// Animation frame for an explosion with `ticks_left` remaining.
pub fn explosion_frame(ticks_left: u32) -> usize {
    let elapsed = EXPLOSION_TICKS.saturating_sub(ticks_left);
    ((elapsed / EXPLOSION_FRAME_TICKS) as usize).min(EXPLOSION_FRAMES - 1)
}
