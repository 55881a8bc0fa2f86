//! Enemy behavior: death, descent, horizontal tracking, firing, hit flash.

use rand::Rng;

use crate::compute::{director, particle};
use crate::constants::{
    DIVE_LINE_Y, DIVE_SPEED, ENEMY_FIRE_TICKS, ENEMY_MUZZLE_OFFSET, ENEMY_SPAWN_Y,
    LAMPIR_HEALTH, LAMPIR_SIZE, PLAYFIELD_HEIGHT, RETARGET_ROW, SAMUEL_HEALTH, SAMUEL_SIZE,
    SNIPER_HOLD_Y, SNIPER_RETARGET_TICKS, STEP_CADENCE_START, TRACK_DEAD_ZONE,
};
use crate::entities::{AiBehavior, Enemy, EnemyKind, GameObject, ObjectKind, SimState, Team};
use crate::geometry::Rect;
use crate::pool::Spawner;

impl EnemyKind {
    pub fn size(self) -> (i32, i32) {
        match self {
            EnemyKind::Samuel => SAMUEL_SIZE,
            EnemyKind::Lampir => LAMPIR_SIZE,
        }
    }

    pub fn base_health(self) -> i32 {
        match self {
            EnemyKind::Samuel => SAMUEL_HEALTH,
            EnemyKind::Lampir => LAMPIR_HEALTH,
        }
    }
}

impl AiBehavior {
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => AiBehavior::Default,
            1 => AiBehavior::Dive,
            2 => AiBehavior::Shoot,
            3 => AiBehavior::ShootDive,
            4 => AiBehavior::Sniper,
            _ => AiBehavior::Cruise,
        }
    }

    pub fn dives(self) -> bool {
        matches!(self, AiBehavior::Dive | AiBehavior::ShootDive)
    }

    pub fn fires(self) -> bool {
        matches!(self, AiBehavior::Shoot | AiBehavior::ShootDive | AiBehavior::Sniper)
    }

    /// Tracks the player at any height rather than only above the sniper line.
    pub fn always_tracks(self) -> bool {
        matches!(self, AiBehavior::Default | AiBehavior::Shoot | AiBehavior::Sniper)
    }
}

impl GameObject {
    /// A new enemy just above the playfield.
    pub fn enemy(x: i32, kind: EnemyKind, ai: AiBehavior, health_multiplier: f32) -> Self {
        let (w, h) = kind.size();
        GameObject {
            rect: Rect::new(x, ENEMY_SPAWN_Y, w, h),
            team: Team::Enemy,
            alive: true,
            kind: ObjectKind::Enemy(Enemy {
                kind,
                ai,
                health: (kind.base_health() as f32 * health_multiplier) as i32,
                ticks: 0,
                heading: 0,
                step_cadence: STEP_CADENCE_START,
                flash: 0,
                flashing: false,
            }),
        }
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match &self.kind {
            ObjectKind::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut Enemy> {
        match &mut self.kind {
            ObjectKind::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }
}

pub fn update<R: Rng>(
    object: &mut GameObject,
    spawner: &mut impl Spawner,
    sim: &mut SimState,
    rng: &mut R,
) {
    let GameObject { rect, alive, kind, .. } = object;
    let ObjectKind::Enemy(enemy) = kind else {
        return;
    };

    if enemy.health <= 0 {
        *alive = false;
        match enemy.kind {
            EnemyKind::Samuel => particle::spawn_explosion(spawner, &mut sim.cues, rect.x, rect.y),
            EnemyKind::Lampir => sim.burst.ignite(rect.x, rect.y),
        }
        director::record_kill(sim);
        return;
    }
    if rect.y > PLAYFIELD_HEIGHT {
        *alive = false;
        return;
    }

    descend(rect, enemy.ai);
    track(rect, enemy, sim.player_x, rng);

    enemy.ticks += 1;
    if enemy.ai.fires() && enemy.ticks % ENEMY_FIRE_TICKS == 0 {
        spawner.spawn(GameObject::bullet(
            rect.x + ENEMY_MUZZLE_OFFSET,
            rect.y + ENEMY_MUZZLE_OFFSET,
            Team::Enemy,
        ));
    }

    enemy.flashing = enemy.flash > 0;
    enemy.flash = enemy.flash.saturating_sub(1);
}

fn descend(rect: &mut Rect, ai: AiBehavior) {
    if rect.y < SNIPER_HOLD_Y || ai != AiBehavior::Sniper {
        rect.y += 1;
    }
    if ai.dives() && rect.y > DIVE_LINE_Y {
        rect.y += DIVE_SPEED;
    }
}

/// Drift toward the player's last known x. A retarget resets the cadence, and
/// each step taken shortens it, so tracking speeds up until it is continuous.
fn track<R: Rng>(rect: &mut Rect, enemy: &mut Enemy, player_x: i32, rng: &mut R) {
    if !enemy.ai.always_tracks() && rect.y >= SNIPER_HOLD_Y {
        return;
    }

    let row_retarget = rect.y % RETARGET_ROW == 0 && rng.gen_range(0..=9) <= 7;
    let sniper_retarget =
        enemy.ai == AiBehavior::Sniper && enemy.ticks % SNIPER_RETARGET_TICKS == 0;
    if row_retarget || sniper_retarget {
        let (left, right) = TRACK_DEAD_ZONE;
        if rect.x < player_x - left || rect.x > player_x + right {
            enemy.heading = if rect.x < player_x { 1 } else { -1 };
        }
        enemy.step_cadence = STEP_CADENCE_START;
    }

    if enemy.heading != 0 && rect.y % enemy.step_cadence == 0 {
        rect.x += enemy.heading;
        if enemy.step_cadence > 1 {
            enemy.step_cadence -= 1;
        }
    }
}
