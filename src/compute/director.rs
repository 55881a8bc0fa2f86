//! Encounter director: enemy spawning, difficulty, kill bookkeeping, upgrades
//! and the heavy-enemy explosion burst.

use rand::Rng;

use crate::compute::particle;
use crate::constants::{
    BURST_PERIOD, BURST_SPREAD, BURST_TICKS, HEALTH_MULTIPLIER, HEAVY_CHANCE_CAP,
    KILLS_PER_BACKGROUND, MAX_LEVEL, PLAYFIELD_WIDTH, START_LIVES, UPGRADE_FLASH_TICKS,
};
use crate::entities::{AiBehavior, Burst, Cue, EnemyKind, GameObject, Progression, SimState};
use crate::pool::Spawner;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Frames until the next spawn. Three kill thresholds each remove a chunk of
/// delay; a sine term adds a little wobble.
pub fn spawn_interval(kills: u32) -> i32 {
    let mut frames = 40.0 + (kills as f32).sin() * 10.0;
    if kills < 20 {
        frames += 80.0;
    }
    if kills < 60 {
        frames += 40.0;
    }
    if kills < 120 {
        frames += 40.0;
    }
    frames as i32
}

/// Chance in percent (against a roll in 0..=100) that a spawn is heavy.
pub fn heavy_chance(kills: u32) -> u32 {
    kills.min(HEAVY_CHANCE_CAP)
}

/// Highest AI id a spawn may draw.
pub fn aggression(kills: u32) -> u32 {
    [10, 30, 40, 50, 60]
        .iter()
        .filter(|&&threshold| kills > threshold)
        .count() as u32
}

/// Kill streak multiple that earns the next upgrade.
pub fn upgrade_threshold(level: u32) -> u32 {
    match level {
        0 | 1 => 10,
        2 => 35,
        _ => 90,
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

pub fn update_spawns<R: Rng>(
    spawn_timer: &mut i32,
    spawner: &mut impl Spawner,
    progress: &Progression,
    rng: &mut R,
) {
    *spawn_timer -= 1;
    if *spawn_timer > 0 {
        return;
    }

    let kills = progress.kills_total;
    let kind = if rng.gen_range(0..=100) < heavy_chance(kills) {
        EnemyKind::Lampir
    } else {
        EnemyKind::Samuel
    };
    let ai = AiBehavior::from_id(rng.gen_range(0..=aggression(kills)));
    let x = rng.gen_range(0..=PLAYFIELD_WIDTH - 32);

    spawner.spawn(GameObject::enemy(x, kind, ai, HEALTH_MULTIPLIER));
    *spawn_timer = spawn_interval(kills);
}

// ── Kills & upgrades ─────────────────────────────────────────────────────────

impl Progression {
    pub fn new() -> Self {
        Progression {
            kills_total: 0,
            kills_this_life: 0,
            level: 1,
            lives: START_LIVES,
            upgrade_flash: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.kills_total as u64 * 100
    }

    pub fn bonus_visible(&self) -> bool {
        self.upgrade_flash % 8 > 4
    }

    /// HUD step of the frame.
    pub fn tick_hud(&mut self) {
        self.upgrade_flash = self.upgrade_flash.saturating_sub(1);
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

/// Credit one kill. May upgrade the player and start a background transition.
pub fn record_kill(sim: &mut SimState) {
    let progress = &mut sim.progress;
    progress.kills_total += 1;
    progress.kills_this_life += 1;

    if progress.kills_this_life % upgrade_threshold(progress.level) == 0 {
        upgrade(progress, &mut sim.cues);
    }
    if progress.kills_total % KILLS_PER_BACKGROUND == 0 {
        sim.background.begin_transition();
    }
}

/// Raise the level, or grant a life once the level is maxed.
pub fn upgrade(progress: &mut Progression, cues: &mut Vec<Cue>) {
    progress.upgrade_flash = UPGRADE_FLASH_TICKS;
    cues.push(Cue::Bonus);
    if progress.level < MAX_LEVEL {
        progress.level += 1;
        tracing::debug!(level = progress.level, "level up");
    } else {
        progress.lives += 1;
        tracing::debug!(lives = progress.lives, "extra life");
    }
}

// ── Big explosion ─────────────────────────────────────────────────────────────

impl Burst {
    pub fn ignite(&mut self, x: i32, y: i32) {
        self.timer = BURST_TICKS;
        self.x = x;
        self.y = y;
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0
    }

    /// One explosion every `BURST_PERIOD` frames, scattered around the origin.
    pub fn update<R: Rng>(&mut self, spawner: &mut impl Spawner, cues: &mut Vec<Cue>, rng: &mut R) {
        self.timer = self.timer.saturating_sub(1);
        if self.timer % BURST_PERIOD == 1 {
            let x = self.x + rng.gen_range(-BURST_SPREAD..=BURST_SPREAD);
            let y = self.y + rng.gen_range(-BURST_SPREAD..=BURST_SPREAD);
            particle::spawn_explosion(spawner, cues, x, y);
        }
    }
}
