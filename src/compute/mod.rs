//! Game logic: the per-frame driver and per-type behaviors.
//!
//! All randomness comes through an injected `Rng` so callers control
//! determinism (tests use a seeded `StdRng`).

pub mod background;
pub mod bullet;
pub mod director;
pub mod enemy;
pub mod particle;
pub mod player;

use rand::Rng;

use crate::entities::{
    Background, Burst, Cue, GameObject, GameState, GameStatus, Input, ObjectKind, Player,
    Progression, SimState,
};
use crate::pool::{CollisionResponse, EntityPool, Spawner};

// ── Type dispatch ─────────────────────────────────────────────────────────────

impl GameObject {
    /// Run this object's per-frame behavior.
    pub fn update<R: Rng>(&mut self, spawner: &mut impl Spawner, sim: &mut SimState, rng: &mut R) {
        match self.kind {
            ObjectKind::Bullet => bullet::update(self),
            ObjectKind::Enemy(_) => enemy::update(self, spawner, sim, rng),
            ObjectKind::Pow { .. } | ObjectKind::Explosion { .. } => particle::update(self, sim),
        }
    }

    /// Only bullets react to what they touch.
    pub fn collision_response(&self) -> Option<CollisionResponse> {
        match self.kind {
            ObjectKind::Bullet => Some(bullet::on_collision),
            _ => None,
        }
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

impl SimState {
    pub fn new() -> Self {
        SimState {
            progress: Progression::new(),
            background: Background::new(),
            burst: Burst::default(),
            player_x: 0,
            cues: Vec::new(),
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the state of a fresh playthrough.
pub fn init_state() -> GameState {
    let mut sim = SimState::new();
    let player = Player::spawn(&mut sim.progress);
    sim.player_x = player.x;
    GameState {
        player,
        pool: EntityPool::new(),
        sim,
        spawn_timer: 0,
        frame: 0,
    }
}

/// Restore every process-wide counter and empty the pool.
pub fn reset(state: &mut GameState) {
    let cues = std::mem::take(&mut state.sim.cues);
    state.sim = SimState::new();
    state.sim.cues = cues;
    state.player = Player::spawn(&mut state.sim.progress);
    state.sim.player_x = state.player.x;
    state.pool.clear();
    state.spawn_timer = 0;
    tracing::info!("game reset");
}

pub fn status(state: &GameState) -> GameStatus {
    if state.sim.progress.lives == 0 {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    }
}

/// Sound cues raised since the last call.
pub fn take_cues(state: &mut GameState) -> Vec<Cue> {
    std::mem::take(&mut state.sim.cues)
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one frame, in fixed order: background, burst,
/// player (or respawn, or game over), entity pool, director, HUD timers.
pub fn tick<R: Rng>(state: &mut GameState, input: &Input, rng: &mut R) {
    state.frame += 1;

    state.sim.background.update();
    state
        .sim
        .burst
        .update(&mut state.pool, &mut state.sim.cues, rng);

    if state.player.life_over() {
        respawn(state);
    } else if state.sim.progress.lives > 0 {
        state.player.update(input, &mut state.pool, &mut state.sim);
    } else if input.restart {
        reset(state);
    }

    state.pool.tick_all(&mut state.sim, rng);
    director::update_spawns(&mut state.spawn_timer, &mut state.pool, &state.sim.progress, rng);
    state.sim.progress.tick_hud();
}

fn respawn(state: &mut GameState) {
    let progress = &mut state.sim.progress;
    state.player = Player::spawn(progress);
    progress.lives = progress.lives.saturating_sub(1);
    if progress.lives == 0 {
        state.sim.cues.push(Cue::GameOver);
        tracing::info!(kills = progress.kills_total, "game over");
    } else {
        tracing::debug!(lives = progress.lives, "player respawned");
    }
}
