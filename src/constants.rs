//! Compiled tuning constants. There is no runtime configuration for gameplay.

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: i32 = 450;
pub const CANVAS_HEIGHT: i32 = 700;
pub const CANVAS_ZOOM: i32 = 2;

/// Playfield size in game pixels (canvas divided by zoom).
pub const PLAYFIELD_WIDTH: i32 = CANVAS_WIDTH / CANVAS_ZOOM;
pub const PLAYFIELD_HEIGHT: i32 = CANVAS_HEIGHT / CANVAS_ZOOM;

pub const FRAMES_PER_SECOND: u32 = 60;

// ── Entity pool ───────────────────────────────────────────────────────────────

pub const POOL_CAPACITY: usize = 250;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_SIZE: i32 = 16;
pub const PLAYER_BULLET_SPEED: i32 = 5;
pub const ENEMY_BULLET_SPEED: i32 = 3;
pub const BULLET_DAMAGE: i32 = 10;
/// Pow particles appear this far above the bullet that hit.
pub const POW_RISE: i32 = 10;

// ── Particles ─────────────────────────────────────────────────────────────────

pub const POW_TICKS: u32 = 20;
pub const EXPLOSION_TICKS: u32 = 21;
pub const EXPLOSION_FRAMES: usize = 7;
pub const EXPLOSION_FRAME_TICKS: u32 = 3;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SPAWN_Y: i32 = -64;
pub const SAMUEL_SIZE: (i32, i32) = (25, 40);
pub const SAMUEL_HEALTH: i32 = 120;
pub const LAMPIR_SIZE: (i32, i32) = (30, 49);
pub const LAMPIR_HEALTH: i32 = 300;
/// Health scaling hook; wired through the enemy constructor, never tuned.
pub const HEALTH_MULTIPLIER: f32 = 1.0;

pub const HIT_FLASH_TICKS: u32 = 5;
/// Snipers stop descending here; other AIs stop tracking below it.
pub const SNIPER_HOLD_Y: i32 = 100;
pub const DIVE_LINE_Y: i32 = 120;
pub const DIVE_SPEED: i32 = 2;
pub const RETARGET_ROW: i32 = 80;
pub const SNIPER_RETARGET_TICKS: u32 = 100;
/// Dead-zone around the last known player x, as (left, right) margins.
pub const TRACK_DEAD_ZONE: (i32, i32) = (10, 26);
pub const STEP_CADENCE_START: i32 = 10;
pub const ENEMY_FIRE_TICKS: u32 = 120;
pub const ENEMY_MUZZLE_OFFSET: i32 = 6;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 16;
pub const PLAYER_SPEED_X: i32 = 2;
pub const PLAYER_SPEED_Y: i32 = 1;
pub const BOUNDARY_WIDTH: i32 = 10;
pub const BOUNDARY_HEIGHT: i32 = 100;
pub const PLAYER_FIRE_RATE: u32 = 10;
pub const SPAWN_INVINCIBILITY: u32 = 180;
pub const DEATH_TICKS: u32 = 120;
pub const TWIN_SPREAD: i32 = 3;
pub const TWIN_DROP: i32 = 2;
pub const DEATH_EXPLOSION_OFFSET: i32 = 10;

// ── Progression ───────────────────────────────────────────────────────────────

pub const START_LIVES: u32 = 3;
pub const MAX_LEVEL: u32 = 3;
pub const UPGRADE_FLASH_TICKS: u32 = 60;
pub const HEAVY_CHANCE_CAP: u32 = 90;
pub const KILLS_PER_BACKGROUND: u32 = 30;

// ── Big explosion ─────────────────────────────────────────────────────────────

pub const BURST_TICKS: u32 = 45;
pub const BURST_PERIOD: u32 = 3;
pub const BURST_SPREAD: i32 = 10;

// ── Background ────────────────────────────────────────────────────────────────

pub const BACKGROUND_COUNT: usize = 3;
pub const BACKGROUND_TILE: f32 = 400.0;
pub const BACKGROUND_ACCEL: f32 = 0.005;
pub const BACKGROUND_BASE_CEILING: f32 = 3.5;
/// Added to the scroll-speed ceiling for every completed transition.
pub const MAX_BACKGROUND_SPEED: f32 = 1.5;
pub const FADE_TICKS: u32 = 120;
