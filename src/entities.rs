//! All game entity types: pure data. Behavior lives in `compute`.

use crate::geometry::Rect;
use crate::pool::EntityPool;

// ── Tags ──────────────────────────────────────────────────────────────────────

/// Ownership tag used to gate collision rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
    Particle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Light enemy; dies in a single explosion.
    Samuel,
    /// Heavy enemy; dies in a scripted multi-explosion burst.
    Lampir,
}

/// Movement and fire pattern of an enemy, selected by a small integer id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiBehavior {
    Default,
    Dive,
    Shoot,
    ShootDive,
    Sniper,
    /// Any id past the named ones: tracks only above the sniper line,
    /// never dives, never fires.
    Cruise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Sound effect requested by the simulation during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Shoot,
    Explosion,
    Bonus,
    GameOver,
}

// ── Pool objects ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub ai: AiBehavior,
    pub health: i32,
    /// Ticks lived; drives firing and sniper retargeting.
    pub ticks: u32,
    /// Horizontal tracking direction: -1, 0 or 1.
    pub heading: i32,
    /// Rows between 1px tracking steps; shrinks toward 1.
    pub step_cadence: i32,
    /// Hit-flash countdown.
    pub flash: u32,
    /// Whether this frame draws in the flash color.
    pub flashing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Bullet,
    Enemy(Enemy),
    Pow { ticks_left: u32 },
    Explosion { ticks_left: u32 },
}

/// One pool slot. `alive == false` marks the slot free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameObject {
    pub rect: Rect,
    pub team: Team,
    pub alive: bool,
    pub kind: ObjectKind,
}

impl GameObject {
    pub const VACANT: GameObject = GameObject {
        rect: Rect::new(0, 0, 0, 0),
        team: Team::Particle,
        alive: false,
        kind: ObjectKind::Pow { ticks_left: 0 },
    };
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Which ship sprite to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Level,
    Left,
    Right,
}

/// Keys held this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub restart: bool,
}

/// One life's worth of player state. A fresh record is built on every spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub fire_rate: u32,
    pub fire_cooldown: u32,
    pub projectile_count: u32,
    pub invincibility: u32,
    /// 0 while alive; counts up to `DEATH_TICKS` once hit.
    pub death_timer: u32,
    pub heading: Heading,
}

// ── Process-wide state ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    pub kills_total: u32,
    /// Kill streak within the current life.
    pub kills_this_life: u32,
    pub level: u32,
    pub lives: u32,
    /// Frames left on the "BONUS!" indicator.
    pub upgrade_flash: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub index: usize,
    pub fade_timer: u32,
    pub speed: f32,
    pub offset: f32,
    /// Completed transitions since the last reset.
    pub transitions: u32,
}

/// Scripted heavy-enemy death: a series of explosions around one origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Burst {
    pub timer: u32,
    pub x: i32,
    pub y: i32,
}

/// State shared by every subsystem during a frame. Each field group has a
/// single writer: `progress` the director, `background` the background
/// scroller, `burst` the director, `player_x` the player controller.
#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    pub progress: Progression,
    pub background: Background,
    pub burst: Burst,
    /// Last x the player was seen at; enemies track it.
    pub player_x: i32,
    /// Sound cues raised this frame, drained by the frontend.
    pub cues: Vec<Cue>,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub pool: EntityPool,
    pub sim: SimState,
    pub spawn_timer: i32,
    pub frame: u64,
}
