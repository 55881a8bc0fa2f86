//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands.

pub mod viewport;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::compute::{self, particle};
use crate::constants::{BACKGROUND_TILE, EXPLOSION_FRAMES, PLAYFIELD_HEIGHT};
use crate::entities::{
    Background, EnemyKind, GameObject, GameState, GameStatus, Heading, ObjectKind, Team,
};
use crate::geometry::Rect;

pub use viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_BONUS: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY_SAMUEL: Color = Color::Green;
const C_ENEMY_LAMPIR: Color = Color::Magenta;
const C_HIT_FLASH: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_POW: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_FADED: Color = Color::DarkGrey;

/// Ground texture glyph and colour for mud, grass and sand.
const BACKGROUNDS: [(&str, Color); 3] = [
    ("░", Color::DarkYellow),
    ("\"", Color::DarkGreen),
    ("·", Color::Yellow),
];

const EXPLOSION_GLYPHS: [(&str, Color); EXPLOSION_FRAMES] = [
    ("·", Color::White),
    ("•", Color::Yellow),
    ("*", Color::Yellow),
    ("✶", Color::Red),
    ("✸", Color::Red),
    ("✺", Color::DarkRed),
    ("░", Color::DarkGrey),
];

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, &state.sim.background, view)?;
    draw_border(out, view)?;

    if compute::status(state) == GameStatus::Playing && state.player.is_visible() {
        draw_player(out, state, view)?;
    }
    for (_, object) in state.pool.iter_live() {
        draw_object(out, object, view)?;
    }

    draw_hud(out, state, view)?;
    draw_controls_hint(out, view)?;

    if compute::status(state) == GameStatus::GameOver {
        draw_game_over(out, view)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.bottom().saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Print `text` at the cell covering playfield pixel (x, y), if on screen.
fn put<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.project(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

/// Multi-row sprite centered horizontally on `rect`, top row at `rect.y`.
fn draw_sprite<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: Rect,
    lines: &[&str],
    color: Color,
) -> std::io::Result<()> {
    let Some((center, top)) = view.project(rect.x + rect.w / 2, rect.y) else {
        return Ok(());
    };
    for (i, line) in lines.iter().enumerate() {
        let row = top + i as u16;
        if row >= view.bottom() {
            break;
        }
        let half = line.chars().count() as u16 / 2;
        out.queue(cursor::MoveTo(center.saturating_sub(half).max(view.origin_col), row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

// ── Background & border ──────────────────────────────────────────────────────

fn draw_background<W: Write>(
    out: &mut W,
    background: &Background,
    view: &Viewport,
) -> std::io::Result<()> {
    let (glyph, base) = BACKGROUNDS[background.index % BACKGROUNDS.len()];
    let color = if background.brightness() < 128 { C_FADED } else { base };
    let scroll = background.offset as i32;

    out.queue(style::SetForegroundColor(color))?;
    for row in 0..view.rows {
        // Texture coordinate of this row, moving down as the offset grows.
        let band = (view.row_to_y(row) - scroll).rem_euclid(BACKGROUND_TILE as i32) / 8;
        for col in 0..view.cols {
            if (col as i32 * 7 + band * 13) % 23 == 0 {
                out.queue(cursor::MoveTo(view.origin_col + col, view.origin_row + row))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

/// Side walls of the letterbox.
fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BORDER))?;
    for row in view.origin_row..view.bottom() {
        if view.origin_col > 0 {
            out.queue(cursor::MoveTo(view.origin_col - 1, row))?;
            out.queue(Print("│"))?;
        }
        out.queue(cursor::MoveTo(view.right(), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    //   ▲       ← tip
    //  /█\      ← fuselage + wings, banked while moving
    let wings = match state.player.heading {
        Heading::Level => "/█\\",
        Heading::Left => "«█\\",
        Heading::Right => "/█»",
    };
    draw_sprite(out, view, state.player.hitbox(), &["▲", wings], C_PLAYER)
}

fn draw_object<W: Write>(out: &mut W, object: &GameObject, view: &Viewport) -> std::io::Result<()> {
    let rect = object.rect;
    match &object.kind {
        ObjectKind::Bullet => {
            let (glyph, color) = if object.team == Team::Player {
                ("║", C_BULLET_PLAYER)
            } else {
                ("↓", C_BULLET_ENEMY)
            };
            draw_sprite(out, view, rect, &[glyph], color)
        }
        ObjectKind::Enemy(enemy) => {
            let (lines, color) = match enemy.kind {
                EnemyKind::Samuel => (["«▼»", "╚═╝"], C_ENEMY_SAMUEL),
                EnemyKind::Lampir => (["(◎)", "╰─╯"], C_ENEMY_LAMPIR),
            };
            let color = if enemy.flashing { C_HIT_FLASH } else { color };
            draw_sprite(out, view, rect, &lines, color)
        }
        ObjectKind::Pow { .. } => put(out, view, rect.x, rect.y, "✦", C_POW),
        ObjectKind::Explosion { ticks_left } => {
            let (glyph, color) = EXPLOSION_GLYPHS[particle::explosion_frame(*ticks_left)];
            put(out, view, rect.x, rect.y, glyph, color)
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let progress = &state.sim.progress;
    put(out, view, 5, 30, &format!("LIVES: {}", progress.lives), C_HUD)?;
    put(out, view, 180, 30, &format!("{:03}", progress.score()), C_HUD)?;
    if progress.bonus_visible() {
        put(out, view, 100, 50, "BONUS!", C_BONUS)?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    put(
        out,
        view,
        2,
        PLAYFIELD_HEIGHT - 1,
        "ARROWS/WASD move  SPACE shoot  Q quit",
        C_HINT,
    )
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    put(out, view, 50, 200, "GAME OVER", Color::Red)?;
    put(out, view, 50, 230, "PRESS R TO RESTART", Color::White)?;
    Ok(())
}
