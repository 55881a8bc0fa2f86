use blaster::compute::{init_state, tick};
use blaster::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use blaster::display::{render, Viewport};
use blaster::entities::{GameObject, Input, Team};
use blaster::pool::Spawner;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn render_to_string(state: &blaster::entities::GameState, view: &Viewport) -> String {
    let mut out: Vec<u8> = Vec::new();
    render(&mut out, state, view).unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn exact_fit_has_no_letterbox() {
    let view = Viewport::fit(45, 35);
    assert_eq!(view, Viewport { origin_col: 0, origin_row: 0, cols: 45, rows: 35 });
}

#[test]
fn wide_terminal_letterboxes_sides() {
    let view = Viewport::fit(90, 35);
    assert_eq!((view.cols, view.rows), (45, 35));
    assert_eq!((view.origin_col, view.origin_row), (22, 0));
    assert_eq!(view.right(), 67);
}

#[test]
fn tall_terminal_letterboxes_top_and_bottom() {
    let view = Viewport::fit(45, 100);
    assert_eq!((view.cols, view.rows), (45, 35));
    assert_eq!((view.origin_col, view.origin_row), (0, 32));
    assert_eq!(view.bottom(), 67);
}

#[test]
fn degenerate_terminal_still_has_one_cell() {
    let view = Viewport::fit(0, 0);
    assert!(view.cols >= 1 && view.rows >= 1);
}

#[test]
fn project_maps_corners_and_rejects_outside() {
    let view = Viewport::fit(90, 35);
    assert_eq!(view.project(0, 0), Some((22, 0)));
    assert_eq!(
        view.project(PLAYFIELD_WIDTH - 1, PLAYFIELD_HEIGHT - 1),
        Some((22 + 44, 34))
    );
    assert_eq!(view.project(-1, 0), None);
    assert_eq!(view.project(PLAYFIELD_WIDTH, 0), None);
    assert_eq!(view.project(0, -64), None);
    assert_eq!(view.project(0, PLAYFIELD_HEIGHT), None);
}

#[test]
fn row_to_y_spans_playfield() {
    let view = Viewport::fit(45, 35);
    assert_eq!(view.row_to_y(0), 0);
    assert_eq!(view.row_to_y(view.rows), PLAYFIELD_HEIGHT);
}

// ── Frame rendering ───────────────────────────────────────────────────────────

#[test]
fn playing_frame_shows_hud() {
    let state = init_state();
    let text = render_to_string(&state, &Viewport::fit(80, 40));
    assert!(text.contains("LIVES: 3"));
    assert!(text.contains("000"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn game_over_frame_shows_overlay() {
    let mut state = init_state();
    state.sim.progress.lives = 0;
    let text = render_to_string(&state, &Viewport::fit(80, 40));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("PRESS R TO RESTART"));
}

#[test]
fn bonus_indicator_follows_blink() {
    let mut state = init_state();
    state.sim.progress.upgrade_flash = 61;
    assert!(render_to_string(&state, &Viewport::fit(80, 40)).contains("BONUS!"));
    state.sim.progress.upgrade_flash = 60;
    assert!(!render_to_string(&state, &Viewport::fit(80, 40)).contains("BONUS!"));
}

#[test]
fn offscreen_objects_render_without_error() {
    let mut state = init_state();
    state.pool.spawn(GameObject::bullet(-40, -40, Team::Enemy));
    state.pool.spawn(GameObject::bullet(500, 900, Team::Enemy));
    state.pool.spawn(GameObject::explosion(PLAYFIELD_WIDTH - 1, PLAYFIELD_HEIGHT - 1));
    render_to_string(&state, &Viewport::fit(10, 5));
}

#[test]
fn busy_frames_render() {
    let mut state = init_state();
    let mut rng = StdRng::seed_from_u64(42);
    let input = Input { fire: true, ..Input::default() };
    let view = Viewport::fit(120, 50);
    for _ in 0..600 {
        tick(&mut state, &input, &mut rng);
        assert!(!render_to_string(&state, &view).is_empty());
    }
}
