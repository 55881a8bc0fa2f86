//! Scrolling ground texture and the crossfade between the three backgrounds.

use crate::constants::{
    BACKGROUND_ACCEL, BACKGROUND_BASE_CEILING, BACKGROUND_COUNT, BACKGROUND_TILE, FADE_TICKS,
    MAX_BACKGROUND_SPEED,
};
use crate::entities::Background;

impl Background {
    pub fn new() -> Self {
        Background {
            index: 0,
            fade_timer: 0,
            speed: 0.0,
            offset: 0.0,
            transitions: 0,
        }
    }

    /// Scroll speed keeps accelerating until it reaches this.
    pub fn speed_ceiling(&self) -> f32 {
        MAX_BACKGROUND_SPEED * self.transitions as f32 + BACKGROUND_BASE_CEILING
    }

    pub fn update(&mut self) {
        if self.speed < self.speed_ceiling() {
            self.speed += BACKGROUND_ACCEL;
        }
        self.offset += self.speed;
        if self.offset > BACKGROUND_TILE {
            self.offset -= BACKGROUND_TILE;
        }

        self.fade_timer = self.fade_timer.saturating_sub(1);
        if self.fade_timer == FADE_TICKS / 2 {
            self.index = (self.index + 1) % BACKGROUND_COUNT;
            self.transitions += 1;
            tracing::debug!(background = self.index, "background changed");
        }
    }

    pub fn begin_transition(&mut self) {
        self.fade_timer = FADE_TICKS;
    }

    /// 255 outside a transition, dipping to 0 at its midpoint.
    pub fn brightness(&self) -> u8 {
        let half = (FADE_TICKS / 2) as f32;
        ((self.fade_timer as f32 - half).abs() / half * 255.0) as u8
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}
