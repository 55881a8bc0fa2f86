//! Player controller: movement, firing, contact death, invincibility blink.

use crate::compute::particle;
use crate::constants::{
    BOUNDARY_HEIGHT, BOUNDARY_WIDTH, DEATH_EXPLOSION_OFFSET, DEATH_TICKS, PLAYER_FIRE_RATE,
    PLAYER_SIZE, PLAYER_SPEED_X, PLAYER_SPEED_Y, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH,
    SPAWN_INVINCIBILITY, TWIN_DROP, TWIN_SPREAD,
};
use crate::entities::{Cue, GameObject, Heading, Input, Player, Progression, SimState, Team};
use crate::geometry::Rect;
use crate::pool::{EntityPool, Spawner};

impl Player {
    /// A fresh life at the bottom center. Starting a life drops the level back
    /// to 1 and clears the kill streak.
    pub fn spawn(progress: &mut Progression) -> Self {
        progress.level = 1;
        progress.kills_this_life = 0;
        Player {
            x: PLAYFIELD_WIDTH / 2 - PLAYER_SIZE / 2,
            y: PLAYFIELD_HEIGHT - 40,
            fire_rate: PLAYER_FIRE_RATE,
            fire_cooldown: 0,
            projectile_count: 1,
            invincibility: SPAWN_INVINCIBILITY,
            death_timer: 0,
            heading: Heading::Level,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    pub fn is_dying(&self) -> bool {
        self.death_timer > 0
    }

    pub fn life_over(&self) -> bool {
        self.death_timer >= DEATH_TICKS
    }

    /// Blinks while invincible; hidden once hit.
    pub fn is_visible(&self) -> bool {
        self.invincibility % 4 < 2 && !self.is_dying()
    }

    pub fn update(&mut self, input: &Input, pool: &mut EntityPool, sim: &mut SimState) {
        let was_dying = self.is_dying();

        if !was_dying {
            self.steer(input);
            sim.player_x = self.x;
            self.projectile_count = sim.progress.level;
            self.fire(input, pool, &mut sim.cues);
        }

        if !was_dying && self.invincibility == 0 && self.touches_enemy(pool) {
            self.death_timer = 1;
            particle::spawn_explosion(
                pool,
                &mut sim.cues,
                self.x - DEATH_EXPLOSION_OFFSET,
                self.y - DEATH_EXPLOSION_OFFSET,
            );
            tracing::debug!(x = self.x, y = self.y, "player hit");
        }

        if was_dying {
            self.death_timer += 1;
        }
        self.invincibility = self.invincibility.saturating_sub(1);
    }

    fn steer(&mut self, input: &Input) {
        self.heading = Heading::Level;
        if input.left && self.x > BOUNDARY_WIDTH {
            self.x -= PLAYER_SPEED_X;
            self.heading = Heading::Left;
        } else if input.right && self.x < PLAYFIELD_WIDTH - BOUNDARY_WIDTH - PLAYER_SIZE {
            self.x += PLAYER_SPEED_X;
            self.heading = Heading::Right;
        }

        if input.down && self.y < PLAYFIELD_HEIGHT - BOUNDARY_WIDTH - PLAYER_SIZE {
            self.y += PLAYER_SPEED_Y;
        } else if input.up && self.y > PLAYFIELD_HEIGHT - BOUNDARY_HEIGHT {
            self.y -= PLAYER_SPEED_Y;
        }
    }

    /// Level 1 fires a center shot, level 2 a twin pair, level 3 both.
    fn fire(&mut self, input: &Input, spawner: &mut impl Spawner, cues: &mut Vec<Cue>) {
        if input.fire && self.fire_cooldown == 0 {
            if matches!(self.projectile_count, 1 | 3) {
                spawner.spawn(GameObject::bullet(self.x, self.y, Team::Player));
            }
            if matches!(self.projectile_count, 2 | 3) {
                let y = self.y + TWIN_DROP;
                spawner.spawn(GameObject::bullet(self.x - TWIN_SPREAD, y, Team::Player));
                spawner.spawn(GameObject::bullet(self.x + TWIN_SPREAD, y, Team::Player));
            }
            self.fire_cooldown = self.fire_rate;
            cues.push(Cue::Shoot);
        }
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
    }

    fn touches_enemy(&self, pool: &EntityPool) -> bool {
        let hitbox = self.hitbox();
        pool.iter_live()
            .any(|(_, object)| object.team == Team::Enemy && hitbox.overlaps(&object.rect))
    }
}
