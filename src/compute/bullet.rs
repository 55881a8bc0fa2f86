use crate::constants::{
    BULLET_DAMAGE, BULLET_SIZE, ENEMY_BULLET_SPEED, HIT_FLASH_TICKS, PLAYER_BULLET_SPEED,
    POW_RISE,
};
use crate::entities::{GameObject, ObjectKind, Team};
use crate::geometry::Rect;

impl GameObject {
    pub fn bullet(x: i32, y: i32, team: Team) -> Self {
        GameObject {
            rect: Rect::new(x, y, BULLET_SIZE, BULLET_SIZE),
            team,
            alive: true,
            kind: ObjectKind::Bullet,
        }
    }
}

pub fn update(object: &mut GameObject) {
    if object.team == Team::Player {
        object.rect.y -= PLAYER_BULLET_SPEED;
    } else {
        object.rect.y += ENEMY_BULLET_SPEED;
    }

    // Only the top edge despawns. Enemy bullets leaving through the bottom
    // keep their slot.
    if object.rect.y <= 0 {
        object.alive = false;
    }
}

/// A player bullet spends itself on the first enemy it touches.
pub fn on_collision(this: &mut GameObject, other: &mut GameObject) -> Option<GameObject> {
    if this.team != Team::Player || other.team != Team::Enemy {
        return None;
    }
    let ObjectKind::Enemy(enemy) = &mut other.kind else {
        return None;
    };

    this.alive = false;
    enemy.health -= BULLET_DAMAGE;
    enemy.flash = HIT_FLASH_TICKS;
    Some(GameObject::pow(this.rect.x, this.rect.y - POW_RISE))
}
