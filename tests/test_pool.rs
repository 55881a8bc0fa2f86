use blaster::constants::POOL_CAPACITY;
use blaster::entities::*;
use blaster::pool::{EntityPool, Spawner};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn pow() -> GameObject {
    GameObject::pow(10, 10)
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn new_pool_is_empty() {
    let pool = EntityPool::new();
    assert_eq!(pool.capacity(), POOL_CAPACITY);
    assert_eq!(pool.live_count(), 0);
    assert_eq!(pool.iter_live().count(), 0);
}

#[test]
fn spawn_fills_slots_in_order() {
    let mut pool = EntityPool::new();
    assert_eq!(pool.spawn(pow()), Some(0));
    assert_eq!(pool.spawn(pow()), Some(1));
    assert_eq!(pool.spawn(pow()), Some(2));
    assert_eq!(pool.live_count(), 3);
}

#[test]
fn spawn_continues_from_cursor_instead_of_reusing_earlier_slot() {
    let mut pool = EntityPool::new();
    pool.spawn(pow());
    pool.spawn(pow());
    pool.get_mut(0).unwrap().alive = false;

    // Cursor sits past slot 1, so slot 0 waits until the scan wraps.
    assert_eq!(pool.spawn(pow()), Some(2));
}

#[test]
fn spawn_wraps_around_to_free_slots() {
    let mut pool = EntityPool::new();
    for _ in 0..POOL_CAPACITY {
        pool.spawn(pow());
    }
    pool.get_mut(3).unwrap().alive = false;
    assert_eq!(pool.spawn(pow()), Some(3));
}

#[test]
fn spawn_into_full_pool_is_a_no_op() {
    let mut pool = EntityPool::new();
    for i in 0..POOL_CAPACITY {
        assert_eq!(pool.spawn(GameObject::pow(i as i32, 0)), Some(i));
    }
    assert_eq!(pool.live_count(), POOL_CAPACITY);

    assert_eq!(pool.spawn(GameObject::bullet(0, 0, Team::Player)), None);
    assert_eq!(pool.live_count(), POOL_CAPACITY);
    // No live slot was overwritten
    for i in 0..POOL_CAPACITY {
        let object = pool.get(i).unwrap();
        assert_eq!(object.rect.x, i as i32);
        assert!(matches!(object.kind, ObjectKind::Pow { .. }));
    }
}

#[test]
fn reused_slot_is_fully_overwritten() {
    let mut pool = EntityPool::new();
    let mut enemy = GameObject::enemy(50, EnemyKind::Lampir, AiBehavior::Sniper, 1.0);
    enemy.as_enemy_mut().unwrap().flash = 3;
    pool.spawn(enemy);
    for _ in 1..POOL_CAPACITY {
        pool.spawn(pow());
    }
    pool.get_mut(0).unwrap().alive = false;

    let slot = pool.spawn(GameObject::bullet(1, 2, Team::Enemy)).unwrap();
    assert_eq!(slot, 0);
    assert_eq!(*pool.get(0).unwrap(), GameObject::bullet(1, 2, Team::Enemy));
}

#[test]
fn clear_frees_every_slot() {
    let mut pool = EntityPool::new();
    for _ in 0..10 {
        pool.spawn(pow());
    }
    pool.clear();
    assert_eq!(pool.live_count(), 0);
    assert_eq!(pool.spawn(pow()), Some(0));
}

// ── tick_all ──────────────────────────────────────────────────────────────────

#[test]
fn dead_slots_are_not_updated() {
    let mut pool = EntityPool::new();
    pool.spawn(GameObject::bullet(50, 100, Team::Player));
    pool.get_mut(0).unwrap().alive = false;

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());
    assert_eq!(pool.get(0).unwrap().rect.y, 100);
}

#[test]
fn each_live_slot_updates_once_per_tick() {
    let mut pool = EntityPool::new();
    pool.spawn(GameObject::bullet(10, 100, Team::Player));
    pool.spawn(GameObject::bullet(80, 100, Team::Enemy));

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());
    assert_eq!(pool.get(0).unwrap().rect.y, 95);
    assert_eq!(pool.get(1).unwrap().rect.y, 103);
}

#[test]
fn dead_slots_do_not_collide() {
    let mut pool = EntityPool::new();
    let mut enemy = GameObject::enemy(95, EnemyKind::Samuel, AiBehavior::Default, 1.0);
    enemy.rect.y = 100;
    enemy.alive = false;
    pool.spawn(GameObject::bullet(100, 100, Team::Player));
    pool.spawn(enemy);
    pool.get_mut(1).unwrap().alive = false;

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());
    assert!(pool.get(0).unwrap().alive);
    assert_eq!(pool.get(1).unwrap().as_enemy().unwrap().health, 120);
}

#[test]
fn player_bullet_hit_damages_enemy_and_spawns_pow() {
    // Bullet at (100, 100) over an enemy at (95, 100) with a 25x40 box.
    let mut pool = EntityPool::new();
    let mut enemy = GameObject::enemy(95, EnemyKind::Samuel, AiBehavior::Default, 1.0);
    enemy.rect.y = 100;
    pool.spawn(GameObject::bullet(100, 100, Team::Player));
    pool.spawn(enemy);

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());

    let bullet = pool.get(0).unwrap();
    assert!(!bullet.alive);
    let hit = pool.get(1).unwrap();
    assert!(hit.alive);
    assert_eq!(hit.as_enemy().unwrap().health, 110);

    let pows: Vec<_> = pool
        .iter_live()
        .filter(|(_, o)| matches!(o.kind, ObjectKind::Pow { .. }))
        .collect();
    assert_eq!(pows.len(), 1);
    // Bullet moved to y=95 before the hit; pow rises 10 above it
    assert_eq!((pows[0].1.rect.x, pows[0].1.rect.y), (100, 85));
}

#[test]
fn bullet_hits_only_once_when_touching_two_enemies() {
    let mut pool = EntityPool::new();
    let mut a = GameObject::enemy(95, EnemyKind::Samuel, AiBehavior::Default, 1.0);
    a.rect.y = 100;
    let mut b = a;
    b.rect.x = 100;
    pool.spawn(GameObject::bullet(100, 100, Team::Player));
    pool.spawn(a);
    pool.spawn(b);

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());

    let total: i32 = pool
        .iter_live()
        .filter_map(|(_, o)| o.as_enemy())
        .map(|e| e.health)
        .sum();
    assert_eq!(total, 120 + 110);
}

#[test]
fn hit_sets_flash_and_enemy_draws_flashing_on_its_tick() {
    let mut pool = EntityPool::new();
    let mut enemy = GameObject::enemy(95, EnemyKind::Samuel, AiBehavior::Default, 1.0);
    enemy.rect.y = 100;
    // Bullet in a lower slot so the enemy ticks after being hit
    pool.spawn(GameObject::bullet(100, 100, Team::Player));
    pool.spawn(enemy);

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());

    let enemy = pool.get(1).unwrap().as_enemy().unwrap();
    assert!(enemy.flashing);
    assert_eq!(enemy.flash, 4);
}

#[test]
fn enemy_bullets_do_not_damage_enemies() {
    let mut pool = EntityPool::new();
    let mut enemy = GameObject::enemy(95, EnemyKind::Samuel, AiBehavior::Default, 1.0);
    enemy.rect.y = 100;
    pool.spawn(GameObject::bullet(100, 100, Team::Enemy));
    pool.spawn(enemy);

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());
    assert!(pool.get(0).unwrap().alive);
    assert_eq!(pool.get(1).unwrap().as_enemy().unwrap().health, 120);
}

#[test]
fn player_bullets_ignore_enemy_bullets() {
    let mut pool = EntityPool::new();
    pool.spawn(GameObject::bullet(100, 100, Team::Player));
    pool.spawn(GameObject::bullet(100, 90, Team::Enemy));

    let mut sim = SimState::new();
    pool.tick_all(&mut sim, &mut seeded_rng());
    assert!(pool.get(0).unwrap().alive);
    assert!(pool.get(1).unwrap().alive);
}
