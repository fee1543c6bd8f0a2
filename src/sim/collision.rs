//! Collision detection and resolution
//!
//! Three passes per frame, all rectangle-vs-rectangle:
//! player lasers vs enemies, enemy lasers vs player, enemy hulls vs player.
//! Every pass needs a living player, so nothing here fires after game over.

use super::state::Session;
use crate::audio::SoundEffect;
use crate::consts::MAX_LASERS;

/// Damage dealt by an enemy laser
pub const LASER_DAMAGE: i32 = 1;
/// Damage dealt by ramming an enemy
pub const RAM_DAMAGE: i32 = 2;

/// Resolve every collision for this frame
pub fn resolve_collisions(state: &mut Session) {
    player_lasers_vs_enemies(state);
    enemy_lasers_vs_player(state);
    enemies_vs_player(state);
}

/// Each laser kills at most one enemy: the first one in pool order that it
/// overlaps and that has entered the visible field.
fn player_lasers_vs_enemies(state: &mut Session) {
    if !state.player.alive {
        return;
    }

    for li in 0..MAX_LASERS {
        let laser = *state.player.lasers.slot(li);
        if !laser.alive {
            continue;
        }

        let hit = state
            .enemies
            .iter()
            .position(|e| e.alive && e.rect.bottom() >= 0 && laser.rect.intersects(&e.rect));
        let Some(ei) = hit else {
            continue;
        };

        let (x, y) = (state.enemies[ei].rect.x, state.enemies[ei].rect.y);
        let bounty = state.enemies[ei].kind.stats().bounty;

        state.kill_enemy(ei);
        state.player.lasers.retire(li);
        state.player.award(bounty);
        state.explosions.spawn(x, y);
        state.play(SoundEffect::Explosion);
        log::debug!("Enemy {ei} destroyed (+{bounty})");
    }
}

/// Each enemy hits the player with at most one of its lasers per frame
fn enemy_lasers_vs_player(state: &mut Session) {
    for ei in 0..state.enemies.len() {
        if !state.player.alive || state.player.invulnerable {
            return;
        }

        let player_rect = state.player.rect;
        let hit = state.enemies[ei]
            .lasers
            .iter_mut()
            .find(|l| l.alive && l.rect.intersects(&player_rect));
        if let Some(laser) = hit {
            laser.alive = false;
            state.damage_player(LASER_DAMAGE);
        }
    }
}

/// Ramming: the first enemy touching the player dies and hurts the player.
/// At most one ram is resolved per frame.
fn enemies_vs_player(state: &mut Session) {
    if !state.player.alive || state.player.invulnerable {
        return;
    }

    let player_rect = state.player.rect;
    let hit = state
        .enemies
        .iter()
        .position(|e| e.alive && e.rect.intersects(&player_rect));
    if let Some(ei) = hit {
        state.kill_enemy(ei);
        state.damage_player(RAM_DAMAGE);
        log::debug!("Enemy {ei} rammed the player");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::enemy::EnemyKind;
    use crate::sim::rect::Rect;
    use crate::sim::state::{GameEvent, Scene};

    fn place_enemy(state: &mut Session, index: usize, kind: EnemyKind, x: i32, y: i32) {
        let stats = kind.stats();
        let e = &mut state.enemies[index];
        e.alive = true;
        e.kind = kind;
        e.rect = Rect::new(x, y, stats.width, stats.height);
        state.live_enemies += 1;
    }

    fn fire_player_laser_at(state: &mut Session, x: i32, y: i32) {
        assert!(state.player.lasers.fire(x, y));
    }

    #[test]
    fn test_laser_kills_weak_enemy() {
        let mut s = Session::new(1, false);
        place_enemy(&mut s, 0, EnemyKind::Weak, 100, 50);
        fire_player_laser_at(&mut s, 100, 50);

        resolve_collisions(&mut s);

        assert!(!s.enemies[0].alive);
        assert_eq!(s.live_enemies, 0);
        assert_eq!(s.player.lasers.alive_count(), 0);
        assert_eq!(s.player.score, 50);
        assert_eq!(s.explosions.alive_count(), 1);
        let boom = s.explosions.iter_alive().next().map(|e| (e.rect.x, e.rect.y));
        assert_eq!(boom, Some((100, 50)));
        assert!(s.events.contains(&GameEvent::Sound(SoundEffect::Explosion)));
    }

    #[test]
    fn test_one_kill_per_laser() {
        let mut s = Session::new(1, false);
        place_enemy(&mut s, 0, EnemyKind::Strong, 100, 50);
        place_enemy(&mut s, 1, EnemyKind::Strong, 100, 50);
        fire_player_laser_at(&mut s, 110, 60);

        resolve_collisions(&mut s);

        assert!(!s.enemies[0].alive);
        assert!(s.enemies[1].alive);
        assert_eq!(s.live_enemies, 1);
        assert_eq!(s.player.score, 100);
    }

    #[test]
    fn test_offscreen_enemy_is_untouchable() {
        let mut s = Session::new(1, false);
        place_enemy(&mut s, 0, EnemyKind::Weak, 100, -40);
        fire_player_laser_at(&mut s, 100, -30);

        resolve_collisions(&mut s);

        assert!(s.enemies[0].alive);
        assert_eq!(s.player.lasers.alive_count(), 1);
    }

    #[test]
    fn test_enemy_laser_hits_once() {
        let mut s = Session::new(1, false);
        let (px, py) = (s.player.rect.x, s.player.rect.y);
        s.enemies[0].lasers.fire(px + 10, py + 10);
        s.enemies[0].lasers.fire(px + 20, py + 10);

        resolve_collisions(&mut s);

        assert_eq!(s.player.health, MAX_HEALTH - 1);
        assert_eq!(s.enemies[0].lasers.alive_count(), 1);
        assert!(s.player.invulnerable);
    }

    #[test]
    fn test_invulnerable_player_ignores_lasers() {
        let mut s = Session::new(1, false);
        s.player.invulnerable = true;
        let (px, py) = (s.player.rect.x, s.player.rect.y);
        s.enemies[2].lasers.fire(px + 10, py + 10);

        resolve_collisions(&mut s);

        assert_eq!(s.player.health, MAX_HEALTH);
        assert_eq!(s.enemies[2].lasers.alive_count(), 1);
    }

    #[test]
    fn test_ram_resolves_one_enemy_per_frame() {
        let mut s = Session::new(1, false);
        let (px, py) = (s.player.rect.x, s.player.rect.y);
        place_enemy(&mut s, 0, EnemyKind::Weak, px, py);
        place_enemy(&mut s, 1, EnemyKind::Weak, px, py + 10);

        resolve_collisions(&mut s);

        assert!(!s.enemies[0].alive);
        assert!(s.enemies[1].alive);
        assert_eq!(s.live_enemies, 1);
        assert_eq!(s.player.health, MAX_HEALTH - 2);
        assert_eq!(s.player.score, 0);
    }

    #[test]
    fn test_dead_player_collides_with_nothing() {
        let mut s = Session::new(1, false);
        s.player.health = 1;
        s.damage_player(1);
        assert_eq!(s.scene, Scene::GameOver);

        let (px, py) = (s.player.rect.x, s.player.rect.y);
        place_enemy(&mut s, 0, EnemyKind::Weak, px, py);
        resolve_collisions(&mut s);

        assert!(s.enemies[0].alive);
        assert_eq!(s.live_enemies, 1);
    }
}
