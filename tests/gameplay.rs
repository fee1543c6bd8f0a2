//! End-to-end gameplay scenarios driven through the public API

use espada::Game;
use espada::Settings;
use espada::audio::SoundEffect;
use espada::consts::*;
use espada::platform::{Autopilot, Headless};
use espada::sim::{
    Countdown, Enemy, EnemyKind, FrameInput, GameEvent, Rect, Scene, Session, WaveSpawner,
    resolve_collisions, tick,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[test]
fn idle_player_holds_position() {
    let mut s = Session::new(7, false);
    let start = s.player.rect;
    assert_eq!(start.x, 295);
    assert_eq!(start.y, BOTTOM - 64);

    for frame in 0..10 {
        tick(&mut s, &FrameInput::default());
        assert_eq!(s.player.vel, glam::IVec2::ZERO, "frame {frame}");
        assert_eq!(s.player.rect, start, "frame {frame}");
    }
}

#[test]
fn player_laser_destroys_weak_enemy() {
    let mut s = Session::new(7, false);
    let e = &mut s.enemies[0];
    e.alive = true;
    e.kind = EnemyKind::Weak;
    e.rect = Rect::new(100, 50, 64, 32);
    s.live_enemies = 1;
    assert!(s.player.lasers.fire(100, 50));

    resolve_collisions(&mut s);

    assert!(!s.enemies[0].alive);
    assert_eq!(s.live_enemies, 0);
    assert_eq!(s.player.lasers.alive_count(), 0);
    assert_eq!(s.player.score, 50);
    assert_eq!(s.explosions.alive_count(), 1);
    let boom = s.explosions.iter_alive().next().map(|x| (x.rect.x, x.rect.y));
    assert_eq!(boom, Some((100, 50)));
    assert!(s.events.contains(&GameEvent::Sound(SoundEffect::Explosion)));
}

#[test]
fn early_wave_spawns_weak_enemies() {
    let mut rng = Pcg32::seed_from_u64(7);
    let mut enemies: Vec<Enemy> = (0..MAX_ENEMIES).map(|_| Enemy::new()).collect();
    let mut live = 0;
    let mut spawner = WaveSpawner {
        countdown: Countdown::new(0),
        waves: 3,
    };

    assert_eq!(spawner.tick(&mut enemies, &mut live, &mut rng), Some(4));

    assert_eq!(live, MAX_ENEMIES);
    for e in &enemies {
        assert!(e.alive);
        assert_eq!(e.kind, EnemyKind::Weak);
        assert_eq!((e.rect.w, e.rect.h), (64, 32));
    }
    assert_eq!(spawner.waves, 4);
    assert_eq!(spawner.countdown.remaining(), SPAWN_RELOAD);
}

#[test]
fn lethal_hit_ends_the_game() {
    let mut s = Session::new(7, false);
    s.player.health = 1;
    let (x, y) = (s.player.rect.x, s.player.rect.y);

    s.damage_player(2);

    assert_eq!(s.player.health, 0);
    assert!(!s.player.alive);
    assert_eq!(s.scene, Scene::GameOver);
    assert_eq!(s.explosions.alive_count(), 1);
    let boom = s.explosions.iter_alive().next().map(|e| (e.rect.x, e.rect.y));
    assert_eq!(boom, Some((x, y)));
}

#[test]
fn autopilot_session_stays_consistent() {
    let settings = Settings {
        invincible: true,
        ..Default::default()
    };
    let mut game = Game::new(settings, 11);
    let mut host = Headless::default();
    let mut pilot = Autopilot::new(1);

    for _ in 0..(SPAWN_RELOAD as usize * 6) {
        let input = pilot.next_input(&game);
        game.update(&input, &mut host);
        host.clear_frame();
        game.render(&mut host);

        if let Some(s) = game.session() {
            assert_eq!(s.live_enemies, s.alive_enemy_count());
            assert!(s.player.score >= 0);
            assert!((0..=MAX_HEALTH).contains(&s.player.health));
        }
    }

    let session = game.session().expect("invincible run never leaves PLAY");
    assert_eq!(session.scene, Scene::Play);
    assert!(session.spawner.waves >= 1);
    assert!(host.sound_count(SoundEffect::PlayerFire) > 0);
}
