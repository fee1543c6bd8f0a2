//! Property tests for simulation invariants

use espada::consts::*;
use espada::sim::{Actions, Countdown, FrameInput, LaserOwner, LaserPool, Player, Session, tick};
use proptest::prelude::*;

/// Movement and fire only, so sessions keep simulating
fn play_input() -> impl Strategy<Value = FrameInput> {
    (0u16..32, any::<bool>()).prop_map(|(bits, invincible)| FrameInput {
        pressed: if invincible {
            Actions::INVINCIBLE
        } else {
            Actions::NONE
        },
        held: Actions::from_bits(bits),
        repeat: false,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn live_counter_matches_pool(
        seed in any::<u64>(),
        inputs in prop::collection::vec(play_input(), 200..900),
    ) {
        let mut s = Session::new(seed, false);
        // Skip the first reload so waves arrive early
        s.spawner.countdown = Countdown::new(0);

        for input in &inputs {
            tick(&mut s, input);
            prop_assert_eq!(s.live_enemies, s.alive_enemy_count());
            prop_assert!(s.player.score >= 0);
            prop_assert!((0..=MAX_HEALTH).contains(&s.player.health));
        }
    }

    #[test]
    fn health_never_negative(hits in prop::collection::vec(1i32..4, 1..20)) {
        let mut s = Session::new(1, false);
        for amount in hits {
            s.damage_player(amount);
            prop_assert!(s.player.health >= 0);
            // Let the invulnerability window run out
            s.player.invulnerable = false;
        }
    }

    #[test]
    fn invulnerable_player_takes_no_damage(amounts in prop::collection::vec(1i32..10, 1..10)) {
        let mut p = Player::new();
        p.apply_damage(1, false);
        let health = p.health;
        for amount in amounts {
            p.apply_damage(amount, false);
            prop_assert_eq!(p.health, health);
        }
    }

    #[test]
    fn score_never_negative(start in 0i64..1000, penalties in prop::collection::vec(0u32..300, 0..20)) {
        let mut p = Player::new();
        p.score = start;
        for penalty in penalties {
            p.penalize(penalty);
            prop_assert!(p.score >= 0);
        }
    }

    #[test]
    fn saturated_fire_is_noop(xs in prop::collection::vec((0..WIDTH, 0..BOTTOM), MAX_LASERS)) {
        let mut pool = LaserPool::new(LaserOwner::Player);
        for &(x, y) in &xs {
            prop_assert!(pool.fire(x, y));
        }
        let before: Vec<_> = pool.iter().copied().collect();

        prop_assert!(!pool.fire(1, 1));
        let after: Vec<_> = pool.iter().copied().collect();
        prop_assert_eq!(before, after);

        let mut p = Player::new();
        p.lasers = pool;
        p.action = Actions::FIRE;
        let cooldown = p.fire_cooldown;
        prop_assert!(!p.try_fire());
        prop_assert_eq!(p.fire_cooldown, cooldown);
    }
}
