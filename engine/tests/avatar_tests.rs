//! Avatar Tests - Movement, Rotation, and Animation Edges
//!
//! End-to-end tests for the avatar controller driven through the public API:
//! keyboard snapshots in, position/rotation/clip state out.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;
use portfolio_engine::animation::{AnimationMixer, Clip};
use portfolio_engine::avatar::AvatarController;
use portfolio_engine::avatar::controller::{
    IDLE_CLIP, MOVEMENT_SPEED, ROTATION_SMOOTHING, WALK_CLIP, WALK_PLAYBACK_RATE,
};
use portfolio_engine::input::MovementKeys;
use portfolio_engine::physics::{Collidable, CollidableId, CollidableSet, CollisionProber};

fn test_mixer() -> AnimationMixer {
    AnimationMixer::new(vec![Clip::new(IDLE_CLIP), Clip::new(WALK_CLIP)])
}

fn forward_keys() -> MovementKeys {
    MovementKeys {
        forward: true,
        ..Default::default()
    }
}

// ============================================================================
// End-to-End Movement Tests
// ============================================================================

#[test]
fn test_three_forward_frames_free_space() {
    let mut avatar = AvatarController::new();
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let set = CollidableSet::new();

    for frame in 0..3 {
        avatar.update(&forward_keys(), &prober, &set, &mut mixer);
        let expected_z = -MOVEMENT_SPEED * (frame + 1) as f32;
        assert!(
            (avatar.position().z - expected_z).abs() < 1e-5,
            "Frame {}: expected z={}, got {}",
            frame,
            expected_z,
            avatar.position().z
        );
    }

    assert_eq!(avatar.position().x, 0.0);
    assert_eq!(avatar.target_rotation_y(), PI);
    assert_eq!(mixer.active_clip(), Some(WALK_CLIP));
    assert_eq!(
        mixer.clip(WALK_CLIP).unwrap().playback_rate,
        WALK_PLAYBACK_RATE
    );
}

#[test]
fn test_obstacle_pins_position_until_direction_changes() {
    let mut avatar = AvatarController::new();
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let mut set = CollidableSet::new();
    // Wall directly ahead, inside the forward probe's reach from the origin
    set.register(
        CollidableId(1),
        Collidable::new(Vec3::new(-2.0, 0.0, -1.0), Vec3::new(2.0, 2.0, -0.8)),
    );

    for _ in 0..10 {
        avatar.update(&forward_keys(), &prober, &set, &mut mixer);
        assert_eq!(
            avatar.position(),
            Vec3::ZERO,
            "Avatar must stay pinned at origin while pushing into the wall"
        );
    }

    // Pinned, but still "moving" as far as input and animation are concerned
    assert!(avatar.is_moving());
    assert_eq!(mixer.active_clip(), Some(WALK_CLIP));

    // Turning around walks away freely
    let back = MovementKeys {
        backward: true,
        ..Default::default()
    };
    avatar.update(&back, &prober, &set, &mut mixer);
    assert!((avatar.position().z - MOVEMENT_SPEED).abs() < 1e-6);
}

#[test]
fn test_rollback_restores_frame_start_exactly() {
    let mut avatar = AvatarController::with_position(Vec3::new(0.3, 0.0, -1.7));
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let mut set = CollidableSet::new();
    set.register(
        CollidableId(1),
        Collidable::new(Vec3::new(-2.0, 0.0, -2.6), Vec3::new(2.0, 2.0, -2.4)),
    );

    let before = avatar.position();
    avatar.update(&forward_keys(), &prober, &set, &mut mixer);
    assert_eq!(avatar.position(), before);
    assert_eq!(avatar.previous_position(), before);
}

// ============================================================================
// Rotation Tests
// ============================================================================

#[test]
fn test_facing_angles_per_direction() {
    let avatar = AvatarController::new();

    let cases = [
        (forward_keys(), PI),
        (
            MovementKeys {
                backward: true,
                ..Default::default()
            },
            0.0,
        ),
        (
            MovementKeys {
                left: true,
                ..Default::default()
            },
            -FRAC_PI_2,
        ),
        (
            MovementKeys {
                right: true,
                ..Default::default()
            },
            FRAC_PI_2,
        ),
    ];
    for (keys, angle) in cases {
        let input = avatar.resolve_input(&keys);
        assert_eq!(input.target_rotation_y, angle);
    }
}

#[test]
fn test_rotation_takes_shortest_path_across_pi_boundary() {
    let mut avatar = AvatarController::new();
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let set = CollidableSet::new();

    // Ease the avatar's facing near +pi by holding forward for a while
    for _ in 0..400 {
        avatar.update(&forward_keys(), &prober, &set, &mut mixer);
    }
    let near_pi = avatar.rotation_y();
    assert!((near_pi - PI).abs() < 0.01);

    // Ask for -pi/2: the short way is +pi -> +3pi/2 equivalent, i.e. the
    // rotation keeps increasing instead of swinging back through zero
    let left = MovementKeys {
        left: true,
        ..Default::default()
    };
    avatar.update(&left, &prober, &set, &mut mixer);

    let diff_raw = -FRAC_PI_2 - near_pi;
    let diff_wrapped = diff_raw + TAU;
    let expected = near_pi + diff_wrapped * ROTATION_SMOOTHING;
    assert!(
        (avatar.rotation_y() - expected).abs() < 1e-4,
        "Expected rotation {}, got {}",
        expected,
        avatar.rotation_y()
    );
    assert!(avatar.rotation_y() > near_pi);
}

#[test]
fn test_rotation_approach_is_exponential() {
    let mut avatar = AvatarController::new();
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let set = CollidableSet::new();

    let right = MovementKeys {
        right: true,
        ..Default::default()
    };
    let mut last_gap = (FRAC_PI_2 - avatar.rotation_y()).abs();
    for _ in 0..20 {
        avatar.update(&right, &prober, &set, &mut mixer);
        let gap = (FRAC_PI_2 - avatar.rotation_y()).abs();
        assert!(gap < last_gap, "Gap must shrink every frame");
        assert!(gap > 0.0, "Approach never lands exactly");
        last_gap = gap;
    }
}

// ============================================================================
// Animation Edge Tests
// ============================================================================

#[test]
fn test_held_keys_issue_one_walk_transition() {
    let mut avatar = AvatarController::new();
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let set = CollidableSet::new();

    for _ in 0..30 {
        avatar.update(&forward_keys(), &prober, &set, &mut mixer);
        mixer.advance(1.0 / 60.0);
    }

    // Accumulated clip time proves the clip was never re-reset mid-hold
    let walk_time = mixer.clip(WALK_CLIP).unwrap().time;
    let expected = (1.0 / 60.0) * WALK_PLAYBACK_RATE * 29.0;
    assert!(
        walk_time >= expected - 1e-4,
        "Walk clip restarted mid-hold: time {} < {}",
        walk_time,
        expected
    );
}

#[test]
fn test_release_issues_one_idle_transition() {
    let mut avatar = AvatarController::new();
    let mut mixer = test_mixer();
    let prober = CollisionProber::new();
    let set = CollidableSet::new();

    avatar.update(&forward_keys(), &prober, &set, &mut mixer);
    assert_eq!(mixer.active_clip(), Some(WALK_CLIP));

    let idle = MovementKeys::default();
    for _ in 0..10 {
        avatar.update(&idle, &prober, &set, &mut mixer);
        mixer.advance(1.0 / 60.0);
    }
    assert_eq!(mixer.active_clip(), Some(IDLE_CLIP));

    let idle_time = mixer.clip(IDLE_CLIP).unwrap().time;
    assert!(
        idle_time >= (1.0 / 60.0) * 9.0 - 1e-4,
        "Idle clip restarted mid-rest: time {}",
        idle_time
    );
}

#[test]
fn test_animation_failure_does_not_stop_movement() {
    let mut avatar = AvatarController::new();
    let mut mixer = AnimationMixer::new(vec![]);
    let prober = CollisionProber::new();
    let set = CollidableSet::new();

    for _ in 0..3 {
        avatar.update(&forward_keys(), &prober, &set, &mut mixer);
    }
    assert!((avatar.position().z - (-0.3)).abs() < 1e-5);
}
