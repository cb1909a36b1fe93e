//! Per-frame simulation step
//!
//! Fixed sub-step order each frame: platform scroll & recycle, hopper
//! vertical kinematics, landing resolution, horizontal nudges, quit.
//! Deterministic given the world's RNG state, the input and the delta time.

use rand::Rng;

use super::state::{HopperState, World};

/// Discrete input events gathered for one frame
///
/// Horizontal movement is event-driven, not velocity-driven: every key
/// press shifts the hopper by a fixed step regardless of delta time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Net move events this frame, right-positive (two rights and one
    /// left make +1)
    pub nudges: i32,
    /// End the session
    pub quit: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    if !world.running {
        return;
    }
    world.time_ticks += 1;

    scroll_platforms(world, dt);
    step_hopper(world, dt);
    resolve_landing(world, dt);

    // Instantaneous nudge, deliberately not scaled by dt
    world.hopper.pos.x += input.nudges as f32 * world.tuning.move_step;

    if input.quit {
        log::info!("quit requested at tick {}", world.time_ticks);
        world.running = false;
    }
}

/// Drift every field platform downward; recycle the ones that left the
/// window through the bottom edge.
fn scroll_platforms(world: &mut World, dt: f32) {
    let (window_h, window_w) = (world.tuning.window_h, world.tuning.window_w);
    let (platform_w, platform_h) = (world.tuning.platform_w, world.tuning.platform_h);
    let drift = world.tuning.platform_speed * dt;
    let min_gap = world.tuning.min_gap;

    for i in 0..world.platforms.len() {
        world.platforms[i].pos.y += drift;
        if world.platforms[i].pos.y < window_h {
            continue;
        }

        // Back above the visible top with a fresh horizontal spot
        let x = world.rng.random_range(0.0..window_w - platform_w);
        let (earlier, rest) = world.platforms.split_at_mut(i);
        let platform = &mut rest[0];
        platform.pos.y = -platform_h;
        platform.pos.x = respace_against_earlier(x, earlier.iter().map(|p| p.pos.x), min_gap);
        log::debug!("recycled platform {i} to x={:.1}", platform.pos.x);
    }
}

/// Best-effort horizontal spacing for a recycled platform: one pass over
/// the lower-indexed platforms, shifting right by `min_gap` on each clash.
///
/// Not a guarantee. The pass never revisits an already-checked platform
/// after a shift and can push x past the right window edge; the next
/// recycle re-randomizes it anyway.
fn respace_against_earlier(mut x: f32, earlier_xs: impl Iterator<Item = f32>, min_gap: f32) -> f32 {
    for other in earlier_xs {
        if (x - other).abs() < min_gap {
            x += min_gap;
        }
    }
    x
}

/// Vertical kinematics and the terminal floor check
fn step_hopper(world: &mut World, dt: f32) {
    let floor = world.floor_y();
    let hopper = &mut world.hopper;

    match hopper.state {
        HopperState::JumpingUp => {
            hopper.pos.y += hopper.dy * dt;
            // Apex: ascended a full jump height above the bounce point
            if hopper.pos.y <= hopper.initial_y - world.tuning.jump_height {
                hopper.state = HopperState::FallingDown;
            }
        }
        HopperState::FallingDown => {
            hopper.pos.y += world.tuning.gravity * dt;
        }
        HopperState::OnGround => {}
    }

    if hopper.pos.y >= floor {
        log::info!("hopper hit the floor at tick {}", world.time_ticks);
        world.running = false;
    }
}

/// Landing: a falling hopper bounces off the first overlapping platform,
/// and any overlap at all pulls the base platform upward for the frame.
///
/// One scan serves both effects, so the platform that triggers the bounce
/// is always the one that drives the scroll nudge.
fn resolve_landing(world: &mut World, dt: f32) {
    if world.hopper.state != HopperState::FallingDown {
        return;
    }

    if first_overlap(world).is_some() {
        let hopper = &mut world.hopper;
        hopper.dy = -world.tuning.hopper_jump_speed;
        hopper.state = HopperState::JumpingUp;
        // Re-anchor the apex check to this bounce point; without this
        // every apex would still reference the very first ascent
        hopper.initial_y = hopper.pos.y;

        world.base_platform.pos.y -= world.tuning.platform_speed * dt;
    }
}

/// Index of the first (lowest-indexed) platform overlapping the hopper
fn first_overlap(world: &World) -> Option<usize> {
    let hopper_rect = world.hopper.rect(&world.tuning);
    world
        .platforms
        .iter()
        .position(|p| p.rect(&world.tuning).overlaps(&hopper_rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::sim::state::Platform;
    use crate::tuning::Tuning;

    /// Tuning with scrolling frozen, so platform positions can be pinned
    /// exactly in scenario tests.
    fn static_tuning() -> Tuning {
        Tuning {
            platform_speed: 0.0,
            ..Default::default()
        }
    }

    fn world_with_platforms(tuning: Tuning, positions: &[(f32, f32)]) -> World {
        let mut world = World::new(0, tuning);
        world.platforms = positions
            .iter()
            .map(|&(x, y)| Platform {
                pos: Vec2::new(x, y),
            })
            .collect();
        world
    }

    #[test]
    fn test_platforms_scroll_down() {
        let tuning = Tuning {
            platform_speed: 30.0,
            ..Default::default()
        };
        let mut world = world_with_platforms(tuning, &[(100.0, 100.0)]);
        // Park the hopper high up so no landing interferes
        world.hopper.pos.y = -500.0;

        tick(&mut world, &TickInput::default(), 1.0);
        assert_eq!(world.platforms[0].pos.y, 130.0);
    }

    #[test]
    fn test_recycle_resets_above_window() {
        let tuning = Tuning {
            platform_speed: 10.0,
            ..Default::default()
        };
        let (window_h, platform_h, platform_w, window_w) = (
            tuning.window_h,
            tuning.platform_h,
            tuning.platform_w,
            tuning.window_w,
        );
        let mut world = world_with_platforms(tuning, &[(100.0, window_h - 5.0)]);
        world.hopper.pos.y = -500.0;

        tick(&mut world, &TickInput::default(), 1.0);
        // y >= window_h after the drift, so the platform recycles
        assert_eq!(world.platforms[0].pos.y, -platform_h);
        assert!(world.platforms[0].pos.x >= 0.0);
        assert!(world.platforms[0].pos.x < window_w - platform_w);
    }

    fn respace(x: f32, earlier: &[f32], gap: f32) -> f32 {
        respace_against_earlier(x, earlier.iter().copied(), gap)
    }

    #[test]
    fn test_respace_shifts_right_on_clash() {
        // Clash with the first earlier platform, lands clear of the second
        assert_eq!(respace(100.0, &[120.0, 450.0], 100.0), 200.0);
        // No clash at all
        assert_eq!(respace(300.0, &[0.0, 600.0], 100.0), 300.0);
        // A shift can chain into the next unchecked platform
        assert_eq!(respace(100.0, &[120.0, 210.0], 100.0), 300.0);
        // But never revisits one already checked: 200 is still within
        // 100 of the first platform and stays there
        assert_eq!(respace(100.0, &[120.0, 10.0], 100.0), 200.0);
    }

    #[test]
    fn test_apex_flips_to_falling() {
        let mut world = world_with_platforms(static_tuning(), &[]);
        world.hopper.pos.y = 400.0;
        world.hopper.initial_y = 400.0;
        world.hopper.dy = -world.tuning.hopper_jump_speed;
        world.hopper.state = HopperState::JumpingUp;

        // jump_height 150 at 200 px/s: still ascending after 0.5s...
        tick(&mut world, &TickInput::default(), 0.5);
        assert_eq!(world.hopper.state, HopperState::JumpingUp);
        assert_eq!(world.hopper.pos.y, 300.0);

        // ...apex crossed after another 0.5s (y=200 <= 400-150)
        tick(&mut world, &TickInput::default(), 0.5);
        assert_eq!(world.hopper.state, HopperState::FallingDown);

        // Falling is monotonic from here
        let before = world.hopper.pos.y;
        tick(&mut world, &TickInput::default(), 0.1);
        assert!(world.hopper.pos.y > before);
    }

    #[test]
    fn test_bounce_on_first_overlapping_platform() {
        // Hopper at y=300 falling with gravity 20 and dt 1.0 steps to
        // y=320, inside a platform spanning y in [310, 340]
        let tuning = Tuning {
            gravity: 20.0,
            platform_h: 30.0,
            ..static_tuning()
        };
        let mut world = world_with_platforms(tuning, &[(100.0, 310.0)]);
        world.hopper.pos = Vec2::new(110.0, 300.0);
        world.hopper.state = HopperState::FallingDown;
        world.hopper.dy = 0.0;

        tick(&mut world, &TickInput::default(), 1.0);

        assert_eq!(world.hopper.pos.y, 320.0);
        assert_eq!(world.hopper.state, HopperState::JumpingUp);
        assert_eq!(world.hopper.dy, -world.tuning.hopper_jump_speed);
        // Apex anchor re-set to the bounce point
        assert_eq!(world.hopper.initial_y, 320.0);
    }

    #[test]
    fn test_no_bounce_while_jumping_up() {
        let mut world = world_with_platforms(static_tuning(), &[(100.0, 310.0)]);
        world.hopper.pos = Vec2::new(110.0, 330.0);
        world.hopper.initial_y = 330.0;
        world.hopper.dy = -world.tuning.hopper_jump_speed;
        world.hopper.state = HopperState::JumpingUp;

        let base_y = world.base_platform.pos.y;
        tick(&mut world, &TickInput::default(), 0.01);

        // Overlapping while ascending: no landing checks run
        assert_eq!(world.hopper.state, HopperState::JumpingUp);
        assert_eq!(world.base_platform.pos.y, base_y);
    }

    #[test]
    fn test_base_platform_rises_only_on_overlap_frames() {
        let tuning = Tuning {
            gravity: 20.0,
            platform_h: 30.0,
            platform_speed: 5.0,
            ..Default::default()
        };
        let mut world = world_with_platforms(tuning, &[(100.0, 305.0)]);
        world.hopper.pos = Vec2::new(110.0, 300.0);
        world.hopper.state = HopperState::FallingDown;
        world.hopper.dy = 0.0;

        let base_y = world.base_platform.pos.y;
        // Platform drifts to 310, hopper falls to 320: overlap
        tick(&mut world, &TickInput::default(), 1.0);
        assert_eq!(world.base_platform.pos.y, base_y - 5.0);

        // Now ascending: no overlap effect, base stays put
        let base_y = world.base_platform.pos.y;
        tick(&mut world, &TickInput::default(), 1.0);
        assert_eq!(world.base_platform.pos.y, base_y);
    }

    #[test]
    fn test_floor_ends_session_in_both_states() {
        for state in [HopperState::JumpingUp, HopperState::FallingDown] {
            let mut world = world_with_platforms(static_tuning(), &[]);
            world.hopper.pos.y = world.floor_y() + 50.0;
            world.hopper.initial_y = world.hopper.pos.y;
            world.hopper.state = state;
            world.hopper.dy = 0.0;

            tick(&mut world, &TickInput::default(), 0.001);
            assert!(!world.running, "floor must end the session in {state:?}");
        }
    }

    #[test]
    fn test_nudges_are_dt_independent() {
        let mut world = world_with_platforms(static_tuning(), &[]);
        world.hopper.pos.y = 100.0;
        world.hopper.initial_y = 100.0;
        let x = world.hopper.pos.x;

        let input = TickInput {
            nudges: 2,
            ..Default::default()
        };
        tick(&mut world, &input, 0.004);
        assert_eq!(world.hopper.pos.x, x + 2.0 * world.tuning.move_step);

        let input = TickInput {
            nudges: -1,
            ..Default::default()
        };
        tick(&mut world, &input, 0.5);
        assert_eq!(world.hopper.pos.x, x + 1.0 * world.tuning.move_step);
    }

    #[test]
    fn test_quit_clears_running() {
        let mut world = World::new(5, Tuning::default());
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut world, &input, 0.016);
        assert!(!world.running);

        // Further ticks are no-ops
        let ticks = world.time_ticks;
        tick(&mut world, &TickInput::default(), 0.016);
        assert_eq!(world.time_ticks, ticks);
    }

    #[test]
    fn test_session_determinism() {
        let mut a = World::new(12345, Tuning::default());
        let mut b = World::new(12345, Tuning::default());

        let inputs = [
            TickInput::default(),
            TickInput {
                nudges: 1,
                ..Default::default()
            },
            TickInput {
                nudges: -2,
                ..Default::default()
            },
        ];
        for _ in 0..600 {
            for input in &inputs {
                tick(&mut a, input, 0.016);
                tick(&mut b, input, 0.016);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.running, b.running);
        assert_eq!(a.hopper.pos, b.hopper.pos);
        for (pa, pb) in a.platforms.iter().zip(&b.platforms) {
            assert_eq!(pa.pos, pb.pos);
        }
    }
}
