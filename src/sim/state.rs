//! World state and core simulation types
//!
//! Everything the per-frame step mutates lives here, owned by [`World`].
//! Collaborators (renderer, session loop) only read it between steps.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::layout;
use crate::tuning::Tuning;

/// Vertical phase of the hopper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopperState {
    /// Ascending after a bounce; apex check against `initial_y` is active
    JumpingUp,
    /// Descending under gravity; landing checks are active
    FallingDown,
    /// Reserved: the hopper never rests, it bounces immediately on contact
    #[allow(dead_code)]
    OnGround,
}

/// A scrolling field platform
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
}

impl Platform {
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.pos, Vec2::new(tuning.platform_w, tuning.platform_h))
    }
}

/// The player-controlled bouncing entity
#[derive(Debug, Clone, Copy)]
pub struct Hopper {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity, negative while ascending
    pub dy: f32,
    /// y at the start of the current ascent, anchor for the apex check
    pub initial_y: f32,
    pub state: HopperState,
}

impl Hopper {
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.pos, Vec2::new(tuning.hopper_w, tuning.hopper_h))
    }
}

/// Complete session state (deterministic per seed)
#[derive(Debug, Clone)]
pub struct World {
    /// Session seed for reproducibility
    pub seed: u64,
    /// All randomness (layout, recycling) flows through this
    pub rng: Pcg32,
    /// Gameplay parameters the world was built with
    pub tuning: Tuning,
    /// Field platforms in fixed index order
    pub platforms: Vec<Platform>,
    /// The anchor platform; never recycled, centered at setup
    pub base_platform: Platform,
    pub hopper: Hopper,
    /// Cleared when the session ends (floor contact or quit)
    pub running: bool,
    /// Simulation step counter
    pub time_ticks: u64,
}

impl World {
    /// Set up a session: generate the platform field, center the base
    /// platform at the bottom edge and stand the hopper on it, already
    /// ascending.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let platforms = layout::generate(&mut rng, &tuning)
            .into_iter()
            .map(|pos| Platform { pos })
            .collect();

        let base_platform = Platform {
            pos: Vec2::new(
                (tuning.window_w - tuning.platform_w) / 2.0,
                tuning.window_h - tuning.platform_h,
            ),
        };

        let hopper_pos = Vec2::new(
            base_platform.pos.x + (tuning.platform_w - tuning.hopper_w) / 2.0,
            base_platform.pos.y - tuning.hopper_h,
        );
        let hopper = Hopper {
            pos: hopper_pos,
            dy: -tuning.hopper_jump_speed,
            initial_y: hopper_pos.y,
            state: HopperState::JumpingUp,
        };

        Self {
            seed,
            rng,
            tuning,
            platforms,
            base_platform,
            hopper,
            running: true,
            time_ticks: 0,
        }
    }

    /// The floor line: hopper y at or past this ends the session
    pub fn floor_y(&self) -> f32 {
        self.tuning.window_h - self.tuning.hopper_h
    }

    /// Scene rectangles in draw order: field platforms, base platform,
    /// hopper. Later entries occlude earlier ones.
    pub fn scene(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.platforms.len() + 2);
        rects.extend(self.platforms.iter().map(|p| p.rect(&self.tuning)));
        rects.push(self.base_platform.rect(&self.tuning));
        rects.push(self.hopper.rect(&self.tuning));
        rects
    }
}
