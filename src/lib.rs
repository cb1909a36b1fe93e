//! Sky Hop - a vertically scrolling bounce-platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout generation, physics, collisions, world state)
//! - `platform`: Frame timing / pacing against a monotonic clock
//! - `tuning`: Data-driven gameplay parameters
//!
//! Rendering and input polling are external collaborators: the simulation
//! exposes read-only scene rectangles each frame and consumes discrete
//! input events through [`sim::TickInput`].

pub mod platform;
pub mod sim;
pub mod tuning;

pub use platform::FrameClock;
pub use tuning::Tuning;

/// Frame pacing constants
pub mod consts {
    /// Target frame rate for the session loop
    pub const TARGET_FPS: u32 = 60;
    /// Target frame duration in seconds (~16.6ms at 60 FPS)
    pub const FRAME_TARGET_TIME: f32 = 1.0 / TARGET_FPS as f32;
    /// Maximum delta time fed to the simulation in one frame.
    /// A long stall (debugger, suspended laptop) would otherwise teleport
    /// everything across the window in a single step.
    pub const MAX_FRAME_DT: f32 = 0.1;
}
