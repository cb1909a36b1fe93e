//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the world
//! - Fixed sub-step order within a frame
//! - Stable platform index order (set at layout time, used by recycling)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use layout::generate;
pub use state::{Hopper, HopperState, Platform, World};
pub use tick::{TickInput, tick};
