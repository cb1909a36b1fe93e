//! Data-driven gameplay tuning
//!
//! Every gameplay number lives here rather than in scattered constants, so a
//! session (or a test) can run with a custom balance without recompiling.
//! An optional JSON file overrides the defaults.

use serde::{Deserialize, Serialize};

/// Gameplay parameters for a session
///
/// All distances are in pixels, speeds in pixels per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Window width
    pub window_w: f32,
    /// Window height
    pub window_h: f32,
    /// Number of field platforms
    pub platform_count: usize,
    /// Platform width
    pub platform_w: f32,
    /// Platform height
    pub platform_h: f32,
    /// Minimum per-axis gap between platforms at layout time
    pub min_gap: f32,
    /// Downward scroll speed of field platforms
    pub platform_speed: f32,
    /// Hopper width
    pub hopper_w: f32,
    /// Hopper height
    pub hopper_h: f32,
    /// Upward launch speed applied on a bounce
    pub hopper_jump_speed: f32,
    /// Ascent distance before the apex is reached
    pub jump_height: f32,
    /// Downward speed while falling
    pub gravity: f32,
    /// Horizontal shift per discrete move input
    pub move_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_w: 800.0,
            window_h: 600.0,
            platform_count: 7,
            platform_w: 100.0,
            platform_h: 20.0,
            min_gap: 100.0,
            platform_speed: 40.0,
            hopper_w: 40.0,
            hopper_h: 40.0,
            hopper_jump_speed: 200.0,
            jump_height: 150.0,
            gravity: 140.0,
            move_step: 50.0,
        }
    }
}

/// Failure to produce a usable [`Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// Could not read the override file
    Io(std::io::Error),
    /// Override file is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// Values parsed but describe an unplayable scene
    Invalid(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning file: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults for
    /// omitted fields
    pub fn load(path: &std::path::Path) -> Result<Self, TuningError> {
        let text = std::fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the parameters describe a playable scene
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("window_w", self.window_w),
            ("window_h", self.window_h),
            ("platform_w", self.platform_w),
            ("platform_h", self.platform_h),
            ("hopper_w", self.hopper_w),
            ("hopper_h", self.hopper_h),
            ("hopper_jump_speed", self.hopper_jump_speed),
            ("jump_height", self.jump_height),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.platform_w >= self.window_w || self.platform_h >= self.window_h {
            return Err(TuningError::Invalid(
                "platform does not fit inside the window".into(),
            ));
        }
        if self.hopper_w >= self.window_w || self.hopper_h >= self.window_h {
            return Err(TuningError::Invalid(
                "hopper does not fit inside the window".into(),
            ));
        }
        if self.platform_count == 0 {
            return Err(TuningError::Invalid(
                "platform_count must be at least 1".into(),
            ));
        }
        if self.platform_speed < 0.0 || self.min_gap < 0.0 || self.move_step < 0.0 {
            return Err(TuningError::Invalid(
                "platform_speed, min_gap and move_step must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
