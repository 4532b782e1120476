//! Barrier Sim - circular bodies bouncing inside a barrier
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, kinematics, barrier, pair interaction)
//! - `render`: Renderable per-body snapshot for a host renderer
//! - `settings`: Serializable simulation configuration
//! - `error`: Crate error type

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;
pub use sim::{Body, NewBodyParams, Simulation};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame time fed to the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Window dimensions
    pub const WINDOW_WIDTH: u32 = 1000;
    pub const WINDOW_HEIGHT: u32 = 800;

    /// Side length of the square barrier (diameter for the circular one)
    pub const BARRIER_EXTENT: u32 = WINDOW_HEIGHT - 100;

    /// Body defaults
    pub const BODY_RADIUS: f32 = 3.0;
    pub const INITIAL_BODY_COUNT: usize = 1000;
    /// Upper bound on a generated population
    pub const MAX_BODY_COUNT: usize = 100_000;

    /// Placement: inner box is this fraction of the barrier extent
    pub const PLACEMENT_FILL: f32 = 0.9;
    /// Placement: minimum spacing as a multiple of the diameter
    pub const PLACEMENT_SPACING: f32 = 1.1;
    /// Placement: resample attempts before a body is skipped
    pub const PLACEMENT_MAX_ATTEMPTS: u32 = 100;
    /// Placement: initial velocity components are drawn from [-v, v]
    pub const PLACEMENT_MAX_VELOCITY: f32 = 100.0;
    /// Placement: temperature is drawn from [0, MAX_TEMPERATURE]
    pub const MAX_TEMPERATURE: f32 = 100.0;

    /// Speed reached at MAX_TEMPERATURE
    pub const MAX_THERMAL_SPEED: f32 = 200.0;

    /// Repulsion force per unit of overlap
    pub const REPULSION_STRENGTH: f32 = 5.0;

    /// Speed mapped to full red
    pub const COLOR_MAX_SPEED: f32 = 100.0;

    /// Number of average-speed samples kept for plotting
    pub const SPEED_HISTORY_LEN: usize = 50;

    /// Default radius for user-inserted bodies
    pub const NEW_BODY_RADIUS: f32 = 10.0;
}

/// Center of a `width` x `height` window
#[inline]
pub fn window_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// Linear remap of `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`
#[inline]
pub fn remap(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}
