//! Per-frame simulation step
//!
//! Order within one step:
//! 1. Integrate every body
//! 2. Reflect every body off the barrier
//! 3. Resolve every unordered pair (ascending `i`, then `j > i`)
//! 4. Force speeds from temperature, when enabled

use serde::{Deserialize, Serialize};

use super::barrier::{Barrier, resolve_boundary};
use super::body::Body;
use super::collision::{Interaction, resolve_pairs};
use super::kinematics::{apply_temperature, integrate};

/// Fixed physical rules for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub barrier: Barrier,
    pub interaction: Interaction,
    /// Force each body's speed from its temperature after collisions
    pub temperature_model: bool,
}

impl Physics {
    pub fn new(barrier: Barrier, interaction: Interaction) -> Self {
        Self {
            barrier,
            interaction,
            temperature_model: false,
        }
    }

    pub fn with_temperature(mut self, enabled: bool) -> Self {
        self.temperature_model = enabled;
        self
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bodies that touched the barrier
    pub wall_hits: usize,
    /// Pairs that were overlapping
    pub contacts: usize,
}

/// Advance `bodies` by `dt` seconds in place.
///
/// # Panics
/// If `dt` is negative or not finite.
pub fn step(bodies: &mut [Body], dt: f32, physics: &Physics) -> StepReport {
    assert!(
        dt.is_finite() && dt >= 0.0,
        "dt must be finite and non-negative, got {dt}"
    );

    let mut report = StepReport::default();

    for body in bodies.iter_mut() {
        integrate(body, dt);
    }

    for body in bodies.iter_mut() {
        if resolve_boundary(body, &physics.barrier) {
            report.wall_hits += 1;
        }
    }

    report.contacts = resolve_pairs(bodies, &physics.interaction);

    for body in bodies.iter_mut() {
        if physics.temperature_model {
            apply_temperature(body);
        } else {
            body.refresh_speed();
        }
    }

    report
}
