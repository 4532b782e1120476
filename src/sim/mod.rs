//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (ascending index)
//! - No rendering or platform dependencies

pub mod barrier;
pub mod body;
pub mod collision;
pub mod color;
pub mod kinematics;
pub mod placement;
pub mod state;
pub mod stats;
pub mod tick;

pub use barrier::{Barrier, BarrierShape, reflect, resolve_boundary};
pub use body::{Body, NewBodyParams, append, clear};
pub use collision::{Contact, Interaction, contact, resolve_pairs};
pub use color::{Rgba, color_of};
pub use kinematics::{apply_temperature, integrate, speed_for_temperature};
pub use placement::{PlacementBox, generate, initial_population};
pub use state::Simulation;
pub use stats::{SpeedHistory, average_speed};
pub use tick::{Physics, StepReport, step};
