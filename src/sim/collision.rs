//! Body-body overlap detection and response
//!
//! Two interaction models share one O(n²) pass over unordered pairs:
//! - `Swap`: velocities are exchanged outright on contact (equal-radius bodies)
//! - `Repulsion`: a penalty force proportional to overlap depth pushes the pair apart

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::REPULSION_STRENGTH;

/// Pairwise interaction model, chosen when the simulation is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Interaction {
    /// Exchange velocity vectors on contact
    Swap,
    /// Push apart with `overlap * strength` along the center line
    Repulsion { strength: f32 },
}

impl Default for Interaction {
    fn default() -> Self {
        Interaction::Repulsion {
            strength: REPULSION_STRENGTH,
        }
    }
}

/// Contact between two overlapping bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from `a` toward `b`
    pub normal: Vec2,
    /// Sum of radii minus center distance (> 0)
    pub overlap: f32,
}

/// Check whether two bodies overlap.
///
/// Coincident centers get a fixed +X normal so the response never divides by zero.
pub fn contact(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let reach = a.radius + b.radius;

    if distance >= reach {
        return None;
    }

    let normal = if distance > 0.0 { delta / distance } else { Vec2::X };
    Some(Contact {
        normal,
        overlap: reach - distance,
    })
}

impl Interaction {
    /// Resolve one pair in place. Returns whether the pair was in contact.
    pub fn resolve_pair(&self, a: &mut Body, b: &mut Body) -> bool {
        let Some(hit) = contact(a, b) else {
            return false;
        };

        match *self {
            Interaction::Swap => {
                std::mem::swap(&mut a.vel, &mut b.vel);
            }
            Interaction::Repulsion { strength } => {
                let impulse = hit.normal * (hit.overlap * strength);
                a.vel -= impulse;
                b.vel += impulse;
            }
        }
        true
    }
}

/// Resolve every unordered pair `(i, j)` with `i < j`, in ascending order.
///
/// Later pairs see velocities already updated by earlier ones. Returns the
/// number of pairs that were in contact.
pub fn resolve_pairs(bodies: &mut [Body], interaction: &Interaction) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if interaction.resolve_pair(a, b) {
                contacts += 1;
            }
        }
    }
    contacts
}
