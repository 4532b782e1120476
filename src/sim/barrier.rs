//! Barrier geometry and wall reflection
//!
//! The barrier is centered in the window. For the square shape the extent is
//! the side length; for the circular shape it is the diameter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::error::{Error, Result};
use crate::window_center;

/// Shape of the confinement region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarrierShape {
    #[default]
    Square,
    Circle,
}

/// Confinement region centered in the window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    pub center: Vec2,
    pub extent: f32,
    pub shape: BarrierShape,
}

impl Barrier {
    /// Build a barrier of `extent` centered in a `window_width` x `window_height` window.
    ///
    /// Errors if any dimension is zero or the barrier does not fit inside the window.
    pub fn new(
        window_width: u32,
        window_height: u32,
        extent: u32,
        shape: BarrierShape,
    ) -> Result<Self> {
        if window_width == 0 || window_height == 0 {
            return Err(Error::InvalidParam("window dimensions must be > 0".into()));
        }
        if extent == 0 {
            return Err(Error::InvalidParam("barrier extent must be > 0".into()));
        }
        if extent > window_width || extent > window_height {
            return Err(Error::InvalidParam(format!(
                "barrier extent {} does not fit in a {}x{} window",
                extent, window_width, window_height
            )));
        }
        Ok(Self {
            center: window_center(window_width, window_height),
            extent: extent as f32,
            shape,
        })
    }

    /// Square barrier, the common case
    pub fn square(window_width: u32, window_height: u32, extent: u32) -> Result<Self> {
        Self::new(window_width, window_height, extent, BarrierShape::Square)
    }

    /// Half the extent (the circle radius, or the half side of the square)
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.extent / 2.0
    }

    /// Top-left corner (left, top edges)
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - Vec2::splat(self.half_extent())
    }

    /// Bottom-right corner (right, bottom edges)
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + Vec2::splat(self.half_extent())
    }

    /// Whether a body of `radius` at `pos` lies fully inside (with `tolerance` slack)
    pub fn contains(&self, pos: Vec2, radius: f32, tolerance: f32) -> bool {
        match self.shape {
            BarrierShape::Square => {
                let lo = self.min() + Vec2::splat(radius - tolerance);
                let hi = self.max() - Vec2::splat(radius - tolerance);
                pos.cmpge(lo).all() && pos.cmple(hi).all()
            }
            BarrierShape::Circle => {
                pos.distance(self.center) + radius <= self.half_extent() + tolerance
            }
        }
    }
}

/// Reflect velocity off a surface with given normal
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Reflect a body off the inner walls of the barrier and pull it back inside.
///
/// Square: each axis is handled on its own, so a corner hit flips both
/// components. Circle: velocity is mirrored about the rim normal. Speed is
/// never changed. Returns whether the body touched a wall.
pub fn resolve_boundary(body: &mut Body, barrier: &Barrier) -> bool {
    match barrier.shape {
        BarrierShape::Square => resolve_square(body, barrier),
        BarrierShape::Circle => resolve_circle(body, barrier),
    }
}

fn resolve_square(body: &mut Body, barrier: &Barrier) -> bool {
    let r = body.radius;
    let lo = barrier.min();
    let hi = barrier.max();
    let mut hit = false;

    // Left/right walls
    if body.pos.x - r < lo.x || body.pos.x + r > hi.x {
        body.vel.x = -body.vel.x;
        body.pos.x = body.pos.x.min(hi.x - r).max(lo.x + r);
        hit = true;
    }

    // Top/bottom walls
    if body.pos.y - r < lo.y || body.pos.y + r > hi.y {
        body.vel.y = -body.vel.y;
        body.pos.y = body.pos.y.min(hi.y - r).max(lo.y + r);
        hit = true;
    }

    hit
}

fn resolve_circle(body: &mut Body, barrier: &Barrier) -> bool {
    let rim = barrier.half_extent();
    let offset = body.pos - barrier.center;
    let dist = offset.length();

    if dist + body.radius <= rim {
        return false;
    }

    let normal = offset.normalize_or_zero();
    if normal == Vec2::ZERO {
        // Body wider than the disc, sitting on the center; nowhere to go
        return true;
    }
    body.vel = reflect(body.vel, normal);
    body.pos = barrier.center + normal * (rim - body.radius).max(0.0);
    true
}
