//! Renderable snapshot of a simulation
//!
//! The host owns the window and the GPU; it reads these records after each
//! step and draws them. Nothing here feeds back into the physics.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{Barrier, BarrierShape, Body, Simulation, color_of};

/// One body, laid out for direct upload as an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 2],
    pub radius: f32,
    /// Pads `color` to a 16-byte boundary
    pub _pad: f32,
    pub color: [f32; 4],
}

impl BodyInstance {
    pub fn new(body: &Body, max_speed: f32) -> Self {
        Self {
            position: body.pos.to_array(),
            radius: body.radius,
            _pad: 0.0,
            color: color_of(body.vel.length(), max_speed).to_f32(),
        }
    }
}

/// Barrier outline for the host to draw
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BarrierOutline {
    Rect { min: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
}

impl BarrierOutline {
    pub fn new(barrier: &Barrier) -> Self {
        match barrier.shape {
            BarrierShape::Square => BarrierOutline::Rect {
                min: barrier.min(),
                size: Vec2::splat(barrier.extent),
            },
            BarrierShape::Circle => BarrierOutline::Circle {
                center: barrier.center,
                radius: barrier.half_extent(),
            },
        }
    }
}

/// Build one instance per body, colored by speed
pub fn instances(bodies: &[Body], max_speed: f32) -> Vec<BodyInstance> {
    bodies
        .iter()
        .map(|b| BodyInstance::new(b, max_speed))
        .collect()
}

impl Simulation {
    /// Per-body render records for the current state
    pub fn instances(&self) -> Vec<BodyInstance> {
        instances(self.bodies(), self.color_max_speed)
    }

    /// Barrier outline for the current physics
    pub fn barrier_outline(&self) -> BarrierOutline {
        BarrierOutline::new(&self.physics.barrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
    }

    #[test]
    fn test_instances_colored_by_speed() {
        let bodies = vec![
            Body::new(Vec2::new(1.0, 2.0), Vec2::ZERO, 3.0, None).unwrap(),
            Body::new(Vec2::new(4.0, 5.0), Vec2::new(300.0, 0.0), 6.0, None).unwrap(),
        ];
        let out = instances(&bodies, 100.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position, [1.0, 2.0]);
        assert_eq!(out[0].color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(out[1].radius, 6.0);
        assert_eq!(out[1].color, [1.0, 0.0, 0.0, 1.0]);

        let bytes: &[u8] = bytemuck::cast_slice(&out);
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_barrier_outline() {
        let square = Barrier::square(1000, 800, 700).unwrap();
        assert_eq!(
            BarrierOutline::new(&square),
            BarrierOutline::Rect {
                min: Vec2::new(150.0, 50.0),
                size: Vec2::splat(700.0),
            }
        );
        let circle = Barrier::new(1000, 800, 700, BarrierShape::Circle).unwrap();
        assert_eq!(
            BarrierOutline::new(&circle),
            BarrierOutline::Circle {
                center: Vec2::new(500.0, 400.0),
                radius: 350.0,
            }
        );
    }
}
