//! Position integration and temperature-driven speed

use glam::Vec2;

use super::body::Body;
use crate::consts::{MAX_TEMPERATURE, MAX_THERMAL_SPEED};
use crate::remap;

/// Advance a body by one explicit Euler step and refresh its cached speed
#[inline]
pub fn integrate(body: &mut Body, dt: f32) {
    body.pos += body.vel * dt;
    body.refresh_speed();
}

/// Speed imposed by a temperature, linear over [0, MAX_TEMPERATURE] -> [0, MAX_THERMAL_SPEED].
///
/// Temperatures outside the range are clamped first.
#[inline]
pub fn speed_for_temperature(temperature: f32) -> f32 {
    let t = temperature.clamp(0.0, MAX_TEMPERATURE);
    remap(t, 0.0, MAX_TEMPERATURE, 0.0, MAX_THERMAL_SPEED)
}

/// Force a body's speed from its temperature, keeping its heading.
///
/// Bodies with no temperature are left alone. A body at rest is sent along +x.
pub fn apply_temperature(body: &mut Body) {
    let Some(temperature) = body.temperature else {
        return;
    };
    let angle = body.vel.y.atan2(body.vel.x);
    body.vel = Vec2::from_angle(angle) * speed_for_temperature(temperature);
    body.refresh_speed();
}
