//! Body entity and user-supplied insertion parameters

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{NEW_BODY_RADIUS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{Error, Result};
use crate::window_center;

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always > 0
    pub radius: f32,
    /// Only meaningful when the temperature model is enabled
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Cached |vel|, refreshed after each integration
    #[serde(default)]
    pub speed: f32,
}

impl Body {
    /// Create a body after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius` is non-positive or any value is NaN/inf.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, temperature: Option<f32>) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !pos.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !vel.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        if temperature.is_some_and(|t| !t.is_finite()) {
            return Err(Error::InvalidParam("temperature must be finite".into()));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            temperature,
            speed: vel.length(),
        })
    }

    /// Build a body from insertion parameters
    pub fn from_params(params: &NewBodyParams) -> Result<Self> {
        Self::new(
            params.position,
            params.velocity,
            params.radius,
            params.temperature,
        )
    }

    /// Recompute the cached speed from the current velocity
    #[inline]
    pub fn refresh_speed(&mut self) {
        self.speed = self.vel.length();
    }
}

/// Parameters for a user-driven insertion.
///
/// Hosts keep one of these behind their input widgets and hand it to
/// [`crate::Simulation::insert`] when the user asks for a new body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBodyParams {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for NewBodyParams {
    fn default() -> Self {
        Self {
            position: window_center(WINDOW_WIDTH, WINDOW_HEIGHT),
            velocity: Vec2::ZERO,
            radius: NEW_BODY_RADIUS,
            temperature: None,
        }
    }
}

/// Append a body to the population
#[inline]
pub fn append(bodies: &mut Vec<Body>, body: Body) {
    bodies.push(body);
}

/// Remove every body
#[inline]
pub fn clear(bodies: &mut Vec<Body>) {
    bodies.clear();
}
