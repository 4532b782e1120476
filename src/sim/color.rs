//! Speed-to-color ramp (slow = blue, fast = red)

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized float color for GPU upload
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Map a speed onto a blue-to-red ramp.
///
/// `speed / max_speed` is clamped to [0, 1]; channels truncate toward zero.
/// A non-positive `max_speed` maps everything to full red except a body at rest.
pub fn color_of(speed: f32, max_speed: f32) -> Rgba {
    let ratio = if max_speed > 0.0 {
        (speed / max_speed).clamp(0.0, 1.0)
    } else if speed > 0.0 {
        1.0
    } else {
        0.0
    };
    // NaN speed falls through clamp as NaN; `as u8` saturates it to 0
    let red = (255.0 * ratio) as u8;
    let blue = (255.0 * (1.0 - ratio)) as u8;
    Rgba::new(red, 0, blue, 255)
}
