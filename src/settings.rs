//! Simulation settings
//!
//! Everything a host needs to build a [`crate::Simulation`]: window and
//! barrier geometry, population defaults, interaction model, and the
//! parameters used for user-inserted bodies. Stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{Barrier, BarrierShape, Interaction, NewBodyParams};

/// Named starting configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Dense gas with overlap repulsion
    #[default]
    Repulsion,
    /// Equal-radius bodies exchanging velocities on contact
    Swap,
    /// Repulsion with speeds forced from per-body temperature
    Thermal,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Repulsion => "Repulsion",
            Preset::Swap => "Swap",
            Preset::Thermal => "Thermal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "repulsion" | "repel" => Some(Preset::Repulsion),
            "swap" => Some(Preset::Swap),
            "thermal" | "temperature" => Some(Preset::Thermal),
            _ => None,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Geometry ===
    pub window_width: u32,
    pub window_height: u32,
    /// Barrier side length (or diameter for a circle)
    pub barrier_extent: u32,
    pub barrier_shape: BarrierShape,

    // === Population ===
    pub body_radius: f32,
    pub initial_count: usize,
    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,

    // === Physics ===
    pub interaction: Interaction,
    /// Force each body's speed from its temperature every step
    pub temperature_model: bool,

    // === Display ===
    /// Speed rendered as full red
    pub color_max_speed: f32,

    /// Parameters for user-inserted bodies
    pub new_body: NewBodyParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            barrier_extent: BARRIER_EXTENT,
            barrier_shape: BarrierShape::Square,

            body_radius: BODY_RADIUS,
            initial_count: INITIAL_BODY_COUNT,
            seed: None,

            interaction: Interaction::default(),
            temperature_model: false,

            color_max_speed: COLOR_MAX_SPEED,

            new_body: NewBodyParams::default(),
        }
    }
}

impl Settings {
    /// Create settings from a preset (applies preset defaults)
    pub fn from_preset(preset: Preset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a preset (updates interaction-dependent settings)
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Repulsion => {
                self.interaction = Interaction::default();
                self.temperature_model = false;
            }
            Preset::Swap => {
                self.interaction = Interaction::Swap;
                self.temperature_model = false;
            }
            Preset::Thermal => {
                self.interaction = Interaction::default();
                self.temperature_model = true;
                self.color_max_speed = MAX_THERMAL_SPEED;
            }
        }
    }

    /// Barrier described by these settings
    pub fn barrier(&self) -> Result<Barrier> {
        Barrier::new(
            self.window_width,
            self.window_height,
            self.barrier_extent,
            self.barrier_shape,
        )
    }

    /// Check every value a simulation depends on
    pub fn validate(&self) -> Result<()> {
        self.barrier()?;
        if !self.body_radius.is_finite() || self.body_radius <= 0.0 {
            return Err(Error::InvalidParam("body_radius must be finite and > 0".into()));
        }
        if self.body_radius * 2.0 > self.barrier_extent as f32 * PLACEMENT_FILL {
            return Err(Error::InvalidParam(
                "body_radius too large for the barrier".into(),
            ));
        }
        if self.initial_count > MAX_BODY_COUNT {
            return Err(Error::InvalidParam(format!(
                "initial_count must be <= {}",
                MAX_BODY_COUNT
            )));
        }
        if !self.color_max_speed.is_finite() || self.color_max_speed <= 0.0 {
            return Err(Error::InvalidParam(
                "color_max_speed must be finite and > 0".into(),
            ));
        }
        if let Interaction::Repulsion { strength } = self.interaction {
            if !strength.is_finite() || strength < 0.0 {
                return Err(Error::InvalidParam(
                    "repulsion strength must be finite and >= 0".into(),
                ));
            }
        }
        if !self.new_body.radius.is_finite() || self.new_body.radius <= 0.0 {
            return Err(Error::InvalidParam(
                "new_body.radius must be finite and > 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.barrier_extent, 700);
        assert_eq!(settings.initial_count, 1000);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::from_str("SWAP"), Some(Preset::Swap));
        assert_eq!(Preset::from_str("thermal"), Some(Preset::Thermal));
        assert_eq!(Preset::from_str("bogus"), None);
        assert_eq!(Preset::Repulsion.as_str(), "Repulsion");
    }

    #[test]
    fn test_presets() {
        assert_eq!(Settings::from_preset(Preset::Swap).interaction, Interaction::Swap);
        let thermal = Settings::from_preset(Preset::Thermal);
        assert!(thermal.temperature_model);
        assert_eq!(thermal.color_max_speed, MAX_THERMAL_SPEED);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut s = Settings::default();
        s.body_radius = 0.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.barrier_extent = 2000;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.initial_count = usize::MAX / 2;
        assert!(matches!(s.validate(), Err(Error::InvalidParam(_))));

        let mut s = Settings::default();
        s.color_max_speed = 0.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.interaction = Interaction::Repulsion { strength: -1.0 };
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.new_body.radius = -3.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let s = Settings::from_json(r#"{ "initial_count": 12, "interaction": "Swap" }"#).unwrap();
        assert_eq!(s.initial_count, 12);
        assert_eq!(s.interaction, Interaction::Swap);
        assert_eq!(s.window_width, WINDOW_WIDTH);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::from_preset(Preset::Thermal);
        s.seed = Some(99);
        s.barrier_shape = BarrierShape::Circle;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_json_invalid_is_error() {
        assert!(matches!(Settings::from_json("{ nope"), Err(Error::Json(_))));
        assert!(matches!(
            Settings::from_json(r#"{ "body_radius": -1.0 }"#),
            Err(Error::InvalidParam(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Settings::load("/nonexistent/barrier-sim/settings.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("barrier-sim-settings-{}.json", std::process::id()));
        let mut s = Settings::default();
        s.initial_count = 42;
        s.save(&path).unwrap();
        let back = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back.initial_count, 42);
    }
}
