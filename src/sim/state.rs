//! Simulation state
//!
//! Owns the body population exclusively. Hosts mutate it only between
//! steps, through `insert`/`append`/`remove`/`clear`, and read it back for
//! drawing through `bodies()`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, NewBodyParams, append, clear};
use super::placement;
use super::stats::{SpeedHistory, average_speed};
use super::tick::{Physics, StepReport, step};
use crate::consts::{BODY_RADIUS, COLOR_MAX_SPEED, MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::{Error, Result};
use crate::settings::Settings;

/// A running simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Fixed rules (barrier, interaction, temperature model)
    pub physics: Physics,
    /// Speed drawn as full red
    pub color_max_speed: f32,
    /// Radius of generated bodies
    pub body_radius: f32,
    /// Per-step average speed samples
    pub history: SpeedHistory,
    /// Simulated seconds elapsed
    pub time: f64,
    /// Steps taken
    pub frames: u64,
    bodies: Vec<Body>,
    rng: Pcg32,
    accumulator: f32,
}

impl Simulation {
    /// Build a simulation and its initial population from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let physics = Physics::new(settings.barrier()?, settings.interaction)
            .with_temperature(settings.temperature_model);

        let mut sim = Self::empty(physics, seed);
        sim.color_max_speed = settings.color_max_speed;
        sim.body_radius = settings.body_radius;
        sim.respawn(settings.initial_count)?;

        log::info!(
            "Simulation initialized with seed {}: {} bodies, {:?}",
            seed,
            sim.bodies.len(),
            settings.interaction
        );
        Ok(sim)
    }

    /// A simulation with no bodies
    pub fn empty(physics: Physics, seed: u64) -> Self {
        Self {
            seed,
            physics,
            color_max_speed: COLOR_MAX_SPEED,
            body_radius: BODY_RADIUS,
            history: SpeedHistory::default(),
            time: 0.0,
            frames: 0,
            bodies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            accumulator: 0.0,
        }
    }

    /// A simulation over a caller-built population
    pub fn with_bodies(physics: Physics, bodies: Vec<Body>) -> Self {
        let mut sim = Self::empty(physics, 0);
        sim.bodies = bodies;
        sim
    }

    /// Current population, in stable order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Replace the population with `count` freshly placed bodies
    pub fn respawn(&mut self, count: usize) -> Result<()> {
        self.bodies = placement::generate(
            count,
            &self.physics.barrier,
            self.body_radius,
            self.physics.temperature_model,
            &mut self.rng,
        )?;
        self.history.clear();
        log::info!("Spawned {} bodies (requested {})", self.bodies.len(), count);
        Ok(())
    }

    /// Insert a body built from user parameters. Returns its index.
    pub fn insert(&mut self, params: &NewBodyParams) -> Result<usize> {
        let body = Body::from_params(params)?;
        log::debug!("Inserting body at {:?} with velocity {:?}", body.pos, body.vel);
        Ok(self.append(body))
    }

    /// Append an already-built body. Returns its index.
    pub fn append(&mut self, body: Body) -> usize {
        append(&mut self.bodies, body);
        self.bodies.len() - 1
    }

    /// Remove one body, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Result<Body> {
        if index >= self.bodies.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.bodies.len(),
            });
        }
        log::debug!("Removing body {}", index);
        Ok(self.bodies.remove(index))
    }

    /// Remove every body
    pub fn clear(&mut self) {
        log::info!("Cleared {} bodies", self.bodies.len());
        clear(&mut self.bodies);
    }

    /// Advance by exactly `dt` seconds and record the average speed.
    ///
    /// # Panics
    /// If `dt` is negative or not finite.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let report = step(&mut self.bodies, dt, &self.physics);
        self.time += dt as f64;
        self.frames += 1;
        self.history.record(self.average_speed());
        report
    }

    /// Feed a frame's wall-clock time through the fixed-timestep accumulator.
    ///
    /// Runs whole `SIM_DT` steps, at most `MAX_SUBSTEPS` per call; the frame
    /// time is clamped to `MAX_FRAME_DT`. Returns the number of steps taken.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Mean speed of the current population (0.0 when empty)
    pub fn average_speed(&self) -> f32 {
        average_speed(&self.bodies)
    }
}
