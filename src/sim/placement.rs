//! Random non-overlapping initial population
//!
//! Candidates are rejection-sampled inside an inner box covering 90% of the
//! barrier, inset by the body radius. A candidate closer than 1.1 diameters to
//! an already placed body is resampled; after too many failures that body is
//! skipped, so the population can come out smaller than requested.

use glam::Vec2;
use rand::Rng;

use super::barrier::{Barrier, BarrierShape};
use super::body::Body;
use crate::consts::{
    MAX_BODY_COUNT, MAX_TEMPERATURE, PLACEMENT_FILL, PLACEMENT_MAX_ATTEMPTS, PLACEMENT_MAX_VELOCITY,
    PLACEMENT_SPACING,
};
use crate::error::{Error, Result};

/// Axis-aligned region that body centers are sampled from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlacementBox {
    /// Inner placement box for bodies of `radius` inside `barrier`.
    ///
    /// For a circular barrier the box is inscribed in the filled disc.
    pub fn new(barrier: &Barrier, radius: f32) -> Self {
        let mut half = barrier.extent * PLACEMENT_FILL / 2.0;
        if barrier.shape == BarrierShape::Circle {
            half /= std::f32::consts::SQRT_2;
        }
        let inset = Vec2::splat(half - radius);
        Self {
            min: barrier.center - inset,
            max: barrier.center + inset,
        }
    }

    /// Whether `pos` lies in the box (with `tolerance` slack)
    pub fn contains(&self, pos: Vec2, tolerance: f32) -> bool {
        pos.cmpge(self.min - Vec2::splat(tolerance)).all()
            && pos.cmple(self.max + Vec2::splat(tolerance)).all()
    }

    fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        let t = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
        self.min + (self.max - self.min) * t
    }
}

/// Generate up to `count` non-overlapping bodies of `radius` inside `barrier`.
///
/// Velocity components are uniform in [-100, 100]. With `with_temperature`
/// each body also gets a temperature uniform in [0, 100].
pub fn generate(
    count: usize,
    barrier: &Barrier,
    radius: f32,
    with_temperature: bool,
    rng: &mut impl Rng,
) -> Result<Vec<Body>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidParam("body radius must be finite and > 0".into()));
    }
    if count > MAX_BODY_COUNT {
        return Err(Error::InvalidParam(format!(
            "body count {} exceeds the limit of {}",
            count, MAX_BODY_COUNT
        )));
    }
    let area = PlacementBox::new(barrier, radius);
    if area.min.cmpgt(area.max).any() {
        return Err(Error::InvalidParam(format!(
            "body radius {} too large for barrier extent {}",
            radius, barrier.extent
        )));
    }

    let min_distance = 2.0 * radius * PLACEMENT_SPACING;
    let mut bodies: Vec<Body> = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(pos) = find_free_spot(&bodies, &area, min_distance, rng) else {
            continue;
        };

        let vel = Vec2::new(
            rng.random_range(-PLACEMENT_MAX_VELOCITY..=PLACEMENT_MAX_VELOCITY),
            rng.random_range(-PLACEMENT_MAX_VELOCITY..=PLACEMENT_MAX_VELOCITY),
        );
        let temperature = with_temperature.then(|| rng.random_range(0.0..=MAX_TEMPERATURE));

        bodies.push(Body::new(pos, vel, radius, temperature)?);
    }

    if bodies.len() < count {
        log::warn!(
            "Placed {} of {} bodies (no free spot after {} attempts)",
            bodies.len(),
            count,
            PLACEMENT_MAX_ATTEMPTS
        );
    }

    Ok(bodies)
}

/// Generate a square-barrier population from raw window and barrier dimensions
pub fn initial_population(
    count: usize,
    window_width: u32,
    window_height: u32,
    barrier_extent: u32,
    body_radius: f32,
    rng: &mut impl Rng,
) -> Result<Vec<Body>> {
    let barrier = Barrier::square(window_width, window_height, barrier_extent)?;
    generate(count, &barrier, body_radius, false, rng)
}

fn find_free_spot(
    placed: &[Body],
    area: &PlacementBox,
    min_distance: f32,
    rng: &mut impl Rng,
) -> Option<Vec2> {
    (0..PLACEMENT_MAX_ATTEMPTS)
        .map(|_| area.sample(rng))
        .find(|&candidate| {
            // Coincident samples (distance 0) count as overlapping
            placed
                .iter()
                .all(|b| candidate.distance(b.pos) >= min_distance)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_placement_box() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let area = PlacementBox::new(&barrier, 10.0);
        // 0.9 * 700 = 630, half 315, inset by 10
        assert_eq!(area.min, Vec2::new(195.0, 95.0));
        assert_eq!(area.max, Vec2::new(805.0, 705.0));
    }

    #[test]
    fn test_generate_spacing_and_bounds() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        let bodies = generate(5, &barrier, 10.0, false, &mut rng).unwrap();
        assert_eq!(bodies.len(), 5);

        let area = PlacementBox::new(&barrier, 10.0);
        for (i, a) in bodies.iter().enumerate() {
            assert!(area.contains(a.pos, 1e-3));
            assert!(a.vel.x.abs() <= 100.0 && a.vel.y.abs() <= 100.0);
            assert!(a.temperature.is_none());
            for b in &bodies[i + 1..] {
                assert!(a.pos.distance(b.pos) >= 22.0 - 1e-3);
            }
        }
    }

    #[test]
    fn test_circle_box_is_inscribed() {
        let barrier = Barrier::new(1000, 800, 700, BarrierShape::Circle).unwrap();
        let area = PlacementBox::new(&barrier, 3.0);
        let corner = area.max;
        assert!(barrier.contains(corner, 3.0, 1e-3));
        let mut rng = Pcg32::seed_from_u64(5);
        for b in generate(100, &barrier, 3.0, false, &mut rng).unwrap() {
            assert!(barrier.contains(b.pos, b.radius, 1e-3));
        }
    }

    #[test]
    fn test_generate_with_temperature() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let bodies = generate(20, &barrier, 3.0, true, &mut rng).unwrap();
        assert_eq!(bodies.len(), 20);
        for b in &bodies {
            let t = b.temperature.unwrap();
            assert!((0.0..=100.0).contains(&t));
        }
    }

    #[test]
    fn test_crowded_barrier_skips_bodies() {
        // Inner box is 90 - 2*10 = 70 wide: at most a handful of 22-spaced bodies fit
        let barrier = Barrier::square(200, 200, 100).unwrap();
        let mut rng = Pcg32::seed_from_u64(11);
        let bodies = generate(200, &barrier, 10.0, false, &mut rng).unwrap();
        assert!(!bodies.is_empty());
        assert!(bodies.len() < 200);
    }

    #[test]
    fn test_same_seed_same_population() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let a = generate(50, &barrier, 3.0, false, &mut Pcg32::seed_from_u64(42)).unwrap();
        let b = generate(50, &barrier, 3.0, false, &mut Pcg32::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(generate(5, &barrier, 0.0, false, &mut rng).is_err());
        assert!(generate(5, &barrier, 400.0, false, &mut rng).is_err());
    }

    #[test]
    fn test_initial_population() {
        let mut rng = Pcg32::seed_from_u64(9);
        let bodies = initial_population(30, 1000, 800, 700, 3.0, &mut rng).unwrap();
        assert_eq!(bodies.len(), 30);
        assert!(initial_population(30, 1000, 800, 0, 3.0, &mut rng).is_err());
    }

    #[test]
    fn test_rejects_oversized_count() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        let err = generate(usize::MAX / 2, &barrier, 3.0, false, &mut rng).unwrap_err();
        assert!(err.to_string().contains("body count"));
        assert!(generate(MAX_BODY_COUNT + 1, &barrier, 3.0, false, &mut rng).is_err());
    }

    #[test]
    fn test_zero_count() {
        let barrier = Barrier::square(1000, 800, 700).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(generate(0, &barrier, 3.0, false, &mut rng).unwrap().is_empty());
    }
}
