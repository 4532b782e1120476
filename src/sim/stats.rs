//! Population speed statistics

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::SPEED_HISTORY_LEN;

/// Mean of |v| over the population (0.0 when empty)
pub fn average_speed(bodies: &[Body]) -> f32 {
    if bodies.is_empty() {
        return 0.0;
    }
    let total: f32 = bodies.iter().map(|b| b.vel.length()).sum();
    total / bodies.len() as f32
}

/// Rolling window of per-frame average speeds (oldest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl Default for SpeedHistory {
    fn default() -> Self {
        Self::with_capacity(SPEED_HISTORY_LEN)
    }
}

impl SpeedHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a sample, evicting the oldest once full
    pub fn record(&mut self, sample: f32) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Samples in recording order, as a contiguous slice for plotting
    pub fn samples(&mut self) -> &[f32] {
        self.samples.make_contiguous()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_average_speed_empty_is_zero() {
        assert_eq!(average_speed(&[]), 0.0);
    }

    #[test]
    fn test_average_speed() {
        let bodies = vec![
            Body::new(Vec2::ZERO, Vec2::new(3.0, 4.0), 1.0, None).unwrap(),
            Body::new(Vec2::ZERO, Vec2::new(0.0, 15.0), 1.0, None).unwrap(),
        ];
        assert!((average_speed(&bodies) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = SpeedHistory::with_capacity(3);
        for s in [1.0, 2.0, 3.0, 4.0] {
            history.record(s);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.samples(), &[2.0, 3.0, 4.0]);
        assert_eq!(history.latest(), Some(4.0));
    }

    #[test]
    fn test_history_default_capacity() {
        let mut history = SpeedHistory::default();
        for i in 0..(SPEED_HISTORY_LEN + 10) {
            history.record(i as f32);
        }
        assert_eq!(history.len(), SPEED_HISTORY_LEN);
        assert_eq!(history.iter().next(), Some(10.0));
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = SpeedHistory::with_capacity(0);
        history.record(1.0);
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
