// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Seeded scatter of query points around a triangle
//! Generates points uniformly inside the cube [-radius, radius]^3

use crate::geometry::{GeometryError, GeometryResult};
use crate::utils::math::lerp;
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scatter sampler for query points
pub struct ScatterSampler {
    radius: f64,
    rng: StdRng,
}

impl ScatterSampler {
    pub const DEFAULT_RADIUS: f64 = 2.0;
    pub const DEFAULT_COUNT: usize = 100;

    /// Create a sampler; `radius` must be positive and finite
    pub fn new(radius: f64, seed: u64) -> GeometryResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }

        Ok(Self {
            radius,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Draw one point
    pub fn next_point(&mut self) -> Point3<f64> {
        let r = self.radius;
        Point3::new(
            lerp(-r, r, self.rng.gen::<f64>()),
            lerp(-r, r, self.rng.gen::<f64>()),
            lerp(-r, r, self.rng.gen::<f64>()),
        )
    }

    /// Draw `count` points
    pub fn sample(&mut self, count: usize) -> Vec<Point3<f64>> {
        (0..count).map(|_| self.next_point()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_within_radius() {
        let mut sampler = ScatterSampler::new(1.5, 7).unwrap();
        let points = sampler.sample(ScatterSampler::DEFAULT_COUNT);

        assert_eq!(points.len(), 100);
        for p in &points {
            assert!(p.coords.iter().all(|c| c.abs() <= 1.5), "{:?} outside cube", p);
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = ScatterSampler::new(2.0, 42).unwrap().sample(16);
        let b = ScatterSampler::new(2.0, 42).unwrap().sample(16);
        let c = ScatterSampler::new(2.0, 43).unwrap().sample(16);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            ScatterSampler::new(0.0, 1),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(ScatterSampler::new(f64::NAN, 1).is_err());
        assert!(ScatterSampler::new(-1.0, 1).is_err());
    }
}
