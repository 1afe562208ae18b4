// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tribary Triangle Kernel
//!
//! Closest point on a triangle to an arbitrary query point, returned as
//! barycentric coordinates `(U, V, W)` with the closest point equal to
//! `U * v1 + V * v2 + W * v0`.

pub mod cli;
pub mod config;
pub mod geometry;
pub mod io;
pub mod sampling;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use config::KernelConfig;
pub use geometry::{
    closest_barycentric, closest_barycentric_voronoi, closest_batch, Barycentric, ClosestPoint,
    EdgeId, FallbackStrategy, GeometryError, GeometryResult, Location, Triangle, VertexId,
};
pub use io::{load_scene, parse_scene, write_results, Scene};
pub use sampling::ScatterSampler;

use anyhow::{Context, Result};
use std::path::Path;

/// Evaluate every query point of a scene file
pub fn evaluate_scene(path: impl AsRef<Path>, config: &KernelConfig) -> Result<Vec<ClosestPoint>> {
    let scene = load_scene(path.as_ref())?;
    closest_batch(&scene.triangle(), &scene.query_points(), config)
        .with_context(|| format!("Failed to evaluate scene: {:?}", path.as_ref()))
}

/// Scatter `count` seeded points around a triangle and evaluate them
pub fn scatter(
    triangle: &Triangle,
    radius: f64,
    count: usize,
    seed: u64,
    config: &KernelConfig,
) -> Result<Vec<ClosestPoint>> {
    let points = ScatterSampler::new(radius, seed)?.sample(count);
    let results = closest_batch(triangle, &points, config)?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_basic_query() {
        let bc = closest_barycentric(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 10.0),
        );
        assert_eq!(bc, Barycentric::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_scatter_harness() {
        // Same triangle the interactive harness starts from
        let triangle = Triangle::from_array([
            [-1.0, -1.3, 0.0],
            [1.0, -1.0, 0.0],
            [-1.0, 1.0, 0.0],
        ]);
        let results = scatter(&triangle, 2.0, 100, 1, &KernelConfig::default()).unwrap();

        assert_eq!(results.len(), 100);
        for r in &results {
            assert!((r.barycentric.sum() - 1.0).abs() < 1e-9);
        }
    }
}
