// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch closest-point queries using rayon

use super::{Barycentric, ClosestPoint, GeometryError, GeometryResult, Triangle};
use crate::config::KernelConfig;
use crate::utils::math::is_finite_point;
use nalgebra::Point3;
use rayon::prelude::*;

/// Evaluate every query point against one triangle.
///
/// The triangle is validated once up front. Batches smaller than
/// `config.parallel_threshold` run on the calling thread. Output order
/// matches input order.
pub fn closest_batch(
    triangle: &Triangle,
    points: &[Point3<f64>],
    config: &KernelConfig,
) -> GeometryResult<Vec<ClosestPoint>> {
    triangle.validate(config.degenerate_epsilon)?;

    if let Some(index) = points.iter().position(|p| !is_finite_point(p)) {
        return Err(GeometryError::InvalidPoint { index });
    }

    let evaluate = |p: &Point3<f64>| triangle.closest_prevalidated(*p, config);

    if points.len() < config.parallel_threshold {
        points.iter().map(evaluate).collect()
    } else {
        points.par_iter().map(evaluate).collect()
    }
}

/// Barycentric coordinates only, skipping validation and classification
pub fn closest_barycentric_batch(triangle: &Triangle, points: &[Point3<f64>]) -> Vec<Barycentric> {
    points
        .par_iter()
        .map(|p| triangle.closest_barycentric(*p))
        .collect()
}
