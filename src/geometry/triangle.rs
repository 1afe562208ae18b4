// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle value type and validated closest-point queries

use super::closest::{closest_barycentric, closest_barycentric_with, ClosestPoint, FallbackStrategy};
use super::robust_predicates::{classify_point_triangle, max_edge_length, triangle_area};
use super::{Barycentric, GeometryError, GeometryResult};
use crate::config::KernelConfig;
use crate::utils::math::is_finite_point;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle defined by three ordered vertices
///
/// Vertex order fixes the orientation of [`Triangle::normal`]; it does not
/// change which point is closest to a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v0: Point3<f64>,
    pub v1: Point3<f64>,
    pub v2: Point3<f64>,
}

impl Triangle {
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn from_array(vertices: [[f64; 3]; 3]) -> Self {
        let [a, b, c] = vertices;
        Self::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    pub fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unnormalized normal `cross(v1 - v2, v2 - v0)`
    pub fn normal(&self) -> Vector3<f64> {
        let e0 = self.v2 - self.v0;
        let e2 = self.v1 - self.v2;
        e2.cross(&e0)
    }

    /// Unit normal, or `None` for a zero-area triangle
    pub fn unit_normal(&self) -> Option<Vector3<f64>> {
        self.normal().try_normalize(f64::EPSILON)
    }

    pub fn area(&self) -> f64 {
        triangle_area(&self.v0, &self.v1, &self.v2)
    }

    /// Area divided by the squared longest edge.
    ///
    /// Scale-free: about 0.43 for an equilateral triangle, 0 for collinear
    /// or coincident vertices.
    pub fn shape_ratio(&self) -> f64 {
        let longest = max_edge_length(&self.v0, &self.v1, &self.v2);
        if longest == 0.0 {
            return 0.0;
        }
        self.area() / (longest * longest)
    }

    /// True when [`Triangle::shape_ratio`] is at or below `epsilon`
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.shape_ratio() <= epsilon
    }

    /// Reject non-finite vertices and triangles whose shape ratio is at or
    /// below `epsilon`
    pub fn validate(&self, epsilon: f64) -> GeometryResult<()> {
        if !self.vertices().iter().all(is_finite_point) {
            return Err(GeometryError::NonFiniteInput { what: "triangle vertex" });
        }

        let ratio = self.shape_ratio();
        if ratio <= epsilon {
            return Err(GeometryError::DegenerateTriangle {
                area: self.area(),
                ratio,
            });
        }

        Ok(())
    }

    /// Raw kernel; see [`closest_barycentric`]
    pub fn closest_barycentric(&self, p: Point3<f64>) -> Barycentric {
        closest_barycentric(self.v0, self.v1, self.v2, p)
    }

    pub fn closest_barycentric_with(&self, strategy: FallbackStrategy, p: Point3<f64>) -> Barycentric {
        closest_barycentric_with(strategy, self.v0, self.v1, self.v2, p)
    }

    /// Closest point on the triangle, without validation
    pub fn closest_point(&self, p: Point3<f64>) -> Point3<f64> {
        self.closest_barycentric(p).point(self)
    }

    /// Validated kernel call using the configured strategy
    pub fn try_closest_barycentric(
        &self,
        p: Point3<f64>,
        config: &KernelConfig,
    ) -> GeometryResult<Barycentric> {
        self.validate(config.degenerate_epsilon)?;
        if !is_finite_point(&p) {
            return Err(GeometryError::NonFiniteInput { what: "query point" });
        }

        let bc = self.closest_barycentric_with(config.strategy, p);
        if !bc.is_finite() {
            return Err(GeometryError::NonFiniteResult);
        }
        Ok(bc)
    }

    /// Validated query returning the full [`ClosestPoint`] record
    pub fn closest(&self, p: Point3<f64>, config: &KernelConfig) -> GeometryResult<ClosestPoint> {
        let barycentric = self.try_closest_barycentric(p, config)?;
        Ok(self.describe(p, barycentric, config.tolerance))
    }

    /// Evaluate a query against a triangle already known to be valid
    pub(crate) fn closest_prevalidated(
        &self,
        p: Point3<f64>,
        config: &KernelConfig,
    ) -> GeometryResult<ClosestPoint> {
        let barycentric = self.closest_barycentric_with(config.strategy, p);
        if !barycentric.is_finite() {
            return Err(GeometryError::NonFiniteResult);
        }
        Ok(self.describe(p, barycentric, config.tolerance))
    }

    fn describe(&self, query: Point3<f64>, barycentric: Barycentric, tolerance: f64) -> ClosestPoint {
        let point = barycentric.point(self);
        ClosestPoint {
            query,
            barycentric,
            point,
            distance: (query - point).norm(),
            location: barycentric.location(tolerance),
            side: classify_point_triangle(&self.v0, &self.v1, &self.v2, &query),
        }
    }

    /// Copy of the triangle moved by `offset`
    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self::new(self.v0 + offset, self.v1 + offset, self.v2 + offset)
    }
}
