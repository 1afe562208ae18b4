// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Barycentric coordinates on a triangle
//!
//! Weights follow a fixed convention: `u` multiplies `v1`, `v` multiplies
//! `v2` and `w` multiplies `v0`.

use super::Triangle;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Triangle vertex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexId {
    V0,
    V1,
    V2,
}

/// Triangle edge identifier, named by its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeId {
    V0V1,
    V1V2,
    V2V0,
}

/// Where a barycentric coordinate lands on the closed triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// All three weights are positive
    Interior,
    /// Exactly one weight is zero
    Edge(EdgeId),
    /// Exactly two weights are zero
    Vertex(VertexId),
    /// Weights are non-finite (degenerate triangle)
    Undefined,
}

/// Barycentric coordinate triple `(u, v, w)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barycentric {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl Barycentric {
    pub fn new(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }

    /// Coordinate of vertex `v0`
    pub fn at_v0() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Coordinate of vertex `v1`
    pub fn at_v1() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Coordinate of vertex `v2`
    pub fn at_v2() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub fn sum(&self) -> f64 {
        self.u + self.v + self.w
    }

    pub fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite() && self.w.is_finite()
    }

    /// Weight applied to the given vertex
    pub fn weight_of(&self, vertex: VertexId) -> f64 {
        match vertex {
            VertexId::V0 => self.w,
            VertexId::V1 => self.u,
            VertexId::V2 => self.v,
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.u, self.v, self.w]
    }

    /// Reconstruct the point `u*v1 + v*v2 + w*v0`
    pub fn reconstruct(
        &self,
        v0: &Point3<f64>,
        v1: &Point3<f64>,
        v2: &Point3<f64>,
    ) -> Point3<f64> {
        Point3::from(v1.coords * self.u + v2.coords * self.v + v0.coords * self.w)
    }

    /// Reconstruct the point on a triangle
    pub fn point(&self, triangle: &Triangle) -> Point3<f64> {
        self.reconstruct(&triangle.v0, &triangle.v1, &triangle.v2)
    }

    /// Classify the coordinate, treating weights at or below `tolerance` as zero
    pub fn location(&self, tolerance: f64) -> Location {
        if !self.is_finite() {
            return Location::Undefined;
        }

        let u_zero = self.u <= tolerance;
        let v_zero = self.v <= tolerance;
        let w_zero = self.w <= tolerance;

        match (u_zero, v_zero, w_zero) {
            (false, false, false) => Location::Interior,
            // A zero weight puts the point on the edge opposite that vertex
            (true, false, false) => Location::Edge(EdgeId::V2V0),
            (false, true, false) => Location::Edge(EdgeId::V0V1),
            (false, false, true) => Location::Edge(EdgeId::V1V2),
            (false, true, true) => Location::Vertex(VertexId::V1),
            (true, false, true) => Location::Vertex(VertexId::V2),
            (true, true, false) => Location::Vertex(VertexId::V0),
            (true, true, true) => Location::Undefined,
        }
    }
}

impl From<Barycentric> for [f64; 3] {
    fn from(bc: Barycentric) -> Self {
        bc.to_array()
    }
}
