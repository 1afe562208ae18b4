// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closest point on a triangle, expressed as barycentric coordinates
//!
//! The default kernel uses signed tetrahedron volumes against the triangle
//! normal and falls back to a single edge projection when the query
//! projects outside the triangle. Edge tests run in a fixed order (U, then
//! V, then W) and only the first failing test is corrected.

use super::barycentric::{Barycentric, Location};
use super::robust_predicates::PlaneClassification;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to resolve a query that projects outside the triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackStrategy {
    /// Correct only the first failing edge test, in U, V, W order
    #[default]
    FirstFailing,
    /// Resolve all vertex and edge Voronoi regions
    Voronoi,
}

impl FromStr for FallbackStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-failing" | "first_failing" | "firstfailing" => Ok(Self::FirstFailing),
            "voronoi" => Ok(Self::Voronoi),
            other => Err(format!(
                "unknown fallback strategy '{}' (expected first-failing or voronoi)",
                other
            )),
        }
    }
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstFailing => write!(f, "first-failing"),
            Self::Voronoi => write!(f, "voronoi"),
        }
    }
}

/// Closest barycentric coordinate on triangle `(v0, v1, v2)` to `p`.
///
/// Returns `(u, v, w)` such that `u * v1 + v * v2 + w * v0` is the closest
/// point. Total over finite inputs: a degenerate triangle yields NaN weights
/// rather than an error.
pub fn closest_barycentric(
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
    p: Point3<f64>,
) -> Barycentric {
    let d0 = v0 - p;
    let d1 = v1 - p;
    let d2 = v2 - p;
    let e0 = v2 - v0;
    let e1 = v0 - v1;
    let e2 = v1 - v2;
    let ng = e2.cross(&e0);

    // Signed volumes; all non-negative when p projects inside
    let mut u = d2.cross(&d0).dot(&ng);
    let mut v = d0.cross(&d1).dot(&ng);
    let mut w = d1.cross(&d2).dot(&ng);

    if u < 0.0 {
        // Edge v0-v2
        u = 0.0;
        v = (-d0).dot(&e0);
        w = d2.dot(&e0);
    } else if v < 0.0 {
        // Edge v0-v1
        v = 0.0;
        w = (-d1).dot(&e1);
        u = d0.dot(&e1);
    } else if w < 0.0 {
        // Edge v1-v2
        w = 0.0;
        u = (-d2).dot(&e2);
        v = d1.dot(&e2);
    }

    let u = clamp_non_negative(u);
    let v = clamp_non_negative(v);
    let w = clamp_non_negative(w);
    let sum = u + v + w;

    Barycentric::new(u / sum, v / sum, w / sum)
}

/// Closest barycentric coordinate resolving every Voronoi region.
///
/// Same weight convention as [`closest_barycentric`]. Follows the region
/// walk from "Real-Time Collision Detection" (Ericson), so the result is the
/// true closest point even when two edge tests fail.
pub fn closest_barycentric_voronoi(
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
    p: Point3<f64>,
) -> Barycentric {
    let ab = v1 - v0;
    let ac = v2 - v0;
    let ap = p - v0;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return Barycentric::at_v0();
    }

    let bp = p - v1;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return Barycentric::at_v1();
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let t = d1 / (d1 - d3);
        return Barycentric::new(t, 0.0, 1.0 - t);
    }

    let cp = p - v2;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return Barycentric::at_v2();
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let t = d2 / (d2 - d6);
        return Barycentric::new(0.0, t, 1.0 - t);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let t = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return Barycentric::new(1.0 - t, t, 0.0);
    }

    let denom = 1.0 / (va + vb + vc);
    let u = vb * denom;
    let v = vc * denom;
    Barycentric::new(u, v, 1.0 - u - v)
}

/// Dispatch to the kernel selected by `strategy`
pub fn closest_barycentric_with(
    strategy: FallbackStrategy,
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
    p: Point3<f64>,
) -> Barycentric {
    match strategy {
        FallbackStrategy::FirstFailing => closest_barycentric(v0, v1, v2, p),
        FallbackStrategy::Voronoi => closest_barycentric_voronoi(v0, v1, v2, p),
    }
}

/// Keeps NaN intact so degeneracy stays visible in the output
fn clamp_non_negative(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// Full answer to a validated closest-point query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestPoint {
    /// The query point
    pub query: Point3<f64>,
    pub barycentric: Barycentric,
    /// Reconstructed closest point on the triangle
    pub point: Point3<f64>,
    /// Euclidean distance from query to closest point
    pub distance: f64,
    pub location: Location,
    /// Side of the triangle plane the query lies on
    pub side: PlaneClassification,
}
