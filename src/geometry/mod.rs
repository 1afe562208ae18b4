// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - triangle closest-point kernel and supporting types

mod barycentric;
mod batch;
mod closest;
mod error;
mod robust_predicates;
mod triangle;

pub use barycentric::{Barycentric, EdgeId, Location, VertexId};
pub use batch::{closest_barycentric_batch, closest_batch};
pub use closest::{
    closest_barycentric, closest_barycentric_voronoi, closest_barycentric_with, ClosestPoint,
    FallbackStrategy,
};
pub use error::{GeometryError, GeometryResult};
pub use robust_predicates::{classify_point_triangle, oriented_volume, triangle_area, PlaneClassification};
pub use triangle::Triangle;
