// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for validated triangle queries

use thiserror::Error;

/// Result type for validated geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised by the validated query API.
///
/// The raw kernel never returns these; it reports degeneracy only through
/// non-finite coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Triangle shape ratio (area over squared longest edge) is at or
    /// below the degeneracy epsilon.
    #[error("degenerate triangle (area {area:e}, shape ratio {ratio:e})")]
    DegenerateTriangle {
        /// Computed area of the rejected triangle.
        area: f64,
        /// Area divided by the squared longest edge.
        ratio: f64,
    },

    /// An input coordinate is NaN or infinite.
    #[error("non-finite {what}")]
    NonFiniteInput {
        /// Which input was rejected.
        what: &'static str,
    },

    /// The kernel returned NaN or infinite weights.
    #[error("kernel produced a non-finite barycentric coordinate")]
    NonFiniteResult,

    /// Scatter radius is not a positive finite number.
    #[error("invalid scatter radius: {0}")]
    InvalidRadius(f64),

    /// A query point in a batch is not finite.
    #[error("query point {index} is not finite")]
    InvalidPoint {
        /// Position of the point in the batch.
        index: usize,
    },
}
