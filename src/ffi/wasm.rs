// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen
//!
//! Coordinates cross the boundary as flat `Float64Array`s of 12 values:
//! v0, v1, v2 and the query point, each as x, y, z.

use crate::geometry::Triangle;
use nalgebra::Point3;
use wasm_bindgen::prelude::*;

/// Split 12 flat coordinates into a triangle and a query point
fn split_coords(coords: &[f64]) -> Option<(Triangle, Point3<f64>)> {
    if coords.len() != 12 {
        return None;
    }

    let point = |i: usize| Point3::new(coords[i], coords[i + 1], coords[i + 2]);
    Some((Triangle::new(point(0), point(3), point(6)), point(9)))
}

/// Closest barycentric coordinate `[u, v, w]`
#[wasm_bindgen]
pub fn closest_barycentric(coords: &[f64]) -> Result<Vec<f64>, JsValue> {
    let (triangle, p) = split_coords(coords)
        .ok_or_else(|| JsValue::from_str("expected 12 coordinates: v0, v1, v2, point"))?;

    Ok(triangle.closest_barycentric(p).to_array().to_vec())
}

/// Closest point `[x, y, z]` on the triangle
#[wasm_bindgen]
pub fn closest_point(coords: &[f64]) -> Result<Vec<f64>, JsValue> {
    let (triangle, p) = split_coords(coords)
        .ok_or_else(|| JsValue::from_str("expected 12 coordinates: v0, v1, v2, point"))?;

    let closest = triangle.closest_point(p);
    Ok(vec![closest.x, closest.y, closest.z])
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
