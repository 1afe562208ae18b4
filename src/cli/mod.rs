// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for the tribary binary

pub mod reporter;

pub use reporter::Reporter;

use nalgebra::Point3;

/// Parse a point written as `x,y,z`
pub fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let coords = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate '{}': {}", part.trim(), e))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    match coords.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected 3 comma-separated coordinates, got {}", coords.len())),
    }
}
