// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON scene files: one triangle plus a list of query points

use crate::geometry::{ClosestPoint, Triangle};
use anyhow::{Context, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A triangle and the points to query against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Vertices v0, v1, v2
    pub triangle: [[f64; 3]; 3],
    #[serde(default)]
    pub points: Vec<[f64; 3]>,
}

impl Scene {
    pub fn new(triangle: &Triangle, points: &[Point3<f64>]) -> Self {
        Self {
            triangle: triangle.vertices().map(|v| v.coords.into()),
            points: points.iter().map(|p| p.coords.into()).collect(),
        }
    }

    pub fn triangle(&self) -> Triangle {
        Triangle::from_array(self.triangle)
    }

    pub fn query_points(&self) -> Vec<Point3<f64>> {
        self.points.iter().map(|&p| Point3::from(p)).collect()
    }
}

/// Parse a scene from JSON text
pub fn parse_scene(source: &str) -> Result<Scene> {
    serde_json::from_str(source).context("Failed to parse scene JSON")
}

/// Load a scene from a JSON file
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {:?}", path))?;
    parse_scene(&content).with_context(|| format!("Invalid scene file: {:?}", path))
}

/// Serialize results as a pretty-printed JSON array
pub fn results_to_json(results: &[ClosestPoint]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results")
}

/// Write results to a JSON file
pub fn write_results(path: impl AsRef<Path>, results: &[ClosestPoint]) -> Result<()> {
    let path = path.as_ref();
    let json = results_to_json(results)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write results: {:?}", path))?;
    Ok(())
}
