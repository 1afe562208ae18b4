// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene file, batch evaluation and configuration tests

use anyhow::Result;
use nalgebra::Point3;
use std::io::Write;
use tempfile::NamedTempFile;
use tribary::{
    closest_batch, evaluate_scene, io, FallbackStrategy, KernelConfig, Location, Scene,
    ScatterSampler, Triangle,
};

const SCENE: &str = r#"{
    "triangle": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
    "points": [[0.25, 0.25, 1.0], [0.5, 0.5, 5.0], [0, 0, 10], [2, 2, 0]]
}"#;

fn write_temp(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_evaluate_scene_file() -> Result<()> {
    let file = write_temp(SCENE)?;
    let results = evaluate_scene(file.path(), &KernelConfig::default())?;

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].location, Location::Interior);
    assert!(matches!(results[1].location, Location::Edge(_)));
    assert!(matches!(results[2].location, Location::Vertex(_)));
    assert_eq!(results[2].point, Point3::new(0.0, 0.0, 0.0));
    assert!((results[3].point - Point3::new(0.5, 0.5, 0.0)).norm() < 1e-12);

    Ok(())
}

#[test]
fn test_results_json_roundtrip() -> Result<()> {
    let scene = io::parse_scene(SCENE)?;
    let results = closest_batch(&scene.triangle(), &scene.query_points(), &KernelConfig::default())?;

    let out = NamedTempFile::new()?;
    io::write_results(out.path(), &results)?;

    let text = std::fs::read_to_string(out.path())?;
    let parsed: serde_json::Value = serde_json::from_str(&text)?;
    let entries = parsed.as_array().expect("results should be a JSON array");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[2]["location"]["Vertex"], "V0");
    assert_eq!(entries[0]["location"], "Interior");

    let back: Vec<tribary::ClosestPoint> = serde_json::from_str(&text)?;
    assert_eq!(back.len(), results.len());
    for (a, b) in back.iter().zip(&results) {
        assert_eq!(a.location, b.location);
        assert!((a.distance - b.distance).abs() < 1e-12);
        assert!((a.point - b.point).norm() < 1e-12);
    }

    Ok(())
}

#[test]
fn test_degenerate_scene_fails() -> Result<()> {
    let file = write_temp(r#"{ "triangle": [[0, 0, 0], [1, 1, 1], [2, 2, 2]], "points": [[0, 0, 0]] }"#)?;
    let err = evaluate_scene(file.path(), &KernelConfig::default()).unwrap_err();

    let message = format!("{:#}", err);
    println!("{}", message);
    assert!(message.contains("degenerate"));

    Ok(())
}

#[test]
fn test_missing_scene_file() {
    let result = evaluate_scene("does/not/exist.json", &KernelConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_large_batch_runs_in_parallel_and_keeps_order() -> Result<()> {
    let tri = Triangle::from_array([[-1.0, -1.3, 0.0], [1.0, -1.0, 0.0], [-1.0, 1.0, 0.0]]);
    let points = ScatterSampler::new(2.0, 99)?.sample(5000);

    let config = KernelConfig {
        parallel_threshold: 64,
        strategy: FallbackStrategy::Voronoi,
        ..KernelConfig::default()
    };
    let results = closest_batch(&tri, &points, &config)?;

    assert_eq!(results.len(), points.len());
    for (result, p) in results.iter().zip(&points) {
        assert_eq!(result.query, *p);
        assert_eq!(result.barycentric, tri.closest_barycentric_with(FallbackStrategy::Voronoi, *p));
    }

    Ok(())
}

#[test]
fn test_config_file_roundtrip() -> Result<()> {
    let config = KernelConfig {
        tolerance: 1e-7,
        strategy: FallbackStrategy::Voronoi,
        parallel_threshold: 10,
        ..KernelConfig::default()
    };

    let file = NamedTempFile::new()?;
    config.save(file.path())?;
    let loaded = KernelConfig::from_file(file.path())?;
    assert_eq!(loaded, config);

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let file = write_temp("tolerance = \"small\"")?;
    assert!(KernelConfig::from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_scene_roundtrip_through_values() -> Result<()> {
    let scene = io::parse_scene(SCENE)?;
    let rebuilt = Scene::new(&scene.triangle(), &scene.query_points());
    assert_eq!(rebuilt, scene);
    Ok(())
}
