// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - scene loading and result export

mod scene;

pub use scene::{load_scene, parse_scene, results_to_json, write_results, Scene};
