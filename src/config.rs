// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel configuration system

use crate::geometry::FallbackStrategy;
use crate::sampling::ScatterSampler;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "tribary.toml";

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Weights at or below this count as zero when classifying locations
    pub tolerance: f64,
    /// Triangles whose area over squared longest edge is at or below this
    /// are rejected as degenerate
    pub degenerate_epsilon: f64,
    /// Edge fallback used by validated queries
    pub strategy: FallbackStrategy,
    /// Batches at least this large are evaluated in parallel
    pub parallel_threshold: usize,
    /// Half-extent of the scatter cube
    pub scatter_radius: f64,
    /// Points generated per scatter run
    pub scatter_count: usize,
    /// Verbose output
    pub verbose: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            degenerate_epsilon: 1e-12,
            strategy: FallbackStrategy::FirstFailing,
            parallel_threshold: 1024,
            scatter_radius: ScatterSampler::DEFAULT_RADIUS,
            scatter_count: ScatterSampler::DEFAULT_COUNT,
            verbose: false,
        }
    }
}

impl KernelConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: KernelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `tribary.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path (or the default file), then apply
    /// environment overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if PathBuf::from(CONFIG_FILE).exists() => Self::from_file(CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `TRIBARY_*` overrides from `lookup`. Unparseable values are
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tolerance) = lookup("TRIBARY_TOLERANCE").and_then(|v| v.parse().ok()) {
            self.tolerance = tolerance;
        }

        if let Some(strategy) = lookup("TRIBARY_STRATEGY").and_then(|v| v.parse().ok()) {
            self.strategy = strategy;
        }

        if let Some(threshold) = lookup("TRIBARY_PARALLEL_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.parallel_threshold = threshold;
        }

        if let Some(verbose) = lookup("TRIBARY_VERBOSE").and_then(|v| parse_flag(&v)) {
            self.verbose = verbose;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Boolean environment flag: true/false, 1/0, yes/no, on/off
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
