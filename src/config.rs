// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Read from the YAML file named by `INKNOTE_CONFIG` when set. Every field
//! has a default, so a partial file (or none at all) is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "INKNOTE_CONFIG";

/// How the canvas is sized relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSizing {
    /// Fraction of the viewport (width, height) used when the session starts.
    pub mount_fraction: [f32; 2],
    /// Fraction of the viewport (width, height) used after a resize.
    pub resize_fraction: [f32; 2],
}

impl Default for CanvasSizing {
    fn default() -> Self {
        Self {
            mount_fraction: [0.45, 0.55],
            resize_fraction: [0.8, 0.5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed base image every session annotates.
    pub base_image: PathBuf,
    pub canvas: CanvasSizing,
    /// Ink brush radius in pixels.
    pub brush_radius: f32,
    /// Directory for the file-backed handoff store. In-memory when unset.
    pub handoff_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_image: PathBuf::from("assets/portfolio.png"),
            canvas: CanvasSizing::default(),
            brush_radius: 2.0,
            handoff_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from `INKNOTE_CONFIG`, falling back to defaults when unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Load from a YAML file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&yaml).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
