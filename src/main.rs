// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! INKNOTE - ink and note annotation over a base image
//!
//! A desktop application for drawing free-hand ink over an image, adding
//! colored notes, and saving the flattened result.

mod app;
mod ui;

use anyhow::Result;
use app::InkNoteApp;
use inknote::config::AppConfig;

const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Base image: {}", config.base_image.display());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([800.0, 600.0])
            .with_title("INKNOTE - Image Drawing App"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "INKNOTE",
        options,
        Box::new(move |_cc| Ok(Box::new(InkNoteApp::new(config, WINDOW_SIZE)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
