// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Base image loading.
//!
//! The base image is decoded on a background thread. The result arrives
//! exactly once over a channel; until it does, the image is not ready and
//! nothing may read from it.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

/// Immutable handle to a decoded base image.
#[derive(Debug, Clone)]
pub struct BaseImage {
    pixels: Arc<RgbaImage>,
}

impl BaseImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Load and decode an image file.
pub fn load_image(path: &Path) -> Result<BaseImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    Ok(BaseImage::from_rgba(decoded.to_rgba8()))
}

/// Result delivered by the background decoder.
pub type LoadResult = std::result::Result<BaseImage, String>;

enum LoadState {
    Loading(Receiver<LoadResult>),
    Ready(BaseImage),
    Failed,
}

/// Slot holding the base image as it moves from loading to ready.
pub struct BaseImageSlot {
    state: LoadState,
}

impl BaseImageSlot {
    /// Decode `path` on a background thread.
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = channel();

        std::thread::spawn(move || {
            let result = load_image(&path).map_err(|e| format!("{:#}", e));
            if let Ok(ref image) = result {
                log::info!("Loaded image: {} ({}x{})", path.display(), image.width(), image.height());
            }
            let _ = sender.send(result);
        });

        Self::from_receiver(receiver)
    }

    /// Wait on an externally driven load notification.
    pub fn from_receiver(receiver: Receiver<LoadResult>) -> Self {
        Self {
            state: LoadState::Loading(receiver),
        }
    }

    /// An image that is already decoded (e.g. handed over by navigation).
    pub fn ready(image: BaseImage) -> Self {
        Self {
            state: LoadState::Ready(image),
        }
    }

    /// Check for the load notification without blocking.
    pub fn poll(&mut self) -> Option<&BaseImage> {
        let outcome = match self.state {
            LoadState::Loading(ref receiver) => receiver.try_recv(),
            _ => return self.get(),
        };

        match outcome {
            Ok(Ok(image)) => {
                self.state = LoadState::Ready(image);
            }
            Ok(Err(e)) => {
                log::error!("Failed to load base image: {}", e);
                self.state = LoadState::Failed;
            }
            Err(TryRecvError::Disconnected) => {
                log::error!("Base image loader exited without a result");
                self.state = LoadState::Failed;
            }
            Err(TryRecvError::Empty) => {}
        }
        self.get()
    }

    /// The decoded image, if the load notification has been observed.
    pub fn get(&self) -> Option<&BaseImage> {
        match self.state {
            LoadState::Ready(ref image) => Some(image),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed)
    }
}
