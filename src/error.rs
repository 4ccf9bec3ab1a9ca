// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types raised by the annotation session.
//!
//! None of these are fatal: callers absorb them locally and keep the
//! session running.

use thiserror::Error;

/// Errors produced by [`AnnotationSession`](crate::session::AnnotationSession)
/// transitions and the compositor.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The base image has not finished decoding (or failed to decode).
    #[error("base image is not ready")]
    NotReady,

    /// A note commit was requested with blank pending text.
    #[error("note text is empty")]
    EmptyNote,

    /// A color name outside the fixed palette.
    #[error("'{0}' is not a palette color")]
    InvalidColor(String),

    /// The flattened raster could not be encoded.
    #[error("failed to encode composite: {0}")]
    Encode(#[from] image::ImageError),
}
