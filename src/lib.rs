// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! INKNOTE - ink and note annotation engine.
//!
//! Free-hand ink is drawn over a fixed base image, flattened into a single
//! PNG, and handed to a results view together with an ordered list of
//! colored notes.

pub mod compositor;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod session;
pub mod surface;
pub mod util;
pub mod viewport;

pub use compositor::CompositedImage;
pub use error::SessionError;
pub use session::{AnnotationSession, DrawState};
