// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for annotation sessions.

pub mod dimensions;
pub mod note;
pub mod palette;
pub mod project;
pub mod snapshot;

pub use dimensions::CanvasDimensions;
pub use note::Note;
pub use palette::PaletteColor;
pub use snapshot::SessionSnapshot;
