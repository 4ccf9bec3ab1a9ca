// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data handed from the annotation view to the results view.

use super::note::Note;
use crate::compositor::CompositedImage;

/// The latest composite together with the ordered note list.
///
/// Derived from the session on every save; the results view may also
/// build one directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub composite: Option<CompositedImage>,
    pub notes: Vec<Note>,
}

impl SessionSnapshot {
    pub fn new(composite: Option<CompositedImage>, notes: Vec<Note>) -> Self {
        Self { composite, notes }
    }

    /// Nothing to display: no composite and no notes.
    pub fn is_empty(&self) -> bool {
        self.composite.is_none() && self.notes.is_empty()
    }
}
