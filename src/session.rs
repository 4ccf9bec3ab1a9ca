// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session state machine.
//!
//! An [`AnnotationSession`] owns the draw mode, the ink and note colors,
//! the pending note text, the committed notes and the latest composite.
//! Every transition is a named method that is defined for all inputs.

use crate::compositor::{self, CompositedImage};
use crate::config::CanvasSizing;
use crate::error::SessionError;
use crate::io::media::{BaseImage, BaseImageSlot};
use crate::models::note::is_blank;
use crate::models::{CanvasDimensions, Note, PaletteColor, SessionSnapshot};
use crate::surface::DrawSurface;
use crate::viewport::{ResizeSubscription, Viewport};
use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;

/// Whether the draw surface accepts pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing,
}

impl DrawState {
    fn toggled(self) -> Self {
        match self {
            DrawState::Idle => DrawState::Drawing,
            DrawState::Drawing => DrawState::Idle,
        }
    }
}

/// State of one annotation pass over a base image.
pub struct AnnotationSession<S: DrawSurface> {
    base: BaseImageSlot,
    surface: S,
    draw_state: DrawState,
    ink_color: PaletteColor,
    note_color: PaletteColor,
    pending_note: String,
    notes: Vec<Note>,
    composite: Option<CompositedImage>,
    /// Successful saves so far; changes whenever `composite` is replaced
    saves: u64,
    dims: Rc<Cell<CanvasDimensions>>,
    _resize: ResizeSubscription,
}

impl<S: DrawSurface> AnnotationSession<S> {
    /// Start a session. Subscribes to `viewport` resizes until dropped.
    pub fn new(base: BaseImageSlot, mut surface: S, viewport: &Viewport, sizing: CanvasSizing) -> Self {
        let (width, height) = viewport.size();
        let dims = Rc::new(Cell::new(CanvasDimensions::from_viewport(
            width,
            height,
            sizing.mount_fraction,
        )));

        let target = Rc::clone(&dims);
        let resize = viewport.subscribe(move |width, height| {
            target.set(CanvasDimensions::from_viewport(
                width,
                height,
                sizing.resize_fraction,
            ));
        });

        let ink_color = PaletteColor::default();
        surface.set_enabled(false);
        surface.set_color(ink_color);

        Self {
            base,
            surface,
            draw_state: DrawState::Idle,
            ink_color,
            note_color: PaletteColor::default(),
            pending_note: String::new(),
            notes: Vec::new(),
            composite: None,
            saves: 0,
            dims,
            _resize: resize,
        }
    }

    /// Flip between idle and drawing, enabling or disabling the surface.
    pub fn toggle_drawing(&mut self) -> DrawState {
        self.draw_state = self.draw_state.toggled();
        self.surface.set_enabled(self.draw_state == DrawState::Drawing);
        debug!("Draw state is now {:?}", self.draw_state);
        self.draw_state
    }

    /// Select the ink color for subsequent strokes.
    pub fn select_ink_color(&mut self, color: PaletteColor) {
        self.ink_color = color;
        self.surface.set_color(color);
    }

    /// Select the ink color by name. Unknown names keep the current color.
    pub fn select_ink_color_named(&mut self, name: &str) -> Result<PaletteColor, SessionError> {
        let color = name.parse()?;
        self.select_ink_color(color);
        Ok(color)
    }

    /// Select the color for subsequently committed notes.
    pub fn select_note_color(&mut self, color: PaletteColor) {
        self.note_color = color;
    }

    /// Select the note color by name. Unknown names keep the current color.
    pub fn select_note_color_named(&mut self, name: &str) -> Result<PaletteColor, SessionError> {
        let color = name.parse()?;
        self.select_note_color(color);
        Ok(color)
    }

    pub fn set_pending_note_text(&mut self, text: impl Into<String>) {
        self.pending_note = text.into();
    }

    /// Commit the pending text as a note, or fail with `EmptyNote` and change nothing.
    pub fn try_commit_note(&mut self) -> Result<&Note, SessionError> {
        if is_blank(&self.pending_note) {
            return Err(SessionError::EmptyNote);
        }
        let text = std::mem::take(&mut self.pending_note);
        let note = Note::new(text, self.note_color).ok_or(SessionError::EmptyNote)?;
        self.notes.push(note);
        info!("Added note, total: {}", self.notes.len());
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Commit the pending text as a note. Blank text is silently ignored.
    pub fn commit_note(&mut self) -> Option<&Note> {
        match self.try_commit_note() {
            Ok(note) => Some(note),
            Err(e) => {
                debug!("Note not committed: {}", e);
                None
            }
        }
    }

    /// Flatten the base image and the current ink into a new composite.
    ///
    /// Replaces any previous composite. Ink, draw state and notes are left
    /// as they are. Fails with `NotReady` before the base image has loaded,
    /// leaving the stored composite untouched.
    pub fn save_composite(&mut self) -> Result<SessionSnapshot, SessionError> {
        let dims = self.dims.get();
        let base = self.base.poll().ok_or(SessionError::NotReady)?;
        let ink = self.surface.render(dims);
        let composite = compositor::composite(base, &ink, dims)?;
        info!(
            "Saved composite {}x{} ({} bytes)",
            composite.width(),
            composite.height(),
            composite.png_bytes().len()
        );
        self.composite = Some(composite);
        self.saves += 1;
        Ok(self.snapshot())
    }

    /// Replace the canvas dimensions as a single unit.
    pub fn resize(&mut self, dims: CanvasDimensions) {
        self.dims.set(dims);
    }

    /// Check for the base image load notification. Returns true once ready.
    pub fn poll_base_image(&mut self) -> bool {
        self.base.poll().is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.base.get().is_some()
    }

    pub fn base_image(&self) -> Option<&BaseImage> {
        self.base.get()
    }

    /// The current composite and notes.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.composite.clone(), self.notes.clone())
    }

    pub fn draw_state(&self) -> DrawState {
        self.draw_state
    }

    pub fn ink_color(&self) -> PaletteColor {
        self.ink_color
    }

    pub fn note_color(&self) -> PaletteColor {
        self.note_color
    }

    pub fn pending_note_text(&self) -> &str {
        &self.pending_note
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn composite(&self) -> Option<&CompositedImage> {
        self.composite.as_ref()
    }

    /// Number of successful saves. Views cache the composite against it.
    pub fn save_count(&self) -> u64 {
        self.saves
    }

    pub fn dimensions(&self) -> CanvasDimensions {
        self.dims.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the widget feeding pointer strokes.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
