// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Notes panel: note color, pending text and the saved list.

use inknote::models::{Note, PaletteColor};

/// Result of notes panel interaction.
pub enum NotesAction {
    None,
    SelectColor(PaletteColor),
    DraftChanged,
    Commit,
}

/// Display the notes panel. `draft` is edited in place.
pub fn show(
    ui: &mut egui::Ui,
    draft: &mut String,
    note_color: PaletteColor,
    notes: &[Note],
) -> NotesAction {
    let mut action = NotesAction::None;

    ui.heading("Notes");
    ui.add_space(4.0);

    if let Some(color) = super::palette_row(ui, note_color) {
        action = NotesAction::SelectColor(color);
    }
    ui.add_space(4.0);

    let edit = ui.add(
        egui::TextEdit::multiline(draft)
            .hint_text("Add a note")
            .desired_width(f32::INFINITY)
            .desired_rows(4),
    );
    if edit.changed() {
        action = NotesAction::DraftChanged;
    }

    if ui.button("Save Note").clicked() {
        action = NotesAction::Commit;
    }

    ui.separator();
    ui.label(egui::RichText::new("Saved Notes:").strong());
    egui::ScrollArea::vertical().show(ui, |ui| {
        super::note_list(ui, notes);
    });

    action
}
