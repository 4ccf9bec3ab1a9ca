// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar for draw mode, ink color and saving.

use inknote::models::PaletteColor;
use inknote::DrawState;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    ToggleDrawing,
    SelectInk(PaletteColor),
    Save,
    ShowResults,
}

/// Display the toolbar.
pub fn show(
    ui: &mut egui::Ui,
    draw_state: DrawState,
    ink_color: PaletteColor,
    ready: bool,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let toggle_text = match draw_state {
            DrawState::Idle => "✏ Start Drawing",
            DrawState::Drawing => "⏹ Stop Drawing",
        };
        if ui
            .selectable_label(draw_state == DrawState::Drawing, toggle_text)
            .clicked()
        {
            action = ToolbarAction::ToggleDrawing;
        }

        ui.separator();

        ui.label("Ink:");
        if let Some(color) = super::palette_row(ui, ink_color) {
            action = ToolbarAction::SelectInk(color);
        }

        ui.separator();

        if ui
            .add_enabled(ready, egui::Button::new("💾 Save Combined Image"))
            .clicked()
        {
            action = ToolbarAction::Save;
        }
        if ui.button("Results ➡").clicked() {
            action = ToolbarAction::ShowResults;
        }

        ui.separator();

        let hint = match draw_state {
            DrawState::Idle => "Start drawing to ink over the image",
            DrawState::Drawing => "Drag on the image to draw",
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    action
}
