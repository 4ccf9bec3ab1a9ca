// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app hosts one annotation session and switches between the
//! annotation view and the results view. The results view only sees what
//! was published through the handoff store.

use crate::ui::{canvas, notes, results, toolbar};
use inknote::config::AppConfig;
use inknote::io::handoff::{self, FileStore, HandoffStore, MemoryStore};
use inknote::io::media::BaseImageSlot;
use inknote::io::serialization;
use inknote::io::upload::{LogSink, SaveSink};
use inknote::models::SessionSnapshot;
use inknote::surface::InkLayer;
use inknote::viewport::Viewport;
use inknote::{AnnotationSession, DrawState, SessionError};
use std::time::Duration;

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Annotate,
    Results,
}

/// Main application state.
pub struct InkNoteApp {
    /// Tracks the window size for the session's resize subscription
    viewport: Viewport,

    session: AnnotationSession<InkLayer>,

    /// Where saved snapshots are published for the results view
    handoff: Box<dyn HandoffStore>,

    /// Receives every saved composite
    sink: Box<dyn SaveSink>,

    view: View,

    /// Text area contents, mirrored into the session's pending note
    note_draft: String,

    canvas: canvas::CanvasTextures,

    /// Built when the results view is entered
    results: Option<results::ResultsView>,

    /// Last user-facing status message
    status: Option<String>,
}

impl InkNoteApp {
    /// Create the app and start loading the base image.
    pub fn new(config: AppConfig, initial_size: [f32; 2]) -> Self {
        let viewport = Viewport::new(initial_size[0], initial_size[1]);
        let session = AnnotationSession::new(
            BaseImageSlot::spawn(config.base_image.clone()),
            InkLayer::new(config.brush_radius),
            &viewport,
            config.canvas,
        );

        let handoff: Box<dyn HandoffStore> = match config.handoff_dir {
            Some(ref dir) => {
                log::info!("Using handoff directory {}", dir.display());
                Box::new(FileStore::new(dir.clone()))
            }
            None => Box::new(MemoryStore::new()),
        };

        Self {
            viewport,
            session,
            handoff,
            sink: Box::new(LogSink::new()),
            view: View::Annotate,
            note_draft: String::new(),
            canvas: canvas::CanvasTextures::default(),
            results: None,
            status: None,
        }
    }

    /// Composite, hand off and forward to the save sink.
    fn save_composite(&mut self) {
        match self.session.save_composite() {
            Ok(snapshot) => {
                if let Some(ref composite) = snapshot.composite {
                    if let Err(e) = self.sink.save(composite, &snapshot.notes) {
                        log::error!("Save sink failed: {:#}", e);
                    }
                }
                if let Err(e) = handoff::publish(self.handoff.as_mut(), &snapshot) {
                    log::error!("Failed to publish results: {:#}", e);
                }
                self.status = Some("Combined image saved".to_string());
            }
            Err(SessionError::NotReady) => {
                log::warn!("Save requested before the base image finished loading");
                self.status = Some("Image is still loading".to_string());
            }
            Err(e) => {
                log::error!("Failed to save composite: {}", e);
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    /// Write the current composite and a notes sidecar to a user-chosen file.
    fn export_composite(&mut self) {
        let Some(composite) = self.session.composite() else {
            return;
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("annotated.png")
            .save_file()
        {
            let sidecar = serialization::sidecar_for(&path);
            match serialization::export_composite(composite, self.session.notes(), &path, &sidecar) {
                Ok(_) => self.status = Some(format!("Exported {}", path.display())),
                Err(e) => {
                    log::error!("Failed to export composite: {:#}", e);
                    self.status = Some("Export failed".to_string());
                }
            }
        }
    }

    fn open_results(&mut self) {
        let snapshot = handoff::receive(self.handoff.as_ref()).unwrap_or_else(|e| {
            log::error!("Failed to read results: {:#}", e);
            SessionSnapshot::default()
        });
        self.results = Some(results::ResultsView::new(snapshot));
        self.view = View::Results;
    }

    fn commit_note(&mut self) {
        self.session.set_pending_note_text(self.note_draft.clone());
        self.session.commit_note();
        self.note_draft = self.session.pending_note_text().to_string();
    }

    fn show_annotate(&mut self, ctx: &egui::Context) {
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    self.session.draw_state(),
                    self.session.ink_color(),
                    self.session.is_ready(),
                )
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::ToggleDrawing => {
                self.session.toggle_drawing();
            }
            toolbar::ToolbarAction::SelectInk(color) => self.session.select_ink_color(color),
            toolbar::ToolbarAction::Save => self.save_composite(),
            toolbar::ToolbarAction::ShowResults => self.open_results(),
            toolbar::ToolbarAction::None => {}
        }

        let notes_action = egui::SidePanel::right("notes")
            .default_width(300.0)
            .show(ctx, |ui| {
                notes::show(
                    ui,
                    &mut self.note_draft,
                    self.session.note_color(),
                    self.session.notes(),
                )
            })
            .inner;

        match notes_action {
            notes::NotesAction::SelectColor(color) => self.session.select_note_color(color),
            notes::NotesAction::DraftChanged => {
                self.session.set_pending_note_text(self.note_draft.clone());
            }
            notes::NotesAction::Commit => self.commit_note(),
            notes::NotesAction::None => {}
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mode = match self.session.draw_state() {
                    DrawState::Idle => "Idle",
                    DrawState::Drawing => "Drawing",
                };
                ui.label(format!("Mode: {}", mode));
                ui.separator();
                let dims = self.session.dimensions();
                ui.label(format!("Canvas: {}x{}", dims.width(), dims.height()));
                ui.separator();
                if self.session.is_ready() {
                    ui.label("Ready");
                } else {
                    ui.label("Loading image...");
                }
                if let Some(ref status) = self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                canvas::show(ui, &mut self.canvas, &mut self.session);
                canvas::show_preview(ui, &mut self.canvas, &self.session);
            });
        });
    }

    fn show_results(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("⬅ Back to annotation").clicked() {
                self.view = View::Annotate;
            }
            ui.separator();
            if let Some(ref mut view) = self.results {
                view.show(ui);
            }
        });
    }
}

impl eframe::App for InkNoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        self.viewport.resize(screen.width(), screen.height());

        // Poll until the one-shot load notification arrives
        if !self.session.is_ready() && !self.session.poll_base_image() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let can_export = self.session.composite().is_some();
                    if ui
                        .add_enabled(can_export, egui::Button::new("Export Combined Image..."))
                        .clicked()
                    {
                        self.export_composite();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Annotate").clicked() {
                        self.view = View::Annotate;
                        ui.close_menu();
                    }
                    if ui.button("Results").clicked() {
                        self.open_results();
                        ui.close_menu();
                    }
                });
            });
        });

        match self.view {
            View::Annotate => self.show_annotate(ctx),
            View::Results => self.show_results(ctx),
        }
    }
}
