use egui::{Key, Modifiers, Pos2, Rect};
use log::info;

use crate::export::ExportController;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::session::SketchpadSession;
use crate::tools::ToolState;

/// Canvas extent in logical pixels.
pub const CANVAS_WIDTH: f32 = 512.0;
pub const CANVAS_HEIGHT: f32 = 512.0;

/// Top-level eframe application: one sketchpad session plus the GUI glue
/// around it.
pub struct SketchApp {
    session: SketchpadSession,
    input: InputHandler,
    export: ExportController,
    /// Canvas rect of the last frame, screen coordinates.
    canvas_rect: Rect,
    /// Pointer position for the hover tool preview, canvas-local.
    hover_pos: Option<Pos2>,
    show_sticker_modal: bool,
    sticker_draft: String,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore tool preferences from the previous run; the drawing itself
        // is session-local and always starts empty.
        let tools: ToolState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            session: SketchpadSession::with_tools(tools),
            input: InputHandler::new(Rect::NOTHING),
            export: ExportController::new(),
            canvas_rect: Rect::NOTHING,
            hover_pos: None,
            show_sticker_modal: false,
            sticker_draft: String::new(),
        }
    }

    pub fn session(&self) -> &SketchpadSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SketchpadSession {
        &mut self.session
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Hover position for the tool preview, if the pointer is over the
    /// canvas.
    pub fn hover_pos(&self) -> Option<Pos2> {
        self.hover_pos
    }

    pub fn open_sticker_modal(&mut self) {
        self.show_sticker_modal = true;
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn request_export(&mut self, ctx: &egui::Context) {
        self.export.request(ctx, self.canvas_rect);
    }

    /// Route this frame's raw input through the gesture state machine.
    ///
    /// Down only opens a gesture inside the canvas; moves extend it while
    /// they stay on the canvas; up closes it wherever the pointer is.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            match event {
                InputEvent::PointerDown { location } => {
                    if location.is_in_canvas && !self.show_sticker_modal {
                        self.session.pointer_down(location.pos);
                    }
                }
                InputEvent::PointerMove { location } => {
                    if location.is_in_canvas {
                        self.session.pointer_move(location.pos);
                        self.hover_pos = Some(location.pos);
                    } else {
                        self.hover_pos = None;
                    }
                }
                InputEvent::PointerUp => self.session.pointer_up(),
                InputEvent::PointerLeave => {
                    self.hover_pos = None;
                }
                InputEvent::KeyDown { key, modifiers } => {
                    // Leave keys alone while e.g. the sticker text field has
                    // focus.
                    if !ctx.wants_keyboard_input() {
                        self.handle_shortcut(key, modifiers);
                    }
                }
            }
        }
    }

    fn handle_shortcut(&mut self, key: Key, modifiers: Modifiers) {
        if !modifiers.command {
            return;
        }
        match key {
            Key::Z if modifiers.shift => self.session.redo(),
            Key::Z => self.session.undo(),
            Key::Y => self.session.redo(),
            _ => {}
        }
    }

    fn sticker_modal(&mut self, ctx: &egui::Context) {
        if !self.show_sticker_modal {
            return;
        }
        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Enter custom sticker text:");
                ui.text_edit_singleline(&mut self.sticker_draft);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        // Empty input means no selection was made.
                        let glyph = self.sticker_draft.trim();
                        if self.session.tools_mut().select_sticker(glyph) {
                            info!("Tool selected: custom sticker {glyph}");
                        }
                        self.show_sticker_modal = false;
                        self.sticker_draft.clear();
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_sticker_modal = false;
                        self.sticker_draft.clear();
                    }
                });
            });
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.session.tools());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.export.handle_screenshots(ctx);

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        self.sticker_modal(ctx);
    }
}
