use egui::Slider;
use log::info;

use crate::app::SketchApp;
use crate::element::Drawable;
use crate::tools::STICKER_PRESETS;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let tools = app.session().tools();
            let pen_selected = tools.is_pen_selected();
            let brush_selected = tools.is_brush_selected();
            let selected_sticker = tools.sticker().map(str::to_owned);

            if ui.selectable_label(pen_selected, "Pen").clicked() {
                info!("Tool selected: pen");
                app.session_mut().tools_mut().select_pen();
            }
            if ui.selectable_label(brush_selected, "Brush").clicked() {
                info!("Tool selected: brush");
                app.session_mut().tools_mut().select_brush();
            }

            ui.separator();

            ui.label("Stickers");
            ui.horizontal(|ui| {
                for glyph in STICKER_PRESETS {
                    let is_selected = selected_sticker.as_deref() == Some(glyph);
                    if ui.selectable_label(is_selected, glyph).clicked() {
                        info!("Tool selected: sticker {glyph}");
                        app.session_mut().tools_mut().select_sticker(glyph);
                    }
                }
            });
            if ui.button("Add Custom Sticker").clicked() {
                app.open_sticker_modal();
            }

            let mut angle = app.session().tools().rotation_angle();
            if ui
                .add(Slider::new(&mut angle, 0.0..=360.0).text("Rotation"))
                .changed()
            {
                app.session_mut().tools_mut().set_rotation_angle(angle);
            }
            let mut live = app.session().tools().live_sticker_rotation();
            if ui.checkbox(&mut live, "Live sticker rotation").changed() {
                app.session_mut().tools_mut().set_live_sticker_rotation(live);
            }

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.session().history().can_undo();
                let can_redo = app.session().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session_mut().redo();
                }
            });
            if ui.button("Clear").clicked() {
                app.session_mut().clear();
            }

            #[cfg(not(target_arch = "wasm32"))]
            if ui.button("Export as PNG").clicked() {
                app.request_export(ctx);
            }

            ui.separator();

            history_grid(app, ui);
        });
}

fn history_grid(app: &SketchApp, ui: &mut egui::Ui) {
    let history = app.session().history();

    ui.horizontal(|ui| {
        ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
        ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
    });

    egui::Grid::new("drawing_history_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Undo Stack");
            ui.strong("Redo Stack");
            ui.end_row();

            let undo_stack = history.undo_stack();
            let redo_stack = history.redo_stack();

            let max_len = undo_stack.len().max(redo_stack.len());

            for i in 0..max_len {
                match undo_stack.get(i) {
                    Some(drawable) => ui.label(entry_label(drawable)),
                    None => ui.label(""),
                };
                match redo_stack.get(i) {
                    Some(drawable) => ui.label(entry_label(drawable)),
                    None => ui.label(""),
                };
                ui.end_row();
            }
        });
}

fn entry_label(drawable: &Drawable) -> String {
    match drawable {
        Drawable::Stroke(stroke) => format!("Stroke ({} pts)", stroke.points().len()),
        Drawable::Sticker(sticker) => format!("Sticker {}", sticker.glyph()),
    }
}
