use egui::{vec2, Color32, Sense, Stroke as EguiStroke};

use crate::app::{SketchApp, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::surface::{CanvasSurface, Surface};

/// Point size of the sticker ghost that trails the cursor.
const PREVIEW_FONT_SIZE: f32 = 20.0;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        // Fixed-size canvas.
        let (response, painter) =
            ui.allocate_painter(vec2(CANVAS_WIDTH, CANVAS_HEIGHT), Sense::drag());
        let canvas_rect = response.rect;
        app.set_canvas_rect(canvas_rect);

        app.handle_input(ctx, canvas_rect);

        let mut surface = CanvasSurface::new(&painter, canvas_rect);
        app.session().render(&mut surface);
        draw_tool_preview(app, &mut surface);

        // Canvas outline on top of the drawing.
        painter.rect_stroke(canvas_rect, 0.0, EguiStroke::new(1.0, Color32::GRAY));
    });
}

/// Hover feedback while no gesture is active: a dot the size of the current
/// marker, or the selected sticker glyph trailing the cursor. Paint-only;
/// never enters the history.
fn draw_tool_preview(app: &SketchApp, surface: &mut dyn Surface) {
    if app.session().is_drawing() {
        return;
    }
    let Some(pos) = app.hover_pos() else {
        return;
    };
    let tools = app.session().tools();
    match tools.sticker() {
        Some(glyph) => surface.glyph(
            glyph,
            pos,
            tools.rotation_angle(),
            PREVIEW_FONT_SIZE,
            Color32::BLACK,
        ),
        None => surface.circle_filled(pos, tools.line_width() / 2.0, Color32::BLACK),
    }
}
