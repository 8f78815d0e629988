use egui::epaint::TextShape;
use egui::emath::Rot2;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

/// Capability surface the drawing model paints against.
///
/// All coordinates are canvas-local pixels with the origin at the top-left
/// corner of the canvas. Implementations must not leak transform or clip
/// state between calls.
pub trait Surface {
    /// Wipe the whole canvas back to the background color.
    fn clear(&mut self);

    /// Stroke a connected polyline through `points` in order.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Draw `text` centered at `center`, rotated by `angle_deg` degrees.
    fn glyph(&mut self, text: &str, center: Pos2, angle_deg: f32, size: f32, color: Color32);

    /// Filled circle, used for the marker hover preview.
    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Paints onto the canvas region of an egui frame, clipped to its rect.
pub struct CanvasSurface {
    painter: Painter,
    rect: Rect,
}

impl CanvasSurface {
    pub fn new(painter: &Painter, rect: Rect) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, Color32::WHITE);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(screen, EguiStroke::new(width, color)));
    }

    fn glyph(&mut self, text: &str, center: Pos2, angle_deg: f32, size: f32, color: Color32) {
        let galley =
            self.painter
                .layout_no_wrap(text.to_owned(), FontId::proportional(size), color);
        let angle = angle_deg.to_radians();
        // TextShape rotates around the galley's top-left corner, so the
        // anchor is walked back from the center by the rotated half-extent.
        let offset = Rot2::from_angle(angle) * (galley.size() / 2.0);
        let shape = TextShape::new(self.to_screen(center) - offset, galley, color).with_angle(angle);
        self.painter.add(shape);
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.to_screen(center), radius, color);
    }
}
