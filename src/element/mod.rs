use egui::Pos2;

mod sticker;
mod stroke;

pub use sticker::{Sticker, STICKER_FONT_SIZE};
pub use stroke::Stroke;

use crate::surface::Surface;

/// Everything that can live in the drawing history.
///
/// Dispatch is a tagged enum with `match` arms rather than trait objects, so
/// history entries stay plain owned values.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Paint this entry onto the surface.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }

    /// Extend the entry in response to continued pointer movement: strokes
    /// grow a point, stickers follow the cursor.
    pub fn drag(&mut self, pos: Pos2) {
        match self {
            Drawable::Stroke(stroke) => stroke.drag(pos),
            Drawable::Sticker(sticker) => sticker.drag(pos),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }
}
