use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Point size stickers are stamped at.
pub const STICKER_FONT_SIZE: f32 = 24.0;

/// A glyph placed on the canvas with a rotation angle.
///
/// Dragging a sticker repositions it instead of extending it; the angle is
/// in degrees as supplied by the rotation slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    pos: Pos2,
    glyph: String,
    angle: f32,
}

impl Sticker {
    pub fn new(pos: Pos2, glyph: impl Into<String>, angle: f32) -> Self {
        Self {
            pos,
            glyph: glyph.into(),
            angle,
        }
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Rotation in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Move the sticker to the cursor position.
    pub fn drag(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(
            &self.glyph,
            self.pos,
            self.angle,
            STICKER_FONT_SIZE,
            Color32::BLACK,
        );
    }
}
