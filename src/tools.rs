use egui::Color32;
use serde::{Deserialize, Serialize};

pub const PEN_WIDTH: f32 = 3.0;
pub const BRUSH_WIDTH: f32 = 6.0;
pub const PEN_COLOR: Color32 = Color32::BLACK;
pub const BRUSH_COLOR: Color32 = Color32::RED;

/// Sticker glyphs offered as one-click presets.
pub const STICKER_PRESETS: [&str; 3] = ["🌟", "🌈", "🎉"];

/// Ambient drawing parameters applied to the next created drawable.
///
/// Tool-selection actions are the only writers; drawable creation reads the
/// state as-is. A selected sticker glyph means sticker mode, `None` means
/// drawing mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    line_width: f32,
    color: Color32,
    sticker: Option<String>,
    rotation_angle: f32,
    live_sticker_rotation: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            // Hairline pen until a marker button is pressed.
            line_width: 1.0,
            color: PEN_COLOR,
            sticker: None,
            rotation_angle: 0.0,
            live_sticker_rotation: true,
        }
    }
}

impl ToolState {
    pub fn select_pen(&mut self) {
        self.line_width = PEN_WIDTH;
        self.color = PEN_COLOR;
        self.sticker = None;
    }

    pub fn select_brush(&mut self) {
        self.line_width = BRUSH_WIDTH;
        self.color = BRUSH_COLOR;
        self.sticker = None;
    }

    /// Switch to sticker mode with the given glyph. Empty input means "no
    /// selection made" and leaves the state untouched; returns whether the
    /// selection took effect.
    pub fn select_sticker(&mut self, glyph: &str) -> bool {
        if glyph.is_empty() {
            return false;
        }
        self.sticker = Some(glyph.to_owned());
        self.line_width = 0.0;
        true
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn sticker(&self) -> Option<&str> {
        self.sticker.as_deref()
    }

    pub fn is_sticker_mode(&self) -> bool {
        self.sticker.is_some()
    }

    pub fn is_pen_selected(&self) -> bool {
        self.sticker.is_none() && self.color == PEN_COLOR
    }

    pub fn is_brush_selected(&self) -> bool {
        self.sticker.is_none() && self.color == BRUSH_COLOR
    }

    /// Rotation in degrees, as set by the slider.
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn set_rotation_angle(&mut self, degrees: f32) {
        self.rotation_angle = degrees;
    }

    /// Whether an active sticker drag keeps following the rotation slider.
    pub fn live_sticker_rotation(&self) -> bool {
        self.live_sticker_rotation
    }

    pub fn set_live_sticker_rotation(&mut self, on: bool) {
        self.live_sticker_rotation = on;
    }
}
