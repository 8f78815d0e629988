use egui::Pos2;
use log::debug;

use crate::element::{Drawable, Sticker, Stroke};
use crate::history::DrawingHistory;
use crate::surface::Surface;
use crate::tools::ToolState;

/// One sketchpad session: the drawing history, the ambient tool state, and
/// the active-gesture state machine.
///
/// The gesture machine has two states: `Idle -> Drawing` on pointer-down
/// inside the canvas, `Drawing -> Idle` on pointer-up anywhere. There is no
/// paused or cancelled state; releasing outside the canvas commits the
/// in-progress drawable as-is.
#[derive(Debug, Default)]
pub struct SketchpadSession {
    history: DrawingHistory,
    tools: ToolState,
    drawing: bool,
}

impl SketchpadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with restored tool preferences.
    pub fn with_tools(tools: ToolState) -> Self {
        Self {
            history: DrawingHistory::new(),
            tools,
            drawing: false,
        }
    }

    pub fn history(&self) -> &DrawingHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    /// Whether a pointer gesture is currently open.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Begin a gesture: create a drawable from the current tool state and
    /// commit it to the history.
    pub fn pointer_down(&mut self, pos: Pos2) {
        let drawable = match self.tools.sticker() {
            Some(glyph) => {
                Drawable::Sticker(Sticker::new(pos, glyph, self.tools.rotation_angle()))
            }
            None => Drawable::Stroke(Stroke::new(pos, self.tools.line_width(), self.tools.color())),
        };
        debug!("begin {} at {pos:?}", drawable.kind());
        self.history.begin(drawable);
        self.drawing = true;
    }

    /// Extend the active drawable while a gesture is open; ignored when
    /// idle. A dragged sticker keeps following the rotation slider when live
    /// rotation is enabled, so adjusting it mid-gesture retargets the angle.
    pub fn pointer_move(&mut self, pos: Pos2) {
        if !self.drawing {
            return;
        }
        self.history.extend_active(pos);
        if self.tools.live_sticker_rotation() {
            let angle = self.tools.rotation_angle();
            if let Some(Drawable::Sticker(sticker)) = self.history.active_mut() {
                sticker.set_angle(angle);
            }
        }
    }

    /// End the gesture. Global: fires even when the pointer was released
    /// outside the canvas.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    pub fn undo(&mut self) {
        self.history.undo();
    }

    pub fn redo(&mut self) {
        self.history.redo();
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Replay the visible drawing onto the surface.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.history.render_all(surface);
    }
}
