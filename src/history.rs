use egui::Pos2;

use crate::element::Drawable;
use crate::surface::Surface;

/// Manages the undo/redo stacks of committed drawables.
///
/// The undo stack is the visible drawing, earliest entry first; z-order is
/// insertion order. The redo stack holds entries removed by undo, most
/// recently undone last. A drawable is only ever on one of the two stacks.
#[derive(Debug, Default)]
pub struct DrawingHistory {
    undo_stack: Vec<Drawable>,
    redo_stack: Vec<Drawable>,
}

impl DrawingHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Commit a freshly created drawable. Starting new work invalidates
    /// whatever was undone before it, so the redo stack empties first.
    pub fn begin(&mut self, drawable: Drawable) {
        self.redo_stack.clear();
        self.undo_stack.push(drawable);
    }

    /// Forward pointer movement to the drawable begun by the current
    /// gesture. Silent no-op when the stack is empty; callers only invoke
    /// this between pointer-down and pointer-up.
    pub fn extend_active(&mut self, pos: Pos2) {
        if let Some(active) = self.undo_stack.last_mut() {
            active.drag(pos);
        }
    }

    /// The drawable the current gesture is extending, if any.
    pub fn active_mut(&mut self) -> Option<&mut Drawable> {
        self.undo_stack.last_mut()
    }

    /// Undo the most recent drawable. No-op on an empty stack.
    pub fn undo(&mut self) {
        if let Some(drawable) = self.undo_stack.pop() {
            self.redo_stack.push(drawable);
        }
    }

    /// Redo the most recently undone drawable. No-op on an empty stack.
    pub fn redo(&mut self) {
        if let Some(drawable) = self.redo_stack.pop() {
            self.undo_stack.push(drawable);
        }
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Drawable] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    /// Wipe the surface and replay every committed drawable in insertion
    /// order, so later entries draw on top.
    pub fn render_all(&self, surface: &mut dyn Surface) {
        surface.clear();
        for drawable in &self.undo_stack {
            drawable.render(surface);
        }
    }
}
