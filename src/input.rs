use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Where a pointer event landed, in canvas-local terms.
#[derive(Debug, Clone, Copy)]
pub struct PointerLocation {
    /// Position with the origin at the canvas top-left corner.
    pub pos: Pos2,
    /// Whether the position falls inside the canvas bounds.
    pub is_in_canvas: bool,
}

/// Domain-level input events distilled from raw egui input.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Primary button was pressed.
    PointerDown { location: PointerLocation },
    /// Pointer moved, pressed or not.
    PointerMove { location: PointerLocation },
    /// Primary button was released. Global: reported even when the pointer
    /// is outside the canvas, so an escaped drag still ends its gesture.
    PointerUp,
    /// Pointer left the window entirely.
    PointerLeave,
    /// Key was pressed.
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input into canvas-local InputEvents.
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, pos: Pos2) -> PointerLocation {
        PointerLocation {
            pos: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Drain this frame's raw input into domain events.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                    });
                }
                self.last_pointer_pos = Some(pos);
            } else if self.last_pointer_pos.take().is_some() {
                events.push(InputEvent::PointerLeave);
            }

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = input.pointer.hover_pos() {
                    events.push(InputEvent::PointerDown {
                        location: self.make_location(pos),
                    });
                }
            }
            // Releases must end the gesture even when egui no longer has a
            // hover position, e.g. after the pointer escaped the window
            // mid-drag.
            if input.pointer.button_released(PointerButton::Primary) {
                events.push(InputEvent::PointerUp);
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}
