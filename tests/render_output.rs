use eframe_sketchpad::element::STICKER_FONT_SIZE;
use eframe_sketchpad::{SketchpadSession, Surface};
use egui::{pos2, Color32, Pos2};

/// Records draw calls instead of painting, so rendered output can be
/// compared structurally.
#[derive(Debug, Default)]
struct RecordingSurface {
    ops: Vec<DrawOp>,
}

#[derive(Debug, Clone, PartialEq)]
enum DrawOp {
    Clear,
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        center: Pos2,
        angle_deg: f32,
        size: f32,
    },
    Circle {
        center: Pos2,
        radius: f32,
    },
}

impl RecordingSurface {
    fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn glyph(&mut self, text: &str, center: Pos2, angle_deg: f32, size: f32, _color: Color32) {
        self.ops.push(DrawOp::Glyph {
            text: text.to_owned(),
            center,
            angle_deg,
            size,
        });
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, _color: Color32) {
        self.ops.push(DrawOp::Circle { center, radius });
    }
}

#[test]
fn a_three_point_drag_renders_one_polyline_through_its_points() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_pen();
    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_move(pos2(20.0, 20.0));
    session.pointer_move(pos2(30.0, 10.0));
    session.pointer_up();

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    assert_eq!(
        surface.take(),
        vec![
            DrawOp::Clear,
            DrawOp::Polyline {
                points: vec![pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)],
                width: 3.0,
                color: Color32::BLACK,
            },
        ]
    );
}

#[test]
fn a_single_point_stroke_paints_nothing() {
    let mut session = SketchpadSession::new();
    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_up();

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    assert_eq!(surface.take(), vec![DrawOp::Clear]);
}

#[test]
fn stickers_render_their_glyph_at_their_position_and_angle() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_sticker("🌈");
    session.tools_mut().set_rotation_angle(90.0);
    session.pointer_down(pos2(50.0, 50.0));
    session.pointer_up();

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    assert_eq!(
        surface.take(),
        vec![
            DrawOp::Clear,
            DrawOp::Glyph {
                text: "🌈".to_owned(),
                center: pos2(50.0, 50.0),
                angle_deg: 90.0,
                size: STICKER_FONT_SIZE,
            },
        ]
    );
}

#[test]
fn entries_render_in_insertion_order() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_brush();
    session.pointer_down(pos2(1.0, 1.0));
    session.pointer_move(pos2(2.0, 2.0));
    session.pointer_up();
    session.tools_mut().select_sticker("🎉");
    session.pointer_down(pos2(3.0, 3.0));
    session.pointer_up();

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    let ops = surface.take();
    assert!(matches!(ops[0], DrawOp::Clear));
    assert!(matches!(ops[1], DrawOp::Polyline { .. }));
    assert!(matches!(ops[2], DrawOp::Glyph { .. }));
}

#[test]
fn undo_then_redo_leaves_the_rendered_output_unchanged() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_pen();
    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_move(pos2(40.0, 40.0));
    session.pointer_up();
    session.tools_mut().select_sticker("🌟");
    session.pointer_down(pos2(80.0, 80.0));
    session.pointer_up();

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    let before = surface.take();

    session.undo();
    session.redo();
    session.render(&mut surface);
    assert_eq!(surface.take(), before);
}

#[test]
fn clear_renders_an_empty_canvas_regardless_of_prior_state() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_brush();
    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_move(pos2(20.0, 20.0));
    session.pointer_up();
    session.undo();
    session.clear();

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    assert_eq!(surface.take(), vec![DrawOp::Clear]);
}
