use eframe_sketchpad::{Drawable, SketchpadSession};
use egui::pos2;

fn stamp(session: &mut SketchpadSession, x: f32, y: f32) {
    session.pointer_down(pos2(x, y));
    session.pointer_up();
}

#[test]
fn begins_grow_the_undo_stack_and_keep_redo_empty() {
    let mut session = SketchpadSession::new();
    for i in 0..5 {
        stamp(&mut session, i as f32 * 10.0, 0.0);
    }
    assert_eq!(session.history().undo_stack().len(), 5);
    assert!(session.history().redo_stack().is_empty());
}

#[test]
fn undo_and_redo_move_entries_between_the_stacks() {
    let mut session = SketchpadSession::new();
    stamp(&mut session, 1.0, 1.0);
    stamp(&mut session, 2.0, 2.0);
    let a = session.history().undo_stack()[0].clone();
    let b = session.history().undo_stack()[1].clone();

    session.undo();
    assert_eq!(session.history().undo_stack(), vec![a.clone()]);
    assert_eq!(session.history().redo_stack(), vec![b.clone()]);

    session.redo();
    assert_eq!(session.history().undo_stack(), vec![a, b]);
    assert!(session.history().redo_stack().is_empty());
}

#[test]
fn undoing_more_times_than_there_are_entries_is_safe() {
    let mut session = SketchpadSession::new();
    stamp(&mut session, 1.0, 1.0);
    stamp(&mut session, 2.0, 2.0);

    for _ in 0..10 {
        session.undo();
    }
    assert!(session.history().undo_stack().is_empty());
    assert_eq!(session.history().redo_stack().len(), 2);

    for _ in 0..10 {
        session.redo();
    }
    assert_eq!(session.history().undo_stack().len(), 2);
    assert!(session.history().redo_stack().is_empty());
}

#[test]
fn drawing_after_undo_discards_the_redo_stack() {
    let mut session = SketchpadSession::new();
    stamp(&mut session, 1.0, 1.0);
    stamp(&mut session, 2.0, 2.0);
    session.undo();
    assert!(session.history().can_redo());

    stamp(&mut session, 3.0, 3.0);
    assert!(!session.history().can_redo());
    assert_eq!(session.history().undo_stack().len(), 2);
}

#[test]
fn clear_empties_both_stacks() {
    let mut session = SketchpadSession::new();
    stamp(&mut session, 1.0, 1.0);
    stamp(&mut session, 2.0, 2.0);
    session.undo();

    session.clear();
    assert!(session.history().undo_stack().is_empty());
    assert!(session.history().redo_stack().is_empty());
}

#[test]
fn a_drag_produces_one_stroke_with_points_in_drawing_order() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_pen();
    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_move(pos2(20.0, 20.0));
    session.pointer_move(pos2(30.0, 10.0));
    session.pointer_up();

    assert_eq!(session.history().undo_stack().len(), 1);
    let Drawable::Stroke(stroke) = &session.history().undo_stack()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(
        stroke.points(),
        &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)]
    );
}

#[test]
fn sticker_mode_places_the_selected_glyph_at_the_pointer() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_sticker("🌟");
    session.pointer_down(pos2(50.0, 50.0));
    session.pointer_up();

    let Drawable::Sticker(sticker) = &session.history().undo_stack()[0] else {
        panic!("expected a sticker");
    };
    assert_eq!(sticker.glyph(), "🌟");
    assert_eq!(sticker.pos(), pos2(50.0, 50.0));
    assert_eq!(sticker.angle(), 0.0);
}

#[test]
fn sticker_created_mid_session_uses_the_current_rotation_angle() {
    let mut session = SketchpadSession::new();
    session.tools_mut().select_sticker("🎉");
    session.tools_mut().set_rotation_angle(45.0);
    session.pointer_down(pos2(100.0, 200.0));
    session.pointer_up();

    let Drawable::Sticker(sticker) = &session.history().undo_stack()[0] else {
        panic!("expected a sticker");
    };
    assert_eq!(sticker.angle(), 45.0);
}
