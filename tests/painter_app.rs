use eframe::egui::{self, pos2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
use mu_painter::draw::Color;
use mu_painter::gui::{PainterApp, WINDOW_SIZE};

fn run_frame(ctx: &egui::Context, app: &mut PainterApp, events: Vec<Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, WINDOW_SIZE)),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.ui(ctx));
}

fn primary(x: f32, y: f32, pressed: bool) -> Event {
    Event::PointerButton {
        pos: pos2(x, y),
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn drag_on_canvas_paints_and_release_clears_points() {
    let ctx = egui::Context::default();
    let mut app = PainterApp::new(&ctx);
    run_frame(&ctx, &mut app, vec![]);

    run_frame(
        &ctx,
        &mut app,
        vec![Event::PointerMoved(pos2(20.0, 20.0)), primary(20.0, 20.0, true)],
    );
    assert!(app.canvas().is_stroking());

    run_frame(&ctx, &mut app, vec![Event::PointerMoved(pos2(60.0, 20.0))]);
    assert_eq!(app.canvas().points(), &[(20, 20), (60, 20)]);
    assert_eq!(app.canvas().surface().pixel(40, 20), Some(Color::BLACK));
    assert_eq!(
        app.view().uploaded_revision(),
        Some(app.canvas().surface().revision())
    );

    run_frame(&ctx, &mut app, vec![primary(60.0, 20.0, false)]);
    assert!(!app.canvas().is_stroking());
    assert!(app.canvas().points().is_empty());
    assert_eq!(app.canvas().surface().pixel(40, 20), Some(Color::BLACK));
}

#[test]
fn idle_redraw_ticks_leave_the_surface_untouched() {
    let ctx = egui::Context::default();
    let mut app = PainterApp::new(&ctx);
    run_frame(&ctx, &mut app, vec![]);
    let revision = app.canvas().surface().revision();

    for _ in 0..5 {
        run_frame(&ctx, &mut app, vec![]);
    }
    assert_eq!(app.canvas().surface().revision(), revision);
    assert_eq!(app.canvas().surface().pixel(40, 20), Some(Color::WHITE));
}

#[test]
fn press_outside_canvas_does_not_start_a_stroke() {
    let ctx = egui::Context::default();
    let mut app = PainterApp::new(&ctx);
    run_frame(&ctx, &mut app, vec![]);

    run_frame(
        &ctx,
        &mut app,
        vec![
            Event::PointerMoved(pos2(1200.0, 400.0)),
            primary(1200.0, 400.0, true),
        ],
    );
    assert!(!app.canvas().is_stroking());
}

#[test]
fn open_color_dialog_blocks_new_strokes() {
    let ctx = egui::Context::default();
    let mut app = PainterApp::new(&ctx);
    run_frame(&ctx, &mut app, vec![]);

    app.color_picker_mut().open();
    run_frame(
        &ctx,
        &mut app,
        vec![Event::PointerMoved(pos2(20.0, 20.0)), primary(20.0, 20.0, true)],
    );
    assert!(!app.canvas().is_stroking());
    assert!(app.color_picker_mut().is_open());

    let result = app.color_picker_mut().dialog_mut().cancel();
    app.color_picker_mut().apply(result);
    assert_eq!(app.tools().pen().color, Color::BLACK);
}

#[test]
fn non_pointer_events_in_a_frame_are_skipped() {
    let ctx = egui::Context::default();
    let mut app = PainterApp::new(&ctx);
    run_frame(&ctx, &mut app, vec![]);

    run_frame(
        &ctx,
        &mut app,
        vec![
            Event::Text("x".into()),
            Event::PointerMoved(pos2(30.0, 30.0)),
            primary(30.0, 30.0, true),
            Event::Text("y".into()),
            Event::PointerMoved(pos2(30.0, 70.0)),
        ],
    );
    assert_eq!(app.canvas().points(), &[(30, 30), (30, 70)]);
    assert_eq!(app.canvas().surface().pixel(30, 50), Some(Color::BLACK));
}
