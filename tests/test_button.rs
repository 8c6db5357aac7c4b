use tap_widget::button::{handle_events, PaintStyle, RadiusButton, RadiusButtonState, RoundedEdges};
use tap_widget::canvas::{Canvas, Color, TextAlign, TextMeasure, TextStyle};
use tap_widget::event::{ButtonOutcome, HandleEvent, Regular, TouchEvent};
use tap_widget::geom::{Density, Point, PointF, Rect, RectF, Size};

#[derive(Debug)]
struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn text_size(&self, text: &str, size: f32) -> Size {
        Size::new(text.chars().count() as i32 * size as i32 / 2, size as i32)
    }

    fn center_to_baseline(&self, size: f32) -> f32 {
        size * 0.25
    }
}

#[derive(Debug, PartialEq)]
enum Op {
    Rect(RectF, Color),
    FillArc(RectF, f32, f32, bool, Color),
    StrokeArc(RectF, f32, f32, f32, Color),
    Line(PointF, PointF, f32, Color),
    Text(String, PointF, TextStyle),
}

#[derive(Debug, Default)]
struct RecordingCanvas {
    ops: Vec<Op>,
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.ops.push(Op::Rect(rect, color));
    }

    fn fill_round_rect(&mut self, _rect: RectF, _radius: f32, _color: Color) {}

    fn fill_circle(&mut self, _center: PointF, _radius: f32, _color: Color) {}

    fn fill_arc(&mut self, oval: RectF, start: f32, sweep: f32, use_center: bool, color: Color) {
        self.ops.push(Op::FillArc(oval, start, sweep, use_center, color));
    }

    fn stroke_arc(&mut self, oval: RectF, start: f32, sweep: f32, width: f32, color: Color) {
        self.ops.push(Op::StrokeArc(oval, start, sweep, width, color));
    }

    fn fill_polygon(&mut self, _points: &[PointF], _color: Color) {}

    fn line(&mut self, from: PointF, to: PointF, width: f32, color: Color) {
        self.ops.push(Op::Line(from, to, width, color));
    }

    fn text(&mut self, text: &str, origin: PointF, style: &TextStyle) {
        self.ops.push(Op::Text(text.into(), origin, *style));
    }

    fn save(&mut self) {}

    fn rotate(&mut self, _degrees: f32, _pivot: PointF) {}

    fn restore(&mut self) {}
}

const THEME: Color = Color(0xFF_FF_40_81);

#[test]
fn test_press() {
    let mut state = RadiusButtonState::new();
    state.area = Rect::new(0, 0, 200, 50);

    let r = handle_events(&mut state, &TouchEvent::Down(Point::new(10, 10)));
    assert_eq!(r, ButtonOutcome::Changed);
    assert!(state.armed);

    let r = handle_events(&mut state, &TouchEvent::Move(Point::new(20, 10)));
    assert_eq!(r, ButtonOutcome::Unchanged);
    assert!(state.armed);

    let r = handle_events(&mut state, &TouchEvent::Up(Point::new(20, 10)));
    assert_eq!(r, ButtonOutcome::Pressed);
    assert!(!state.armed);
}

#[test]
fn test_release_outside() {
    let mut state = RadiusButtonState::new();
    state.area = Rect::new(0, 0, 200, 50);

    let r = handle_events(&mut state, &TouchEvent::Down(Point::new(10, 10)));
    assert_eq!(r, ButtonOutcome::Changed);

    // dragging off the button aborts the press
    let r = handle_events(&mut state, &TouchEvent::Up(Point::new(500, 500)));
    assert_eq!(r, ButtonOutcome::Changed);
    assert!(!state.armed);
}

#[test]
fn test_cancel() {
    let mut state = RadiusButtonState::new();
    state.area = Rect::new(0, 0, 200, 50);

    handle_events(&mut state, &TouchEvent::Down(Point::new(10, 10)));
    let r = handle_events(&mut state, &TouchEvent::Cancel);
    assert_eq!(r, ButtonOutcome::Changed);
    assert!(!state.armed);

    let r = handle_events(&mut state, &TouchEvent::Cancel);
    assert_eq!(r, ButtonOutcome::Continue);
}

#[test]
fn test_outside_events() {
    let mut state = RadiusButtonState::new();
    state.area = Rect::new(0, 0, 200, 50);

    let r = handle_events(&mut state, &TouchEvent::Down(Point::new(500, 500)));
    assert_eq!(r, ButtonOutcome::Continue);
    assert!(!state.armed);

    let r = handle_events(&mut state, &TouchEvent::Move(Point::new(500, 500)));
    assert_eq!(r, ButtonOutcome::Continue);

    let r = handle_events(&mut state, &TouchEvent::Up(Point::new(10, 10)));
    assert_eq!(r, ButtonOutcome::Continue);
}

#[test]
fn test_disabled() {
    let mut state = RadiusButtonState::new();
    state.area = Rect::new(0, 0, 200, 50);
    state.enabled = false;

    let r = state.handle(&TouchEvent::Down(Point::new(10, 10)), Regular);
    assert_eq!(r, ButtonOutcome::Continue);
    assert!(!state.armed);
}

#[test]
fn test_height() {
    assert_eq!(RadiusButton::new("x").height(), 50);
    assert_eq!(RadiusButton::new("x").density(Density(2.0)).height(), 100);
}

#[test]
fn test_render_fill() {
    let mut canvas = RecordingCanvas::default();
    let mut state = RadiusButtonState::new();

    RadiusButton::new("Ok").render(
        Rect::new(0, 0, 200, 50),
        &mut canvas,
        &FixedMeasure,
        &mut state,
    );

    assert_eq!(state.area, Rect::new(0, 0, 200, 50));

    assert_eq!(canvas.ops.len(), 4);
    assert_eq!(
        canvas.ops[0],
        Op::FillArc(RectF::new(0.0, 0.0, 50.0, 50.0), 90.0, 180.0, false, THEME)
    );
    assert_eq!(
        canvas.ops[1],
        Op::FillArc(
            RectF::new(150.0, 0.0, 200.0, 50.0),
            -90.0,
            180.0,
            false,
            THEME
        )
    );
    assert_eq!(
        canvas.ops[2],
        Op::Rect(RectF::new(25.0, 0.0, 175.0, 50.0), THEME)
    );
    assert_eq!(
        canvas.ops[3],
        Op::Text(
            "Ok".into(),
            PointF::new(100.0, 29.0),
            TextStyle {
                size: 16.0,
                color: Color::WHITE,
                align: TextAlign::Center,
                bold: false,
            }
        )
    );
}

#[test]
fn test_render_stroke_round() {
    let mut canvas = RecordingCanvas::default();
    let mut state = RadiusButtonState::new();

    RadiusButton::new("Ok")
        .paint_style(PaintStyle::STROKE)
        .render(
            Rect::new(0, 0, 200, 50),
            &mut canvas,
            &FixedMeasure,
            &mut state,
        );

    assert_eq!(canvas.ops.len(), 5);
    assert_eq!(
        canvas.ops[0],
        Op::StrokeArc(RectF::new(1.0, 1.0, 50.0, 49.0), 90.0, 180.0, 1.0, THEME)
    );
    assert_eq!(
        canvas.ops[1],
        Op::StrokeArc(
            RectF::new(150.0, 1.0, 199.0, 49.0),
            -90.0,
            180.0,
            1.0,
            THEME
        )
    );
    assert_eq!(
        canvas.ops[2],
        Op::Line(PointF::new(25.0, 1.0), PointF::new(175.0, 1.0), 1.0, THEME)
    );
    assert_eq!(
        canvas.ops[3],
        Op::Line(
            PointF::new(25.0, 49.0),
            PointF::new(175.0, 49.0),
            1.0,
            THEME
        )
    );

    // outlined buttons show the theme color on the text
    let Op::Text(_, _, style) = &canvas.ops[4] else {
        panic!("expected text op");
    };
    assert_eq!(style.color, THEME);
}

#[test]
fn test_render_stroke_square() {
    let mut canvas = RecordingCanvas::default();
    let mut state = RadiusButtonState::new();

    RadiusButton::new("Ok")
        .paint_style(PaintStyle::STROKE)
        .rounded(RoundedEdges::empty())
        .render(
            Rect::new(0, 0, 200, 50),
            &mut canvas,
            &FixedMeasure,
            &mut state,
        );

    // no arcs, four outline segments, text
    assert_eq!(canvas.ops.len(), 5);
    assert_eq!(
        canvas.ops[0],
        Op::Line(PointF::new(1.0, 1.0), PointF::new(199.0, 1.0), 1.0, THEME)
    );
    assert_eq!(
        canvas.ops[1],
        Op::Line(
            PointF::new(1.0, 49.0),
            PointF::new(199.0, 49.0),
            1.0,
            THEME
        )
    );
    assert_eq!(
        canvas.ops[2],
        Op::Line(PointF::new(1.0, 1.0), PointF::new(1.0, 49.0), 1.0, THEME)
    );
    assert_eq!(
        canvas.ops[3],
        Op::Line(
            PointF::new(199.0, 1.0),
            PointF::new(199.0, 49.0),
            1.0,
            THEME
        )
    );
}

#[test]
fn test_render_armed() {
    let mut canvas = RecordingCanvas::default();
    let mut state = RadiusButtonState::new();
    state.armed = true;

    RadiusButton::new("Ok").render(
        Rect::new(0, 0, 200, 50),
        &mut canvas,
        &FixedMeasure,
        &mut state,
    );

    let Op::FillArc(_, _, _, _, color) = &canvas.ops[0] else {
        panic!("expected arc op");
    };
    assert_eq!(*color, Color(0x99_FF_40_81));

    let Op::Text(_, _, style) = &canvas.ops[3] else {
        panic!("expected text op");
    };
    assert_eq!(style.color, Color(0x99_FF_FF_FF));
}

#[test]
fn test_render_disabled() {
    let mut canvas = RecordingCanvas::default();
    let mut state = RadiusButtonState::new();
    state.enabled = false;

    RadiusButton::new("Ok").render(
        Rect::new(0, 0, 200, 50),
        &mut canvas,
        &FixedMeasure,
        &mut state,
    );

    let Op::FillArc(_, _, _, _, color) = &canvas.ops[0] else {
        panic!("expected arc op");
    };
    assert_eq!(*color, Color(0xFF_BD_BD_BD));
}
