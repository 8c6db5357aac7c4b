use tap_widget::canvas::{Canvas, Color, TextStyle};
use tap_widget::geom::{PointF, Rect, RectF, Size};
use tap_widget::indicator::{PagerDots, PagerDotsState};

#[derive(Debug, PartialEq)]
enum Op {
    Circle(PointF, f32, Color),
    Rect(RectF, Color),
    Arc(RectF, f32, f32, bool, Color),
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

    fn fill_circle(&mut self, center: PointF, radius: f32, color: Color) {
        self.ops.push(Op::Circle(center, radius, color));
    }

    fn fill_arc(&mut self, oval: RectF, start: f32, sweep: f32, use_center: bool, color: Color) {
        self.ops.push(Op::Arc(oval, start, sweep, use_center, color));
    }

    fn stroke_arc(&mut self, _oval: RectF, _start: f32, _sweep: f32, _width: f32, _color: Color) {}

    fn fill_polygon(&mut self, _points: &[PointF], _color: Color) {}

    fn line(&mut self, _from: PointF, _to: PointF, _width: f32, _color: Color) {}

    fn text(&mut self, _text: &str, _origin: PointF, _style: &TextStyle) {}

    fn save(&mut self) {}

    fn rotate(&mut self, _degrees: f32, _pivot: PointF) {}

    fn restore(&mut self) {}
}

#[test]
fn test_measure() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();

    assert_eq!(dots.measure(&state), Size::new(0, 0));

    state.bind(1, 0);
    assert_eq!(dots.measure(&state), Size::new(24, 24));

    state.bind(5, 0);
    assert_eq!(dots.measure(&state), Size::new(160, 24));
}

#[test]
fn test_layout_at_rest() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();
    state.bind(5, 0);

    let layout = dots.layout(Rect::new(0, 0, 400, 100), &state);

    // run centered in the area
    assert_eq!(
        layout.dots,
        vec![
            PointF::new(132.0, 12.0),
            PointF::new(166.0, 12.0),
            PointF::new(200.0, 12.0),
            PointF::new(234.0, 12.0),
            PointF::new(268.0, 12.0),
        ]
    );
    assert_eq!(layout.radius, 12.0);

    // pill collapsed on the first dot
    let pill = layout.pill.unwrap();
    assert_eq!(pill.body, RectF::new(132.0, 0.0, 132.0, 24.0));
    assert_eq!(pill.left_cap, RectF::new(120.0, 0.0, 144.0, 24.0));
    assert_eq!(pill.right_cap, RectF::new(120.0, 0.0, 144.0, 24.0));
}

#[test]
fn test_layout_scrolling() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();
    state.bind(5, 0);

    // leading edge moves first
    state.scrolled(0, 0.15);
    let pill = dots.layout(Rect::new(0, 0, 400, 100), &state).pill.unwrap();
    assert_eq!(pill.body, RectF::new(132.0, 0.0, 149.0, 24.0));

    // leading edge arrived, trailing edge still at the start
    state.scrolled(0, 0.5);
    let pill = dots.layout(Rect::new(0, 0, 400, 100), &state).pill.unwrap();
    assert_eq!(pill.body, RectF::new(132.0, 0.0, 166.0, 24.0));

    // trailing edge catches up
    state.scrolled(0, 0.85);
    let pill = dots.layout(Rect::new(0, 0, 400, 100), &state).pill.unwrap();
    assert!((pill.body.left - 149.0).abs() < 1e-3);
    assert_eq!(pill.body.right, 166.0);

    state.scrolled(0, 1.0);
    let pill = dots.layout(Rect::new(0, 0, 400, 100), &state).pill.unwrap();
    assert!((pill.body.left - 166.0).abs() < 1e-3);
    assert_eq!(pill.body.right, 166.0);
}

#[test]
fn test_layout_last_page() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();
    state.bind(5, 4);

    // there is no next dot, the pill stays put
    state.scrolled(4, 0.5);
    let pill = dots.layout(Rect::new(0, 0, 400, 100), &state).pill.unwrap();
    assert_eq!(pill.body, RectF::new(268.0, 0.0, 268.0, 24.0));
}

#[test]
fn test_select() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();
    state.bind(5, 0);
    state.scrolled(0, 0.4);

    state.select(2);
    assert_eq!(state.index, 2);
    assert_eq!(state.percent, 0.0);

    let pill = dots.layout(Rect::new(0, 0, 400, 100), &state).pill.unwrap();
    assert_eq!(pill.body, RectF::new(200.0, 0.0, 200.0, 24.0));
}

#[test]
fn test_render() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();
    state.bind(3, 0);

    let mut canvas = RecordingCanvas::default();
    dots.render(Rect::new(0, 0, 400, 100), &mut canvas, &state);

    assert_eq!(canvas.ops.len(), 6);
    assert_eq!(
        canvas.ops[0],
        Op::Circle(PointF::new(166.0, 12.0), 12.0, Color(0xFF_D6_D6_D6))
    );
    assert_eq!(
        canvas.ops[3],
        Op::Rect(RectF::new(166.0, 0.0, 166.0, 24.0), Color::WHITE)
    );
    assert_eq!(
        canvas.ops[4],
        Op::Arc(
            RectF::new(154.0, 0.0, 178.0, 24.0),
            90.0,
            180.0,
            true,
            Color::WHITE
        )
    );
    assert_eq!(
        canvas.ops[5],
        Op::Arc(
            RectF::new(154.0, 0.0, 178.0, 24.0),
            -90.0,
            180.0,
            true,
            Color::WHITE
        )
    );
}

#[test]
fn test_render_empty() {
    let dots = PagerDots::new();
    let mut state = PagerDotsState::new();

    let mut canvas = RecordingCanvas::default();
    dots.render(Rect::new(0, 0, 400, 100), &mut canvas, &state);

    assert!(canvas.ops.is_empty());
}
