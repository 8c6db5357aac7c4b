//! Walks every widget once and replays a small touch script.
//! Rendering goes to the log, there is no real backend here.

use anyhow::Error;
use log::debug;
use tap_widget::badge::RibbonBadge;
use tap_widget::button::{self, RadiusButton, RadiusButtonState};
use tap_widget::canvas::{Canvas, Color, TextMeasure, TextStyle};
use tap_widget::event::{ButtonOutcome, Outcome, TipOutcome, TouchEvent};
use tap_widget::flow;
use tap_widget::geom::{ContentBounds, Density, Point, PointF, Rect, RectF, Size};
use tap_widget::indicator::{PagerDots, PagerDotsState};
use tap_widget::tags::TagRow;
use tap_widget::tip::{
    handle_popup_events, BubbleSpec, Placement, TipBuilder, TipKind, TipLayout, TipMetrics,
    TipShell, TipView,
};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Error> {
    setup_logging()?;

    let mut canvas = LogCanvas;
    let fonts = CellFont;
    let mut shell = LogShell::default();

    let screen = Size::new(1080, 1920);
    let density = Density(2.75);

    // tag row along the top
    let tags = TagRow::new().tags(["rust", "widgets", "demo"]);
    let tag_size = tags.measure(&fonts);
    tags.render(
        Rect::new(40, 40, tag_size.width, tag_size.height),
        &mut canvas,
        &fonts,
    );

    // corner ribbon
    RibbonBadge::new("beta").render(Rect::new(780, 0, 300, 300), &mut canvas, &fonts);

    // pager dots near the bottom, mid-scroll
    let dots = PagerDots::new();
    let mut pager = PagerDotsState::new();
    pager.bind(4, 0);
    pager.scrolled(0, 0.4);
    let dots_area = Rect::new(0, 1800, 1080, 40);
    dots.render(dots_area, &mut canvas, &pager);

    // confirm button
    let b = RadiusButton::new("Continue").density(density);
    let mut confirm = RadiusButtonState::new();
    let height = b.height();
    b.render(
        Rect::new(340, 1600, 400, height),
        &mut canvas,
        &fonts,
        &mut confirm,
    );

    // guide bubble over the button, stays up while the button is used
    let mut guide = TipBuilder::new()
        .with(&screen)
        .content_lines(["tap continue to proceed", "swipe for more pages"])
        .kind(TipKind::Guide)
        .density(density)
        .build::<LogShell>()?;
    guide.show(&confirm.area, &mut shell, Placement::AutoVertical);

    let script = [
        TouchEvent::Down(Point::new(540, 1625)),
        TouchEvent::Up(Point::new(540, 1625)),
    ];
    for event in script {
        let r = scene_touch(&event, &mut guide, &mut shell, &mut confirm);
        debug!("{:?} -> {:?}", event, r);
    }
    guide.dismiss(&mut shell);

    // info bubble at the dots, a stray touch clears it
    let mut hint = TipBuilder::new()
        .with(&screen)
        .content("swipe to flip pages")
        .density(density)
        .build::<LogShell>()?;
    hint.show(&dots_area, &mut shell, Placement::Top);

    let stray = TouchEvent::Down(Point::new(100, 100));
    let r = scene_touch(&stray, &mut hint, &mut shell, &mut confirm);
    debug!("{:?} -> {:?}", stray, r);
    debug!("hint still showing: {}", hint.is_showing());

    println!("rendered the gallery, see gallery.log");
    Ok(())
}

/// One touch against the whole scene. Overlays run before the
/// regular widgets.
fn scene_touch(
    event: &TouchEvent,
    tip: &mut TipView<LogShell>,
    shell: &mut LogShell,
    confirm: &mut RadiusButtonState,
) -> Outcome {
    match handle_popup_events(tip, event) {
        TipOutcome::Hide => {
            tip.dismiss(shell);
            return Outcome::Changed;
        }
        r => flow!(r),
    }

    flow!(match button::handle_events(confirm, event) {
        ButtonOutcome::Pressed => {
            debug!("continue pressed");
            Outcome::Changed
        }
        r => r.into(),
    });

    Outcome::Continue
}

/// Canvas that logs every operation instead of drawing.
#[derive(Debug)]
struct LogCanvas;

impl Canvas for LogCanvas {
    fn fill_rect(&mut self, rect: RectF, color: Color) {
        debug!("rect {:?} {:?}", rect, color);
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color) {
        debug!("round-rect {:?} r={} {:?}", rect, radius, color);
    }

    fn fill_circle(&mut self, center: PointF, radius: f32, color: Color) {
        debug!("circle {:?} r={} {:?}", center, radius, color);
    }

    fn fill_arc(&mut self, oval: RectF, start: f32, sweep: f32, use_center: bool, color: Color) {
        debug!(
            "arc {:?} {}..{} center={} {:?}",
            oval, start, sweep, use_center, color
        );
    }

    fn stroke_arc(&mut self, oval: RectF, start: f32, sweep: f32, width: f32, color: Color) {
        debug!("stroke-arc {:?} {}..{} w={} {:?}", oval, start, sweep, width, color);
    }

    fn fill_polygon(&mut self, points: &[PointF], color: Color) {
        debug!("polygon {:?} {:?}", points, color);
    }

    fn line(&mut self, from: PointF, to: PointF, width: f32, color: Color) {
        debug!("line {:?}..{:?} w={} {:?}", from, to, width, color);
    }

    fn text(&mut self, text: &str, origin: PointF, style: &TextStyle) {
        debug!("text {:?} at {:?} size={}", text, origin, style.size);
    }

    fn save(&mut self) {
        debug!("save");
    }

    fn rotate(&mut self, degrees: f32, pivot: PointF) {
        debug!("rotate {} around {:?}", degrees, pivot);
    }

    fn restore(&mut self) {
        debug!("restore");
    }
}

/// Fixed-cell font metrics, good enough for a logged rendering.
#[derive(Debug)]
struct CellFont;

impl TextMeasure for CellFont {
    fn text_size(&self, text: &str, size: f32) -> Size {
        Size::new((text.chars().count() as f32 * size / 2.0) as i32, size as i32)
    }

    fn center_to_baseline(&self, size: f32) -> f32 {
        size * 0.35
    }
}

/// Tip host that logs presentations.
#[derive(Debug, Default)]
struct LogShell {
    next: usize,
}

impl TipShell for LogShell {
    type Handle = usize;

    fn measure(&mut self, spec: &BubbleSpec) -> TipMetrics {
        let size = (spec.text_size * 4) as f32;

        let mut width = 0;
        let mut height = 0;
        for line in spec.text.lines() {
            let bounds = CellFont.text_size(line, size);
            width = width.max(bounds.width);
            height += bounds.height;
        }

        TipMetrics {
            content: ContentBounds::new(
                width + spec.padding.left + spec.padding.right,
                height + spec.padding.top + spec.padding.bottom,
                spec.padding,
            ),
            arrow: Size::new(20, 10),
        }
    }

    fn present(&mut self, spec: &BubbleSpec, layout: &TipLayout) -> usize {
        self.next += 1;
        debug!(
            "tip #{} {:?} {:?} at {:?} arrow {:?}",
            self.next, spec.placement, spec.text, layout.location, layout.arrow
        );
        self.next
    }

    fn dismiss(&mut self, handle: usize) {
        debug!("tip #{} dismissed", handle);
    }
}

fn setup_logging() -> Result<(), Error> {
    let log_path = PathBuf::from(".");
    let log_file = log_path.join("gallery.log");
    _ = fs::remove_file(&log_file);
    fern::Dispatch::new()
        .format(|out, message, _record| {
            out.finish(format_args!("{}", message)) //
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log_file)?)
        .apply()?;
    Ok(())
}
