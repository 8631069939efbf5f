use std::cell::RefCell;
use std::rc::Rc;

use egui::{Event, Modifiers, PointerButton, Pos2};
use egui_kittest::Harness;
use egui_timeline::{TimelineState, TimelineTheme, TimelineWidget};
use library::model::{Frame, FrameRate, Output};
use library::timeline::{OutputHost, TimelineClick};

struct Fixture {
    state: TimelineState,
    output: Output,
    clicks: Vec<TimelineClick>,
    hint: Option<String>,
}

fn fixture() -> Rc<RefCell<Fixture>> {
    let mut output = Output::new(0, "clip", FrameRate::new(25, 1).unwrap(), 1500);
    output.add_bookmark(Frame(750), "middle").unwrap();
    let mut state = TimelineState::new(1.0);
    state
        .timeline_mut()
        .set_duration(Frame(1500), output.total_time());
    Rc::new(RefCell::new(Fixture {
        state,
        output,
        clicks: Vec::new(),
        hint: None,
    }))
}

fn harness(fx: Rc<RefCell<Fixture>>) -> Harness<'static> {
    let theme = TimelineTheme::default();
    Harness::builder()
        .with_size(egui::vec2(640.0, 120.0))
        .build_ui(move |ui| {
            let mut guard = fx.borrow_mut();
            let Fixture {
                state,
                output,
                clicks,
                hint,
            } = &mut *guard;
            let host = OutputHost::new(output, 1.0);
            let response = TimelineWidget::new(state, &theme).show(ui, &host);
            if let Some(click) = response.clicked {
                clicks.push(click);
            }
            *hint = response.hint;
        })
}

fn press(harness: &mut Harness<'static>, pos: Pos2) {
    harness.input_mut().events.push(Event::PointerMoved(pos));
    harness.input_mut().events.push(Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::default(),
    });
    harness.step();
    harness.input_mut().events.push(Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::default(),
    });
    harness.step();
}

#[test]
fn first_frame_paints_ruler() {
    let fx = fixture();
    let mut harness = harness(Rc::clone(&fx));
    harness.step();

    let fx = fx.borrow();
    let timeline = fx.state.timeline();
    assert!(!timeline.notches().is_empty());
    assert_eq!(timeline.labels()[0].text, "0:00");
    assert!(!timeline.needs_full_repaint());
    // Background, ticks and labels are retained.
    assert_eq!(
        fx.state.static_shape_count(),
        1 + timeline.notches().len() + timeline.labels().len()
    );
    assert_eq!(timeline.bookmark_lines().len(), 1);
}

#[test]
fn press_in_scrollbar_reports_frame() {
    let fx = fixture();
    let mut harness = harness(Rc::clone(&fx));
    harness.step();

    let (rect, scroll) = {
        let fx = fx.borrow();
        (fx.state.timeline().rect(), fx.state.timeline().scroll_rect())
    };
    let pos = Pos2::new(rect.left + rect.width / 2.0, scroll.top + scroll.height / 2.0);
    press(&mut harness, pos);

    let fx = fx.borrow();
    assert_eq!(fx.clicks.len(), 1);
    let click = fx.clicks[0];
    let host = OutputHost::new(&fx.output, 1.0);
    let x = pos.x - rect.left;
    assert_eq!(click.frame, fx.state.timeline().x_to_frame(x, &host));
    assert!((fx.state.timeline().cursor_x() - x).abs() < 1e-3);
}

#[test]
fn holding_still_emits_one_click() {
    let fx = fixture();
    let mut harness = harness(Rc::clone(&fx));
    harness.step();

    let (rect, scroll) = {
        let fx = fx.borrow();
        (fx.state.timeline().rect(), fx.state.timeline().scroll_rect())
    };
    let pos = Pos2::new(rect.left + 200.0, scroll.top + scroll.height / 2.0);
    harness.input_mut().events.push(Event::PointerMoved(pos));
    harness.input_mut().events.push(Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::default(),
    });
    // Long enough for egui to treat the hold as a drag.
    for _ in 0..8 {
        harness.step();
    }
    harness.input_mut().events.push(Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::default(),
    });
    harness.step();

    assert_eq!(fx.borrow().clicks.len(), 1);
}

#[test]
fn press_on_ruler_is_ignored() {
    let fx = fixture();
    let mut harness = harness(Rc::clone(&fx));
    harness.step();

    let rect = fx.borrow().state.timeline().rect();
    press(&mut harness, Pos2::new(rect.left + 100.0, rect.top + 2.0));

    let fx = fx.borrow();
    assert!(fx.clicks.is_empty());
    assert_eq!(fx.state.timeline().cursor_x(), 0.0);
}

#[test]
fn hovering_bookmark_reports_label() {
    let fx = fixture();
    let mut harness = harness(Rc::clone(&fx));
    harness.step();

    let (x, scroll) = {
        let fx = fx.borrow();
        let timeline = fx.state.timeline();
        (timeline.bookmark_lines()[0].line.x(), timeline.scroll_rect())
    };
    harness
        .input_mut()
        .events
        .push(Event::PointerMoved(Pos2::new(x, scroll.top + 2.0)));
    harness.step();

    assert_eq!(fx.borrow().hint.as_deref(), Some("middle"));
}
