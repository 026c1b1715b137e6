//! Surface and engine wired together through the loopback host.

use std::collections::VecDeque;

use gainpad::prelude::*;
use gainpad::EditGroup;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A user's hand on the panel, one entry per frame.
#[derive(Clone, Copy, Default)]
struct Hand {
    press_button: bool,
    grab: bool,
    move_to: Option<f32>,
    release: bool,
}

#[derive(Default)]
struct Frames {
    script: VecDeque<Hand>,
    now: Hand,
    held: bool,
    released_last_frame: bool,
}

impl Frames {
    fn new(script: impl IntoIterator<Item = Hand>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Ui for Frames {
    fn begin_panel(&mut self, _title: &str, _origin: Point, _size: Size, _flags: PanelFlags) -> bool {
        self.now = self.script.pop_front().unwrap_or_default();
        true
    }

    fn end_panel(&mut self) {}

    fn button(&mut self, _label: &str) -> bool {
        self.now.press_button
    }

    // Deactivation is reported the frame after the release, as immediate-mode
    // toolkits do.
    fn slider_f32(&mut self, _label: &str, value: &mut f32, min: f32, max: f32) -> ItemResponse {
        let deactivated = std::mem::take(&mut self.released_last_frame);
        let activated = self.now.grab && !self.held;
        if self.now.grab {
            self.held = true;
        }

        let mut changed = false;
        if self.held {
            if let Some(to) = self.now.move_to {
                let to = to.clamp(min, max);
                changed = to != *value;
                *value = to;
            }
        }
        if self.now.release && self.held {
            self.held = false;
            self.released_last_frame = true;
        }
        ItemResponse { changed, activated, deactivated }
    }

    fn text(&mut self, _text: &str) {}
}

fn play(
    engine: &mut AudioEngine,
    surface: &mut ControlSurface,
    host: &mut Loopback,
    ui: &mut Frames,
    frames: usize,
) -> Vec<HostRequest> {
    let mut sent = Vec::new();
    for _ in 0..frames {
        surface.render(ui, host);
        sent.extend(host.pending().cloned());
        host.flush(engine, surface);
    }
    sent
}

fn grab() -> Hand {
    Hand { grab: true, ..Hand::default() }
}

fn to(value: f32) -> Hand {
    Hand { move_to: Some(value), ..Hand::default() }
}

fn release() -> Hand {
    Hand { release: true, ..Hand::default() }
}

#[test]
fn drag_gesture_reaches_engine_bracketed() {
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();

    let mut ui = Frames::new([grab(), to(-10.0), to(-20.0), to(-30.0), release()]);
    let sent = play(&mut engine, &mut surface, &mut host, &mut ui, 6);

    assert_eq!(
        sent,
        [
            HostRequest::EditParameter { id: PARAM_GAIN, started: true },
            HostRequest::SetParameterValue { id: PARAM_GAIN, value: -10.0 },
            HostRequest::SetParameterValue { id: PARAM_GAIN, value: -20.0 },
            HostRequest::SetParameterValue { id: PARAM_GAIN, value: -30.0 },
            HostRequest::EditParameter { id: PARAM_GAIN, started: false },
        ]
    );
    assert_eq!(engine.parameter_value(PARAM_GAIN), -30.0);
    assert_eq!(surface.gain(), -30.0);
    assert_eq!(
        host.undo_history(),
        [EditGroup { id: PARAM_GAIN, values: vec![-10.0, -20.0, -30.0] }]
    );
    assert!(!host.in_gesture());
}

#[test]
fn end_bracket_waits_for_the_frame_after_release() {
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();

    let mut ui = Frames::new([grab(), to(5.0), release()]);
    play(&mut engine, &mut surface, &mut host, &mut ui, 3);
    assert!(host.in_gesture());

    play(&mut engine, &mut surface, &mut host, &mut ui, 1);
    assert!(!host.in_gesture());
    assert_eq!(host.undo_history().len(), 1);
}

#[test]
fn no_interaction_sends_nothing() {
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();
    let mut ui = Frames::new([Hand::default(); 3]);
    let sent = play(&mut engine, &mut surface, &mut host, &mut ui, 3);
    assert!(sent.is_empty());
}

#[test]
fn picked_file_reaches_both_sides() {
    init_logging();
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();
    host.set_file_choice(Some("/samples/pad.wav"));

    let press = Hand { press_button: true, ..Hand::default() };
    let sent = play(&mut engine, &mut surface, &mut host, &mut Frames::new([press]), 1);

    assert_eq!(sent, [HostRequest::RequestStateFile { key: STATE_FILE.to_string() }]);
    assert_eq!(engine.file().unwrap().to_str(), Some("/samples/pad.wav"));
    assert_eq!(surface.selected_file(), Some("/samples/pad.wav"));
}

#[test]
fn cancelled_file_picker_changes_nothing() {
    init_logging();
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();

    let press = Hand { press_button: true, ..Hand::default() };
    play(&mut engine, &mut surface, &mut host, &mut Frames::new([press]), 1);

    assert!(engine.file().is_none());
    assert!(surface.selected_file().is_none());
}

#[test]
fn engine_clamping_is_echoed_to_surface() {
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();

    host.set_parameter_value(PARAM_GAIN, 99.0);
    host.flush(&mut engine, &mut surface);

    assert_eq!(engine.parameter_value(PARAM_GAIN), 30.0);
    assert_eq!(surface.gain(), 30.0);
    assert_eq!(host.undo_history(), [EditGroup { id: PARAM_GAIN, values: vec![30.0] }]);
}

#[test]
fn undeclared_parameter_is_not_delivered() {
    init_logging();
    let mut engine = create_engine();
    let mut surface = create_surface();
    let mut host = Loopback::new();

    host.set_parameter_value(9, -12.0);
    host.flush(&mut engine, &mut surface);

    assert!(host.undo_history().is_empty());
    assert_eq!(engine.parameter_value(PARAM_GAIN), 0.0);
    assert_eq!(surface.gain(), 0.0);
}
