//! End-to-end checks of the engine's parameter, smoothing and render contract.

use approx::assert_relative_eq;
use gainpad::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Dc(f32);

impl Instrument for Dc {
    fn next_sample(&mut self, _input: f32) -> f32 {
        self.0
    }
}

fn render<I: Instrument>(engine: &mut AudioEngine<I>, frames: usize) -> (Vec<f32>, Vec<f32>) {
    let input = vec![0.0_f32; frames];
    let mut left = vec![f32::NAN; frames];
    let mut right = vec![f32::NAN; frames];
    let mut buffer = Buffer::new([&input[..], &input[..]], [&mut left[..], &mut right[..]], frames);
    engine.render(&mut buffer, &[]);
    (left, right)
}

#[test]
fn coefficient_matches_decibel_formula() {
    for tenth_db in -899..=300 {
        let db = tenth_db as f32 / 10.0;
        assert_relative_eq!(db_to_coefficient(db), 10.0_f32.powf(db / 20.0), max_relative = 1e-5);
    }
    assert_eq!(db_to_coefficient(-90.0), 0.0);
    assert_eq!(db_to_coefficient(-150.0), 0.0);
}

#[test]
fn out_of_range_gain_is_stored_clamped() {
    let mut engine = create_engine();
    for (input, stored) in [(999.0, 30.0), (30.5, 30.0), (-90.1, -90.0), (-1e6, -90.0)] {
        engine.set_parameter_value(PARAM_GAIN, input);
        assert_eq!(engine.parameter_value(PARAM_GAIN), stored);
        assert_eq!(engine.target_gain(), db_to_coefficient(stored));
    }
}

#[test]
fn first_block_after_activate_has_no_ramp() {
    let mut engine = AudioEngine::with_instrument(Dc(1.0));
    engine.set_parameter_value(PARAM_GAIN, 12.0);
    engine.activate();
    let (left, right) = render(&mut engine, 1);
    assert_eq!(left[0], db_to_coefficient(12.0));
    assert_eq!(right[0], db_to_coefficient(12.0));
}

#[test]
fn smoothing_converges_monotonically_at_48k() {
    let mut engine = AudioEngine::with_instrument(Dc(1.0));
    engine.set_sample_rate(48000.0);
    engine.activate();
    engine.set_parameter_value(PARAM_GAIN, -6.0);

    let target = db_to_coefficient(-6.0);
    let (left, _) = render(&mut engine, 7000);
    for pair in left.windows(2) {
        assert!(pair[1] <= pair[0]);
        assert!(pair[1] >= target);
    }
    // 20 ms at 48 kHz is a 960-frame time constant
    let settled = left.iter().position(|g| (g - target).abs() < 1e-3).unwrap();
    assert!(settled > 960 && settled < 7000);
    assert!((engine.current_gain() - target).abs() < 1e-3);
}

#[test]
fn empty_file_state_keeps_previous_path() {
    init_logging();
    let mut engine = create_engine();
    engine.set_state(STATE_FILE, "/loops/break.wav").unwrap();
    assert!(engine.set_state(STATE_FILE, "").is_err());
    assert_eq!(engine.file().unwrap().to_str(), Some("/loops/break.wav"));
}

#[test]
fn silent_template_renders_silence() {
    let mut engine = create_engine();
    assert_eq!(engine.sample_rate(), 44100.0);
    engine.set_parameter_value(PARAM_GAIN, 0.0);
    engine.activate();
    let (left, right) = render(&mut engine, 4);
    assert_eq!(left, [0.0_f32; 4]);
    assert_eq!(right, [0.0_f32; 4]);
}

#[test]
fn gain_above_range_reads_back_as_max() {
    let mut engine = create_engine();
    engine.set_parameter_value(PARAM_GAIN, 999.0);
    assert_eq!(engine.parameter_value(PARAM_GAIN), 30.0);
}

#[test]
fn voice_truncates_instead_of_rounding() {
    let mut engine = create_engine();
    engine.set_parameter_value(PARAM_VOICE, 128.6);
    assert_eq!(engine.parameter_value(PARAM_VOICE), 128.0);
    engine.set_parameter_value(PARAM_VOICE, 64.9);
    assert_eq!(engine.parameter_value(PARAM_VOICE), 64.0);
}

#[test]
fn declared_metadata() {
    assert_eq!(PARAMETERS.len(), 2);
    assert_eq!(STATES.len(), 1);
    assert_eq!(CONFIG.unique_id, u32::from_be_bytes(*b"abcd"));
    assert_eq!(CONFIG.license, "ISC");
    assert!(CONFIG.has_editor);
}
