// Host-side tests for user controls applied to the visualizer state.

use bandfield_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> VisualizerState {
    VisualizerState::new(VisualizerConfig::default(), 44100.0, 2.0)
}

fn press(state: &mut VisualizerState, button: Button, now: f64) -> ControlEffect {
    let mut rng = StdRng::seed_from_u64(7);
    state.apply(Control::Button(button), now, &mut rng)
}

#[test]
fn button_ids_round_trip_and_are_unique() {
    for b in Button::ALL {
        assert_eq!(b.element_id().parse::<Button>(), Ok(b));
    }
    let mut ids: Vec<&str> = Button::ALL.iter().map(|b| b.element_id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), Button::ALL.len());
}

#[test]
fn unknown_button_id_is_an_error() {
    let err = "launchButton".parse::<Button>().unwrap_err();
    assert_eq!(err, UnknownControl("launchButton".to_string()));
    assert!(err.to_string().contains("launchButton"));
}

#[test]
fn first_start_begins_loop_then_resume_does_not() {
    let mut s = make_state();
    assert_eq!(
        press(&mut s, Button::Start, 0.0),
        ControlEffect::Play {
            offset: 0.0,
            start_loop: true
        }
    );
    assert_eq!(press(&mut s, Button::Start, 1.0), ControlEffect::None);
    assert_eq!(press(&mut s, Button::Pause, 2.0), ControlEffect::Pause);
    assert_eq!(press(&mut s, Button::Pause, 3.0), ControlEffect::None);
    match press(&mut s, Button::Start, 4.0) {
        ControlEffect::Play { start_loop, .. } => assert!(!start_loop),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn seeking_without_buffer_does_nothing() {
    let mut s = make_state();
    assert_eq!(press(&mut s, Button::Forward, 0.0), ControlEffect::None);
    assert_eq!(press(&mut s, Button::Backward, 0.0), ControlEffect::None);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(s.apply(Control::Seek(50.0), 0.0, &mut rng), ControlEffect::None);
}

#[test]
fn forward_and_backward_step_ten_seconds() {
    let mut s = make_state();
    s.track_loaded(0.0, 25.0);
    assert_eq!(
        press(&mut s, Button::Forward, 0.0),
        ControlEffect::Reposition { offset: 10.0 }
    );
    assert_eq!(
        press(&mut s, Button::Forward, 0.0),
        ControlEffect::Reposition { offset: 20.0 }
    );
    assert_eq!(
        press(&mut s, Button::Forward, 0.0),
        ControlEffect::Reposition { offset: 25.0 }
    );
    assert_eq!(
        press(&mut s, Button::Backward, 0.0),
        ControlEffect::Reposition { offset: 15.0 }
    );
}

#[test]
fn slider_seek_uses_percent_of_duration() {
    let mut s = make_state();
    s.track_loaded(0.0, 120.0);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        s.apply(Control::Seek(50.0), 0.0, &mut rng),
        ControlEffect::Reposition { offset: 60.0 }
    );
}

#[test]
fn rate_buttons_step_and_floor_at_one() {
    let mut s = make_state();
    assert_eq!(press(&mut s, Button::Faster, 0.0), ControlEffect::SetRate(2.0));
    assert_eq!(press(&mut s, Button::Faster, 0.0), ControlEffect::SetRate(3.0));
    assert_eq!(press(&mut s, Button::Slower, 0.0), ControlEffect::SetRate(2.0));
    assert_eq!(press(&mut s, Button::Slower, 0.0), ControlEffect::SetRate(1.0));
    assert_eq!(press(&mut s, Button::Slower, 0.0), ControlEffect::SetRate(1.0));
}

#[test]
fn sensitivity_doubles_and_halves_within_limits() {
    let mut s = make_state();
    assert_eq!(s.fft_size, 256);
    assert_eq!(
        press(&mut s, Button::IncreaseSensitivity, 0.0),
        ControlEffect::SetFftSize(512)
    );
    for _ in 0..20 {
        press(&mut s, Button::IncreaseSensitivity, 0.0);
    }
    assert_eq!(s.fft_size, FFT_SIZE_MAX);
    for _ in 0..20 {
        press(&mut s, Button::DecreaseSensitivity, 0.0);
    }
    assert_eq!(s.fft_size, FFT_SIZE_MIN);
    assert_eq!(analyser::band_count(s.fft_size), 16);
    assert_eq!(analyser::band_count(FFT_SIZE_DEFAULT), PARTICLE_COUNT);
}

#[test]
fn toggle_3d_moves_camera_between_300_and_500() {
    let mut s = make_state();
    assert_eq!(s.camera().eye.z, 300.0);
    press(&mut s, Button::Toggle3D, 0.0);
    assert_eq!(s.view_mode, ViewMode::Depth);
    assert_eq!(s.camera().eye.z, 500.0);
    press(&mut s, Button::Toggle3D, 0.0);
    assert_eq!(s.camera().eye.z, 300.0);
}

#[test]
fn background_color_is_dim_and_desaturated() {
    let mut s = make_state();
    for _ in 0..10 {
        match press(&mut s, Button::BackgroundColor, 0.0) {
            ControlEffect::SetBackground(c) => {
                assert!(c.hue >= 0.0 && c.hue < 360.0);
                assert_eq!(c.saturation, 50.0);
                assert_eq!(c.lightness, 15.0);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }
}

#[test]
fn particle_size_buttons_scale_field() {
    let mut s = make_state();
    press(&mut s, Button::IncreaseParticleSize, 0.0);
    assert!((s.field.particles()[0].scale - 1.2).abs() < 1e-6);
    press(&mut s, Button::DecreaseParticleSize, 0.0);
    assert!((s.field.particles()[0].scale - 0.96).abs() < 1e-6);
}

#[test]
fn track_load_restarts_only_when_audible() {
    let mut s = make_state();
    assert_eq!(s.track_loaded(0.0, 30.0), None);
    press(&mut s, Button::Start, 1.0);
    assert_eq!(s.track_loaded(5.0, 60.0), Some(0.0));
    press(&mut s, Button::Pause, 6.0);
    assert_eq!(s.track_loaded(7.0, 60.0), None);
}

#[test]
fn select_track_asks_frontend_to_load() {
    let mut s = make_state();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        s.apply(Control::SelectTrack("song.mp3".into()), 0.0, &mut rng),
        ControlEffect::LoadTrack("song.mp3".into())
    );
}

#[test]
fn ended_stops_playback_and_freezes_position() {
    let mut s = make_state();
    s.track_loaded(0.0, 30.0);
    press(&mut s, Button::Start, 0.0);
    s.ended(12.0);
    assert!(!s.playback.is_playing());
    assert_eq!(s.playhead.position(20.0), 12.0);
}

#[test]
fn default_config_is_valid_and_invalid_ones_are_rejected() {
    assert_eq!(VisualizerConfig::default().validate(), Ok(()));

    let mut c = VisualizerConfig::default();
    c.particle_count = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoParticles));

    let mut c = VisualizerConfig::default();
    c.fft_size = 100;
    assert_eq!(c.validate(), Err(ConfigError::FftSize(100)));

    let mut c = VisualizerConfig::default();
    c.bounds = Bounds::new(250.0, 0.0, 250.0);
    assert!(matches!(c.validate(), Err(ConfigError::Bounds(_))));
}

#[test]
fn viewport_width_sets_separation() {
    let c = VisualizerConfig::default().with_viewport_width(1280.0);
    assert_eq!(c.separation, 10.0);
}
