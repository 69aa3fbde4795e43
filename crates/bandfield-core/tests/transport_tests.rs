// Host-side tests for playback bookkeeping.

use bandfield_core::transport::{faster_rate, slower_rate};
use bandfield_core::*;

fn loaded(duration: f64) -> Playhead {
    let mut p = Playhead::default();
    p.load(0.0, duration);
    p
}

#[test]
fn position_advances_only_while_playing() {
    let mut p = loaded(100.0);
    assert_eq!(p.position(5.0), 0.0);
    assert_eq!(p.play(5.0), 0.0);
    assert_eq!(p.position(8.0), 3.0);
    p.pause(8.0);
    assert_eq!(p.position(50.0), 3.0);
    assert_eq!(p.play(50.0), 3.0);
    assert_eq!(p.position(52.0), 5.0);
}

#[test]
fn rate_scales_elapsed_time() {
    let mut p = loaded(100.0);
    p.play(0.0);
    p.set_rate(2.0, 3.0);
    assert_eq!(p.position(2.0), 2.0);
    assert_eq!(p.position(4.0), 8.0);
}

#[test]
fn looping_wraps_and_non_looping_clamps() {
    let mut p = loaded(10.0);
    p.play(0.0);
    assert!((p.position(25.0) - 5.0).abs() < 1e-9);
    p.set_looping(false);
    assert_eq!(p.position(25.0), 10.0);
}

#[test]
fn seek_by_clamps_into_buffer() {
    let mut p = loaded(30.0);
    p.play(0.0);
    assert_eq!(p.seek_by(4.0, -10.0), Some(0.0));
    assert_eq!(p.seek_by(4.0, 10.0), Some(10.0));
    assert_eq!(p.seek_by(4.0, 100.0), Some(30.0));
}

#[test]
fn seek_restarts_clock_when_running() {
    let mut p = loaded(60.0);
    p.play(0.0);
    p.seek(10.0, 20.0);
    assert_eq!(p.position(10.0), 20.0);
    assert_eq!(p.position(11.0), 21.0);
}

#[test]
fn seek_without_buffer_is_ignored() {
    let mut p = Playhead::default();
    assert_eq!(p.seek(0.0, 5.0), None);
    assert_eq!(p.seek_by(0.0, 10.0), None);
    assert_eq!(p.seek_percent(0.0, 50.0), None);
    assert_eq!(p.progress_percent(0.0), None);
}

#[test]
fn seek_percent_maps_slider_to_time() {
    let mut p = loaded(200.0);
    assert_eq!(p.seek_percent(0.0, 25.0), Some(50.0));
    assert_eq!(p.progress_percent(0.0), Some(25.0));
}

#[test]
fn progress_is_current_over_duration() {
    let mut p = loaded(40.0);
    p.play(0.0);
    assert_eq!(p.progress_percent(10.0), Some(25.0));
}

#[test]
fn loading_rewinds() {
    let mut p = loaded(40.0);
    p.play(0.0);
    p.load(12.0, 80.0);
    assert_eq!(p.position(12.0), 0.0);
    assert_eq!(p.position(13.0), 1.0);
    assert_eq!(p.duration(), Some(80.0));
}

#[test]
fn rate_steps() {
    assert_eq!(faster_rate(1.0), 2.0);
    assert_eq!(faster_rate(3.0), 4.0);
    assert_eq!(slower_rate(3.0), 2.0);
    assert_eq!(slower_rate(1.0), 1.0);
    assert_eq!(slower_rate(0.5), 1.0);
}

#[test]
fn start_pause_resume_cycle() {
    let mut s = PlaybackState::default();
    assert!(!s.is_playing());
    assert_eq!(s.start(), StartAction::Begin);
    assert!(s.is_audible());
    assert_eq!(s.start(), StartAction::Ignore);
    assert!(s.pause());
    assert!(!s.pause(), "second pause is a no-op");
    assert!(s.is_paused());
    assert_eq!(s.start(), StartAction::Resume);
    assert!(s.is_audible());
}

#[test]
fn pause_before_start_is_ignored() {
    let mut s = PlaybackState::default();
    assert!(!s.pause());
    assert!(!s.is_paused());
}

#[test]
fn ended_resets_flags_and_next_start_begins_again() {
    let mut s = PlaybackState::default();
    s.start();
    s.pause();
    s.ended();
    assert!(!s.is_playing());
    assert!(!s.is_paused());
    assert_eq!(s.start(), StartAction::Begin);
}

#[test]
fn context_start_is_sticky() {
    let mut s = PlaybackState::default();
    assert!(!s.context_started());
    s.mark_context_started();
    s.ended();
    assert!(s.context_started());
}
