//! Playback bookkeeping for a restartable buffer source.
//!
//! WebAudio buffer sources play once and cannot be repositioned, so seeking,
//! pausing and rate changes are implemented by stopping the source and
//! starting a new one at an offset. `Playhead` keeps the arithmetic for that
//! offset; `PlaybackState` keeps the play/pause flags the controls consult.
//! All times are in seconds on the audio context clock.

use crate::constants::{RATE_MIN, RATE_STEP};

#[derive(Clone, Debug, PartialEq)]
pub struct Playhead {
    offset: f64,
    started_at: Option<f64>,
    rate: f64,
    duration: Option<f64>,
    looping: bool,
}

impl Default for Playhead {
    fn default() -> Self {
        Self {
            offset: 0.0,
            started_at: None,
            rate: 1.0,
            duration: None,
            looping: true,
        }
    }
}

impl Playhead {
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn has_buffer(&self) -> bool {
        self.duration.is_some()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// A new buffer replaces the old one and rewinds to the start.
    pub fn load(&mut self, now: f64, duration: f64) {
        self.duration = Some(duration.max(0.0));
        self.offset = 0.0;
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    /// Current position in the buffer.
    pub fn position(&self, now: f64) -> f64 {
        let raw = match self.started_at {
            Some(t0) => self.offset + (now - t0).max(0.0) * self.rate,
            None => self.offset,
        };
        self.wrap(raw)
    }

    fn wrap(&self, t: f64) -> f64 {
        match self.duration {
            Some(d) if d > 0.0 && self.looping && t > d => t.rem_euclid(d),
            Some(d) => t.clamp(0.0, d),
            None => t.max(0.0),
        }
    }

    /// Start advancing from the current offset; returns the offset the
    /// source should start at.
    pub fn play(&mut self, now: f64) -> f64 {
        self.offset = self.position(now);
        self.started_at = Some(now);
        self.offset
    }

    pub fn pause(&mut self, now: f64) {
        self.offset = self.position(now);
        self.started_at = None;
    }

    /// Jump to `t`, clamped into the buffer. Returns the clamped position,
    /// or `None` when no buffer is loaded.
    pub fn seek(&mut self, now: f64, t: f64) -> Option<f64> {
        let duration = self.duration?;
        self.offset = t.clamp(0.0, duration);
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
        Some(self.offset)
    }

    pub fn seek_by(&mut self, now: f64, delta: f64) -> Option<f64> {
        let target = self.position(now) + delta;
        self.seek(now, target)
    }

    /// Seek to a percentage of the buffer duration.
    pub fn seek_percent(&mut self, now: f64, percent: f64) -> Option<f64> {
        let duration = self.duration?;
        self.seek(now, duration * (percent / 100.0))
    }

    pub fn set_rate(&mut self, now: f64, rate: f64) {
        self.offset = self.position(now);
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
        self.rate = rate;
    }

    /// `position / duration * 100`, or `None` without a usable buffer.
    pub fn progress_percent(&self, now: f64) -> Option<f64> {
        match self.duration {
            Some(d) if d > 0.0 => Some(self.position(now) / d * 100.0),
            _ => None,
        }
    }
}

#[inline]
pub fn faster_rate(rate: f64) -> f64 {
    rate + RATE_STEP
}

#[inline]
pub fn slower_rate(rate: f64) -> f64 {
    if rate > RATE_MIN {
        rate - RATE_STEP
    } else {
        RATE_MIN
    }
}

/// What pressing the start control should do to the audio source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartAction {
    /// First start: begin playback and the frame loop.
    Begin,
    /// Paused: resume playback; the frame loop is already running.
    Resume,
    /// Already playing.
    Ignore,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    playing: bool,
    paused: bool,
    context_started: bool,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn context_started(&self) -> bool {
        self.context_started
    }

    pub fn mark_context_started(&mut self) {
        self.context_started = true;
    }

    pub fn start(&mut self) -> StartAction {
        if !self.playing {
            self.playing = true;
            self.paused = false;
            StartAction::Begin
        } else if self.paused {
            self.paused = false;
            StartAction::Resume
        } else {
            StartAction::Ignore
        }
    }

    /// Returns true when playback should actually pause.
    pub fn pause(&mut self) -> bool {
        if self.playing && !self.paused {
            self.paused = true;
            true
        } else {
            false
        }
    }

    /// The source reported the end of the buffer.
    pub fn ended(&mut self) {
        self.playing = false;
        self.paused = false;
    }

    /// True while audio is audible (playing and not paused).
    pub fn is_audible(&self) -> bool {
        self.playing && !self.paused
    }
}
