//! Visual-side state owned by the frontend controller.
//!
//! These types intentionally avoid referencing platform-specific APIs. The web
//! frontend keeps one `VisualizerState`, applies user controls to it, and hands
//! it to the frame loop once per display refresh.

use crate::analyser::{decrease_fft_size, increase_fft_size};
use crate::color::Hsl;
use crate::constants::*;
use crate::controls::{Button, Control};
use crate::histogram::HistogramRenderer;
use crate::particles::ParticleField;
use crate::transport::{faster_rate, slower_rate, PlaybackState, Playhead, StartAction};
use crate::VisualizerConfig;
use glam::{Mat4, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +z axis looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Flat,
    Depth,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Flat => ViewMode::Depth,
            ViewMode::Depth => ViewMode::Flat,
        }
    }

    pub fn camera_distance(self) -> f32 {
        match self {
            ViewMode::Flat => CAMERA_Z_FLAT,
            ViewMode::Depth => CAMERA_Z_DEPTH,
        }
    }
}

/// Side effect a control asks the frontend to perform on audio or the page.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEffect {
    /// Nothing outside the state changed.
    None,
    /// Start the source at `offset`; `start_loop` on the very first start.
    Play { offset: f64, start_loop: bool },
    Pause,
    /// Restart the source at `offset` if it is currently audible.
    Reposition { offset: f64 },
    SetRate(f64),
    SetFftSize(u32),
    SetBackground(Hsl),
    LoadTrack(String),
}

pub struct VisualizerState {
    pub config: VisualizerConfig,
    pub field: ParticleField,
    pub histogram: HistogramRenderer,
    pub playback: PlaybackState,
    pub playhead: Playhead,
    pub view_mode: ViewMode,
    pub fft_size: u32,
    aspect: f32,
}

impl VisualizerState {
    pub fn new(config: VisualizerConfig, sample_rate: f32, aspect: f32) -> Self {
        let field = ParticleField::from_config(&config);
        let histogram = HistogramRenderer::new(sample_rate, config.magnitude_axis);
        let fft_size = config.fft_size;
        Self {
            config,
            field,
            histogram,
            playback: PlaybackState::default(),
            playhead: Playhead::default(),
            view_mode: ViewMode::default(),
            fft_size,
            aspect,
        }
    }

    pub fn camera(&self) -> Camera {
        Camera::looking_at_origin(self.view_mode.camera_distance(), self.aspect)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Apply a control at audio time `now`.
    pub fn apply<R: Rng + ?Sized>(&mut self, control: Control, now: f64, rng: &mut R) -> ControlEffect {
        let step = self.config.seek_step_sec;
        match control {
            Control::Button(Button::Start) => match self.playback.start() {
                StartAction::Begin => ControlEffect::Play {
                    offset: self.playhead.play(now),
                    start_loop: true,
                },
                StartAction::Resume => ControlEffect::Play {
                    offset: self.playhead.play(now),
                    start_loop: false,
                },
                StartAction::Ignore => ControlEffect::None,
            },
            Control::Button(Button::Pause) => {
                if self.playback.pause() {
                    self.playhead.pause(now);
                    ControlEffect::Pause
                } else {
                    ControlEffect::None
                }
            }
            Control::Button(Button::Backward) => reposition(self.playhead.seek_by(now, -step)),
            Control::Button(Button::Forward) => reposition(self.playhead.seek_by(now, step)),
            Control::Seek(percent) => reposition(self.playhead.seek_percent(now, percent)),
            Control::Button(Button::Faster) => {
                let rate = faster_rate(self.playhead.rate());
                self.playhead.set_rate(now, rate);
                ControlEffect::SetRate(rate)
            }
            Control::Button(Button::Slower) => {
                let rate = slower_rate(self.playhead.rate());
                self.playhead.set_rate(now, rate);
                ControlEffect::SetRate(rate)
            }
            Control::Button(Button::BackgroundColor) => {
                let hue = rng.gen::<f32>() * 360.0;
                ControlEffect::SetBackground(Hsl::new(
                    hue,
                    BACKGROUND_SATURATION,
                    BACKGROUND_LIGHTNESS,
                ))
            }
            Control::Button(Button::IncreaseParticleSize) => {
                self.field.increase_particle_size();
                ControlEffect::None
            }
            Control::Button(Button::DecreaseParticleSize) => {
                self.field.decrease_particle_size();
                ControlEffect::None
            }
            Control::Button(Button::IncreaseSensitivity) => {
                self.fft_size = increase_fft_size(self.fft_size);
                log::debug!("[controls] fft size -> {}", self.fft_size);
                ControlEffect::SetFftSize(self.fft_size)
            }
            Control::Button(Button::DecreaseSensitivity) => {
                self.fft_size = decrease_fft_size(self.fft_size);
                log::debug!("[controls] fft size -> {}", self.fft_size);
                ControlEffect::SetFftSize(self.fft_size)
            }
            Control::Button(Button::Toggle3D) => {
                self.view_mode = self.view_mode.toggled();
                log::debug!("[controls] view mode -> {:?}", self.view_mode);
                ControlEffect::None
            }
            Control::SelectTrack(url) => ControlEffect::LoadTrack(url),
        }
    }

    /// A decoded buffer is ready. Returns the offset to start the new source
    /// at when playback is currently audible.
    pub fn track_loaded(&mut self, now: f64, duration: f64) -> Option<f64> {
        self.playhead.load(now, duration);
        if self.playback.is_audible() {
            Some(self.playhead.play(now))
        } else {
            None
        }
    }

    /// The source ran off the end of the buffer.
    pub fn ended(&mut self, now: f64) {
        self.playhead.pause(now);
        self.playback.ended();
    }
}

fn reposition(offset: Option<f64>) -> ControlEffect {
    match offset {
        Some(offset) => ControlEffect::Reposition { offset },
        None => ControlEffect::None,
    }
}
