pub mod analyser;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod frame;
pub mod histogram;
pub mod mesh;
pub mod particles;
pub mod state;
pub mod transport;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use color::{hue, Hsl};
pub use config::VisualizerConfig;
pub use constants::*;
pub use controls::{Button, Control};
pub use error::{ConfigError, UnknownControl};
pub use frame::{FrameLoop, FrameReport, FrameScheduler, FrequencyProvider, SceneCompositor};
pub use histogram::{DrawSurface, HistogramRenderer, MagnitudeAxis};
pub use mesh::{ParticleInstance, SceneUniforms};
pub use particles::{Bounds, Particle, ParticleField};
pub use state::{Camera, ControlEffect, ViewMode, VisualizerState};
pub use transport::{PlaybackState, Playhead, StartAction};
