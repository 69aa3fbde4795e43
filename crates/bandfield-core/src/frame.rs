//! Per-refresh orchestration.
//!
//! `FrameLoop` owns the running flag and frame counter. Whoever owns the
//! display-refresh primitive calls `tick` once per refresh and stops
//! re-requesting refreshes when `is_running` turns false.

use crate::histogram::DrawSurface;
use crate::particles::ParticleField;
use crate::state::{Camera, VisualizerState};
use instant::Instant;
use std::time::Duration;

/// Source of one frequency sample per frame (magnitudes 0..=255).
pub trait FrequencyProvider {
    fn frequency_data(&mut self) -> &[u8];
}

/// External 3D renderer that composites the particle scene.
pub trait SceneCompositor {
    type Error;
    fn composite(&mut self, field: &ParticleField, camera: &Camera) -> Result<(), Self::Error>;
}

impl<T: SceneCompositor> SceneCompositor for Option<T> {
    type Error = T::Error;

    fn composite(&mut self, field: &ParticleField, camera: &Camera) -> Result<(), Self::Error> {
        match self {
            Some(inner) => inner.composite(field, camera),
            None => Ok(()),
        }
    }
}

/// Explicit start/stop control over a refresh-driven loop.
pub trait FrameScheduler {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// 1-based index of the frame just produced.
    pub frame: u64,
    /// Number of bands in the sample used this frame.
    pub bands: usize,
    /// Playback progress in percent, absent without a loaded buffer.
    pub progress: Option<f64>,
    /// Time since the previous tick.
    pub interval: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
    last_tick: Option<Instant>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Produce one frame: update the particles, redraw the histogram with the
    /// same sample, composite the scene and report playback progress at audio
    /// time `now`. Returns `Ok(None)` while stopped.
    pub fn tick<P, S, C>(
        &mut self,
        state: &mut VisualizerState,
        provider: &mut P,
        surface: &mut S,
        compositor: &mut C,
        now: f64,
    ) -> Result<Option<FrameReport>, C::Error>
    where
        P: FrequencyProvider + ?Sized,
        S: DrawSurface + ?Sized,
        C: SceneCompositor + ?Sized,
    {
        if !self.running {
            return Ok(None);
        }
        let tick_at = Instant::now();
        let interval = self.last_tick.replace(tick_at).map(|t| tick_at - t);
        self.frames += 1;

        let sample = provider.frequency_data();
        state.field.update(sample);
        state.histogram.draw(surface, sample);
        let bands = sample.len();

        compositor.composite(&state.field, &state.camera())?;

        Ok(Some(FrameReport {
            frame: self.frames,
            bands,
            progress: state.playhead.progress_percent(now),
            interval,
        }))
    }
}

impl FrameScheduler for FrameLoop {
    fn start(&mut self) {
        if !self.running {
            log::debug!("[frame] loop start after {} frames", self.frames);
        }
        self.running = true;
    }

    fn stop(&mut self) {
        if self.running {
            log::debug!("[frame] loop stop after {} frames", self.frames);
        }
        self.running = false;
        self.last_tick = None;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
