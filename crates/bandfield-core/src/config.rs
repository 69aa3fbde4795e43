//! Runtime knobs gathered in one place.
//!
//! Defaults describe the stock page. Frontends override `separation`
//! from the viewport width before building the field.

use crate::constants::*;
use crate::error::ConfigError;
use crate::histogram::MagnitudeAxis;
use crate::particles::Bounds;

#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
    pub particle_count: usize,
    pub bounds: Bounds,
    /// Initial x spacing between neighbouring particles.
    pub separation: f32,
    pub gravity: f32,
    pub fft_size: u32,
    pub sphere_radius: f32,
    pub sphere_segments: u32,
    pub seek_step_sec: f64,
    pub initial_track: String,
    pub magnitude_axis: MagnitudeAxis,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            bounds: Bounds::default(),
            separation: 10.0,
            gravity: GRAVITY,
            fft_size: FFT_SIZE_DEFAULT,
            sphere_radius: SPHERE_RADIUS,
            sphere_segments: SPHERE_SEGMENTS,
            seek_step_sec: SEEK_STEP_SEC,
            initial_track: "audio.mp3".to_string(),
            magnitude_axis: MagnitudeAxis::default(),
        }
    }
}

impl VisualizerConfig {
    /// Spacing that spreads `particle_count` particles across `viewport_width`.
    pub fn with_viewport_width(mut self, viewport_width: f32) -> Self {
        self.separation = viewport_width / self.particle_count.max(1) as f32;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        let b = self.bounds.extents();
        if !(b.x > 0.0 && b.y > 0.0 && b.z > 0.0) {
            return Err(ConfigError::Bounds(b.to_array()));
        }
        if !is_valid_fft_size(self.fft_size) {
            return Err(ConfigError::FftSize(self.fft_size));
        }
        if self.sphere_segments < 3 {
            return Err(ConfigError::SphereSegments(self.sphere_segments));
        }
        Ok(())
    }
}

#[inline]
pub fn is_valid_fft_size(fft_size: u32) -> bool {
    fft_size.is_power_of_two() && (FFT_SIZE_MIN..=FFT_SIZE_MAX).contains(&fft_size)
}
