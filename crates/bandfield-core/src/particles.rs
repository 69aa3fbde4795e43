//! Audio-driven particle bodies.
//!
//! Each particle is bound to one frequency band. Every frame its scale is
//! reassigned from the band magnitude, its downward velocity grows in
//! proportion to that scale, and it bounces off the walls of a fixed box.
//! Physics runs in per-frame units; elapsed wall time is never consulted.

use crate::color::{hue, Hsl};
use crate::constants::*;
use glam::Vec3;

/// Axis-aligned box centered at the origin, stored as full extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    extents: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            extents: bounds_vec3(),
        }
    }
}

impl Bounds {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            extents: Vec3::new(x, y, z),
        }
    }

    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    pub fn half_extents(&self) -> Vec3 {
        self.extents / 2.0
    }

    /// Per-axis mask of coordinates lying strictly outside the box.
    pub fn outside(&self, p: Vec3) -> [bool; 3] {
        let h = self.half_extents();
        [
            p.x < -h.x || p.x > h.x,
            p.y < -h.y || p.y > h.y,
            p.z < -h.z || p.z > h.z,
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Uniform scale applied on all three axes.
    pub scale: f32,
    pub color: Hsl,
}

impl Particle {
    fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            scale: 1.0,
            color: Hsl::WHITE,
        }
    }

    /// One physics step for a band magnitude.
    fn step(&mut self, magnitude: u8, gravity: f32, bounds: &Bounds) {
        let scale = magnitude as f32 / MAGNITUDE_DIVISOR;
        self.scale = scale;
        self.velocity.y -= gravity * scale;
        self.position += self.velocity;
        // Reflect velocity only; the position may overshoot until the next frame.
        let [ox, oy, oz] = bounds.outside(self.position);
        if oy {
            self.velocity.y = -self.velocity.y;
        }
        if ox {
            self.velocity.x = -self.velocity.x;
        }
        if oz {
            self.velocity.z = -self.velocity.z;
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    gravity: f32,
}

impl ParticleField {
    /// Lay `count` particles along the x axis, centered on index `count / 2`.
    pub fn new(count: usize, separation: f32, bounds: Bounds, gravity: f32) -> Self {
        let center = (count / 2) as f32;
        let particles = (0..count)
            .map(|i| Particle::at(Vec3::new((i as f32 - center) * separation, 0.0, 0.0)))
            .collect::<Vec<_>>();
        log::debug!(
            "[particles] count={} separation={:.2} bounds={:?}",
            count,
            separation,
            bounds.extents()
        );
        Self {
            particles,
            bounds,
            gravity,
        }
    }

    pub fn from_config(config: &crate::VisualizerConfig) -> Self {
        Self::new(
            config.particle_count,
            config.separation,
            config.bounds,
            config.gravity,
        )
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Advance every particle that has a matching band in `sample`.
    ///
    /// Particle `i` reads `sample[i]`; extra particles or extra bands are
    /// ignored. Hue is spread over the sample length, scale is replaced (not
    /// accumulated) and velocity keeps integrating across calls.
    pub fn update(&mut self, sample: &[u8]) {
        let bands = sample.len();
        let gravity = self.gravity;
        let bounds = self.bounds;
        for (i, (particle, &magnitude)) in self.particles.iter_mut().zip(sample).enumerate() {
            particle.color = hue(i, bands);
            particle.step(magnitude, gravity, &bounds);
        }
    }

    /// Multiply every particle's current scale. The next `update` overwrites it.
    pub fn scale_by(&mut self, factor: f32) {
        for p in &mut self.particles {
            p.scale *= factor;
        }
    }

    pub fn increase_particle_size(&mut self) {
        self.scale_by(SIZE_UP_FACTOR);
    }

    pub fn decrease_particle_size(&mut self) {
        self.scale_by(SIZE_DOWN_FACTOR);
    }
}
