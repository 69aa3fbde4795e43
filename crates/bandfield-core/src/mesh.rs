//! GPU-facing geometry and instance data for the particle scene.

use crate::particles::{Particle, ParticleField};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Per-particle instance record: xyz offset + uniform scale, then RGBA.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub offset_scale: [f32; 4],
    pub color: [f32; 4],
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        Self {
            offset_scale: [p.position.x, p.position.y, p.position.z, p.scale],
            color: p.color.to_rgba(1.0),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
}

pub fn instances(field: &ParticleField) -> Vec<ParticleInstance> {
    field.particles().iter().map(ParticleInstance::from).collect()
}

/// Line-list vertices outlining a UV sphere: one meridian per width segment
/// and one ring per interior latitude. Diagonals of the planar quads are
/// omitted, which is what an edge outline of the sphere looks like.
pub fn sphere_wireframe(radius: f32, width_segments: u32, height_segments: u32) -> Vec<[f32; 3]> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let point = |iu: u32, iv: u32| -> Vec3 {
        let phi = iu as f32 / w as f32 * TAU;
        let theta = iv as f32 / h as f32 * PI;
        Vec3::new(
            -radius * phi.cos() * theta.sin(),
            radius * theta.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut lines = Vec::with_capacity(((w * h + w * (h - 1)) * 2) as usize);
    for iu in 0..w {
        for iv in 0..h {
            lines.push(point(iu, iv).to_array());
            lines.push(point(iu, iv + 1).to_array());
        }
    }
    for iv in 1..h {
        for iu in 0..w {
            lines.push(point(iu, iv).to_array());
            lines.push(point(iu + 1, iv).to_array());
        }
    }
    lines
}
