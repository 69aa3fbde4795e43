// Host-side tests for the particle field physics.

use bandfield_core::*;
use glam::Vec3;

fn default_field() -> ParticleField {
    ParticleField::new(PARTICLE_COUNT, 10.0, Bounds::default(), GRAVITY)
}

#[test]
fn field_starts_with_128_resting_white_particles_spread_on_x() {
    let field = default_field();
    assert_eq!(field.len(), 128);
    for (i, p) in field.particles().iter().enumerate() {
        assert_eq!(p.velocity, Vec3::ZERO);
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.color, Hsl::WHITE);
        assert_eq!(p.position.x, (i as f32 - 64.0) * 10.0);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.position.z, 0.0);
    }
}

#[test]
fn zero_sample_gives_zero_scale_and_no_gravity() {
    let mut field = default_field();
    let sample = [0u8; 128];
    for _ in 0..10 {
        field.update(&sample);
    }
    for p in field.particles() {
        assert_eq!(p.scale, 0.0);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.position.y, 0.0);
    }
}

#[test]
fn full_scale_sample_gives_255_over_256_everywhere() {
    let mut field = default_field();
    field.update(&[255u8; 128]);
    let expected = 255.0 / 256.0;
    for p in field.particles() {
        assert_eq!(p.scale, expected);
    }
    assert!((expected - 0.9961).abs() < 1e-4);
}

#[test]
fn gravity_accumulates_across_frames() {
    let mut field = default_field();
    let sample = [128u8; 128];
    field.update(&sample);
    field.update(&sample);
    field.update(&sample);
    let p = &field.particles()[0];
    // 3 frames of -0.01 * 0.5
    assert!((p.velocity.y + 0.015).abs() < 1e-6);
    // Euler: -0.005 - 0.010 - 0.015
    assert!((p.position.y + 0.03).abs() < 1e-6);
}

#[test]
fn crossing_top_bound_flips_velocity_without_clamping() {
    let mut field = default_field();
    {
        let p = &mut field.particles_mut()[10];
        p.position = Vec3::new(0.0, 74.5, 0.0);
        p.velocity = Vec3::new(0.0, 1.0, 0.0);
    }
    let sample = [0u8; 128];
    field.update(&sample);
    let p = &field.particles()[10];
    assert_eq!(p.velocity.y, -1.0);
    assert_eq!(p.position.y, 75.5, "position overshoots the bound");

    // Next frame moves back inside and keeps the flipped direction.
    field.update(&sample);
    let p = &field.particles()[10];
    assert_eq!(p.position.y, 74.5);
    assert_eq!(p.velocity.y, -1.0);
}

#[test]
fn double_flip_restores_original_direction() {
    let mut field = ParticleField::new(1, 0.0, Bounds::new(2.0, 2.0, 2.0), GRAVITY);
    {
        let p = &mut field.particles_mut()[0];
        p.position = Vec3::new(0.0, 0.0, 0.0);
        p.velocity = Vec3::new(0.0, 5.0, 0.0);
    }
    // Out above: flip down. Back at the center. Out below: flip up again.
    field.update(&[0]);
    assert_eq!(field.particles()[0].velocity.y, -5.0);
    field.update(&[0]);
    assert_eq!(field.particles()[0].position.y, 0.0);
    field.update(&[0]);
    assert_eq!(field.particles()[0].velocity.y, 5.0);
}

#[test]
fn axes_reflect_independently() {
    let mut field = ParticleField::new(1, 0.0, Bounds::default(), GRAVITY);
    {
        let p = &mut field.particles_mut()[0];
        p.position = Vec3::new(124.0, 0.0, -124.0);
        p.velocity = Vec3::new(2.0, 0.0, -2.0);
    }
    field.update(&[0]);
    let v = field.particles()[0].velocity;
    assert_eq!(v, Vec3::new(-2.0, 0.0, 2.0));
}

#[test]
fn particles_far_outside_x_keep_zero_velocity() {
    // Wide viewports lay particles beyond the x bound; with no x velocity the
    // reflection has nothing to flip.
    let mut field = ParticleField::new(128, 20.0, Bounds::default(), GRAVITY);
    field.update(&[200u8; 128]);
    let p = &field.particles()[0];
    assert_eq!(p.position.x, -1280.0);
    assert_eq!(p.velocity.x, 0.0);
}

#[test]
fn manual_resize_is_overwritten_by_next_update() {
    let mut field = default_field();
    let sample: Vec<u8> = (0..128).map(|i| (i * 2) as u8).collect();
    field.update(&sample);
    field.increase_particle_size();
    assert!((field.particles()[10].scale - 20.0 / 256.0 * 1.2).abs() < 1e-6);
    field.update(&sample);
    for (i, p) in field.particles().iter().enumerate() {
        assert_eq!(p.scale, sample[i] as f32 / 256.0);
    }
}

#[test]
fn resize_factors_multiply_current_scale() {
    let mut field = default_field();
    field.increase_particle_size();
    assert!((field.particles()[0].scale - 1.2).abs() < 1e-6);
    field.decrease_particle_size();
    assert!((field.particles()[0].scale - 0.96).abs() < 1e-6);
}

#[test]
fn shorter_sample_leaves_remaining_particles_untouched() {
    let mut field = default_field();
    field.update(&[255u8; 16]);
    for (i, p) in field.particles().iter().enumerate() {
        if i < 16 {
            assert_eq!(p.color, hue(i, 16));
            assert!(p.velocity.y < 0.0);
        } else {
            assert_eq!(p.scale, 1.0);
            assert_eq!(p.color, Hsl::WHITE);
            assert_eq!(p.velocity, Vec3::ZERO);
        }
    }
}

#[test]
fn longer_sample_ignores_extra_bands() {
    let mut field = ParticleField::new(4, 1.0, Bounds::default(), GRAVITY);
    field.update(&[64u8; 512]);
    assert_eq!(field.len(), 4);
    assert_eq!(field.particles()[3].color, hue(3, 512));
}

#[test]
fn empty_sample_is_a_no_op() {
    let mut field = default_field();
    let before = field.particles().to_vec();
    field.update(&[]);
    assert_eq!(field.particles(), &before[..]);
}

#[test]
fn color_follows_index_not_magnitude() {
    let mut a = default_field();
    let mut b = default_field();
    a.update(&[0u8; 128]);
    b.update(&[255u8; 128]);
    for i in 0..128 {
        assert_eq!(a.particles()[i].color, b.particles()[i].color);
        assert_eq!(a.particles()[i].color, Hsl::vivid(i as f32 / 128.0 * 360.0));
    }
}
