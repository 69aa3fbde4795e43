use glam::Vec3;

// Shared visual/audio tuning constants used by the core and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 128;
pub const BOUNDS: [f32; 3] = [250.0, 150.0, 250.0]; // full extents, centered at the origin
pub const GRAVITY: f32 = 0.01; // per-frame velocity loss per unit of scale
pub const MAGNITUDE_DIVISOR: f32 = 256.0; // byte magnitude -> scale / bar fraction

// Manual resize factors
pub const SIZE_UP_FACTOR: f32 = 1.2;
pub const SIZE_DOWN_FACTOR: f32 = 0.8;

// Analyser
pub const FFT_SIZE_DEFAULT: u32 = 256; // 128 frequency bands
pub const FFT_SIZE_MIN: u32 = 32;
pub const FFT_SIZE_MAX: u32 = 32768;

// Histogram layout
pub const FREQ_LABEL_EVERY: usize = 16;
pub const FREQ_LABEL_BOTTOM_INSET: f64 = 5.0;
pub const GRID_DIVISIONS: u32 = 10;
pub const GRID_LABEL_X: f64 = 5.0;
pub const LABEL_FONT: &str = "10px Arial";

// Transport
pub const SEEK_STEP_SEC: f64 = 10.0;
pub const RATE_STEP: f64 = 1.0;
pub const RATE_MIN: f64 = 1.0;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_Z_FLAT: f32 = 300.0;
pub const CAMERA_Z_DEPTH: f32 = 500.0;

// Particle mesh (wireframe sphere)
pub const SPHERE_RADIUS: f32 = 20.0;
pub const SPHERE_SEGMENTS: u32 = 32;

// Page background picked by the background button
pub const BACKGROUND_SATURATION: f32 = 50.0;
pub const BACKGROUND_LIGHTNESS: f32 = 15.0;

#[inline]
pub fn bounds_vec3() -> Vec3 {
    Vec3::from_array(BOUNDS)
}
