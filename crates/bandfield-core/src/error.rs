use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("bounds must be positive on every axis, got {0:?}")]
    Bounds([f32; 3]),
    #[error("fft size {0} must be a power of two in [{min}, {max}]", min = crate::FFT_SIZE_MIN, max = crate::FFT_SIZE_MAX)]
    FftSize(u32),
    #[error("sphere mesh needs at least 3 segments, got {0}")]
    SphereSegments(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown control id `{0}`")]
pub struct UnknownControl(pub String);
