//! Analyser resolution ("sensitivity") steps.

use crate::constants::{FFT_SIZE_MAX, FFT_SIZE_MIN};

/// Double the fft size, capped at the WebAudio maximum.
#[inline]
pub fn increase_fft_size(fft_size: u32) -> u32 {
    fft_size.saturating_mul(2).min(FFT_SIZE_MAX)
}

/// Halve the fft size, floored at the WebAudio minimum.
#[inline]
pub fn decrease_fft_size(fft_size: u32) -> u32 {
    (fft_size / 2).max(FFT_SIZE_MIN)
}

/// Number of frequency bands an analyser of this size reports.
#[inline]
pub fn band_count(fft_size: u32) -> usize {
    (fft_size / 2) as usize
}
