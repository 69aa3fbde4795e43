//! Frequency histogram drawn onto an abstract 2D surface.
//!
//! The renderer clears and repaints the whole surface on every call: one bar
//! per band, a frequency label every sixteen bars and eleven horizontal
//! gridlines with magnitude labels. Layout math is exposed as plain functions
//! so it can be checked without a canvas.

use crate::color::{hue, Hsl};
use crate::constants::*;

/// Minimal 2D drawing target; the web frontend backs it with a canvas context.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsl);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Hsl);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Hsl);
}

/// Where the magnitude label for gridline `k` is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MagnitudeAxis {
    /// Label `k` sits on gridline `k`: "0" near the top although zero
    /// magnitude is drawn at the bottom.
    #[default]
    Inverted,
    /// Label `k` sits at `H - (H/10)k`: "0" at the bottom.
    BottomUp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Hsl,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label: Label,
}

/// One bar per band; bar `i` is `H * sample[i] / 256` tall and ends one
/// pixel above the bottom edge.
pub fn bars(sample: &[u8], width: f64, height: f64) -> Vec<Bar> {
    let len = sample.len();
    if len == 0 {
        return Vec::new();
    }
    let bar_width = width / len as f64;
    sample
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let percent = v as f64 / MAGNITUDE_DIVISOR as f64;
            let bar_height = height * percent;
            Bar {
                x: i as f64 * bar_width,
                y: height - bar_height - 1.0,
                width: bar_width,
                height: bar_height,
                color: hue(i, len),
            }
        })
        .collect()
}

/// Frequency in Hz at the left edge of band `index`.
#[inline]
pub fn band_frequency(index: usize, bands: usize, sample_rate: f32) -> f64 {
    if bands == 0 {
        return 0.0;
    }
    (index as f64 / bands as f64) * (sample_rate as f64 / 2.0)
}

/// Labels under every sixteenth bar, rounded to whole Hz.
pub fn frequency_labels(bands: usize, width: f64, height: f64, sample_rate: f32) -> Vec<Label> {
    if bands == 0 {
        return Vec::new();
    }
    let bar_width = width / bands as f64;
    (0..bands)
        .step_by(FREQ_LABEL_EVERY)
        .map(|i| Label {
            text: format!("{} Hz", band_frequency(i, bands, sample_rate).round() as i64),
            x: i as f64 * bar_width,
            y: height - FREQ_LABEL_BOTTOM_INSET,
        })
        .collect()
}

/// Eleven gridlines from `y = 0` to `y = H`, labelled on a 0..256 scale.
pub fn grid_lines(height: f64, axis: MagnitudeAxis) -> Vec<GridLine> {
    let step = height / GRID_DIVISIONS as f64;
    (0..=GRID_DIVISIONS)
        .map(|k| {
            let y = step * k as f64;
            let value = (k as f64 * MAGNITUDE_DIVISOR as f64 / GRID_DIVISIONS as f64).round();
            let label_y = match axis {
                MagnitudeAxis::Inverted => y,
                MagnitudeAxis::BottomUp => height - y,
            };
            GridLine {
                y,
                label: Label {
                    text: format!("{}", value as i64),
                    x: GRID_LABEL_X,
                    y: label_y,
                },
            }
        })
        .collect()
}

pub struct HistogramRenderer {
    sample_rate: f32,
    axis: MagnitudeAxis,
}

impl HistogramRenderer {
    pub fn new(sample_rate: f32, axis: MagnitudeAxis) -> Self {
        Self { sample_rate, axis }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    pub fn axis(&self) -> MagnitudeAxis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: MagnitudeAxis) {
        self.axis = axis;
    }

    /// Repaint `surface` from scratch for `sample`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, sample: &[u8]) {
        let width = surface.width();
        let height = surface.height();
        surface.clear();
        if sample.is_empty() || width <= 0.0 || height <= 0.0 {
            return;
        }

        for bar in bars(sample, width, height) {
            surface.fill_rect(bar.x, bar.y, bar.width, bar.height, bar.color);
        }
        for label in frequency_labels(sample.len(), width, height, self.sample_rate) {
            surface.fill_text(&label.text, label.x, label.y, Hsl::WHITE);
        }

        for line in grid_lines(height, self.axis) {
            surface.fill_text(&line.label.text, line.label.x, line.label.y, Hsl::WHITE);
            surface.stroke_line(0.0, line.y, width, line.y, Hsl::WHITE);
        }
    }
}
