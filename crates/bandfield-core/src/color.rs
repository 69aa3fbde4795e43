//! Band colors.
//!
//! Particles and histogram bars share one hue mapping so that band `i` has the
//! same color in both views. Colors stay in HSL until a consumer needs a CSS
//! string (canvas fill style) or an RGB triple (GPU instance data).

use std::fmt;

/// Color in CSS HSL terms: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl::new(0.0, 0.0, 100.0);

    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Fully saturated, mid-lightness color for a band hue.
    pub const fn vivid(hue: f32) -> Self {
        Self::new(hue, 100.0, 50.0)
    }

    /// Gamma-encoded RGB in \[0, 1\], matching what a browser paints for the
    /// equivalent `hsl()` CSS color. Exact at the primaries and secondaries.
    pub fn to_rgb(self) -> [f32; 3] {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = self.hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        [
            (r + m).clamp(0.0, 1.0),
            (g + m).clamp(0.0, 1.0),
            (b + m).clamp(0.0, 1.0),
        ]
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_rgb();
        [r, g, b, alpha]
    }

    /// CSS color string usable as a canvas fill/stroke style.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Hue in degrees for band `index` out of `total`.
#[inline]
pub fn band_hue(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index as f32 / total as f32) * 360.0
}

/// Color for band `index` out of `total`; shared by particles and bars.
#[inline]
pub fn hue(index: usize, total: usize) -> Hsl {
    Hsl::vivid(band_hue(index, total))
}
