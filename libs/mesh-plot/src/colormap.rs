//! # Colormaps
//!
//! Scalar to RGB mapping for exported quantities.

use std::fmt;
use std::str::FromStr;

use crate::PlotError;

/// A colormap over the unit interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Colormap {
    /// Dark blue → cyan → yellow → dark red
    #[default]
    Jet,
    /// Black → white
    Gray,
}

impl Colormap {
    /// Color of `t`, clamped to `[0, 1]`.
    pub fn map(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let rgb = match self {
            Colormap::Jet => [
                ramp(1.5 - (4.0 * t - 3.0).abs()),
                ramp(1.5 - (4.0 * t - 2.0).abs()),
                ramp(1.5 - (4.0 * t - 1.0).abs()),
            ],
            Colormap::Gray => [t, t, t],
        };
        rgb.map(|c| (c * 255.0).round() as u8)
    }

    /// Maps `values` linearly from their own range onto the colormap.
    ///
    /// A constant field maps to the low end.
    pub fn map_all(&self, values: &[f64]) -> Vec<[u8; 3]> {
        let (lo, hi) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        values
            .iter()
            .map(|&v| {
                let t = if span > 0.0 { (v - lo) / span } else { 0.0 };
                self.map(t)
            })
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Jet => "jet",
            Colormap::Gray => "gray",
        }
    }
}

#[inline]
fn ramp(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

impl FromStr for Colormap {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jet" => Ok(Colormap::Jet),
            "gray" | "grey" => Ok(Colormap::Gray),
            other => Err(PlotError::UnknownColormap(other.to_string())),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
