//! Double-slit interference pattern
//!
//! Computes the screen intensity distribution for two coherent slits in the
//! Fraunhofer (far-field) approximation, where the slit spacing is small
//! relative to the screen distance.

use crate::util::linspace;
use std::f32::consts::PI;

/// Default number of screen samples
pub const DEFAULT_SAMPLES: usize = 2000;

/// How many fringe spacings the default screen window spans on each side
const DEFAULT_FRINGE_COUNT: f32 = 10.0;

/// Double-slit experiment geometry.
///
/// All lengths share one arbitrary unit; only their ratios enter the pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleSlit {
    /// Wavelength of the incident light
    pub wavelength: f32,
    /// Distance between the two slits
    pub slit_spacing: f32,
    /// Distance from the slits to the observation screen
    pub screen_distance: f32,
}

impl Default for DoubleSlit {
    fn default() -> Self {
        Self {
            wavelength: 0.5,
            slit_spacing: 2.0,
            screen_distance: 10.0,
        }
    }
}

impl DoubleSlit {
    /// Spacing between adjacent bright fringes: Δx = λL/d
    pub fn fringe_spacing(&self) -> f32 {
        self.wavelength * self.screen_distance / self.slit_spacing
    }

    /// Normalized intensity at screen position x.
    ///
    /// Small-angle phase difference δ = 2π·d·x/(λL), giving
    /// I(x) = cos²(δ/2) = cos²(π·d·x/(λL)), already in [0, 1].
    pub fn intensity_at(&self, x: f32) -> f32 {
        let denom = (self.wavelength * self.screen_distance).max(f32::EPSILON);
        let phase = PI * self.slit_spacing * x / denom;
        phase.cos().powi(2)
    }

    /// Screen coordinates and intensities over the default window of
    /// ±10 fringe spacings, enough to show several bright/dark bands.
    pub fn profile(&self, samples: usize) -> (Vec<f32>, Vec<f32>) {
        self.profile_in(DEFAULT_FRINGE_COUNT * self.fringe_spacing(), samples)
    }

    /// Screen coordinates and intensities over an explicit window
    /// [-half_window, half_window].
    pub fn profile_in(&self, half_window: f32, samples: usize) -> (Vec<f32>, Vec<f32>) {
        let x = linspace(-half_window, half_window, samples.max(2));
        let intensity = x.iter().map(|&xi| self.intensity_at(xi)).collect();
        (x, intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fringe_spacing() {
        let slit = DoubleSlit::default();
        // Δx = λL/d = 0.5 * 10 / 2
        assert!((slit.fringe_spacing() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_intensity_extrema() {
        let slit = DoubleSlit::default();
        let dx = slit.fringe_spacing();

        // Bright fringes sit at integer multiples of the fringe spacing
        for n in -3i32..=3 {
            let x = n as f32 * dx;
            assert!((slit.intensity_at(x) - 1.0).abs() < 1e-4, "bright at {x}");
        }
        // Dark fringes halfway between
        assert!(slit.intensity_at(0.5 * dx) < 1e-4);
        assert!(slit.intensity_at(1.5 * dx) < 1e-4);
    }

    #[test]
    fn test_profile_window_and_normalization() {
        let slit = DoubleSlit::default();
        let (x, intensity) = slit.profile(DEFAULT_SAMPLES);

        assert_eq!(x.len(), DEFAULT_SAMPLES);
        assert_eq!(intensity.len(), DEFAULT_SAMPLES);
        assert!((x[0] + 10.0 * slit.fringe_spacing()).abs() < 1e-4);
        assert!((x[DEFAULT_SAMPLES - 1] - 10.0 * slit.fringe_spacing()).abs() < 1e-4);
        assert!(intensity.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_pattern_is_symmetric() {
        let slit = DoubleSlit {
            wavelength: 0.7,
            slit_spacing: 3.0,
            screen_distance: 12.0,
        };
        for x in [0.3, 1.1, 4.2] {
            assert!((slit.intensity_at(x) - slit.intensity_at(-x)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_samples_clamped() {
        let (x, intensity) = DoubleSlit::default().profile_in(5.0, 0);
        assert_eq!(x.len(), 2);
        assert_eq!(intensity.len(), 2);
    }
}
