//! Free-particle Gaussian wavepacket evolution
//!
//! Closed-form probability density of an initially stationary Gaussian
//! wavepacket (σ=1, m=1, ℏ=1):
//!
//! Ψ(x,t) = (2π)^(-1/4) (1 + it/2)^(-1/2) exp(-x²/(4(1 + t²/4)))
//!
//! whose modulus squared is a Gaussian with variance σ²(t) = 1 + t²/4.

use crate::constants::SIGMA0;
use crate::util::linspace;
use std::f32::consts::TAU;

/// Default number of spatial samples
pub const DEFAULT_SAMPLES: usize = 500;

/// Default spatial window [-10, 10]
pub const DEFAULT_HALF_WINDOW: f32 = 10.0;

/// Wavepacket width at time t: σ(t) = √(1 + t²/4).
///
/// σ(0) = 1 and σ(t) ≈ t/2 once the spreading dominates.
pub fn width(t: f32) -> f32 {
    (SIGMA0 * SIGMA0 + t * t / 4.0).sqrt()
}

/// Probability density |Ψ(x,t)|² at a single point.
pub fn probability_density(x: f32, t: f32) -> f32 {
    // |1 + it/2|² = 1 + t²/4
    let variance = SIGMA0 * SIGMA0 + t * t / 4.0;
    let prefactor = 1.0 / (TAU * variance).sqrt();
    prefactor * (-x * x / (2.0 * variance)).exp()
}

/// Density over a spatial grid at one time.
pub fn density_profile(x: &[f32], t: f32) -> Vec<f32> {
    x.iter().map(|&xi| probability_density(xi, t)).collect()
}

/// Densities for a list of times over a shared grid.
///
/// Returns the grid plus one (time, densities) row per requested time, in the
/// order given.
pub fn evolution(
    times: &[f32],
    x_min: f32,
    x_max: f32,
    samples: usize,
) -> (Vec<f32>, Vec<(f32, Vec<f32>)>) {
    let x = linspace(x_min, x_max, samples.max(2));
    let rows = times
        .iter()
        .map(|&t| (t, density_profile(&x, t)))
        .collect();
    (x, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trapezoidal integral of a sampled function
    fn trapezoid(x: &[f32], y: &[f32]) -> f32 {
        x.windows(2)
            .zip(y.windows(2))
            .map(|(xs, ys)| 0.5 * (ys[0] + ys[1]) * (xs[1] - xs[0]))
            .sum()
    }

    #[test]
    fn test_initial_peak_height() {
        // At t=0 the density is a unit Gaussian: peak = (2π)^(-1/2)
        assert!((probability_density(0.0, 0.0) - 0.398_942).abs() < 1e-4);
    }

    #[test]
    fn test_density_integrates_to_one() {
        for t in [0.0, 1.0, 4.0] {
            let half = 8.0 * width(t);
            let x = linspace(-half, half, 4001);
            let density = density_profile(&x, t);
            let total = trapezoid(&x, &density);
            assert!((total - 1.0).abs() < 1e-3, "norm at t={t} was {total}");
        }
    }

    #[test]
    fn test_density_even_in_x_and_t() {
        for (x, t) in [(0.7, 1.3), (2.0, 5.0)] {
            assert!((probability_density(x, t) - probability_density(-x, t)).abs() < 1e-6);
            assert!((probability_density(x, t) - probability_density(x, -t)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_width_growth() {
        assert!((width(0.0) - 1.0).abs() < 1e-6);
        assert!((width(2.0) - 2.0_f32.sqrt()).abs() < 1e-5);
        // Asymptotically linear: σ(t) → t/2
        assert!((width(200.0) - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_spreading_lowers_the_peak() {
        let peak0 = probability_density(0.0, 0.0);
        let peak4 = probability_density(0.0, 4.0);
        assert!(peak4 < peak0);
        // Peak scales as 1/σ(t)
        assert!((peak4 * width(4.0) - peak0 * width(0.0)).abs() < 1e-5);
    }

    #[test]
    fn test_evolution_rows_follow_input_order() {
        let times = [3.0, 0.0, 1.0];
        let (x, rows) = evolution(&times, -5.0, 5.0, 101);

        assert_eq!(x.len(), 101);
        assert_eq!(rows.len(), 3);
        for (row, &t) in rows.iter().zip(times.iter()) {
            assert_eq!(row.0, t);
            assert_eq!(row.1.len(), 101);
        }
    }
}
