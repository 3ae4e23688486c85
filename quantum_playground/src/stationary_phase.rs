//! Stationary-phase picture of wavepacket spreading
//!
//! The free-particle propagator contributes a phase φ(x) = m(x_t−x)²/(2ℏt) to
//! each source point x. Mapping e^{iφ(x)} onto the unit circle shows why only
//! the neighborhood of the stationary point x = x_t survives the integral:
//! fast-turning phasors cancel, slow ones add coherently.

use crate::constants::{HBAR, MASS};
use std::iter::Sum;

/// Unit-magnitude complex amplitude e^{iφ}
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Phasor {
    pub re: f32,
    pub im: f32,
}

impl Phasor {
    pub const ZERO: Phasor = Phasor { re: 0.0, im: 0.0 };

    /// e^{iφ} on the unit circle
    pub fn exp_i(phi: f32) -> Self {
        Self {
            re: phi.cos(),
            im: phi.sin(),
        }
    }

    /// Magnitude |z|
    pub fn norm(&self) -> f32 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Phase angle
    pub fn arg(&self) -> f32 {
        self.im.atan2(self.re)
    }

    pub fn scale(&self, s: f32) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }
}

impl std::ops::Add for Phasor {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sum for Phasor {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

/// Propagator phase φ(x) = m(x_t − x)²/(2ℏt)
pub fn phase(x: f32, x_t: f32, t: f32) -> f32 {
    MASS * (x_t - x) * (x_t - x) / (2.0 * HBAR * t)
}

/// Phase derivative φ'(x) = m(x − x_t)/(ℏt); zero at the stationary point
pub fn phase_rate(x: f32, x_t: f32, t: f32) -> f32 {
    MASS * (x - x_t) / (HBAR * t)
}

/// Phasors e^{iφ(x)} for every grid point
pub fn phasor_trace(x: &[f32], x_t: f32, t: f32) -> Vec<Phasor> {
    x.iter()
        .map(|&xi| Phasor::exp_i(phase(xi, x_t, t)))
        .collect()
}

/// Resultant Σ e^{iφ} of a trace
pub fn resultant(trace: &[Phasor]) -> Phasor {
    trace.iter().copied().sum()
}

/// How many full turns the phase winds across the window
pub fn phase_turns(half_window: f32, t: f32) -> f32 {
    phase(half_window, 0.0, t) / std::f32::consts::TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::linspace;

    #[test]
    fn test_phase_stationary_at_x_t() {
        let x_t = 0.3;
        assert_eq!(phase(x_t, x_t, 0.15), 0.0);
        assert_eq!(phase_rate(x_t, x_t, 0.15), 0.0);

        // |φ'| grows away from the stationary point on both sides
        let left = phase_rate(x_t - 0.5, x_t, 0.15).abs();
        let right = phase_rate(x_t + 0.5, x_t, 0.15).abs();
        assert!(left > 0.0 && right > 0.0);
        assert!((left - right).abs() < 1e-6);
    }

    #[test]
    fn test_narrow_window_adds_coherently() {
        // Phases barely move near the stationary point, so the mean phasor
        // stays close to unit length
        let x = linspace(-0.05, 0.05, 801);
        let trace = phasor_trace(&x, 0.0, 1.0);
        let mean = resultant(&trace).scale(1.0 / trace.len() as f32);
        assert!(mean.norm() > 0.99);
    }

    #[test]
    fn test_fast_phases_cancel() {
        // Far from stationary, t small: the phase winds many turns and the
        // contributions average out
        let x = linspace(5.0, 7.0, 4001);
        let trace = phasor_trace(&x, 0.0, 0.05);
        let mean = resultant(&trace).scale(1.0 / trace.len() as f32);
        assert!(mean.norm() < 0.05);
    }

    #[test]
    fn test_trace_lies_on_unit_circle() {
        let x = linspace(-1.0, 1.0, 101);
        for z in phasor_trace(&x, 0.0, 0.5) {
            assert!((z.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_phase_turns() {
        // φ(w) = w²/2t; w=1 and t = 1/2π give φ = π, half a turn
        let t = 1.0 / std::f32::consts::TAU;
        assert!((phase_turns(1.0, t) - 0.5).abs() < 1e-5);
    }
}
