//! Quantum Playground
//!
//! This crate provides interactive visualizations of textbook quantum mechanics:
//!
//! - **Double-Slit Interference**: Fraunhofer fringe pattern on a screen
//! - **Gaussian Wavepacket**: free-particle probability density spreading in time
//! - **Stationary Phase**: phasor cancellation behind the wavepacket integral
//!
//! The physics modules are pure functions over coordinate grids; the remaining
//! modules are the plot geometry, the GPU renderer, and the egui control panels
//! that the demo binaries assemble into windows.

pub mod app;
pub mod double_slit;
pub mod equations_ui;
pub mod panel;
pub mod plot;
pub mod registry;
pub mod renderer;
pub mod stationary_phase;
pub mod util;
pub mod wavepacket;

/// Physical constants for the demonstrations
pub mod constants {
    /// Reduced Planck constant (scaled units)
    pub const HBAR: f32 = 1.0;

    /// Particle mass (scaled)
    pub const MASS: f32 = 1.0;

    /// Initial wavepacket width
    pub const SIGMA0: f32 = 1.0;
}
