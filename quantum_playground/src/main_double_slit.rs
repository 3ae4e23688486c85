//! Double-Slit Interference
//!
//! Standalone window for the interference demo; the combined browser lives in
//! the `playground` binary.
//!
//! Controls:
//! - R: Reset parameters
//! - Mouse wheel: Zoom the plot

use quantum_playground::app;

fn main() {
    app::run(
        "Double-Slit Interference - Quantum Playground",
        Some("double_slit"),
        false,
    );
}
