//! Gaussian Wavepacket Evolution
//!
//! Standalone window for the wavepacket-spreading demo; the combined browser
//! lives in the `playground` binary.
//!
//! Controls:
//! - R: Reset parameters
//! - Mouse wheel: Zoom the plot

use quantum_playground::app;

fn main() {
    app::run(
        "Gaussian Wavepacket - Quantum Playground",
        Some("wavepacket"),
        false,
    );
}
