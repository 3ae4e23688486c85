//! Quantum Playground
//!
//! Combined demo browser. Pick an experiment from the sidebar selector; an
//! optional demo slug on the command line opens that demo first.
//!
//! Controls:
//! - 1/2/3: Switch demo
//! - R: Reset the current demo's parameters
//! - Mouse wheel: Zoom the plot

use quantum_playground::app;

fn main() {
    let slug = std::env::args().nth(1);
    app::run("Quantum Playground", slug.as_deref(), true);
}
