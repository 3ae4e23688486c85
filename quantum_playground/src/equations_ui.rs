//! Equations sidebar UI
//!
//! egui-based sidebar showing the formulas behind the demo on screen

use egui::{Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw a styled equation sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .min_width(280.0)
        .max_width(350.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                RichText::new("Equations")
                    .strong()
                    .color(Color32::from_rgb(255, 200, 100)),
            );
            ui.add_space(5.0);

            for eq in equations {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(
                RichText::new("Variables")
                    .strong()
                    .color(Color32::from_rgb(255, 200, 100)),
            );
            ui.add_space(5.0);

            for (symbol, meaning) in variables {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(*symbol)
                            .color(Color32::from_rgb(150, 255, 150))
                            .font(FontId::new(14.0, FontFamily::Monospace)),
                    );
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }
        });
}

/// Draw a single equation with name, formula, and description
fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

// ============================================
// Double-Slit Equations
// ============================================

pub const DOUBLE_SLIT_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Interference Intensity",
        formula: "I(x) = I₀ cos²(πdx/λL)",
        description: "Fraunhofer two-slit pattern",
    },
    Equation {
        name: "Phase Difference",
        formula: "δ ≈ 2πdx/λL",
        description: "Small-angle path difference",
    },
    Equation {
        name: "Fringe Spacing",
        formula: "Δx = λL/d",
        description: "Distance between bright fringes",
    },
    Equation {
        name: "Bright Fringes",
        formula: "x_n = nλL/d",
        description: "Constructive interference",
    },
    Equation {
        name: "Dark Fringes",
        formula: "x_n = (n+½)λL/d",
        description: "Destructive interference",
    },
];

pub const DOUBLE_SLIT_VARIABLES: &[(&str, &str)] = &[
    ("λ", "Wavelength"),
    ("d", "Slit spacing"),
    ("L", "Screen distance"),
    ("x", "Screen position"),
    ("I₀", "Peak intensity (= 1)"),
    ("Δx", "Fringe spacing"),
];

// ============================================
// Gaussian Wavepacket Equations
// ============================================

pub const WAVEPACKET_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Wavefunction",
        formula: "Ψ = (2π)^-¼ (1+it/2)^-½ e^(-x²/4(1+t²/4))",
        description: "Free particle, σ=1, m=1, ℏ=1",
    },
    Equation {
        name: "Probability Density",
        formula: "|Ψ|² = e^(-x²/2σ²(t)) / √(2πσ²(t))",
        description: "Gaussian with growing variance",
    },
    Equation {
        name: "Width Growth",
        formula: "σ(t) = √(1 + t²/4)",
        description: "Linear spreading at late times",
    },
    Equation {
        name: "Uncertainty Relation",
        formula: "Δx·Δp ≥ ℏ/2",
        description: "Spreading preserves the bound",
    },
];

pub const WAVEPACKET_VARIABLES: &[(&str, &str)] = &[
    ("Ψ", "Wavefunction"),
    ("x", "Position"),
    ("t", "Time"),
    ("σ(t)", "Wavepacket width"),
    ("Δx", "Position uncertainty"),
    ("Δp", "Momentum uncertainty"),
];

// ============================================
// Stationary Phase Equations
// ============================================

pub const STATIONARY_PHASE_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Propagator Phase",
        formula: "φ(x) = m(x_t−x)²/2ℏt",
        description: "Phase from each source point",
    },
    Equation {
        name: "Phase Rate",
        formula: "φ'(x) = m(x−x_t)/ℏt",
        description: "Zero at the stationary point",
    },
    Equation {
        name: "Stationary Condition",
        formula: "φ'(x) = 0  ⇒  x = x_t",
        description: "Only slow phases survive",
    },
    Equation {
        name: "Resultant",
        formula: "A = |Σ e^{iφ(x)}|",
        description: "Phasor sum over the window",
    },
];

pub const STATIONARY_PHASE_VARIABLES: &[(&str, &str)] = &[
    ("φ", "Propagator phase"),
    ("x_t", "Stationary point"),
    ("t", "Elapsed time"),
    ("m", "Particle mass (= 1)"),
    ("ℏ", "Reduced Planck constant (= 1)"),
    ("A", "Resultant magnitude"),
];
