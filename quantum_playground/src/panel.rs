//! Interactive demo panels
//!
//! Each panel owns the parameters of one demonstration, draws its sidebar
//! controls, and rebuilds the plot scene for the current settings. Everything
//! is recomputed on interaction; the grids stay small enough that this is
//! never the bottleneck.

use egui::Color32;
use glam::Vec3;
use thiserror::Error;

use common::PlotCamera;

use crate::double_slit::{self, DoubleSlit};
use crate::equations_ui::{
    Equation, DOUBLE_SLIT_EQUATIONS, DOUBLE_SLIT_VARIABLES, STATIONARY_PHASE_EQUATIONS,
    STATIONARY_PHASE_VARIABLES, WAVEPACKET_EQUATIONS, WAVEPACKET_VARIABLES,
};
use crate::plot::Scene;
use crate::stationary_phase::{phase_rate, phase_turns, phasor_trace, resultant};
use crate::util::{linspace, normalize, palette_color, wavelength_to_color};
use crate::wavepacket;

/// Named time lists for the wavepacket demo
pub const TIME_PRESETS: &[(&str, &[f32])] = &[
    ("Short evolution", &[0.0, 1.0, 2.0, 3.0]),
    ("Medium evolution", &[0.0, 2.0, 4.0, 6.0, 8.0]),
    ("Long evolution", &[0.0, 5.0, 10.0, 15.0, 20.0]),
    ("Fine steps", &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]),
];

/// Rejected custom time entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeListError {
    #[error("no time values given")]
    Empty,
    #[error("invalid time value `{0}`")]
    Invalid(String),
}

/// Parse a comma-separated list of times; blank tokens are skipped.
pub fn parse_time_list(input: &str) -> Result<Vec<f32>, TimeListError> {
    let mut times = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f32 = token
            .parse()
            .map_err(|_| TimeListError::Invalid(token.to_string()))?;
        if !value.is_finite() {
            return Err(TimeListError::Invalid(token.to_string()));
        }
        times.push(value);
    }
    if times.is_empty() {
        return Err(TimeListError::Empty);
    }
    Ok(times)
}

fn to_color32(c: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

// ============================================
// Double slit
// ============================================

pub struct DoubleSlitPanel {
    pub slit: DoubleSlit,
    /// Displayed screen window [-w, w]
    pub half_window: f32,
    pub samples: usize,
}

impl Default for DoubleSlitPanel {
    fn default() -> Self {
        Self {
            slit: DoubleSlit::default(),
            half_window: 25.0,
            samples: double_slit::DEFAULT_SAMPLES,
        }
    }
}

impl DoubleSlitPanel {
    pub fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.strong("Experiment parameters");
        ui.add(
            egui::Slider::new(&mut self.slit.wavelength, 0.3..=1.0)
                .step_by(0.01)
                .text("wavelength λ"),
        )
        .on_hover_text("Longer wavelengths widen the fringes");
        ui.add(
            egui::Slider::new(&mut self.slit.slit_spacing, 1.0..=5.0)
                .step_by(0.1)
                .text("slit spacing d"),
        )
        .on_hover_text("Wider slit spacing packs the fringes closer");
        ui.add(
            egui::Slider::new(&mut self.slit.screen_distance, 5.0..=20.0)
                .step_by(0.5)
                .text("screen distance L"),
        )
        .on_hover_text("A farther screen spreads the pattern out");
        ui.add(
            egui::Slider::new(&mut self.half_window, 5.0..=50.0)
                .step_by(1.0)
                .text("x window"),
        );

        ui.separator();
        ui.label(format!("fringe spacing Δx = {:.2}", self.slit.fringe_spacing()));
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        let (x, intensity) = self.slit.profile_in(self.half_window, self.samples);
        let color = wavelength_to_color(self.slit.wavelength * 1000.0);

        scene.axes((-self.half_window, self.half_window), (0.0, 1.05));
        scene.polyline(&x, &intensity, color);

        // Screen band under the curve: stroke brightness follows the intensity
        for (&xi, &ii) in x.iter().zip(intensity.iter()) {
            scene.point(
                Vec3::new(xi, -0.08, 0.0),
                0.06,
                [color[0], color[1], color[2], ii],
            );
        }
        scene
    }

    pub fn frame(&self, camera: &mut PlotCamera) {
        camera.frame((-self.half_window, self.half_window), (-0.18, 1.05), 0.02);
    }

    pub fn status(&self, ui: &mut egui::Ui) {
        ui.label(format!("λ = {:.2}", self.slit.wavelength));
        ui.separator();
        ui.label(format!("d = {:.1}", self.slit.slit_spacing));
        ui.separator();
        ui.label(format!("L = {:.1}", self.slit.screen_distance));
        ui.separator();
        ui.label(format!("Δx = {:.2}", self.slit.fringe_spacing()));
    }
}

// ============================================
// Gaussian wavepacket
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInput {
    Preset,
    Custom,
}

pub struct WavepacketPanel {
    pub input: TimeInput,
    pub preset_index: usize,
    pub custom_text: String,
    pub parse_error: Option<TimeListError>,
    /// Sorted times currently plotted
    pub times: Vec<f32>,
    /// Displayed spatial window [-w, w]
    pub half_window: f32,
    pub samples: usize,
}

impl Default for WavepacketPanel {
    fn default() -> Self {
        Self {
            input: TimeInput::Preset,
            preset_index: 0,
            custom_text: String::from("0, 1, 2, 4, 8"),
            parse_error: None,
            times: TIME_PRESETS[0].1.to_vec(),
            half_window: 15.0,
            samples: wavepacket::DEFAULT_SAMPLES,
        }
    }
}

impl WavepacketPanel {
    /// Re-parse the custom entry, falling back to t=0 on bad input
    pub fn apply_custom(&mut self) {
        match parse_time_list(&self.custom_text) {
            Ok(mut times) => {
                times.sort_by(f32::total_cmp);
                self.times = times;
                self.parse_error = None;
            }
            Err(err) => {
                self.times = vec![0.0];
                self.parse_error = Some(err);
            }
        }
    }

    fn apply_preset(&mut self) {
        self.times = TIME_PRESETS[self.preset_index].1.to_vec();
        self.parse_error = None;
    }

    /// Tallest plotted density, for axis scaling
    pub fn peak_density(&self) -> f32 {
        self.times
            .iter()
            .map(|&t| wavepacket::probability_density(0.0, t))
            .fold(f32::MIN_POSITIVE, f32::max)
    }

    pub fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.strong("Model");
        ui.label("σ = 1, m = 1, ℏ = 1");
        ui.separator();

        ui.strong("Time values");
        let was_custom = self.input == TimeInput::Custom;
        ui.radio_value(&mut self.input, TimeInput::Preset, "Preset times");
        ui.radio_value(&mut self.input, TimeInput::Custom, "Custom times");

        match self.input {
            TimeInput::Preset => {
                let mut changed = was_custom;
                egui::ComboBox::from_label("preset")
                    .selected_text(TIME_PRESETS[self.preset_index].0)
                    .show_ui(ui, |ui| {
                        for (i, (name, _)) in TIME_PRESETS.iter().enumerate() {
                            changed |= ui
                                .selectable_value(&mut self.preset_index, i, *name)
                                .changed();
                        }
                    });
                if changed {
                    self.apply_preset();
                }
            }
            TimeInput::Custom => {
                let response = ui.text_edit_singleline(&mut self.custom_text);
                if response.changed() || !was_custom {
                    self.apply_custom();
                    if let Some(err) = &self.parse_error {
                        log::warn!("time list rejected: {err}");
                    }
                }
                if let Some(err) = &self.parse_error {
                    ui.colored_label(Color32::LIGHT_RED, format!("{err} — plotting t = 0"));
                }
            }
        }

        ui.separator();
        ui.add(
            egui::Slider::new(&mut self.half_window, 5.0..=30.0)
                .step_by(1.0)
                .text("x window"),
        );

        ui.separator();
        for (i, t) in self.times.iter().enumerate() {
            ui.colored_label(to_color32(palette_color(i)), format!("t = {t}"));
        }
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        let (x, rows) =
            wavepacket::evolution(&self.times, -self.half_window, self.half_window, self.samples);

        scene.axes(
            (-self.half_window, self.half_window),
            (0.0, self.peak_density() * 1.05),
        );
        for (i, (_, density)) in rows.iter().enumerate() {
            scene.polyline(&x, density, palette_color(i));
        }
        scene
    }

    pub fn frame(&self, camera: &mut PlotCamera) {
        camera.frame(
            (-self.half_window, self.half_window),
            (0.0, self.peak_density() * 1.08),
            0.02,
        );
    }

    pub fn status(&self, ui: &mut egui::Ui) {
        ui.label(format!("{} time values", self.times.len()));
        if let Some(&t_last) = self.times.last() {
            ui.separator();
            ui.label(format!("σ({t_last}) = {:.2}", wavepacket::width(t_last)));
        }
    }
}

// ============================================
// Stationary phase
// ============================================

pub struct StationaryPhasePanel {
    /// Elapsed propagation time
    pub time: f32,
    /// Source window [-w, w] around the stationary point
    pub half_window: f32,
    pub samples: usize,
}

impl Default for StationaryPhasePanel {
    fn default() -> Self {
        Self {
            time: 0.15,
            half_window: 1.0,
            samples: 800,
        }
    }
}

impl StationaryPhasePanel {
    /// Mean phasor magnitude |Σe^{iφ}|/N over the window
    pub fn coherence(&self) -> f32 {
        let x = linspace(-self.half_window, self.half_window, self.samples);
        let trace = phasor_trace(&x, 0.0, self.time);
        resultant(&trace).scale(1.0 / trace.len() as f32).norm()
    }

    pub fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.strong("Phase parameters");
        ui.add(
            egui::Slider::new(&mut self.time, 0.02..=2.0)
                .step_by(0.01)
                .text("time t"),
        )
        .on_hover_text("Shorter times wind the phase faster");
        ui.add(
            egui::Slider::new(&mut self.half_window, 0.1..=3.0)
                .step_by(0.05)
                .text("source window"),
        );

        ui.separator();
        ui.label(format!(
            "phase turns across window: {:.2}",
            phase_turns(self.half_window, self.time)
        ));
        ui.label(format!("coherent fraction |Σe^iφ|/N = {:.2}", self.coherence()));
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        let x = linspace(-self.half_window, self.half_window, self.samples);
        let trace = phasor_trace(&x, 0.0, self.time);

        scene.axes((-1.3, 1.3), (-1.3, 1.3));
        scene.circle((0.0, 0.0), 1.0, 128, [0.5, 0.5, 0.5, 0.4]);

        // Slowly-turning phasors drawn bright, fast ones fade out
        let rates: Vec<f32> = x
            .iter()
            .map(|&xi| phase_rate(xi, 0.0, self.time).abs())
            .collect();
        let weights = normalize(&rates);
        for (z, w) in trace.iter().zip(weights.iter()) {
            let alpha = 0.15 + 0.85 * (1.0 - w);
            scene.point(
                Vec3::new(z.re, z.im, 0.0),
                0.02,
                [0.39, 0.43, 0.98, alpha],
            );
        }

        // Resultant mean phasor from the origin
        let mean = resultant(&trace).scale(1.0 / trace.len() as f32);
        scene.segment(
            Vec3::ZERO,
            Vec3::new(mean.re, mean.im, 0.0),
            [1.0, 0.8, 0.3, 1.0],
        );
        scene.point(Vec3::new(mean.re, mean.im, 0.0), 0.035, [1.0, 0.8, 0.3, 1.0]);

        // Window endpoints on the circle
        if let (Some(first), Some(last)) = (trace.first(), trace.last()) {
            scene.point(Vec3::new(first.re, first.im, 0.0), 0.04, [0.0, 0.8, 0.59, 1.0]);
            scene.point(Vec3::new(last.re, last.im, 0.0), 0.04, [0.94, 0.33, 0.23, 1.0]);
        }
        scene
    }

    pub fn frame(&self, camera: &mut PlotCamera) {
        camera.frame_square((0.0, 0.0), 1.3, 0.05);
    }

    pub fn status(&self, ui: &mut egui::Ui) {
        ui.label(format!("t = {:.2}", self.time));
        ui.separator();
        ui.label(format!("window = ±{:.2}", self.half_window));
        ui.separator();
        ui.label(format!("|Σe^iφ|/N = {:.2}", self.coherence()));
    }
}

// ============================================
// Dispatch
// ============================================

/// One demo's interactive state
pub enum Panel {
    DoubleSlit(DoubleSlitPanel),
    Wavepacket(WavepacketPanel),
    StationaryPhase(StationaryPhasePanel),
}

impl Panel {
    pub fn sidebar(&mut self, ui: &mut egui::Ui) {
        match self {
            Panel::DoubleSlit(p) => p.sidebar(ui),
            Panel::Wavepacket(p) => p.sidebar(ui),
            Panel::StationaryPhase(p) => p.sidebar(ui),
        }
    }

    pub fn scene(&self) -> Scene {
        match self {
            Panel::DoubleSlit(p) => p.scene(),
            Panel::Wavepacket(p) => p.scene(),
            Panel::StationaryPhase(p) => p.scene(),
        }
    }

    pub fn frame(&self, camera: &mut PlotCamera) {
        match self {
            Panel::DoubleSlit(p) => p.frame(camera),
            Panel::Wavepacket(p) => p.frame(camera),
            Panel::StationaryPhase(p) => p.frame(camera),
        }
    }

    pub fn status(&self, ui: &mut egui::Ui) {
        match self {
            Panel::DoubleSlit(p) => p.status(ui),
            Panel::Wavepacket(p) => p.status(ui),
            Panel::StationaryPhase(p) => p.status(ui),
        }
    }

    /// Sidebar title plus equation and variable tables for this demo
    pub fn equations(&self) -> (&'static str, &'static [Equation], &'static [(&'static str, &'static str)]) {
        match self {
            Panel::DoubleSlit(_) => (
                "Double-Slit Interference",
                DOUBLE_SLIT_EQUATIONS,
                DOUBLE_SLIT_VARIABLES,
            ),
            Panel::Wavepacket(_) => (
                "Gaussian Wavepacket",
                WAVEPACKET_EQUATIONS,
                WAVEPACKET_VARIABLES,
            ),
            Panel::StationaryPhase(_) => (
                "Stationary Phase",
                STATIONARY_PHASE_EQUATIONS,
                STATIONARY_PHASE_VARIABLES,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_list() {
        assert_eq!(parse_time_list("0, 1, 2"), Ok(vec![0.0, 1.0, 2.0]));
        // Messy whitespace and trailing commas are tolerated
        assert_eq!(parse_time_list(" 0.5 ,, 3 , "), Ok(vec![0.5, 3.0]));
    }

    #[test]
    fn test_parse_time_list_rejects_garbage() {
        assert_eq!(parse_time_list(""), Err(TimeListError::Empty));
        assert_eq!(parse_time_list(" , ,"), Err(TimeListError::Empty));
        assert_eq!(
            parse_time_list("0, two, 3"),
            Err(TimeListError::Invalid("two".into()))
        );
        assert_eq!(
            parse_time_list("inf"),
            Err(TimeListError::Invalid("inf".into()))
        );
    }

    #[test]
    fn test_custom_entry_falls_back_to_zero() {
        let mut panel = WavepacketPanel {
            custom_text: String::from("not numbers"),
            ..Default::default()
        };
        panel.apply_custom();
        assert_eq!(panel.times, vec![0.0]);
        assert!(panel.parse_error.is_some());

        panel.custom_text = String::from("4, 1, 2");
        panel.apply_custom();
        assert_eq!(panel.times, vec![1.0, 2.0, 4.0]);
        assert!(panel.parse_error.is_none());
    }

    #[test]
    fn test_double_slit_scene_contents() {
        let panel = DoubleSlitPanel::default();
        let scene = panel.scene();
        // One screen-band stroke per sample
        assert_eq!(scene.points.len(), panel.samples);
        // Curve segments plus grid/axis lines
        assert!(scene.lines.len() >= panel.samples - 1);
    }

    #[test]
    fn test_wavepacket_scene_one_curve_per_time() {
        let panel = WavepacketPanel::default();
        let scene = panel.scene();
        let curve_segments = panel.times.len() * (panel.samples - 1);
        assert!(scene.lines.len() >= curve_segments);
        assert!(panel.peak_density() > 0.0);
    }

    #[test]
    fn test_stationary_phase_coherence_regimes() {
        let mut panel = StationaryPhasePanel::default();

        // Narrow window, generous time: phases aligned
        panel.half_window = 0.05;
        panel.time = 1.0;
        assert!(panel.coherence() > 0.95);

        // Wide window, short time: heavy cancellation
        panel.half_window = 3.0;
        panel.time = 0.02;
        assert!(panel.coherence() < 0.2);
    }

    #[test]
    fn test_stationary_phase_scene_contents() {
        let panel = StationaryPhasePanel::default();
        let scene = panel.scene();
        // Phasor cloud + resultant tip + two endpoint markers
        assert_eq!(scene.points.len(), panel.samples + 3);
    }
}
