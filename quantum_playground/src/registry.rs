//! Demo registry
//!
//! Ordered lookup table over the available demos. Each entry exposes a stable
//! slug (used for routing from the command line), a display name, and a
//! constructor for the demo's panel.

use crate::panel::{DoubleSlitPanel, Panel, StationaryPhasePanel, WavepacketPanel};

pub struct DemoEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub build: fn() -> Panel,
}

fn build_double_slit() -> Panel {
    Panel::DoubleSlit(DoubleSlitPanel::default())
}

fn build_wavepacket() -> Panel {
    Panel::Wavepacket(WavepacketPanel::default())
}

fn build_stationary_phase() -> Panel {
    Panel::StationaryPhase(StationaryPhasePanel::default())
}

/// All demos in display order
pub const DEMOS: &[DemoEntry] = &[
    DemoEntry {
        slug: "double_slit",
        name: "Double-Slit Interference",
        build: build_double_slit,
    },
    DemoEntry {
        slug: "wavepacket",
        name: "Gaussian Wavepacket",
        build: build_wavepacket,
    },
    DemoEntry {
        slug: "stationary_phase",
        name: "Stationary Phase",
        build: build_stationary_phase,
    },
];

/// Look up a demo by slug
pub fn find(slug: &str) -> Option<&'static DemoEntry> {
    DEMOS.iter().find(|demo| demo.slug == slug)
}

/// Index of a demo by slug, falling back to the first entry
pub fn select(slug: &str) -> usize {
    match DEMOS.iter().position(|demo| demo.slug == slug) {
        Some(index) => index,
        None => {
            log::warn!("unknown demo `{slug}`, falling back to `{}`", DEMOS[0].slug);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let slugs: Vec<&str> = DEMOS.iter().map(|d| d.slug).collect();
        assert_eq!(slugs, ["double_slit", "wavepacket", "stationary_phase"]);
    }

    #[test]
    fn test_find_by_slug() {
        assert!(find("wavepacket").is_some());
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_select_falls_back_to_first() {
        assert_eq!(select("stationary_phase"), 2);
        assert_eq!(select("missing"), 0);
    }

    #[test]
    fn test_every_entry_builds_its_own_panel() {
        for (entry, expected_name) in DEMOS.iter().zip([
            "Double-Slit Interference",
            "Gaussian Wavepacket",
            "Stationary Phase",
        ]) {
            assert_eq!(entry.name, expected_name);
            let panel = (entry.build)();
            let (title, equations, variables) = panel.equations();
            assert_eq!(title, entry.name);
            assert!(!equations.is_empty());
            assert!(!variables.is_empty());
        }
    }
}
