//! Grid and color helpers shared by the demos

/// Evenly spaced samples over [start, end], endpoints included.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f32;
    (0..n).map(|i| start + i as f32 * step).collect()
}

/// Rescale values to [0, 1]. A constant input maps to all zeros.
pub fn normalize(values: &[f32]) -> Vec<f32> {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = max - min;
    if !span.is_finite() || span == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| (v - min) / span).collect()
}

/// Approximate RGBA for a visible wavelength in nanometers.
///
/// Banded mapping; out-of-range wavelengths clamp to the violet/deep-red ends.
pub fn wavelength_to_color(nm: f32) -> [f32; 4] {
    let (r, g, b) = if nm < 380.0 {
        (0.498, 0.0, 1.0) // ultraviolet, shown as violet
    } else if nm < 450.0 {
        (0.294, 0.0, 0.510)
    } else if nm < 495.0 {
        (0.0, 0.0, 1.0)
    } else if nm < 570.0 {
        (0.0, 1.0, 0.0)
    } else if nm < 590.0 {
        (1.0, 1.0, 0.0)
    } else if nm < 620.0 {
        (1.0, 0.498, 0.0)
    } else if nm < 780.0 {
        (1.0, 0.0, 0.0)
    } else {
        (0.545, 0.0, 0.0) // infrared, shown as deep red
    };
    [r, g, b, 1.0]
}

/// Qualitative palette for multi-curve plots (one color per time value)
pub const CURVE_PALETTE: &[[f32; 4]] = &[
    [0.388, 0.431, 0.980, 1.0],
    [0.937, 0.333, 0.231, 1.0],
    [0.000, 0.800, 0.588, 1.0],
    [0.671, 0.388, 0.980, 1.0],
    [1.000, 0.631, 0.353, 1.0],
    [0.098, 0.827, 0.953, 1.0],
    [1.000, 0.400, 0.573, 1.0],
    [0.714, 0.910, 0.502, 1.0],
    [1.000, 0.592, 1.000, 1.0],
    [0.996, 0.796, 0.322, 1.0],
];

/// Palette color for the i-th curve, wrapping around
pub fn palette_color(i: usize) -> [f32; 4] {
    CURVE_PALETTE[i % CURVE_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let x = linspace(-2.0, 2.0, 5);
        assert_eq!(x.len(), 5);
        assert!((x[0] + 2.0).abs() < 1e-6);
        assert!((x[2]).abs() < 1e-6);
        assert!((x[4] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(linspace(1.0, 5.0, 0), vec![1.0]);
        assert_eq!(linspace(1.0, 5.0, 1), vec![1.0]);
    }

    #[test]
    fn test_normalize_spans_unit_interval() {
        let out = normalize(&[1.0, 2.0, 3.0]);
        assert!((out[0]).abs() < 1e-6);
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert!((out[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_flat_input() {
        assert_eq!(normalize(&[4.2, 4.2, 4.2]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_wavelength_bands() {
        assert_eq!(wavelength_to_color(550.0), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(wavelength_to_color(400.0), [0.294, 0.0, 0.510, 1.0]);
        assert_eq!(wavelength_to_color(700.0), [1.0, 0.0, 0.0, 1.0]);
        // Ends clamp rather than wrap
        assert_eq!(wavelength_to_color(250.0), [0.498, 0.0, 1.0, 1.0]);
        assert_eq!(wavelength_to_color(900.0), [0.545, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), palette_color(CURVE_PALETTE.len()));
    }
}
