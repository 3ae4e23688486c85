//! CPU-side plot geometry
//!
//! Demos describe what to draw as plain line segments and point marks in data
//! coordinates; the renderer uploads them without further interpretation.

use glam::Vec3;

/// Faint grid line color
pub const GRID_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 0.2];

/// Zero-axis color
pub const AXIS_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 0.5];

/// Everything one frame draws in the plot viewport
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Line segments as (start, end, color)
    pub lines: Vec<(Vec3, Vec3, [f32; 4])>,
    /// Point marks as (position, size, color)
    pub points: Vec<(Vec3, f32, [f32; 4])>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        self.lines.push((a, b, color));
    }

    pub fn point(&mut self, position: Vec3, size: f32, color: [f32; 4]) {
        self.points.push((position, size, color));
    }

    /// Connect consecutive (x, y) samples with segments
    pub fn polyline(&mut self, x: &[f32], y: &[f32], color: [f32; 4]) {
        let n = x.len().min(y.len());
        for i in 1..n {
            self.segment(
                Vec3::new(x[i - 1], y[i - 1], 0.0),
                Vec3::new(x[i], y[i], 0.0),
                color,
            );
        }
    }

    /// Closed circle approximated by straight segments
    pub fn circle(&mut self, center: (f32, f32), radius: f32, segments: usize, color: [f32; 4]) {
        let segments = segments.max(3);
        for i in 0..segments {
            let a1 = i as f32 * std::f32::consts::TAU / segments as f32;
            let a2 = (i + 1) as f32 * std::f32::consts::TAU / segments as f32;
            self.segment(
                Vec3::new(center.0 + radius * a1.cos(), center.1 + radius * a1.sin(), 0.0),
                Vec3::new(center.0 + radius * a2.cos(), center.1 + radius * a2.sin(), 0.0),
                color,
            );
        }
    }

    /// Grid lines at round steps plus brighter zero axes
    pub fn axes(&mut self, x_range: (f32, f32), y_range: (f32, f32)) {
        let step_x = grid_step(x_range.1 - x_range.0);
        let step_y = grid_step(y_range.1 - y_range.0);

        let mut gx = (x_range.0 / step_x).ceil() * step_x;
        while gx <= x_range.1 {
            if gx.abs() > 1e-6 * step_x {
                self.segment(
                    Vec3::new(gx, y_range.0, 0.0),
                    Vec3::new(gx, y_range.1, 0.0),
                    GRID_COLOR,
                );
            }
            gx += step_x;
        }

        let mut gy = (y_range.0 / step_y).ceil() * step_y;
        while gy <= y_range.1 {
            if gy.abs() > 1e-6 * step_y {
                self.segment(
                    Vec3::new(x_range.0, gy, 0.0),
                    Vec3::new(x_range.1, gy, 0.0),
                    GRID_COLOR,
                );
            }
            gy += step_y;
        }

        if x_range.0 < 0.0 && x_range.1 > 0.0 {
            self.segment(
                Vec3::new(0.0, y_range.0, 0.0),
                Vec3::new(0.0, y_range.1, 0.0),
                AXIS_COLOR,
            );
        }
        if y_range.0 < 0.0 && y_range.1 > 0.0 {
            self.segment(
                Vec3::new(x_range.0, 0.0, 0.0),
                Vec3::new(x_range.1, 0.0, 0.0),
                AXIS_COLOR,
            );
        }
    }
}

/// Round grid step (1-2-5 ladder) giving roughly 5-10 divisions per span
pub fn grid_step(span: f32) -> f32 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let rough = span / 6.0;
    let magnitude = 10f32.powf(rough.log10().floor());
    let residual = rough / magnitude;
    let step = if residual < 1.5 {
        1.0
    } else if residual < 3.5 {
        2.0
    } else if residual < 7.5 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_segment_count() {
        let mut scene = Scene::new();
        scene.polyline(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0], [1.0; 4]);
        assert_eq!(scene.lines.len(), 3);

        let mut empty = Scene::new();
        empty.polyline(&[1.0], &[1.0], [1.0; 4]);
        assert!(empty.lines.is_empty());
    }

    #[test]
    fn test_circle_closes() {
        let mut scene = Scene::new();
        scene.circle((0.0, 0.0), 1.0, 64, [1.0; 4]);
        assert_eq!(scene.lines.len(), 64);

        let first = scene.lines.first().unwrap();
        let last = scene.lines.last().unwrap();
        assert!((first.0 - last.1).length() < 1e-4);
    }

    #[test]
    fn test_grid_step_ladder() {
        assert!((grid_step(50.0) - 10.0).abs() < 1e-6);
        assert!((grid_step(1.0) - 0.2).abs() < 1e-6);
        assert!((grid_step(30.0) - 5.0).abs() < 1e-6);
        // Degenerate spans fall back to a usable step
        assert_eq!(grid_step(0.0), 1.0);
        assert_eq!(grid_step(f32::NAN), 1.0);
    }

    #[test]
    fn test_axes_stay_inside_ranges() {
        let mut scene = Scene::new();
        scene.axes((-25.0, 25.0), (0.0, 1.05));
        assert!(!scene.lines.is_empty());
        for (a, b, _) in &scene.lines {
            for p in [a, b] {
                assert!(p.x >= -25.0 - 1e-4 && p.x <= 25.0 + 1e-4);
                assert!(p.y >= -1e-4 && p.y <= 1.05 + 1e-4);
            }
        }
        // x straddles zero, so the vertical zero axis is present
        assert!(scene
            .lines
            .iter()
            .any(|(a, b, c)| *c == AXIS_COLOR && a.x == 0.0 && b.x == 0.0));
    }
}
