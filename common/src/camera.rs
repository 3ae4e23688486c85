//! Plot-viewport camera for chart rendering

use glam::Mat4;

/// Orthographic camera over independent x/y data ranges.
///
/// The two axes scale independently, so a screen-coordinate span of 50 units
/// and an intensity span of 1 unit still fill the viewport together. Demos
/// that need equal units on both axes (phasor diagrams) use [`frame_square`].
///
/// [`frame_square`]: PlotCamera::frame_square
#[derive(Debug, Clone)]
pub struct PlotCamera {
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    pub aspect_ratio: f32,
}

impl PlotCamera {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            x_range: (-1.0, 1.0),
            y_range: (-1.0, 1.0),
            aspect_ratio,
        }
    }

    /// Frame a data rectangle, padding each axis by `margin` (fraction of span).
    pub fn frame(&mut self, x_range: (f32, f32), y_range: (f32, f32), margin: f32) {
        let pad_x = (x_range.1 - x_range.0) * margin;
        let pad_y = (y_range.1 - y_range.0) * margin;
        self.x_range = (x_range.0 - pad_x, x_range.1 + pad_x);
        self.y_range = (y_range.0 - pad_y, y_range.1 + pad_y);
    }

    /// Frame a square region with equal units on both axes. The window's
    /// extra extent goes to whichever axis the aspect ratio leaves room on.
    pub fn frame_square(&mut self, center: (f32, f32), half_extent: f32, margin: f32) {
        let half = half_extent * (1.0 + margin);
        let (half_x, half_y) = if self.aspect_ratio >= 1.0 {
            (half * self.aspect_ratio, half)
        } else {
            (half, half / self.aspect_ratio)
        };
        self.x_range = (center.0 - half_x, center.0 + half_x);
        self.y_range = (center.1 - half_y, center.1 + half_y);
    }

    /// Scale both ranges about their center (scroll zoom).
    pub fn zoom_by(&mut self, factor: f32) {
        let cx = 0.5 * (self.x_range.0 + self.x_range.1);
        let cy = 0.5 * (self.y_range.0 + self.y_range.1);
        let hx = 0.5 * (self.x_range.1 - self.x_range.0) * factor;
        let hy = 0.5 * (self.y_range.1 - self.y_range.0) * factor;
        self.x_range = (cx - hx, cx + hx);
        self.y_range = (cy - hy, cy + hy);
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.x_range.0,
            self.x_range.1,
            self.y_range.0,
            self.y_range.1,
            -1.0,
            1.0,
        )
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &PlotCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_pads_both_axes() {
        let mut camera = PlotCamera::new(16.0 / 9.0);
        camera.frame((-25.0, 25.0), (0.0, 1.0), 0.1);

        assert!((camera.x_range.0 - -30.0).abs() < 1e-4);
        assert!((camera.x_range.1 - 30.0).abs() < 1e-4);
        assert!((camera.y_range.0 - -0.1).abs() < 1e-6);
        assert!((camera.y_range.1 - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_frame_square_keeps_equal_units() {
        let mut camera = PlotCamera::new(2.0);
        camera.frame_square((0.0, 0.0), 1.0, 0.0);

        let span_x = camera.x_range.1 - camera.x_range.0;
        let span_y = camera.y_range.1 - camera.y_range.0;
        // Equal units means span ratio equals the aspect ratio
        assert!((span_x / span_y - 2.0).abs() < 1e-5);
        assert!((span_y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_preserves_center() {
        let mut camera = PlotCamera::new(1.0);
        camera.frame((2.0, 6.0), (-1.0, 3.0), 0.0);
        camera.zoom_by(0.5);

        assert!((0.5 * (camera.x_range.0 + camera.x_range.1) - 4.0).abs() < 1e-5);
        assert!((camera.x_range.1 - camera.x_range.0 - 2.0).abs() < 1e-5);
    }
}
