/// Zoom bounds of the canvas.
pub const MIN_SCALE: f32 = 0.75;
pub const MAX_SCALE: f32 = 1.5;

/// Initial pan applied so the total node clears the canvas corner.
const INITIAL_OFFSET_X: f32 = 32.0;
const INITIAL_OFFSET_Y: f32 = 32.0;

/// Pan offset and zoom scale applied uniformly to the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    offset_x: f32,
    offset_y: f32,
    scale: f32,
}

impl TransformContext {
    pub fn new() -> Self {
        Self {
            offset_x: INITIAL_OFFSET_X,
            offset_y: INITIAL_OFFSET_Y,
            scale: 1.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Zooms while keeping the given screen point fixed.
    pub fn zoom_by(&mut self, factor: f32, pivot: (f32, f32)) {
        let target = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let applied = target / self.scale;
        self.offset_x = pivot.0 - (pivot.0 - self.offset_x) * applied;
        self.offset_y = pivot.1 - (pivot.1 - self.offset_y) * applied;
        self.scale = target;
    }

    pub fn screen_to_canvas(&self, point: (f32, f32)) -> (f32, f32) {
        (
            (point.0 - self.offset_x) / self.scale,
            (point.1 - self.offset_y) / self.scale,
        )
    }

    pub fn canvas_to_screen(&self, point: (f32, f32)) -> (f32, f32) {
        (
            point.0 * self.scale + self.offset_x,
            point.1 * self.scale + self.offset_y,
        )
    }
}

impl Default for TransformContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_clamped() {
        let mut transform = TransformContext::new();
        transform.set_scale(0.1);
        assert_eq!(transform.scale(), MIN_SCALE);
        transform.set_scale(9.0);
        assert_eq!(transform.scale(), MAX_SCALE);
    }

    #[test]
    fn screen_canvas_roundtrip() {
        let mut transform = TransformContext::new();
        transform.set_scale(1.25);
        transform.pan_by(10.0, -4.0);
        let screen = transform.canvas_to_screen((120.0, 80.0));
        let canvas = transform.screen_to_canvas(screen);
        assert!((canvas.0 - 120.0).abs() < 1e-4);
        assert!((canvas.1 - 80.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_keeps_pivot_fixed() {
        let mut transform = TransformContext::new();
        let pivot = (200.0, 150.0);
        let before = transform.screen_to_canvas(pivot);
        transform.zoom_by(1.3, pivot);
        let after = transform.screen_to_canvas(pivot);
        assert!((before.0 - after.0).abs() < 1e-3);
        assert!((before.1 - after.1).abs() < 1e-3);
    }
}
