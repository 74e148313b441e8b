use super::constants::{TRAIL_MARKER_SIZE_PX, TRAIL_SMOOTHING};
use glam::Vec2;

/// Pointer and lagging marker positions for the cursor trail.
///
/// `pointer` is written by pointer-move events only; `trail` is advanced by
/// [`TrailState::step`] once per rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct TrailState {
    pub pointer: Vec2,
    pub trail: Vec2,
    pub visible: bool,
    pub smoothing: f32,
}

impl Default for TrailState {
    fn default() -> Self {
        Self::new(TRAIL_SMOOTHING)
    }
}

impl TrailState {
    pub fn new(smoothing: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            trail: Vec2::ZERO,
            visible: false,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.visible = true;
    }

    #[inline]
    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    /// Advance one frame of exponential smoothing and return the marker's
    /// top-left offset in CSS pixels.
    pub fn step(&mut self) -> Vec2 {
        self.trail += (self.pointer - self.trail) * self.smoothing;
        self.marker_offset()
    }

    #[inline]
    pub fn marker_offset(&self) -> Vec2 {
        self.trail - Vec2::splat(TRAIL_MARKER_SIZE_PX * 0.5)
    }

    #[inline]
    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }

    #[cfg(test)]
    pub fn distance(&self) -> f32 {
        self.pointer.distance(self.trail)
    }
}
