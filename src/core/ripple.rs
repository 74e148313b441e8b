use super::constants::RIPPLE_LIFETIME_MS;
use glam::Vec2;

/// Axis-aligned box in client coordinates (mirrors `DOMRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Size and card-relative position of a ripple span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

impl RippleGeometry {
    /// Center the ripple on `click` and size it to the card's larger side.
    pub fn centered(rect: ClientRect, click: Vec2) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: click.x - rect.left - size * 0.5,
            top: click.y - rect.top - size * 0.5,
        }
    }

    #[cfg(test)]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.size * 0.5, self.top + self.size * 0.5)
    }

    pub fn css(&self) -> String {
        format!(
            "width:{:.1}px;height:{:.1}px;left:{:.1}px;top:{:.1}px",
            self.size, self.size, self.left, self.top
        )
    }
}

#[inline]
pub fn lifetime_ms() -> u32 {
    RIPPLE_LIFETIME_MS
}
