//! Click-to-coordinate layout probe
//!
//! A design aid for positioning elements on the mimic, independent of the
//! runtime data path: given the layout surface's bounding box and an
//! absolute pointer position, it yields integer pixel offsets relative to
//! the surface and logs them in CSS `left`/`top` form, ready to paste
//! into a stylesheet.

use log::info;

/// Bounding box of the layout surface, in absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x < self.left + self.width
            && y >= self.top
            && y < self.top + self.height
    }
}

/// Coordinate probe for one layout surface.
#[derive(Debug, Clone, Copy)]
pub struct LayoutProbe {
    bounds: SurfaceBounds,
}

impl LayoutProbe {
    pub fn new(bounds: SurfaceBounds) -> Self {
        Self { bounds }
    }

    /// Surface-relative integer offsets for a pointer position, logged in
    /// stylesheet form.
    pub fn click(&self, pointer_x: f64, pointer_y: f64) -> (i32, i32) {
        let x = (pointer_x - self.bounds.left).round() as i32;
        let y = (pointer_y - self.bounds.top).round() as i32;
        info!("left: {}px; top: {}px;", x, y);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_offsets_are_surface_relative() {
        let probe = LayoutProbe::new(SurfaceBounds::new(100.0, 50.0, 800.0, 600.0));
        assert_eq!(probe.click(340.0, 120.0), (240, 70));
        assert_eq!(probe.click(100.0, 50.0), (0, 0));
    }

    #[test]
    fn test_click_offsets_round_to_whole_pixels() {
        let probe = LayoutProbe::new(SurfaceBounds::new(0.5, 0.5, 100.0, 100.0));
        assert_eq!(probe.click(10.0, 20.0), (10, 20));
    }

    #[test]
    fn test_bounds_containment() {
        let bounds = SurfaceBounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(99.9, 99.9));
        assert!(!bounds.contains(100.0, 50.0));
        assert!(!bounds.contains(-1.0, 50.0));
    }
}
