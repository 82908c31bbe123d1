//! Mapping between field coordinates, canvas pixels and NDC
//!
//! The field is letterboxed into the canvas: uniformly scaled to fit and
//! centred, so its aspect ratio never changes.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Affine field-to-NDC map as uploaded to the vertex shader:
/// `ndc = position * scale + offset`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FieldTransform {
    pub scale: [f32; 2],
    pub offset: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Field size in field units
    pub field: Vec2,
    /// Canvas size in pixels (CSS or physical, as long as input matches)
    pub canvas: Vec2,
}

impl Viewport {
    pub fn new(field: Vec2, canvas: Vec2) -> Self {
        Self { field, canvas }
    }

    /// Pixels per field unit
    pub fn scale(&self) -> f32 {
        (self.canvas.x / self.field.x).min(self.canvas.y / self.field.y)
    }

    /// Canvas-pixel offset of the field's top-left corner
    pub fn offset(&self) -> Vec2 {
        (self.canvas - self.field * self.scale()) / 2.0
    }

    /// Field coordinates (y down) to normalized device coordinates (y up)
    pub fn field_to_ndc(&self, p: Vec2) -> Vec2 {
        let px = self.offset() + p * self.scale();
        Vec2::new(px.x / self.canvas.x * 2.0 - 1.0, 1.0 - px.y / self.canvas.y * 2.0)
    }

    /// [`Self::field_to_ndc`] as a per-axis scale and offset
    pub fn transform(&self) -> FieldTransform {
        let s = self.scale();
        let off = self.offset();
        FieldTransform {
            scale: [2.0 * s / self.canvas.x, -2.0 * s / self.canvas.y],
            offset: [
                2.0 * off.x / self.canvas.x - 1.0,
                1.0 - 2.0 * off.y / self.canvas.y,
            ],
        }
    }

    /// Canvas pixel position to field coordinates
    pub fn canvas_to_field(&self, px: Vec2) -> Vec2 {
        (px - self.offset()) / self.scale()
    }

    /// Field coordinates to canvas pixels (for DOM overlays)
    pub fn field_to_canvas(&self, p: Vec2) -> Vec2 {
        self.offset() + p * self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_exact_fit() {
        let vp = Viewport::new(Vec2::new(480.0, 800.0), Vec2::new(480.0, 800.0));
        assert_eq!(vp.scale(), 1.0);
        assert!(approx(vp.field_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
        assert!(approx(vp.field_to_ndc(Vec2::new(480.0, 800.0)), Vec2::new(1.0, -1.0)));
        assert!(approx(vp.field_to_ndc(Vec2::new(240.0, 400.0)), Vec2::ZERO));
    }

    #[test]
    fn test_letterbox_wide_canvas() {
        // Twice as wide as needed: bars left and right
        let vp = Viewport::new(Vec2::new(480.0, 800.0), Vec2::new(1920.0, 800.0));
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Vec2::new(720.0, 0.0));
        assert!(approx(vp.canvas_to_field(Vec2::new(720.0, 0.0)), Vec2::ZERO));
        assert!(approx(vp.field_to_ndc(Vec2::new(240.0, 400.0)), Vec2::ZERO));
    }

    #[test]
    fn test_transform_matches_field_to_ndc() {
        let vp = Viewport::new(Vec2::new(480.0, 800.0), Vec2::new(1170.0, 2532.0));
        let t = vp.transform();
        for p in [Vec2::ZERO, Vec2::new(480.0, 800.0), Vec2::new(37.5, 612.0)] {
            let gpu = Vec2::from(t.scale) * p + Vec2::from(t.offset);
            assert!(approx(gpu, vp.field_to_ndc(p)));
        }
        assert_eq!(std::mem::size_of::<FieldTransform>(), 16);
    }

    #[test]
    fn test_canvas_round_trip() {
        let vp = Viewport::new(Vec2::new(480.0, 800.0), Vec2::new(390.0, 844.0));
        let p = Vec2::new(123.0, 456.0);
        assert!(approx(vp.canvas_to_field(vp.field_to_canvas(p)), p));
    }
}
