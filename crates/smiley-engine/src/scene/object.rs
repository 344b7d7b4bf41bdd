use std::fmt;

use crate::coords::ColorRgba;
use crate::geometry::Mesh;
use crate::math::Vector2;

/// Stable name of a drawable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(pub &'static str);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A drawable node: transform state, flat color and its mesh.
///
/// Position is a 2D pixel offset (z is always 0), rotation is about the z
/// axis only, scale has an implicit z of 1. The mesh is assigned once; GPU
/// buffers for it are owned by the renderer.
#[derive(Debug, Clone)]
pub struct Object2D {
    id: ObjectId,
    position: Vector2,
    rotation: f32, // radians
    scale: Vector2,
    color: ColorRgba,
    mesh: Mesh,
}

impl Object2D {
    pub fn new(id: &'static str) -> Self {
        Self {
            id: ObjectId(id),
            position: Vector2::zero(),
            rotation: 0.0,
            scale: Vector2::splat(1.0),
            color: ColorRgba::black(),
            mesh: Mesh::new(),
        }
    }

    pub fn with_position(mut self, v: Vector2) -> Self { self.position = v; self }
    pub fn with_rotation_degrees(mut self, deg: f32) -> Self { self.rotation = deg.to_radians(); self }
    pub fn with_scale(mut self, v: Vector2) -> Self { self.scale = v; self }
    pub fn with_color(mut self, c: ColorRgba) -> Self { self.color = c; self }
    pub fn with_mesh(mut self, mesh: Mesh) -> Self { self.mesh = mesh; self }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    #[inline]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.to_degrees()
    }

    #[inline]
    pub fn scale(&self) -> Vector2 {
        self.scale
    }

    #[inline]
    pub fn color(&self) -> ColorRgba {
        self.color
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn set_position(&mut self, v: Vector2) {
        self.position = v;
    }

    pub fn set_position_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_position_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn set_rotation_radians(&mut self, rad: f32) {
        self.rotation = rad;
    }

    pub fn set_rotation_degrees(&mut self, deg: f32) {
        self.rotation = deg.to_radians();
    }

    pub fn set_scale(&mut self, v: Vector2) {
        self.scale = v;
    }

    pub fn set_scale_x(&mut self, x: f32) {
        self.scale.x = x;
    }

    pub fn set_scale_y(&mut self, y: f32) {
        self.scale.y = y;
    }

    pub fn set_color(&mut self, c: ColorRgba) {
        self.color = c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = Object2D::new("face");
        assert_eq!(o.id(), ObjectId("face"));
        assert_eq!(o.position(), Vector2::zero());
        assert_eq!(o.rotation_radians(), 0.0);
        assert_eq!(o.scale(), Vector2::new(1.0, 1.0));
        assert_eq!(o.color(), ColorRgba::black());
        assert!(o.mesh().is_empty());
    }

    #[test]
    fn degrees_and_radians_stay_in_sync() {
        let mut o = Object2D::new("border").with_rotation_degrees(180.0);
        assert!((o.rotation_radians() - std::f32::consts::PI).abs() < 1e-6);

        o.set_rotation_radians(std::f32::consts::FRAC_PI_2);
        assert!((o.rotation_degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn component_setters_touch_one_axis() {
        let mut o = Object2D::new("pivot").with_position(Vector2::new(1.0, 2.0));
        o.set_position_x(10.0);
        assert_eq!(o.position(), Vector2::new(10.0, 2.0));
        o.set_scale_y(-3.0);
        assert_eq!(o.scale(), Vector2::new(1.0, -3.0));
    }
}
