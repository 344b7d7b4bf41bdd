use anyhow::{Context, Result};

use smiley_engine::coords::{ColorRgba, Viewport};
use smiley_engine::geometry::{mouth_shape, regular_polygon, Mesh};
use smiley_engine::math::Vector2;
use smiley_engine::scene::{Object2D, ObjectId, Scene};

pub const BORDER: ObjectId = ObjectId("border");
pub const FACE: ObjectId = ObjectId("face");
pub const RIGHT_EYE: ObjectId = ObjectId("right_eye");
pub const LEFT_EYE: ObjectId = ObjectId("left_eye");
pub const MOUTH: ObjectId = ObjectId("mouth");
pub const PIVOT: ObjectId = ObjectId("pivot");

/// A filled regular polygon in mesh-local pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
    pub sides: u32,
    pub center: Vector2,
    pub radius: f32,
}

impl Disc {
    pub const fn new(sides: u32, cx: f32, cy: f32, radius: f32) -> Self {
        Self { sides, center: Vector2::new(cx, cy), radius }
    }

    fn mesh(&self) -> Result<Mesh> {
        regular_polygon(self.sides, self.center, self.radius)
            .with_context(|| format!("invalid polygon {self:?}"))
    }
}

/// Shapes, colors and placement of the smiley.
#[derive(Debug, Clone)]
pub struct FaceLayout {
    pub border: Disc,
    pub face: Disc,
    pub right_eye: Disc,
    pub left_eye: Disc,
    pub pivot: Disc,

    pub border_color: ColorRgba,
    pub face_color: ColorRgba,
    pub eye_color: ColorRgba,
    pub mouth_color: ColorRgba,
    pub pivot_color: ColorRgba,

    /// Pivot start position relative to the canvas center.
    pub pivot_offset: Vector2,
    /// Starting pose of the border, and so of the whole face.
    pub rotation_degrees: f32,
    pub scale: Vector2,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            border: Disc::new(50, 100.0, 0.0, 97.0),
            face: Disc::new(50, 100.0, 0.0, 85.0),
            right_eye: Disc::new(50, 50.0, -20.0, 10.0),
            left_eye: Disc::new(50, 150.0, -20.0, 10.0),
            pivot: Disc::new(4, 0.0, 0.0, 30.0),

            border_color: ColorRgba::new(0.0, 0.0, 0.0, 1.0),
            face_color: ColorRgba::new(1.0, 0.9, 0.0, 1.0),
            eye_color: ColorRgba::new(0.0078, 0.0, 0.0196, 1.0),
            mouth_color: ColorRgba::new(0.8627, 0.180, 0.1372, 1.0),
            pivot_color: ColorRgba::new(0.392, 0.392, 0.392, 1.0),

            pivot_offset: Vector2::new(-60.0, 0.0),
            rotation_degrees: 0.0,
            scale: Vector2::splat(1.0),
        }
    }
}

/// Builds the smiley scene for a canvas of size `viewport`.
///
/// The border starts at the canvas center and the pivot at
/// `center + layout.pivot_offset`.
pub fn build_scene(viewport: Viewport, layout: &FaceLayout) -> Result<Scene> {
    let center = viewport.center();

    let part = |id: &'static str, shape: &Disc, color: ColorRgba| -> Result<Object2D> {
        Ok(Object2D::new(id)
            .with_mesh(shape.mesh()?)
            .with_color(color)
            .with_position(center))
    };

    let objects = vec![
        part(BORDER.0, &layout.border, layout.border_color)?,
        part(FACE.0, &layout.face, layout.face_color)?,
        part(RIGHT_EYE.0, &layout.right_eye, layout.eye_color)?,
        part(LEFT_EYE.0, &layout.left_eye, layout.eye_color)?,
        Object2D::new(MOUTH.0)
            .with_mesh(mouth_shape())
            .with_color(layout.mouth_color)
            .with_position(center),
        part(PIVOT.0, &layout.pivot, layout.pivot_color)?
            .with_position(center + layout.pivot_offset),
    ];

    let mut scene = Scene::new(objects, BORDER, PIVOT).context("failed to assemble face scene")?;
    let border = scene.border_mut();
    border.set_rotation_degrees(layout.rotation_degrees);
    border.set_scale(layout.scale);

    log::debug!("face scene built with {} drawables for {viewport:?}", scene.len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        build_scene(Viewport::new(800.0, 600.0), &FaceLayout::default()).unwrap()
    }

    #[test]
    fn draw_order() {
        let ids: Vec<ObjectId> = scene().iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![BORDER, FACE, RIGHT_EYE, LEFT_EYE, MOUTH, PIVOT]);
    }

    #[test]
    fn initial_positions() {
        let s = scene();
        assert_eq!(s.border().position(), Vector2::new(400.0, 300.0));
        assert_eq!(s.pivot().position(), Vector2::new(340.0, 300.0));
        assert_eq!(s.get(MOUTH).unwrap().position(), Vector2::new(400.0, 300.0));
        assert_eq!(s.border().scale(), Vector2::splat(1.0));
        assert_eq!(s.border().rotation_radians(), 0.0);
    }

    #[test]
    fn colors() {
        let s = scene();
        assert_eq!(s.get(FACE).unwrap().color(), ColorRgba::new(1.0, 0.9, 0.0, 1.0));
        assert_eq!(s.get(LEFT_EYE).unwrap().color(), s.get(RIGHT_EYE).unwrap().color());
        assert_eq!(s.border().color(), ColorRgba::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn mesh_sizes() {
        let s = scene();
        assert_eq!(s.border().mesh().vertices.len(), 51);
        assert_eq!(s.border().mesh().triangle_count(), 50);
        assert_eq!(s.pivot().mesh().vertices.len(), 5);
        assert_eq!(s.pivot().mesh().triangle_count(), 4);
        assert_eq!(s.get(MOUTH).unwrap().mesh().vertices.len(), 6);
    }

    #[test]
    fn starting_pose_is_applied_to_border() {
        let layout = FaceLayout {
            rotation_degrees: 90.0,
            scale: Vector2::new(2.0, 0.5),
            ..FaceLayout::default()
        };
        let s = build_scene(Viewport::new(800.0, 600.0), &layout).unwrap();
        assert!((s.border().rotation_radians() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(s.border().scale(), Vector2::new(2.0, 0.5));
        assert_eq!(s.pivot().scale(), Vector2::splat(1.0));
    }

    #[test]
    fn rejects_degenerate_polygon() {
        let layout = FaceLayout { pivot: Disc::new(2, 0.0, 0.0, 30.0), ..FaceLayout::default() };
        assert!(build_scene(Viewport::new(800.0, 600.0), &layout).is_err());
    }
}
