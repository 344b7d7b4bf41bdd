use std::collections::HashSet;

use crate::coords::ColorRgba;
use crate::math::Matrix3;

use super::{Object2D, ObjectId, SceneError};

/// One drawable's transform and color for the current frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedDraw {
    /// Index into the scene's draw order.
    pub index: usize,
    pub transform: Matrix3,
    pub color: ColorRgba,
}

/// Ordered drawables with a designated border and pivot.
///
/// Draw order is insertion order. The border's scale, position and rotation
/// drive every drawable except the pivot; the pivot's position is the
/// rotation anchor.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Object2D>,
    border: usize,
    pivot: usize,
}

impl Scene {
    /// Builds a scene from drawables in draw order.
    pub fn new(objects: Vec<Object2D>, border: ObjectId, pivot: ObjectId) -> Result<Self, SceneError> {
        let mut seen = HashSet::new();
        for o in &objects {
            if !seen.insert(o.id()) {
                return Err(SceneError::DuplicateId(o.id()));
            }
        }

        let find = |id: ObjectId| {
            objects
                .iter()
                .position(|o| o.id() == id)
                .ok_or(SceneError::UnknownObject(id))
        };
        let border = find(border)?;
        let pivot = find(pivot)?;

        Ok(Self { objects, border, pivot })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object2D> {
        self.objects.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object2D> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object2D> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    #[inline]
    pub fn border(&self) -> &Object2D {
        &self.objects[self.border]
    }

    #[inline]
    pub fn border_mut(&mut self) -> &mut Object2D {
        &mut self.objects[self.border]
    }

    #[inline]
    pub fn pivot(&self) -> &Object2D {
        &self.objects[self.pivot]
    }

    #[inline]
    pub fn pivot_mut(&mut self) -> &mut Object2D {
        &mut self.objects[self.pivot]
    }

    /// Composite matrix for the drawable at `index` in draw order.
    ///
    /// The pivot is only translated to its own position. Every other drawable
    /// is scaled by the border's scale, moved to the border's position,
    /// shifted so the pivot sits at the origin, rotated by the border's angle,
    /// and shifted back.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn composite_transform(&self, index: usize) -> Matrix3 {
        assert!(index < self.len(), "drawable index {index} out of range ({} drawables)", self.len());
        let pivot = self.pivot();
        let mut m = Matrix3::identity();

        if index == self.pivot {
            return Matrix3::multiply(&Matrix3::translation(pivot.position()), &m);
        }

        let border = self.border();
        let steps = [
            Matrix3::scale(border.scale()),
            Matrix3::translation(border.position()),
            Matrix3::translation(-pivot.position()),
            Matrix3::rotation(border.rotation_radians()),
            Matrix3::translation(pivot.position()),
        ];
        for step in &steps {
            m = Matrix3::multiply(step, &m);
        }
        m
    }

    /// Composite matrix for the drawable named `id`.
    pub fn composite_for(&self, id: ObjectId) -> Option<Matrix3> {
        self.objects
            .iter()
            .position(|o| o.id() == id)
            .map(|i| self.composite_transform(i))
    }

    /// Resolves every drawable for the current frame, in draw order.
    pub fn resolve(&self) -> Vec<ResolvedDraw> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, o)| ResolvedDraw {
                index,
                transform: self.composite_transform(index),
                color: o.color(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::math::{assert_approx_eq, Vector2};
    use std::f32::consts::FRAC_PI_2;

    const BORDER: ObjectId = ObjectId("border");
    const PIVOT: ObjectId = ObjectId("pivot");
    const FACE: ObjectId = ObjectId("face");

    fn scene(border_pos: Vector2, pivot_pos: Vector2, angle: f32, scale: Vector2) -> Scene {
        let mut border = Object2D::new("border").with_position(border_pos).with_scale(scale);
        border.set_rotation_radians(angle);
        Scene::new(
            vec![
                border,
                Object2D::new("face").with_color(ColorRgba::new(1.0, 0.9, 0.0, 1.0)),
                Object2D::new("pivot").with_position(pivot_pos),
            ],
            BORDER,
            PIVOT,
        )
        .unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_rejects_unknown_roles() {
        let err = Scene::new(vec![Object2D::new("border")], BORDER, PIVOT).unwrap_err();
        assert_eq!(err, SceneError::UnknownObject(PIVOT));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Scene::new(
            vec![Object2D::new("border"), Object2D::new("border"), Object2D::new("pivot")],
            BORDER,
            PIVOT,
        )
        .unwrap_err();
        assert_eq!(err, SceneError::DuplicateId(BORDER));
    }

    // ── composite transforms ──────────────────────────────────────────────

    #[test]
    fn pivot_worked_example() {
        let s = scene(Vector2::new(100.0, 100.0), Vector2::new(40.0, 100.0), FRAC_PI_2, Vector2::splat(1.0));
        let m = s.composite_for(FACE).unwrap();

        assert_approx_eq(
            &m,
            &Matrix3::new([0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 40.0, 160.0, 1.0]),
            1e-4,
        );

        let p = m.transform_point(Vector2::zero());
        assert_approx_eq(&p, &Vector2::new(40.0, 160.0), 1e-4);

        let clip = Viewport::new(200.0, 200.0).to_clip(p);
        assert_approx_eq(&clip, &Vector2::new(-0.6, -0.6), 1e-5);
    }

    #[test]
    fn pivot_only_follows_its_own_position() {
        let s = scene(Vector2::new(100.0, 100.0), Vector2::new(40.0, 100.0), 1.0, Vector2::new(3.0, 3.0));
        assert_eq!(
            s.composite_for(PIVOT).unwrap(),
            Matrix3::translation(Vector2::new(40.0, 100.0))
        );
    }

    #[test]
    fn zero_rotation_ignores_pivot() {
        let a = scene(Vector2::new(50.0, 60.0), Vector2::new(0.0, 0.0), 0.0, Vector2::new(2.0, 0.5));
        let b = scene(Vector2::new(50.0, 60.0), Vector2::new(300.0, -7.0), 0.0, Vector2::new(2.0, 0.5));
        let ma = a.composite_for(FACE).unwrap();
        let mb = b.composite_for(FACE).unwrap();
        assert_approx_eq(&ma, &mb, 1e-4);
        assert_approx_eq(
            &ma.transform_point(Vector2::new(10.0, 10.0)),
            &Vector2::new(70.0, 65.0),
            1e-4,
        );
    }

    #[test]
    fn scale_is_applied_before_translation() {
        let s = scene(Vector2::new(10.0, 20.0), Vector2::zero(), 0.0, Vector2::new(2.0, 3.0));
        let m = s.composite_for(FACE).unwrap();
        assert_eq!(m.transform_point(Vector2::new(1.0, 1.0)), Vector2::new(12.0, 23.0));
    }

    #[test]
    fn pivot_point_is_a_fixed_point_of_the_rotation() {
        // The pixel sitting on the pivot does not move, whatever the angle.
        let pivot = Vector2::new(40.0, 100.0);
        let border = Vector2::new(100.0, 100.0);
        for angle in [0.4_f32, 1.3, -2.0, 3.0] {
            let s = scene(border, pivot, angle, Vector2::splat(1.0));
            let m = s.composite_for(FACE).unwrap();
            let local = pivot - border;
            assert_approx_eq(&m.transform_point(local), &pivot, 1e-3);
        }
    }

    #[test]
    fn positive_angle_rotates_clockwise_on_screen() {
        let vp = Viewport::new(200.0, 200.0);
        let s = scene(Vector2::zero(), Vector2::new(100.0, 100.0), FRAC_PI_2, Vector2::splat(1.0));
        let m = s.composite_for(FACE).unwrap();

        let before = vp.to_clip(Vector2::new(110.0, 100.0)) - vp.to_clip(Vector2::new(100.0, 100.0));
        let after = vp.to_clip(m.transform_point(Vector2::new(110.0, 100.0)))
            - vp.to_clip(Vector2::new(100.0, 100.0));

        // Clip space is y-up: a negative cross product means clockwise.
        let cross = before.x * after.y - before.y * after.x;
        assert!(cross < 0.0, "cross = {cross}");
        assert_approx_eq(&after, &Vector2::new(0.0, -0.1), 1e-5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn composite_transform_rejects_out_of_range_index() {
        let s = scene(Vector2::zero(), Vector2::zero(), 0.0, Vector2::splat(1.0));
        s.composite_transform(s.len());
    }

    // ── live edits ────────────────────────────────────────────────────────

    #[test]
    fn edits_are_visible_on_next_resolve() {
        let mut s = scene(Vector2::new(100.0, 100.0), Vector2::new(40.0, 100.0), 0.0, Vector2::splat(1.0));
        let before = s.resolve();

        s.pivot_mut().set_position(Vector2::new(0.0, 0.0));
        s.border_mut().set_rotation_radians(FRAC_PI_2);
        let after = s.resolve();

        assert_eq!(before.len(), 3);
        assert_ne!(before[1].transform, after[1].transform);
        assert_approx_eq(
            &after[1].transform.transform_point(Vector2::zero()),
            &Vector2::new(-100.0, 100.0),
            1e-4,
        );
    }

    #[test]
    fn resolve_keeps_draw_order_and_colors() {
        let s = scene(Vector2::zero(), Vector2::zero(), 0.0, Vector2::splat(1.0));
        let draws = s.resolve();
        let indices: Vec<usize> = draws.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(draws[1].color, ColorRgba::new(1.0, 0.9, 0.0, 1.0));
    }
}
