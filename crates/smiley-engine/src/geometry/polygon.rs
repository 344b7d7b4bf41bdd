use rand::Rng;

use crate::math::Vector2;

use super::{GeometryError, Mesh, Vertex};

const CENTER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Largest fan whose rim indices fit in `u16` without touching `u16::MAX`.
pub const MAX_SIDES: u32 = u16::MAX as u32 - 1;

/// Builds a filled regular polygon as a triangle fan around `center`.
///
/// Vertex 0 is the center; rim vertex `s + 1` sits at angle `2π·s / sides`.
/// Rim vertices get random opaque colors.
pub fn regular_polygon(sides: u32, center: Vector2, radius: f32) -> Result<Mesh, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::TooFewSides(sides));
    }
    if sides > MAX_SIDES {
        return Err(GeometryError::TooManySides(sides));
    }

    let mut rng = rand::rng();
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(sides as usize + 1),
        indices: Vec::with_capacity(sides as usize * 3),
    };

    mesh.vertices.push(Vertex::new(center.to_array(), CENTER_COLOR));

    let step = std::f32::consts::TAU / sides as f32;
    for s in 0..sides {
        let angle = step * s as f32;
        let x = center.x + angle.cos() * radius;
        let y = center.y + angle.sin() * radius;
        let color = [rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>(), 1.0];
        mesh.vertices.push(Vertex::new([x, y], color));

        let next = if s + 2 <= sides { s + 2 } else { 1 };
        mesh.indices.extend_from_slice(&[0, (s + 1) as u16, next as u16]);
    }

    log::trace!("regular_polygon: {} sides, {} vertices", sides, mesh.vertices.len());

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::mesh::signed_area2;

    #[test]
    fn rejects_degenerate_polygons() {
        assert_eq!(
            regular_polygon(2, Vector2::zero(), 10.0),
            Err(GeometryError::TooFewSides(2))
        );
    }

    #[test]
    fn rejects_fans_past_u16_indices() {
        assert_eq!(
            regular_polygon(MAX_SIDES + 1, Vector2::zero(), 10.0),
            Err(GeometryError::TooManySides(MAX_SIDES + 1))
        );
        assert_eq!(
            regular_polygon(70_000, Vector2::zero(), 10.0),
            Err(GeometryError::TooManySides(70_000))
        );
    }

    #[test]
    fn largest_fan_keeps_exact_indices() {
        let m = regular_polygon(MAX_SIDES, Vector2::zero(), 10.0).unwrap();
        assert_eq!(m.vertices.len(), MAX_SIDES as usize + 1);
        let n = m.indices.len();
        assert_eq!(&m.indices[n - 6..], &[0, (MAX_SIDES - 1) as u16, MAX_SIDES as u16, 0, MAX_SIDES as u16, 1]);
        assert_eq!(m.indices.iter().copied().max(), Some(MAX_SIDES as u16));
    }

    #[test]
    fn fan_counts() {
        let m = regular_polygon(50, Vector2::new(100.0, 0.0), 97.0).unwrap();
        assert_eq!(m.vertices.len(), 51);
        assert_eq!(m.indices.len(), 150);
        assert_eq!(m.triangle_count(), 50);
    }

    #[test]
    fn last_triangle_wraps_to_first_rim_vertex() {
        let m = regular_polygon(4, Vector2::zero(), 30.0).unwrap();
        assert_eq!(m.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
    }

    #[test]
    fn rim_vertices_lie_on_circle() {
        let c = Vector2::new(50.0, -20.0);
        let m = regular_polygon(12, c, 10.0).unwrap();
        assert_eq!(m.vertices[0].position, [50.0, -20.0]);
        for v in &m.vertices[1..] {
            let d = ((v.position[0] - c.x).powi(2) + (v.position[1] - c.y).powi(2)).sqrt();
            assert!((d - 10.0).abs() < 1e-4, "distance {d}");
        }
        assert!((m.vertices[1].position[0] - 60.0).abs() < 1e-5);
    }

    #[test]
    fn triangles_are_counter_clockwise() {
        let m = regular_polygon(8, Vector2::zero(), 5.0).unwrap();
        assert!(m.triangles().all(|t| signed_area2(t) > 0.0));
    }

    #[test]
    fn colors_are_opaque_and_in_range() {
        let m = regular_polygon(16, Vector2::zero(), 1.0).unwrap();
        assert_eq!(m.vertices[0].color, [1.0, 1.0, 1.0, 1.0]);
        for v in &m.vertices {
            assert_eq!(v.color[3], 1.0);
            assert!(v.color[..3].iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
