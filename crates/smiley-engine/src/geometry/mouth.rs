use super::{Mesh, Vertex};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const MOUTH_POSITIONS: [[f32; 2]; 6] = [
    [40.0, 10.0],
    [50.0, 30.0],
    [65.0, 45.0],
    [135.0, 45.0],
    [150.0, 30.0],
    [160.0, 10.0],
];

const MOUTH_INDICES: [u16; 12] = [
    0, 1, 5,
    1, 2, 5,
    2, 3, 5,
    3, 4, 5,
];

/// Fixed six-vertex smile, fanned from the right corner (vertex 5).
///
/// Unlike the polygon fans its triangles are clockwise in a y-up frame.
pub fn mouth_shape() -> Mesh {
    Mesh {
        vertices: MOUTH_POSITIONS.iter().map(|p| Vertex::new(*p, WHITE)).collect(),
        indices: MOUTH_INDICES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::mesh::signed_area2;

    #[test]
    fn mouth_layout() {
        let m = mouth_shape();
        assert_eq!(m.vertices.len(), 6);
        assert_eq!(m.triangle_count(), 4);
        assert_eq!(m.vertices[3].position, [135.0, 45.0]);
        assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
    }

    #[test]
    fn mouth_triangles_are_clockwise() {
        let m = mouth_shape();
        let areas: Vec<f32> = m.triangles().map(signed_area2).collect();
        assert_eq!(areas[0], -2400.0);
        assert!(areas.iter().all(|a| *a < 0.0), "areas {areas:?}");
    }
}
