//! Per-vertex normal computation.
//!
//! Smooth shading needs one normal per vertex, not per face. The normal at a
//! vertex is the normalized sum of the unnormalized (area-weighted) normals
//! of every face that references it, so large faces contribute more than
//! slivers. The result depends only on the face/vertex incidence, never on
//! the order faces appear in the input.

use nalgebra::{Point3, Vector3};

/// Accumulated sums shorter than this are treated as degenerate.
const DEGENERATE_EPS: f32 = 1e-12;

/// Compute the unnormalized normal of a triangle.
///
/// The cross product of two edge vectors in face-vertex order; its length is
/// twice the triangle's area, which is exactly the weighting wanted when
/// accumulating into vertex normals.
pub fn face_normal(p0: &Point3<f32>, p1: &Point3<f32>, p2: &Point3<f32>) -> Vector3<f32> {
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    e1.cross(&e2)
}

/// Compute area-weighted per-vertex normals for a flattened triangle list.
///
/// Returns one normal per vertex position. Vertices whose accumulated sum is
/// (near-)zero — isolated vertices, or vertices whose incident faces cancel
/// exactly — get the zero vector rather than an error.
///
/// # Example
/// ```
/// use trimesh::mesh::vertex_normals;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let normals = vertex_normals(&positions, &[0, 1, 2]);
///
/// // A single CCW triangle in the xy-plane: every normal is +z
/// for n in &normals {
///     assert!((n.z - 1.0).abs() < 1e-6);
/// }
/// ```
pub fn vertex_normals(positions: &[Point3<f32>], triangles: &[u32]) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zeros(); positions.len()];

    for tri in triangles.chunks_exact(3) {
        let n = face_normal(
            &positions[tri[0] as usize],
            &positions[tri[1] as usize],
            &positions[tri[2] as usize],
        );
        for &vi in tri {
            normals[vi as usize] += n;
        }
    }

    for n in normals.iter_mut() {
        let len = n.norm();
        if len > DEGENERATE_EPS {
            *n /= len;
        } else {
            *n = Vector3::zeros();
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Vec<Point3<f32>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_single_triangle_normals_match_face_normal() {
        let positions = unit_triangle();
        let normals = vertex_normals(&positions, &[0, 1, 2]);

        assert_eq!(normals.len(), 3);
        for n in &normals {
            assert!((n.norm() - 1.0).abs() < 1e-6);
            assert!((n.z - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_isolated_vertex_gets_zero_normal() {
        let mut positions = unit_triangle();
        positions.push(Point3::new(5.0, 5.0, 5.0)); // referenced by no face

        let normals = vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals.len(), 4);
        assert_eq!(normals[3], Vector3::zeros());
    }

    #[test]
    fn test_face_order_independence() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let a = vertex_normals(&positions, &[0, 1, 2, 0, 1, 3]);
        let b = vertex_normals(&positions, &[0, 1, 3, 0, 1, 2]);

        for (na, nb) in a.iter().zip(b.iter()) {
            assert!((na - nb).norm() < 1e-6);
        }
    }

    #[test]
    fn test_closed_mesh_normals_are_unit() {
        // Tetrahedron, outward winding
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let triangles = [0, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3];

        for n in vertex_normals(&positions, &triangles) {
            assert!((n.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_area_weighting() {
        // Two coplanar faces: weighting cannot change the direction
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(10.0, -10.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[0, 1, 2, 0, 3, 1]);
        for n in &normals {
            assert!((n.z - 1.0).abs() < 1e-6);
        }
    }
}
