//! Renderable triangle mesh representation.

use nalgebra::{Point3, Vector3};

use super::{extract_edges, vertex_normals};
use crate::error::{MeshError, Result};

/// A face-vertex triangle mesh laid out for rendering.
///
/// Owns the vertex positions, the per-vertex normals, the flattened triangle
/// index list (three indices per face, for shaded draw calls) and the
/// flattened edge index list (two indices per edge, deduplicated, for
/// wireframe draw calls).
///
/// A `TriMesh` starts out empty and unloaded; it is populated exactly once by
/// [`build`](TriMesh::build) (usually via the OBJ parser) and is read-only
/// afterwards. The render loop uses [`is_loaded`](TriMesh::is_loaded) as its
/// gate: an unloaded mesh is simply skipped, never drawn.
#[derive(Debug, Clone)]
pub struct TriMesh {
    positions: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    triangles: Vec<u32>,
    edges: Vec<u32>,
    loaded: bool,
}

impl TriMesh {
    /// Create an empty, unloaded mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            triangles: Vec::new(),
            edges: Vec::new(),
            loaded: false,
        }
    }

    /// Build a loaded mesh from vertex positions and triangle faces.
    ///
    /// Validates that every face index refers to an existing vertex, then
    /// derives per-vertex normals and the wireframe edge set.
    ///
    /// # Example
    /// ```
    /// use trimesh::mesh::TriMesh;
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = TriMesh::build(positions, &[[0, 1, 2]]).unwrap();
    /// assert!(mesh.is_loaded());
    /// assert_eq!(mesh.triangle_indices(), &[0, 1, 2]);
    /// ```
    pub fn build(positions: Vec<Point3<f32>>, faces: &[[u32; 3]]) -> Result<Self> {
        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi as usize >= positions.len() {
                    return Err(MeshError::InvalidVertexIndex {
                        face: fi,
                        vertex: vi as usize,
                    });
                }
            }
        }

        let mut triangles = Vec::with_capacity(faces.len() * 3);
        for face in faces {
            triangles.extend_from_slice(face);
        }

        let normals = vertex_normals(&positions, &triangles);

        let mut edges = Vec::new();
        for [a, b] in extract_edges(&triangles) {
            edges.push(a);
            edges.push(b);
        }

        Ok(Self {
            positions,
            normals,
            triangles,
            edges,
            loaded: true,
        })
    }

    /// Whether the mesh has been populated by a successful load.
    ///
    /// The render loop checks this once per frame before touching any of the
    /// geometry accessors.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn num_faces(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of deduplicated undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    /// Vertex positions, in insertion order.
    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    /// Per-vertex unit normals (zero vector for degenerate vertices).
    ///
    /// Always the same length as [`positions`](TriMesh::positions).
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    /// Flattened triangle index list, three indices per face.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Flattened edge index list, two indices per edge, duplicate-free.
    pub fn edge_indices(&self) -> &[u32] {
        &self.edges
    }

    /// Vertex positions flattened to `[x, y, z, x, y, z, ...]` for GPU upload.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Vertex normals flattened to `[x, y, z, x, y, z, ...]` for GPU upload.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| [n.x, n.y, n.z]).collect()
    }

    /// Compute the axis-aligned bounding box of the mesh.
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        if self.positions.is_empty() {
            return None;
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Compute the centroid (average of all vertex positions).
    ///
    /// Returns `None` for an empty mesh.
    pub fn centroid(&self) -> Option<Point3<f32>> {
        if self.positions.is_empty() {
            return None;
        }

        let mut sum = Vector3::zeros();
        for p in &self.positions {
            sum += p.coords;
        }
        Some(Point3::from(sum / self.positions.len() as f32))
    }

    /// Maximum distance from the centroid to any vertex.
    ///
    /// Useful for framing the mesh in a viewer. Returns `None` for an empty
    /// mesh.
    pub fn bounding_radius(&self) -> Option<f32> {
        let center = self.centroid()?;
        let mut max_dist_sq = 0.0_f32;
        for p in &self.positions {
            max_dist_sq = max_dist_sq.max((p - center).norm_squared());
        }
        Some(max_dist_sq.sqrt())
    }
}

impl Default for TriMesh {
    fn default() -> Self {
        Self::new()
    }
}
