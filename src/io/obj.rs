//! Wavefront OBJ format support.
//!
//! This module parses the ASCII OBJ subset an interactive viewer needs:
//! `v x y z` vertex lines and `f i1 i2 i3 ...` face lines with 1-based
//! indices. Optional `/vt/vn` sub-indices on face corners are ignored, as are
//! comments, texture coordinates, normals, groups and every other line type.
//!
//! Faces with more than three corners are triangulated by a fan anchored at
//! the first corner: `f a b c d` becomes the triangles `(a, b, c)` and
//! `(a, c, d)`. The policy is configurable through [`ObjOptions`] for
//! pipelines that want to reject n-gon input outright.
//!
//! Parse errors are fatal and carry the 1-based line number; a failed parse
//! never yields a partial mesh.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::TriMesh;

/// How faces with more than three corners are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Triangulation {
    /// Triangulate by fan from the first corner (the default).
    #[default]
    Fan,
    /// Reject n-gons with [`MeshError::UnsupportedPolygon`].
    Reject,
}

/// Options controlling OBJ parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjOptions {
    /// The n-gon triangulation policy.
    pub triangulation: Triangulation,
}

/// Parse OBJ text into a loaded [`TriMesh`] using the default options.
///
/// # Example
/// ```
/// use trimesh::io::obj;
///
/// let mesh = obj::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
/// assert!(mesh.is_loaded());
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// assert_eq!(mesh.num_edges(), 3);
/// ```
pub fn parse(text: &str) -> Result<TriMesh> {
    parse_with_options(text, &ObjOptions::default())
}

/// Parse OBJ text into a loaded [`TriMesh`].
///
/// Face indices are validated against the vertices parsed so far, matching
/// the sequential semantics of the format.
pub fn parse_with_options(text: &str, options: &ObjOptions) -> Result<TriMesh> {
    let mut positions: Vec<Point3<f32>> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();
    let mut corners: Vec<u32> = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = lineno + 1;
        let mut tokens = raw.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0_f32; 3];
                for c in coords.iter_mut() {
                    *c = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or(MeshError::MalformedVertex { line })?;
                }
                // Extra tokens (a w component, vertex colors) are ignored
                positions.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                corners.clear();
                for token in tokens {
                    // Only the position index matters; drop /vt/vn suffixes
                    let index: usize = token
                        .split('/')
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or(MeshError::MalformedFace { line })?;
                    if index == 0 || index > positions.len() {
                        return Err(MeshError::FaceIndexOutOfRange {
                            line,
                            index,
                            vertices: positions.len(),
                        });
                    }
                    corners.push((index - 1) as u32);
                }

                if corners.len() < 3 {
                    return Err(MeshError::MalformedFace { line });
                }

                match options.triangulation {
                    Triangulation::Fan => {
                        for i in 1..corners.len() - 1 {
                            faces.push([corners[0], corners[i], corners[i + 1]]);
                        }
                    }
                    Triangulation::Reject => {
                        if corners.len() != 3 {
                            return Err(MeshError::UnsupportedPolygon {
                                line,
                                sides: corners.len(),
                            });
                        }
                        faces.push([corners[0], corners[1], corners[2]]);
                    }
                }
            }
            // Comments, vt/vn/g/usemtl/... and blank lines
            _ => {}
        }
    }

    TriMesh::build(positions, &faces)
}

/// Load a mesh from an OBJ file.
///
/// # Example
/// ```no_run
/// use trimesh::io::obj;
///
/// let mesh = obj::load("teapot.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Save a mesh to an OBJ file (`v` and `f` lines).
pub fn save<P: AsRef<Path>>(mesh: &TriMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for tri in mesh.triangle_indices().chunks_exact(3) {
        // OBJ indices are 1-based
        writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn test_parse_single_triangle() {
        let mesh = parse(TRIANGLE).unwrap();
        assert!(mesh.is_loaded());
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.triangle_indices(), &[0, 1, 2]);
        assert_eq!(mesh.num_edges(), 3);

        // Right-hand rule for this winding: +z, and every vertex normal
        // equals the face normal
        for n in mesh.normals() {
            assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        }
    }

    #[test]
    fn test_parse_ignores_comments_and_other_lines() {
        let text = "# a comment\n\nvt 0.5 0.5\nvn 0 0 1\ng teapot\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse(text).unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
    }

    #[test]
    fn test_parse_slash_suffixes_ignored() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/2 3//3\n";
        let mesh = parse(text).unwrap();
        assert_eq!(mesh.triangle_indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_parse_quad_fan_triangulation() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = parse(text).unwrap();
        assert_eq!(mesh.num_faces(), 2);
        // Fan from the first corner
        assert_eq!(mesh.triangle_indices(), &[0, 1, 2, 0, 2, 3]);
        // 4 boundary edges + 1 fan diagonal
        assert_eq!(mesh.num_edges(), 5);
    }

    #[test]
    fn test_parse_reject_ngons() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let options = ObjOptions {
            triangulation: Triangulation::Reject,
        };
        let result = parse_with_options(text, &options);
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedPolygon { line: 5, sides: 4 })
        ));
    }

    #[test]
    fn test_parse_malformed_vertex() {
        let result = parse("v 0 0\n");
        assert!(matches!(result, Err(MeshError::MalformedVertex { line: 1 })));

        let result = parse("v 0 0 banana\n");
        assert!(matches!(result, Err(MeshError::MalformedVertex { line: 1 })));
    }

    #[test]
    fn test_parse_face_index_out_of_range() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 99\n";
        let result = parse(text);
        assert!(matches!(
            result,
            Err(MeshError::FaceIndexOutOfRange {
                line: 4,
                index: 99,
                vertices: 3
            })
        ));
    }

    #[test]
    fn test_parse_zero_index_out_of_range() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
        assert!(matches!(
            parse(text),
            Err(MeshError::FaceIndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_face_before_vertices() {
        // Indices are checked against vertices parsed so far
        let text = "f 1 2 3\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
        assert!(matches!(
            parse(text),
            Err(MeshError::FaceIndexOutOfRange { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_malformed_face() {
        assert!(matches!(
            parse("v 0 0 0\nf 1 2\n"),
            Err(MeshError::MalformedFace { line: 2 })
        ));
        assert!(matches!(
            parse("v 0 0 0\nf 1 x 1\n"),
            Err(MeshError::MalformedFace { line: 2 })
        ));
    }

    #[test]
    fn test_parse_empty_text() {
        // No vertices, no faces: still a completed (loaded) parse
        let mesh = parse("").unwrap();
        assert!(mesh.is_loaded());
        assert_eq!(mesh.num_vertices(), 0);
    }

    #[test]
    fn test_vertex_extra_tokens_ignored() {
        let mesh = parse("v 0 0 0 1.0\nv 1 0 0 1.0\nv 0 1 0 1.0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.num_vertices(), 3);
    }

    #[test]
    fn test_counts_property() {
        // V vertices and F faces give V positions, V normals, 3F indices
        let text = "v 0 0 0\nv 1 0 0\nv 0.5 1 0\nv 0.5 0.5 1\nf 1 3 2\nf 1 2 4\nf 2 3 4\nf 3 1 4\n";
        let mesh = parse(text).unwrap();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.normals().len(), 4);
        assert_eq!(mesh.triangle_indices().len(), 3 * 4);
    }

    #[test]
    fn test_save_roundtrip() {
        let mesh = parse(TRIANGLE).unwrap();
        let path = std::env::temp_dir().join("trimesh_obj_save_test.obj");
        save(&mesh, &path).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.num_vertices(), mesh.num_vertices());
        assert_eq!(reloaded.triangle_indices(), mesh.triangle_indices());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("/nonexistent/path/teapot.obj");
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
