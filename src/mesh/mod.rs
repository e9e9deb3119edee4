//! Core mesh data structures.
//!
//! This module provides the renderable triangle mesh representation used by
//! the rest of the crate.
//!
//! # Overview
//!
//! The primary type is [`TriMesh`], a face-vertex triangle mesh that stores
//! exactly what an interactive viewer consumes each frame: vertex positions,
//! smooth per-vertex normals, a flattened triangle index list for shaded draw
//! calls, and a deduplicated edge index list for wireframe draw calls.
//!
//! A `TriMesh` is populated once, by the OBJ parser or by
//! [`TriMesh::build`], and is read-only afterwards. Normals and edges are
//! derived during construction:
//!
//! - [`vertex_normals`] accumulates area-weighted face normals into each
//!   incident vertex and normalizes the sums.
//! - [`extract_edges`] collapses the three edges of every triangle into a
//!   duplicate-free undirected edge set.
//!
//! # Construction
//!
//! ```
//! use trimesh::mesh::TriMesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh = TriMesh::build(positions, &faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.num_edges(), 3);
//! ```

mod edges;
mod normals;
mod trimesh;

pub use edges::extract_edges;
pub use normals::{face_normal, vertex_normals};
pub use trimesh::TriMesh;
