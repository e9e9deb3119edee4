//! # trimesh
//!
//! Triangle-mesh ingestion for interactive viewers.
//!
//! trimesh turns Wavefront OBJ text into the exact buffers a renderer wants
//! each frame: flat vertex positions, smooth per-vertex normals, a triangle
//! index list for shaded draw calls, and a deduplicated edge index list for
//! wireframe draw calls.
//!
//! ## Features
//!
//! - **OBJ parsing**: the `v`/`f` subset with fan triangulation of n-gons
//!   and precise, line-numbered errors
//! - **Per-vertex normals**: area-weighted averaging of face normals,
//!   independent of face order in the file
//! - **Wireframe edges**: undirected, duplicate-free edge extraction
//! - **Background loading**: a one-shot loader with a non-blocking
//!   loaded-gate for render loops
//! - **Render context**: explicit matrix stack, camera and Phong parameters
//!   instead of global state
//!
//! ## Quick Start
//!
//! ```
//! use trimesh::prelude::*;
//!
//! let mesh = trimesh::io::obj::parse(
//!     "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
//! ).unwrap();
//!
//! assert!(mesh.is_loaded());
//! println!("Vertices: {}", mesh.num_vertices());
//! println!("Faces: {}", mesh.num_faces());
//! println!("Wireframe edges: {}", mesh.num_edges());
//! ```
//!
//! ## Feeding a Render Loop
//!
//! ```no_run
//! use trimesh::prelude::*;
//!
//! let mut loader = MeshLoader::spawn("teapot.obj");
//!
//! loop {
//!     loader.poll();
//!     if let Some(mesh) = loader.mesh() {
//!         // upload mesh.position_buffer() / mesh.normal_buffer() once,
//!         // then draw with mesh.triangle_indices() and mesh.edge_indices()
//!     }
//!     // an unloaded mesh is skipped; only the environment is drawn
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod loader;
pub mod mesh;
pub mod render;

/// Prelude module for convenient imports.
///
/// ```
/// use trimesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::loader::MeshLoader;
    pub use crate::mesh::{extract_edges, vertex_normals, TriMesh};
    pub use crate::render::RenderContext;
}

// Re-export nalgebra types for convenience
pub use nalgebra;
