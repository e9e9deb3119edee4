//! Error types for trimesh.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh loading and construction.
///
/// All parse errors are fatal: they abort the parse and no partial mesh is
/// ever returned. A degenerate vertex normal (an isolated vertex, for example)
/// is deliberately *not* an error; it is replaced by the zero vector.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A `v` line did not contain three numeric coordinates.
    #[error("line {line}: vertex requires three numeric coordinates")]
    MalformedVertex {
        /// The 1-based line number in the input.
        line: usize,
    },

    /// An `f` line could not be parsed (non-numeric index token or fewer
    /// than three corners).
    #[error("line {line}: malformed face")]
    MalformedFace {
        /// The 1-based line number in the input.
        line: usize,
    },

    /// An `f` line referenced a vertex index outside the range of vertices
    /// parsed so far. OBJ indices are 1-based, so 0 is also out of range.
    #[error("line {line}: face index {index} out of range (have {vertices} vertices)")]
    FaceIndexOutOfRange {
        /// The 1-based line number in the input.
        line: usize,
        /// The offending 1-based index.
        index: usize,
        /// The number of vertices parsed when the face was encountered.
        vertices: usize,
    },

    /// A face passed to [`TriMesh::build`](crate::mesh::TriMesh::build)
    /// references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face with more than three corners was encountered while n-gon
    /// triangulation was disabled.
    #[error("line {line}: face has {sides} corners but triangulation is disabled")]
    UnsupportedPolygon {
        /// The 1-based line number in the input.
        line: usize,
        /// The number of corners on the face.
        sides: usize,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
