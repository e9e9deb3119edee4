//! One-shot background mesh loading.
//!
//! An interactive viewer wants to open its window immediately and start
//! drawing the environment while the mesh file is still being fetched and
//! parsed. [`MeshLoader`] runs the fetch-and-parse on a background thread and
//! exposes a non-blocking gate the render loop checks once per frame:
//!
//! ```no_run
//! use trimesh::loader::MeshLoader;
//!
//! let mut loader = MeshLoader::spawn("teapot.obj");
//!
//! // Per frame:
//! loader.poll();
//! if let Some(mesh) = loader.mesh() {
//!     // draw mesh.triangle_indices() / mesh.edge_indices()
//! } else if let Some(reason) = loader.error() {
//!     eprintln!("mesh failed to load: {}", reason);
//! }
//! // otherwise the load is still pending; draw only the environment
//! ```
//!
//! A load is issued exactly once and runs to completion or failure; there is
//! no cancellation and no retry. On failure the loader stays permanently
//! unloaded and keeps the geometry out of the render loop. The mesh has a
//! single writer (the loader thread, once) and after the handoff is read
//! through plain shared references, so no locking is involved on the render
//! path.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::error::Result;
use crate::mesh::TriMesh;

/// Outcome sent from the loader thread.
type LoadResult = std::result::Result<TriMesh, String>;

/// Handle to a one-shot background mesh load.
pub struct MeshLoader {
    rx: Option<Receiver<LoadResult>>,
    mesh: Option<TriMesh>,
    error: Option<String>,
}

impl MeshLoader {
    /// Start loading the given file on a background thread.
    ///
    /// Returns immediately; use [`poll`](MeshLoader::poll) and
    /// [`mesh`](MeshLoader::mesh) to observe completion.
    pub fn spawn<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = crate::io::load(&path).map_err(|e| e.to_string());
            // The handle may already be dropped; nothing to do then
            let _ = tx.send(result);
        });

        Self {
            rx: Some(rx),
            mesh: None,
            error: None,
        }
    }

    /// Check for a finished load without blocking.
    ///
    /// Call once per frame before reading [`mesh`](MeshLoader::mesh). Does
    /// nothing once a result has been received.
    pub fn poll(&mut self) {
        let Some(rx) = &self.rx else { return };

        match rx.try_recv() {
            Ok(Ok(mesh)) => {
                self.mesh = Some(mesh);
                self.rx = None;
            }
            Ok(Err(reason)) => {
                self.error = Some(reason);
                self.rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.error = Some("loader thread exited without a result".to_string());
                self.rx = None;
            }
        }
    }

    /// Whether a mesh has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.mesh.is_some()
    }

    /// Whether the background load is still in flight.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// The loaded mesh, or `None` while pending or after a failure.
    pub fn mesh(&self) -> Option<&TriMesh> {
        self.mesh.as_ref()
    }

    /// The failure reason, if the load failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Block until the load finishes and take the result.
    ///
    /// Mainly useful in tests and batch tools; a render loop should poll.
    pub fn wait(mut self) -> LoadResult {
        if let Some(rx) = self.rx.take() {
            match rx.recv() {
                Ok(result) => return result,
                Err(_) => return Err("loader thread exited without a result".to_string()),
            }
        }
        match (self.mesh, self.error) {
            (Some(mesh), _) => Ok(mesh),
            (None, Some(reason)) => Err(reason),
            (None, None) => Err("load was never started".to_string()),
        }
    }
}

/// Load a mesh synchronously.
///
/// Convenience wrapper over [`crate::io::load`] for callers that have no
/// frame loop to keep responsive.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    crate::io::load(path)
}
