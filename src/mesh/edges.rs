//! Wireframe edge extraction.
//!
//! Derives the undirected edge set of a triangle list. Each triangle
//! contributes three edges; an edge shared by adjacent triangles appears in
//! the output exactly once.

use std::collections::BTreeSet;

/// Extract the deduplicated undirected edge set of a flattened triangle list.
///
/// Each edge is returned as `[min, max]` of its two vertex indices. The
/// output is sorted, so any permutation of the same face set yields the same
/// edge list. An empty triangle list yields an empty result.
///
/// # Example
/// ```
/// use trimesh::mesh::extract_edges;
///
/// // Two triangles sharing the edge (1, 2).
/// let triangles = [0, 1, 2, 2, 1, 3];
/// let edges = extract_edges(&triangles);
/// assert_eq!(edges, vec![[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]]);
/// ```
pub fn extract_edges(triangles: &[u32]) -> Vec<[u32; 2]> {
    let mut set: BTreeSet<(u32, u32)> = BTreeSet::new();

    for tri in triangles.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            // Degenerate corners produce no edge
            if a != b {
                set.insert((a.min(b), a.max(b)));
            }
        }
    }

    set.into_iter().map(|(a, b)| [a, b]).collect()
}
