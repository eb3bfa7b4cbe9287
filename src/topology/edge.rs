/// Undirected edge between two vertex indices.
///
/// Stored with the smaller index first, so `(a, b)` and `(b, a)` compare and
/// hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// Smaller vertex index.
    pub a: usize,
    /// Larger vertex index.
    pub b: usize,
}

impl EdgeKey {
    /// Creates the key for the edge between `v0` and `v1`.
    #[must_use]
    pub fn new(v0: usize, v1: usize) -> Self {
        Self {
            a: v0.min(v1),
            b: v0.max(v1),
        }
    }
}

/// Iterates the edges of a face loop, including the closing edge.
pub fn face_edges(indices: &[usize]) -> impl Iterator<Item = EdgeKey> + '_ {
    let n = indices.len();
    (0..n).map(move |i| EdgeKey::new(indices[i], indices[(i + 1) % n]))
}
