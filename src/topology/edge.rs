use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and caches the Euclidean distance between
/// them. The cache is derived data: whatever operation moves a vertex is
/// responsible for refreshing `length` before the solid is validated or
/// queried again.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// Cached Euclidean distance between the endpoint positions.
    pub length: f64,
}

impl EdgeData {
    /// Creates a new edge with a precomputed length.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId, length: f64) -> Self {
        Self { start, end, length }
    }
}
