use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is an ordered loop of edges. Its polygon vertices are each edge's
/// `start` vertex in loop order; each edge's `end` must coincide with the
/// next edge's `start` and serves as the redundancy checked by edge-length
/// validation. Every property computation reads the polygon through this
/// one convention.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The ordered edge loop bounding this face.
    pub edges: Vec<EdgeId>,
}

impl FaceData {
    /// Creates a new face from an ordered edge loop.
    #[must_use]
    pub fn new(edges: Vec<EdgeId>) -> Self {
        Self { edges }
    }
}
