use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Data associated with a topological solid.
///
/// A solid owns the faces bounding it, the de-duplicated vertex set those
/// faces reference, and any nested cavity solids. A well-formed solid is a
/// closed 2-manifold per nesting level; cavities are assumed to lie fully
/// inside the outer boundary (the validator does not check containment).
#[derive(Debug, Clone)]
pub struct SolidData {
    /// The faces bounding this solid.
    pub faces: Vec<FaceId>,
    /// The vertices referenced by this solid's faces.
    pub vertices: Vec<VertexId>,
    /// Nested solids carving cavities out of this one.
    pub cavities: Vec<SolidId>,
}

impl SolidData {
    /// Creates a new solid without cavities.
    #[must_use]
    pub fn new(faces: Vec<FaceId>, vertices: Vec<VertexId>) -> Self {
        Self {
            faces,
            vertices,
            cavities: Vec::new(),
        }
    }
}
