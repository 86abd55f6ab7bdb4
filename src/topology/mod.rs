pub mod edge;
pub mod face;
pub mod solid;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Solid operations ---

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    /// Returns a mutable reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid_mut(&mut self, id: SolidId) -> Result<&mut SolidData, TopologyError> {
        self.solids
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    // --- Derived accessors ---

    /// Returns the polygon of a face: each edge's `start` position in loop
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or any referenced entity is missing.
    pub fn face_polygon(&self, id: FaceId) -> Result<Vec<Point3>, TopologyError> {
        let face = self.face(id)?;
        let mut polygon = Vec::with_capacity(face.edges.len());
        for &eid in &face.edges {
            let edge = self.edge(eid)?;
            polygon.push(self.vertex(edge.start)?.point);
        }
        Ok(polygon)
    }

    /// Recursively duplicates a solid, its cavities, and every face, edge
    /// and vertex they reference, returning the ID of the copy.
    ///
    /// The copy shares nothing with the original: transform operations
    /// mutate the copy while the validated original stays available.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing.
    pub fn deep_copy_solid(&mut self, id: SolidId) -> Result<SolidId, TopologyError> {
        let source = self.solid(id)?.clone();

        let mut vertex_map: HashMap<VertexId, VertexId> = HashMap::new();
        let mut new_vertices = Vec::with_capacity(source.vertices.len());
        for &vid in &source.vertices {
            new_vertices.push(copy_endpoint(self, &mut vertex_map, vid)?);
        }

        let mut edge_map: HashMap<EdgeId, EdgeId> = HashMap::new();
        let mut new_faces = Vec::with_capacity(source.faces.len());
        for &fid in &source.faces {
            let face = self.face(fid)?.clone();
            let mut new_edges = Vec::with_capacity(face.edges.len());
            for &eid in &face.edges {
                if let Some(&copied) = edge_map.get(&eid) {
                    new_edges.push(copied);
                    continue;
                }
                let edge = self.edge(eid)?.clone();
                let start = copy_endpoint(self, &mut vertex_map, edge.start)?;
                let end = copy_endpoint(self, &mut vertex_map, edge.end)?;
                let copied = self.add_edge(EdgeData::new(start, end, edge.length));
                edge_map.insert(eid, copied);
                new_edges.push(copied);
            }
            new_faces.push(self.add_face(FaceData::new(new_edges)));
        }

        let mut copy = SolidData::new(new_faces, new_vertices);
        for &cavity in &source.cavities {
            copy.cavities.push(self.deep_copy_solid(cavity)?);
        }
        Ok(self.add_solid(copy))
    }
}

/// Looks up (or lazily copies) the duplicate of an edge endpoint.
///
/// Endpoints normally come from the solid's vertex list; one that does not
/// is still copied so the duplicate never aliases the original.
fn copy_endpoint(
    store: &mut TopologyStore,
    vertex_map: &mut HashMap<VertexId, VertexId>,
    vid: VertexId,
) -> Result<VertexId, TopologyError> {
    if let Some(&copied) = vertex_map.get(&vid) {
        return Ok(copied);
    }
    let point = store.vertex(vid)?.point;
    let copied = store.add_vertex(VertexData::new(point));
    vertex_map.insert(vid, copied);
    Ok(copied)
}
