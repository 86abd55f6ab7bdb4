use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::{EdgeData, FaceData, SolidData, SolidId, TopologyStore, VertexData};

/// Creates a solid from vertex positions and per-face vertex-index loops.
///
/// Each loop `[i0, i1, .., in]` produces the edge cycle
/// `(i0,i1), (i1,i2), .., (in,i0)`, with every edge's length cached from
/// the endpoint positions. Loop sizes are not policed here; degenerate
/// faces are the validator's and the property engine's concern.
///
/// Cavities are attached afterwards by pushing a separately built solid
/// onto the parent's cavity list.
pub struct MakeSolid {
    points: Vec<Point3>,
    loops: Vec<Vec<usize>>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, loops: Vec<Vec<usize>>) -> Self {
        Self { points, loops }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if any loop references a vertex index out of range.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        for (i, vertex_loop) in self.loops.iter().enumerate() {
            if let Some(&bad) = vertex_loop.iter().find(|&&v| v >= self.points.len()) {
                return Err(OperationError::InvalidInput(format!(
                    "face {i} references vertex {bad}, but only {} vertices were given",
                    self.points.len()
                ))
                .into());
            }
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&point| store.add_vertex(VertexData::new(point)))
            .collect();

        let mut faces = Vec::with_capacity(self.loops.len());
        for vertex_loop in &self.loops {
            let n = vertex_loop.len();
            let mut edges = Vec::with_capacity(n);
            for j in 0..n {
                let a = vertex_loop[j];
                let b = vertex_loop[(j + 1) % n];
                let length = nalgebra::distance(&self.points[a], &self.points[b]);
                edges.push(store.add_edge(EdgeData::new(vertices[a], vertices[b], length)));
            }
            faces.push(store.add_face(FaceData::new(edges)));
        }

        Ok(store.add_solid(SolidData::new(faces, vertices)))
    }
}
