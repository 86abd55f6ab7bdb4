use crate::error::Result;
use crate::math::{tetrahedron, Point3};
use crate::topology::{SolidId, TopologyStore};

use super::fan_triangles;

/// Computes the enclosed volume of a solid.
///
/// Each nesting level fans its faces into tetrahedra anchored at that
/// level's vertex centroid; levels combine by inclusion-exclusion, so a
/// cavity's volume (minus its own cavities' volumes, recursively) is
/// removed from its parent.
pub struct Volume {
    solid: SolidId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the enclosed volume.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced entity is missing from the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        solid_volume(store, self.solid)
    }
}

fn solid_volume(store: &TopologyStore, id: SolidId) -> Result<f64> {
    let solid = store.solid(id)?;
    let centroid = vertex_centroid(store, id)?;

    let mut volume = 0.0;
    for &fid in &solid.faces {
        let polygon = store.face_polygon(fid)?;
        for (a, b, c) in fan_triangles(&polygon) {
            volume += tetrahedron::volume(&centroid, &a, &b, &c);
        }
    }

    for &cavity in &solid.cavities {
        volume -= solid_volume(store, cavity)?;
    }
    Ok(volume)
}

/// Arithmetic mean of a solid's vertex positions, the anchor for its
/// tetrahedral decomposition.
fn vertex_centroid(store: &TopologyStore, id: SolidId) -> Result<Point3> {
    let solid = store.solid(id)?;
    if solid.vertices.is_empty() {
        return Ok(Point3::origin());
    }

    let mut sum = Point3::origin();
    for &vid in &solid.vertices {
        let point = store.vertex(vid)?.point;
        sum.x += point.x;
        sum.y += point.y;
        sum.z += point.z;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = solid.vertices.len() as f64;
    Ok(Point3::new(sum.x / n, sum.y / n, sum.z / n))
}
