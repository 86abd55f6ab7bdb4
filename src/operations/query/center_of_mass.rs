use crate::error::Result;
use crate::math::{tetrahedron, Point3, Vector3, ZERO_SNAP};
use crate::topology::{SolidId, TopologyStore};

use super::fan_triangles;

/// Computes the center of mass of a solid with uniform density.
///
/// Each nesting level fans its faces into tetrahedra anchored at the
/// reference origin, accumulating a volume and a volume-weighted centroid;
/// cavities subtract theirs recursively. The decomposition assumes the
/// origin lies inside (or on the boundary of) every nesting level, as the
/// tetrahedron volumes are unsigned.
///
/// When the combined volume is non-positive there is no mass to average
/// over and the result is defined as `(0, 0, 0)`.
pub struct CenterOfMass {
    solid: SolidId,
    origin: Point3,
}

impl CenterOfMass {
    /// Creates a new `CenterOfMass` query anchored at `(0, 0, 0)`.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self {
            solid,
            origin: Point3::origin(),
        }
    }

    /// Sets the reference origin anchoring the tetrahedral decomposition.
    #[must_use]
    pub fn with_origin(mut self, origin: Point3) -> Self {
        self.origin = origin;
        self
    }

    /// Executes the query, returning the center of mass.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced entity is missing from the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<Point3> {
        let (volume, weighted) = weighted_center(store, self.solid, &self.origin)?;
        if volume <= 0.0 {
            return Ok(Point3::origin());
        }

        let center = weighted / volume;
        Ok(Point3::new(snap(center.x), snap(center.y), snap(center.z)))
    }
}

/// Returns a level's `(volume, volume-weighted centroid)` with every
/// cavity's pair subtracted recursively.
fn weighted_center(
    store: &TopologyStore,
    id: SolidId,
    origin: &Point3,
) -> Result<(f64, Vector3)> {
    let solid = store.solid(id)?;

    let mut volume = 0.0;
    let mut weighted = Vector3::zeros();
    for &fid in &solid.faces {
        let polygon = store.face_polygon(fid)?;
        for (a, b, c) in fan_triangles(&polygon) {
            let tet_volume = tetrahedron::volume(origin, &a, &b, &c);
            let tet_centroid = tetrahedron::centroid(origin, &a, &b, &c);
            weighted += tet_centroid.coords * tet_volume;
            volume += tet_volume;
        }
    }

    for &cavity in &solid.cavities {
        let (cavity_volume, cavity_weighted) = weighted_center(store, cavity, origin)?;
        volume -= cavity_volume;
        weighted -= cavity_weighted;
    }
    Ok((volume, weighted))
}

fn snap(value: f64) -> f64 {
    if value.abs() < ZERO_SNAP {
        0.0
    } else {
        value
    }
}
