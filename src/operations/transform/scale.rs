use crate::error::Result;
use crate::math::Point3;
use crate::topology::{SolidId, TopologyStore};

use super::{map_vertices, refresh_edge_lengths};

/// Scales a solid's coordinates component-wise about the origin.
///
/// Operates on a deep copy: the input solid is left untouched and the
/// scaled copy is returned with its edge lengths refreshed.
pub struct Scale {
    solid: SolidId,
    sx: f64,
    sy: f64,
    sz: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(solid: SolidId, sx: f64, sy: f64, sz: f64) -> Self {
        Self { solid, sx, sy, sz }
    }

    /// Executes the scaling, returning the scaled copy.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced entity is missing from the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let (sx, sy, sz) = (self.sx, self.sy, self.sz);
        let copy = store.deep_copy_solid(self.solid)?;
        map_vertices(store, copy, &|point| {
            Point3::new(point.x * sx, point.y * sy, point.z * sz)
        })?;
        refresh_edge_lengths(store, copy)?;
        Ok(copy)
    }
}
