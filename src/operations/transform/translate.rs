use crate::error::Result;
use crate::math::Vector3;
use crate::topology::{SolidId, TopologyStore};

use super::{map_vertices, refresh_edge_lengths};

/// Translates a solid by a fixed offset.
///
/// Operates on a deep copy: the input solid is left untouched and the
/// translated copy is returned with its edge lengths refreshed.
pub struct Translate {
    solid: SolidId,
    offset: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, offset: Vector3) -> Self {
        Self { solid, offset }
    }

    /// Executes the translation, returning the translated copy.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced entity is missing from the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let offset = self.offset;
        let copy = store.deep_copy_solid(self.solid)?;
        map_vertices(store, copy, &|point| point + offset)?;
        refresh_edge_lengths(store, copy)?;
        Ok(copy)
    }
}
