use crate::error::{OperationError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::{map_vertices, refresh_edge_lengths};

/// Mirrors a solid across the plane `normal . p = d`.
///
/// Operates on a deep copy: the input solid is left untouched and the
/// mirrored copy is returned with its edge lengths refreshed.
pub struct Reflect {
    solid: SolidId,
    normal: Vector3,
    d: f64,
}

impl Reflect {
    /// Creates a new `Reflect` operation.
    ///
    /// * `normal` - Plane normal `(a, b, c)` of `ax + by + cz = d`; need
    ///   not be unit length.
    #[must_use]
    pub fn new(solid: SolidId, normal: Vector3, d: f64) -> Self {
        Self { solid, normal, d }
    }

    /// Executes the reflection, returning the mirrored copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length; nothing is copied
    /// in that case.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let len = self.normal.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("reflection normal must be non-zero".into()).into(),
            );
        }
        let normal = self.normal;
        let unit = normal / len;
        let d = self.d;

        let copy = store.deep_copy_solid(self.solid)?;
        map_vertices(store, copy, &|point| {
            let dist = (normal.dot(&point.coords) - d) / len;
            point - unit * (2.0 * dist)
        })?;
        refresh_edge_lengths(store, copy)?;
        Ok(copy)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::validate::Validate;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn reflection_across_a_coordinate_plane_negates_x() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(1.0, 0.0, 0.0), p(2.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        // Plane x = 0.
        let mirrored = Reflect::new(solid, Vector3::new(1.0, 0.0, 0.0), 0.0)
            .execute(&mut store)
            .unwrap();

        let vid = store.solid(mirrored).unwrap().vertices[0];
        let point = store.vertex(vid).unwrap().point;
        assert_relative_eq!(point.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-12);

        let report = Validate::new(mirrored).execute(&store).unwrap();
        assert!(report.is_valid(), "unexpected issue: {:?}", report.issue());
    }

    #[test]
    fn double_reflection_restores_coordinates() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let normal = Vector3::new(1.0, 1.0, 1.0);
        let once = Reflect::new(solid, normal, 2.0).execute(&mut store).unwrap();
        let twice = Reflect::new(once, normal, 2.0).execute(&mut store).unwrap();

        let original = store.solid(solid).unwrap().vertices.clone();
        let returned = store.solid(twice).unwrap().vertices.clone();
        for (&a, &b) in original.iter().zip(&returned) {
            let pa = store.vertex(a).unwrap().point;
            let pb = store.vertex(b).unwrap().point;
            assert_relative_eq!(pa.x, pb.x, epsilon = 1e-12);
            assert_relative_eq!(pa.y, pb.y, epsilon = 1e-12);
            assert_relative_eq!(pa.z, pb.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_normal_is_rejected() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let result = Reflect::new(solid, Vector3::zeros(), 1.0).execute(&mut store);
        assert!(result.is_err());

        let vid = store.solid(solid).unwrap().vertices[0];
        assert_eq!(store.vertex(vid).unwrap().point, p(0.0, 0.0, 0.0));
    }
}
