use crate::error::{OperationError, Result};
use crate::math::{Matrix3, Vector3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::{map_vertices, refresh_edge_lengths};

/// Rotates a solid about the axis through the origin along a plane normal.
///
/// Operates on a deep copy: the input solid is left untouched and the
/// rotated copy is returned with its edge lengths refreshed.
pub struct Rotate {
    solid: SolidId,
    normal: Vector3,
    angle_deg: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `normal` - Axis direction; need not be unit length.
    /// * `angle_deg` - Rotation angle in degrees.
    #[must_use]
    pub fn new(solid: SolidId, normal: Vector3, angle_deg: f64) -> Self {
        Self {
            solid,
            normal,
            angle_deg,
        }
    }

    /// Executes the rotation, returning the rotated copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length; nothing is copied
    /// in that case.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let len = self.normal.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation normal must be non-zero".into()).into(),
            );
        }
        let axis = self.normal / len;
        let matrix = rotation_matrix(&axis, self.angle_deg.to_radians());

        let copy = store.deep_copy_solid(self.solid)?;
        map_vertices(store, copy, &|point| matrix * point)?;
        refresh_edge_lengths(store, copy)?;
        Ok(copy)
    }
}

/// Builds a 3x3 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names)]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix3 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::{SurfaceArea, Volume};
    use crate::operations::validate::Validate;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn quarter_turn_around_z_moves_corners() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let rotated = Rotate::new(solid, Vector3::new(0.0, 0.0, 1.0), 90.0)
            .execute(&mut store)
            .unwrap();

        // (1, 0, 0) -> (0, 1, 0): vertex 1 of the box construction order.
        let vid = store.solid(rotated).unwrap().vertices[1];
        let point = store.vertex(vid).unwrap().point;
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(point.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_metrics() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();

        let rotated = Rotate::new(solid, Vector3::new(1.0, 2.0, 3.0), 37.0)
            .execute(&mut store)
            .unwrap();

        let volume = Volume::new(rotated).execute(&store).unwrap();
        assert_relative_eq!(volume, 24.0, epsilon = 1e-9);
        let area = SurfaceArea::new(rotated).execute(&store).unwrap();
        assert_relative_eq!(area, 52.0, epsilon = 1e-9);

        // Every edge length survives, and the caches agree with it.
        let report = Validate::new(rotated).execute(&store).unwrap();
        assert!(report.is_valid(), "unexpected issue: {:?}", report.issue());
        let original = store.solid(solid).unwrap().faces.clone();
        let copy = store.solid(rotated).unwrap().faces.clone();
        for (&fa, &fb) in original.iter().zip(&copy) {
            let ea = store.face(fa).unwrap().edges.clone();
            let eb = store.face(fb).unwrap().edges.clone();
            for (&a, &b) in ea.iter().zip(&eb) {
                assert_relative_eq!(
                    store.edge(a).unwrap().length,
                    store.edge(b).unwrap().length,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn zero_normal_is_rejected_and_original_is_untouched() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let result = Rotate::new(solid, Vector3::zeros(), 45.0).execute(&mut store);
        assert!(result.is_err());

        let vid = store.solid(solid).unwrap().vertices[6];
        assert_eq!(store.vertex(vid).unwrap().point, p(1.0, 1.0, 1.0));
        assert!(Validate::new(solid).execute(&store).unwrap().is_valid());
    }

    #[test]
    fn original_solid_is_never_mutated() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        Rotate::new(solid, Vector3::new(0.0, 1.0, 0.0), 90.0)
            .execute(&mut store)
            .unwrap();

        let vid = store.solid(solid).unwrap().vertices[6];
        assert_eq!(store.vertex(vid).unwrap().point, p(1.0, 1.0, 1.0));
    }
}
