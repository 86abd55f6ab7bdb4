use crate::error::Result;
use crate::math::{tetrahedron, InertiaTensor, Point3};
use crate::topology::{SolidId, TopologyStore};

use super::fan_triangles;

/// Computes the moment-of-inertia tensor of a solid about a reference
/// origin, for a uniform density.
///
/// Each nesting level fans its faces into origin-anchored tetrahedra and
/// accumulates their point-mass tensor contributions; cavities subtract
/// theirs recursively.
pub struct MomentOfInertia {
    solid: SolidId,
    origin: Point3,
    density: f64,
}

impl MomentOfInertia {
    /// Creates a new `MomentOfInertia` query.
    #[must_use]
    pub fn new(solid: SolidId, origin: Point3, density: f64) -> Self {
        Self {
            solid,
            origin,
            density,
        }
    }

    /// Executes the query, returning the accumulated tensor.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced entity is missing from the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<InertiaTensor> {
        solid_inertia(store, self.solid, &self.origin, self.density)
    }
}

fn solid_inertia(
    store: &TopologyStore,
    id: SolidId,
    origin: &Point3,
    density: f64,
) -> Result<InertiaTensor> {
    let solid = store.solid(id)?;

    let mut total = InertiaTensor::zero();
    for &fid in &solid.faces {
        let polygon = store.face_polygon(fid)?;
        for (a, b, c) in fan_triangles(&polygon) {
            total += tetrahedron::inertia(origin, &a, &b, &c, density);
        }
    }

    for &cavity in &solid.cavities {
        total -= solid_inertia(store, cavity, origin, density)?;
    }
    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeBox;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn centered_cube(store: &mut TopologyStore, half: f64) -> SolidId {
        MakeBox::new(p(-half, -half, -half), p(half, half, half))
            .execute(store)
            .unwrap()
    }

    #[test]
    fn centered_cube_has_no_products_of_inertia() {
        let mut store = TopologyStore::new();
        let solid = centered_cube(&mut store, 1.0);

        let tensor = MomentOfInertia::new(solid, Point3::origin(), 1.0)
            .execute(&store)
            .unwrap();
        assert_relative_eq!(tensor.ixy, 0.0, epsilon = 1e-9);
        assert_relative_eq!(tensor.ixz, 0.0, epsilon = 1e-9);
        assert_relative_eq!(tensor.iyz, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn centered_cube_moments_are_equal_and_positive() {
        let mut store = TopologyStore::new();
        let solid = centered_cube(&mut store, 1.0);

        let tensor = MomentOfInertia::new(solid, Point3::origin(), 1.0)
            .execute(&store)
            .unwrap();
        assert!(tensor.ixx > 0.0);
        assert_relative_eq!(tensor.ixx, tensor.iyy, epsilon = 1e-9);
        assert_relative_eq!(tensor.iyy, tensor.izz, epsilon = 1e-9);
    }

    #[test]
    fn tensor_scales_linearly_with_density() {
        let mut store = TopologyStore::new();
        let solid = centered_cube(&mut store, 1.0);

        let unit = MomentOfInertia::new(solid, Point3::origin(), 1.0)
            .execute(&store)
            .unwrap();
        let double = MomentOfInertia::new(solid, Point3::origin(), 2.0)
            .execute(&store)
            .unwrap();
        assert_relative_eq!(double.ixx, unit.scaled(2.0).ixx, epsilon = 1e-9);
        assert_relative_eq!(double.izz, unit.scaled(2.0).izz, epsilon = 1e-9);
    }

    #[test]
    fn cavity_contribution_is_the_standalone_difference() {
        let mut store = TopologyStore::new();
        let outer = centered_cube(&mut store, 2.0);
        let cavity = centered_cube(&mut store, 1.0);

        let outer_alone = MomentOfInertia::new(outer, Point3::origin(), 1.0)
            .execute(&store)
            .unwrap();
        let cavity_alone = MomentOfInertia::new(cavity, Point3::origin(), 1.0)
            .execute(&store)
            .unwrap();

        store.solid_mut(outer).unwrap().cavities.push(cavity);
        let hollowed = MomentOfInertia::new(outer, Point3::origin(), 1.0)
            .execute(&store)
            .unwrap();

        let expected = outer_alone - cavity_alone;
        assert_relative_eq!(hollowed.ixx, expected.ixx, epsilon = 1e-9);
        assert_relative_eq!(hollowed.ixy, expected.ixy, epsilon = 1e-9);
        assert!(hollowed.ixx < outer_alone.ixx);
    }
}
