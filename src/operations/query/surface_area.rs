use crate::error::Result;
use crate::topology::{SolidId, TopologyStore};

use super::fan_triangles;

/// Computes the surface area of a solid's own boundary.
///
/// Sums fan-triangle areas over the solid's faces. Cavity walls are
/// neither added nor subtracted: a cavity is its own solid, and its wall
/// area is obtained by querying it directly.
pub struct SurfaceArea {
    solid: SolidId,
}

impl SurfaceArea {
    /// Creates a new `SurfaceArea` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the total boundary area.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced entity is missing from the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let solid = store.solid(self.solid)?;

        let mut total_area = 0.0;
        for &fid in &solid.faces {
            let polygon = store.face_polygon(fid)?;
            for (a, b, c) in fan_triangles(&polygon) {
                total_area += (b - a).cross(&(c - a)).norm() / 2.0;
            }
        }
        Ok(total_area)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_area() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();

        let area = SurfaceArea::new(solid).execute(&store).unwrap();
        // 2*(2*3 + 2*4 + 3*4) = 52
        assert_relative_eq!(area, 52.0, epsilon = 1e-9);
    }

    #[test]
    fn cavity_walls_do_not_change_outer_area() {
        let mut store = TopologyStore::new();
        let outer = MakeBox::new(p(0.0, 0.0, 0.0), p(4.0, 4.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let cavity = MakeBox::new(p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0))
            .execute(&mut store)
            .unwrap();
        store.solid_mut(outer).unwrap().cavities.push(cavity);

        let area = SurfaceArea::new(outer).execute(&store).unwrap();
        assert_relative_eq!(area, 96.0, epsilon = 1e-9);

        // The cavity's wall area is a separate query on the cavity itself.
        let wall = SurfaceArea::new(cavity).execute(&store).unwrap();
        assert_relative_eq!(wall, 6.0, epsilon = 1e-9);
    }
}
