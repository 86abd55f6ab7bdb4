mod center_of_mass;
mod inertia;
mod surface_area;
mod volume;

pub use center_of_mass::CenterOfMass;
pub use inertia::MomentOfInertia;
pub use surface_area::SurfaceArea;
pub use volume::Volume;

use crate::math::Point3;

/// Fan-triangulates a polygon from its first vertex: triangle `j` is
/// `(p[0], p[j], p[j+1])` for `j in 1..n-1`.
///
/// This is the single triangulation policy shared by every property
/// computation. Polygons with fewer than three vertices yield nothing.
pub(crate) fn fan_triangles(polygon: &[Point3]) -> impl Iterator<Item = (Point3, Point3, Point3)> + '_ {
    (1..polygon.len().saturating_sub(1)).map(|j| (polygon[0], polygon[j], polygon[j + 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn quad_fans_into_two_triangles() {
        let polygon = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        let triangles: Vec<_> = fan_triangles(&polygon).collect();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].0, polygon[0]);
        assert_eq!(triangles[1].2, polygon[3]);
    }

    #[test]
    fn degenerate_polygons_fan_into_nothing() {
        assert_eq!(fan_triangles(&[]).count(), 0);
        let two = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)];
        assert_eq!(fan_triangles(&two).count(), 0);
    }
}
