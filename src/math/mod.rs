pub mod inertia;
pub mod tetrahedron;

pub use inertia::InertiaTensor;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Geometric tolerance for validation comparisons (edge lengths,
/// collinearity, planarity, manifold edge keys).
pub const TOLERANCE: f64 = 1e-6;

/// Threshold below which a computed coordinate is snapped to exactly zero.
pub const ZERO_SNAP: f64 = 1e-9;

/// Quantizes a coordinate onto a `TOLERANCE`-sized grid.
///
/// Used to build hashable edge keys from vertex positions without relying
/// on exact floating-point equality.
#[must_use]
pub fn quantize(value: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let cell = (value / TOLERANCE).round() as i64;
    cell
}

/// Orders two points lexicographically on (x, y, z) after quantization,
/// returning their keys with the smaller one first.
#[must_use]
pub fn canonical_pair(a: &Point3, b: &Point3) -> ([i64; 3], [i64; 3]) {
    let ka = [quantize(a.x), quantize(a.y), quantize(a.z)];
    let kb = [quantize(b.x), quantize(b.y), quantize(b.z)];
    if ka <= kb {
        (ka, kb)
    } else {
        (kb, ka)
    }
}
