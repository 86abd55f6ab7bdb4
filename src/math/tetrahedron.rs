use super::{InertiaTensor, Point3};

/// Unsigned volume of the tetrahedron spanned by `a`, `b`, `c` and `apex`.
///
/// One sixth of the absolute scalar triple product of the three edge
/// vectors taken relative to the apex.
#[must_use]
pub fn volume(apex: &Point3, a: &Point3, b: &Point3, c: &Point3) -> f64 {
    let u = a - apex;
    let v = b - apex;
    let w = c - apex;
    u.dot(&v.cross(&w)).abs() / 6.0
}

/// Centroid of the tetrahedron spanned by `a`, `b`, `c` and `apex`:
/// the arithmetic mean of all four corners.
#[must_use]
pub fn centroid(apex: &Point3, a: &Point3, b: &Point3, c: &Point3) -> Point3 {
    Point3::new(
        (apex.x + a.x + b.x + c.x) / 4.0,
        (apex.y + a.y + b.y + c.y) / 4.0,
        (apex.z + a.z + b.z + c.z) / 4.0,
    )
}

/// Inertia tensor contribution of the tetrahedron spanned by `a`, `b`, `c`
/// and `origin`, about `origin`, for a uniform `density`.
///
/// Uses the point-mass formula: the tetrahedron's mass is spread over its
/// three base corners, each expressed relative to the origin.
#[must_use]
pub fn inertia(origin: &Point3, a: &Point3, b: &Point3, c: &Point3, density: f64) -> InertiaTensor {
    let mass = density * volume(origin, a, b, c);

    let r1 = a - origin;
    let r2 = b - origin;
    let r3 = c - origin;

    let sq = |v: f64| v * v;
    InertiaTensor {
        ixx: mass * (sq(r1.y) + sq(r1.z) + sq(r2.y) + sq(r2.z) + sq(r3.y) + sq(r3.z)) / 10.0,
        iyy: mass * (sq(r1.x) + sq(r1.z) + sq(r2.x) + sq(r2.z) + sq(r3.x) + sq(r3.z)) / 10.0,
        izz: mass * (sq(r1.x) + sq(r1.y) + sq(r2.x) + sq(r2.y) + sq(r3.x) + sq(r3.y)) / 10.0,
        ixy: -mass * (r1.x * r1.y + r2.x * r2.y + r3.x * r3.y) / 10.0,
        ixz: -mass * (r1.x * r1.z + r2.x * r2.z + r3.x * r3.z) / 10.0,
        iyz: -mass * (r1.y * r1.z + r2.y * r2.z + r3.y * r3.z) / 10.0,
    }
}
