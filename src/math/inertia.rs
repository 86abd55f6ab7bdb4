use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Symmetric moment-of-inertia tensor about a chosen origin.
///
/// Contributions combine additively; a cavity's tensor is removed by
/// subtraction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InertiaTensor {
    /// Moment of inertia about the x axis.
    pub ixx: f64,
    /// Moment of inertia about the y axis.
    pub iyy: f64,
    /// Moment of inertia about the z axis.
    pub izz: f64,
    /// Product of inertia in the xy plane.
    pub ixy: f64,
    /// Product of inertia in the xz plane.
    pub ixz: f64,
    /// Product of inertia in the yz plane.
    pub iyz: f64,
}

impl InertiaTensor {
    /// Creates a zero tensor.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the tensor with every component multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            ixx: self.ixx * factor,
            iyy: self.iyy * factor,
            izz: self.izz * factor,
            ixy: self.ixy * factor,
            ixz: self.ixz * factor,
            iyz: self.iyz * factor,
        }
    }
}

impl AddAssign for InertiaTensor {
    fn add_assign(&mut self, other: Self) {
        self.ixx += other.ixx;
        self.iyy += other.iyy;
        self.izz += other.izz;
        self.ixy += other.ixy;
        self.ixz += other.ixz;
        self.iyz += other.iyz;
    }
}

impl SubAssign for InertiaTensor {
    fn sub_assign(&mut self, other: Self) {
        self.ixx -= other.ixx;
        self.iyy -= other.iyy;
        self.izz -= other.izz;
        self.ixy -= other.ixy;
        self.ixz -= other.ixz;
        self.iyz -= other.iyz;
    }
}

impl Add for InertiaTensor {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sub for InertiaTensor {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}
