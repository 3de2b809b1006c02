//! Rigid transforms and spatial velocities over a generic scalar.

use crate::{Mat3, SimScalar, Vec3};

/// A rigid transform: rotation followed by translation.
///
/// Stored as a rotation matrix plus a translation vector so that
/// composition and inversion stay within plain ring arithmetic and work
/// for any [`SimScalar`].
#[derive(Debug, Clone, PartialEq)]
pub struct RigidTransform<T: SimScalar> {
    /// The rotation part.
    pub rotation: Mat3<T>,
    /// The translation part.
    pub translation: Vec3<T>,
}

impl<T: SimScalar> RigidTransform<T> {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: Mat3::identity(),
            translation: Vec3::zeros(),
        }
    }

    /// A transform from explicit rotation and translation parts.
    pub fn from_parts(rotation: Mat3<T>, translation: Vec3<T>) -> Self {
        Self { rotation, translation }
    }

    /// A pure translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            rotation: Mat3::identity(),
            translation: Vec3::new(T::from_f64(dx), T::from_f64(dy), T::from_f64(dz)),
        }
    }

    /// Rotation about the X axis by `angle` radians.
    ///
    /// The trigonometry is evaluated in `f64` and lifted; registration-time
    /// poses are structural data, not differentiated quantities.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let (s, c) = (T::from_f64(s), T::from_f64(c));
        let (o, z) = (T::one(), T::zero());
        Self {
            rotation: Mat3::new(o, z, z, z, c, -s, z, s, c),
            translation: Vec3::zeros(),
        }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let (s, c) = (T::from_f64(s), T::from_f64(c));
        let (o, z) = (T::one(), T::zero());
        Self {
            rotation: Mat3::new(c, z, s, z, o, z, -s, z, c),
            translation: Vec3::zeros(),
        }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let (s, c) = (T::from_f64(s), T::from_f64(c));
        let (o, z) = (T::one(), T::zero());
        Self {
            rotation: Mat3::new(c, -s, z, s, c, z, z, z, o),
            translation: Vec3::zeros(),
        }
    }

    /// Compose: `self * other`, i.e. `other` expressed in `self`'s frame.
    ///
    /// With `X_WF = X_WP.then(&X_PF)`, world poses chain down a frame tree.
    pub fn then(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// The inverse transform. Rigid, so the inverse rotation is the
    /// transpose.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        let translation = -(rotation * self.translation);
        Self { rotation, translation }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Vec3<T>) -> Vec3<T> {
        self.rotation * p + self.translation
    }

    /// Convert to another scalar representation through the value part.
    ///
    /// Structural content is preserved exactly; derivative information (if
    /// any) is discarded.
    pub fn cast<U: SimScalar>(&self) -> RigidTransform<U> {
        RigidTransform {
            rotation: self.rotation.map(|e| U::from_f64(e.value())),
            translation: self.translation.map(|e| U::from_f64(e.value())),
        }
    }
}

impl<T: SimScalar> Default for RigidTransform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Angular and linear velocity of a frame, expressed in the world frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialVelocity<T: SimScalar> {
    /// Angular velocity (rad/s about each world axis).
    pub angular: Vec3<T>,
    /// Linear velocity.
    pub linear: Vec3<T>,
}

impl<T: SimScalar> SpatialVelocity<T> {
    /// The zero velocity.
    pub fn zero() -> Self {
        Self {
            angular: Vec3::zeros(),
            linear: Vec3::zeros(),
        }
    }
}

impl<T: SimScalar> Default for SpatialVelocity<T> {
    fn default() -> Self {
        Self::zero()
    }
}
