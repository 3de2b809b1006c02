#![warn(missing_docs)]

//! Math types for the geoscene registry.
//!
//! Thin wrappers around nalgebra providing the numeric machinery the
//! registry is generic over: the [`SimScalar`] trait, a forward-mode
//! [`Dual`] number, rigid transforms, and spatial velocities.
//!
//! The registry's structural data (ids, names, hierarchy) is entirely
//! scalar-type-independent; only the types in this crate carry the scalar
//! parameter.

use nalgebra::Scalar;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

mod dual;
mod transform;

pub use dual::Dual;
pub use transform::{RigidTransform, SpatialVelocity};

/// A 3-vector over the simulation scalar.
pub type Vec3<T> = nalgebra::Vector3<T>;

/// A 3x3 matrix over the simulation scalar.
pub type Mat3<T> = nalgebra::Matrix3<T>;

/// The numeric scalar the pose storage is generic over.
///
/// Requires ring arithmetic, comparison, and conversion to/from `f64` (the
/// "derivative-to-value" extraction used when copying state across scalar
/// representations). Implemented for `f64` and [`Dual`].
pub trait SimScalar:
    Scalar
    + Copy
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
{
    /// Lift a plain double into this scalar type.
    fn from_f64(value: f64) -> Self;

    /// Extract the value part, discarding any derivative information.
    fn value(&self) -> f64;
}

impl SimScalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn value(&self) -> f64 {
        *self
    }
}
