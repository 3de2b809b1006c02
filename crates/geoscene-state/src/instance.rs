//! The registration-time description of a geometry.

use geoscene_math::RigidTransform;

use crate::shape::Shape;

/// What a source supplies when it registers a geometry.
///
/// The pose is relative to the parent frame (or parent geometry, when
/// registered as a child of another geometry) and never changes after
/// registration.
#[derive(Debug, Clone)]
pub struct GeometryInstance {
    /// The geometry's name, unique among geometries on the same frame.
    pub name: String,
    /// The geometry's pose in its parent.
    pub pose: RigidTransform<f64>,
    /// The shape.
    pub shape: Shape,
}

impl GeometryInstance {
    /// A geometry instance with the given name, pose, and shape.
    pub fn new(name: &str, pose: RigidTransform<f64>, shape: Shape) -> Self {
        Self {
            name: name.to_string(),
            pose,
            shape,
        }
    }
}
