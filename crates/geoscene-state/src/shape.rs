//! Geometry shape descriptions.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// The shape carried by a registered geometry.
///
/// Shapes are pure descriptions; the registry stores them verbatim and
/// never evaluates them numerically, so they stay scalar-type-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// A sphere of the given radius, centered on its geometry frame.
    Sphere {
        /// Radius in meters.
        radius: f64,
    },
    /// A cylinder along the z axis of its geometry frame.
    Cylinder {
        /// Radius in meters.
        radius: f64,
        /// Full length in meters.
        length: f64,
    },
    /// A half space whose boundary is the x-y plane of its geometry frame,
    /// filling the negative-z side.
    HalfSpace,
    /// An axis-aligned box centered on its geometry frame.
    Box {
        /// Extent along x in meters.
        width: f64,
        /// Extent along y in meters.
        depth: f64,
        /// Extent along z in meters.
        height: f64,
    },
    /// A triangle surface mesh loaded from a file.
    Mesh {
        /// Path to the mesh file.
        filename: String,
        /// Uniform scale applied to the mesh.
        scale: f64,
    },
    /// A convex mesh loaded from a file.
    Convex {
        /// Path to the mesh file.
        filename: String,
        /// Uniform scale applied to the mesh.
        scale: f64,
    },
}

impl Shape {
    /// Check the shape's parameters for structural validity.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let bad = |what: &str| Err(GeometryError::InvalidParameter(what.to_string()));
        match self {
            Shape::Sphere { radius } => {
                if *radius <= 0.0 {
                    return bad("sphere radius must be positive");
                }
            }
            Shape::Cylinder { radius, length } => {
                if *radius <= 0.0 {
                    return bad("cylinder radius must be positive");
                }
                if *length <= 0.0 {
                    return bad("cylinder length must be positive");
                }
            }
            Shape::HalfSpace => {}
            Shape::Box {
                width,
                depth,
                height,
            } => {
                if *width <= 0.0 || *depth <= 0.0 || *height <= 0.0 {
                    return bad("box extents must be positive");
                }
            }
            Shape::Mesh { filename, scale } | Shape::Convex { filename, scale } => {
                if filename.is_empty() {
                    return bad("mesh filename must be non-empty");
                }
                if *scale <= 0.0 {
                    return bad("mesh scale must be positive");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_good_shapes() {
        assert!(Shape::Sphere { radius: 0.5 }.validate().is_ok());
        assert!(Shape::HalfSpace.validate().is_ok());
        assert!(Shape::Box {
            width: 1.0,
            depth: 2.0,
            height: 3.0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(Shape::Sphere { radius: 0.0 }.validate().is_err());
        assert!(Shape::Cylinder {
            radius: 1.0,
            length: -2.0
        }
        .validate()
        .is_err());
        assert!(Shape::Mesh {
            filename: String::new(),
            scale: 1.0
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_serde_tagged_round_trip() {
        let shape = Shape::Cylinder {
            radius: 0.1,
            length: 2.0,
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("\"type\":\"Cylinder\""), "{json}");
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }
}
