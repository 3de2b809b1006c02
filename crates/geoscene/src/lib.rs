#![warn(missing_docs)]

//! A scene graph over the geoscene geometry registry.
//!
//! [`SceneGraph`] owns the *model* description of a scene: sources that
//! produce geometry, the frames they move, and the geometries affixed to
//! those frames. [`SceneGraph::allocate_context`] snapshots the model into
//! an independently owned [`GeometryContext`]; sources then feed frame
//! poses into the context through their pose ports, and queries run
//! against the context through a [`SceneGraphInspector`].
//!
//! The whole stack is generic over the simulation scalar, so a graph
//! built with `f64` can be transmogrified into one carrying
//! [`Dual`](geoscene_math::Dual) numbers without rebuilding the scene.

mod bundle;
mod context;
mod inspector;
mod port;
mod scene_graph;

pub use bundle::{PoseBundle, PoseBundleEntry};
pub use context::GeometryContext;
pub use inspector::SceneGraphInspector;
pub use port::PosePort;
pub use scene_graph::SceneGraph;

pub use geoscene_ids::{FrameId, GeometryId, SourceId};
pub use geoscene_math::{Dual, RigidTransform, SimScalar, SpatialVelocity};
pub use geoscene_state::{
    FramePoseVector, GeometryError, GeometryFrame, GeometryInstance, GeometrySet, PropertySet,
    PropertyValue, Role, RoleProperties, Shape,
};
