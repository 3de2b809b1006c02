//! The registration-time description of a frame.

use geoscene_math::RigidTransform;

/// What a source supplies when it registers a frame.
///
/// The pose is the frame's pose in its parent and is fixed at
/// registration; at runtime the source overrides it through its pose
/// input.
#[derive(Debug, Clone)]
pub struct GeometryFrame {
    /// The frame's name. Names need not be unique, even within a source.
    pub name: String,
    /// The frame's pose in its parent frame.
    pub pose: RigidTransform<f64>,
    /// An arbitrary grouping tag reported through pose bundles.
    pub frame_group: i32,
}

impl GeometryFrame {
    /// A frame with the given name and pose, in frame group 0.
    pub fn new(name: &str, pose: RigidTransform<f64>) -> Self {
        Self {
            name: name.to_string(),
            pose,
            frame_group: 0,
        }
    }

    /// Override the frame group.
    pub fn with_frame_group(mut self, frame_group: i32) -> Self {
        self.frame_group = frame_group;
        self
    }
}
