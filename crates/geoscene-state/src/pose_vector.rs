//! The pose data a source supplies each update.

use std::collections::BTreeMap;

use geoscene_ids::{FrameId, SourceId};
use geoscene_math::{RigidTransform, SimScalar};

/// The set of frame poses one source reports in a single update.
///
/// Each pose is the frame's pose in its parent frame. An update is valid
/// only when the vector covers exactly the frames the source has
/// registered.
#[derive(Debug, Clone)]
pub struct FramePoseVector<T: SimScalar> {
    source_id: SourceId,
    poses: BTreeMap<FrameId, RigidTransform<T>>,
}

impl<T: SimScalar> FramePoseVector<T> {
    /// An empty pose vector for the given source.
    pub fn new(source_id: SourceId) -> Self {
        Self {
            source_id,
            poses: BTreeMap::new(),
        }
    }

    /// A pose vector covering `ids`, each initialized to identity.
    pub fn from_ids(source_id: SourceId, ids: &[FrameId]) -> Self {
        let mut vector = Self::new(source_id);
        for id in ids {
            vector.set_value(*id, RigidTransform::identity());
        }
        vector
    }

    /// Set the pose for one frame, replacing any previous value.
    pub fn set_value(&mut self, frame: FrameId, pose: RigidTransform<T>) {
        self.poses.insert(frame, pose);
    }

    /// The pose recorded for `frame`, if any.
    pub fn value(&self, frame: FrameId) -> Option<&RigidTransform<T>> {
        self.poses.get(&frame)
    }

    /// The frames this vector carries poses for, in id order.
    pub fn frame_ids(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.poses.keys().copied()
    }

    /// The number of poses.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// The source this vector belongs to.
    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    /// Convert to another scalar representation through the value parts.
    pub fn cast<U: SimScalar>(&self) -> FramePoseVector<U> {
        FramePoseVector {
            source_id: self.source_id,
            poses: self
                .poses
                .iter()
                .map(|(id, pose)| (*id, pose.cast()))
                .collect(),
        }
    }
}
