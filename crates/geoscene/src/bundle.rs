//! Pose bundles for visualization consumers.

use geoscene_ids::{FrameId, SourceId};
use geoscene_math::{RigidTransform, SimScalar, SpatialVelocity};
use geoscene_state::{GeometryError, GeometryState, Role};

/// One frame's entry in a pose bundle.
#[derive(Debug, Clone)]
pub struct PoseBundleEntry<T: SimScalar> {
    /// The frame.
    pub frame_id: FrameId,
    /// The source that registered the frame.
    pub source_id: SourceId,
    /// Qualified name `<source>::<frame>`.
    pub name: String,
    /// The frame group the frame was registered with.
    pub frame_group: i32,
    /// The frame's pose in the world frame.
    pub pose: RigidTransform<T>,
    /// The frame's spatial velocity in the world frame.
    pub velocity: SpatialVelocity<T>,
}

/// The poses of every frame that carries illustration geometry.
///
/// Entries are ordered by source registration, then frame registration;
/// the world frame never appears. Frames without at least one
/// illustration-role geometry are skipped.
#[derive(Debug, Clone, Default)]
pub struct PoseBundle<T: SimScalar> {
    entries: Vec<PoseBundleEntry<T>>,
}

impl<T: SimScalar> PoseBundle<T> {
    /// The number of entries.
    pub fn num_poses(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, in bundle order.
    pub fn entries(&self) -> impl Iterator<Item = &PoseBundleEntry<T>> {
        self.entries.iter()
    }

    /// The entry at `index`, if any.
    pub fn entry(&self, index: usize) -> Option<&PoseBundleEntry<T>> {
        self.entries.get(index)
    }

    /// The entry for `frame_id`, if the frame is in the bundle.
    pub fn entry_for_frame(&self, frame_id: FrameId) -> Option<&PoseBundleEntry<T>> {
        self.entries.iter().find(|e| e.frame_id == frame_id)
    }
}

/// Assemble a bundle from a state's current world poses.
pub(crate) fn assemble<T: SimScalar>(
    state: &GeometryState<T>,
) -> Result<PoseBundle<T>, GeometryError> {
    let mut entries = Vec::new();
    for source in state.source_ids() {
        let source_name = state.source_name(source)?.to_string();
        for frame in state.frames_for_source(source)? {
            if !state.frame_has_geometry_with_role(frame, Role::Illustration)? {
                continue;
            }
            entries.push(PoseBundleEntry {
                frame_id: frame,
                source_id: source,
                name: format!("{source_name}::{}", state.frame_name(frame)?),
                frame_group: state.frame_group(frame)?,
                pose: state.pose_in_world(frame)?.clone(),
                velocity: SpatialVelocity::zero(),
            });
        }
    }
    Ok(PoseBundle { entries })
}
