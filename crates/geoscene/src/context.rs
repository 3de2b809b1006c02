//! The per-simulation snapshot of the scene.

use std::collections::HashMap;

use geoscene_ids::SourceId;
use geoscene_math::SimScalar;
use geoscene_state::{FramePoseVector, GeometryError, GeometryState};

use crate::inspector::SceneGraphInspector;
use crate::port::PosePort;

/// One allocated context: a deep copy of the model state plus a pose
/// input slot for every source that existed at allocation time.
///
/// The context and the model share no mutable structure; mutating one is
/// invisible to the other.
#[derive(Debug, Clone)]
pub struct GeometryContext<T: SimScalar> {
    state: GeometryState<T>,
    pose_inputs: HashMap<SourceId, Option<FramePoseVector<T>>>,
}

impl<T: SimScalar> GeometryContext<T> {
    pub(crate) fn new(state: GeometryState<T>) -> Self {
        let pose_inputs = state.source_ids().map(|id| (id, None)).collect();
        Self { state, pose_inputs }
    }

    /// Fix the pose input for the source behind `port`.
    ///
    /// Replaces any previously fixed value. The port must belong to a
    /// source this context was allocated with.
    pub fn fix_pose_input(
        &mut self,
        port: PosePort,
        poses: FramePoseVector<T>,
    ) -> Result<(), GeometryError> {
        let slot = self
            .pose_inputs
            .get_mut(&port.source_id())
            .ok_or(GeometryError::UnregisteredSource(port.source_id()))?;
        *slot = Some(poses);
        Ok(())
    }

    /// A read-only view of this context's state.
    pub fn inspector(&self) -> SceneGraphInspector<'_, T> {
        SceneGraphInspector::new(&self.state)
    }

    /// Re-derive this context's numeric fields from a context of another
    /// scalar type. Topology, names, and fixed inputs all carry over.
    pub fn set_state_from<U: SimScalar>(&mut self, other: &GeometryContext<U>) {
        self.state = other.state.to_scalar_type();
        self.pose_inputs = other
            .pose_inputs
            .iter()
            .map(|(id, slot)| (*id, slot.as_ref().map(|v| v.cast())))
            .collect();
    }

    pub(crate) fn state(&self) -> &GeometryState<T> {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GeometryState<T> {
        &mut self.state
    }

    pub(crate) fn pose_input(&self, source: SourceId) -> Option<&FramePoseVector<T>> {
        self.pose_inputs.get(&source).and_then(|slot| slot.as_ref())
    }
}
