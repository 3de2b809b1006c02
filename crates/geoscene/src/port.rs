//! Pose input ports.

use geoscene_ids::SourceId;

/// The handle a source uses to feed poses into a context.
///
/// Ports are assigned at source registration and survive
/// transmogrification unchanged; the index is stable for the life of the
/// scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosePort {
    source_id: SourceId,
    index: usize,
}

impl PosePort {
    pub(crate) fn new(source_id: SourceId, index: usize) -> Self {
        Self { source_id, index }
    }

    /// The source this port belongs to.
    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    /// The port's index in the scene graph's port directory.
    pub fn index(&self) -> usize {
        self.index
    }
}
