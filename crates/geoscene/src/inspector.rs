//! Read-only queries against a geometry state.

use geoscene_ids::{FrameId, GeometryId, SourceId};
use geoscene_math::{RigidTransform, SimScalar};
use geoscene_state::{GeometryError, GeometryState, PropertySet, Role, Shape};

/// A read-only view of one [`GeometryState`], model or context.
///
/// The inspector borrows the state it wraps, so it observes any later
/// mutation of that specific state. Returned references borrow the
/// state, not the inspector, so they outlive a transient view.
pub struct SceneGraphInspector<'a, T: SimScalar> {
    state: &'a GeometryState<T>,
}

impl<'a, T: SimScalar> SceneGraphInspector<'a, T> {
    pub(crate) fn new(state: &'a GeometryState<T>) -> Self {
        Self { state }
    }

    /// The world frame id.
    pub fn world_frame_id(&self) -> FrameId {
        FrameId::world()
    }

    /// Whether `source` has been registered in the backing state.
    pub fn source_is_registered(&self, source: SourceId) -> bool {
        self.state.source_is_registered(source)
    }

    /// The name of a registered source.
    pub fn source_name(&self, source: SourceId) -> Result<&'a str, GeometryError> {
        self.state.source_name(source)
    }

    /// The number of registered sources.
    pub fn num_sources(&self) -> usize {
        self.state.num_sources()
    }

    /// The number of frames, the world frame included.
    pub fn num_frames(&self) -> usize {
        self.state.num_frames()
    }

    /// The total number of geometries.
    pub fn num_geometries(&self) -> usize {
        self.state.num_geometries()
    }

    /// The number of frames registered by `source`.
    pub fn num_frames_for_source(&self, source: SourceId) -> Result<usize, GeometryError> {
        self.state.num_frames_for_source(source)
    }

    /// The frames registered by `source`, in id order.
    pub fn frames_for_source(
        &self,
        source: SourceId,
    ) -> Result<impl Iterator<Item = FrameId> + 'a, GeometryError> {
        self.state.frames_for_source(source)
    }

    /// The number of geometries on `frame_id`, nested children included.
    pub fn num_geometries_for_frame(&self, frame_id: FrameId) -> Result<usize, GeometryError> {
        self.state.num_geometries_for_frame(frame_id)
    }

    /// Whether `frame_id` was registered by `source`.
    pub fn frame_belongs_to_source(
        &self,
        frame_id: FrameId,
        source: SourceId,
    ) -> Result<bool, GeometryError> {
        self.state.frame_belongs_to_source(frame_id, source)
    }

    /// Whether `geometry_id` was registered by `source`.
    pub fn geometry_belongs_to_source(
        &self,
        geometry_id: GeometryId,
        source: SourceId,
    ) -> Result<bool, GeometryError> {
        self.state.geometry_belongs_to_source(geometry_id, source)
    }

    /// The name of a registered frame.
    pub fn frame_name(&self, frame_id: FrameId) -> Result<&'a str, GeometryError> {
        self.state.frame_name(frame_id)
    }

    /// The frame group a frame was registered with.
    pub fn frame_group(&self, frame_id: FrameId) -> Result<i32, GeometryError> {
        self.state.frame_group(frame_id)
    }

    /// The name of a registered geometry.
    pub fn geometry_name(&self, geometry_id: GeometryId) -> Result<&'a str, GeometryError> {
        self.state.geometry_name(geometry_id)
    }

    /// The shape of a registered geometry.
    pub fn geometry_shape(&self, geometry_id: GeometryId) -> Result<&'a Shape, GeometryError> {
        self.state.geometry_shape(geometry_id)
    }

    /// The frame a geometry is affixed to.
    pub fn geometry_frame_id(&self, geometry_id: GeometryId) -> Result<FrameId, GeometryError> {
        self.state.geometry_frame_id(geometry_id)
    }

    /// Find a geometry on `frame_id` by role and name.
    pub fn get_geometry_id_by_name(
        &self,
        frame_id: FrameId,
        role: Role,
        name: &str,
    ) -> Result<GeometryId, GeometryError> {
        self.state.get_geometry_id_by_name(frame_id, role, name)
    }

    /// The properties a geometry holds for `role`.
    pub fn role_properties(
        &self,
        geometry_id: GeometryId,
        role: Role,
    ) -> Result<Option<&'a PropertySet>, GeometryError> {
        self.state.role_properties(geometry_id, role)
    }

    /// Whether the pair `(a, b)` is excluded from proximity queries.
    pub fn collision_filtered(
        &self,
        a: GeometryId,
        b: GeometryId,
    ) -> Result<bool, GeometryError> {
        self.state.collision_filtered(a, b)
    }

    /// A frame's cached pose in the world frame.
    pub fn pose_in_world(
        &self,
        frame_id: FrameId,
    ) -> Result<&'a RigidTransform<T>, GeometryError> {
        self.state.pose_in_world(frame_id)
    }

    /// A frame's pose in its parent frame.
    pub fn pose_in_parent(
        &self,
        frame_id: FrameId,
    ) -> Result<&'a RigidTransform<T>, GeometryError> {
        self.state.pose_in_parent(frame_id)
    }

    /// A geometry's pose in the world frame.
    pub fn geometry_pose_in_world(
        &self,
        geometry_id: GeometryId,
    ) -> Result<RigidTransform<T>, GeometryError> {
        self.state.geometry_pose_in_world(geometry_id)
    }

    /// A geometry's fixed pose in its frame.
    pub fn geometry_pose_in_frame(
        &self,
        geometry_id: GeometryId,
    ) -> Result<&'a RigidTransform<T>, GeometryError> {
        self.state.geometry_pose_in_frame(geometry_id)
    }
}
