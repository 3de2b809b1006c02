//! The source-partitioned registry of frames and geometries.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use geoscene_ids::{FrameId, GeometryId, SourceId};
use geoscene_math::{RigidTransform, SimScalar};

use crate::error::GeometryError;
use crate::frame::GeometryFrame;
use crate::geometry_set::GeometrySet;
use crate::instance::GeometryInstance;
use crate::pose_vector::FramePoseVector;
use crate::properties::{PropertySet, Role};
use crate::shape::Shape;

#[derive(Debug, Clone)]
struct SourceInfo {
    name: String,
    frames: BTreeSet<FrameId>,
    anchored: BTreeSet<GeometryId>,
}

#[derive(Debug, Clone)]
struct FrameInfo<T: SimScalar> {
    name: String,
    /// `None` only for the world frame.
    source: Option<SourceId>,
    /// `None` only for the world frame.
    parent: Option<FrameId>,
    child_frames: BTreeSet<FrameId>,
    /// Every geometry affixed to this frame, including geometries hung on
    /// other geometries of the frame.
    geometries: BTreeSet<GeometryId>,
    frame_group: i32,
    pose_in_parent: RigidTransform<T>,
    world_pose: RigidTransform<T>,
}

#[derive(Debug, Clone)]
struct GeometryInfo<T: SimScalar> {
    name: String,
    source: SourceId,
    frame_id: FrameId,
    parent_geometry: Option<GeometryId>,
    child_geometries: BTreeSet<GeometryId>,
    /// `X_FG`: composed through the parent geometry chain at registration.
    pose_in_frame: RigidTransform<T>,
    shape: Shape,
    roles: BTreeMap<Role, PropertySet>,
}

/// The authoritative registry of sources, frames, and geometries.
///
/// Cloning produces a fully independent deep copy; a scene graph clones
/// its model state into every allocated context.
#[derive(Debug, Clone)]
pub struct GeometryState<T: SimScalar> {
    sources: HashMap<SourceId, SourceInfo>,
    /// Source ids in registration order; the iteration order for
    /// validation and pose-bundle assembly.
    source_order: Vec<SourceId>,
    frames: HashMap<FrameId, FrameInfo<T>>,
    geometries: HashMap<GeometryId, GeometryInfo<T>>,
    /// Unordered geometry pairs excluded from proximity queries, stored
    /// normalized as `(min, max)`.
    collision_filters: BTreeSet<(GeometryId, GeometryId)>,
}

impl<T: SimScalar> GeometryState<T> {
    /// An empty state containing only the world frame.
    pub fn new() -> Self {
        let mut frames = HashMap::new();
        frames.insert(
            FrameId::world(),
            FrameInfo {
                name: "world".to_string(),
                source: None,
                parent: None,
                child_frames: BTreeSet::new(),
                geometries: BTreeSet::new(),
                frame_group: 0,
                pose_in_parent: RigidTransform::identity(),
                world_pose: RigidTransform::identity(),
            },
        );
        Self {
            sources: HashMap::new(),
            source_order: Vec::new(),
            frames,
            geometries: HashMap::new(),
            collision_filters: BTreeSet::new(),
        }
    }

    // ----- Sources -------------------------------------------------------

    /// Register a new source, auto-naming it `source_<id>` when no name is
    /// given.
    pub fn register_source(&mut self, name: Option<String>) -> Result<SourceId, GeometryError> {
        let id = SourceId::get_new_id();
        let name = name.unwrap_or_else(|| format!("source_{id}"));
        if self.sources.values().any(|s| s.name == name) {
            return Err(GeometryError::DuplicateName {
                name,
                scope: "by a registered source".to_string(),
            });
        }
        log::debug!("registering source {id} ({name})");
        self.sources.insert(
            id,
            SourceInfo {
                name,
                frames: BTreeSet::new(),
                anchored: BTreeSet::new(),
            },
        );
        self.source_order.push(id);
        Ok(id)
    }

    /// Whether `source` has been registered.
    pub fn source_is_registered(&self, source: SourceId) -> bool {
        self.sources.contains_key(&source)
    }

    /// The name of a registered source.
    pub fn source_name(&self, source: SourceId) -> Result<&str, GeometryError> {
        self.source(source).map(|info| info.name.as_str())
    }

    /// The number of registered sources.
    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    /// All source ids, in registration order.
    pub fn source_ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.source_order.iter().copied()
    }

    // ----- Frames --------------------------------------------------------

    /// Register a frame for `source`, under `parent` (the world frame when
    /// `None`).
    pub fn register_frame(
        &mut self,
        source: SourceId,
        parent: Option<FrameId>,
        frame: GeometryFrame,
    ) -> Result<FrameId, GeometryError> {
        self.source(source)?;
        let parent = parent.unwrap_or_else(FrameId::world);
        let parent_info = self
            .frames
            .get(&parent)
            .ok_or(GeometryError::UnknownFrame(parent))?;
        // Every source may hang frames off the world frame. A frame of
        // another source is invisible to the registering source, so it
        // reads as unknown rather than as an ownership violation.
        if parent != FrameId::world() && parent_info.source != Some(source) {
            return Err(GeometryError::UnknownFrame(parent));
        }
        let pose_in_parent: RigidTransform<T> = frame.pose.cast();
        let world_pose = parent_info.world_pose.then(&pose_in_parent);

        let id = FrameId::get_new_id();
        log::trace!("registering frame {id} ({}) for source {source}", frame.name);
        self.frames.insert(
            id,
            FrameInfo {
                name: frame.name,
                source: Some(source),
                parent: Some(parent),
                child_frames: BTreeSet::new(),
                geometries: BTreeSet::new(),
                frame_group: frame.frame_group,
                pose_in_parent,
                world_pose,
            },
        );
        self.frame_mut(parent)?.child_frames.insert(id);
        self.source_mut(source)?.frames.insert(id);
        Ok(id)
    }

    /// Remove a frame and, transitively, its descendant frames and every
    /// geometry on them. All removed ids become permanently unknown.
    pub fn remove_frame(
        &mut self,
        source: SourceId,
        frame_id: FrameId,
    ) -> Result<(), GeometryError> {
        self.source(source)?;
        let info = self.frame(frame_id)?;
        if info.source != Some(source) {
            return Err(GeometryError::Ownership {
                source_id: source,
                what: format!("frame {frame_id}"),
            });
        }

        // Collect the doomed subtree before touching anything.
        let mut doomed_frames = Vec::new();
        let mut stack = vec![frame_id];
        while let Some(f) = stack.pop() {
            doomed_frames.push(f);
            stack.extend(self.frame(f)?.child_frames.iter().copied());
        }
        let mut doomed_geometries = BTreeSet::new();
        for f in &doomed_frames {
            doomed_geometries.extend(self.frame(*f)?.geometries.iter().copied());
        }
        log::debug!(
            "removing frame {frame_id}: {} frames, {} geometries",
            doomed_frames.len(),
            doomed_geometries.len()
        );

        let parent = info.parent;
        if let Some(parent) = parent {
            self.frame_mut(parent)?.child_frames.remove(&frame_id);
        }
        for f in &doomed_frames {
            self.frames.remove(f);
            self.source_mut(source)?.frames.remove(f);
        }
        for g in &doomed_geometries {
            self.geometries.remove(g);
        }
        self.purge_filters(&doomed_geometries);
        Ok(())
    }

    /// Whether `frame_id` was registered by `source`. Unknown frame ids
    /// are an error, never `false`.
    pub fn frame_belongs_to_source(
        &self,
        frame_id: FrameId,
        source: SourceId,
    ) -> Result<bool, GeometryError> {
        Ok(self.frame(frame_id)?.source == Some(source))
    }

    /// The name of a registered frame.
    pub fn frame_name(&self, frame_id: FrameId) -> Result<&str, GeometryError> {
        self.frame(frame_id).map(|info| info.name.as_str())
    }

    /// The frame group a frame was registered with.
    pub fn frame_group(&self, frame_id: FrameId) -> Result<i32, GeometryError> {
        self.frame(frame_id).map(|info| info.frame_group)
    }

    /// The number of frames, the world frame included.
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// The number of frames registered by `source`.
    pub fn num_frames_for_source(&self, source: SourceId) -> Result<usize, GeometryError> {
        self.source(source).map(|info| info.frames.len())
    }

    /// The frames registered by `source`, in id order.
    pub fn frames_for_source(
        &self,
        source: SourceId,
    ) -> Result<impl Iterator<Item = FrameId> + '_, GeometryError> {
        Ok(self.source(source)?.frames.iter().copied())
    }

    // ----- Geometries ----------------------------------------------------

    /// Register a geometry affixed to `frame_id`. Registration on the
    /// world frame yields an anchored geometry.
    pub fn register_geometry(
        &mut self,
        source: SourceId,
        frame_id: FrameId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        self.source(source)?;
        let frame = self.frames.get(&frame_id).ok_or(GeometryError::UnknownFrame(frame_id))?;
        if frame_id != FrameId::world() && frame.source != Some(source) {
            return Err(GeometryError::UnknownFrame(frame_id));
        }
        instance.shape.validate()?;
        self.check_geometry_name(frame_id, None, &instance.name)?;

        let id = GeometryId::get_new_id();
        log::trace!(
            "registering geometry {id} ({}) on frame {frame_id} for source {source}",
            instance.name
        );
        self.geometries.insert(
            id,
            GeometryInfo {
                name: instance.name,
                source,
                frame_id,
                parent_geometry: None,
                child_geometries: BTreeSet::new(),
                pose_in_frame: instance.pose.cast(),
                shape: instance.shape,
                roles: BTreeMap::new(),
            },
        );
        self.frame_mut(frame_id)?.geometries.insert(id);
        if frame_id == FrameId::world() {
            self.source_mut(source)?.anchored.insert(id);
        }
        Ok(id)
    }

    /// Register a geometry as a child of another geometry. The child lives
    /// on the parent's frame; its stored pose is composed through the
    /// parent's pose in that frame.
    pub fn register_geometry_with_parent(
        &mut self,
        source: SourceId,
        parent_id: GeometryId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        self.source(source)?;
        let parent = self
            .geometries
            .get(&parent_id)
            .ok_or(GeometryError::UnknownGeometry(parent_id))?;
        if parent.source != source {
            return Err(GeometryError::UnknownGeometry(parent_id));
        }
        instance.shape.validate()?;
        let frame_id = parent.frame_id;
        self.check_geometry_name(frame_id, Some(parent_id), &instance.name)?;

        let pose_in_frame = parent.pose_in_frame.then(&instance.pose.cast());
        let id = GeometryId::get_new_id();
        log::trace!(
            "registering geometry {id} ({}) under geometry {parent_id}",
            instance.name
        );
        self.geometries.insert(
            id,
            GeometryInfo {
                name: instance.name,
                source,
                frame_id,
                parent_geometry: Some(parent_id),
                child_geometries: BTreeSet::new(),
                pose_in_frame,
                shape: instance.shape,
                roles: BTreeMap::new(),
            },
        );
        self.geometry_mut(parent_id)?.child_geometries.insert(id);
        self.frame_mut(frame_id)?.geometries.insert(id);
        if frame_id == FrameId::world() {
            self.source_mut(source)?.anchored.insert(id);
        }
        Ok(id)
    }

    /// Register a geometry fixed to the world frame.
    pub fn register_anchored_geometry(
        &mut self,
        source: SourceId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        self.register_geometry(source, FrameId::world(), instance)
    }

    /// Remove a geometry and, transitively, its child geometries.
    pub fn remove_geometry(
        &mut self,
        source: SourceId,
        geometry_id: GeometryId,
    ) -> Result<(), GeometryError> {
        self.source(source)?;
        let info = self.geometry(geometry_id)?;
        if info.source != source {
            return Err(GeometryError::Ownership {
                source_id: source,
                what: format!("geometry {geometry_id}"),
            });
        }

        let frame_id = info.frame_id;
        let parent = info.parent_geometry;
        let mut doomed = BTreeSet::new();
        let mut stack = vec![geometry_id];
        while let Some(g) = stack.pop() {
            doomed.insert(g);
            stack.extend(self.geometry(g)?.child_geometries.iter().copied());
        }
        log::debug!("removing geometry {geometry_id}: {} geometries", doomed.len());

        if let Some(parent) = parent {
            self.geometry_mut(parent)?.child_geometries.remove(&geometry_id);
        }
        for g in &doomed {
            self.geometries.remove(g);
            self.frame_mut(frame_id)?.geometries.remove(g);
            self.source_mut(source)?.anchored.remove(g);
        }
        self.purge_filters(&doomed);
        Ok(())
    }

    /// Whether `geometry_id` was registered by `source`. Unknown geometry
    /// ids are an error, never `false`.
    pub fn geometry_belongs_to_source(
        &self,
        geometry_id: GeometryId,
        source: SourceId,
    ) -> Result<bool, GeometryError> {
        Ok(self.geometry(geometry_id)?.source == source)
    }

    /// The name of a registered geometry.
    pub fn geometry_name(&self, geometry_id: GeometryId) -> Result<&str, GeometryError> {
        self.geometry(geometry_id).map(|info| info.name.as_str())
    }

    /// The shape of a registered geometry.
    pub fn geometry_shape(&self, geometry_id: GeometryId) -> Result<&Shape, GeometryError> {
        self.geometry(geometry_id).map(|info| &info.shape)
    }

    /// The frame a geometry is affixed to.
    pub fn geometry_frame_id(&self, geometry_id: GeometryId) -> Result<FrameId, GeometryError> {
        self.geometry(geometry_id).map(|info| info.frame_id)
    }

    /// The total number of geometries.
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// The number of geometries on `frame_id`, nested child geometries
    /// included.
    pub fn num_geometries_for_frame(&self, frame_id: FrameId) -> Result<usize, GeometryError> {
        self.frame(frame_id).map(|info| info.geometries.len())
    }

    /// Find a geometry on `frame_id` by role and name.
    ///
    /// [`Role::Unassigned`] matches geometries that have no role at all.
    pub fn get_geometry_id_by_name(
        &self,
        frame_id: FrameId,
        role: Role,
        name: &str,
    ) -> Result<GeometryId, GeometryError> {
        let frame = self.frame(frame_id)?;
        let mut found = None;
        for id in &frame.geometries {
            let geometry = self.geometry(*id)?;
            let role_matches = match role {
                Role::Unassigned => geometry.roles.is_empty(),
                assigned => geometry.roles.contains_key(&assigned),
            };
            if !role_matches || geometry.name != name {
                continue;
            }
            if found.is_some() {
                return Err(GeometryError::AmbiguousName {
                    frame: frame_id,
                    role,
                    name: name.to_string(),
                });
            }
            found = Some(*id);
        }
        found.ok_or_else(|| GeometryError::GeometryNotFound {
            frame: frame_id,
            role,
            name: name.to_string(),
        })
    }

    // ----- Roles ---------------------------------------------------------

    /// Assign a role to a geometry, replacing any properties the geometry
    /// already held for that role.
    pub fn assign_role(
        &mut self,
        source: SourceId,
        geometry_id: GeometryId,
        role: Role,
        properties: PropertySet,
    ) -> Result<(), GeometryError> {
        self.source(source)?;
        let info = self.geometry(geometry_id)?;
        if info.source != source {
            return Err(GeometryError::Ownership {
                source_id: source,
                what: format!("geometry {geometry_id}"),
            });
        }
        if role == Role::Unassigned {
            return Err(GeometryError::InvalidParameter(
                "cannot assign the unassigned role".to_string(),
            ));
        }
        log::trace!("assigning {role:?} role to geometry {geometry_id}");
        self.geometry_mut(geometry_id)?.roles.insert(role, properties);
        Ok(())
    }

    /// The properties a geometry holds for `role`, or `None` if the role
    /// was never assigned.
    pub fn role_properties(
        &self,
        geometry_id: GeometryId,
        role: Role,
    ) -> Result<Option<&PropertySet>, GeometryError> {
        Ok(self.geometry(geometry_id)?.roles.get(&role))
    }

    /// Whether any geometry on `frame_id` holds `role`.
    pub fn frame_has_geometry_with_role(
        &self,
        frame_id: FrameId,
        role: Role,
    ) -> Result<bool, GeometryError> {
        let frame = self.frame(frame_id)?;
        for id in &frame.geometries {
            if self.geometry(*id)?.roles.contains_key(&role) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // ----- Collision filtering -------------------------------------------

    /// Exclude every pair of geometries within `set` from proximity
    /// queries. Frames in the set stand for all their geometries.
    pub fn exclude_collisions_within(&mut self, set: &GeometrySet) -> Result<(), GeometryError> {
        let ids = self.expand_set(set)?;
        for a in &ids {
            for b in &ids {
                if a < b {
                    self.collision_filters.insert((*a, *b));
                }
            }
        }
        Ok(())
    }

    /// Exclude every cross pair between `set_a` and `set_b` from proximity
    /// queries.
    pub fn exclude_collisions_between(
        &mut self,
        set_a: &GeometrySet,
        set_b: &GeometrySet,
    ) -> Result<(), GeometryError> {
        let ids_a = self.expand_set(set_a)?;
        let ids_b = self.expand_set(set_b)?;
        for a in &ids_a {
            for b in &ids_b {
                if a != b {
                    self.collision_filters.insert(normalized(*a, *b));
                }
            }
        }
        Ok(())
    }

    /// Whether the pair `(a, b)` is excluded from proximity queries. A
    /// geometry is trivially excluded against itself.
    pub fn collision_filtered(
        &self,
        a: GeometryId,
        b: GeometryId,
    ) -> Result<bool, GeometryError> {
        self.geometry(a)?;
        self.geometry(b)?;
        if a == b {
            return Ok(true);
        }
        Ok(self.collision_filters.contains(&normalized(a, b)))
    }

    // ----- Poses ---------------------------------------------------------

    /// Accept a full pose vector from `source` and refresh the cached
    /// world poses of its frames.
    ///
    /// The vector must cover exactly the frames the source has registered;
    /// each pose is the frame's pose in its parent.
    pub fn set_frame_poses(
        &mut self,
        source: SourceId,
        poses: &FramePoseVector<T>,
    ) -> Result<(), GeometryError> {
        let owned = self.source(source)?.frames.clone();
        if poses.source_id() != source {
            return Err(GeometryError::Ownership {
                source_id: source,
                what: format!("the pose vector tagged for source {}", poses.source_id()),
            });
        }
        let supplied: BTreeSet<FrameId> = poses.frame_ids().collect();
        if supplied != owned {
            let missing: Vec<_> = owned.difference(&supplied).collect();
            let extra: Vec<_> = supplied.difference(&owned).collect();
            return Err(GeometryError::PortMismatch {
                source_id: source,
                detail: format!(
                    "expected poses for {} frames, got {} (missing {missing:?}, extra {extra:?})",
                    owned.len(),
                    supplied.len()
                ),
            });
        }

        // Parent-before-child order. A frame's parent is the world frame
        // or another frame of the same source, so the supplied set closes
        // over all parents.
        let mut order = Vec::with_capacity(owned.len());
        let mut stack: Vec<FrameId> = Vec::new();
        for f in &owned {
            if self.frame(*f)?.parent == Some(FrameId::world()) {
                stack.push(*f);
            }
        }
        while let Some(f) = stack.pop() {
            order.push(f);
            for child in &self.frame(f)?.child_frames {
                if owned.contains(child) {
                    stack.push(*child);
                }
            }
        }

        log::trace!("updating {} poses for source {source}", order.len());
        for f in order {
            let info = self.frame(f)?;
            let parent = info.parent.unwrap_or_else(FrameId::world);
            let parent_world = self.frame(parent)?.world_pose.clone();
            let pose = poses
                .value(f)
                .ok_or(GeometryError::UnknownFrame(f))?
                .clone();
            let frame = self.frame_mut(f)?;
            frame.world_pose = parent_world.then(&pose);
            frame.pose_in_parent = pose;
        }
        Ok(())
    }

    /// A frame's cached pose in the world frame.
    pub fn pose_in_world(&self, frame_id: FrameId) -> Result<&RigidTransform<T>, GeometryError> {
        self.frame(frame_id).map(|info| &info.world_pose)
    }

    /// A frame's pose in its parent frame. Identity for the world frame.
    pub fn pose_in_parent(&self, frame_id: FrameId) -> Result<&RigidTransform<T>, GeometryError> {
        self.frame(frame_id).map(|info| &info.pose_in_parent)
    }

    /// A geometry's pose in the world frame: `X_WG = X_WF * X_FG`.
    pub fn geometry_pose_in_world(
        &self,
        geometry_id: GeometryId,
    ) -> Result<RigidTransform<T>, GeometryError> {
        let geometry = self.geometry(geometry_id)?;
        let frame = self.frame(geometry.frame_id)?;
        Ok(frame.world_pose.then(&geometry.pose_in_frame))
    }

    /// A geometry's fixed pose in its frame.
    pub fn geometry_pose_in_frame(
        &self,
        geometry_id: GeometryId,
    ) -> Result<&RigidTransform<T>, GeometryError> {
        self.geometry(geometry_id).map(|info| &info.pose_in_frame)
    }

    // ----- Scalar conversion ---------------------------------------------

    /// Copy this state into another scalar representation.
    ///
    /// All structural data carries over verbatim; numeric fields are
    /// converted through their value parts.
    pub fn to_scalar_type<U: SimScalar>(&self) -> GeometryState<U> {
        GeometryState {
            sources: self.sources.clone(),
            source_order: self.source_order.clone(),
            frames: self
                .frames
                .iter()
                .map(|(id, f)| {
                    (
                        *id,
                        FrameInfo {
                            name: f.name.clone(),
                            source: f.source,
                            parent: f.parent,
                            child_frames: f.child_frames.clone(),
                            geometries: f.geometries.clone(),
                            frame_group: f.frame_group,
                            pose_in_parent: f.pose_in_parent.cast(),
                            world_pose: f.world_pose.cast(),
                        },
                    )
                })
                .collect(),
            geometries: self
                .geometries
                .iter()
                .map(|(id, g)| {
                    (
                        *id,
                        GeometryInfo {
                            name: g.name.clone(),
                            source: g.source,
                            frame_id: g.frame_id,
                            parent_geometry: g.parent_geometry,
                            child_geometries: g.child_geometries.clone(),
                            pose_in_frame: g.pose_in_frame.cast(),
                            shape: g.shape.clone(),
                            roles: g.roles.clone(),
                        },
                    )
                })
                .collect(),
            collision_filters: self.collision_filters.clone(),
        }
    }

    // ----- Internals -----------------------------------------------------

    fn source(&self, source: SourceId) -> Result<&SourceInfo, GeometryError> {
        self.sources
            .get(&source)
            .ok_or(GeometryError::UnregisteredSource(source))
    }

    fn source_mut(&mut self, source: SourceId) -> Result<&mut SourceInfo, GeometryError> {
        self.sources
            .get_mut(&source)
            .ok_or(GeometryError::UnregisteredSource(source))
    }

    fn frame(&self, frame_id: FrameId) -> Result<&FrameInfo<T>, GeometryError> {
        self.frames
            .get(&frame_id)
            .ok_or(GeometryError::UnknownFrame(frame_id))
    }

    fn frame_mut(&mut self, frame_id: FrameId) -> Result<&mut FrameInfo<T>, GeometryError> {
        self.frames
            .get_mut(&frame_id)
            .ok_or(GeometryError::UnknownFrame(frame_id))
    }

    fn geometry(&self, geometry_id: GeometryId) -> Result<&GeometryInfo<T>, GeometryError> {
        self.geometries
            .get(&geometry_id)
            .ok_or(GeometryError::UnknownGeometry(geometry_id))
    }

    fn geometry_mut(
        &mut self,
        geometry_id: GeometryId,
    ) -> Result<&mut GeometryInfo<T>, GeometryError> {
        self.geometries
            .get_mut(&geometry_id)
            .ok_or(GeometryError::UnknownGeometry(geometry_id))
    }

    /// Geometry names must be unique among siblings: the direct children
    /// of one frame, or the direct children of one parent geometry.
    fn check_geometry_name(
        &self,
        frame_id: FrameId,
        parent: Option<GeometryId>,
        name: &str,
    ) -> Result<(), GeometryError> {
        let frame = self.frame(frame_id)?;
        for id in &frame.geometries {
            let geometry = self.geometry(*id)?;
            if geometry.parent_geometry == parent && geometry.name == name {
                return Err(GeometryError::DuplicateName {
                    name: name.to_string(),
                    scope: match parent {
                        Some(p) => format!("by a sibling under geometry {p}"),
                        None => format!("by a geometry on frame {frame_id}"),
                    },
                });
            }
        }
        Ok(())
    }

    fn expand_set(&self, set: &GeometrySet) -> Result<BTreeSet<GeometryId>, GeometryError> {
        let mut ids = BTreeSet::new();
        for g in set.geometries() {
            self.geometry(g)?;
            ids.insert(g);
        }
        for f in set.frames() {
            ids.extend(self.frame(f)?.geometries.iter().copied());
        }
        Ok(ids)
    }

    fn purge_filters(&mut self, doomed: &BTreeSet<GeometryId>) {
        self.collision_filters
            .retain(|(a, b)| !doomed.contains(a) && !doomed.contains(b));
    }
}

impl<T: SimScalar> Default for GeometryState<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn normalized(a: GeometryId, b: GeometryId) -> (GeometryId, GeometryId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
