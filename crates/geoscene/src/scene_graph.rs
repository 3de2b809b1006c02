//! The scene graph facade.

use std::collections::HashMap;

use geoscene_ids::{FrameId, GeometryId, SourceId};
use geoscene_math::{Dual, SimScalar};
use geoscene_state::{
    GeometryError, GeometryFrame, GeometryInstance, GeometrySet, GeometryState, RoleProperties,
};

use crate::bundle::{self, PoseBundle};
use crate::context::GeometryContext;
use crate::inspector::SceneGraphInspector;
use crate::port::PosePort;

/// The authoring surface for a scene of sources, frames, and geometries.
///
/// The graph owns the *model* state. [`SceneGraph::allocate_context`]
/// deep-copies the model into a [`GeometryContext`]; from then on the two
/// evolve independently. Every mutating operation comes in two flavors:
/// one that edits the model and an `_in_context` variant that edits a
/// supplied context instead.
#[derive(Debug, Clone)]
pub struct SceneGraph<T: SimScalar> {
    model: GeometryState<T>,
    ports: HashMap<SourceId, PosePort>,
}

impl<T: SimScalar> SceneGraph<T> {
    /// An empty scene graph containing only the world frame.
    pub fn new() -> Self {
        Self {
            model: GeometryState::new(),
            ports: HashMap::new(),
        }
    }

    /// The world frame id.
    pub fn world_frame_id(&self) -> FrameId {
        FrameId::world()
    }

    /// A read-only view of the model state.
    pub fn model_inspector(&self) -> SceneGraphInspector<'_, T> {
        SceneGraphInspector::new(&self.model)
    }

    // ----- Sources and ports ---------------------------------------------

    /// Register a new source and assign it a pose port.
    pub fn register_source(&mut self, name: Option<&str>) -> Result<SourceId, GeometryError> {
        let id = self.model.register_source(name.map(str::to_string))?;
        self.ports.insert(id, PosePort::new(id, self.ports.len()));
        Ok(id)
    }

    /// Whether `source` has been registered with this graph.
    pub fn source_is_registered(&self, source: SourceId) -> bool {
        self.model.source_is_registered(source)
    }

    /// The pose port assigned to `source`.
    pub fn get_source_pose_port(&self, source: SourceId) -> Result<PosePort, GeometryError> {
        self.ports
            .get(&source)
            .copied()
            .ok_or(GeometryError::UnregisteredSource(source))
    }

    // ----- Model-mutating registration -----------------------------------

    /// Register a frame on the model, under `parent` (the world frame when
    /// `None`).
    pub fn register_frame(
        &mut self,
        source: SourceId,
        parent: Option<FrameId>,
        frame: GeometryFrame,
    ) -> Result<FrameId, GeometryError> {
        self.model.register_frame(source, parent, frame)
    }

    /// Register a geometry on the model, affixed to `frame_id`.
    pub fn register_geometry(
        &mut self,
        source: SourceId,
        frame_id: FrameId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        self.model.register_geometry(source, frame_id, instance)
    }

    /// Register a geometry on the model as a child of another geometry.
    pub fn register_geometry_with_parent(
        &mut self,
        source: SourceId,
        parent_id: GeometryId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        self.model
            .register_geometry_with_parent(source, parent_id, instance)
    }

    /// Register a geometry on the model, fixed to the world frame.
    pub fn register_anchored_geometry(
        &mut self,
        source: SourceId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        self.model.register_anchored_geometry(source, instance)
    }

    /// Remove a frame (and its subtree) from the model.
    pub fn remove_frame(
        &mut self,
        source: SourceId,
        frame_id: FrameId,
    ) -> Result<(), GeometryError> {
        self.model.remove_frame(source, frame_id)
    }

    /// Remove a geometry (and its children) from the model.
    pub fn remove_geometry(
        &mut self,
        source: SourceId,
        geometry_id: GeometryId,
    ) -> Result<(), GeometryError> {
        self.model.remove_geometry(source, geometry_id)
    }

    /// Assign a role to a model geometry.
    pub fn assign_role(
        &mut self,
        source: SourceId,
        geometry_id: GeometryId,
        properties: RoleProperties,
    ) -> Result<(), GeometryError> {
        let role = properties.role();
        self.model
            .assign_role(source, geometry_id, role, properties.into_properties())
    }

    /// Exclude every pair within `set` from proximity queries on the
    /// model.
    pub fn exclude_collisions_within(&mut self, set: &GeometrySet) -> Result<(), GeometryError> {
        self.model.exclude_collisions_within(set)
    }

    /// Exclude every cross pair between `set_a` and `set_b` from proximity
    /// queries on the model.
    pub fn exclude_collisions_between(
        &mut self,
        set_a: &GeometrySet,
        set_b: &GeometrySet,
    ) -> Result<(), GeometryError> {
        self.model.exclude_collisions_between(set_a, set_b)
    }

    // ----- Context-mutating registration ---------------------------------

    /// Register a frame on a context instead of the model.
    pub fn register_frame_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        parent: Option<FrameId>,
        frame: GeometryFrame,
    ) -> Result<FrameId, GeometryError> {
        context.state_mut().register_frame(source, parent, frame)
    }

    /// Register a geometry on a context instead of the model.
    pub fn register_geometry_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        frame_id: FrameId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        context.state_mut().register_geometry(source, frame_id, instance)
    }

    /// Register a child geometry on a context instead of the model.
    pub fn register_geometry_with_parent_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        parent_id: GeometryId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        context
            .state_mut()
            .register_geometry_with_parent(source, parent_id, instance)
    }

    /// Register an anchored geometry on a context instead of the model.
    pub fn register_anchored_geometry_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        instance: GeometryInstance,
    ) -> Result<GeometryId, GeometryError> {
        context.state_mut().register_anchored_geometry(source, instance)
    }

    /// Remove a frame (and its subtree) from a context.
    pub fn remove_frame_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        frame_id: FrameId,
    ) -> Result<(), GeometryError> {
        context.state_mut().remove_frame(source, frame_id)
    }

    /// Remove a geometry (and its children) from a context.
    pub fn remove_geometry_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        geometry_id: GeometryId,
    ) -> Result<(), GeometryError> {
        context.state_mut().remove_geometry(source, geometry_id)
    }

    /// Assign a role to a context geometry.
    pub fn assign_role_in_context(
        &self,
        context: &mut GeometryContext<T>,
        source: SourceId,
        geometry_id: GeometryId,
        properties: RoleProperties,
    ) -> Result<(), GeometryError> {
        let role = properties.role();
        context
            .state_mut()
            .assign_role(source, geometry_id, role, properties.into_properties())
    }

    /// Exclude every pair within `set` from proximity queries on a
    /// context.
    pub fn exclude_collisions_within_in_context(
        &self,
        context: &mut GeometryContext<T>,
        set: &GeometrySet,
    ) -> Result<(), GeometryError> {
        context.state_mut().exclude_collisions_within(set)
    }

    /// Exclude every cross pair between `set_a` and `set_b` from proximity
    /// queries on a context.
    pub fn exclude_collisions_between_in_context(
        &self,
        context: &mut GeometryContext<T>,
        set_a: &GeometrySet,
        set_b: &GeometrySet,
    ) -> Result<(), GeometryError> {
        context.state_mut().exclude_collisions_between(set_a, set_b)
    }

    // ----- Contexts and pose updates -------------------------------------

    /// Allocate a context: a deep copy of the model with an unconnected
    /// pose input slot per currently-registered source.
    pub fn allocate_context(&self) -> GeometryContext<T> {
        log::debug!(
            "allocating context: {} sources, {} frames, {} geometries",
            self.model.num_sources(),
            self.model.num_frames(),
            self.model.num_geometries()
        );
        GeometryContext::new(self.model.clone())
    }

    /// Pull every source's fixed pose input into the context's state.
    ///
    /// Sources are visited in registration order. A source owning at
    /// least one frame must have a fixed input; sources with no frames
    /// are implicitly satisfied. All inputs are validated before any
    /// poses are written.
    pub fn full_pose_update(
        &self,
        context: &mut GeometryContext<T>,
    ) -> Result<(), GeometryError> {
        let sources: Vec<SourceId> = context.state().source_ids().collect();
        let mut updates = Vec::new();
        for source in sources {
            if context.state().num_frames_for_source(source)? == 0 {
                continue;
            }
            let poses = context
                .pose_input(source)
                .ok_or(GeometryError::PortUnconnected(source))?;
            updates.push((source, poses.clone()));
        }
        for (source, poses) in updates {
            context.state_mut().set_frame_poses(source, &poses)?;
        }
        Ok(())
    }

    // ----- Pose bundles ---------------------------------------------------

    /// A pose bundle assembled from the model's current poses.
    pub fn make_pose_bundle(&self) -> Result<PoseBundle<T>, GeometryError> {
        bundle::assemble(&self.model)
    }

    /// A pose bundle assembled from a context's current poses.
    pub fn calc_pose_bundle(
        &self,
        context: &GeometryContext<T>,
    ) -> Result<PoseBundle<T>, GeometryError> {
        bundle::assemble(context.state())
    }

    // ----- Scalar conversion ----------------------------------------------

    /// Copy this graph into another scalar representation.
    ///
    /// Topology, names, ids, and port indices are identical; the two
    /// graphs share no mutable state.
    pub fn to_scalar_type<U: SimScalar>(&self) -> SceneGraph<U> {
        SceneGraph {
            model: self.model.to_scalar_type(),
            ports: self.ports.clone(),
        }
    }

    /// Convenience conversion to the autodiff scalar.
    pub fn to_autodiff(&self) -> SceneGraph<Dual> {
        self.to_scalar_type()
    }
}

impl<T: SimScalar> Default for SceneGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscene_math::RigidTransform;
    use geoscene_state::{FramePoseVector, PropertySet, Role, Shape};

    fn sphere(name: &str) -> GeometryInstance {
        GeometryInstance::new(name, RigidTransform::identity(), Shape::Sphere { radius: 0.5 })
    }

    fn frame(name: &str) -> GeometryFrame {
        GeometryFrame::new(name, RigidTransform::identity())
    }

    fn illustrate(graph: &mut SceneGraph<f64>, source: SourceId, geometry: GeometryId) {
        graph
            .assign_role(source, geometry, RoleProperties::Illustration(PropertySet::new()))
            .unwrap();
    }

    #[test]
    fn test_pose_port_per_source() {
        let mut graph = SceneGraph::<f64>::new();
        let s0 = graph.register_source(Some("first")).unwrap();
        let s1 = graph.register_source(Some("second")).unwrap();
        let p0 = graph.get_source_pose_port(s0).unwrap();
        let p1 = graph.get_source_pose_port(s1).unwrap();
        assert_eq!(p0.source_id(), s0);
        assert_eq!(p1.source_id(), s1);
        assert_ne!(p0.index(), p1.index());
        // Re-acquisition returns the same port.
        assert_eq!(graph.get_source_pose_port(s0).unwrap(), p0);
    }

    #[test]
    fn test_pose_port_unknown_source() {
        let graph = SceneGraph::<f64>::new();
        let result = graph.get_source_pose_port(SourceId::get_new_id());
        assert!(matches!(result, Err(GeometryError::UnregisteredSource(_))));
    }

    #[test]
    fn test_model_mutation_invisible_in_context() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f0 = graph.register_frame(source, None, frame("base")).unwrap();
        let context = graph.allocate_context();

        // Post-allocation model additions do not appear in the context.
        let f1 = graph.register_frame(source, None, frame("late")).unwrap();
        assert_eq!(graph.model_inspector().num_frames_for_source(source).unwrap(), 2);
        assert_eq!(context.inspector().num_frames_for_source(source).unwrap(), 1);
        assert!(context.inspector().frame_belongs_to_source(f0, source).unwrap());
        assert!(matches!(
            context.inspector().frame_belongs_to_source(f1, source),
            Err(GeometryError::UnknownFrame(_))
        ));
    }

    #[test]
    fn test_context_mutation_invisible_in_model() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f = graph.register_frame(source, None, frame("base")).unwrap();
        let mut context = graph.allocate_context();

        graph.remove_frame_in_context(&mut context, source, f).unwrap();
        let g = graph
            .register_anchored_geometry_in_context(&mut context, source, sphere("ground"))
            .unwrap();

        assert!(graph.model_inspector().frame_belongs_to_source(f, source).unwrap());
        assert_eq!(graph.model_inspector().num_geometries(), 0);
        assert_eq!(context.inspector().num_geometries(), 1);
        assert!(context.inspector().geometry_belongs_to_source(g, source).unwrap());
    }

    #[test]
    fn test_source_registered_after_allocation_has_no_context_slot() {
        let mut graph = SceneGraph::<f64>::new();
        graph.register_source(Some("early")).unwrap();
        let mut context = graph.allocate_context();

        let late = graph.register_source(Some("late")).unwrap();
        let port = graph.get_source_pose_port(late).unwrap();
        let result = context.fix_pose_input(port, FramePoseVector::new(late));
        assert!(matches!(result, Err(GeometryError::UnregisteredSource(_))));
    }

    #[test]
    fn test_full_pose_update_empty_graph() {
        let graph = SceneGraph::<f64>::new();
        let mut context = graph.allocate_context();
        assert!(graph.full_pose_update(&mut context).is_ok());
    }

    #[test]
    fn test_full_pose_update_anchored_only_source() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        graph.register_anchored_geometry(source, sphere("ground")).unwrap();
        let mut context = graph.allocate_context();
        // No frames, so no pose input is required.
        assert!(graph.full_pose_update(&mut context).is_ok());
    }

    #[test]
    fn test_full_pose_update_unconnected_port() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        graph.register_frame(source, None, frame("base")).unwrap();
        let mut context = graph.allocate_context();

        let result = graph.full_pose_update(&mut context);
        assert_eq!(result, Err(GeometryError::PortUnconnected(source)));
        let msg = GeometryError::PortUnconnected(source).to_string();
        assert!(
            msg.contains("has registered frames but does not provide pose values on the input port"),
            "{msg}"
        );
    }

    #[test]
    fn test_full_pose_update_mismatched_input() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        graph.register_frame(source, None, frame("base")).unwrap();
        graph.register_frame(source, None, frame("arm")).unwrap();
        let mut context = graph.allocate_context();

        // One pose short of the registered frame set.
        let mut poses = FramePoseVector::new(source);
        let first = graph
            .model_inspector()
            .frames_for_source(source)
            .unwrap()
            .next()
            .unwrap();
        poses.set_value(first, RigidTransform::identity());
        let port = graph.get_source_pose_port(source).unwrap();
        context.fix_pose_input(port, poses).unwrap();

        let result = graph.full_pose_update(&mut context);
        assert!(matches!(result, Err(GeometryError::PortMismatch { .. })));
    }

    #[test]
    fn test_full_pose_update_success() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f = graph.register_frame(source, None, frame("base")).unwrap();
        graph.register_geometry(source, f, sphere("ball")).unwrap();
        let mut context = graph.allocate_context();

        let mut poses = FramePoseVector::new(source);
        poses.set_value(f, RigidTransform::translation(0.0, 0.0, 2.0));
        let port = graph.get_source_pose_port(source).unwrap();
        context.fix_pose_input(port, poses).unwrap();
        graph.full_pose_update(&mut context).unwrap();

        let x_wf = context.inspector().pose_in_world(f).unwrap().clone();
        assert!((x_wf.translation.z - 2.0).abs() < 1e-12);
        // The model's poses are untouched.
        let x_wf_model = graph.model_inspector().pose_in_world(f).unwrap();
        assert!((x_wf_model.translation.z - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_post_allocation_context_frame_joins_pose_protocol() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f0 = graph.register_frame(source, None, frame("base")).unwrap();
        let mut context = graph.allocate_context();
        let f1 = graph
            .register_frame_in_context(&mut context, source, None, frame("extra"))
            .unwrap();

        let port = graph.get_source_pose_port(source).unwrap();
        // Supplying only the pre-allocation frame no longer suffices.
        let mut partial = FramePoseVector::new(source);
        partial.set_value(f0, RigidTransform::identity());
        context.fix_pose_input(port, partial).unwrap();
        assert!(matches!(
            graph.full_pose_update(&mut context),
            Err(GeometryError::PortMismatch { .. })
        ));

        let mut full = FramePoseVector::new(source);
        full.set_value(f0, RigidTransform::identity());
        full.set_value(f1, RigidTransform::translation(1.0, 0.0, 0.0));
        context.fix_pose_input(port, full).unwrap();
        graph.full_pose_update(&mut context).unwrap();
        let x_wf1 = context.inspector().pose_in_world(f1).unwrap();
        assert!((x_wf1.translation.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pose_bundle_inclusion_rules() {
        let mut graph = SceneGraph::<f64>::new();
        // A source with no frames contributes nothing.
        let bare = graph.register_source(Some("bare")).unwrap();
        graph.register_anchored_geometry(bare, sphere("ground")).unwrap();
        // A frame without illustration geometry contributes nothing.
        let plain = graph.register_source(Some("plain")).unwrap();
        let f_plain = graph.register_frame(plain, None, frame("silent")).unwrap();
        graph.register_geometry(plain, f_plain, sphere("ball")).unwrap();
        // A frame with illustration geometry contributes one entry.
        let shown = graph.register_source(Some("shown")).unwrap();
        let f_shown = graph
            .register_frame(shown, None, frame("visible").with_frame_group(7))
            .unwrap();
        let g = graph.register_geometry(shown, f_shown, sphere("ball")).unwrap();
        illustrate(&mut graph, shown, g);

        let bundle = graph.make_pose_bundle().unwrap();
        assert_eq!(bundle.num_poses(), 1);
        let entry = bundle.entry(0).unwrap();
        assert_eq!(entry.frame_id, f_shown);
        assert_eq!(entry.source_id, shown);
        assert_eq!(entry.name, "shown::visible");
        assert_eq!(entry.frame_group, 7);
        assert!(bundle.entry_for_frame(f_plain).is_none());
    }

    #[test]
    fn test_pose_bundle_order_and_context_poses() {
        let mut graph = SceneGraph::<f64>::new();
        let s0 = graph.register_source(Some("alpha")).unwrap();
        let s1 = graph.register_source(Some("beta")).unwrap();
        let f1 = graph.register_frame(s1, None, frame("b")).unwrap();
        let f0 = graph.register_frame(s0, None, frame("a")).unwrap();
        let g0 = graph.register_geometry(s0, f0, sphere("ball")).unwrap();
        let g1 = graph.register_geometry(s1, f1, sphere("ball")).unwrap();
        illustrate(&mut graph, s0, g0);
        illustrate(&mut graph, s1, g1);

        let mut context = graph.allocate_context();
        let mut poses = FramePoseVector::new(s0);
        poses.set_value(f0, RigidTransform::translation(3.0, 0.0, 0.0));
        context
            .fix_pose_input(graph.get_source_pose_port(s0).unwrap(), poses)
            .unwrap();
        let mut poses = FramePoseVector::new(s1);
        poses.set_value(f1, RigidTransform::translation(0.0, 4.0, 0.0));
        context
            .fix_pose_input(graph.get_source_pose_port(s1).unwrap(), poses)
            .unwrap();
        graph.full_pose_update(&mut context).unwrap();

        let bundle = graph.calc_pose_bundle(&context).unwrap();
        assert_eq!(bundle.num_poses(), 2);
        // Source registration order wins over frame registration order.
        assert_eq!(bundle.entry(0).unwrap().source_id, s0);
        assert_eq!(bundle.entry(1).unwrap().source_id, s1);
        assert!((bundle.entry(0).unwrap().pose.translation.x - 3.0).abs() < 1e-12);
        assert!((bundle.entry(1).unwrap().pose.translation.y - 4.0).abs() < 1e-12);
        // Velocities are zero in scope.
        assert_eq!(bundle.entry(0).unwrap().velocity.linear.norm(), 0.0);
    }

    #[test]
    fn test_transmogrify_preserves_topology_and_ports() {
        let mut graph = SceneGraph::<f64>::new();
        let s0 = graph.register_source(Some("alpha")).unwrap();
        let s1 = graph.register_source(Some("beta")).unwrap();
        let f = graph.register_frame(s0, None, frame("base")).unwrap();
        let g = graph.register_geometry(s0, f, sphere("ball")).unwrap();

        let ad_graph = graph.to_autodiff();
        let inspector = ad_graph.model_inspector();
        assert_eq!(inspector.num_sources(), 2);
        assert_eq!(inspector.source_name(s1).unwrap(), "beta");
        assert!(inspector.frame_belongs_to_source(f, s0).unwrap());
        assert!(inspector.geometry_belongs_to_source(g, s0).unwrap());
        assert_eq!(
            ad_graph.get_source_pose_port(s0).unwrap().index(),
            graph.get_source_pose_port(s0).unwrap().index()
        );
        assert_eq!(
            ad_graph.get_source_pose_port(s1).unwrap().index(),
            graph.get_source_pose_port(s1).unwrap().index()
        );
    }

    #[test]
    fn test_transmogrified_context_value_transfer() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f = graph.register_frame(source, None, frame("base")).unwrap();
        let mut context = graph.allocate_context();
        let mut poses = FramePoseVector::new(source);
        poses.set_value(f, RigidTransform::translation(1.5, 0.0, 0.0));
        context
            .fix_pose_input(graph.get_source_pose_port(source).unwrap(), poses)
            .unwrap();
        graph.full_pose_update(&mut context).unwrap();

        let ad_graph = graph.to_autodiff();
        let mut ad_context = ad_graph.allocate_context();
        ad_context.set_state_from(&context);
        let x_wf = ad_context.inspector().pose_in_world(f).unwrap().clone();
        assert_eq!(x_wf.translation.x.value, 1.5);
        assert_eq!(x_wf.translation.x.derivative, 0.0);
        // Fixed inputs carried over, so the update protocol still runs.
        assert!(ad_graph.full_pose_update(&mut ad_context).is_ok());
    }

    #[test]
    fn test_collision_filters_in_context_only() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f = graph.register_frame(source, None, frame("base")).unwrap();
        let g0 = graph.register_geometry(source, f, sphere("a")).unwrap();
        let g1 = graph.register_geometry(source, f, sphere("b")).unwrap();
        let mut context = graph.allocate_context();

        graph
            .exclude_collisions_within_in_context(&mut context, &GeometrySet::from(f))
            .unwrap();
        assert!(context.inspector().collision_filtered(g0, g1).unwrap());
        assert!(!graph.model_inspector().collision_filtered(g0, g1).unwrap());
    }

    #[test]
    fn test_name_lookup_through_inspector() {
        let mut graph = SceneGraph::<f64>::new();
        let source = graph.register_source(None).unwrap();
        let f = graph.register_frame(source, None, frame("base")).unwrap();
        let g = graph.register_geometry(source, f, sphere("ball")).unwrap();
        assert_eq!(
            graph
                .model_inspector()
                .get_geometry_id_by_name(f, Role::Unassigned, "ball")
                .unwrap(),
            g
        );
        illustrate(&mut graph, source, g);
        assert_eq!(
            graph
                .model_inspector()
                .get_geometry_id_by_name(f, Role::Illustration, "ball")
                .unwrap(),
            g
        );
    }
}
