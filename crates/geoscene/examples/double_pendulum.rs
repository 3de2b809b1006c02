//! Build a double pendulum scene, drive its poses, and print the bundle.
//!
//! Run with `RUST_LOG=debug cargo run --example double_pendulum` to see
//! the registry's mutation log.

use geoscene::{
    FramePoseVector, GeometryError, GeometryFrame, GeometryInstance, PropertySet, PropertyValue,
    RigidTransform, RoleProperties, SceneGraph, Shape,
};

fn link_shape() -> Shape {
    Shape::Cylinder {
        radius: 0.02,
        length: 1.0,
    }
}

fn link_color(rgba: [f64; 4]) -> RoleProperties {
    RoleProperties::Illustration(
        PropertySet::new().with("phong/diffuse", PropertyValue::Rgba(rgba)),
    )
}

fn main() -> Result<(), GeometryError> {
    env_logger::init();

    let mut graph = SceneGraph::<f64>::new();
    let source = graph.register_source(Some("pendulum"))?;

    // The ground is anchored to the world and only illustrated.
    let ground = graph.register_anchored_geometry(
        source,
        GeometryInstance::new("ground", RigidTransform::identity(), Shape::HalfSpace),
    )?;
    graph.assign_role(source, ground, link_color([0.4, 0.4, 0.4, 1.0]))?;

    // Two links: the lower frame hangs off the upper one.
    let upper = graph.register_frame(
        source,
        None,
        GeometryFrame::new("upper", RigidTransform::identity()),
    )?;
    let lower = graph.register_frame(
        source,
        Some(upper),
        GeometryFrame::new("lower", RigidTransform::translation(0.0, 0.0, -1.0)),
    )?;
    for (frame, name, color) in [
        (upper, "upper_link", [0.9, 0.2, 0.2, 1.0]),
        (lower, "lower_link", [0.2, 0.2, 0.9, 1.0]),
    ] {
        let geometry = graph.register_geometry(
            source,
            frame,
            GeometryInstance::new(
                name,
                RigidTransform::translation(0.0, 0.0, -0.5),
                link_shape(),
            ),
        )?;
        graph.assign_role(source, geometry, link_color(color))?;
    }

    let mut context = graph.allocate_context();
    let port = graph.get_source_pose_port(source)?;

    // Swing both joints through a few steps of a canned trajectory.
    for step in 0..5 {
        let t = step as f64 * 0.1;
        let theta1 = 0.5 * t.sin();
        let theta2 = 0.8 * (2.0 * t).sin();

        let mut poses = FramePoseVector::new(source);
        poses.set_value(upper, RigidTransform::rotation_x(theta1));
        poses.set_value(
            lower,
            RigidTransform::translation(0.0, 0.0, -1.0).then(&RigidTransform::rotation_x(theta2)),
        );
        context.fix_pose_input(port, poses)?;
        graph.full_pose_update(&mut context)?;

        let bundle = graph.calc_pose_bundle(&context)?;
        println!("step {step} (theta1 = {theta1:.3}, theta2 = {theta2:.3}):");
        for entry in bundle.entries() {
            let p = &entry.pose.translation;
            println!(
                "  {:<18} group {} at ({:+.3}, {:+.3}, {:+.3})",
                entry.name, entry.frame_group, p.x, p.y, p.z
            );
        }
    }

    Ok(())
}
