//! A mixed set of frames and geometries for bulk operations.

use std::collections::BTreeSet;

use geoscene_ids::{FrameId, GeometryId};

/// A collection of frame and geometry ids.
///
/// Naming a frame means "every geometry currently registered on that
/// frame". The set does not validate its members; the operation that
/// consumes it does.
#[derive(Debug, Default, Clone)]
pub struct GeometrySet {
    frames: BTreeSet<FrameId>,
    geometries: BTreeSet<GeometryId>,
}

impl GeometrySet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame to the set.
    pub fn add_frame(&mut self, frame: FrameId) {
        self.frames.insert(frame);
    }

    /// Add a geometry to the set.
    pub fn add_geometry(&mut self, geometry: GeometryId) {
        self.geometries.insert(geometry);
    }

    /// The frames in the set.
    pub fn frames(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.frames.iter().copied()
    }

    /// The explicitly named geometries in the set.
    pub fn geometries(&self) -> impl Iterator<Item = GeometryId> + '_ {
        self.geometries.iter().copied()
    }
}

impl From<FrameId> for GeometrySet {
    fn from(frame: FrameId) -> Self {
        let mut set = Self::new();
        set.add_frame(frame);
        set
    }
}

impl From<GeometryId> for GeometrySet {
    fn from(geometry: GeometryId) -> Self {
        let mut set = Self::new();
        set.add_geometry(geometry);
        set
    }
}

impl From<&[FrameId]> for GeometrySet {
    fn from(frames: &[FrameId]) -> Self {
        let mut set = Self::new();
        for f in frames {
            set.add_frame(*f);
        }
        set
    }
}

impl From<&[GeometryId]> for GeometrySet {
    fn from(geometries: &[GeometryId]) -> Self {
        let mut set = Self::new();
        for g in geometries {
            set.add_geometry(*g);
        }
        set
    }
}
