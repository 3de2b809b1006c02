//! Error type for registry operations.

use geoscene_ids::{FrameId, GeometryId, SourceId};
use thiserror::Error;

use crate::properties::Role;

/// Errors that can occur while querying or mutating a [`crate::GeometryState`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The named source has never been registered.
    #[error("source {0} is not registered")]
    UnregisteredSource(SourceId),

    /// A frame id was used that is not registered, or that the acting
    /// source cannot see because another source owns it.
    #[error("referenced frame {0} has not been registered")]
    UnknownFrame(FrameId),

    /// A geometry id was used that is not registered, or that the acting
    /// source cannot see because another source owns it.
    #[error("referenced geometry {0} has not been registered")]
    UnknownGeometry(GeometryId),

    /// An operation referenced an item the acting source does not own.
    #[error("source {source_id} does not own {what}")]
    Ownership {
        /// The source that attempted the operation.
        source_id: SourceId,
        /// A description of the item it tried to touch.
        what: String,
    },

    /// A name collided with one already taken in the same scope.
    #[error("the name \"{name}\" is already taken {scope}")]
    DuplicateName {
        /// The offending name.
        name: String,
        /// Where the collision happened, e.g. "by a geometry on frame 3".
        scope: String,
    },

    /// A source with registered frames supplied no pose values.
    #[error("source {0} has registered frames but does not provide pose values on the input port")]
    PortUnconnected(SourceId),

    /// The poses supplied on a port did not match the source's frames.
    #[error("pose data for source {source_id} is invalid: {detail}")]
    PortMismatch {
        /// The source whose poses were rejected.
        source_id: SourceId,
        /// What was wrong with the supplied set of poses.
        detail: String,
    },

    /// A name lookup matched no geometry.
    #[error("frame {frame} has no geometry with the role {role:?} and the canonical name \"{name}\"")]
    GeometryNotFound {
        /// The frame that was searched.
        frame: FrameId,
        /// The role filter applied to the search.
        role: Role,
        /// The canonical name that was looked up.
        name: String,
    },

    /// A name lookup matched more than one geometry.
    #[error("frame {frame} has multiple geometries with the role {role:?} and the canonical name \"{name}\"")]
    AmbiguousName {
        /// The frame that was searched.
        frame: FrameId,
        /// The role filter applied to the search.
        role: Role,
        /// The canonical name that was looked up.
        name: String,
    },

    /// A supplied parameter was structurally invalid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let id = GeometryId::get_new_id();
        let msg = GeometryError::UnknownGeometry(id).to_string();
        assert!(msg.contains("has not been registered"), "{msg}");

        let source = SourceId::get_new_id();
        let msg = GeometryError::PortUnconnected(source).to_string();
        assert!(
            msg.contains("does not provide pose values on the input port"),
            "{msg}"
        );
    }
}
