#![warn(missing_docs)]

//! Strongly-typed identifiers for the geoscene registry.
//!
//! Each identifier kind ([`SourceId`], [`FrameId`], [`GeometryId`]) is a
//! distinct newtype over a `u64` token drawn from its own global
//! monotonically-increasing counter. Tokens are never reused, and mixing
//! kinds is a type error.
//!
//! "Valid" (nonzero token) is a property of the id value itself;
//! "registered" is a stateful property checked against a specific
//! `GeometryState` instance and is not this crate's concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reserved token for the world frame. Allocators for [`FrameId`] start
/// above it so no dynamically created frame can collide with it.
const WORLD_FRAME_TOKEN: u64 = 1;

macro_rules! unique_id {
    ($(#[$meta:meta])* $name:ident, $counter:ident, $first:expr) => {
        static $counter: AtomicU64 = AtomicU64::new($first);

        $(#[$meta])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Allocate the next globally unique id of this kind.
            pub fn get_new_id() -> Self {
                Self($counter.fetch_add(1, Ordering::Relaxed))
            }

            /// Whether this id carries a real token. Default-constructed
            /// ids hold the zero token and are invalid.
            pub fn is_valid(&self) -> bool {
                self.0 != 0
            }

            /// The raw token value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

unique_id!(
    /// Identifier for a registered geometry source (a producer owning a
    /// disjoint set of frames and geometries).
    SourceId,
    NEXT_SOURCE_ID,
    1
);

unique_id!(
    /// Identifier for a movable coordinate frame.
    FrameId,
    NEXT_FRAME_ID,
    WORLD_FRAME_TOKEN + 1
);

unique_id!(
    /// Identifier for a registered geometry instance.
    GeometryId,
    NEXT_GEOMETRY_ID,
    1
);

impl FrameId {
    /// The distinguished world frame id. Valid, owned by no source,
    /// present in every geometry state from construction, never removable.
    pub const fn world() -> Self {
        Self(WORLD_FRAME_TOKEN)
    }
}
