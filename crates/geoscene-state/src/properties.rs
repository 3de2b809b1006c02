//! Roles and the property sets that accompany them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    /// A boolean flag.
    Bool(bool),
    /// A double-precision number.
    F64(f64),
    /// A signed integer.
    I64(i64),
    /// A string.
    Str(String),
    /// A 3-vector of doubles.
    Vector3([f64; 3]),
    /// A color with alpha, each channel in `[0, 1]`.
    Rgba([f64; 4]),
}

/// A bag of named property values, ordered by name.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySet(BTreeMap<String, PropertyValue>);

impl PropertySet {
    /// An empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, name: &str, value: PropertyValue) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or overwrite a property.
    pub fn set(&mut self, name: &str, value: PropertyValue) {
        self.0.insert(name.to_string(), value);
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Whether a property with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The roles a geometry can play in downstream consumers.
///
/// A geometry holds at most one property set per role; a geometry with no
/// assigned role is reported as [`Role::Unassigned`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// No role assigned.
    #[default]
    Unassigned,
    /// Participates in visualization.
    Illustration,
    /// Participates in proximity queries and collision filtering.
    Proximity,
    /// Participates in rendering for perception sensors.
    Perception,
}

/// A role together with the properties to assign with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoleProperties {
    /// Assign the illustration role.
    Illustration(PropertySet),
    /// Assign the proximity role.
    Proximity(PropertySet),
    /// Assign the perception role.
    Perception(PropertySet),
}

impl RoleProperties {
    /// The role this assignment targets.
    pub fn role(&self) -> Role {
        match self {
            RoleProperties::Illustration(_) => Role::Illustration,
            RoleProperties::Proximity(_) => Role::Proximity,
            RoleProperties::Perception(_) => Role::Perception,
        }
    }

    /// Unwrap into the property set.
    pub fn into_properties(self) -> PropertySet {
        match self {
            RoleProperties::Illustration(p)
            | RoleProperties::Proximity(p)
            | RoleProperties::Perception(p) => p,
        }
    }
}
