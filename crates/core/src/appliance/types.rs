use serde::{Deserialize, Serialize};

/// A controllable remote device exposed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appliance {
    /// Stable identifier, used as a URL path segment.
    pub id: String,
    /// Display name shown to the user.
    pub name: String,
}

impl Appliance {
    /// Creates a new appliance with the given identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A named action performable on a specific appliance.
///
/// An operation belongs to exactly one appliance; the relationship is
/// expressed by the URL path it is fetched and posted under, not by an
/// embedded reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Stable identifier, used as a URL path segment.
    pub id: String,
    /// Display name shown to the user.
    pub name: String,
}

impl Operation {
    /// Creates a new operation with the given identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
