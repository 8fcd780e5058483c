//! Pack value objects.

use serde::{Deserialize, Serialize};

/// Unique identifier for a pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackId(pub u32);

impl PackId {
    /// Create a new pack ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pack({})", self.0)
    }
}

/// A released card pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    /// Unique identifier.
    pub id: PackId,

    /// Display name.
    pub name: String,

    /// Release position, used as the pack sort rank.
    pub position: u32,
}

impl Pack {
    /// Create a new pack.
    #[must_use]
    pub fn new(id: PackId, name: impl Into<String>, position: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack() {
        let pack = Pack::new(PackId::new(3), "The Dunwich Legacy", 2);
        assert_eq!(pack.id.raw(), 3);
        assert_eq!(pack.name, "The Dunwich Legacy");
        assert_eq!(pack.position, 2);
        assert_eq!(format!("{}", pack.id), "Pack(3)");
    }
}
