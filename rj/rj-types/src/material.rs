//! Material slot type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A material slot.
///
/// Only the name is exported; faces reference slots by position via their
/// `material_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialSlot {
    /// Material name, as authored.
    pub name: String,
}

impl MaterialSlot {
    /// Create a slot with the given name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
