//! Trigger component

/// Gameplay trigger volume
///
/// The type string is carried verbatim from the map; deciding what a
/// `"death"` or `"win"` trigger does is up to gameplay code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trigger {
    /// Trigger type as written in the map
    pub trigger_type: String,
}

impl Trigger {
    /// Create a trigger of the given type
    pub fn new(trigger_type: impl Into<String>) -> Self {
        Self {
            trigger_type: trigger_type.into(),
        }
    }
}
