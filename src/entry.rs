use serde::{Deserialize, Serialize};

/// One todo item: a unique name plus a priority label.
///
/// The name is the key every update and delete resolves against; the
/// priority is a free-form label (the UI offers High/Medium/Low).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub priority: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: priority.into(),
        }
    }
}
