use chrono::{DateTime, Utc};
use serde::Serialize;

/// A loaded, renderable view produced by fetching its code chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Component name, e.g. `TimingEngineView`.
    pub component: String,
    /// Resolved chunk location the view was loaded from.
    pub chunk: String,
    pub loaded_at: DateTime<Utc>,
}

impl View {
    pub fn new(component: impl Into<String>, chunk: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            chunk: chunk.into(),
            loaded_at: Utc::now(),
        }
    }
}
