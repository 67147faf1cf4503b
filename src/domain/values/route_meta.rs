use crate::domain::values::icon::Icon;
use serde::Serialize;

/// Display metadata attached to a route: menu/page title and menu icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub title: String,
    pub icon: Icon,
}

impl RouteMeta {
    pub fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }
}
