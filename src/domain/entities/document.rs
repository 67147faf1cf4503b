use crate::domain::error::MountError;
use std::collections::BTreeMap;

/// The host document: its title and the element ids an application can be
/// attached to. Passed explicitly to whatever needs to mutate it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    title: String,
    /// element id -> name of the mounted application root, if any
    mount_points: BTreeMap<String, Option<String>>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mount_points: BTreeMap::new(),
        }
    }

    /// Declare an element that can host an application (`app` or `#app`).
    pub fn with_mount_point(mut self, id: &str) -> Self {
        let id = id.strip_prefix('#').unwrap_or(id);
        self.mount_points.insert(id.to_string(), None);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Attach `root` to the element named by `selector` (`#app` or `app`).
    pub fn attach(&mut self, selector: &str, root: &str) -> Result<(), MountError> {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        match self.mount_points.get_mut(id) {
            None => Err(MountError::MissingMountPoint(selector.to_string())),
            Some(Some(_)) => Err(MountError::AlreadyMounted(selector.to_string())),
            Some(slot) => {
                *slot = Some(root.to_string());
                Ok(())
            }
        }
    }

    pub fn mounted(&self, selector: &str) -> Option<&str> {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        self.mount_points.get(id).and_then(|m| m.as_deref())
    }
}
