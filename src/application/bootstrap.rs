//! Application assembly: plugins, global components, mount.

use crate::application::route_table::RouteTable;
use crate::application::router::{Navigation, Router};
use crate::application::store::Store;
use crate::application::ui_library::UiLibrary;
use crate::domain::entities::document::Document;
use crate::domain::error::{BootstrapError, MountError, NavigationError};
use crate::domain::ports::view_source::ViewSource;
use crate::domain::values::icon::Icon;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const ROOT_COMPONENT: &str = "App";
pub const MOUNT_SELECTOR: &str = "#app";

/// What a globally registered component name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "lowercase")]
pub enum ComponentKind {
    Router,
    Library(&'static str),
    Icon(Icon),
}

/// Global component registry, addressable by name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentRegistry {
    entries: BTreeMap<String, ComponentKind>,
}

impl ComponentRegistry {
    pub fn register(&mut self, name: impl Into<String>, kind: ComponentKind) -> Result<(), BootstrapError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(BootstrapError::DuplicateComponent(name));
        }
        self.entries.insert(name, kind);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ComponentKind> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Something installable into the application before it is mounted.
pub trait Plugin {
    fn name(&self) -> &'static str;
    fn install(self, app: &mut AppBuilder) -> Result<(), BootstrapError>;
}

impl Plugin for Arc<Store> {
    fn name(&self) -> &'static str {
        "store"
    }

    fn install(self, app: &mut AppBuilder) -> Result<(), BootstrapError> {
        app.store = Some(self);
        Ok(())
    }
}

impl Plugin for Router {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(self, app: &mut AppBuilder) -> Result<(), BootstrapError> {
        self.table().validate()?;
        app.component("RouterView", ComponentKind::Router)?;
        app.component("RouterLink", ComponentKind::Router)?;
        app.router = Some(self);
        Ok(())
    }
}

impl Plugin for UiLibrary {
    fn name(&self) -> &'static str {
        "ui"
    }

    fn install(self, app: &mut AppBuilder) -> Result<(), BootstrapError> {
        for name in self.components() {
            app.component(*name, ComponentKind::Library(*name))?;
        }
        Ok(())
    }
}

/// Application under construction. Consumed by [`AppBuilder::mount`], so
/// nothing can be installed after mounting.
pub struct AppBuilder {
    root: String,
    store: Option<Arc<Store>>,
    router: Option<Router>,
    components: ComponentRegistry,
    plugins: Vec<&'static str>,
}

impl AppBuilder {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            store: None,
            router: None,
            components: ComponentRegistry::default(),
            plugins: Vec::new(),
        }
    }

    pub fn use_plugin<P: Plugin>(mut self, plugin: P) -> Result<Self, BootstrapError> {
        let name = plugin.name();
        if self.plugins.contains(&name) {
            return Err(BootstrapError::DuplicatePlugin(name));
        }
        plugin.install(&mut self)?;
        self.plugins.push(name);
        tracing::debug!(plugin = name, "plugin installed");
        Ok(self)
    }

    pub fn component(&mut self, name: impl Into<String>, kind: ComponentKind) -> Result<(), BootstrapError> {
        self.components.register(name, kind)
    }

    /// Register every icon as a global component under its own name.
    pub fn register_icons(mut self, icons: &[Icon]) -> Result<Self, BootstrapError> {
        for icon in icons {
            self.component(icon.name(), ComponentKind::Icon(*icon))?;
        }
        Ok(self)
    }

    pub fn installed_plugins(&self) -> &[&'static str] {
        &self.plugins
    }

    /// Attach to `selector` in `document`. Always the last step.
    pub fn mount(self, mut document: Document, selector: &str) -> Result<MountedApp, MountError> {
        document.attach(selector, &self.root)?;
        tracing::info!(
            root = %self.root,
            selector,
            plugins = ?self.plugins,
            components = self.components.len(),
            "application mounted"
        );
        Ok(MountedApp {
            root: self.root,
            selector: selector.to_string(),
            document,
            store: self.store.unwrap_or_default(),
            router: self.router,
            components: self.components,
        })
    }
}

/// A mounted application. Owns the document it was attached to and passes it
/// to the router on every navigation.
pub struct MountedApp {
    root: String,
    selector: String,
    document: Document,
    store: Arc<Store>,
    router: Option<Router>,
    components: ComponentRegistry,
}

impl MountedApp {
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub async fn navigate(&mut self, path: &str) -> Result<Navigation, NavigationError> {
        let router = self
            .router
            .as_mut()
            .ok_or(NavigationError::RouterNotInstalled)?;
        router.push(path, &mut self.document).await
    }
}

/// Standard startup: store, router, UI library, icons, then mount on `#app`.
pub fn bootstrap(source: Arc<dyn ViewSource>, document: Document) -> Result<MountedApp, BootstrapError> {
    let router = Router::with_default_guards(RouteTable::standard(source));
    let app = AppBuilder::new(ROOT_COMPONENT)
        .use_plugin(Arc::new(Store::new()))?
        .use_plugin(router)?
        .use_plugin(UiLibrary::element())?
        .register_icons(&Icon::ALL)?
        .mount(document, MOUNT_SELECTOR)?;
    Ok(app)
}
