pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::bootstrap::{bootstrap, MountedApp, MOUNT_SELECTOR};
use crate::application::router::Navigation;
use crate::application::title_guard::PRODUCT_NAME;
use crate::config::ClientConfig;
use crate::domain::entities::document::Document;
use crate::domain::error::{BootstrapError, NavigationError};
use crate::domain::ports::response_hook::ResponseHook;
use crate::domain::ports::view_source::ViewSource;
use crate::infrastructure::api::client::ApiClient;
use crate::infrastructure::build::alias::AliasTable;
use crate::infrastructure::views::bundled::BundledViews;
use serde::Serialize;
use std::sync::Arc;

/// One row of the navigation menu.
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub path: String,
    pub name: String,
    pub title: String,
    pub icon: String,
}

/// The assembled client: API wrapper plus the mounted application shell.
pub struct Trinity {
    api: ApiClient,
    app: MountedApp,
}

impl Trinity {
    pub fn new(config: ClientConfig) -> Result<Self, BootstrapError> {
        let views: Arc<dyn ViewSource> = Arc::new(BundledViews::new(AliasTable::default()));
        Self::with_parts(config, views, None)
    }

    pub fn with_parts(
        config: ClientConfig,
        views: Arc<dyn ViewSource>,
        hook: Option<Arc<dyn ResponseHook>>,
    ) -> Result<Self, BootstrapError> {
        let mut api = ApiClient::new(config)?;
        if let Some(hook) = hook {
            api = api.with_hook(hook);
        }
        let document = Document::new(PRODUCT_NAME).with_mount_point(MOUNT_SELECTOR);
        let app = bootstrap(views, document)?;
        tracing::debug!(base_url = api.base_url(), "client ready");
        Ok(Self { api, app })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn app(&self) -> &MountedApp {
        &self.app
    }

    pub async fn navigate(&mut self, path: &str) -> Result<Navigation, NavigationError> {
        self.app.navigate(path).await
    }

    pub fn title(&self) -> &str {
        self.app.document().title()
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        let Some(router) = self.app.router() else {
            return Vec::new();
        };
        router
            .table()
            .leaves()
            .into_iter()
            .map(|(path, record)| MenuEntry {
                path,
                name: record.name.clone().unwrap_or_default(),
                title: record.meta.as_ref().map(|m| m.title.clone()).unwrap_or_default(),
                icon: record.meta.as_ref().map(|m| m.icon.to_string()).unwrap_or_default(),
            })
            .collect()
    }
}
