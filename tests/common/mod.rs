//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use trinity_quant::config::ClientConfig;
use trinity_quant::domain::entities::view::View;
use trinity_quant::domain::error::ApiError;
use trinity_quant::domain::ports::response_hook::ResponseHook;
use trinity_quant::domain::ports::view_source::ViewSource;
use trinity_quant::infrastructure::api::client::ApiClient;
use trinity_quant::infrastructure::views::bundled::BundledViews;
use trinity_quant::Trinity;

pub const PRODUCT: &str = "三位一体量化助手";

pub fn client_for(base_url: &str) -> ApiClient {
    let config = ClientConfig::default().with_base_url(base_url).unwrap();
    ApiClient::new(config).unwrap()
}

/// Bundled views that count fetches per specifier and can fail on demand.
#[derive(Default)]
pub struct CountingViews {
    inner: BundledViews,
    calls: Mutex<HashMap<String, usize>>,
    fail_next: Mutex<HashSet<String>>,
}

impl CountingViews {
    pub fn calls(&self, specifier: &str) -> usize {
        self.calls.lock().unwrap().get(specifier).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Make the next fetch of `specifier` fail.
    pub fn fail_next(&self, specifier: &str) {
        self.fail_next.lock().unwrap().insert(specifier.to_string());
    }
}

#[async_trait]
impl ViewSource for CountingViews {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch(&self, specifier: &str) -> Result<View, String> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(specifier.to_string())
            .or_default() += 1;
        if self.fail_next.lock().unwrap().remove(specifier) {
            return Err("chunk request failed".into());
        }
        self.inner.fetch(specifier).await
    }
}

/// Hook that records every error it sees.
#[derive(Default)]
pub struct RecordingHook {
    seen: Mutex<Vec<ApiError>>,
}

impl RecordingHook {
    pub fn seen(&self) -> Vec<ApiError> {
        self.seen.lock().unwrap().clone()
    }
}

impl ResponseHook for RecordingHook {
    fn on_error(&self, error: ApiError) -> ApiError {
        self.seen.lock().unwrap().push(error.clone());
        error
    }
}

pub fn setup() -> (Trinity, Arc<CountingViews>) {
    let views = Arc::new(CountingViews::default());
    let trinity = Trinity::with_parts(ClientConfig::default(), views.clone(), None).unwrap();
    (trinity, views)
}
