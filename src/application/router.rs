use crate::application::lazy_view::LazyView;
use crate::application::route_table::{normalize_path, RouteRecord, RouteTable};
use crate::application::title_guard::TitleGuard;
use crate::domain::entities::document::Document;
use crate::domain::entities::navigation::{NavigationEvent, RouteLocation};
use crate::domain::entities::view::View;
use crate::domain::error::NavigationError;
use crate::domain::ports::navigation_guard::{GuardDecision, NavigationGuard};
use serde::Serialize;
use std::sync::Arc;

const MAX_REDIRECTS: usize = 8;

/// A path resolved against the table, redirects applied.
#[derive(Debug)]
pub struct ResolvedRoute<'a> {
    pub location: RouteLocation,
    /// Outermost layout first, matched record last.
    pub chain: Vec<&'a RouteRecord>,
}

/// Outcome of a completed navigation.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub location: RouteLocation,
    /// Views for each level of the matched chain, layout first.
    pub views: Vec<Arc<View>>,
}

impl Navigation {
    /// The innermost view, i.e. the page itself.
    pub fn page(&self) -> Option<&View> {
        self.views.last().map(Arc::as_ref)
    }
}

pub struct Router {
    table: RouteTable,
    guards: Vec<Box<dyn NavigationGuard>>,
    current: Option<RouteLocation>,
    history: Vec<String>,
}

impl Router {
    /// Router without any guards.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            guards: Vec::new(),
            current: None,
            history: Vec::new(),
        }
    }

    /// Router with the document-title guard installed.
    pub fn with_default_guards(table: RouteTable) -> Self {
        let mut router = Self::new(table);
        router.before_each(TitleGuard);
        router
    }

    /// Register a global before-guard. Guards run in registration order.
    pub fn before_each(&mut self, guard: impl NavigationGuard + 'static) {
        self.guards.push(Box::new(guard));
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> Option<&RouteLocation> {
        self.current.as_ref()
    }

    /// Effective paths of completed navigations, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn reverse(&self, name: &str) -> Option<String> {
        self.table.path_of(name)
    }

    /// Match `path` and follow redirects, without navigating.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute<'_>, NavigationError> {
        let mut target = normalize_path(path);
        for _ in 0..=MAX_REDIRECTS {
            let chain = self
                .table
                .match_path(&target)
                .ok_or_else(|| NavigationError::NoMatch(target.clone()))?;
            let Some(last) = chain.last().copied() else {
                return Err(NavigationError::NoMatch(target));
            };
            if let Some(redirect) = &last.redirect {
                tracing::debug!(from = %target, to = %redirect, "redirect");
                target = normalize_path(redirect);
                continue;
            }
            return Ok(ResolvedRoute {
                location: RouteLocation {
                    path: target,
                    name: last.name.clone(),
                    meta: last.meta.clone(),
                },
                chain,
            });
        }
        Err(NavigationError::RedirectLoop(normalize_path(path)))
    }

    /// Navigate to `path`: resolve, run guards against `document`, then load
    /// the views of the matched chain. The current location only changes when
    /// every step succeeds.
    pub async fn push(&mut self, path: &str, document: &mut Document) -> Result<Navigation, NavigationError> {
        let (location, loaders) = {
            let resolved = self.resolve(path)?;
            let loaders: Vec<LazyView> = resolved
                .chain
                .iter()
                .filter_map(|r| r.component.clone())
                .collect();
            (resolved.location, loaders)
        };

        let event = NavigationEvent {
            to: &location,
            from: self.current.as_ref(),
        };
        for guard in &self.guards {
            if let GuardDecision::Cancel(reason) = guard.before_each(&event, document) {
                tracing::info!(path = %location.path, %reason, "navigation cancelled");
                return Err(NavigationError::Cancelled {
                    path: location.path.clone(),
                    reason,
                });
            }
        }

        let mut views = Vec::with_capacity(loaders.len());
        for loader in &loaders {
            match loader.load().await {
                Ok(view) => views.push(view),
                Err(e) => {
                    tracing::warn!(path = %location.path, error = %e, "view load failed");
                    return Err(e);
                }
            }
        }

        tracing::info!(path = %location.path, title = document.title(), "navigated");
        self.history.push(location.path.clone());
        self.current = Some(location.clone());
        Ok(Navigation { location, views })
    }
}
