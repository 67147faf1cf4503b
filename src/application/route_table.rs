//! Static route tree: the root layout route owns the engine pages.

use crate::application::lazy_view::LazyView;
use crate::domain::error::BootstrapError;
use crate::domain::ports::view_source::ViewSource;
use crate::domain::values::icon::Icon;
use crate::domain::values::route_meta::RouteMeta;
use crate::infrastructure::views::bundled::{
    APP_LAYOUT, BACKTESTING_VIEW, DASHBOARD_VIEW, EXIT_VIEW, SELECTION_VIEW, TIMING_VIEW,
};
use std::collections::HashSet;
use std::sync::Arc;

pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// Absolute for top-level records, relative to the parent for children.
    pub path: String,
    pub name: Option<String>,
    pub component: Option<LazyView>,
    pub redirect: Option<String>,
    pub meta: Option<RouteMeta>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn layout(path: impl Into<String>, component: LazyView) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: Some(component),
            redirect: None,
            meta: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(path: impl Into<String>, name: impl Into<String>, component: LazyView, meta: RouteMeta) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            component: Some(component),
            redirect: None,
            meta: Some(meta),
            children: Vec::new(),
        }
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Normalise a requested path for matching: drop query and fragment, ensure a
/// leading slash, drop trailing slashes (except for the root).
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        return normalize_path(child);
    }
    normalize_path(&format!("{}/{}", parent.trim_end_matches('/'), child))
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteRecord>) -> Result<Self, BootstrapError> {
        let table = Self { routes };
        table.validate()?;
        Ok(table)
    }

    /// The application's routes, with views loaded from `source`.
    pub fn standard(source: Arc<dyn ViewSource>) -> Self {
        let view = |specifier: &str| LazyView::new(specifier, Arc::clone(&source));
        Self {
            routes: vec![RouteRecord::layout("/", view(APP_LAYOUT))
                .redirect_to(DASHBOARD_PATH)
                .with_children(vec![
                    RouteRecord::leaf(
                        "dashboard",
                        "Dashboard",
                        view(DASHBOARD_VIEW),
                        RouteMeta::new("主仪表盘", Icon::House),
                    ),
                    RouteRecord::leaf(
                        "selection-engine",
                        "SelectionEngine",
                        view(SELECTION_VIEW),
                        RouteMeta::new("智能灯塔 · 选品", Icon::Aim),
                    ),
                    RouteRecord::leaf(
                        "timing-engine",
                        "TimingEngine",
                        view(TIMING_VIEW),
                        RouteMeta::new("黄金窗口 · 择时", Icon::Opportunity),
                    ),
                    RouteRecord::leaf(
                        "exit-engine",
                        "ExitEngine",
                        view(EXIT_VIEW),
                        RouteMeta::new("幻方黑匣 · 退出", Icon::SwitchButton),
                    ),
                    RouteRecord::leaf(
                        "backtesting-lab",
                        "BacktestingLab",
                        view(BACKTESTING_VIEW),
                        RouteMeta::new("策略实验室 · 回测", Icon::DataAnalysis),
                    ),
                ])],
        }
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Every leaf must be named and titled; names must be unique.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        let mut names = HashSet::new();
        for (path, record) in self.leaves() {
            let name = record.name.as_deref().unwrap_or("");
            if name.trim().is_empty() {
                return Err(BootstrapError::InvalidRoutes(format!("leaf {path} has no name")));
            }
            let titled = record
                .meta
                .as_ref()
                .map(|m| !m.title.trim().is_empty())
                .unwrap_or(false);
            if !titled {
                return Err(BootstrapError::InvalidRoutes(format!("leaf {path} has no title")));
            }
            if !names.insert(name.to_string()) {
                return Err(BootstrapError::InvalidRoutes(format!("duplicate route name {name}")));
            }
        }
        Ok(())
    }

    /// Leaf records with their absolute paths, in declaration order.
    pub fn leaves(&self) -> Vec<(String, &RouteRecord)> {
        fn walk<'a>(parent: &str, records: &'a [RouteRecord], out: &mut Vec<(String, &'a RouteRecord)>) {
            for record in records {
                let full = join_path(parent, &record.path);
                if record.is_leaf() {
                    out.push((full, record));
                } else {
                    walk(&full, &record.children, out);
                }
            }
        }
        let mut out = Vec::new();
        walk("/", &self.routes, &mut out);
        out
    }

    /// Exact static match. Returns the chain from the outermost record to the
    /// matched one; parents are tried before their children.
    pub fn match_path(&self, path: &str) -> Option<Vec<&RouteRecord>> {
        fn walk<'a>(parent: &str, records: &'a [RouteRecord], target: &str, chain: &mut Vec<&'a RouteRecord>) -> bool {
            for record in records {
                let full = join_path(parent, &record.path);
                chain.push(record);
                if full == target || walk(&full, &record.children, target, chain) {
                    return true;
                }
                chain.pop();
            }
            false
        }
        let target = normalize_path(path);
        let mut chain = Vec::new();
        walk("/", &self.routes, &target, &mut chain).then_some(chain)
    }

    /// Absolute path of a named route.
    pub fn path_of(&self, name: &str) -> Option<String> {
        fn walk(parent: &str, records: &[RouteRecord], name: &str) -> Option<String> {
            records.iter().find_map(|record| {
                let full = join_path(parent, &record.path);
                if record.name.as_deref() == Some(name) {
                    Some(full)
                } else {
                    walk(&full, &record.children, name)
                }
            })
        }
        walk("/", &self.routes, name)
    }
}
