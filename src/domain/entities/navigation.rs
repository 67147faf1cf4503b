use crate::domain::values::route_meta::RouteMeta;
use serde::Serialize;

/// Where the router is (or is going): the effective path after redirects,
/// and the matched leaf's name and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLocation {
    pub path: String,
    pub name: Option<String>,
    pub meta: Option<RouteMeta>,
}

/// One transition, handed to every before-guard.
#[derive(Debug, Clone, Copy)]
pub struct NavigationEvent<'a> {
    pub to: &'a RouteLocation,
    pub from: Option<&'a RouteLocation>,
}
