use crate::domain::entities::document::Document;
use crate::domain::entities::navigation::NavigationEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Cancel(String),
}

/// Synchronous hook run before every route transition, in registration
/// order. Guards may mutate the document (e.g. its title).
pub trait NavigationGuard: Send + Sync {
    fn before_each(&self, event: &NavigationEvent<'_>, document: &mut Document) -> GuardDecision;
}
