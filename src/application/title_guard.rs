use crate::domain::entities::document::Document;
use crate::domain::entities::navigation::NavigationEvent;
use crate::domain::ports::navigation_guard::{GuardDecision, NavigationGuard};
use crate::domain::values::route_meta::RouteMeta;

pub const PRODUCT_NAME: &str = "三位一体量化助手";

/// `"{title} - 三位一体量化助手"`, or the bare product name when the route
/// carries no (or a blank) title.
pub fn document_title(meta: Option<&RouteMeta>) -> String {
    match meta.map(|m| m.title.as_str()).filter(|t| !t.trim().is_empty()) {
        Some(title) => format!("{title} - {PRODUCT_NAME}"),
        None => PRODUCT_NAME.to_string(),
    }
}

/// Writes the target route's title to the document. Never blocks navigation.
pub struct TitleGuard;

impl NavigationGuard for TitleGuard {
    fn before_each(&self, event: &NavigationEvent<'_>, document: &mut Document) -> GuardDecision {
        document.set_title(document_title(event.to.meta.as_ref()));
        GuardDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::navigation::RouteLocation;
    use crate::domain::values::icon::Icon;

    #[test]
    fn test_title_with_and_without_meta() {
        let meta = RouteMeta::new("黄金窗口 · 择时", Icon::Opportunity);
        assert_eq!(document_title(Some(&meta)), "黄金窗口 · 择时 - 三位一体量化助手");
        assert_eq!(document_title(None), PRODUCT_NAME);
        assert_eq!(document_title(Some(&RouteMeta::new("", Icon::House))), PRODUCT_NAME);
        assert_eq!(document_title(Some(&RouteMeta::new("   ", Icon::House))), PRODUCT_NAME);
    }

    #[test]
    fn test_title_used_verbatim() {
        let meta = RouteMeta::new(" 策略实验室 · 回测 ", Icon::DataAnalysis);
        assert_eq!(document_title(Some(&meta)), " 策略实验室 · 回测  - 三位一体量化助手");
    }

    #[test]
    fn test_guard_sets_title_and_proceeds() {
        let to = RouteLocation {
            path: "/exit-engine".into(),
            name: Some("ExitEngine".into()),
            meta: Some(RouteMeta::new("幻方黑匣 · 退出", Icon::SwitchButton)),
        };
        let mut doc = Document::new("old");
        let decision = TitleGuard.before_each(&NavigationEvent { to: &to, from: None }, &mut doc);
        assert_eq!(decision, GuardDecision::Proceed);
        assert_eq!(doc.title(), "幻方黑匣 · 退出 - 三位一体量化助手");
    }
}
