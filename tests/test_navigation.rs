mod common;

use common::{setup, CountingViews, PRODUCT};
use std::sync::{Arc, Mutex};
use trinity_quant::application::route_table::RouteTable;
use trinity_quant::application::router::Router;
use trinity_quant::domain::entities::document::Document;
use trinity_quant::domain::entities::navigation::NavigationEvent;
use trinity_quant::domain::error::NavigationError;
use trinity_quant::domain::ports::navigation_guard::{GuardDecision, NavigationGuard};
use trinity_quant::infrastructure::views::bundled::{APP_LAYOUT, DASHBOARD_VIEW, TIMING_VIEW};

#[tokio::test]
async fn test_every_menu_route_sets_suffixed_title() {
    let (mut trinity, _views) = setup();
    let menu = trinity.menu();
    assert_eq!(menu.len(), 5);

    for entry in menu {
        let nav = trinity.navigate(&entry.path).await.unwrap();
        assert_eq!(nav.location.path, entry.path);
        assert_eq!(trinity.title(), format!("{} - {PRODUCT}", entry.title));
    }
}

#[tokio::test]
async fn test_root_and_variants_land_on_dashboard() {
    let (mut trinity, _views) = setup();
    for path in ["/", "", "/dashboard/", "/dashboard?tab=1"] {
        let nav = trinity.navigate(path).await.unwrap();
        assert_eq!(nav.location.path, "/dashboard", "from {path:?}");
        assert_eq!(nav.location.name.as_deref(), Some("Dashboard"));
        assert_eq!(trinity.title(), format!("主仪表盘 - {PRODUCT}"));
    }
}

#[tokio::test]
async fn test_timing_engine_title() {
    let (mut trinity, _views) = setup();
    let nav = trinity.navigate("/timing-engine").await.unwrap();
    assert_eq!(trinity.title(), "黄金窗口 · 择时 - 三位一体量化助手");
    assert_eq!(nav.page().map(|v| v.component.as_str()), Some("TimingEngineView"));
    assert_eq!(nav.views[0].component, "AppLayout");
}

#[tokio::test]
async fn test_revisit_does_not_refetch() {
    let (mut trinity, views) = setup();

    let first = trinity.navigate("/timing-engine").await.unwrap();
    trinity.navigate("/exit-engine").await.unwrap();
    let again = trinity.navigate("/timing-engine").await.unwrap();

    assert_eq!(views.calls(TIMING_VIEW), 1);
    assert_eq!(views.calls(APP_LAYOUT), 1);
    assert!(Arc::ptr_eq(&first.views[1], &again.views[1]));
    assert!(Arc::ptr_eq(&first.views[0], &again.views[0]));
}

#[tokio::test]
async fn test_unknown_path_keeps_title_and_location() {
    let (mut trinity, _views) = setup();
    trinity.navigate("/exit-engine").await.unwrap();
    let before = trinity.title().to_string();

    let err = trinity.navigate("/nowhere").await.unwrap_err();
    assert_eq!(err, NavigationError::NoMatch("/nowhere".into()));
    assert_eq!(trinity.title(), before);

    let router = trinity.app().router().unwrap();
    assert_eq!(router.current().map(|l| l.path.as_str()), Some("/exit-engine"));
    assert_eq!(router.history().len(), 1);
}

#[tokio::test]
async fn test_failed_load_is_retried() {
    let (mut trinity, views) = setup();
    views.fail_next(DASHBOARD_VIEW);

    let err = trinity.navigate("/dashboard").await.unwrap_err();
    assert!(
        matches!(&err, NavigationError::Load { specifier, .. } if specifier == DASHBOARD_VIEW),
        "got {err:?}"
    );
    assert!(trinity.app().router().unwrap().current().is_none());

    let nav = trinity.navigate("/dashboard").await.unwrap();
    assert_eq!(nav.page().map(|v| v.component.as_str()), Some("DashboardView"));
    assert_eq!(views.calls(DASHBOARD_VIEW), 2);
}

#[tokio::test]
async fn test_reverse_lookup_by_name() {
    let (trinity, _views) = setup();
    let router = trinity.app().router().unwrap();
    assert_eq!(router.reverse("BacktestingLab").as_deref(), Some("/backtesting-lab"));
    assert_eq!(router.reverse("Missing"), None);
}

type Seen = Arc<Mutex<Vec<(String, String, Option<String>)>>>;

struct Recorder {
    label: &'static str,
    seen: Seen,
}

impl NavigationGuard for Recorder {
    fn before_each(&self, event: &NavigationEvent<'_>, _document: &mut Document) -> GuardDecision {
        self.seen.lock().unwrap().push((
            self.label.to_string(),
            event.to.path.clone(),
            event.from.map(|l| l.path.clone()),
        ));
        GuardDecision::Proceed
    }
}

struct Block(&'static str);

impl NavigationGuard for Block {
    fn before_each(&self, event: &NavigationEvent<'_>, _document: &mut Document) -> GuardDecision {
        if event.to.path == self.0 {
            GuardDecision::Cancel("locked".into())
        } else {
            GuardDecision::Proceed
        }
    }
}

fn router_with(views: &Arc<CountingViews>) -> Router {
    Router::with_default_guards(RouteTable::standard(views.clone()))
}

#[tokio::test]
async fn test_guards_run_in_order_with_from_and_to() {
    let views = Arc::new(CountingViews::default());
    let seen: Seen = Arc::default();
    let mut router = router_with(&views);
    router.before_each(Recorder {
        label: "first",
        seen: seen.clone(),
    });
    router.before_each(Recorder {
        label: "second",
        seen: seen.clone(),
    });

    let mut doc = Document::new(PRODUCT);
    router.push("/", &mut doc).await.unwrap();
    router.push("/selection-engine", &mut doc).await.unwrap();

    let seen = seen.lock().unwrap().clone();
    let expected: Vec<(String, String, Option<String>)> = vec![
        ("first".into(), "/dashboard".into(), None),
        ("second".into(), "/dashboard".into(), None),
        ("first".into(), "/selection-engine".into(), Some("/dashboard".into())),
        ("second".into(), "/selection-engine".into(), Some("/dashboard".into())),
    ];
    assert_eq!(seen, expected);
    assert_eq!(doc.title(), format!("智能灯塔 · 选品 - {PRODUCT}"));
}

#[tokio::test]
async fn test_cancelling_guard_stops_navigation() {
    let views = Arc::new(CountingViews::default());
    let mut router = router_with(&views);
    router.before_each(Block("/backtesting-lab"));

    let mut doc = Document::new(PRODUCT);
    router.push("/dashboard", &mut doc).await.unwrap();
    let err = router.push("/backtesting-lab", &mut doc).await.unwrap_err();

    assert_eq!(
        err,
        NavigationError::Cancelled {
            path: "/backtesting-lab".into(),
            reason: "locked".into(),
        }
    );
    assert_eq!(router.history().to_vec(), vec!["/dashboard".to_string()]);
    assert_eq!(router.current().map(|l| l.path.as_str()), Some("/dashboard"));
    // the blocked view was never fetched
    assert_eq!(views.total_calls(), 2);
}

#[tokio::test]
async fn test_concurrent_first_visit_fetches_once() {
    let views = Arc::new(CountingViews::default());
    let table = RouteTable::standard(views.clone());
    let chain = table.match_path("/timing-engine").unwrap();
    let loader = chain[1].component.clone().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.load().await })
        })
        .collect();
    for h in handles {
        h.await.unwrap().unwrap();
    }
    assert_eq!(views.calls(TIMING_VIEW), 1);
}
