use crate::domain::entities::view::View;
use crate::domain::error::NavigationError;
use crate::domain::ports::view_source::ViewSource;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Memoizing view factory. The first successful [`LazyView::load`] fetches
/// the chunk; later calls (and clones) share the cached view. A failed fetch
/// is not cached.
#[derive(Clone)]
pub struct LazyView {
    specifier: Arc<str>,
    source: Arc<dyn ViewSource>,
    cell: Arc<OnceCell<Arc<View>>>,
}

impl LazyView {
    pub fn new(specifier: impl Into<Arc<str>>, source: Arc<dyn ViewSource>) -> Self {
        Self {
            specifier: specifier.into(),
            source,
            cell: Arc::new(OnceCell::new()),
        }
    }

    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn load(&self) -> Result<Arc<View>, NavigationError> {
        let view = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(specifier = %self.specifier, source = self.source.name(), "fetching view chunk");
                self.source.fetch(&self.specifier).await.map(Arc::new)
            })
            .await
            .map_err(|reason| NavigationError::Load {
                specifier: self.specifier.to_string(),
                reason,
            })?;
        Ok(Arc::clone(view))
    }
}

impl std::fmt::Debug for LazyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("specifier", &self.specifier)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Flaky {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl ViewSource for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn fetch(&self, specifier: &str) -> Result<View, String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err("network down".into());
            }
            Ok(View::new(specifier, specifier))
        }
    }

    #[tokio::test]
    async fn test_loads_once_and_shares_between_clones() {
        let source = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let lazy = LazyView::new("@/views/A.vue", source.clone());
        let twin = lazy.clone();

        let a = lazy.load().await.unwrap();
        let b = twin.load().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(twin.is_loaded());
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let source = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        let lazy = LazyView::new("@/views/B.vue", source.clone());

        let err = lazy.load().await.unwrap_err();
        assert_eq!(
            err,
            NavigationError::Load {
                specifier: "@/views/B.vue".into(),
                reason: "network down".into()
            }
        );
        assert!(!lazy.is_loaded());

        lazy.load().await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_fetch_once() {
        let source = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let lazy = LazyView::new("@/views/C.vue", source.clone());
        let (a, b) = tokio::join!(lazy.load(), lazy.load());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
