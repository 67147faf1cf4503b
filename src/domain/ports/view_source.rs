use crate::domain::entities::view::View;
use async_trait::async_trait;

/// Pluggable loader for view code chunks.
///
/// `specifier` is the component import path as written in the route table
/// (e.g. `@/views/DashboardView.vue`). Implementations may hit the network,
/// read a bundle, or build the view in memory.
#[async_trait]
pub trait ViewSource: Send + Sync {
    /// Name of this source, for logging.
    fn name(&self) -> &str;

    /// Fetch the chunk and produce a view. Errors are reported as text and
    /// wrapped into a navigation error by the caller.
    async fn fetch(&self, specifier: &str) -> Result<View, String>;
}
