use crate::domain::entities::view::View;
use crate::domain::ports::view_source::ViewSource;
use crate::infrastructure::build::alias::AliasTable;
use async_trait::async_trait;

pub const APP_LAYOUT: &str = "@/components/layout/AppLayout.vue";
pub const DASHBOARD_VIEW: &str = "@/views/DashboardView.vue";
pub const SELECTION_VIEW: &str = "@/views/selection/SelectionEngineView.vue";
pub const TIMING_VIEW: &str = "@/views/timing/TimingEngineView.vue";
pub const EXIT_VIEW: &str = "@/views/exit/ExitEngineView.vue";
pub const BACKTESTING_VIEW: &str = "@/views/backtesting/BacktestingLabView.vue";

/// Views compiled into the binary. Chunk locations are the alias-resolved
/// specifiers; unknown specifiers fail like a missing chunk would.
pub struct BundledViews {
    aliases: AliasTable,
    chunks: Vec<&'static str>,
}

impl BundledViews {
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            aliases,
            chunks: vec![
                APP_LAYOUT,
                DASHBOARD_VIEW,
                SELECTION_VIEW,
                TIMING_VIEW,
                EXIT_VIEW,
                BACKTESTING_VIEW,
            ],
        }
    }

    pub fn contains(&self, specifier: &str) -> bool {
        self.chunks.iter().any(|c| *c == specifier)
    }
}

impl Default for BundledViews {
    fn default() -> Self {
        Self::new(AliasTable::default())
    }
}

/// `@/views/timing/TimingEngineView.vue` -> `TimingEngineView`
pub fn component_name(specifier: &str) -> &str {
    let file = specifier.rsplit('/').next().unwrap_or(specifier);
    file.split('.').next().unwrap_or(file)
}

#[async_trait]
impl ViewSource for BundledViews {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn fetch(&self, specifier: &str) -> Result<View, String> {
        if !self.contains(specifier) {
            return Err(format!("chunk not found: {}", self.aliases.resolve(specifier)));
        }
        let chunk = self.aliases.resolve(specifier);
        tracing::debug!(specifier, chunk = %chunk, "loading bundled view");
        Ok(View::new(component_name(specifier), chunk))
    }
}
