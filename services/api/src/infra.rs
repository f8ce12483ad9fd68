use meal_insight::config::AppConfig;
use meal_insight::MealAnalyzer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn analyzer_from_config(config: &AppConfig) -> Arc<MealAnalyzer> {
    Arc::new(MealAnalyzer::new(config.analysis.clone()))
}
