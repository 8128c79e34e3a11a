use super::application::service::AnalyticsService;
use super::domain::entities::{AnalyticsPeriod, ProductionStats};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct GetProductionStatsRequest {
    pub period: AnalyticsPeriod,
}

#[tauri::command]
#[specta::specta]
pub async fn get_production_stats(
    request: GetProductionStatsRequest,
    analytics_service: State<'_, Arc<AnalyticsService>>,
) -> Result<ProductionStats, String> {
    analytics_service
        .stats(request.period)
        .await
        .map_err(|e| e.to_string())
}
