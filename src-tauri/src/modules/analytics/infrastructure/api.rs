use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::analytics::domain::entities::{AnalyticsPeriod, ProductionStats};
use crate::modules::analytics::domain::repository::AnalyticsRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::ApiClient;

pub struct AnalyticsRepositoryImpl {
    api: Arc<ApiClient>,
}

impl AnalyticsRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AnalyticsRepository for AnalyticsRepositoryImpl {
    async fn stats(&self, period: AnalyticsPeriod) -> AppResult<ProductionStats> {
        self.api
            .get_json(&format!("/analytics/{}", period.as_str()))
            .await
    }
}
