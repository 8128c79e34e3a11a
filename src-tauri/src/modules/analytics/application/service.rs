use std::sync::Arc;

use crate::modules::analytics::domain::entities::{AnalyticsPeriod, ProductionStats};
use crate::modules::analytics::domain::repository::AnalyticsRepository;
use crate::shared::errors::AppResult;

pub struct AnalyticsService {
    repo: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repo }
    }

    pub async fn stats(&self, period: AnalyticsPeriod) -> AppResult<ProductionStats> {
        self.repo.stats(period).await
    }
}
