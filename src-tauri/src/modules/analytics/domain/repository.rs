/// Backend boundary for production analytics.
use async_trait::async_trait;

use super::entities::{AnalyticsPeriod, ProductionStats};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn stats(&self, period: AnalyticsPeriod) -> AppResult<ProductionStats>;
}
