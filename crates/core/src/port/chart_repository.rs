// Chart Repository Port (Interface)

use crate::domain::{ChartPoint, DateRange};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for chart data persistence
#[async_trait]
pub trait ChartRepository: Send + Sync {
    /// Rows within the range (bounds inclusive), ordered by date ascending
    async fn find_in_range(&self, range: DateRange) -> Result<Vec<ChartPoint>>;

    /// Insert one day of counts
    async fn insert(&self, point: &ChartPoint) -> Result<()>;

    /// Count all rows
    async fn count(&self) -> Result<i64>;
}
