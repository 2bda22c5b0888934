// Chart Service - Dashboard data use case

pub mod data;

#[cfg(test)]
mod data_test;

pub use data::{ChartData, ChartQuery};

use std::sync::Arc;

use crate::error::Result;
use crate::port::ChartRepository;

/// Chart Service
pub struct ChartService {
    charts: Arc<dyn ChartRepository>,
}

impl ChartService {
    pub fn new(charts: Arc<dyn ChartRepository>) -> Self {
        Self { charts }
    }

    /// Fetch chart rows for an optional date window
    pub async fn chart_data(&self, query: ChartQuery) -> Result<ChartData> {
        data::execute(self.charts.as_ref(), query).await
    }
}
