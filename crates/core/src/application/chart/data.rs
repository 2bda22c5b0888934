// Chart Data Use Case

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ChartPoint, DateRange};
use crate::error::{AppError, Result};
use crate::port::ChartRepository;

/// Wire format for chart dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Chart query as received: raw optional bounds, parsed here so the
/// rejection message can name the offending field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Chart response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub success: bool,
    pub data: Vec<ChartPoint>,
    pub total: usize,
}

fn parse_bound(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("Invalid {field} format")))
}

pub(super) fn parse_query(query: &ChartQuery) -> Result<DateRange> {
    let start = query
        .start_date
        .as_deref()
        .map(|value| parse_bound(value, "startDate"))
        .transpose()?;
    let end = query
        .end_date
        .as_deref()
        .map(|value| parse_bound(value, "endDate"))
        .transpose()?;
    Ok(DateRange::new(start, end))
}

/// Execute the chart query: parse bounds, read rows ordered by date.
///
/// An inverted window is not an error; it reads as an empty result.
pub async fn execute(charts: &dyn ChartRepository, query: ChartQuery) -> Result<ChartData> {
    let range = parse_query(&query)?;
    let data = charts.find_in_range(range).await?;
    let total = data.len();

    Ok(ChartData {
        success: true,
        data,
        total,
    })
}
