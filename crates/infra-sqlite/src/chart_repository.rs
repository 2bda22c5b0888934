// SQLite ChartRepository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use leadboard_core::domain::{ChartPoint, DateRange};
use leadboard_core::error::Result;
use leadboard_core::port::ChartRepository;
use sqlx::SqlitePool;

use crate::error::map_sqlx_error;

pub struct SqliteChartRepository {
    pool: SqlitePool,
}

impl SqliteChartRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChartRepository for SqliteChartRepository {
    async fn find_in_range(&self, range: DateRange) -> Result<Vec<ChartPoint>> {
        // NULL bounds collapse to open ends; dates are ISO text, so
        // lexicographic comparison is chronological
        let rows: Vec<ChartRow> = sqlx::query_as(
            r#"
            SELECT date, people, companies
            FROM chart_data
            WHERE (?1 IS NULL OR date >= ?1)
              AND (?2 IS NULL OR date <= ?2)
            ORDER BY date ASC
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_point()).collect())
    }

    async fn insert(&self, point: &ChartPoint) -> Result<()> {
        sqlx::query("INSERT INTO chart_data (date, people, companies) VALUES (?, ?, ?)")
            .bind(point.date)
            .bind(point.people)
            .bind(point.companies)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chart_data")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct ChartRow {
    date: NaiveDate,
    people: i64,
    companies: i64,
}

impl ChartRow {
    fn into_point(self) -> ChartPoint {
        ChartPoint {
            date: self.date,
            people: self.people,
            companies: self.companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_repo() -> SqliteChartRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteChartRepository::new(pool)
    }

    fn point(date: &str, people: i64, companies: i64) -> ChartPoint {
        ChartPoint {
            date: date.parse().unwrap(),
            people,
            companies,
        }
    }

    async fn seed(repo: &SqliteChartRepository) {
        // Inserted out of order on purpose
        for p in [
            point("2024-01-03", 3, 1),
            point("2024-01-01", 1, 0),
            point("2024-01-05", 5, 2),
            point("2024-01-02", 2, 1),
        ] {
            repo.insert(&p).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_unbounded_query_returns_all_ordered() {
        let repo = setup_repo().await;
        seed(&repo).await;

        let rows = repo.find_in_range(DateRange::all()).await.unwrap();
        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(
            dates,
            ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]
        );
    }

    #[tokio::test]
    async fn test_bounds_are_inclusive() {
        let repo = setup_repo().await;
        seed(&repo).await;

        let range = DateRange::new(
            Some("2024-01-02".parse().unwrap()),
            Some("2024-01-03".parse().unwrap()),
        );
        let rows = repo.find_in_range(range).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date.to_string(), "2024-01-02");
        assert_eq!(rows[1].date.to_string(), "2024-01-03");
    }

    #[tokio::test]
    async fn test_open_ended_bounds() {
        let repo = setup_repo().await;
        seed(&repo).await;

        let from_third = repo
            .find_in_range(DateRange::new(Some("2024-01-03".parse().unwrap()), None))
            .await
            .unwrap();
        assert_eq!(from_third.len(), 2);

        let until_second = repo
            .find_in_range(DateRange::new(None, Some("2024-01-02".parse().unwrap())))
            .await
            .unwrap();
        assert_eq!(until_second.len(), 2);
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty() {
        let repo = setup_repo().await;
        seed(&repo).await;

        let range = DateRange::new(
            Some("2024-01-05".parse().unwrap()),
            Some("2024-01-01".parse().unwrap()),
        );
        assert!(repo.find_in_range(range).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count() {
        let repo = setup_repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);
        seed(&repo).await;
        assert_eq!(repo.count().await.unwrap(), 4);
    }
}
