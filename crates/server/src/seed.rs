// Demo Data Seeding
//
// Optional startup step (LEADBOARD_SEED=1) that gives a fresh install
// something to show: two demo accounts and sixty days of chart history.

use chrono::{Duration, NaiveDate};
use leadboard_core::domain::{ChartPoint, NewUser};
use leadboard_core::error::Result;
use leadboard_core::port::{ChartRepository, PasswordHasher, TimeProvider, UserRepository};
use tracing::info;

const DEMO_PASSWORD: &str = "password123";
const DEMO_USERS: [(&str, &str); 2] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
];
const CHART_DAYS: i64 = 60;

/// Seed demo accounts and chart history.
///
/// Idempotent: existing emails are skipped and the chart series is only
/// written into an empty table, so restarting a seeded server changes
/// nothing.
pub async fn seed_demo_data(
    users: &dyn UserRepository,
    charts: &dyn ChartRepository,
    hasher: &dyn PasswordHasher,
    time: &dyn TimeProvider,
) -> Result<()> {
    for (name, email) in DEMO_USERS {
        if users.find_by_email(email).await?.is_some() {
            continue;
        }

        let password_hash = hasher.hash(DEMO_PASSWORD).await?;
        let now = time.now_utc();
        users
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(email, "Seeded demo user");
    }

    if charts.count().await? == 0 {
        let today = time.today();
        for offset in (0..CHART_DAYS).rev() {
            let date = today - Duration::days(offset);
            let day_index = CHART_DAYS - 1 - offset;
            charts.insert(&demo_point(date, day_index)).await?;
        }

        info!(days = CHART_DAYS, "Seeded chart history");
    }

    Ok(())
}

/// Deterministic daily counts: a weekly rhythm plus slow growth, so the
/// dashboard has a recognizable shape without a random source.
fn demo_point(date: NaiveDate, day_index: i64) -> ChartPoint {
    let weekly = [12, 18, 24, 20, 27, 9, 6][(day_index % 7) as usize];

    ChartPoint {
        date,
        people: weekly + day_index / 6,
        companies: 2 + (day_index % 5) + day_index / 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadboard_core::port::time_provider::SystemTimeProvider;
    use leadboard_infra_auth::BcryptPasswordHasher;
    use leadboard_infra_sqlite::{
        create_pool, run_migrations, SqliteChartRepository, SqliteUserRepository,
    };

    async fn repos() -> (SqliteUserRepository, SqliteChartRepository) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        (
            SqliteUserRepository::new(pool.clone()),
            SqliteChartRepository::new(pool),
        )
    }

    #[tokio::test]
    async fn seeding_twice_changes_nothing() {
        let (users, charts) = repos().await;
        let hasher = BcryptPasswordHasher::with_cost(4);
        let time = SystemTimeProvider;

        seed_demo_data(&users, &charts, &hasher, &time).await.unwrap();
        seed_demo_data(&users, &charts, &hasher, &time).await.unwrap();

        assert_eq!(users.count().await.unwrap(), DEMO_USERS.len() as i64);
        assert_eq!(charts.count().await.unwrap(), CHART_DAYS);
    }

    #[tokio::test]
    async fn existing_chart_rows_are_left_alone() {
        let (users, charts) = repos().await;
        let hasher = BcryptPasswordHasher::with_cost(4);
        let time = SystemTimeProvider;

        let existing = ChartPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            people: 1,
            companies: 1,
        };
        charts.insert(&existing).await.unwrap();

        seed_demo_data(&users, &charts, &hasher, &time).await.unwrap();

        assert_eq!(charts.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn demo_users_can_authenticate_with_the_demo_password() {
        let (users, charts) = repos().await;
        let hasher = BcryptPasswordHasher::with_cost(4);
        let time = SystemTimeProvider;

        seed_demo_data(&users, &charts, &hasher, &time).await.unwrap();

        let alice = users
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(hasher
            .verify(DEMO_PASSWORD, &alice.password_hash)
            .await
            .unwrap());
    }

    #[test]
    fn demo_series_is_deterministic_and_positive() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        for day_index in 0..CHART_DAYS {
            let a = demo_point(date, day_index);
            let b = demo_point(date, day_index);
            assert_eq!(a, b);
            assert!(a.people > 0);
            assert!(a.companies > 0);
        }
    }
}
