use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::traits::LocationRepository;
use crate::domain::Location;
use crate::error::AppResult;

const LOCATION_COLUMNS: &str =
    "id, city, state, country, latitude, longitude, zip_code, created_at";

pub struct LocationRepositoryImpl {
    pool: PgPool,
}

impl LocationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for LocationRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(location)
    }

    async fn find_all(&self) -> AppResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY country, state, city"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    async fn create(&self, location: &Location) -> AppResult<Location> {
        let created = sqlx::query_as::<_, Location>(&format!(
            r#"
            INSERT INTO locations (id, city, state, country, latitude, longitude, zip_code, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(location.id)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.country)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.zip_code)
        .bind(location.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn count_all(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
