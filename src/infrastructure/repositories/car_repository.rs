use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::traits::{CarRepository, CarSearchParams, CarSort, CarWithLocation, GroupCount};
use crate::domain::{Car, CarStatus};
use crate::error::{AppError, AppResult};

const CAR_COLUMNS: &str = r#"id, car_name, company_name, model_year, num_of_seats, cost_per_day,
           description, likes, status, transmission, fuel_type, mileage,
           location_id, license_plate, created_at, updated_at"#;

pub struct CarRepositoryImpl {
    pool: PgPool,
}

impl CarRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &CarSearchParams) {
        if let Some(query) = params.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", query.trim());
            builder.push(" AND (car_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR company_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR license_plate ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        if let Some(status) = params.status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }
        if let Some(fuel_type) = params.fuel_type {
            builder.push(" AND fuel_type = ");
            builder.push_bind(fuel_type);
        }
        if let Some(transmission) = params.transmission {
            builder.push(" AND transmission = ");
            builder.push_bind(transmission);
        }
        if let Some(location_id) = params.location_id {
            builder.push(" AND location_id = ");
            builder.push_bind(location_id);
        }
        if let Some(min_price) = params.min_price {
            builder.push(" AND cost_per_day >= ");
            builder.push_bind(min_price);
        }
        if let Some(max_price) = params.max_price {
            builder.push(" AND cost_per_day <= ");
            builder.push_bind(max_price);
        }
    }
}

#[async_trait]
impl CarRepository for CarRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(car)
    }

    async fn search(
        &self,
        params: &CarSearchParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Car>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {CAR_COLUMNS} FROM cars WHERE 1=1"
        ));

        Self::push_filters(&mut builder, params);

        match params.sort {
            CarSort::Newest => builder.push(" ORDER BY created_at DESC"),
            CarSort::Popular => builder.push(" ORDER BY likes DESC, created_at DESC"),
        };

        builder.push(" LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let cars = builder.build_query_as::<Car>().fetch_all(&self.pool).await?;
        Ok(cars)
    }

    async fn count_search(&self, params: &CarSearchParams) -> AppResult<i64> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM cars WHERE 1=1");
        Self::push_filters(&mut builder, params);

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create(&self, car: &Car) -> AppResult<Car> {
        let created = sqlx::query_as::<_, Car>(&format!(
            r#"
            INSERT INTO cars (id, car_name, company_name, model_year, num_of_seats, cost_per_day,
                              description, likes, status, transmission, fuel_type, mileage,
                              location_id, license_plate, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {CAR_COLUMNS}
            "#
        ))
        .bind(car.id)
        .bind(&car.car_name)
        .bind(&car.company_name)
        .bind(car.model_year)
        .bind(car.num_of_seats)
        .bind(car.cost_per_day)
        .bind(&car.description)
        .bind(car.likes)
        .bind(car.status)
        .bind(car.transmission)
        .bind(car.fuel_type)
        .bind(car.mileage)
        .bind(car.location_id)
        .bind(&car.license_plate)
        .bind(car.created_at)
        .bind(car.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, car: &Car) -> AppResult<Car> {
        let updated = sqlx::query_as::<_, Car>(&format!(
            r#"
            UPDATE cars
            SET car_name = $2, company_name = $3, model_year = $4, num_of_seats = $5,
                cost_per_day = $6, description = $7, status = $8, transmission = $9,
                fuel_type = $10, mileage = $11, location_id = $12, license_plate = $13,
                updated_at = $14
            WHERE id = $1
            RETURNING {CAR_COLUMNS}
            "#
        ))
        .bind(car.id)
        .bind(&car.car_name)
        .bind(&car.company_name)
        .bind(car.model_year)
        .bind(car.num_of_seats)
        .bind(car.cost_per_day)
        .bind(&car.description)
        .bind(car.status)
        .bind(car.transmission)
        .bind(car.fuel_type)
        .bind(car.mileage)
        .bind(car.location_id)
        .bind(&car.license_plate)
        .bind(car.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn increment_likes(&self, id: Uuid) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE cars SET likes = likes + 1, updated_at = now() WHERE id = $1 RETURNING likes",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("car not found".to_string()))
    }

    async fn find_available_with_locations(&self) -> AppResult<Vec<CarWithLocation>> {
        let rows = sqlx::query_as::<_, CarWithLocation>(
            r#"
            SELECT c.id, c.car_name, c.company_name, c.model_year, c.num_of_seats,
                   c.cost_per_day, c.description, c.likes, c.status, c.transmission,
                   c.fuel_type, c.mileage, c.location_id, c.license_plate,
                   c.created_at, c.updated_at,
                   l.latitude, l.longitude
            FROM cars c
            LEFT JOIN locations l ON l.id = c.location_id
            WHERE c.status = 'available'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_all(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: CarStatus) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars WHERE location_id = $1")
            .bind(location_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, GroupCount>(
            "SELECT status::text AS label, COUNT(*) AS count FROM cars GROUP BY status ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn top_companies(&self, limit: i64) -> AppResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, GroupCount>(
            "SELECT company_name AS label, COUNT(*) AS count FROM cars GROUP BY company_name ORDER BY count DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
