use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::traits::{DriverListParams, DriverRepository, GroupCount};
use crate::domain::{ApplicationStatus, Driver, DriverApplication, DriverStatus};
use crate::error::{AppError, AppResult};

const DRIVER_COLUMNS: &str = r#"id, name, license_no, contact_number, address, salary, hired_date,
           location_id, status, experience_years, rating, total_trips"#;

const APPLICATION_COLUMNS: &str = r#"id, name, email, license_no, contact_number, address,
           experience_years, location_id, status, applied_at, reviewed_at, notes"#;

pub struct DriverRepositoryImpl {
    pool: PgPool,
}

impl DriverRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &DriverListParams) {
        if let Some(status) = params.status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }
        if let Some(query) = params.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", query.trim());
            builder.push(" AND (name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR license_no ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR contact_number ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl DriverRepository for DriverRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(driver)
    }

    async fn list(
        &self,
        params: &DriverListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Driver>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE 1=1"
        ));
        Self::push_filters(&mut builder, params);
        builder.push(" ORDER BY hired_date DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let drivers = builder
            .build_query_as::<Driver>()
            .fetch_all(&self.pool)
            .await?;
        Ok(drivers)
    }

    async fn count_list(&self, params: &DriverListParams) -> AppResult<i64> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM drivers WHERE 1=1");
        Self::push_filters(&mut builder, params);

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create(&self, driver: &Driver) -> AppResult<Driver> {
        let created = sqlx::query_as::<_, Driver>(&format!(
            r#"
            INSERT INTO drivers (id, name, license_no, contact_number, address, salary, hired_date,
                                 location_id, status, experience_years, rating, total_trips)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(driver.id)
        .bind(&driver.name)
        .bind(&driver.license_no)
        .bind(&driver.contact_number)
        .bind(&driver.address)
        .bind(driver.salary)
        .bind(driver.hired_date)
        .bind(driver.location_id)
        .bind(driver.status)
        .bind(driver.experience_years)
        .bind(driver.rating)
        .bind(driver.total_trips)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, driver: &Driver) -> AppResult<Driver> {
        let updated = sqlx::query_as::<_, Driver>(&format!(
            r#"
            UPDATE drivers
            SET name = $2, license_no = $3, contact_number = $4, address = $5, salary = $6,
                location_id = $7, status = $8, experience_years = $9, rating = $10,
                total_trips = $11
            WHERE id = $1
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(driver.id)
        .bind(&driver.name)
        .bind(&driver.license_no)
        .bind(&driver.contact_number)
        .bind(&driver.address)
        .bind(driver.salary)
        .bind(driver.location_id)
        .bind(driver.status)
        .bind(driver.experience_years)
        .bind(driver.rating)
        .bind(driver.total_trips)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: DriverStatus) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM drivers WHERE location_id = $1")
                .bind(location_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, GroupCount>(
            "SELECT status::text AS label, COUNT(*) AS count FROM drivers GROUP BY status ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn average_salary(&self) -> AppResult<Option<Decimal>> {
        let average = sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT AVG(salary)::numeric(10, 2) FROM drivers",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(average)
    }

    async fn increase_salaries(&self, driver_ids: &[Uuid], percentage: Decimal) -> AppResult<u64> {
        let factor = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
        let result =
            sqlx::query("UPDATE drivers SET salary = (salary * $2)::numeric(10, 2) WHERE id = ANY($1)")
                .bind(driver_ids)
                .bind(factor)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn create_application(
        &self,
        application: &DriverApplication,
    ) -> AppResult<DriverApplication> {
        let created = sqlx::query_as::<_, DriverApplication>(&format!(
            r#"
            INSERT INTO driver_applications (id, name, email, license_no, contact_number, address,
                                             experience_years, location_id, status, applied_at,
                                             reviewed_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(application.id)
        .bind(&application.name)
        .bind(&application.email)
        .bind(&application.license_no)
        .bind(&application.contact_number)
        .bind(&application.address)
        .bind(application.experience_years)
        .bind(application.location_id)
        .bind(application.status)
        .bind(application.applied_at)
        .bind(application.reviewed_at)
        .bind(&application.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_application(&self, id: Uuid) -> AppResult<Option<DriverApplication>> {
        let application = sqlx::query_as::<_, DriverApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM driver_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<DriverApplication>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {APPLICATION_COLUMNS} FROM driver_applications WHERE 1=1"
        ));
        if let Some(status) = status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }
        builder.push(" ORDER BY applied_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let applications = builder
            .build_query_as::<DriverApplication>()
            .fetch_all(&self.pool)
            .await?;
        Ok(applications)
    }

    async fn count_applications(&self, status: Option<ApplicationStatus>) -> AppResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) AS count FROM driver_applications WHERE 1=1",
        );
        if let Some(status) = status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn approve_application(&self, id: Uuid, starting_salary: Decimal) -> AppResult<Driver> {
        let mut tx = self.pool.begin().await?;

        let application = sqlx::query_as::<_, DriverApplication>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM driver_applications WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("driver application not found".to_string()))?;

        if !application.is_open() {
            return Err(AppError::Conflict(
                "application has already been reviewed".to_string(),
            ));
        }

        let driver = sqlx::query_as::<_, Driver>(&format!(
            r#"
            INSERT INTO drivers (id, name, license_no, contact_number, address, salary,
                                 location_id, status, experience_years)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8)
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&application.name)
        .bind(&application.license_no)
        .bind(&application.contact_number)
        .bind(&application.address)
        .bind(starting_salary)
        .bind(application.location_id)
        .bind(application.experience_years)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE driver_applications SET status = 'approved', reviewed_at = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(driver)
    }

    async fn reject_application(
        &self,
        id: Uuid,
        notes: Option<String>,
    ) -> AppResult<DriverApplication> {
        let rejected = sqlx::query_as::<_, DriverApplication>(&format!(
            r#"
            UPDATE driver_applications
            SET status = 'rejected', reviewed_at = $2, notes = $3
            WHERE id = $1 AND status IN ('pending', 'reviewing')
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(Utc::now())
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        match rejected {
            Some(application) => Ok(application),
            None => match self.find_application(id).await? {
                Some(_) => Err(AppError::Conflict(
                    "application has already been reviewed".to_string(),
                )),
                None => Err(AppError::NotFound(
                    "driver application not found".to_string(),
                )),
            },
        }
    }
}
