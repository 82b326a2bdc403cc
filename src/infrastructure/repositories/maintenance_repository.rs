use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::traits::MaintenanceRepository;
use crate::domain::MaintenanceRecord;
use crate::error::AppResult;

const MAINTENANCE_COLUMNS: &str = r#"id, car_id, maintenance_type, description, cost,
           maintenance_date, next_maintenance_date, performed_by"#;

pub struct MaintenanceRepositoryImpl {
    pool: PgPool,
}

impl MaintenanceRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceRepository for MaintenanceRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceRecord>> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list(
        &self,
        car_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceRecord>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records WHERE 1=1"
        ));
        if let Some(car_id) = car_id {
            builder.push(" AND car_id = ");
            builder.push_bind(car_id);
        }
        builder.push(" ORDER BY maintenance_date DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let records = builder
            .build_query_as::<MaintenanceRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn count_list(&self, car_id: Option<Uuid>) -> AppResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) AS count FROM maintenance_records WHERE 1=1",
        );
        if let Some(car_id) = car_id {
            builder.push(" AND car_id = ");
            builder.push_bind(car_id);
        }

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create(&self, record: &MaintenanceRecord) -> AppResult<MaintenanceRecord> {
        let created = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            r#"
            INSERT INTO maintenance_records (id, car_id, maintenance_type, description, cost,
                                             maintenance_date, next_maintenance_date, performed_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {MAINTENANCE_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(record.car_id)
        .bind(&record.maintenance_type)
        .bind(&record.description)
        .bind(record.cost)
        .bind(record.maintenance_date)
        .bind(record.next_maintenance_date)
        .bind(&record.performed_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
