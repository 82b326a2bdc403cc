use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::traits::{GroupCount, OrderListParams, OrderRepository, OrderWithDetails};
use crate::domain::{ClientCategory, OrderStatus, RentalOrder};
use crate::error::{AppError, AppResult};

const ORDER_COLUMNS: &str = r#"id, reference, car_id, client_id, driver_id, start_date, end_date,
           pickup_location_id, dropoff_location_id, total_amount, status,
           special_requirements, created_at, updated_at"#;

pub struct OrderRepositoryImpl {
    pool: PgPool,
}

impl OrderRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &OrderListParams) {
        if let Some(status) = params.status {
            builder.push(" AND o.status = ");
            builder.push_bind(status);
        }
        if let Some(category) = params.client_category {
            builder.push(" AND cl.category = ");
            builder.push_bind(category);
        }
        if let Some(query) = params.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", query.trim());
            builder.push(" AND (o.reference ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR c.car_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR cl.first_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR cl.last_name ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RentalOrder>> {
        let order = sqlx::query_as::<_, RentalOrder>(&format!(
            "SELECT {ORDER_COLUMNS} FROM rental_orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    async fn list(
        &self,
        params: &OrderListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<OrderWithDetails>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT o.id, o.reference, o.car_id, o.client_id, o.driver_id, o.start_date,
                   o.end_date, o.pickup_location_id, o.dropoff_location_id, o.total_amount,
                   o.status, o.special_requirements, o.created_at, o.updated_at,
                   c.car_name AS car_name,
                   cl.first_name || ' ' || cl.last_name AS client_name,
                   d.name AS driver_name
            FROM rental_orders o
            JOIN cars c ON c.id = o.car_id
            JOIN clients cl ON cl.id = o.client_id
            LEFT JOIN drivers d ON d.id = o.driver_id
            WHERE 1=1
            "#,
        );
        Self::push_filters(&mut builder, params);
        builder.push(" ORDER BY o.created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let orders = builder
            .build_query_as::<OrderWithDetails>()
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    async fn count_list(&self, params: &OrderListParams) -> AppResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT COUNT(*) AS count
            FROM rental_orders o
            JOIN cars c ON c.id = o.car_id
            JOIN clients cl ON cl.id = o.client_id
            WHERE 1=1
            "#,
        );
        Self::push_filters(&mut builder, params);

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create_rental(&self, order: &RentalOrder) -> AppResult<RentalOrder> {
        let mut tx = self.pool.begin().await?;

        // Conditional update doubles as the availability check; no row means
        // the car was already rented, in maintenance, or inactive.
        let reserved = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE cars SET status = 'rented', updated_at = $2
            WHERE id = $1 AND status = 'available'
            RETURNING id
            "#,
        )
        .bind(order.car_id)
        .bind(order.created_at)
        .fetch_optional(&mut *tx)
        .await?;

        if reserved.is_none() {
            return Err(AppError::Conflict(
                "car is not available for rent".to_string(),
            ));
        }

        let created = sqlx::query_as::<_, RentalOrder>(&format!(
            r#"
            INSERT INTO rental_orders (id, reference, car_id, client_id, driver_id, start_date,
                                       end_date, pickup_location_id, dropoff_location_id,
                                       total_amount, status, special_requirements,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order.id)
        .bind(&order.reference)
        .bind(order.car_id)
        .bind(order.client_id)
        .bind(order.driver_id)
        .bind(order.start_date)
        .bind(order.end_date)
        .bind(order.pickup_location_id)
        .bind(order.dropoff_location_id)
        .bind(order.total_amount)
        .bind(order.status)
        .bind(&order.special_requirements)
        .bind(order.created_at)
        .bind(order.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        let total_bookings = sqlx::query_scalar::<_, i32>(
            "UPDATE clients SET total_bookings = total_bookings + 1 WHERE id = $1 RETURNING total_bookings",
        )
        .bind(order.client_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("client not found".to_string()))?;

        sqlx::query("UPDATE clients SET category = $2 WHERE id = $1")
            .bind(order.client_id)
            .bind(ClientCategory::from_total_bookings(total_bookings))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn update(&self, order: &RentalOrder) -> AppResult<RentalOrder> {
        let updated = sqlx::query_as::<_, RentalOrder>(&format!(
            r#"
            UPDATE rental_orders
            SET driver_id = $2, start_date = $3, end_date = $4, pickup_location_id = $5,
                dropoff_location_id = $6, total_amount = $7, status = $8,
                special_requirements = $9, updated_at = $10
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order.id)
        .bind(order.driver_id)
        .bind(order.start_date)
        .bind(order.end_date)
        .bind(order.pickup_location_id)
        .bind(order.dropoff_location_id)
        .bind(order.total_amount)
        .bind(order.status)
        .bind(&order.special_requirements)
        .bind(order.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM rental_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rental_orders")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: OrderStatus) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM rental_orders WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, GroupCount>(
            "SELECT status::text AS label, COUNT(*) AS count FROM rental_orders GROUP BY status ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
