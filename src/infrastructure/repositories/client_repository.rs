use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::traits::{ClientListParams, ClientRepository, GroupCount};
use crate::domain::Client;
use crate::error::AppResult;

const CLIENT_COLUMNS: &str = r#"id, first_name, last_name, email, phone_number, address,
           date_of_birth, license_number, category, location_id, is_verified,
           credit_score, total_bookings, created_at"#;

pub struct ClientRepositoryImpl {
    pool: PgPool,
}

impl ClientRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &ClientListParams) {
        if let Some(category) = params.category {
            builder.push(" AND category = ");
            builder.push_bind(category);
        }
        if let Some(query) = params.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", query.trim());
            builder.push(" AND (first_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR last_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR email ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(client)
    }

    async fn list(
        &self,
        params: &ClientListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Client>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE 1=1"
        ));
        Self::push_filters(&mut builder, params);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let clients = builder
            .build_query_as::<Client>()
            .fetch_all(&self.pool)
            .await?;
        Ok(clients)
    }

    async fn count_list(&self, params: &ClientListParams) -> AppResult<i64> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM clients WHERE 1=1");
        Self::push_filters(&mut builder, params);

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create(&self, client: &Client) -> AppResult<Client> {
        let created = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (id, first_name, last_name, email, phone_number, address,
                                 date_of_birth, license_number, category, location_id,
                                 is_verified, credit_score, total_bookings, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(client.id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phone_number)
        .bind(&client.address)
        .bind(client.date_of_birth)
        .bind(&client.license_number)
        .bind(client.category)
        .bind(client.location_id)
        .bind(client.is_verified)
        .bind(client.credit_score)
        .bind(client.total_bookings)
        .bind(client.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, client: &Client) -> AppResult<Client> {
        let updated = sqlx::query_as::<_, Client>(&format!(
            r#"
            UPDATE clients
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5, address = $6,
                date_of_birth = $7, license_number = $8, category = $9, location_id = $10,
                is_verified = $11, credit_score = $12, total_bookings = $13
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(client.id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phone_number)
        .bind(&client.address)
        .bind(client.date_of_birth)
        .bind(&client.license_number)
        .bind(client.category)
        .bind(client.location_id)
        .bind(client.is_verified)
        .bind(client.credit_score)
        .bind(client.total_bookings)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM clients WHERE location_id = $1")
                .bind(location_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn category_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, GroupCount>(
            "SELECT category::text AS label, COUNT(*) AS count FROM clients GROUP BY category ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
