use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::traits::{MessageListParams, MessageRepository};
use crate::domain::Message;
use crate::error::{AppError, AppResult};

const MESSAGE_COLUMNS: &str = r#"id, sender_name, sender_email, message_type, subject, body,
           is_read, response, responded_at, created_at"#;

pub struct MessageRepositoryImpl {
    pool: PgPool,
}

impl MessageRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &MessageListParams) {
        if let Some(message_type) = params.message_type {
            builder.push(" AND message_type = ");
            builder.push_bind(message_type);
        }
        if let Some(query) = params.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", query.trim());
            builder.push(" AND (sender_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR sender_email ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR subject ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(message)
    }

    async fn list(
        &self,
        params: &MessageListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Message>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE 1=1"
        ));
        Self::push_filters(&mut builder, params);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let messages = builder
            .build_query_as::<Message>()
            .fetch_all(&self.pool)
            .await?;
        Ok(messages)
    }

    async fn count_list(&self, params: &MessageListParams) -> AppResult<i64> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) AS count FROM messages WHERE 1=1");
        Self::push_filters(&mut builder, params);

        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn create(&self, message: &Message) -> AppResult<Message> {
        let created = sqlx::query_as::<_, Message>(&format!(
            r#"
            INSERT INTO messages (id, sender_name, sender_email, message_type, subject, body,
                                  is_read, response, responded_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(message.id)
        .bind(&message.sender_name)
        .bind(&message.sender_email)
        .bind(message.message_type)
        .bind(&message.subject)
        .bind(&message.body)
        .bind(message.is_read)
        .bind(&message.response)
        .bind(message.responded_at)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(&format!(
            "UPDATE messages SET is_read = TRUE WHERE id = $1 RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("message not found".to_string()))
    }

    async fn respond(&self, id: Uuid, response: &str) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(&format!(
            r#"
            UPDATE messages
            SET response = $2, responded_at = $3, is_read = TRUE
            WHERE id = $1
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(response)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("message not found".to_string()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
