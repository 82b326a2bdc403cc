use std::sync::Mutex;

use async_trait::async_trait;
use car_rental_backend::domain::Message;
use car_rental_backend::error::{AppError, AppResult};
use car_rental_backend::infrastructure::repositories::{MessageListParams, MessageRepository};
use chrono::Utc;
use uuid::Uuid;

#[derive(Default)]
pub struct MockMessageRepo {
    pub messages: Mutex<Vec<Message>>,
}

impl MockMessageRepo {
    pub fn push(&self, message: Message) {
        self.messages
            .lock()
            .expect("messages mutex poisoned")
            .push(message);
    }

    fn matches(message: &Message, params: &MessageListParams) -> bool {
        let query_ok = params
            .query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .is_none_or(|q| {
                let needle = q.trim().to_lowercase();
                message.sender_name.to_lowercase().contains(&needle)
                    || message.sender_email.to_lowercase().contains(&needle)
                    || message.subject.to_lowercase().contains(&needle)
            });

        query_ok
            && params
                .message_type
                .is_none_or(|message_type| message.message_type == message_type)
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>> {
        Ok(self
            .messages
            .lock()
            .expect("messages mutex poisoned")
            .iter()
            .find(|message| message.id == id)
            .cloned())
    }

    async fn list(
        &self,
        params: &MessageListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Message>> {
        let rows: Vec<Message> = self
            .messages
            .lock()
            .expect("messages mutex poisoned")
            .iter()
            .filter(|message| Self::matches(message, params))
            .cloned()
            .collect();

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(rows.into_iter().skip(start).take(limit).collect())
    }

    async fn count_list(&self, params: &MessageListParams) -> AppResult<i64> {
        Ok(self
            .messages
            .lock()
            .expect("messages mutex poisoned")
            .iter()
            .filter(|message| Self::matches(message, params))
            .count() as i64)
    }

    async fn create(&self, message: &Message) -> AppResult<Message> {
        self.push(message.clone());
        Ok(message.clone())
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<Message> {
        let mut rows = self.messages.lock().expect("messages mutex poisoned");
        let message = rows
            .iter_mut()
            .find(|message| message.id == id)
            .ok_or_else(|| AppError::NotFound("message not found".to_string()))?;
        message.is_read = true;
        Ok(message.clone())
    }

    async fn respond(&self, id: Uuid, response: &str) -> AppResult<Message> {
        let mut rows = self.messages.lock().expect("messages mutex poisoned");
        let message = rows
            .iter_mut()
            .find(|message| message.id == id)
            .ok_or_else(|| AppError::NotFound("message not found".to_string()))?;
        message.response = Some(response.to_string());
        message.responded_at = Some(Utc::now());
        message.is_read = true;
        Ok(message.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.messages
            .lock()
            .expect("messages mutex poisoned")
            .retain(|message| message.id != id);
        Ok(())
    }
}
