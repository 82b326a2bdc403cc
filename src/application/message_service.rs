use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    ContactRequest, MessageQueryParams, MessageResponse, PaginatedResponse, RespondRequest,
};
use crate::domain::{Message, MessageType};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{MessageListParams, MessageRepository};

use super::normalize_pagination;

#[derive(Clone)]
pub struct MessageService {
    message_repo: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(message_repo: Arc<dyn MessageRepository>) -> Self {
        Self { message_repo }
    }

    pub async fn submit_contact(&self, request: ContactRequest) -> AppResult<MessageResponse> {
        request.validate()?;

        let message = Message {
            id: Uuid::new_v4(),
            sender_name: request.sender_name,
            sender_email: request.sender_email,
            message_type: request
                .message_type
                .as_deref()
                .map(parse_message_type)
                .transpose()?
                .unwrap_or(MessageType::Inquiry),
            subject: request.subject,
            body: request.body,
            is_read: false,
            response: None,
            responded_at: None,
            created_at: Utc::now(),
        };

        let created = self.message_repo.create(&message).await?;
        Ok(map_message(created))
    }

    pub async fn list(
        &self,
        params: MessageQueryParams,
    ) -> AppResult<PaginatedResponse<MessageResponse>> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);

        let list_params = MessageListParams {
            message_type: params
                .message_type
                .as_deref()
                .map(parse_message_type)
                .transpose()?,
            query: params.q,
        };

        let messages = self.message_repo.list(&list_params, limit, offset).await?;
        let total = self.message_repo.count_list(&list_params).await?;

        Ok(PaginatedResponse::new(
            messages.into_iter().map(map_message).collect(),
            total,
            page,
            limit,
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MessageResponse> {
        let message = self
            .message_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("message not found".to_string()))?;
        Ok(map_message(message))
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<MessageResponse> {
        let message = self.message_repo.mark_read(id).await?;
        Ok(map_message(message))
    }

    pub async fn respond(&self, id: Uuid, request: RespondRequest) -> AppResult<MessageResponse> {
        request.validate()?;
        let message = self.message_repo.respond(id, &request.response).await?;
        Ok(map_message(message))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.message_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("message not found".to_string()))?;
        self.message_repo.delete(id).await
    }
}

fn map_message(message: Message) -> MessageResponse {
    MessageResponse {
        id: message.id,
        sender_name: message.sender_name,
        sender_email: message.sender_email,
        message_type: message.message_type,
        subject: message.subject,
        body: message.body,
        is_read: message.is_read,
        response: message.response,
        responded_at: message.responded_at,
        created_at: message.created_at,
    }
}

fn parse_message_type(raw: &str) -> AppResult<MessageType> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "inquiry" => Ok(MessageType::Inquiry),
        "complaint" => Ok(MessageType::Complaint),
        "feedback" => Ok(MessageType::Feedback),
        "support" => Ok(MessageType::Support),
        _ => Err(AppError::validation_error(
            "Message type must be one of: inquiry, complaint, feedback, support",
        )),
    }
}
