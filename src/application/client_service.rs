use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    ClientListResponse, ClientQueryParams, ClientResponse, CreateClientRequest,
    GroupCountResponse, UpdateClientRequest,
};
use crate::domain::{Client, ClientCategory};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{ClientListParams, ClientRepository};

use super::normalize_pagination;

#[derive(Clone)]
pub struct ClientService {
    client_repo: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(client_repo: Arc<dyn ClientRepository>) -> Self {
        Self { client_repo }
    }

    pub async fn list(&self, params: ClientQueryParams) -> AppResult<ClientListResponse> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);

        let list_params = ClientListParams {
            category: params.category.as_deref().map(parse_category).transpose()?,
            query: params.q,
        };

        let clients = self.client_repo.list(&list_params, limit, offset).await?;
        let total = self.client_repo.count_list(&list_params).await?;
        let stats = self
            .client_repo
            .category_breakdown()
            .await?
            .into_iter()
            .map(|row| GroupCountResponse {
                label: row.label,
                count: row.count,
            })
            .collect();

        Ok(ClientListResponse {
            clients: clients.into_iter().map(map_client).collect(),
            total,
            page,
            limit,
            stats,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ClientResponse> {
        let client = self
            .client_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("client not found".to_string()))?;
        Ok(map_client(client))
    }

    pub async fn create(&self, request: CreateClientRequest) -> AppResult<ClientResponse> {
        request.validate()?;

        let client = Client {
            id: Uuid::new_v4(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            address: request.address,
            date_of_birth: request.date_of_birth,
            license_number: request.license_number,
            category: ClientCategory::Regular,
            location_id: request.location_id,
            is_verified: false,
            credit_score: 700,
            total_bookings: 0,
            created_at: Utc::now(),
        };

        let created = self.client_repo.create(&client).await?;
        Ok(map_client(created))
    }

    pub async fn update(&self, id: Uuid, request: UpdateClientRequest) -> AppResult<ClientResponse> {
        request.validate()?;

        let mut existing = self
            .client_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("client not found".to_string()))?;

        if let Some(first_name) = request.first_name {
            existing.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            existing.last_name = last_name;
        }
        if let Some(email) = request.email {
            existing.email = email;
        }
        if let Some(phone_number) = request.phone_number {
            existing.phone_number = phone_number;
        }
        if let Some(address) = request.address {
            existing.address = address;
        }
        if let Some(date_of_birth) = request.date_of_birth {
            existing.date_of_birth = Some(date_of_birth);
        }
        if let Some(license_number) = request.license_number {
            existing.license_number = license_number;
        }
        if let Some(location_id) = request.location_id {
            existing.location_id = Some(location_id);
        }
        if let Some(is_verified) = request.is_verified {
            existing.is_verified = is_verified;
        }
        if let Some(credit_score) = request.credit_score {
            existing.credit_score = credit_score;
        }
        // The tier is always derived from the booking tally, never set by hand.
        existing.category = ClientCategory::from_total_bookings(existing.total_bookings);

        let updated = self.client_repo.update(&existing).await?;
        Ok(map_client(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.client_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("client not found".to_string()))?;
        self.client_repo.delete(id).await
    }
}

fn map_client(client: Client) -> ClientResponse {
    let full_name = client.full_name();
    ClientResponse {
        id: client.id,
        first_name: client.first_name,
        last_name: client.last_name,
        full_name,
        email: client.email,
        phone_number: client.phone_number,
        address: client.address,
        date_of_birth: client.date_of_birth,
        license_number: client.license_number,
        category: client.category,
        location_id: client.location_id,
        is_verified: client.is_verified,
        credit_score: client.credit_score,
        total_bookings: client.total_bookings,
        created_at: client.created_at,
    }
}

pub(crate) fn parse_category(raw: &str) -> AppResult<ClientCategory> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "regular" => Ok(ClientCategory::Regular),
        "corporate" => Ok(ClientCategory::Corporate),
        "premium" => Ok(ClientCategory::Premium),
        "vip" => Ok(ClientCategory::Vip),
        _ => Err(AppError::validation_error(
            "Category must be one of: regular, corporate, premium, vip",
        )),
    }
}
