use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use car_rental_backend::domain::Client;
use car_rental_backend::error::{AppError, AppResult};
use car_rental_backend::infrastructure::repositories::{
    ClientListParams, ClientRepository, GroupCount,
};
use uuid::Uuid;

#[derive(Default)]
pub struct MockClientRepo {
    pub clients: Mutex<Vec<Client>>,
}

impl MockClientRepo {
    pub fn push(&self, client: Client) {
        self.clients
            .lock()
            .expect("clients mutex poisoned")
            .push(client);
    }

    fn matches(client: &Client, params: &ClientListParams) -> bool {
        let query_ok = params
            .query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .is_none_or(|q| {
                let needle = q.trim().to_lowercase();
                client.first_name.to_lowercase().contains(&needle)
                    || client.last_name.to_lowercase().contains(&needle)
                    || client.email.to_lowercase().contains(&needle)
            });

        query_ok
            && params
                .category
                .is_none_or(|category| client.category == category)
    }
}

#[async_trait]
impl ClientRepository for MockClientRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        Ok(self
            .clients
            .lock()
            .expect("clients mutex poisoned")
            .iter()
            .find(|client| client.id == id)
            .cloned())
    }

    async fn list(
        &self,
        params: &ClientListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Client>> {
        let rows: Vec<Client> = self
            .clients
            .lock()
            .expect("clients mutex poisoned")
            .iter()
            .filter(|client| Self::matches(client, params))
            .cloned()
            .collect();

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(rows.into_iter().skip(start).take(limit).collect())
    }

    async fn count_list(&self, params: &ClientListParams) -> AppResult<i64> {
        Ok(self
            .clients
            .lock()
            .expect("clients mutex poisoned")
            .iter()
            .filter(|client| Self::matches(client, params))
            .count() as i64)
    }

    async fn create(&self, client: &Client) -> AppResult<Client> {
        self.push(client.clone());
        Ok(client.clone())
    }

    async fn update(&self, client: &Client) -> AppResult<Client> {
        let mut rows = self.clients.lock().expect("clients mutex poisoned");
        if let Some(existing) = rows.iter_mut().find(|existing| existing.id == client.id) {
            *existing = client.clone();
            Ok(client.clone())
        } else {
            Err(AppError::NotFound("client not found".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.clients
            .lock()
            .expect("clients mutex poisoned")
            .retain(|client| client.id != id);
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        Ok(self.clients.lock().expect("clients mutex poisoned").len() as i64)
    }

    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64> {
        Ok(self
            .clients
            .lock()
            .expect("clients mutex poisoned")
            .iter()
            .filter(|client| client.location_id == Some(location_id))
            .count() as i64)
    }

    async fn category_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for client in self.clients.lock().expect("clients mutex poisoned").iter() {
            let label = serde_json::to_value(client.category)
                .expect("category should serialize")
                .as_str()
                .expect("category serializes to a string")
                .to_string();
            *counts.entry(label).or_insert(0) += 1;
        }
        let mut rows: Vec<GroupCount> = counts
            .into_iter()
            .map(|(label, count)| GroupCount { label, count })
            .collect();
        rows.sort_by(|left, right| right.count.cmp(&left.count));
        Ok(rows)
    }
}
