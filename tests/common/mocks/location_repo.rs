use std::sync::Mutex;

use async_trait::async_trait;
use car_rental_backend::domain::Location;
use car_rental_backend::error::AppResult;
use car_rental_backend::infrastructure::repositories::LocationRepository;
use uuid::Uuid;

#[derive(Default)]
pub struct MockLocationRepo {
    pub locations: Mutex<Vec<Location>>,
}

impl MockLocationRepo {
    pub fn push(&self, location: Location) {
        self.locations
            .lock()
            .expect("locations mutex poisoned")
            .push(location);
    }
}

#[async_trait]
impl LocationRepository for MockLocationRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>> {
        Ok(self
            .locations
            .lock()
            .expect("locations mutex poisoned")
            .iter()
            .find(|location| location.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Location>> {
        let mut rows = self
            .locations
            .lock()
            .expect("locations mutex poisoned")
            .clone();
        rows.sort_by(|left, right| {
            (&left.country, &left.state, &left.city).cmp(&(
                &right.country,
                &right.state,
                &right.city,
            ))
        });
        Ok(rows)
    }

    async fn create(&self, location: &Location) -> AppResult<Location> {
        self.push(location.clone());
        Ok(location.clone())
    }

    async fn count_all(&self) -> AppResult<i64> {
        Ok(self
            .locations
            .lock()
            .expect("locations mutex poisoned")
            .len() as i64)
    }
}
