use std::sync::Mutex;

use async_trait::async_trait;
use car_rental_backend::domain::MaintenanceRecord;
use car_rental_backend::error::AppResult;
use car_rental_backend::infrastructure::repositories::MaintenanceRepository;
use uuid::Uuid;

#[derive(Default)]
pub struct MockMaintenanceRepo {
    pub records: Mutex<Vec<MaintenanceRecord>>,
}

impl MockMaintenanceRepo {
    pub fn push(&self, record: MaintenanceRecord) {
        self.records
            .lock()
            .expect("records mutex poisoned")
            .push(record);
    }
}

#[async_trait]
impl MaintenanceRepository for MockMaintenanceRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceRecord>> {
        Ok(self
            .records
            .lock()
            .expect("records mutex poisoned")
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn list(
        &self,
        car_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceRecord>> {
        let rows: Vec<MaintenanceRecord> = self
            .records
            .lock()
            .expect("records mutex poisoned")
            .iter()
            .filter(|record| car_id.is_none_or(|car_id| record.car_id == car_id))
            .cloned()
            .collect();

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(rows.into_iter().skip(start).take(limit).collect())
    }

    async fn count_list(&self, car_id: Option<Uuid>) -> AppResult<i64> {
        Ok(self
            .records
            .lock()
            .expect("records mutex poisoned")
            .iter()
            .filter(|record| car_id.is_none_or(|car_id| record.car_id == car_id))
            .count() as i64)
    }

    async fn create(&self, record: &MaintenanceRecord) -> AppResult<MaintenanceRecord> {
        self.push(record.clone());
        Ok(record.clone())
    }
}
