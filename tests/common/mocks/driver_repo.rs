use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use car_rental_backend::domain::{
    ApplicationStatus, Driver, DriverApplication, DriverStatus,
};
use car_rental_backend::error::{AppError, AppResult};
use car_rental_backend::infrastructure::repositories::{
    DriverListParams, DriverRepository, GroupCount,
};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Default)]
pub struct MockDriverRepo {
    pub drivers: Mutex<Vec<Driver>>,
    pub applications: Mutex<Vec<DriverApplication>>,
}

impl MockDriverRepo {
    pub fn push(&self, driver: Driver) {
        self.drivers
            .lock()
            .expect("drivers mutex poisoned")
            .push(driver);
    }

    pub fn push_application(&self, application: DriverApplication) {
        self.applications
            .lock()
            .expect("applications mutex poisoned")
            .push(application);
    }

    fn matches(driver: &Driver, params: &DriverListParams) -> bool {
        let query_ok = params
            .query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .is_none_or(|q| {
                let needle = q.trim().to_lowercase();
                driver.name.to_lowercase().contains(&needle)
                    || driver.license_no.to_lowercase().contains(&needle)
                    || driver.contact_number.contains(needle.as_str())
            });

        query_ok && params.status.is_none_or(|status| driver.status == status)
    }
}

#[async_trait]
impl DriverRepository for MockDriverRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>> {
        Ok(self
            .drivers
            .lock()
            .expect("drivers mutex poisoned")
            .iter()
            .find(|driver| driver.id == id)
            .cloned())
    }

    async fn list(
        &self,
        params: &DriverListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Driver>> {
        let rows: Vec<Driver> = self
            .drivers
            .lock()
            .expect("drivers mutex poisoned")
            .iter()
            .filter(|driver| Self::matches(driver, params))
            .cloned()
            .collect();

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(rows.into_iter().skip(start).take(limit).collect())
    }

    async fn count_list(&self, params: &DriverListParams) -> AppResult<i64> {
        Ok(self
            .drivers
            .lock()
            .expect("drivers mutex poisoned")
            .iter()
            .filter(|driver| Self::matches(driver, params))
            .count() as i64)
    }

    async fn create(&self, driver: &Driver) -> AppResult<Driver> {
        self.push(driver.clone());
        Ok(driver.clone())
    }

    async fn update(&self, driver: &Driver) -> AppResult<Driver> {
        let mut rows = self.drivers.lock().expect("drivers mutex poisoned");
        if let Some(existing) = rows.iter_mut().find(|existing| existing.id == driver.id) {
            *existing = driver.clone();
            Ok(driver.clone())
        } else {
            Err(AppError::NotFound("driver not found".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.drivers
            .lock()
            .expect("drivers mutex poisoned")
            .retain(|driver| driver.id != id);
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        Ok(self.drivers.lock().expect("drivers mutex poisoned").len() as i64)
    }

    async fn count_by_status(&self, status: DriverStatus) -> AppResult<i64> {
        Ok(self
            .drivers
            .lock()
            .expect("drivers mutex poisoned")
            .iter()
            .filter(|driver| driver.status == status)
            .count() as i64)
    }

    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64> {
        Ok(self
            .drivers
            .lock()
            .expect("drivers mutex poisoned")
            .iter()
            .filter(|driver| driver.location_id == Some(location_id))
            .count() as i64)
    }

    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for driver in self.drivers.lock().expect("drivers mutex poisoned").iter() {
            let label = serde_json::to_value(driver.status)
                .expect("status should serialize")
                .as_str()
                .expect("status serializes to a string")
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

    async fn average_salary(&self) -> AppResult<Option<Decimal>> {
        let drivers = self.drivers.lock().expect("drivers mutex poisoned");
        if drivers.is_empty() {
            return Ok(None);
        }
        let sum: Decimal = drivers.iter().map(|driver| driver.salary).sum();
        Ok(Some(
            (sum / Decimal::from(drivers.len() as i64)).round_dp(2),
        ))
    }

    async fn increase_salaries(&self, driver_ids: &[Uuid], percentage: Decimal) -> AppResult<u64> {
        let factor = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
        let mut updated = 0_u64;
        let mut rows = self.drivers.lock().expect("drivers mutex poisoned");
        for driver in rows.iter_mut() {
            if driver_ids.contains(&driver.id) {
                driver.salary = (driver.salary * factor).round_dp(2);
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn create_application(
        &self,
        application: &DriverApplication,
    ) -> AppResult<DriverApplication> {
        self.push_application(application.clone());
        Ok(application.clone())
    }

    async fn find_application(&self, id: Uuid) -> AppResult<Option<DriverApplication>> {
        Ok(self
            .applications
            .lock()
            .expect("applications mutex poisoned")
            .iter()
            .find(|application| application.id == id)
            .cloned())
    }

    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<DriverApplication>> {
        let rows: Vec<DriverApplication> = self
            .applications
            .lock()
            .expect("applications mutex poisoned")
            .iter()
            .filter(|application| status.is_none_or(|status| application.status == status))
            .cloned()
            .collect();

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(rows.into_iter().skip(start).take(limit).collect())
    }

    async fn count_applications(&self, status: Option<ApplicationStatus>) -> AppResult<i64> {
        Ok(self
            .applications
            .lock()
            .expect("applications mutex poisoned")
            .iter()
            .filter(|application| status.is_none_or(|status| application.status == status))
            .count() as i64)
    }

    async fn approve_application(&self, id: Uuid, starting_salary: Decimal) -> AppResult<Driver> {
        let mut applications = self
            .applications
            .lock()
            .expect("applications mutex poisoned");
        let application = applications
            .iter_mut()
            .find(|application| application.id == id)
            .ok_or_else(|| AppError::NotFound("driver application not found".to_string()))?;

        if !application.is_open() {
            return Err(AppError::Conflict(
                "application has already been reviewed".to_string(),
            ));
        }

        let driver = Driver {
            id: Uuid::new_v4(),
            name: application.name.clone(),
            license_no: application.license_no.clone(),
            contact_number: application.contact_number.clone(),
            address: application.address.clone(),
            salary: starting_salary,
            hired_date: Utc::now().date_naive(),
            location_id: application.location_id,
            status: DriverStatus::Active,
            experience_years: application.experience_years,
            rating: Decimal::new(500, 2),
            total_trips: 0,
        };

        application.status = ApplicationStatus::Approved;
        application.reviewed_at = Some(Utc::now());
        drop(applications);

        self.push(driver.clone());
        Ok(driver)
    }

    async fn reject_application(
        &self,
        id: Uuid,
        notes: Option<String>,
    ) -> AppResult<DriverApplication> {
        let mut applications = self
            .applications
            .lock()
            .expect("applications mutex poisoned");
        let application = applications
            .iter_mut()
            .find(|application| application.id == id)
            .ok_or_else(|| AppError::NotFound("driver application not found".to_string()))?;

        if !application.is_open() {
            return Err(AppError::Conflict(
                "application has already been reviewed".to_string(),
            ));
        }

        application.status = ApplicationStatus::Rejected;
        application.reviewed_at = Some(Utc::now());
        application.notes = notes;
        Ok(application.clone())
    }
}
