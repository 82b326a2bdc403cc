#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use car_rental_backend::domain::{
    ApplicationStatus, Car, CarStatus, Client, ClientCategory, Driver, DriverApplication,
    DriverStatus, FuelType, Location, MaintenanceRecord, Message, MessageType, OrderStatus,
    RentalOrder, Transmission,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

// Counter for generating unique test values
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_id() -> u64 {
    TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn test_location(city: &str, latitude: Option<f64>, longitude: Option<f64>) -> Location {
    Location {
        id: Uuid::new_v4(),
        city: city.to_string(),
        state: city.to_string(),
        country: "Bangladesh".to_string(),
        latitude,
        longitude,
        zip_code: None,
        created_at: Utc::now(),
    }
}

pub fn test_car(name: &str, status: CarStatus, location_id: Option<Uuid>) -> Car {
    let id = next_id();
    Car {
        id: Uuid::new_v4(),
        car_name: name.to_string(),
        company_name: "Toyota".to_string(),
        model_year: Some(2021),
        num_of_seats: 5,
        cost_per_day: Decimal::new(350000, 2),
        description: format!("Fleet car {name}, well maintained."),
        likes: 0,
        status,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Petrol,
        mileage: None,
        location_id,
        license_plate: Some(format!("DHK-{id:04}")),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_client(first_name: &str) -> Client {
    let id = next_id();
    Client {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Rahman".to_string(),
        email: format!("{}{}@example.com", first_name.to_lowercase(), id),
        phone_number: "01700000000".to_string(),
        address: "House 7, Road 11, Dhanmondi, Dhaka".to_string(),
        date_of_birth: None,
        license_number: format!("CL-{id:06}"),
        category: ClientCategory::Regular,
        location_id: None,
        is_verified: false,
        credit_score: 700,
        total_bookings: 0,
        created_at: Utc::now(),
    }
}

pub fn test_driver(name: &str, status: DriverStatus, salary: i64) -> Driver {
    let id = next_id();
    Driver {
        id: Uuid::new_v4(),
        name: name.to_string(),
        license_no: format!("DL-{id:06}"),
        contact_number: "01800000000".to_string(),
        address: "Mirpur 10, Dhaka".to_string(),
        salary: Decimal::new(salary, 0),
        hired_date: Utc::now().date_naive(),
        location_id: None,
        status,
        experience_years: 4,
        rating: Decimal::new(500, 2),
        total_trips: 0,
    }
}

pub fn test_application(name: &str, status: ApplicationStatus) -> DriverApplication {
    let id = next_id();
    DriverApplication {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}{}@example.com", name.to_lowercase(), id),
        license_no: format!("AP-{id:06}"),
        contact_number: "01900000000".to_string(),
        address: "Uttara Sector 4, Dhaka".to_string(),
        experience_years: 2,
        location_id: None,
        status,
        applied_at: Utc::now(),
        reviewed_at: None,
        notes: None,
    }
}

pub fn test_order(car_id: Uuid, client_id: Uuid, status: OrderStatus) -> RentalOrder {
    let now = Utc::now();
    RentalOrder {
        id: Uuid::new_v4(),
        reference: RentalOrder::new_reference(),
        car_id,
        client_id,
        driver_id: None,
        start_date: now,
        end_date: now + Duration::days(3),
        pickup_location_id: None,
        dropoff_location_id: None,
        total_amount: Decimal::new(1050000, 2),
        status,
        special_requirements: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_message(subject: &str, message_type: MessageType) -> Message {
    let id = next_id();
    Message {
        id: Uuid::new_v4(),
        sender_name: "Tanvir Ahmed".to_string(),
        sender_email: format!("tanvir{id}@example.com"),
        message_type,
        subject: subject.to_string(),
        body: "I would like to know more about weekend rental rates.".to_string(),
        is_read: false,
        response: None,
        responded_at: None,
        created_at: Utc::now(),
    }
}

pub fn test_maintenance(car_id: Uuid) -> MaintenanceRecord {
    MaintenanceRecord {
        id: Uuid::new_v4(),
        car_id,
        maintenance_type: "Oil change".to_string(),
        description: "Scheduled engine oil and filter change.".to_string(),
        cost: Decimal::new(450000, 2),
        maintenance_date: Utc::now().date_naive(),
        next_maintenance_date: None,
        performed_by: "City Motors Workshop".to_string(),
    }
}
