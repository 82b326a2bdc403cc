use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::geo::{self, Positioned};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zip_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Great-circle distance to another location in kilometres; missing
    /// coordinates on either side yield `f64::INFINITY`.
    pub fn distance_km(&self, other: &Location) -> f64 {
        geo::distance_km(self, other)
    }
}

impl Positioned for Location {
    fn position(&self) -> Option<(f64, f64)> {
        self.coordinates()
    }
}
