use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::store::Record;

/// Booking record in the bookings collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub technician_id: u64,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub service_id: u64,
    #[serde(default)]
    pub price: f64,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub user_id: Option<u64>, // null for guest bookings
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Record for Booking {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Booking {
    /// Bookings owned by `user_id`, in stored order.
    pub fn owned_by(bookings: Vec<Booking>, user_id: u64) -> Vec<Booking> {
        bookings
            .into_iter()
            .filter(|b| b.user_id == Some(user_id))
            .collect()
    }
}
