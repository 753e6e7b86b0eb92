use serde::{Deserialize, Serialize};

use crate::bookings::repo_types::Booking;

/// Request body for `POST /book`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub technician_id: Option<u64>,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub service_type: Option<String>,
    pub service_id: Option<u64>,
    pub price: Option<f64>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub user_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedBookingResponse {
    pub message: String,
    pub booking: Booking,
}
