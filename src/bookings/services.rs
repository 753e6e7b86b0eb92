use time::OffsetDateTime;

use crate::{
    bookings::{dto::CreateBookingRequest, repo_types::Booking},
    error::AppError,
    extractors::required,
};

/// Validated booking fields, everything but the id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub technician_id: u64,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub service_id: u64,
    pub price: f64,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub user_id: Option<u64>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = AppError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        let (
            Some(technician_id),
            Some(customer_name),
            Some(phone),
            Some(address),
            Some(service_type),
            Some(service_id),
            Some(date),
        ) = (
            req.technician_id,
            required(req.customer_name),
            required(req.phone),
            required(req.address),
            required(req.service_type),
            req.service_id,
            required(req.date),
        )
        else {
            return Err(AppError::BadRequest("Missing required fields".into()));
        };

        let price = req.price.unwrap_or(0.0);
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::BadRequest("Invalid price".into()));
        }

        Ok(Self {
            technician_id,
            customer_name,
            phone,
            address,
            service_type,
            service_id,
            price,
            date,
            time: req.time.unwrap_or_default().trim().to_string(),
            notes: req.notes.unwrap_or_default().trim().to_string(),
            user_id: req.user_id,
        })
    }
}

impl NewBooking {
    pub fn into_booking(self, id: u64, created_at: OffsetDateTime) -> Booking {
        Booking {
            id,
            technician_id: self.technician_id,
            customer_name: self.customer_name,
            phone: self.phone,
            address: self.address,
            service_type: self.service_type,
            service_id: self.service_id,
            price: self.price,
            date: self.date,
            time: self.time,
            notes: self.notes,
            user_id: self.user_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CreateBookingRequest {
        CreateBookingRequest {
            technician_id: Some(1),
            customer_name: Some("Ann".into()),
            phone: Some("555-0100".into()),
            address: Some("1 Main St".into()),
            service_type: Some("Plumbing".into()),
            service_id: Some(101),
            date: Some("2026-11-02".into()),
            ..Default::default()
        }
    }

    #[test]
    fn optional_fields_take_defaults() {
        let b = NewBooking::try_from(complete()).unwrap();
        assert_eq!(b.price, 0.0);
        assert_eq!(b.time, "");
        assert_eq!(b.notes, "");
        assert_eq!(b.user_id, None);
    }

    #[test]
    fn each_required_field_is_enforced() {
        let strip: [fn(&mut CreateBookingRequest); 7] = [
            |r| r.technician_id = None,
            |r| r.customer_name = None,
            |r| r.phone = Some("  ".into()),
            |r| r.address = None,
            |r| r.service_type = None,
            |r| r.service_id = None,
            |r| r.date = Some(String::new()),
        ];
        for f in strip {
            let mut req = complete();
            f(&mut req);
            let err = NewBooking::try_from(req).unwrap_err();
            assert_eq!(err.to_string(), "Missing required fields");
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut req = complete();
        req.price = Some(-5.0);
        assert!(matches!(NewBooking::try_from(req), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn into_booking_assigns_id_and_timestamp() {
        let mut req = complete();
        req.user_id = Some(9);
        req.price = Some(49.5);
        let booking = NewBooking::try_from(req)
            .unwrap()
            .into_booking(3, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(booking.id, 3);
        assert_eq!(booking.user_id, Some(9));
        assert_eq!(booking.price, 49.5);
        assert_eq!(booking.created_at, OffsetDateTime::UNIX_EPOCH);
    }
}
