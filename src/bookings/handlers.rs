use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    bookings::{
        dto::{CreateBookingRequest, CreatedBookingResponse},
        repo_types::Booking,
        services::NewBooking,
    },
    catalog::Technician,
    error::AppError,
    extractors::{parse_id, JsonBody},
    state::AppState,
    store::{next_id, Collection},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/book", post(create_booking))
        .route("/user/:id/bookings", get(list_user_bookings))
}

#[instrument(skip(state, payload))]
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreatedBookingResponse>), AppError> {
    let new = NewBooking::try_from(payload).map_err(|e| {
        warn!(error = %e, "booking rejected");
        e
    })?;

    // an unreadable catalog must not read as "no catalog, accept any technician"
    let technicians: Vec<Technician> = state.store.try_load(Collection::Technicians).await?;
    if !technicians.is_empty() && !technicians.iter().any(|t| t.id == new.technician_id) {
        warn!(technician_id = new.technician_id, "booking for unknown technician");
        return Err(AppError::BadRequest("Unknown technician".into()));
    }

    let _guard = state.store.lock(Collection::Bookings).await;
    let mut bookings: Vec<Booking> = state.store.load(Collection::Bookings).await;
    let booking = new.into_booking(next_id(&bookings), OffsetDateTime::now_utc());
    bookings.push(booking.clone());
    state.store.save(Collection::Bookings, &bookings).await?;

    info!(
        booking_id = booking.id,
        technician_id = booking.technician_id,
        user_id = ?booking.user_id,
        "booking created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedBookingResponse {
            message: "Booking created successfully".into(),
            booking,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let user_id = parse_id(&id, "user")?;
    let bookings: Vec<Booking> = state.store.load(Collection::Bookings).await;
    Ok(Json(Booking::owned_by(bookings, user_id)))
}
