use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use crate::{
    catalog::repo_types::{ServiceCatalog, Technician},
    state::AppState,
    store::Collection,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/technicians", get(list_technicians))
        .route("/services", get(list_services))
}

#[instrument(skip(state))]
pub async fn list_technicians(State(state): State<AppState>) -> Json<Vec<Technician>> {
    let technicians: Vec<Technician> = state.store.load(Collection::Technicians).await;
    debug!(count = technicians.len(), "technicians listed");
    Json(technicians)
}

#[instrument(skip(state))]
pub async fn list_services(State(state): State<AppState>) -> Json<ServiceCatalog> {
    let services: ServiceCatalog = state.store.load(Collection::Services).await;
    debug!(categories = services.len(), "services listed");
    Json(services)
}
