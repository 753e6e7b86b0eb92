use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{PublicUser, SigninRequest, SigninResponse, SignupRequest, SignupResponse},
        password,
        repo_types::User,
        services::{is_valid_email, normalize_email},
    },
    error::AppError,
    extractors::{parse_id, required, JsonBody},
    state::AppState,
    store::{next_id, Collection},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/:id", get(get_user))
}

fn missing_fields() -> AppError {
    AppError::BadRequest("Missing required fields".into())
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let (Some(email), Some(password), Some(name), Some(phone)) = (
        required(payload.email),
        payload.password.filter(|p| !p.is_empty()),
        required(payload.name),
        required(payload.phone),
    ) else {
        warn!("signup with missing fields");
        return Err(missing_fields());
    };

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::BadRequest("Invalid email".into()));
    }

    // hashed before taking the lock so the users collection is held only
    // for the load-check-save sequence
    let digest = password::hash(password).await?;

    let _guard = state.store.lock(Collection::Users).await;
    let mut users: Vec<User> = state.store.load(Collection::Users).await;

    if User::find_by_email(&users, &email).is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::BadRequest("User already exists".into()));
    }

    let user = User {
        id: next_id(&users),
        email,
        password: digest,
        name,
        phone,
        created_at: OffsetDateTime::now_utc(),
    };
    let user_id = user.id;
    info!(user_id, email = %user.email, "user registered");
    users.push(user);
    state.store.save(Collection::Users, &users).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".into(),
            user_id,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SigninRequest>,
) -> Result<Json<SigninResponse>, AppError> {
    let (Some(email), Some(password)) = (
        required(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        warn!("signin with missing fields");
        return Err(missing_fields());
    };
    let email = normalize_email(&email);

    let users: Vec<User> = state.store.load(Collection::Users).await;
    let Some(user) = User::find_by_email(&users, &email) else {
        warn!(email = %email, "signin unknown email");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    };

    match password::verify(password, user.password.clone()).await {
        Ok(true) => {}
        Ok(false) => {
            warn!(email = %email, user_id = user.id, "signin invalid password");
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }
        Err(e) => {
            error!(user_id = user.id, error = %e, "stored password digest unusable");
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }
    }

    info!(user_id = user.id, "user signed in");
    Ok(Json(SigninResponse {
        message: "Signin successful".into(),
        user_id: user.id,
        name: user.name.clone(),
    }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, AppError> {
    let id = parse_id(&id, "user")?;
    let users: Vec<User> = state.store.load(Collection::Users).await;
    let user = User::find_by_id(&users, id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(PublicUser {
        id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        phone: user.phone.clone(),
    }))
}
