//! User profile, nearby feed and match handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use vita_core::domain::EntityId;
use vita_shared::dto::{CreateUserRequest, NearbyQuery, UpdateUserRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

    Ok(HttpResponse::Ok().json(user))
}

/// GET /api/users/by-username/{username}
pub async fn get_user_by_username(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = state.users.create_user(req.into()).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok(HttpResponse::Created().json(user))
}

/// PATCH /api/users/{id}
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let user = state
        .users
        .update_user(id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

    Ok(HttpResponse::Ok().json(user))
}

/// GET /api/users/{id}/nearby?distance=
///
/// Users within `distance` km (default from config) that the requester has
/// not liked, rejected or matched yet.
pub async fn nearby_users(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    query: web::Query<NearbyQuery>,
) -> AppResult<HttpResponse> {
    let distance = query
        .distance
        .unwrap_or(state.nearby_default_distance_km);
    if !distance.is_finite() || distance < 0.0 {
        return Err(AppError::BadRequest(
            "distance must be a non-negative number of kilometers".to_string(),
        ));
    }

    let users = state.connections.find_nearby(path.into_inner(), distance).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{id}/matches
pub async fn user_matches(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let matches = state.connections.find_matches(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(matches))
}
