//! Like / reject handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use vita_shared::dto::{ConnectionLookupQuery, CreateConnectionRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/connections
///
/// A like answering an earlier like comes back as `matched`.
pub async fn create_connection(
    state: web::Data<AppState>,
    body: web::Json<CreateConnectionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let connection = state.connections.create_connection(req.into()).await?;
    Ok(HttpResponse::Created().json(connection))
}

/// GET /api/connections?userId=&targetUserId=
pub async fn get_connection(
    state: web::Data<AppState>,
    query: web::Query<ConnectionLookupQuery>,
) -> AppResult<HttpResponse> {
    let ConnectionLookupQuery {
        user_id,
        target_user_id,
    } = query.into_inner();

    let connection = state
        .connections
        .find_connection(user_id, target_user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No connection from user {} to user {}",
                user_id, target_user_id
            ))
        })?;

    Ok(HttpResponse::Ok().json(connection))
}
