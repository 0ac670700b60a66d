//! Professional directory handlers.

use actix_web::{HttpResponse, web};

use vita_core::domain::EntityId;
use vita_shared::dto::ProfessionalsQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/professionals/specialties
pub async fn list_specialties(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let specialties = state.professionals.list_specialties().await?;
    Ok(HttpResponse::Ok().json(specialties))
}

/// GET /api/professionals?specialtyId=&lat=&lng=&radius=
///
/// With a full location the results are ordered nearest first.
pub async fn search_professionals(
    state: web::Data<AppState>,
    query: web::Query<ProfessionalsQuery>,
) -> AppResult<HttpResponse> {
    if query.radius.is_some_and(|r| !r.is_finite() || r < 0.0) {
        return Err(AppError::BadRequest(
            "radius must be a non-negative number of kilometers".to_string(),
        ));
    }

    let professionals = state
        .professionals
        .search_professionals(query.to_query())
        .await?;
    Ok(HttpResponse::Ok().json(professionals))
}

/// GET /api/professionals/{id}
pub async fn get_professional(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let professional = state
        .professionals
        .find_professional(id)
        .await?
        .ok_or_else(|| AppError::not_found("Professional", id))?;

    Ok(HttpResponse::Ok().json(professional))
}
