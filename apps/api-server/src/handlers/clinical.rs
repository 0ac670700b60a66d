//! Clinical reference handlers.

use actix_web::{HttpResponse, web};

use vita_core::domain::EntityId;
use vita_shared::dto::ConditionsQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/clinical/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.clinical.list_clinical_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/clinical/categories/{id}
pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let category = state
        .clinical
        .find_clinical_category(id)
        .await?
        .ok_or_else(|| AppError::not_found("ClinicalCategory", id))?;

    Ok(HttpResponse::Ok().json(category))
}

/// GET /api/clinical/conditions?categoryId=
pub async fn list_conditions(
    state: web::Data<AppState>,
    query: web::Query<ConditionsQuery>,
) -> AppResult<HttpResponse> {
    let conditions = state.clinical.list_conditions(query.category_id).await?;
    Ok(HttpResponse::Ok().json(conditions))
}

/// GET /api/clinical/conditions/{id}
pub async fn get_condition(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let condition = state
        .clinical
        .find_condition(id)
        .await?
        .ok_or_else(|| AppError::not_found("ClinicalCondition", id))?;

    Ok(HttpResponse::Ok().json(condition))
}
