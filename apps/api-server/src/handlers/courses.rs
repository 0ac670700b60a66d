//! Course catalogue handlers.

use actix_web::{HttpResponse, web};

use vita_core::domain::EntityId;
use vita_shared::dto::CoursesQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/courses/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.courses.list_course_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/courses?categoryId=&featured=true
pub async fn list_courses(
    state: web::Data<AppState>,
    query: web::Query<CoursesQuery>,
) -> AppResult<HttpResponse> {
    let courses = if query.featured {
        let mut courses = state.courses.list_featured().await?;
        if let Some(category_id) = query.category_id {
            courses.retain(|c| c.category_id == category_id);
        }
        courses
    } else {
        state.courses.list_courses(query.category_id).await?
    };

    Ok(HttpResponse::Ok().json(courses))
}

/// GET /api/courses/{id}
pub async fn get_course(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let course = state
        .courses
        .find_course(id)
        .await?
        .ok_or_else(|| AppError::not_found("Course", id))?;

    Ok(HttpResponse::Ok().json(course))
}
