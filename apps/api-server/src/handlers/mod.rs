//! HTTP handlers and route configuration.

mod clinical;
mod connections;
mod courses;
mod forum;
mod health;
mod professionals;
mod users;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies, query strings and ids become problem details too.
    let json = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());
    let query = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());
    let path = web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/api")
            .app_data(json)
            .app_data(query)
            .app_data(path)
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::create_user))
                    .route(
                        "/by-username/{username}",
                        web::get().to(users::get_user_by_username),
                    )
                    .route("/{id}", web::get().to(users::get_user))
                    .route("/{id}", web::patch().to(users::update_user))
                    .route("/{id}/nearby", web::get().to(users::nearby_users))
                    .route("/{id}/matches", web::get().to(users::user_matches)),
            )
            .service(
                web::scope("/connections")
                    .route("", web::post().to(connections::create_connection))
                    .route("", web::get().to(connections::get_connection)),
            )
            .service(
                web::scope("/forum")
                    .route("/categories", web::get().to(forum::list_categories))
                    .route("/posts", web::get().to(forum::list_posts))
                    .route("/posts", web::post().to(forum::create_post))
                    .route("/posts/{id}", web::get().to(forum::get_post))
                    .route("/posts/{id}/comments", web::get().to(forum::list_comments))
                    .route("/posts/{id}/comments", web::post().to(forum::create_comment))
                    .route("/posts/{id}/vote", web::post().to(forum::vote)),
            )
            .service(
                web::scope("/courses")
                    .route("", web::get().to(courses::list_courses))
                    .route("/categories", web::get().to(courses::list_categories))
                    .route("/{id}", web::get().to(courses::get_course)),
            )
            .service(
                web::scope("/professionals")
                    .route("", web::get().to(professionals::search_professionals))
                    .route(
                        "/specialties",
                        web::get().to(professionals::list_specialties),
                    )
                    .route("/{id}", web::get().to(professionals::get_professional)),
            )
            .service(
                web::scope("/clinical")
                    .route("/categories", web::get().to(clinical::list_categories))
                    .route("/categories/{id}", web::get().to(clinical::get_category))
                    .route("/conditions", web::get().to(clinical::list_conditions))
                    .route("/conditions/{id}", web::get().to(clinical::get_condition)),
            ),
    );
}
