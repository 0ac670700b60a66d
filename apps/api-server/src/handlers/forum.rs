//! Forum handlers: categories, posts, comments and votes.

use actix_web::{HttpResponse, web};
use validator::Validate;

use vita_core::domain::{EntityId, Vote};
use vita_shared::dto::{CreateCommentRequest, CreateForumPostRequest, ForumPostsQuery, VoteRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/forum/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.forum.list_forum_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/forum/posts?categoryId=&sortBy=popular
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ForumPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = if query.by_popularity() {
        let mut posts = state.forum.list_posts_by_popularity().await?;
        if let Some(category_id) = query.category_id {
            posts.retain(|p| p.category_id == category_id);
        }
        posts
    } else {
        state.forum.list_posts(query.category_id).await?
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/forum/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .forum
        .find_post(id)
        .await?
        .ok_or_else(|| AppError::not_found("ForumPost", id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/forum/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateForumPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.forum.create_post(req.into()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/forum/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
) -> AppResult<HttpResponse> {
    let comments = state.forum.list_comments(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/forum/posts/{id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let comment = state
        .forum
        .create_comment(req.for_post(path.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(comment))
}

/// POST /api/forum/posts/{id}/vote
///
/// Returns the post with its updated counters.
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<VoteRequest>,
) -> AppResult<HttpResponse> {
    let VoteRequest { user_id, is_upvote } = body.into_inner();

    let post = state
        .forum
        .vote(path.into_inner(), user_id, Vote::from(is_upvote))
        .await?;
    Ok(HttpResponse::Ok().json(post))
}
