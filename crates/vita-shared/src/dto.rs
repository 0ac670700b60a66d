//! Data Transfer Objects - request bodies and query strings for the API.
//!
//! Bodies are validated with `validator` before they are converted into the
//! domain's insert types.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use vita_core::Coordinates;
use vita_core::domain::{
    ConnectionStatus, EntityId, NewConnection, NewForumComment, NewForumPost, NewUser, UserPatch,
};
use vita_core::search::{LocationFilter, ProfessionalQuery};

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ValidationError> {
    if latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        return Err(ValidationError::new("latitude_out_of_range"));
    }
    if longitude.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
        return Err(ValidationError::new("longitude_out_of_range"));
    }
    Ok(())
}

fn new_user_coordinates(req: &CreateUserRequest) -> Result<(), ValidationError> {
    check_coordinates(req.latitude, req.longitude)
}

fn patch_coordinates(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    check_coordinates(req.latitude, req.longitude)
}

/// Request to sign up a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "new_user_coordinates"))]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(max = 150, message = "age is out of range"))]
    pub age: u32,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            name: req.name,
            age: req.age,
            bio: req.bio,
            avatar: req.avatar,
            latitude: req.latitude,
            longitude: req.longitude,
            interests: req.interests,
        }
    }
}

/// Partial profile update; omitted fields are kept.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "patch_coordinates"))]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[validate(range(max = 150, message = "age is out of range"))]
    pub age: Option<u32>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub interests: Option<Vec<String>>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            name: req.name,
            age: req.age,
            bio: req.bio,
            avatar: req.avatar,
            latitude: req.latitude,
            longitude: req.longitude,
            interests: req.interests,
        }
    }
}

fn requested_status(req: &CreateConnectionRequest) -> Result<(), ValidationError> {
    match req.status {
        ConnectionStatus::Liked | ConnectionStatus::Rejected => Ok(()),
        ConnectionStatus::Matched => Err(ValidationError::new("matched_is_not_requestable")),
    }
}

/// Like or reject another user. `matched` cannot be requested directly.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "requested_status"))]
pub struct CreateConnectionRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(range(min = 1))]
    pub target_user_id: i64,
    pub status: ConnectionStatus,
}

impl From<CreateConnectionRequest> for NewConnection {
    fn from(req: CreateConnectionRequest) -> Self {
        Self {
            user_id: req.user_id,
            target_user_id: req.target_user_id,
            status: req.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionLookupQuery {
    pub user_id: EntityId,
    pub target_user_id: EntityId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyQuery {
    /// Search radius in kilometers.
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumPostRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(range(min = 1))]
    pub category_id: i64,
}

impl From<CreateForumPostRequest> for NewForumPost {
    fn from(req: CreateForumPostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            user_id: req.user_id,
            category_id: req.category_id,
        }
    }
}

/// Comment body; the post id comes from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(range(min = 1))]
    pub user_id: i64,
}

impl CreateCommentRequest {
    pub fn for_post(self, post_id: EntityId) -> NewForumComment {
        NewForumComment {
            content: self.content,
            user_id: self.user_id,
            post_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub user_id: EntityId,
    pub is_upvote: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPostsQuery {
    pub category_id: Option<EntityId>,
    /// `popular` orders by score; anything else means newest first.
    pub sort_by: Option<String>,
}

impl ForumPostsQuery {
    pub fn by_popularity(&self) -> bool {
        self.sort_by.as_deref() == Some("popular")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesQuery {
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalsQuery {
    pub specialty_id: Option<EntityId>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Radius in kilometers.
    pub radius: Option<f64>,
}

impl ProfessionalsQuery {
    /// The location filter applies only when `lat`, `lng` and `radius` are all given.
    pub fn to_query(&self) -> ProfessionalQuery {
        let location = match (self.lat, self.lng, self.radius) {
            (Some(lat), Some(lng), Some(radius_km)) => Some(LocationFilter {
                center: Coordinates::new(lat, lng),
                radius_km,
            }),
            _ => None,
        };

        ProfessionalQuery {
            specialty_id: self.specialty_id,
            location,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsQuery {
    pub category_id: Option<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(json: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_signup_parses_camel_case_and_validates() {
        let req = signup(serde_json::json!({
            "username": "alessia32",
            "name": "Alessia",
            "age": 32,
            "latitude": 45.4642,
            "longitude": 9.19
        }));
        assert!(req.validate().is_ok());
        assert!(req.interests.is_empty());

        let user = NewUser::from(req);
        assert_eq!(user.latitude, Some(45.4642));
    }

    #[test]
    fn test_signup_rejects_bad_shapes() {
        let short = signup(serde_json::json!({ "username": "a", "name": "A", "age": 30 }));
        assert!(short.validate().is_err());

        let off_globe = signup(serde_json::json!({
            "username": "alessia32",
            "name": "Alessia",
            "age": 32,
            "latitude": 95.0
        }));
        assert!(off_globe.validate().is_err());
    }

    #[test]
    fn test_connection_request_refuses_matched() {
        let liked: CreateConnectionRequest = serde_json::from_value(serde_json::json!({
            "userId": 1, "targetUserId": 2, "status": "liked"
        }))
        .unwrap();
        assert!(liked.validate().is_ok());

        let matched: CreateConnectionRequest = serde_json::from_value(serde_json::json!({
            "userId": 1, "targetUserId": 2, "status": "matched"
        }))
        .unwrap();
        assert!(matched.validate().is_err());

        let unknown = serde_json::from_value::<CreateConnectionRequest>(serde_json::json!({
            "userId": 1, "targetUserId": 2, "status": "blocked"
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn test_ids_must_be_positive() {
        let post: CreateForumPostRequest = serde_json::from_value(serde_json::json!({
            "title": "Domanda", "content": "...", "userId": 0, "categoryId": 1
        }))
        .unwrap();
        let errors = post.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));

        let comment: CreateCommentRequest = serde_json::from_value(serde_json::json!({
            "content": "Grazie", "userId": 3
        }))
        .unwrap();
        assert!(comment.validate().is_ok());
        assert_eq!(comment.for_post(7).post_id, 7);
    }

    #[test]
    fn test_location_needs_all_three_parts() {
        let partial = ProfessionalsQuery {
            lat: Some(45.46),
            lng: Some(9.19),
            ..Default::default()
        };
        assert!(partial.to_query().location.is_none());

        let full = ProfessionalsQuery {
            specialty_id: Some(2),
            lat: Some(45.46),
            lng: Some(9.19),
            radius: Some(0.0),
        };
        let query = full.to_query();
        assert_eq!(query.specialty_id, Some(2));
        assert_eq!(query.location.map(|l| l.radius_km), Some(0.0));
    }

    #[test]
    fn test_sort_by_popular() {
        let query = ForumPostsQuery {
            sort_by: Some("popular".to_string()),
            ..Default::default()
        };
        assert!(query.by_popularity());
        assert!(!ForumPostsQuery::default().by_popularity());
    }
}
