use async_trait::async_trait;

use crate::domain::{
    ClinicalCategory, ClinicalCondition, Connection, Course, CourseCategory, EntityId,
    ForumCategory, ForumComment, ForumPost, NewClinicalCategory, NewClinicalCondition,
    NewConnection, NewCourse, NewCourseCategory, NewForumCategory, NewForumComment, NewForumPost,
    NewProfessional, NewProfessionalSpecialty, NewUser, Professional, ProfessionalSpecialty, User,
    UserPatch, Vote,
};
use crate::error::RepoError;
use crate::search::ProfessionalQuery;

/// User profiles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, id: EntityId) -> Result<Option<User>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Fails with `Conflict` when the username is already taken.
    async fn create_user(&self, user: NewUser) -> Result<User, RepoError>;

    /// Returns `None` for an unknown id.
    async fn update_user(&self, id: EntityId, patch: UserPatch)
        -> Result<Option<User>, RepoError>;
}

/// Likes, rejections and matches between users, plus nearby discovery.
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// The directed edge `user_id -> target_user_id`, if any.
    async fn find_connection(
        &self,
        user_id: EntityId,
        target_user_id: EntityId,
    ) -> Result<Option<Connection>, RepoError>;

    /// Insert a new directed edge.
    ///
    /// Fails with `Conflict` if the ordered pair already has one. A `liked`
    /// edge facing a `liked` reverse edge promotes both to `matched` in the
    /// same step; the returned record carries the promoted status.
    async fn create_connection(&self, connection: NewConnection) -> Result<Connection, RepoError>;

    /// Users within `max_distance_km` that `user_id` has no outbound edge to.
    /// Empty when the requester is unknown or has no coordinates.
    async fn find_nearby(
        &self,
        user_id: EntityId,
        max_distance_km: f64,
    ) -> Result<Vec<User>, RepoError>;

    /// Profiles of everyone `user_id` is matched with.
    async fn find_matches(&self, user_id: EntityId) -> Result<Vec<User>, RepoError>;
}

/// Forum categories, posts, comments and votes.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    async fn list_forum_categories(&self) -> Result<Vec<ForumCategory>, RepoError>;

    async fn create_forum_category(
        &self,
        category: NewForumCategory,
    ) -> Result<ForumCategory, RepoError>;

    /// Newest first, optionally restricted to one category.
    async fn list_posts(&self, category_id: Option<EntityId>) -> Result<Vec<ForumPost>, RepoError>;

    /// Highest score first.
    async fn list_posts_by_popularity(&self) -> Result<Vec<ForumPost>, RepoError>;

    async fn find_post(&self, id: EntityId) -> Result<Option<ForumPost>, RepoError>;

    async fn create_post(&self, post: NewForumPost) -> Result<ForumPost, RepoError>;

    /// Oldest first.
    async fn list_comments(&self, post_id: EntityId) -> Result<Vec<ForumComment>, RepoError>;

    async fn create_comment(&self, comment: NewForumComment) -> Result<ForumComment, RepoError>;

    /// Add one vote to a post. Repeat votes by the same user all count.
    async fn vote(
        &self,
        post_id: EntityId,
        user_id: EntityId,
        vote: Vote,
    ) -> Result<ForumPost, RepoError>;
}

/// Course catalogue.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_course_categories(&self) -> Result<Vec<CourseCategory>, RepoError>;

    async fn create_course_category(&self, category: NewCourseCategory) -> Result<CourseCategory, RepoError>;

    async fn list_courses(&self, category_id: Option<EntityId>) -> Result<Vec<Course>, RepoError>;

    async fn list_featured(&self) -> Result<Vec<Course>, RepoError>;

    async fn find_course(&self, id: EntityId) -> Result<Option<Course>, RepoError>;

    async fn create_course(&self, course: NewCourse) -> Result<Course, RepoError>;
}

/// Healthcare professionals directory.
#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    async fn list_specialties(&self) -> Result<Vec<ProfessionalSpecialty>, RepoError>;

    async fn create_specialty(
        &self,
        specialty: NewProfessionalSpecialty,
    ) -> Result<ProfessionalSpecialty, RepoError>;

    async fn search_professionals(&self, query: ProfessionalQuery) -> Result<Vec<Professional>, RepoError>;

    async fn find_professional(&self, id: EntityId) -> Result<Option<Professional>, RepoError>;

    async fn create_professional(&self, professional: NewProfessional) -> Result<Professional, RepoError>;
}

/// Clinical conditions reference.
#[async_trait]
pub trait ClinicalRepository: Send + Sync {
    async fn list_clinical_categories(&self) -> Result<Vec<ClinicalCategory>, RepoError>;

    async fn find_clinical_category(&self, id: EntityId) -> Result<Option<ClinicalCategory>, RepoError>;

    async fn create_clinical_category(
        &self,
        category: NewClinicalCategory,
    ) -> Result<ClinicalCategory, RepoError>;

    async fn list_conditions(
        &self,
        category_id: Option<EntityId>,
    ) -> Result<Vec<ClinicalCondition>, RepoError>;

    async fn find_condition(&self, id: EntityId) -> Result<Option<ClinicalCondition>, RepoError>;

    async fn create_condition(
        &self,
        condition: NewClinicalCondition,
    ) -> Result<ClinicalCondition, RepoError>;
}
