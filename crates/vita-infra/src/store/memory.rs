//! In-memory entity store - the single owner of every table.

use async_trait::async_trait;
use tokio::sync::RwLock;

use vita_core::domain::{
    ClinicalCategory, ClinicalCondition, Connection, ConnectionStatus, Course, CourseCategory,
    EntityId, ForumCategory, ForumComment, ForumPost, NewClinicalCategory, NewClinicalCondition,
    NewConnection, NewCourse, NewCourseCategory, NewForumCategory, NewForumComment, NewForumPost,
    NewProfessional, NewProfessionalSpecialty, NewUser, Professional, ProfessionalSpecialty, User,
    UserPatch, Vote,
};
use vita_core::error::RepoError;
use vita_core::matching;
use vita_core::ports::{
    ClinicalRepository, ConnectionRepository, CourseRepository, ForumRepository,
    ProfessionalRepository, UserRepository,
};
use vita_core::search::ProfessionalQuery;

use super::table::Table;

#[derive(Default)]
struct Tables {
    users: Table<User>,
    connections: Table<Connection>,
    forum_categories: Table<ForumCategory>,
    forum_posts: Table<ForumPost>,
    forum_comments: Table<ForumComment>,
    course_categories: Table<CourseCategory>,
    courses: Table<Course>,
    specialties: Table<ProfessionalSpecialty>,
    professionals: Table<Professional>,
    clinical_categories: Table<ClinicalCategory>,
    clinical_conditions: Table<ClinicalCondition>,
}

impl Tables {
    fn require_user(&self, id: EntityId) -> Result<(), RepoError> {
        if self.users.contains(id) {
            Ok(())
        } else {
            Err(RepoError::not_found("User", id))
        }
    }

    fn connection_between(&self, user_id: EntityId, target_user_id: EntityId) -> Option<&Connection> {
        self.connections
            .values()
            .find(|c| c.user_id == user_id && c.target_user_id == target_user_id)
    }
}

/// Process-lifetime store for every entity kind.
///
/// All tables sit behind one async `RwLock`. Every mutation, id allocation
/// included, runs inside a single write-lock section, so multi-record updates
/// such as match promotion and vote increments never interleave.
/// Data is lost when the store is dropped.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// A store populated with the sample data set.
    #[cfg(feature = "seed")]
    pub async fn seeded() -> Result<Self, RepoError> {
        let store = Self::new();
        super::seed::load(&store).await?;
        Ok(store)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_user(&self, id: EntityId) -> Result<Option<User>, RepoError> {
        Ok(self.tables.read().await.users.snapshot(id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(RepoError::Conflict(format!(
                "username '{}' already exists",
                user.username
            )));
        }

        let created = tables.users.insert_with(|id| User::new(id, user)).clone();
        tracing::debug!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn update_user(
        &self,
        id: EntityId,
        patch: UserPatch,
    ) -> Result<Option<User>, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains(id) {
            return Ok(None);
        }

        if let Some(username) = &patch.username {
            let taken = tables
                .users
                .values()
                .any(|u| u.id != id && &u.username == username);
            if taken {
                return Err(RepoError::Conflict(format!(
                    "username '{}' already exists",
                    username
                )));
            }
        }

        let Some(user) = tables.users.get_mut(id) else {
            return Ok(None);
        };
        user.apply(patch);
        tracing::debug!(user_id = id, "User updated");
        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryStore {
    async fn find_connection(
        &self,
        user_id: EntityId,
        target_user_id: EntityId,
    ) -> Result<Option<Connection>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.connection_between(user_id, target_user_id).cloned())
    }

    async fn create_connection(&self, connection: NewConnection) -> Result<Connection, RepoError> {
        let (user_id, target_user_id) = (connection.user_id, connection.target_user_id);
        if user_id == target_user_id {
            return Err(RepoError::Validation(
                "a user cannot connect to themselves".to_string(),
            ));
        }

        let mut tables = self.tables.write().await;
        tables.require_user(user_id)?;
        tables.require_user(target_user_id)?;

        if tables.connection_between(user_id, target_user_id).is_some() {
            return Err(RepoError::Conflict(format!(
                "connection {} -> {} already exists",
                user_id, target_user_id
            )));
        }

        let reverse_id = tables
            .connection_between(target_user_id, user_id)
            .filter(|reverse| connection.status.promotes_with(reverse.status))
            .map(|reverse| reverse.id);

        let inserted = tables
            .connections
            .insert_with(|id| Connection::new(id, connection));
        if reverse_id.is_some() {
            inserted.status = ConnectionStatus::Matched;
        }
        let created = inserted.clone();

        if let Some(reverse) = reverse_id.and_then(|id| tables.connections.get_mut(id)) {
            reverse.status = ConnectionStatus::Matched;
            tracing::info!(user_id, target_user_id, "Mutual like promoted to match");
        }

        tracing::debug!(
            connection_id = created.id,
            user_id,
            target_user_id,
            status = %created.status,
            "Connection created"
        );
        Ok(created)
    }

    async fn find_nearby(
        &self,
        user_id: EntityId,
        max_distance_km: f64,
    ) -> Result<Vec<User>, RepoError> {
        let tables = self.tables.read().await;

        let Some(requester) = tables.users.get(user_id) else {
            return Ok(Vec::new());
        };

        let excluded = matching::connected_targets(user_id, tables.connections.values());
        Ok(matching::nearby_users(
            requester,
            tables.users.values(),
            &excluded,
            max_distance_km,
        ))
    }

    async fn find_matches(&self, user_id: EntityId) -> Result<Vec<User>, RepoError> {
        let tables = self.tables.read().await;

        Ok(tables
            .connections
            .values()
            .filter(|c| c.user_id == user_id && c.is_match())
            .filter_map(|c| tables.users.snapshot(c.target_user_id))
            .collect())
    }
}

#[async_trait]
impl ForumRepository for InMemoryStore {
    async fn list_forum_categories(&self) -> Result<Vec<ForumCategory>, RepoError> {
        Ok(self.tables.read().await.forum_categories.all())
    }

    async fn create_forum_category(
        &self,
        category: NewForumCategory,
    ) -> Result<ForumCategory, RepoError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .forum_categories
            .insert_with(|id| ForumCategory::new(id, category))
            .clone())
    }

    async fn list_posts(&self, category_id: Option<EntityId>) -> Result<Vec<ForumPost>, RepoError> {
        let mut posts = self
            .tables
            .read()
            .await
            .forum_posts
            .select(|p| category_id.is_none_or(|id| p.category_id == id));
        ForumPost::sort_by_recency(&mut posts);
        Ok(posts)
    }

    async fn list_posts_by_popularity(&self) -> Result<Vec<ForumPost>, RepoError> {
        let mut posts = self.tables.read().await.forum_posts.all();
        ForumPost::sort_by_popularity(&mut posts);
        Ok(posts)
    }

    async fn find_post(&self, id: EntityId) -> Result<Option<ForumPost>, RepoError> {
        Ok(self.tables.read().await.forum_posts.snapshot(id))
    }

    async fn create_post(&self, post: NewForumPost) -> Result<ForumPost, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_user(post.user_id)?;
        if !tables.forum_categories.contains(post.category_id) {
            return Err(RepoError::not_found("ForumCategory", post.category_id));
        }

        let created = tables
            .forum_posts
            .insert_with(|id| ForumPost::new(id, post))
            .clone();
        tracing::debug!(post_id = created.id, user_id = created.user_id, "Forum post created");
        Ok(created)
    }

    async fn list_comments(&self, post_id: EntityId) -> Result<Vec<ForumComment>, RepoError> {
        let mut comments = self
            .tables
            .read()
            .await
            .forum_comments
            .select(|c| c.post_id == post_id);
        ForumComment::sort_by_thread_order(&mut comments);
        Ok(comments)
    }

    async fn create_comment(&self, comment: NewForumComment) -> Result<ForumComment, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_user(comment.user_id)?;
        if !tables.forum_posts.contains(comment.post_id) {
            return Err(RepoError::not_found("ForumPost", comment.post_id));
        }

        let created = tables
            .forum_comments
            .insert_with(|id| ForumComment::new(id, comment))
            .clone();
        tracing::debug!(comment_id = created.id, post_id = created.post_id, "Comment created");
        Ok(created)
    }

    async fn vote(
        &self,
        post_id: EntityId,
        user_id: EntityId,
        vote: Vote,
    ) -> Result<ForumPost, RepoError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .forum_posts
            .get_mut(post_id)
            .ok_or_else(|| RepoError::not_found("ForumPost", post_id))?;

        post.apply_vote(vote);
        tracing::debug!(post_id, user_id, ?vote, score = post.score(), "Vote recorded");
        Ok(post.clone())
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn list_course_categories(&self) -> Result<Vec<CourseCategory>, RepoError> {
        Ok(self.tables.read().await.course_categories.all())
    }

    async fn create_course_category(
        &self,
        category: NewCourseCategory,
    ) -> Result<CourseCategory, RepoError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .course_categories
            .insert_with(|id| CourseCategory::new(id, category))
            .clone())
    }

    async fn list_courses(&self, category_id: Option<EntityId>) -> Result<Vec<Course>, RepoError> {
        Ok(self
            .tables
            .read()
            .await
            .courses
            .select(|c| category_id.is_none_or(|id| c.category_id == id)))
    }

    async fn list_featured(&self) -> Result<Vec<Course>, RepoError> {
        Ok(self.tables.read().await.courses.select(|c| c.featured))
    }

    async fn find_course(&self, id: EntityId) -> Result<Option<Course>, RepoError> {
        Ok(self.tables.read().await.courses.snapshot(id))
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.course_categories.contains(course.category_id) {
            return Err(RepoError::not_found("CourseCategory", course.category_id));
        }
        Ok(tables.courses.insert_with(|id| Course::new(id, course)).clone())
    }
}

#[async_trait]
impl ProfessionalRepository for InMemoryStore {
    async fn list_specialties(&self) -> Result<Vec<ProfessionalSpecialty>, RepoError> {
        Ok(self.tables.read().await.specialties.all())
    }

    async fn create_specialty(
        &self,
        specialty: NewProfessionalSpecialty,
    ) -> Result<ProfessionalSpecialty, RepoError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .specialties
            .insert_with(|id| ProfessionalSpecialty::new(id, specialty))
            .clone())
    }

    async fn search_professionals(
        &self,
        query: ProfessionalQuery,
    ) -> Result<Vec<Professional>, RepoError> {
        let tables = self.tables.read().await;
        Ok(query.apply(tables.professionals.values()))
    }

    async fn find_professional(&self, id: EntityId) -> Result<Option<Professional>, RepoError> {
        Ok(self.tables.read().await.professionals.snapshot(id))
    }

    async fn create_professional(
        &self,
        professional: NewProfessional,
    ) -> Result<Professional, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.specialties.contains(professional.specialty_id) {
            return Err(RepoError::not_found(
                "ProfessionalSpecialty",
                professional.specialty_id,
            ));
        }
        Ok(tables
            .professionals
            .insert_with(|id| Professional::new(id, professional))
            .clone())
    }
}

#[async_trait]
impl ClinicalRepository for InMemoryStore {
    async fn list_clinical_categories(&self) -> Result<Vec<ClinicalCategory>, RepoError> {
        Ok(self.tables.read().await.clinical_categories.all())
    }

    async fn find_clinical_category(
        &self,
        id: EntityId,
    ) -> Result<Option<ClinicalCategory>, RepoError> {
        Ok(self.tables.read().await.clinical_categories.snapshot(id))
    }

    async fn create_clinical_category(
        &self,
        category: NewClinicalCategory,
    ) -> Result<ClinicalCategory, RepoError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .clinical_categories
            .insert_with(|id| ClinicalCategory::new(id, category))
            .clone())
    }

    async fn list_conditions(
        &self,
        category_id: Option<EntityId>,
    ) -> Result<Vec<ClinicalCondition>, RepoError> {
        Ok(self
            .tables
            .read()
            .await
            .clinical_conditions
            .select(|c| category_id.is_none_or(|id| c.category_id == id)))
    }

    async fn find_condition(&self, id: EntityId) -> Result<Option<ClinicalCondition>, RepoError> {
        Ok(self.tables.read().await.clinical_conditions.snapshot(id))
    }

    async fn create_condition(
        &self,
        condition: NewClinicalCondition,
    ) -> Result<ClinicalCondition, RepoError> {
        let mut tables = self.tables.write().await;
        if !tables.clinical_categories.contains(condition.category_id) {
            return Err(RepoError::not_found(
                "ClinicalCategory",
                condition.category_id,
            ));
        }
        Ok(tables
            .clinical_conditions
            .insert_with(|id| ClinicalCondition::new(id, condition))
            .clone())
    }
}
