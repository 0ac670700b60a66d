//! Ports - trait definitions for the entity store.
//! Infrastructure provides the implementations; the HTTP layer consumes them.

mod repository;

pub use repository::{
    ClinicalRepository, ConnectionRepository, CourseRepository, ForumRepository,
    ProfessionalRepository, UserRepository,
};
