//! Domain entities - the core business objects.

mod clinical;
mod connection;
mod course;
mod forum;
mod professional;
mod user;

pub use clinical::{
    ClinicalCategory, ClinicalCondition, Commonness, NewClinicalCategory, NewClinicalCondition,
    Severity,
};
pub use connection::{Connection, ConnectionStatus, NewConnection};
pub use course::{Course, CourseCategory, NewCourse, NewCourseCategory};
pub use forum::{
    ForumCategory, ForumComment, ForumPost, NewForumCategory, NewForumComment, NewForumPost, Vote,
};
pub use professional::{NewProfessional, NewProfessionalSpecialty, Professional, ProfessionalSpecialty};
pub use user::{NewUser, User, UserPatch};

/// Store-assigned identifier. Positive, allocated per entity kind.
pub type EntityId = i64;
