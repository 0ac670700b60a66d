use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCategory {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCourseCategory {
    pub name: String,
    pub description: Option<String>,
}

impl CourseCategory {
    pub fn new(id: EntityId, new: NewCourseCategory) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
        }
    }
}

/// Course entity. `price` is in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category_id: EntityId,
    pub duration: String,
    pub price: u32,
    pub rating: f64,
    pub rating_count: u32,
    pub image: String,
    pub featured: bool,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category_id: EntityId,
    pub duration: String,
    pub price: u32,
    pub image: String,
    pub featured: bool,
}

impl Course {
    /// Ratings are collected after publication, so a new course starts unrated.
    pub fn new(id: EntityId, new: NewCourse) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            category_id: new.category_id,
            duration: new.duration,
            price: new.price,
            rating: 0.0,
            rating_count: 0,
            image: new.image,
            featured: new.featured,
        }
    }
}
