use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::geo::Coordinates;

/// User entity - a member profile shown in the connections feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub name: String,
    pub age: u32,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub interests: Vec<String>,
}

/// Profile fields supplied at signup.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub age: u32,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub interests: Vec<String>,
}

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub interests: Option<Vec<String>>,
}

impl User {
    pub fn new(id: EntityId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            name: new.name,
            age: new.age,
            bio: new.bio,
            avatar: new.avatar,
            latitude: new.latitude,
            longitude: new.longitude,
            interests: new.interests,
        }
    }

    /// Location for geo queries; `None` unless both parts are set.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    /// Shallow merge of the fields present in `patch`.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = Some(longitude);
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }
    }
}
