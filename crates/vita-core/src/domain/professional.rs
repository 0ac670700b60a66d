use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::geo::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalSpecialty {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewProfessionalSpecialty {
    pub name: String,
}

impl ProfessionalSpecialty {
    pub fn new(id: EntityId, new: NewProfessionalSpecialty) -> Self {
        Self { id, name: new.name }
    }
}

/// Healthcare professional listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: EntityId,
    pub name: String,
    pub specialty_id: EntityId,
    pub bio: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: f64,
    pub rating_count: u32,
    pub avatar: String,
    pub experience: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewProfessional {
    pub name: String,
    pub specialty_id: EntityId,
    pub bio: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub avatar: String,
    pub experience: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
}

impl Professional {
    pub fn new(id: EntityId, new: NewProfessional) -> Self {
        Self {
            id,
            name: new.name,
            specialty_id: new.specialty_id,
            bio: new.bio,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            rating: 0.0,
            rating_count: 0,
            avatar: new.avatar,
            experience: new.experience,
            languages: new.languages,
            specializations: new.specializations,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }
}
