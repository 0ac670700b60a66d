use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalCategory {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewClinicalCategory {
    pub name: String,
    pub description: String,
}

impl ClinicalCategory {
    pub fn new(id: EntityId, new: NewClinicalCategory) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commonness {
    Rare,
    Occasional,
    Common,
}

/// Reference entry describing a clinical condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalCondition {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub symptoms: String,
    pub category_id: EntityId,
    pub image: String,
    pub treatment_info: Option<String>,
    pub severity: Severity,
    pub commonness: Commonness,
}

#[derive(Debug, Clone)]
pub struct NewClinicalCondition {
    pub name: String,
    pub description: String,
    pub symptoms: String,
    pub category_id: EntityId,
    pub image: String,
    pub treatment_info: Option<String>,
    pub severity: Severity,
    pub commonness: Commonness,
}

impl ClinicalCondition {
    pub fn new(id: EntityId, new: NewClinicalCondition) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            symptoms: new.symptoms,
            category_id: new.category_id,
            image: new.image,
            treatment_info: new.treatment_info,
            severity: new.severity,
            commonness: new.commonness,
        }
    }
}
