//! Brainrot models for entities and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Brainrot entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brainrot {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    #[serde(rename = "baseHP")]
    pub base_hp: i32,
    #[serde(rename = "baseAttack")]
    pub base_attack: i32,
    #[serde(rename = "isBoss")]
    pub is_boss: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Input accepted by the service for create and update
#[derive(Debug, Clone, PartialEq)]
pub struct BrainrotInput {
    pub name: String,
    pub image: Option<String>,
    pub base_hp: i32,
    pub base_attack: i32,
    /// Treated as `false` when absent
    pub is_boss: Option<bool>,
}

/// Normalized payload handed to repositories.
///
/// Carries every mutable field of [`Brainrot`]; identity and creation time
/// are owned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrainrot {
    pub name: String,
    pub image: Option<String>,
    pub base_hp: i32,
    pub base_attack: i32,
    pub is_boss: bool,
}

/// Request body for `POST` and `PUT`.
///
/// Every field is optional here so a missing field turns into a 400 with a
/// fixed message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrainrotPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "baseHP")]
    pub base_hp: Option<i32>,
    #[serde(rename = "baseAttack")]
    pub base_attack: Option<i32>,
    #[serde(rename = "isBoss")]
    pub is_boss: Option<bool>,
}

impl BrainrotPayload {
    /// Check that `name`, `baseHP` and `baseAttack` are present.
    ///
    /// An empty name counts as missing.
    pub fn validate(self) -> Option<BrainrotInput> {
        let name = self.name.filter(|name| !name.is_empty())?;

        Some(BrainrotInput {
            name,
            image: self.image,
            base_hp: self.base_hp?,
            base_attack: self.base_attack?,
            is_boss: self.is_boss,
        })
    }
}
