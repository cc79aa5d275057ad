//! Brainrot service layer
//!
//! Applies input normalization and delegates to the injected repository.

use std::sync::Arc;

use common::error::DatabaseResult;
use uuid::Uuid;

use crate::{
    models::{Brainrot, BrainrotInput, NewBrainrot},
    repositories::BrainrotRepository,
};

/// Brainrot business operations
#[derive(Clone)]
pub struct BrainrotService {
    repository: Arc<dyn BrainrotRepository>,
}

impl BrainrotService {
    /// Create a new service over `repository`
    pub fn new(repository: Arc<dyn BrainrotRepository>) -> Self {
        Self { repository }
    }

    /// Fill in defaults for optional input fields
    fn normalize(input: BrainrotInput) -> NewBrainrot {
        NewBrainrot {
            name: input.name,
            image: input.image,
            base_hp: input.base_hp,
            base_attack: input.base_attack,
            is_boss: input.is_boss.unwrap_or(false),
        }
    }

    pub async fn get_all(&self) -> DatabaseResult<Vec<Brainrot>> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Brainrot>> {
        self.repository.get_by_id(id).await
    }

    pub async fn create(&self, input: BrainrotInput) -> DatabaseResult<Brainrot> {
        self.repository.create(&Self::normalize(input)).await
    }

    pub async fn update(&self, id: Uuid, input: BrainrotInput) -> DatabaseResult<Option<Brainrot>> {
        self.repository.update(id, &Self::normalize(input)).await
    }

    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryBrainrotRepository;

    fn service() -> BrainrotService {
        BrainrotService::new(Arc::new(InMemoryBrainrotRepository::new()))
    }

    fn input(name: &str, base_hp: i32, base_attack: i32, is_boss: Option<bool>) -> BrainrotInput {
        BrainrotInput {
            name: name.to_string(),
            image: None,
            base_hp,
            base_attack,
            is_boss,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_boss_flag() {
        let service = service();

        let created = service.create(input("Test", 100, 20, None)).await.unwrap();

        assert!(!created.is_boss);
        assert_eq!(created.name, "Test");
        assert_eq!(created.base_hp, 100);
        assert_eq!(created.base_attack, 20);
        assert!(created.image.is_none());
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_boss_flag() {
        let service = service();
        let created = service.create(input("Boss", 500, 50, Some(true))).await.unwrap();
        assert!(created.is_boss);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let service = service();
        let mut ids = std::collections::HashSet::new();
        for n in 0..20 {
            let created = service.create(input(&format!("rot-{n}"), 1, 1, None)).await.unwrap();
            assert!(ids.insert(created.id));
        }
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_identity() {
        let service = service();
        let created = service.create(input("Test", 100, 20, None)).await.unwrap();

        let updated = service
            .update(created.id, input("Updated", 150, 30, Some(true)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Updated");
        assert_eq!(updated.base_hp, 150);
        assert_eq!(updated.base_attack, 30);
        assert!(updated.is_boss);
    }

    #[tokio::test]
    async fn test_update_defaults_boss_flag() {
        let service = service();
        let created = service.create(input("Boss", 500, 50, Some(true))).await.unwrap();

        let updated = service
            .update(created.id, input("Boss", 500, 50, None))
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.is_boss);
    }

    #[tokio::test]
    async fn test_update_clears_image() {
        let service = service();
        let mut with_image = input("Pictured", 10, 10, None);
        with_image.image = Some("rot.png".to_string());
        let created = service.create(with_image).await.unwrap();
        assert_eq!(created.image.as_deref(), Some("rot.png"));

        let updated = service
            .update(created.id, input("Pictured", 10, 10, None))
            .await
            .unwrap()
            .unwrap();
        assert!(updated.image.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let service = service();
        let updated = service
            .update(Uuid::new_v4(), input("Updated", 150, 30, None))
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_lookup() {
        let service = service();
        let created = service.create(input("Test", 100, 20, None)).await.unwrap();

        assert!(service.delete(created.id).await.unwrap());
        assert!(service.get_by_id(created.id).await.unwrap().is_none());
        assert!(service.get_all().await.unwrap().is_empty());
        assert!(!service.delete(created.id).await.unwrap());
    }
}
