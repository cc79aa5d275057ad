//! In-process Brainrot repository

use async_trait::async_trait;
use chrono::Utc;
use common::error::DatabaseResult;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::BrainrotRepository;
use crate::models::{Brainrot, NewBrainrot};

/// Brainrot repository holding records in memory.
///
/// Records are kept newest first, so listing needs no sort.
#[derive(Default)]
pub struct InMemoryBrainrotRepository {
    items: RwLock<Vec<Brainrot>>,
}

impl InMemoryBrainrotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BrainrotRepository for InMemoryBrainrotRepository {
    async fn get_all(&self) -> DatabaseResult<Vec<Brainrot>> {
        Ok(self.items.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Brainrot>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, input: &NewBrainrot) -> DatabaseResult<Brainrot> {
        // Stamped under the lock so front insertion stays in created_at order.
        let mut items = self.items.write().await;
        let created = Brainrot {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            image: input.image.clone(),
            base_hp: input.base_hp,
            base_attack: input.base_attack,
            is_boss: input.is_boss,
            created_at: Utc::now(),
        };

        items.insert(0, created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: &NewBrainrot) -> DatabaseResult<Option<Brainrot>> {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        item.name = input.name.clone();
        item.image = input.image.clone();
        item.base_hp = input.base_hp;
        item.base_attack = input.base_attack;
        item.is_boss = input.is_boss;

        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn input(name: &str) -> NewBrainrot {
        NewBrainrot {
            name: name.to_string(),
            image: None,
            base_hp: 100,
            base_attack: 20,
            is_boss: false,
        }
    }

    #[tokio::test]
    async fn test_get_all_is_newest_first() {
        let repo = InMemoryBrainrotRepository::new();
        let first = repo.create(&input("first")).await.unwrap();
        let second = repo.create(&input("second")).await.unwrap();
        let third = repo.create(&input("third")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_stay_newest_first() {
        let repo = Arc::new(InMemoryBrainrotRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(&input(&format!("rot-{n}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 64);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let repo = InMemoryBrainrotRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_untouched() {
        let repo = InMemoryBrainrotRepository::new();
        let existing = repo.create(&input("kept")).await.unwrap();

        let result = repo.update(Uuid::new_v4(), &input("ghost")).await.unwrap();
        assert!(result.is_none());
        assert_eq!(repo.get_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = InMemoryBrainrotRepository::new();
        let existing = repo.create(&input("kept")).await.unwrap();

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
        assert_eq!(repo.get_all().await.unwrap(), vec![existing]);
    }
}
