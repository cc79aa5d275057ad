//! PostgreSQL-backed Brainrot repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::BrainrotRepository;
use crate::models::{Brainrot, NewBrainrot};

/// Row shape of the `brainrots` table
#[derive(Debug, FromRow)]
struct BrainrotRow {
    id: Uuid,
    name: String,
    image: Option<String>,
    base_hp: i32,
    base_attack: i32,
    is_boss: bool,
    created_at: DateTime<Utc>,
}

impl From<BrainrotRow> for Brainrot {
    fn from(row: BrainrotRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            base_hp: row.base_hp,
            base_attack: row.base_attack,
            is_boss: row.is_boss,
            created_at: row.created_at,
        }
    }
}

/// Brainrot repository for database operations
#[derive(Clone)]
pub struct PgBrainrotRepository {
    pool: PgPool,
}

impl PgBrainrotRepository {
    /// Create a new Brainrot repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrainrotRepository for PgBrainrotRepository {
    async fn get_all(&self) -> DatabaseResult<Vec<Brainrot>> {
        let rows = sqlx::query_as::<_, BrainrotRow>(
            r#"
            SELECT id, name, image, base_hp, base_attack, is_boss, created_at
            FROM brainrots
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(rows.into_iter().map(Brainrot::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Brainrot>> {
        let row = sqlx::query_as::<_, BrainrotRow>(
            r#"
            SELECT id, name, image, base_hp, base_attack, is_boss, created_at
            FROM brainrots
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.map(Brainrot::from))
    }

    async fn create(&self, input: &NewBrainrot) -> DatabaseResult<Brainrot> {
        let id = Uuid::new_v4();
        debug!("Creating brainrot {}", id);

        let row = sqlx::query_as::<_, BrainrotRow>(
            r#"
            INSERT INTO brainrots (id, name, image, base_hp, base_attack, is_boss, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, image, base_hp, base_attack, is_boss, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .bind(input.base_hp)
        .bind(input.base_attack)
        .bind(input.is_boss)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, input: &NewBrainrot) -> DatabaseResult<Option<Brainrot>> {
        let row = sqlx::query_as::<_, BrainrotRow>(
            r#"
            UPDATE brainrots
            SET name = $2, image = $3, base_hp = $4, base_attack = $5, is_boss = $6
            WHERE id = $1
            RETURNING id, name, image, base_hp, base_attack, is_boss, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .bind(input.base_hp)
        .bind(input.base_attack)
        .bind(input.is_boss)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.map(Brainrot::from))
    }

    async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM brainrots
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::database::{DatabaseConfig, init_pool};

    async fn repository() -> PgBrainrotRepository {
        let pool = init_pool(&DatabaseConfig::default())
            .await
            .expect("database should be reachable");
        sqlx::raw_sql(include_str!("../../sql/brainrots.sql"))
            .execute(&pool)
            .await
            .expect("schema should apply");
        PgBrainrotRepository::new(pool)
    }

    fn input(name: &str) -> NewBrainrot {
        NewBrainrot {
            name: name.to_string(),
            image: None,
            base_hp: 100,
            base_attack: 20,
            is_boss: false,
        }
    }

    #[test]
    fn test_row_maps_to_entity() {
        let created_at = Utc::now();
        let id = Uuid::new_v4();
        let brainrot = Brainrot::from(BrainrotRow {
            id,
            name: "Bombardiro".to_string(),
            image: Some("bombardiro.png".to_string()),
            base_hp: 150,
            base_attack: 30,
            is_boss: true,
            created_at,
        });

        assert_eq!(brainrot.id, id);
        assert_eq!(brainrot.name, "Bombardiro");
        assert_eq!(brainrot.image.as_deref(), Some("bombardiro.png"));
        assert_eq!(brainrot.base_hp, 150);
        assert_eq!(brainrot.base_attack, 30);
        assert!(brainrot.is_boss);
        assert_eq!(brainrot.created_at, created_at);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_crud_round_trip() {
        let repo = repository().await;

        let created = repo.create(&input("Tung Tung")).await.unwrap();
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created.clone()));

        let mut replacement = input("Tung Tung Sahur");
        replacement.is_boss = true;
        let updated = repo.update(created.id, &replacement).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Tung Tung Sahur");
        assert!(updated.is_boss);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_update_missing_returns_none() {
        let repo = repository().await;
        let result = repo.update(Uuid::new_v4(), &input("Ghost")).await.unwrap();
        assert!(result.is_none());
    }
}
