//! Equipment repository
//!
//! Every mutation is a single statement that commits before returning, so a
//! successful create/update/delete is visible to the next `list_all` call,
//! including across process restarts.

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all equipment in storage order. Callers sort as needed.
    pub async fn list_all(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment. The id is assigned by the database and never reused.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, model, location, date)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.model)
        .bind(&data.location)
        .bind(&data.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update equipment, replacing all four non-id fields
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET name = ?, model = ?, location = ?, date = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.model)
        .bind(&data.location)
        .bind(&data.date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_repo() -> EquipmentRepository {
        // Single connection so every query sees the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        EquipmentRepository::new(pool)
    }

    fn create_req(name: &str, date: &str) -> CreateEquipment {
        CreateEquipment {
            name: name.to_string(),
            model: "M1".to_string(),
            location: "L1".to_string(),
            date: date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = test_repo().await;
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_round_trip() {
        let repo = test_repo().await;
        let created = repo.create(&create_req("Drill", "2024-01-01")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
        assert_eq!(all[0].name, "Drill");
        assert_eq!(all[0].model, "M1");
        assert_eq!(all[0].location, "L1");
        assert_eq!(all[0].date, "2024-01-01");
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = test_repo().await;
        let a = repo.create(&create_req("A", "2024-01-01")).await.unwrap();
        let b = repo.create(&create_req("B", "2024-01-02")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_deleted_id_is_never_reused() {
        let repo = test_repo().await;
        let a = repo.create(&create_req("A", "2024-01-01")).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.create(&create_req("B", "2024-01-02")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_and_is_idempotent() {
        let repo = test_repo().await;
        let created = repo.create(&create_req("Old", "2024-01-01")).await.unwrap();

        let update = UpdateEquipment {
            name: "New".to_string(),
            model: "M2".to_string(),
            location: "L2".to_string(),
            date: "2024-02-02".to_string(),
        };
        let first = repo.update(created.id, &update).await.unwrap();
        assert_eq!(first.id, created.id);
        assert_eq!(first.name, "New");
        assert_eq!(first.model, "M2");
        assert_eq!(first.location, "L2");
        assert_eq!(first.date, "2024-02-02");

        // Applying the same update twice leaves the record unchanged
        let second = repo.update(created.id, &update).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_delete_is_final() {
        let repo = test_repo().await;
        let created = repo.create(&create_req("Gone", "2024-01-01")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(repo.list_all().await.unwrap().is_empty());

        let update = UpdateEquipment {
            name: "X".to_string(),
            model: "X".to_string(),
            location: "X".to_string(),
            date: "2024-01-01".to_string(),
        };
        assert!(matches!(
            repo.update(created.id, &update).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let repo = test_repo().await;
        assert!(matches!(
            repo.get_by_id(42).await,
            Err(AppError::NotFound(_))
        ));
    }
}
