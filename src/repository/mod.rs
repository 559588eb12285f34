//! Repository layer for database operations

pub mod equipment;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub equipment: equipment::EquipmentRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            pool,
        }
    }

    /// Cheap connectivity probe for readiness checks
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
