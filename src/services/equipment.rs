//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{split_by_date, CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
    services::filter::{filter_records, EquipmentFilter},
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }

    /// Filtered view over the whole log, newest first
    pub async fn search(&self, filter: &EquipmentFilter) -> AppResult<Vec<Equipment>> {
        let records = self.repository.equipment.list_all().await?;
        let (dated, _invalid) = split_by_date(records);
        Ok(filter_records(&dated, filter))
    }

    /// Records whose stored date does not parse. These are excluded from
    /// search and stats and surfaced here instead.
    pub async fn list_invalid(&self) -> AppResult<Vec<Equipment>> {
        let records = self.repository.equipment.list_all().await?;
        let (_dated, invalid) = split_by_date(records);
        Ok(invalid)
    }
}
