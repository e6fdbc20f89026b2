use async_trait::async_trait;
use uuid::Uuid;

use super::memory::MemoryStore;
use crate::entities::{Education, EducationUpdate, NewEducation};
use crate::errors::AppError;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list_education(&self) -> Result<Vec<Education>, AppError>;
    async fn create_education(&self, data: NewEducation) -> Result<Education, AppError>;
    async fn update_education(
        &self,
        id: Uuid,
        patch: &EducationUpdate,
    ) -> Result<Education, AppError>;
    async fn delete_education(&self, id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl EducationRepository for MemoryStore {
    async fn list_education(&self) -> Result<Vec<Education>, AppError> {
        Ok(self.education.read().clone())
    }

    async fn create_education(&self, data: NewEducation) -> Result<Education, AppError> {
        let record = data.into_record();
        self.education.write().push(record.clone());
        Ok(record)
    }

    async fn update_education(
        &self,
        id: Uuid,
        patch: &EducationUpdate,
    ) -> Result<Education, AppError> {
        let mut guard = self.education.write();
        let record = guard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Education".into()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete_education(&self, id: Uuid) -> Result<(), AppError> {
        let mut guard = self.education.write();
        let before = guard.len();
        guard.retain(|e| e.id != id);
        if guard.len() == before {
            return Err(AppError::NotFound("Education".into()));
        }
        Ok(())
    }
}
