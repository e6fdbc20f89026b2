use async_trait::async_trait;
use uuid::Uuid;

use super::memory::MemoryStore;
use crate::entities::{Experience, ExperienceUpdate, NewExperience};
use crate::errors::AppError;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn list_experience(&self) -> Result<Vec<Experience>, AppError>;
    async fn create_experience(&self, data: NewExperience) -> Result<Experience, AppError>;
    async fn update_experience(
        &self,
        id: Uuid,
        patch: &ExperienceUpdate,
    ) -> Result<Experience, AppError>;
    async fn delete_experience(&self, id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl ExperienceRepository for MemoryStore {
    async fn list_experience(&self) -> Result<Vec<Experience>, AppError> {
        Ok(self.experience.read().clone())
    }

    async fn create_experience(&self, data: NewExperience) -> Result<Experience, AppError> {
        let record = data.into_record();
        self.experience.write().push(record.clone());
        Ok(record)
    }

    async fn update_experience(
        &self,
        id: Uuid,
        patch: &ExperienceUpdate,
    ) -> Result<Experience, AppError> {
        let mut guard = self.experience.write();
        let record = guard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Experience".into()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), AppError> {
        let mut guard = self.experience.write();
        let before = guard.len();
        guard.retain(|e| e.id != id);
        if guard.len() == before {
            return Err(AppError::NotFound("Experience".into()));
        }
        Ok(())
    }
}
