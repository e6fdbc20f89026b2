use async_trait::async_trait;
use uuid::Uuid;

use super::memory::MemoryStore;
use crate::entities::{NewSkill, Skill, SkillUpdate};
use crate::errors::AppError;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, data: NewSkill) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: Uuid, patch: &SkillUpdate) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl SkillRepository for MemoryStore {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.read().clone())
    }

    async fn create_skill(&self, data: NewSkill) -> Result<Skill, AppError> {
        let record = data.into_record();
        self.skills.write().push(record.clone());
        Ok(record)
    }

    async fn update_skill(&self, id: Uuid, patch: &SkillUpdate) -> Result<Skill, AppError> {
        let mut guard = self.skills.write();
        let record = guard
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Skill".into()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), AppError> {
        let mut guard = self.skills.write();
        let before = guard.len();
        guard.retain(|s| s.id != id);
        if guard.len() == before {
            return Err(AppError::NotFound("Skill".into()));
        }
        Ok(())
    }
}
