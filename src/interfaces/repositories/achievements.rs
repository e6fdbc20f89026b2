use async_trait::async_trait;
use uuid::Uuid;

use super::memory::MemoryStore;
use crate::entities::{Achievement, AchievementUpdate, NewAchievement};
use crate::errors::AppError;

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn list_achievements(&self) -> Result<Vec<Achievement>, AppError>;
    async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, AppError>;
    async fn update_achievement(
        &self,
        id: Uuid,
        patch: &AchievementUpdate,
    ) -> Result<Achievement, AppError>;
    async fn delete_achievement(&self, id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl AchievementRepository for MemoryStore {
    async fn list_achievements(&self) -> Result<Vec<Achievement>, AppError> {
        Ok(self.achievements.read().clone())
    }

    async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, AppError> {
        let record = data.into_record();
        self.achievements.write().push(record.clone());
        Ok(record)
    }

    async fn update_achievement(
        &self,
        id: Uuid,
        patch: &AchievementUpdate,
    ) -> Result<Achievement, AppError> {
        let mut guard = self.achievements.write();
        let record = guard
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound("Achievement".into()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete_achievement(&self, id: Uuid) -> Result<(), AppError> {
        let mut guard = self.achievements.write();
        let before = guard.len();
        guard.retain(|a| a.id != id);
        if guard.len() == before {
            return Err(AppError::NotFound("Achievement".into()));
        }
        Ok(())
    }
}
