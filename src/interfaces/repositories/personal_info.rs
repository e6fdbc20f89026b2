use async_trait::async_trait;

use super::memory::MemoryStore;
use crate::entities::{PersonalInfo, PersonalInfoUpdate};
use crate::errors::AppError;

#[async_trait]
pub trait PersonalInfoRepository: Send + Sync {
    /// Retrieves the singleton profile record
    async fn get_personal_info(&self) -> Result<PersonalInfo, AppError>;

    /// Applies a merge-patch to the profile record
    async fn update_personal_info(
        &self,
        patch: &PersonalInfoUpdate,
    ) -> Result<PersonalInfo, AppError>;
}

#[async_trait]
impl PersonalInfoRepository for MemoryStore {
    async fn get_personal_info(&self) -> Result<PersonalInfo, AppError> {
        self.personal_info
            .read()
            .clone()
            .ok_or_else(|| AppError::NotFound("Personal information".into()))
    }

    async fn update_personal_info(
        &self,
        patch: &PersonalInfoUpdate,
    ) -> Result<PersonalInfo, AppError> {
        let mut guard = self.personal_info.write();
        let info = guard
            .as_mut()
            .ok_or_else(|| AppError::NotFound("Personal information".into()))?;
        patch.apply_to(info);
        Ok(info.clone())
    }
}
