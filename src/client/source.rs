use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ApiError;
use crate::entities::{
    Achievement, AchievementUpdate, Education, EducationUpdate, Experience, ExperienceUpdate,
    NewAchievement, NewEducation, NewExperience, NewProject, NewSkill, PersonalInfo,
    PersonalInfoUpdate, Project, ProjectUpdate, Skill, SkillUpdate,
};

/// Liveness answer from `GET /api`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
}

/// The seam between pages and wherever the content actually lives.
///
/// Two implementations exist: `RemoteClient` (HTTP against a configured
/// backend) and `SnapshotSource` (the bundled snapshot behind a simulated
/// delay). Pages only ever see this trait, so the static/remote decision is
/// made exactly once, at construction.
///
/// The mutating operations exist for API symmetry; no page calls them
/// during normal operation.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn personal_info(&self) -> Result<PersonalInfo, ApiError>;
    async fn update_personal_info(&self, patch: PersonalInfoUpdate)
    -> Result<PersonalInfo, ApiError>;

    async fn all_experience(&self) -> Result<Vec<Experience>, ApiError>;
    async fn create_experience(&self, data: NewExperience) -> Result<Experience, ApiError>;
    async fn update_experience(
        &self,
        id: Uuid,
        patch: ExperienceUpdate,
    ) -> Result<Experience, ApiError>;
    async fn delete_experience(&self, id: Uuid) -> Result<(), ApiError>;

    async fn all_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn featured_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn create_project(&self, data: NewProject) -> Result<Project, ApiError>;
    async fn update_project(&self, id: Uuid, patch: ProjectUpdate) -> Result<Project, ApiError>;
    async fn delete_project(&self, id: Uuid) -> Result<(), ApiError>;

    async fn all_skills(&self) -> Result<Vec<Skill>, ApiError>;
    async fn create_skill(&self, data: NewSkill) -> Result<Skill, ApiError>;
    async fn update_skill(&self, id: Uuid, patch: SkillUpdate) -> Result<Skill, ApiError>;
    async fn delete_skill(&self, id: Uuid) -> Result<(), ApiError>;

    async fn all_education(&self) -> Result<Vec<Education>, ApiError>;
    async fn create_education(&self, data: NewEducation) -> Result<Education, ApiError>;
    async fn update_education(
        &self,
        id: Uuid,
        patch: EducationUpdate,
    ) -> Result<Education, ApiError>;
    async fn delete_education(&self, id: Uuid) -> Result<(), ApiError>;

    async fn all_achievements(&self) -> Result<Vec<Achievement>, ApiError>;
    async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, ApiError>;
    async fn update_achievement(
        &self,
        id: Uuid,
        patch: AchievementUpdate,
    ) -> Result<Achievement, ApiError>;
    async fn delete_achievement(&self, id: Uuid) -> Result<(), ApiError>;

    async fn health(&self) -> Result<ApiStatus, ApiError>;
}
