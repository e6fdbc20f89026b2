use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use uuid::Uuid;

use super::{
    error::ApiError,
    source::{ApiStatus, DataSource},
};
use crate::entities::{
    Achievement, AchievementUpdate, Education, EducationUpdate, Experience, ExperienceUpdate,
    NewAchievement, NewEducation, NewExperience, NewProject, NewSkill, PersonalInfo,
    PersonalInfoUpdate, Project, ProjectUpdate, Skill, SkillUpdate,
};
use crate::snapshot::{SNAPSHOT, Snapshot};

/// Whether static-mode reads pause before resolving. The pause keeps the
/// loading-state UI exercised exactly as it is in remote mode; tests turn
/// it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Simulated,
    None,
}

// Base pauses per resource, in milliseconds. The spread is cosmetic UX
// pacing, not a protocol requirement.
const PERSONAL_INFO_MS: u64 = 100;
const EXPERIENCE_MS: u64 = 150;
const PROJECTS_MS: u64 = 200;
const SKILLS_MS: u64 = 150;
const EDUCATION_MS: u64 = 100;
const ACHIEVEMENTS_MS: u64 = 100;
const MUTATION_MS: u64 = 250;
const JITTER_MS: u64 = 50;

/// Static-mode data source: answers from the bundled snapshot, reshaped by
/// the snapshot's own adapter so the output matches what the remote API
/// would have returned. Mutations echo the input; nothing is persisted.
pub struct SnapshotSource {
    snapshot: &'static Snapshot,
    latency: Latency,
}

impl SnapshotSource {
    pub fn new(latency: Latency) -> Self {
        SnapshotSource {
            snapshot: &SNAPSHOT,
            latency,
        }
    }

    async fn linger(&self, base_ms: u64) {
        if self.latency == Latency::Simulated {
            let jitter = rand::thread_rng().gen_range(0..=JITTER_MS);
            tokio::time::sleep(Duration::from_millis(base_ms + jitter)).await;
        }
    }
}

#[async_trait]
impl DataSource for SnapshotSource {
    async fn personal_info(&self) -> Result<PersonalInfo, ApiError> {
        self.linger(PERSONAL_INFO_MS).await;
        Ok(self.snapshot.personal_info.clone())
    }

    async fn update_personal_info(
        &self,
        patch: PersonalInfoUpdate,
    ) -> Result<PersonalInfo, ApiError> {
        self.linger(MUTATION_MS).await;
        let mut info = self.snapshot.personal_info.clone();
        patch.apply_to(&mut info);
        Ok(info)
    }

    async fn all_experience(&self) -> Result<Vec<Experience>, ApiError> {
        self.linger(EXPERIENCE_MS).await;
        Ok(self.snapshot.experience.clone())
    }

    async fn create_experience(&self, data: NewExperience) -> Result<Experience, ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(data.into_record())
    }

    async fn update_experience(
        &self,
        id: Uuid,
        patch: ExperienceUpdate,
    ) -> Result<Experience, ApiError> {
        self.linger(MUTATION_MS).await;
        let mut record = self
            .snapshot
            .experience
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NoData(format!("Experience {id} is not in the snapshot")))?;
        patch.apply_to(&mut record);
        Ok(record)
    }

    async fn delete_experience(&self, _id: Uuid) -> Result<(), ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(())
    }

    async fn all_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.linger(PROJECTS_MS).await;
        Ok(self.snapshot.all_projects())
    }

    async fn featured_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.linger(PROJECTS_MS).await;
        Ok(self.snapshot.featured_projects())
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(data.into_record())
    }

    async fn update_project(&self, id: Uuid, patch: ProjectUpdate) -> Result<Project, ApiError> {
        self.linger(MUTATION_MS).await;
        let mut record = self
            .snapshot
            .all_projects()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NoData(format!("Project {id} is not in the snapshot")))?;
        patch.apply_to(&mut record);
        Ok(record)
    }

    async fn delete_project(&self, _id: Uuid) -> Result<(), ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(())
    }

    async fn all_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.linger(SKILLS_MS).await;
        Ok(self.snapshot.skills_flat())
    }

    async fn create_skill(&self, data: NewSkill) -> Result<Skill, ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(data.into_record())
    }

    async fn update_skill(&self, id: Uuid, patch: SkillUpdate) -> Result<Skill, ApiError> {
        self.linger(MUTATION_MS).await;
        let mut record = self
            .snapshot
            .skills_flat()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::NoData(format!("Skill {id} is not in the snapshot")))?;
        patch.apply_to(&mut record);
        Ok(record)
    }

    async fn delete_skill(&self, _id: Uuid) -> Result<(), ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(())
    }

    async fn all_education(&self) -> Result<Vec<Education>, ApiError> {
        self.linger(EDUCATION_MS).await;
        Ok(self.snapshot.education.clone())
    }

    async fn create_education(&self, data: NewEducation) -> Result<Education, ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(data.into_record())
    }

    async fn update_education(
        &self,
        id: Uuid,
        patch: EducationUpdate,
    ) -> Result<Education, ApiError> {
        self.linger(MUTATION_MS).await;
        let mut record = self
            .snapshot
            .education
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NoData(format!("Education {id} is not in the snapshot")))?;
        patch.apply_to(&mut record);
        Ok(record)
    }

    async fn delete_education(&self, _id: Uuid) -> Result<(), ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(())
    }

    async fn all_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        self.linger(ACHIEVEMENTS_MS).await;
        Ok(self.snapshot.achievements.clone())
    }

    async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(data.into_record())
    }

    async fn update_achievement(
        &self,
        id: Uuid,
        patch: AchievementUpdate,
    ) -> Result<Achievement, ApiError> {
        self.linger(MUTATION_MS).await;
        let mut record = self
            .snapshot
            .achievements
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NoData(format!("Achievement {id} is not in the snapshot")))?;
        patch.apply_to(&mut record);
        Ok(record)
    }

    async fn delete_achievement(&self, _id: Uuid) -> Result<(), ApiError> {
        self.linger(MUTATION_MS).await;
        Ok(())
    }

    async fn health(&self) -> Result<ApiStatus, ApiError> {
        self.linger(PERSONAL_INFO_MS).await;
        Ok(ApiStatus {
            message: "Portfolio API is running!".to_string(),
        })
    }
}
