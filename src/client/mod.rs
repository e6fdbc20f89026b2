//! The data-access layer: a uniform asynchronous accessor surface that
//! dispatches to either a remote backend or the bundled snapshot. The mode
//! is decided once, from explicit configuration, when the facade is built.

use std::sync::Arc;

use uuid::Uuid;

pub mod error;
mod fallback;
mod remote;
mod source;

pub use error::ApiError;
pub use fallback::{Latency, SnapshotSource};
pub use remote::RemoteClient;
pub use source::{ApiStatus, DataSource};

use crate::constants::{BACKEND_URL_PLACEHOLDERS, STATIC_HOST_SUFFIXES};
use crate::entities::{
    Achievement, AchievementUpdate, Education, EducationUpdate, Experience, ExperienceUpdate,
    NewAchievement, NewEducation, NewExperience, NewProject, NewSkill, PersonalInfo,
    PersonalInfoUpdate, Project, ProjectUpdate, Skill, SkillUpdate,
};
use crate::settings::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DataMode {
    #[display("remote")]
    Remote,
    #[display("static")]
    Static,
}

impl DataMode {
    /// Pure mode-selection rule. No backend URL, a placeholder value, or a
    /// static-hosting site host all mean there is nothing to call.
    pub fn detect(backend_url: Option<&str>, site_host: Option<&str>) -> DataMode {
        let url = backend_url.map(str::trim).unwrap_or("");
        if BACKEND_URL_PLACEHOLDERS.contains(&url.to_ascii_lowercase().as_str()) {
            return DataMode::Static;
        }

        if let Some(host) = site_host {
            let host = host.trim().to_ascii_lowercase();
            if STATIC_HOST_SUFFIXES
                .iter()
                .any(|suffix| host.ends_with(suffix))
            {
                return DataMode::Static;
            }
        }

        DataMode::Remote
    }
}

/// Entry point for everything the pages read. Cheap to clone.
#[derive(Clone)]
pub struct PortfolioApi {
    source: Arc<dyn DataSource>,
    mode: DataMode,
}

impl PortfolioApi {
    /// Builds the facade the way the application does at startup: detect
    /// the mode from config, then construct the matching source.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        match config.data_mode() {
            DataMode::Remote => {
                // data_mode() only returns Remote when a URL is present.
                let url = config.backend_url.as_deref().unwrap_or_default();
                Self::remote(url)
            }
            DataMode::Static => Ok(Self::bundled()),
        }
    }

    pub fn remote(backend_url: &str) -> Result<Self, ApiError> {
        Ok(PortfolioApi {
            source: Arc::new(RemoteClient::new(backend_url)?),
            mode: DataMode::Remote,
        })
    }

    /// Static mode with the usual simulated latency.
    pub fn bundled() -> Self {
        Self::bundled_with(Latency::Simulated)
    }

    pub fn bundled_with(latency: Latency) -> Self {
        PortfolioApi {
            source: Arc::new(SnapshotSource::new(latency)),
            mode: DataMode::Static,
        }
    }

    /// Injection seam for tests: any `DataSource` can stand in.
    pub fn from_source(source: Arc<dyn DataSource>, mode: DataMode) -> Self {
        PortfolioApi { source, mode }
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }

    pub fn personal_info(&self) -> PersonalInfoApi {
        PersonalInfoApi {
            source: self.source.clone(),
        }
    }

    pub fn experience(&self) -> ExperienceApi {
        ExperienceApi {
            source: self.source.clone(),
        }
    }

    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi {
            source: self.source.clone(),
        }
    }

    pub fn skills(&self) -> SkillsApi {
        SkillsApi {
            source: self.source.clone(),
        }
    }

    pub fn education(&self) -> EducationApi {
        EducationApi {
            source: self.source.clone(),
        }
    }

    pub fn achievements(&self) -> AchievementsApi {
        AchievementsApi {
            source: self.source.clone(),
        }
    }

    pub async fn health(&self) -> Result<ApiStatus, ApiError> {
        self.source.health().await
    }
}

pub struct PersonalInfoApi {
    source: Arc<dyn DataSource>,
}

impl PersonalInfoApi {
    pub async fn get(&self) -> Result<PersonalInfo, ApiError> {
        self.source.personal_info().await
    }

    pub async fn update(&self, patch: PersonalInfoUpdate) -> Result<PersonalInfo, ApiError> {
        self.source.update_personal_info(patch).await
    }
}

pub struct ExperienceApi {
    source: Arc<dyn DataSource>,
}

impl ExperienceApi {
    pub async fn get_all(&self) -> Result<Vec<Experience>, ApiError> {
        self.source.all_experience().await
    }

    pub async fn create(&self, data: NewExperience) -> Result<Experience, ApiError> {
        self.source.create_experience(data).await
    }

    pub async fn update(&self, id: Uuid, patch: ExperienceUpdate) -> Result<Experience, ApiError> {
        self.source.update_experience(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.source.delete_experience(id).await
    }
}

pub struct ProjectsApi {
    source: Arc<dyn DataSource>,
}

impl ProjectsApi {
    pub async fn get_all(&self) -> Result<Vec<Project>, ApiError> {
        self.source.all_projects().await
    }

    /// The subset of `get_all` flagged for prominent display.
    pub async fn get_featured(&self) -> Result<Vec<Project>, ApiError> {
        self.source.featured_projects().await
    }

    pub async fn create(&self, data: NewProject) -> Result<Project, ApiError> {
        self.source.create_project(data).await
    }

    pub async fn update(&self, id: Uuid, patch: ProjectUpdate) -> Result<Project, ApiError> {
        self.source.update_project(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.source.delete_project(id).await
    }
}

pub struct SkillsApi {
    source: Arc<dyn DataSource>,
}

impl SkillsApi {
    pub async fn get_all(&self) -> Result<Vec<Skill>, ApiError> {
        self.source.all_skills().await
    }

    pub async fn create(&self, data: NewSkill) -> Result<Skill, ApiError> {
        self.source.create_skill(data).await
    }

    pub async fn update(&self, id: Uuid, patch: SkillUpdate) -> Result<Skill, ApiError> {
        self.source.update_skill(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.source.delete_skill(id).await
    }
}

pub struct EducationApi {
    source: Arc<dyn DataSource>,
}

impl EducationApi {
    pub async fn get_all(&self) -> Result<Vec<Education>, ApiError> {
        self.source.all_education().await
    }

    pub async fn create(&self, data: NewEducation) -> Result<Education, ApiError> {
        self.source.create_education(data).await
    }

    pub async fn update(&self, id: Uuid, patch: EducationUpdate) -> Result<Education, ApiError> {
        self.source.update_education(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.source.delete_education(id).await
    }
}

pub struct AchievementsApi {
    source: Arc<dyn DataSource>,
}

impl AchievementsApi {
    pub async fn get_all(&self) -> Result<Vec<Achievement>, ApiError> {
        self.source.all_achievements().await
    }

    pub async fn create(&self, data: NewAchievement) -> Result<Achievement, ApiError> {
        self.source.create_achievement(data).await
    }

    pub async fn update(&self, id: Uuid, patch: AchievementUpdate) -> Result<Achievement, ApiError> {
        self.source.update_achievement(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.source.delete_achievement(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_backend_url_selects_static_mode() {
        assert_eq!(DataMode::detect(None, None), DataMode::Static);
    }

    #[test]
    fn placeholder_backend_urls_select_static_mode() {
        for placeholder in ["", "  ", "undefined", "null", "UNDEFINED", " null "] {
            assert_eq!(
                DataMode::detect(Some(placeholder), None),
                DataMode::Static,
                "placeholder {placeholder:?} should mean static mode"
            );
        }
    }

    #[test]
    fn static_hosting_domain_selects_static_mode() {
        for host in ["mysite.netlify.app", "me.github.io", "portfolio.vercel.app"] {
            assert_eq!(
                DataMode::detect(Some("https://api.example.com"), Some(host)),
                DataMode::Static
            );
        }
    }

    #[test]
    fn configured_backend_selects_remote_mode() {
        assert_eq!(
            DataMode::detect(Some("https://api.example.com"), Some("example.com")),
            DataMode::Remote
        );
        assert_eq!(
            DataMode::detect(Some("http://localhost:8080"), None),
            DataMode::Remote
        );
    }
}
