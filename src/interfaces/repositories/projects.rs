use async_trait::async_trait;
use uuid::Uuid;

use super::memory::MemoryStore;
use crate::entities::{NewProject, Project, ProjectUpdate};
use crate::errors::AppError;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// The isFeatured subset of `list_projects`, same order
    async fn featured_projects(&self) -> Result<Vec<Project>, AppError>;

    async fn create_project(&self, data: NewProject) -> Result<Project, AppError>;
    async fn update_project(&self, id: Uuid, patch: &ProjectUpdate) -> Result<Project, AppError>;
    async fn delete_project(&self, id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.read().clone())
    }

    async fn featured_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self
            .projects
            .read()
            .iter()
            .filter(|p| p.is_featured)
            .cloned()
            .collect())
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, AppError> {
        let record = data.into_record();
        self.projects.write().push(record.clone());
        Ok(record)
    }

    async fn update_project(&self, id: Uuid, patch: &ProjectUpdate) -> Result<Project, AppError> {
        let mut guard = self.projects.write();
        let record = guard
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Project".into()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), AppError> {
        let mut guard = self.projects.write();
        let before = guard.len();
        guard.retain(|p| p.id != id);
        if guard.len() == before {
            return Err(AppError::NotFound("Project".into()));
        }
        Ok(())
    }
}
