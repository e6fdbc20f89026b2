use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Display status of a project. The wire format uses the human-readable
/// labels the site renders ("In Planning", not "in_planning").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Planning")]
    InPlanning,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    Concept,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InPlanning => "In Planning",
            ProjectStatus::ComingSoon => "Coming Soon",
            ProjectStatus::Concept => "Concept",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub highlights: Vec<String>,
    pub status: ProjectStatus,
    #[serde(rename = "type")]
    pub project_type: String,
    pub is_featured: bool,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub status: ProjectStatus,
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(default)]
    pub is_featured: bool,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
}

impl NewProject {
    pub fn into_record(self) -> Project {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            category: self.category,
            highlights: self.highlights,
            status: self.status,
            project_type: self.project_type,
            is_featured: self.is_featured,
            github_url: self.github_url,
            demo_url: self.demo_url,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub category: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub is_featured: Option<bool>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
}

impl ProjectUpdate {
    pub fn apply_to(&self, record: &mut Project) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(technologies) = &self.technologies {
            record.technologies = technologies.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(highlights) = &self.highlights {
            record.highlights = highlights.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(project_type) = &self.project_type {
            record.project_type = project_type.clone();
        }
        if let Some(is_featured) = self.is_featured {
            record.is_featured = is_featured;
        }
        if let Some(github_url) = &self.github_url {
            record.github_url = Some(github_url.clone());
        }
        if let Some(demo_url) = &self.demo_url {
            record.demo_url = Some(demo_url.clone());
        }
        record.updated_at = Utc::now();
    }
}
