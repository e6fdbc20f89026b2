use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One employment record. Achievements and technologies keep authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub is_current_job: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: String,
    pub period: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default = "default_current_job")]
    pub is_current_job: bool,
}

fn default_current_job() -> bool {
    true
}

impl NewExperience {
    pub fn into_record(self) -> Experience {
        let now = Utc::now();
        Experience {
            id: Uuid::new_v4(),
            company: self.company,
            role: self.role,
            period: self.period,
            location: self.location,
            employment_type: self.employment_type,
            description: self.description,
            achievements: self.achievements,
            technologies: self.technologies,
            is_current_job: self.is_current_job,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpdate {
    pub company: Option<String>,
    pub role: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub is_current_job: Option<bool>,
}

impl ExperienceUpdate {
    pub fn apply_to(&self, record: &mut Experience) {
        if let Some(company) = &self.company {
            record.company = company.clone();
        }
        if let Some(role) = &self.role {
            record.role = role.clone();
        }
        if let Some(period) = &self.period {
            record.period = period.clone();
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(employment_type) = &self.employment_type {
            record.employment_type = employment_type.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(achievements) = &self.achievements {
            record.achievements = achievements.clone();
        }
        if let Some(technologies) = &self.technologies {
            record.technologies = technologies.clone();
        }
        if let Some(is_current_job) = self.is_current_job {
            record.is_current_job = is_current_job;
        }
        record.updated_at = Utc::now();
    }
}
