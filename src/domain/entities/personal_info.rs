use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Singleton profile record. Exactly one instance exists per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub profile_image: String,
    pub summary: String,
    pub tagline: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Merge-patch for the profile record. Only the populated fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    pub summary: Option<String>,
    pub tagline: Option<String>,
}

impl PersonalInfoUpdate {
    pub fn apply_to(&self, info: &mut PersonalInfo) {
        if let Some(name) = &self.name {
            info.name = name.clone();
        }
        if let Some(title) = &self.title {
            info.title = title.clone();
        }
        if let Some(email) = &self.email {
            info.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            info.phone = phone.clone();
        }
        if let Some(linkedin) = &self.linkedin {
            info.linkedin = linkedin.clone();
        }
        if let Some(location) = &self.location {
            info.location = location.clone();
        }
        if let Some(profile_image) = &self.profile_image {
            info.profile_image = profile_image.clone();
        }
        if let Some(summary) = &self.summary {
            info.summary = summary.clone();
        }
        if let Some(tagline) = &self.tagline {
            info.tagline = tagline.clone();
        }
        info.updated_at = Utc::now();
    }
}
