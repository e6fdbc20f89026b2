use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    #[validate(length(min = 1, message = "Degree cannot be empty"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Institution cannot be empty"))]
    pub institution: String,
    pub period: String,
    pub location: String,
    pub description: String,
}

impl NewEducation {
    pub fn into_record(self) -> Education {
        let now = Utc::now();
        Education {
            id: Uuid::new_v4(),
            degree: self.degree,
            institution: self.institution,
            period: self.period,
            location: self.location,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EducationUpdate {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl EducationUpdate {
    pub fn apply_to(&self, record: &mut Education) {
        if let Some(degree) = &self.degree {
            record.degree = degree.clone();
        }
        if let Some(institution) = &self.institution {
            record.institution = institution.clone();
        }
        if let Some(period) = &self.period {
            record.period = period.clone();
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        record.updated_at = Utc::now();
    }
}
