use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Display year, free-form ("2023", "2023-24").
    pub year: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Award".to_string()
}

impl NewAchievement {
    pub fn into_record(self) -> Achievement {
        let now = Utc::now();
        Achievement {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            year: self.year,
            category: self.category,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AchievementUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub category: Option<String>,
}

impl AchievementUpdate {
    pub fn apply_to(&self, record: &mut Achievement) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(year) = &self.year {
            record.year = year.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        record.updated_at = Utc::now();
    }
}
