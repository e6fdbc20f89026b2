use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// The fixed category set the UI icon picker recognises. Category membership
/// is the only relationship a skill participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Frameworks & Technologies")]
    Frameworks,
    #[serde(rename = "Databases")]
    Databases,
    #[serde(rename = "DevOps & Tools")]
    DevopsTools,
    #[serde(rename = "Core Concepts")]
    CoreConcepts,
}

impl SkillCategory {
    /// Display order of the category sections.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::DevopsTools,
        SkillCategory::CoreConcepts,
    ];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::Frameworks => "Frameworks & Technologies",
            SkillCategory::Databases => "Databases",
            SkillCategory::DevopsTools => "DevOps & Tools",
            SkillCategory::CoreConcepts => "Core Concepts",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub category: SkillCategory,
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub category: SkillCategory,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: u8,
    pub description: String,
}

impl NewSkill {
    pub fn into_record(self) -> Skill {
        let now = Utc::now();
        Skill {
            id: Uuid::new_v4(),
            category: self.category,
            name: self.name,
            level: self.level,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SkillUpdate {
    pub category: Option<SkillCategory>,
    pub name: Option<String>,
    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: Option<u8>,
    pub description: Option<String>,
}

impl SkillUpdate {
    pub fn apply_to(&self, record: &mut Skill) {
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(level) = self.level {
            record.level = level;
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        record.updated_at = Utc::now();
    }
}
