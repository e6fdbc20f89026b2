use parking_lot::RwLock;
use serde::Serialize;

use crate::entities::{Achievement, Education, Experience, PersonalInfo, Project, Skill};
use crate::snapshot::SNAPSHOT;

/// Process-local content store backing the API server. Vectors keep
/// authored order; there is no uniqueness enforcement beyond ids.
pub struct MemoryStore {
    pub(crate) personal_info: RwLock<Option<PersonalInfo>>,
    pub(crate) experience: RwLock<Vec<Experience>>,
    pub(crate) projects: RwLock<Vec<Project>>,
    pub(crate) skills: RwLock<Vec<Skill>>,
    pub(crate) education: RwLock<Vec<Education>>,
    pub(crate) achievements: RwLock<Vec<Achievement>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentCounts {
    pub personal_info: usize,
    pub experience: usize,
    pub projects: usize,
    pub skills: usize,
    pub education: usize,
    pub achievements: usize,
}

impl MemoryStore {
    pub fn empty() -> Self {
        MemoryStore {
            personal_info: RwLock::new(None),
            experience: RwLock::new(Vec::new()),
            projects: RwLock::new(Vec::new()),
            skills: RwLock::new(Vec::new()),
            education: RwLock::new(Vec::new()),
            achievements: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-populated with the bundled snapshot, reshaped through
    /// the same adapter static mode uses.
    pub fn seeded() -> Self {
        MemoryStore {
            personal_info: RwLock::new(Some(SNAPSHOT.personal_info.clone())),
            experience: RwLock::new(SNAPSHOT.experience.clone()),
            projects: RwLock::new(SNAPSHOT.all_projects()),
            skills: RwLock::new(SNAPSHOT.skills_flat()),
            education: RwLock::new(SNAPSHOT.education.clone()),
            achievements: RwLock::new(SNAPSHOT.achievements.clone()),
        }
    }

    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            personal_info: usize::from(self.personal_info.read().is_some()),
            experience: self.experience.read().len(),
            projects: self.projects.read().len(),
            skills: self.skills.read().len(),
            education: self.education.read().len(),
            achievements: self.achievements.read().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_matches_the_snapshot() {
        let store = MemoryStore::seeded();
        let counts = store.counts();

        assert_eq!(counts.personal_info, 1);
        assert_eq!(counts.experience, SNAPSHOT.experience.len());
        assert_eq!(counts.projects, SNAPSHOT.all_projects().len());
        assert_eq!(counts.skills, SNAPSHOT.skills_flat().len());
        assert_eq!(counts.education, SNAPSHOT.education.len());
        assert_eq!(counts.achievements, SNAPSHOT.achievements.len());
    }
}
