pub mod achievement;
pub mod education;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod skill;

pub use achievement::{Achievement, AchievementUpdate, NewAchievement};
pub use education::{Education, EducationUpdate, NewEducation};
pub use experience::{Experience, ExperienceUpdate, NewExperience};
pub use personal_info::{PersonalInfo, PersonalInfoUpdate};
pub use project::{NewProject, Project, ProjectStatus, ProjectUpdate};
pub use skill::{NewSkill, Skill, SkillCategory, SkillUpdate};
