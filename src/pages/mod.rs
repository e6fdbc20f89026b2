//! Per-page view models and the mount lifecycle that drives them.
//!
//! Every page follows the same shape: one `load` that fans out to the
//! data-access layer, a `mount` that runs it under a `PageMount`, and a
//! view struct holding display-ready data.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
pub mod skills;
pub mod state;

pub use about::AboutView;
pub use contact::ContactView;
pub use experience::ExperienceView;
pub use home::HomeView;
pub use projects::ProjectsView;
pub use skills::{SkillsView, group_skills};
pub use state::{PageMount, PageState};
