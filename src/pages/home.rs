use futures::try_join;

use crate::client::{ApiError, PortfolioApi};
use crate::entities::{PersonalInfo, Project};
use crate::snapshot::SkillGroup;

use super::skills::group_skills;
use super::state::PageMount;

/// The hero tech-stack strip shows at most this many entries.
pub const TECH_STACK_LIMIT: usize = 8;

/// Home page: personal info, featured projects and skills fetched as one
/// fan-out; the page stays in Loading until all three resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub personal_info: PersonalInfo,
    pub featured_projects: Vec<Project>,
    pub skill_groups: Vec<SkillGroup>,
    pub tech_stack: Vec<String>,
}

impl HomeView {
    pub async fn load(api: &PortfolioApi) -> Result<Self, ApiError> {
        let personal_info_api = api.personal_info();
        let projects_api = api.projects();
        let skills_api = api.skills();
        let (personal_info, featured_projects, skills) = try_join!(
            personal_info_api.get(),
            projects_api.get_featured(),
            skills_api.get_all(),
        )?;

        let tech_stack = tech_stack(&featured_projects);
        Ok(HomeView {
            personal_info,
            featured_projects,
            skill_groups: group_skills(&skills),
            tech_stack,
        })
    }

    pub fn mount(api: PortfolioApi) -> PageMount<HomeView> {
        PageMount::mount(move || {
            let api = api.clone();
            async move { HomeView::load(&api).await }
        })
    }
}

/// Distinct technologies across the featured projects, authored order,
/// truncated to the strip limit.
fn tech_stack(featured: &[Project]) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();
    for project in featured {
        for tech in &project.technologies {
            if !stack.contains(tech) {
                stack.push(tech.clone());
            }
        }
    }
    stack.truncate(TECH_STACK_LIMIT);
    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SNAPSHOT;

    #[test]
    fn tech_stack_is_deduplicated_and_capped() {
        let featured = SNAPSHOT.featured_projects();
        let stack = tech_stack(&featured);

        assert!(stack.len() <= TECH_STACK_LIMIT);
        let mut seen = stack.clone();
        seen.dedup();
        assert_eq!(seen.len(), stack.len());
        assert_eq!(stack.first().map(String::as_str), Some("Python"));
    }
}
