use crate::client::{ApiError, PortfolioApi};
use crate::entities::Project;

use super::state::PageMount;

/// Projects page: one fetch, split into featured work and the rest for
/// display. A successful-but-empty result is its own display state, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsView {
    pub featured: Vec<Project>,
    pub upcoming: Vec<Project>,
}

impl ProjectsView {
    pub async fn load(api: &PortfolioApi) -> Result<Self, ApiError> {
        let all = api.projects().get_all().await?;
        Ok(Self::from_projects(all))
    }

    pub fn from_projects(all: Vec<Project>) -> Self {
        let (featured, upcoming) = all.into_iter().partition(|p| p.is_featured);
        ProjectsView { featured, upcoming }
    }

    /// False means the page renders its "no projects" placeholder.
    pub fn has_projects(&self) -> bool {
        !self.featured.is_empty() || !self.upcoming.is_empty()
    }

    pub fn mount(api: PortfolioApi) -> PageMount<ProjectsView> {
        PageMount::mount(move || {
            let api = api.clone();
            async move { ProjectsView::load(&api).await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SNAPSHOT;

    #[test]
    fn split_preserves_every_project() {
        let all = SNAPSHOT.all_projects();
        let total = all.len();
        let view = ProjectsView::from_projects(all);

        assert_eq!(view.featured.len() + view.upcoming.len(), total);
        assert!(view.featured.iter().all(|p| p.is_featured));
        assert!(view.upcoming.iter().all(|p| !p.is_featured));
        assert!(view.has_projects());
    }

    #[test]
    fn empty_result_is_a_distinct_display_state() {
        let view = ProjectsView::from_projects(Vec::new());
        assert!(!view.has_projects());
    }
}
