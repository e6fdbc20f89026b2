use crate::client::{ApiError, PortfolioApi};
use crate::entities::Experience;

use super::state::PageMount;

/// Experience page: employment records in authored order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceView {
    pub entries: Vec<Experience>,
}

impl ExperienceView {
    pub async fn load(api: &PortfolioApi) -> Result<Self, ApiError> {
        let entries = api.experience().get_all().await?;
        Ok(ExperienceView { entries })
    }

    pub fn mount(api: PortfolioApi) -> PageMount<ExperienceView> {
        PageMount::mount(move || {
            let api = api.clone();
            async move { ExperienceView::load(&api).await }
        })
    }
}
