use futures::try_join;

use crate::client::{ApiError, PortfolioApi};
use crate::entities::{Achievement, Education, PersonalInfo};

use super::state::PageMount;

/// About page: profile summary plus education and achievements.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

impl AboutView {
    pub async fn load(api: &PortfolioApi) -> Result<Self, ApiError> {
        let personal_info_api = api.personal_info();
        let education_api = api.education();
        let achievements_api = api.achievements();
        let (personal_info, education, achievements) = try_join!(
            personal_info_api.get(),
            education_api.get_all(),
            achievements_api.get_all(),
        )?;

        Ok(AboutView {
            personal_info,
            education,
            achievements,
        })
    }

    pub fn mount(api: PortfolioApi) -> PageMount<AboutView> {
        PageMount::mount(move || {
            let api = api.clone();
            async move { AboutView::load(&api).await }
        })
    }
}
