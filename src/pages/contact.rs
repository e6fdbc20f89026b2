use crate::client::{ApiError, PortfolioApi};
use crate::entities::PersonalInfo;

use super::state::PageMount;

/// Contact page: just the profile's contact fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub personal_info: PersonalInfo,
}

impl ContactView {
    pub async fn load(api: &PortfolioApi) -> Result<Self, ApiError> {
        let personal_info = api.personal_info().get().await?;
        Ok(ContactView { personal_info })
    }

    pub fn mount(api: PortfolioApi) -> PageMount<ContactView> {
        PageMount::mount(move || {
            let api = api.clone();
            async move { ContactView::load(&api).await }
        })
    }
}
