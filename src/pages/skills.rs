use crate::client::{ApiError, PortfolioApi};
use crate::entities::Skill;
use crate::snapshot::SkillGroup;

use super::state::PageMount;

/// Skills page: the flat list from the API, regrouped into category
/// sections for display. Grouping is lossless; every skill lands in
/// exactly one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsView {
    pub groups: Vec<SkillGroup>,
}

impl SkillsView {
    pub async fn load(api: &PortfolioApi) -> Result<Self, ApiError> {
        let skills = api.skills().get_all().await?;
        Ok(SkillsView {
            groups: group_skills(&skills),
        })
    }

    pub fn mount(api: PortfolioApi) -> PageMount<SkillsView> {
        PageMount::mount(move || {
            let api = api.clone();
            async move { SkillsView::load(&api).await }
        })
    }
}

/// Groups a flat skill list by category, sections ordered by first
/// appearance so the authored order survives.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: skill.category,
                skills: vec![skill.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SNAPSHOT;

    #[test]
    fn regrouping_the_flat_list_reconstructs_the_authored_mapping() {
        let flat = SNAPSHOT.skills_flat();
        let groups = group_skills(&flat);
        assert_eq!(groups, SNAPSHOT.skill_groups);
    }

    #[test]
    fn grouping_drops_and_duplicates_nothing() {
        let flat = SNAPSHOT.skills_flat();
        let groups = group_skills(&flat);
        let regrouped_total: usize = groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(regrouped_total, flat.len());
    }
}
