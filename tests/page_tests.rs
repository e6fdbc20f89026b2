use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use portfolio_site::{
    client::{ApiError, ApiStatus, DataMode, DataSource, Latency, PortfolioApi},
    entities::{
        Achievement, AchievementUpdate, Education, EducationUpdate, Experience, ExperienceUpdate,
        NewAchievement, NewEducation, NewExperience, NewProject, NewSkill, PersonalInfo,
        PersonalInfoUpdate, Project, ProjectUpdate, Skill, SkillUpdate,
    },
    pages::{AboutView, HomeView, PageMount, PageState, ProjectsView, SkillsView},
    snapshot::SNAPSHOT,
};

mock! {
    pub Source {}

    #[async_trait]
    impl DataSource for Source {
        async fn personal_info(&self) -> Result<PersonalInfo, ApiError>;
        async fn update_personal_info(
            &self,
            patch: PersonalInfoUpdate,
        ) -> Result<PersonalInfo, ApiError>;

        async fn all_experience(&self) -> Result<Vec<Experience>, ApiError>;
        async fn create_experience(&self, data: NewExperience) -> Result<Experience, ApiError>;
        async fn update_experience(
            &self,
            id: Uuid,
            patch: ExperienceUpdate,
        ) -> Result<Experience, ApiError>;
        async fn delete_experience(&self, id: Uuid) -> Result<(), ApiError>;

        async fn all_projects(&self) -> Result<Vec<Project>, ApiError>;
        async fn featured_projects(&self) -> Result<Vec<Project>, ApiError>;
        async fn create_project(&self, data: NewProject) -> Result<Project, ApiError>;
        async fn update_project(&self, id: Uuid, patch: ProjectUpdate) -> Result<Project, ApiError>;
        async fn delete_project(&self, id: Uuid) -> Result<(), ApiError>;

        async fn all_skills(&self) -> Result<Vec<Skill>, ApiError>;
        async fn create_skill(&self, data: NewSkill) -> Result<Skill, ApiError>;
        async fn update_skill(&self, id: Uuid, patch: SkillUpdate) -> Result<Skill, ApiError>;
        async fn delete_skill(&self, id: Uuid) -> Result<(), ApiError>;

        async fn all_education(&self) -> Result<Vec<Education>, ApiError>;
        async fn create_education(&self, data: NewEducation) -> Result<Education, ApiError>;
        async fn update_education(
            &self,
            id: Uuid,
            patch: EducationUpdate,
        ) -> Result<Education, ApiError>;
        async fn delete_education(&self, id: Uuid) -> Result<(), ApiError>;

        async fn all_achievements(&self) -> Result<Vec<Achievement>, ApiError>;
        async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, ApiError>;
        async fn update_achievement(
            &self,
            id: Uuid,
            patch: AchievementUpdate,
        ) -> Result<Achievement, ApiError>;
        async fn delete_achievement(&self, id: Uuid) -> Result<(), ApiError>;

        async fn health(&self) -> Result<ApiStatus, ApiError>;
    }
}

fn api_over(mock: MockSource) -> PortfolioApi {
    PortfolioApi::from_source(Arc::new(mock), DataMode::Remote)
}

#[tokio::test]
async fn home_page_settles_ready_from_the_snapshot() {
    let api = PortfolioApi::bundled_with(Latency::None);

    let mut mount = HomeView::mount(api);
    let state = mount.settled().await;

    let view = state.ready().expect("home page should reach Ready");
    assert_eq!(view.personal_info, SNAPSHOT.personal_info);
    assert_eq!(view.featured_projects, SNAPSHOT.featured_projects());
    assert!(view.tech_stack.len() <= portfolio_site::pages::home::TECH_STACK_LIMIT);
}

#[tokio::test]
async fn mount_starts_in_loading() {
    let mount: PageMount<()> = PageMount::mount(|| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    });

    assert!(mount.state().is_loading());
}

#[tokio::test]
async fn home_page_fails_with_the_backend_message() {
    let mut mock = MockSource::new();
    mock.expect_personal_info().returning(|| {
        Err(ApiError::Backend {
            status: 500,
            message: "profile store is down".into(),
        })
    });
    mock.expect_featured_projects().returning(|| Ok(vec![]));
    mock.expect_all_skills().returning(|| Ok(vec![]));

    let mut mount = HomeView::mount(api_over(mock));
    let state = mount.settled().await;

    let message = state.error().expect("home page should settle in Failed");
    assert!(message.contains("profile store is down"));
    assert!(!message.is_empty());
}

#[tokio::test]
async fn about_page_fails_when_any_branch_of_the_fan_out_fails() {
    let mut mock = MockSource::new();
    mock.expect_personal_info()
        .returning(|| Ok(SNAPSHOT.personal_info.clone()));
    mock.expect_all_education()
        .returning(|| Ok(SNAPSHOT.education.clone()));
    mock.expect_all_achievements()
        .returning(|| Err(ApiError::Transport("connection reset".into())));

    let mut mount = AboutView::mount(api_over(mock));
    let state = mount.settled().await;

    assert!(state.is_failed());
    assert!(state.error().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn retry_after_failure_reaches_ready() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    let mut mount = PageMount::mount(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if n == 0 {
                Err(ApiError::Transport("first attempt refused".into()))
            } else {
                Ok("recovered".to_string())
            }
        }
    });

    let state = mount.settled().await;
    assert!(state.is_failed());

    mount.retry();
    let state = mount.settled().await;
    assert_eq!(state, PageState::Ready("recovered".to_string()));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn dropping_a_mount_cancels_the_in_flight_fetch() {
    let completed = Arc::new(AtomicBool::new(false));
    let flag = completed.clone();

    let mount: PageMount<()> = PageMount::mount(move || {
        let flag = flag.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }
    });

    drop(mount);
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(!completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn projects_page_splits_featured_from_upcoming() {
    let api = PortfolioApi::bundled_with(Latency::None);

    let mut mount = ProjectsView::mount(api);
    let view = mount.settled().await.ready().cloned().expect("Ready");

    assert_eq!(view.featured, SNAPSHOT.projects.featured);
    assert_eq!(view.upcoming, SNAPSHOT.projects.upcoming);
    assert!(view.has_projects());
}

#[tokio::test]
async fn empty_project_list_is_ready_not_failed() {
    let mut mock = MockSource::new();
    mock.expect_all_projects().returning(|| Ok(vec![]));

    let mut mount = ProjectsView::mount(api_over(mock));
    let state = mount.settled().await;

    let view = state.ready().expect("an empty list is still Ready");
    assert!(!view.has_projects());
}

#[tokio::test]
async fn skills_page_rebuilds_the_authored_groups() {
    let api = PortfolioApi::bundled_with(Latency::None);

    let mut mount = SkillsView::mount(api);
    let view = mount.settled().await.ready().cloned().expect("Ready");

    assert_eq!(view.groups, SNAPSHOT.skill_groups);
}
