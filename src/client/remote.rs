use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;
use uuid::Uuid;

use super::{
    error::ApiError,
    source::{ApiStatus, DataSource},
};
use crate::constants::{API_PREFIX, REQUEST_TIMEOUT_SECS};
use crate::entities::{
    Achievement, AchievementUpdate, Education, EducationUpdate, Experience, ExperienceUpdate,
    NewAchievement, NewEducation, NewExperience, NewProject, NewSkill, PersonalInfo,
    PersonalInfoUpdate, Project, ProjectUpdate, Skill, SkillUpdate,
};

/// HTTP transport for remote mode. All requests go to
/// `{backend}/api/{resource}` with a bounded timeout.
pub struct RemoteClient {
    http: reqwest::Client,
    base: Url,
}

impl RemoteClient {
    pub fn new(backend_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(backend_url.trim_end_matches('/'))
            .map_err(|e| ApiError::Transport(format!("Invalid backend URL: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(RemoteClient { http, base })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base.as_str().trim_end_matches('/'),
            API_PREFIX,
            path
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.endpoint(path)).send().await?;
        decode(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        decode(response).await
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.endpoint(path)).json(body).send().await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.endpoint(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(backend_error(status, response).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("Malformed response body: {e}")))
    } else {
        Err(backend_error(status, response).await)
    }
}

/// Non-success responses carry the failure reason in a `detail` body field
/// when the backend produced the error itself; otherwise fall back to the
/// status text.
async fn backend_error(status: StatusCode, response: Response) -> ApiError {
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    ApiError::Backend {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl DataSource for RemoteClient {
    async fn personal_info(&self) -> Result<PersonalInfo, ApiError> {
        self.get_json("/personal-info").await
    }

    async fn update_personal_info(
        &self,
        patch: PersonalInfoUpdate,
    ) -> Result<PersonalInfo, ApiError> {
        self.put_json("/personal-info", &patch).await
    }

    async fn all_experience(&self) -> Result<Vec<Experience>, ApiError> {
        self.get_json("/experience").await
    }

    async fn create_experience(&self, data: NewExperience) -> Result<Experience, ApiError> {
        self.post_json("/experience", &data).await
    }

    async fn update_experience(
        &self,
        id: Uuid,
        patch: ExperienceUpdate,
    ) -> Result<Experience, ApiError> {
        self.put_json(&format!("/experience/{id}"), &patch).await
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/experience/{id}")).await
    }

    async fn all_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects").await
    }

    async fn featured_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects/featured").await
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, ApiError> {
        self.post_json("/projects", &data).await
    }

    async fn update_project(&self, id: Uuid, patch: ProjectUpdate) -> Result<Project, ApiError> {
        self.put_json(&format!("/projects/{id}"), &patch).await
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{id}")).await
    }

    async fn all_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_json("/skills").await
    }

    async fn create_skill(&self, data: NewSkill) -> Result<Skill, ApiError> {
        self.post_json("/skills", &data).await
    }

    async fn update_skill(&self, id: Uuid, patch: SkillUpdate) -> Result<Skill, ApiError> {
        self.put_json(&format!("/skills/{id}"), &patch).await
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/skills/{id}")).await
    }

    async fn all_education(&self) -> Result<Vec<Education>, ApiError> {
        self.get_json("/education").await
    }

    async fn create_education(&self, data: NewEducation) -> Result<Education, ApiError> {
        self.post_json("/education", &data).await
    }

    async fn update_education(
        &self,
        id: Uuid,
        patch: EducationUpdate,
    ) -> Result<Education, ApiError> {
        self.put_json(&format!("/education/{id}"), &patch).await
    }

    async fn delete_education(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/education/{id}")).await
    }

    async fn all_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        self.get_json("/achievements").await
    }

    async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, ApiError> {
        self.post_json("/achievements", &data).await
    }

    async fn update_achievement(
        &self,
        id: Uuid,
        patch: AchievementUpdate,
    ) -> Result<Achievement, ApiError> {
        self.put_json(&format!("/achievements/{id}"), &patch).await
    }

    async fn delete_achievement(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/achievements/{id}")).await
    }

    async fn health(&self) -> Result<ApiStatus, ApiError> {
        self.get_json("").await
    }
}
