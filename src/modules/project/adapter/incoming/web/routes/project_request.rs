use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::project::application::ports::incoming::use_cases::ProjectInput;

/// Body of `POST /api/projects` and `PUT /api/projects/{slug}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub cover_image: String,
    /// Empty string is treated as absent
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: String,
    pub technologies: Vec<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[schema(example = "2024-05-01")]
    pub published_at: String,
}

impl From<ProjectRequest> for ProjectInput {
    fn from(req: ProjectRequest) -> Self {
        ProjectInput {
            title: req.title,
            description: req.description,
            content: req.content,
            cover_image: req.cover_image,
            github_url: req.github_url,
            live_url: req.live_url,
            category: req.category,
            technologies: req.technologies,
            published_at: req.published_at,
        }
    }
}
