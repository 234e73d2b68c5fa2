use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::experience::application::ports::incoming::use_cases::ExperienceInput;
use crate::shared::list_input::StringList;

/// Body of `POST /api/experiences` and `PUT /api/experiences/{slug}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    #[schema(example = "2021-03-01")]
    pub start_date: String,
    /// Omit, `null` or `""` for the current position
    pub end_date: Option<String>,
    /// JSON array or comma-separated string
    #[schema(value_type = Vec<String>)]
    pub technologies: StringList,
}

impl From<ExperienceRequest> for ExperienceInput {
    fn from(req: ExperienceRequest) -> Self {
        ExperienceInput {
            title: req.title,
            company: req.company,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            technologies: req.technologies.into_vec(),
        }
    }
}
