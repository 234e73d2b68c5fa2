use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::resource::application::domain::entities::{ResourceFilter, ResourceType};
use crate::modules::resource::application::ports::incoming::use_cases::ResourceInput;
use crate::shared::list_input::StringList;
use crate::shared::validation::ValidationError;

/// Body of `POST /api/resources` and `PUT /api/resources/{slug}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub cover_image: String,
    pub link: Option<String>,
    /// One of `Article`, `Video`, `Ebook`, `Tutorial`, `Tool`, `Case Study`
    #[serde(rename = "type")]
    #[schema(example = "Article")]
    pub kind: String,
    pub category_id: Uuid,
    #[schema(value_type = Vec<String>)]
    pub tags: StringList,
    pub author: String,
    #[schema(example = "2024-01-15")]
    pub published_at: String,
    #[schema(minimum = 1)]
    pub read_time_minutes: Option<i32>,
}

impl From<ResourceRequest> for ResourceInput {
    fn from(req: ResourceRequest) -> Self {
        ResourceInput {
            title: req.title,
            description: req.description,
            content: req.content,
            cover_image: req.cover_image,
            link: req.link,
            kind: req.kind,
            category_id: req.category_id,
            tags: req.tags.into_vec(),
            author: req.author,
            published_at: req.published_at,
            read_time_minutes: req.read_time_minutes,
        }
    }
}

/// Query string of `GET /api/resources`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResourceListParams {
    /// Only resources of this category
    pub category_id: Option<String>,
    /// Comma separated; a resource must carry every tag
    pub tags: Option<String>,
    /// Resource type label
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl ResourceListParams {
    pub fn into_filter(self) -> Result<ResourceFilter, ValidationError> {
        let category_id = match self.category_id.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<Uuid>().map_err(|_| {
                ValidationError::UnsupportedValue {
                    field: "categoryId",
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let kind = match self.kind.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(raw.parse::<ResourceType>().map_err(|_| {
                ValidationError::UnsupportedValue {
                    field: "type",
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let tags = self
            .tags
            .map(|joined| StringList::Joined(joined).into_vec())
            .unwrap_or_default();

        Ok(ResourceFilter {
            category_id,
            tags,
            kind,
        })
    }
}
