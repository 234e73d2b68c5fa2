use uuid::Uuid;

use crate::modules::resource::application::domain::entities::ResourceType;
use crate::modules::resource::application::ports::outgoing::ResourceData;
use crate::shared::validation::{self, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ResourceInput {
    pub title: String,
    pub description: String,
    pub content: String,
    pub cover_image: String,
    pub link: Option<String>,
    pub kind: String,
    pub category_id: Uuid,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: String,
    pub read_time_minutes: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ResourceCommand {
    data: ResourceData,
}

impl ResourceCommand {
    pub fn new(input: ResourceInput) -> Result<Self, ValidationError> {
        let title = validation::required("title", &input.title)?;
        let slug = validation::slug_from("title", &title)?;

        let kind_raw = validation::required("type", &input.kind)?;
        let kind = kind_raw
            .parse::<ResourceType>()
            .map_err(|_| ValidationError::UnsupportedValue {
                field: "type",
                value: kind_raw.clone(),
            })?;

        if matches!(input.read_time_minutes, Some(minutes) if minutes < 1) {
            return Err(ValidationError::OutOfRange {
                field: "readTimeMinutes",
                min: 1,
                max: i32::MAX as i64,
            });
        }

        Ok(Self {
            data: ResourceData {
                title,
                slug,
                description: validation::required("description", &input.description)?,
                content: validation::required("content", &input.content)?,
                cover_image: validation::required("coverImage", &input.cover_image)?,
                link: validation::optional(input.link),
                kind,
                category_id: input.category_id,
                tags: validation::non_empty_list("tags", input.tags)?,
                author: validation::required("author", &input.author)?,
                published_at: validation::date("publishedAt", &input.published_at)?,
                read_time_minutes: input.read_time_minutes,
            },
        })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn category_id(&self) -> Uuid {
        self.data.category_id
    }

    pub fn into_data(self) -> ResourceData {
        self.data
    }
}
