use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ResourceType {
    Article,
    Video,
    Ebook,
    Tutorial,
    Tool,
    #[serde(rename = "Case Study")]
    CaseStudy,
}

impl ResourceType {
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Article,
        ResourceType::Video,
        ResourceType::Ebook,
        ResourceType::Tutorial,
        ResourceType::Tool,
        ResourceType::CaseStudy,
    ];

    /// Label used on the wire and in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Article => "Article",
            ResourceType::Video => "Video",
            ResourceType::Ebook => "Ebook",
            ResourceType::Tutorial => "Tutorial",
            ResourceType::Tool => "Tool",
            ResourceType::CaseStudy => "Case Study",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resource type: {0}")]
pub struct UnknownResourceType(pub String);

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        ResourceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| UnknownResourceType(raw.to_string()))
    }
}

/// A learning resource. `category` is the embedded owner of `category_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub cover_image: String,
    pub link: Option<String>,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub category_id: Uuid,
    pub category: Option<ResourceCategory>,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub read_time_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List filter; every set field must match, and every tag must be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceFilter {
    pub category_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub kind: Option<ResourceType>,
}
