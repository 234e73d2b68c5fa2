use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::resource_category::application::ports::incoming::use_cases::ResourceCategoryInput;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[schema(example = "#3b82f6")]
    pub color: Option<String>,
    /// Defaults to 0 on create; omitted on update keeps the stored value
    pub order: Option<i32>,
}

impl From<ResourceCategoryRequest> for ResourceCategoryInput {
    fn from(req: ResourceCategoryRequest) -> Self {
        ResourceCategoryInput {
            name: req.name,
            description: req.description,
            icon: req.icon,
            color: req.color,
            order: req.order,
        }
    }
}
