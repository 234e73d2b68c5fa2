use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::skill_category::application::ports::incoming::use_cases::SkillCategoryInput;

/// Body of POST and PUT. Empty strings count as absent.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryRequest {
    #[schema(example = "Backend")]
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
}

impl From<SkillCategoryRequest> for SkillCategoryInput {
    fn from(req: SkillCategoryRequest) -> Self {
        SkillCategoryInput {
            name: req.name,
            description: req.description,
            icon: req.icon,
            color: req.color,
            order: req.order,
        }
    }
}
