use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::use_cases::SkillInput;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[schema(example = "Rust")]
    pub name: String,
    pub category_id: Uuid,
    #[schema(example = 85)]
    pub proficiency: i32,
    pub order: Option<i32>,
}

impl From<SkillRequest> for SkillInput {
    fn from(req: SkillRequest) -> Self {
        SkillInput {
            name: req.name,
            category_id: req.category_id,
            proficiency: req.proficiency,
            order: req.order,
        }
    }
}
