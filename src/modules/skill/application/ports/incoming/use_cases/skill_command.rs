use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::SkillData;
use crate::shared::validation::{self, ValidationError};

const MIN_PROFICIENCY: i32 = 0;
const MAX_PROFICIENCY: i32 = 100;

#[derive(Debug, Clone)]
pub struct SkillInput {
    pub name: String,
    pub category_id: Uuid,
    pub proficiency: i32,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SkillCommand {
    data: SkillData,
}

impl SkillCommand {
    pub fn new(input: SkillInput) -> Result<Self, ValidationError> {
        let name = validation::required("name", &input.name)?;
        let slug = validation::slug_from("name", &name)?;

        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&input.proficiency) {
            return Err(ValidationError::OutOfRange {
                field: "proficiency",
                min: MIN_PROFICIENCY.into(),
                max: MAX_PROFICIENCY.into(),
            });
        }

        Ok(Self {
            data: SkillData {
                name,
                slug,
                proficiency: input.proficiency as i16,
                category_id: input.category_id,
                order: input.order,
            },
        })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn category_id(&self) -> Uuid {
        self.data.category_id
    }

    pub fn into_data(self) -> SkillData {
        self.data
    }
}
