use crate::modules::skill_category::application::ports::outgoing::SkillCategoryData;
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct SkillCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
}

/// Validated skill category write. Blank optional strings are dropped.
#[derive(Debug, Clone)]
pub struct SkillCategoryCommand {
    data: SkillCategoryData,
}

impl SkillCategoryCommand {
    pub fn new(input: SkillCategoryInput) -> Result<Self, ValidationError> {
        let name = validation::required("name", &input.name)?;
        let slug = validation::slug_from("name", &name)?;

        Ok(Self {
            data: SkillCategoryData {
                name,
                slug,
                description: validation::optional(input.description),
                icon: validation::optional(input.icon),
                color: validation::optional(input.color),
                order: input.order,
            },
        })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn into_data(self) -> SkillCategoryData {
        self.data
    }
}
