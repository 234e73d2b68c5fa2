use crate::modules::resource_category::application::ports::outgoing::ResourceCategoryData;
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct ResourceCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct ResourceCategoryCommand {
    data: ResourceCategoryData,
}

impl ResourceCategoryCommand {
    pub fn new(input: ResourceCategoryInput) -> Result<Self, ValidationError> {
        let name = validation::required("name", &input.name)?;
        let slug = validation::slug_from("name", &name)?;

        Ok(Self {
            data: ResourceCategoryData {
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

    pub fn into_data(self) -> ResourceCategoryData {
        self.data
    }
}
