use crate::modules::experience::application::ports::outgoing::ExperienceData;
use crate::shared::slug::experience_slug;
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub technologies: Vec<String>,
}

/// Validated experience fields; the slug is derived from title and company.
#[derive(Debug, Clone)]
pub struct ExperienceCommand {
    data: ExperienceData,
}

impl ExperienceCommand {
    pub fn new(input: ExperienceInput) -> Result<Self, ValidationError> {
        let title = validation::required("title", &input.title)?;
        let company = validation::required("company", &input.company)?;

        let slug = experience_slug(&title, &company);
        if slug.is_empty() {
            return Err(ValidationError::InvalidSlug("title"));
        }

        let start_date = validation::date("startDate", &input.start_date)?;
        let end_date = match validation::optional(input.end_date) {
            Some(raw) => Some(validation::date("endDate", &raw)?),
            None => None,
        };

        if matches!(end_date, Some(end) if end < start_date) {
            return Err(ValidationError::Inconsistent(
                "endDate must not be before startDate",
            ));
        }

        Ok(Self {
            data: ExperienceData {
                title,
                slug,
                company,
                description: validation::required("description", &input.description)?,
                start_date,
                end_date,
                technologies: validation::non_empty_list("technologies", input.technologies)?,
            },
        })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn into_data(self) -> ExperienceData {
        self.data
    }
}
