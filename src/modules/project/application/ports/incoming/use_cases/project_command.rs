use crate::modules::project::application::ports::outgoing::ProjectData;
use crate::shared::validation::{self, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub content: String,
    pub cover_image: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: String,
    pub technologies: Vec<String>,
    pub published_at: String,
}

//
// ──────────────────────────────────────────────────────────
// Command (validated, shared by create and update)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProjectCommand {
    data: ProjectData,
}

impl ProjectCommand {
    pub fn new(input: ProjectInput) -> Result<Self, ValidationError> {
        let title = validation::required("title", &input.title)?;
        let slug = validation::slug_from("title", &title)?;

        Ok(Self {
            data: ProjectData {
                slug,
                title,
                description: validation::required("description", &input.description)?,
                content: validation::required("content", &input.content)?,
                cover_image: validation::required("coverImage", &input.cover_image)?,
                github_url: validation::optional(input.github_url),
                live_url: validation::optional(input.live_url),
                category: validation::required("category", &input.category)?,
                technologies: validation::non_empty_list("technologies", input.technologies)?,
                published_at: validation::date("publishedAt", &input.published_at)?,
            },
        })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn into_data(self) -> ProjectData {
        self.data
    }
}
