use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::AboutParagraph;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetAboutParagraphsError, GetAboutParagraphsUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetAboutParagraphsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetAboutParagraphsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAboutParagraphsUseCase for GetAboutParagraphsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AboutParagraph>, GetAboutParagraphsError> {
        self.query
            .list_about_paragraphs()
            .await
            .map_err(|e| GetAboutParagraphsError::QueryError(e.to_string()))
    }
}
